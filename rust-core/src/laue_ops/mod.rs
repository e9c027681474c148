// Laue operations module: symmetry-aware orientation math for one Laue class
// Every operation runs over the operator table of a shared, read-only LaueOps

// ======================== MODULE DECLARATIONS ========================
pub mod binning;
pub mod engine;
pub mod fundamental_zone;
pub mod ipf;
pub mod misorientation;
pub mod schmid;

// Test modules
mod _tests_binning;
mod _tests_engine;

// ======================== ENGINE & REGISTRY ========================
pub use engine::{
    LaueOps,                        // struct - operator table, ODF grid and pole figure families of one Laue class
    laue_ops,                       // fn(group: LaueGroup) -> &'static LaueOps - shared engine, built on first use
    all_laue_ops,                   // fn() -> &'static [LaueOps; 11] - every engine in crystal structure order
};

// LaueOps impl methods (engine.rs):
//   new(group: LaueGroup) -> Self                                  - builds table, grid and families
//   verify(&self) -> LaueResult<()>                                - operator table consistency check
//   num_sym_ops(&self) -> usize
//   odf_num_bins(&self) -> [usize; 3]
//   odf_size(&self) -> usize / mdf_size(&self) -> usize
//   mdf_plot_bins(&self) -> usize                                  - 5° angle bins up to the largest disorientation
//   family_directions(&self, i: usize) -> LaueResult<&[Vector3<f64>]> - distinct directions of pole figure family i
//   num_symmetry(&self) -> [usize; 3]                              - sphere points per orientation per family
//   symmetry_name / rotation_point_group / has_inversion / default_pole_figure_names
//   quat_sym_op / rod_sym_op / mat_sym_op(&self, i: usize) -> LaueResult<_> - range-checked operator access

// ======================== FUNDAMENTAL ZONES ========================
pub use fundamental_zone::{
    compose_rodrigues,              // fn(a, b: &Vector3<f64>) -> Vector3<f64> - Rodrigues vector of a ⊗ b
    sort_abs_descending,            // fn(n: &Vector3<f64>) -> Vector3<f64> - |components| in descending order
};
// LaueOps impl methods (fundamental_zone.rs):
//   reduce_to_fundamental_zone(&self, rod: &Rodrigues) -> Rodrigues        - equivalent nearest the origin, boundary ties by component order
//   reduce_to_misorientation_zone(&self, rod: &Rodrigues) -> Rodrigues     - MDF zone representative

// LaueOps impl methods (misorientation.rs):
//   misorientation(&self, q1: &Quat, q2: &Quat) -> AxisAngle               - disorientation angle and axis
//   misorientation_f32(&self, q1, q2: &UnitQuaternion<f32>) -> AxisAngle
//   nearest_symmetric_equivalent(&self, q1: &Quat, q2: &Quat) -> Quat      - q2 ⊗ s closest to q1
//   nearest_symmetric_equivalent_f32(&self, q1, q2: &UnitQuaternion<f32>) -> UnitQuaternion<f32>
//   randomize_euler_angles(&self, eu: &Euler, rng: &mut R) -> Euler        - random symmetric equivalent

// LaueOps impl methods (binning.rs):
//   odf_bin(&self, rod: &Rodrigues) -> usize
//   mdf_bin(&self, rod: &Rodrigues) -> usize
//   sample_orientation_from_bin(&self, random: [f64; 3], bin: usize) -> LaueResult<Euler>
//   sample_misorientation_from_bin(&self, random: [f64; 3], bin: usize) -> LaueResult<Rodrigues>

// ======================== SLIP ========================
pub use schmid::SchmidFactor;       // struct - factor, [φ, λ] and winning operator index
// LaueOps impl methods (schmid.rs):
//   schmid_factor(&self, load, plane, direction: &Vector3<f64>) -> SchmidFactor

// ======================== COLOURING ========================
pub use ipf::Rgb;                   // struct - packed ARGB8 colour
// LaueOps impl methods (ipf.rs):
//   ipf_color(&self, eu: &Euler, reference: &Vector3<f64>) -> Rgb
//   ipf_color_degrees(&self, eu_deg: &Euler, reference: &Vector3<f64>) -> Rgb
//   ipf_color_angle_limits(&self, eta: f64) -> [f64; 3]                    - [η_min, η_max, χ_max]
//   in_unit_triangle(&self, eta: f64, chi: f64) -> bool
//   rodrigues_color(&self, r1: f64, r2: f64, r3: f64) -> Rgb
