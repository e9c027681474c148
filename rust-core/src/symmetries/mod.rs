// Symmetries module: Laue classes, their rotation operator tables and ODF bin grids
// Everything here is static per Laue class and built once by the registry

// ======================== MODULE DECLARATIONS ========================
pub mod bin_geometry;
pub mod laue_group;
pub mod symmetry_operations;
pub mod symmetry_point_groups;

mod _tests_symmetry_operations;

// ======================== LAUE CLASSES ========================
pub use laue_group::{
    LaueGroup,                      // enum - the 11 Laue classes, discriminant = crystal structure index
    MisorientationZonePolicy,       // enum - how misorientations are folded (sorted |axis| or orientation zone)
    ChiLimit,                       // enum - polar angle bound of the IPF unit triangle
    IpfTriangle,                    // struct - azimuth range and polar bound of the IPF unit triangle
    PoleFigureFamily,               // struct - label + canonical direction of a pole figure family
};

// LaueGroup impl methods:
//   ALL: [LaueGroup; 11]                                           - every class in crystal structure order
//   crystal_structure_index(self) -> u32                           - EBSD crystal structure index
//   from_crystal_structure(index: u32) -> LaueResult<Self>         - inverse of crystal_structure_index
//   symmetry_name(self) -> &'static str                            - e.g. "Cubic m-3 (Th)"
//   rotation_point_group(self) -> &'static str                     - e.g. "23"
//   has_inversion(self) -> bool                                    - always true for Laue classes
//   odf_max_angles(self) -> [f64; 3]                               - rotation angles bounding the ODF grid
//   max_disorientation_deg(self) -> f64                            - largest disorientation angle of the class
//   misorientation_policy(self) -> MisorientationZonePolicy
//   pole_figure_families(self) -> [PoleFigureFamily; 3]
//   ipf_triangle(self) -> IpfTriangle
//   cli_name(self) -> &'static str                                 - kebab-case name, also accepted by FromStr

// ======================== SYMMETRY OPERATIONS ========================
pub use symmetry_operations::{
    SymmetryOperator,               // struct - quaternion, Rodrigues and active matrix of one rotation
    OperatorTable,                  // struct - ordered, verified operator set of a rotation group
};
// SymmetryOperator impl methods:
//   from_quat(quat: Quat) -> Self                                  - derives Rodrigues and matrix forms
//   identity() -> Self
//   apply(&self, v: &Vector3<f64>) -> Vector3<f64>                 - rotates a crystal direction
//   order(&self) -> usize                                          - n for an n-fold rotation
//   same_rotation(&self, q: &Quat) -> bool                         - equality up to quaternion sign

// OperatorTable impl methods:
//   from_quats(quats: &[Quat]) -> Self
//   get(&self, index: usize) -> LaueResult<&SymmetryOperator>      - range-checked access
//   find(&self, q: &Quat) -> Option<usize>                         - index of an equal rotation
//   verify(&self, group: &str) -> LaueResult<()>                   - identity first, forms agree, closure

// ======================== POINT GROUP GENERATORS ========================
pub use symmetry_point_groups::{
    generate_symmetry_operations,        // fn(group: LaueGroup) -> Vec<Quat> - operators in table order

    // === SPECIFIC ROTATION GROUP GENERATORS ===
    generate_cubic_high_operations,      // fn() -> Vec<Quat> - 432, 24 operators
    generate_cubic_low_operations,       // fn() -> Vec<Quat> - 23, 12 operators
    generate_hexagonal_high_operations,  // fn() -> Vec<Quat> - 622, 12 operators
    generate_hexagonal_low_operations,   // fn() -> Vec<Quat> - 6, 6 operators
    generate_tetragonal_high_operations, // fn() -> Vec<Quat> - 422, 8 operators
    generate_tetragonal_low_operations,  // fn() -> Vec<Quat> - 4, 4 operators
    generate_trigonal_high_operations,   // fn() -> Vec<Quat> - 32, 6 operators
    generate_trigonal_low_operations,    // fn() -> Vec<Quat> - 3, 3 operators
    generate_orthorhombic_operations,    // fn() -> Vec<Quat> - 222, 4 operators
    generate_monoclinic_operations,      // fn() -> Vec<Quat> - 2 (b unique), 2 operators
    generate_triclinic_operations,       // fn() -> Vec<Quat> - 1, identity only
};

// ======================== BIN GRIDS ========================
pub use bin_geometry::{
    BinGeometry,                    // struct - homochoric ODF/MDF grid (init, num_bins, step per axis)
    homochoric_extent,              // fn(angle: f64) -> f64 - homochoric length of a rotation angle
};
// BinGeometry impl methods:
//   from_max_angles(max_angles: [f64; 3]) -> Self                  - 5° bins up to the given angles
//   size(&self) -> usize
//   bin_index(&self, ho: &Homochoric) -> usize                     - clamped flattened bin
//   flatten(&self, idx: [usize; 3]) -> usize
//   decode(&self, bin: usize) -> LaueResult<[usize; 3]>
//   sample(&self, random: [f64; 3], bin: usize) -> LaueResult<Homochoric>
