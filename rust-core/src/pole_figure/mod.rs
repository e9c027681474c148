// Pole figure module: sphere coordinates of crystal direction families and the projector seam
// Rasterization into images belongs to an IntensityProjector supplied by the caller

// ======================== MODULE DECLARATIONS ========================
pub mod generator;
pub mod pole_figure_config;
pub mod sphere_coords;


// ======================== CONFIGURATION ========================
pub use pole_figure_config::PoleFigureConfiguration; // struct - Euler buffer, image sizes, scale, labels, order
// PoleFigureConfiguration impl methods:
//   new(eulers: Vec<f32>, image_dim: usize, lambert_dim: usize) -> Self
//   with_labels(self, labels: impl IntoIterator<Item = impl Into<String>>) -> Self
//   with_order(self, order: Vec<usize>) -> Self
//   num_orientations(&self) -> usize
//   resolve_order(&self) -> LaueResult<[usize; 3]>                 - output position per family
//   label_or(&self, i: usize, default: &str) -> &str

// ======================== SPHERE COORDINATES ========================
pub use sphere_coords::SphereCoords; // struct - flat f32 xyz buffers, one per family
// SphereCoords impl methods:
//   family(&self, i: usize) -> LaueResult<&[f32]> / num_points(&self, i: usize) -> LaueResult<usize>
// LaueOps impl methods (sphere_coords.rs):
//   generate_sphere_coords(&self, eulers: &[f32], out: &mut SphereCoords) -> LaueResult<()> - rayon under "parallel"

// ======================== POLE FIGURES ========================
pub use generator::{
    IntensityProjector,             // trait - project(&self, xyz: &[f32], config) -> Vec<f64>
    PoleFigure,                     // struct - label, image_dim and intensity image of one family
};
// LaueOps impl methods (generator.rs):
//   generate_pole_figure(&self, config: &mut PoleFigureConfiguration, projector: &P) -> LaueResult<Vec<PoleFigure>>
