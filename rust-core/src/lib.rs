//! Laue-group orientation library
//!
//! Crystal-symmetry-aware orientation math for EBSD texture analysis:
//! fundamental-zone reduction, disorientation, ODF/MDF binning, Schmid
//! factors, IPF colouring and pole figure sphere coordinates for the eleven
//! Laue classes.

pub mod config;
pub mod errors;
pub mod laue_ops;
pub mod orientation;
pub mod pole_figure;
pub mod symmetries;

pub use errors::{LaueError, LaueResult};
pub use laue_ops::{laue_ops, LaueOps, Rgb, SchmidFactor};
pub use symmetries::LaueGroup;

/// Common result type used throughout the library
pub type Result<T> = std::result::Result<T, Box<dyn std::error::Error + Send + Sync>>;

/// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
