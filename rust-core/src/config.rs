// Constants

// Tolerances
pub const OPERATOR_TOLERANCE: f64 = 1e-10; // For operator table consistency checks
pub const ANGLE_TOLERANCE: f64 = 1e-12; // Below this a rotation angle counts as zero
pub const HOMOCHORIC_SOLVER_TOLERANCE: f64 = 1e-15; // Newton/bisection stop criterion (radians)
pub const HOMOCHORIC_SOLVER_MAX_ITER: usize = 100;
pub const FZ_TIE_TOLERANCE: f64 = 1e-10; // Relative squared-norm gap under which zone candidates tie

// Rodrigues vectors of 180° rotations have w = tan(π/2); this finite value stands in for it
pub const ROD_INFINITY: f64 = 1e13;

// Angular width of one ODF/MDF bin along each homochoric axis, in degrees
pub const ODF_BIN_RESOLUTION_DEG: f64 = 5.0;
