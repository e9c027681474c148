// Orientation module: representations of a rotation and conversions between them
// The Laue engine only consumes these; it never defines its own conversions

// ======================== MODULE DECLARATIONS ========================
pub mod orientation_types;
pub mod transforms;


// ======================== REPRESENTATIONS ========================
pub use orientation_types::{
    Quat,                           // type - unit quaternion (nalgebra), scalar-last storage
    Euler,                          // struct - Bunge Euler angles (φ1, Φ, φ2) in radians
    AxisAngle,                      // struct - unit axis + angle in radians
    Rodrigues,                      // struct - unit axis + w = tan(θ/2), 180° capped at ROD_INFINITY
    Homochoric,                     // struct - equal-volume vector
    quat_xyzw,                      // fn(x, y, z, w) -> Quat - builds a normalized quaternion from scalar-last components
    positive_quat,                  // fn(q: &Quat) -> Quat - flips q into the w >= 0 hemisphere
    quat_to_f64,                    // fn(q: &UnitQuaternion<f32>) -> Quat - widens a single precision quaternion
};

// ======================== CONVERSIONS ========================
pub use transforms::{
    euler_to_quat,                  // fn(eu: &Euler) -> Quat
    quat_to_euler,                  // fn(q: &Quat) -> Euler
    euler_to_matrix,                // fn(eu: &Euler) -> Matrix3<f64> - passive orientation matrix g
    quat_to_matrix,                 // fn(q: &Quat) -> Matrix3<f64> - passive orientation matrix g = R(q)^T
    quat_to_axis_angle,             // fn(q: &Quat) -> AxisAngle
    axis_angle_to_quat,             // fn(ax: &AxisAngle) -> Quat
    quat_to_rodrigues,              // fn(q: &Quat) -> Rodrigues
    rodrigues_to_quat,              // fn(ro: &Rodrigues) -> Quat
    axis_angle_to_rodrigues,        // fn(ax: &AxisAngle) -> Rodrigues
    rodrigues_to_axis_angle,        // fn(ro: &Rodrigues) -> AxisAngle
    rodrigues_to_euler,             // fn(ro: &Rodrigues) -> Euler
    euler_to_rodrigues,             // fn(eu: &Euler) -> Rodrigues
    axis_angle_to_homochoric,       // fn(ax: &AxisAngle) -> Homochoric
    homochoric_to_axis_angle,       // fn(ho: &Homochoric) -> AxisAngle
    rodrigues_to_homochoric,        // fn(ro: &Rodrigues) -> Homochoric
    homochoric_to_rodrigues,        // fn(ho: &Homochoric) -> Rodrigues
    sample_to_crystal,              // fn(g: &Matrix3<f64>, v: &Vector3<f64>) -> Vector3<f64>
};
