use std::f64::consts::FRAC_1_SQRT_2;

use crate::orientation::{quat_xyzw, Quat};
use crate::symmetries::laue_group::LaueGroup;

const H: f64 = 0.5;
const S: f64 = FRAC_1_SQRT_2;
// sqrt(3)/2
const R3: f64 = 0.866_025_403_784_438_6;

// Quaternion literals are scalar-last (x, y, z, w); index 0 is always the identity.
fn quats(table: &[[f64; 4]]) -> Vec<Quat> {
    table
        .iter()
        .map(|&[x, y, z, w]| quat_xyzw(x, y, z, w))
        .collect()
}

/// Proper rotations of the Laue class, in table order.
pub fn generate_symmetry_operations(group: LaueGroup) -> Vec<Quat> {
    match group {
        LaueGroup::HexagonalHigh => generate_hexagonal_high_operations(),
        LaueGroup::CubicHigh => generate_cubic_high_operations(),
        LaueGroup::HexagonalLow => generate_hexagonal_low_operations(),
        LaueGroup::CubicLow => generate_cubic_low_operations(),
        LaueGroup::Triclinic => generate_triclinic_operations(),
        LaueGroup::Monoclinic => generate_monoclinic_operations(),
        LaueGroup::OrthoRhombic => generate_orthorhombic_operations(),
        LaueGroup::TetragonalLow => generate_tetragonal_low_operations(),
        LaueGroup::TetragonalHigh => generate_tetragonal_high_operations(),
        LaueGroup::TrigonalLow => generate_trigonal_low_operations(),
        LaueGroup::TrigonalHigh => generate_trigonal_high_operations(),
    }
}

/// Rotation group 432 (Laue class m-3m)
pub fn generate_cubic_high_operations() -> Vec<Quat> {
    quats(&[
        [0.0, 0.0, 0.0, 1.0],
        // 2-fold about <100>
        [1.0, 0.0, 0.0, 0.0],
        [0.0, 1.0, 0.0, 0.0],
        [0.0, 0.0, 1.0, 0.0],
        // 4-fold about <100>
        [S, 0.0, 0.0, S],
        [0.0, S, 0.0, S],
        [0.0, 0.0, S, S],
        [-S, 0.0, 0.0, S],
        [0.0, -S, 0.0, S],
        [0.0, 0.0, -S, S],
        // 2-fold about <110>
        [S, S, 0.0, 0.0],
        [-S, S, 0.0, 0.0],
        [0.0, S, S, 0.0],
        [0.0, -S, S, 0.0],
        [S, 0.0, S, 0.0],
        [-S, 0.0, S, 0.0],
        // 3-fold about <111>
        [H, H, H, H],
        [-H, -H, -H, H],
        [H, -H, H, H],
        [-H, H, -H, H],
        [-H, H, H, H],
        [H, -H, -H, H],
        [-H, -H, H, H],
        [H, H, -H, H],
    ])
}

/// Rotation group 23 (Laue class m-3)
pub fn generate_cubic_low_operations() -> Vec<Quat> {
    quats(&[
        [0.0, 0.0, 0.0, 1.0],
        [1.0, 0.0, 0.0, 0.0],
        [0.0, 1.0, 0.0, 0.0],
        [0.0, 0.0, 1.0, 0.0],
        [H, H, H, H],
        [-H, -H, -H, H],
        [H, -H, H, H],
        [-H, H, -H, H],
        [-H, H, H, H],
        [H, -H, -H, H],
        [-H, -H, H, H],
        [H, H, -H, H],
    ])
}

/// Rotation group 622 (Laue class 6/mmm)
pub fn generate_hexagonal_high_operations() -> Vec<Quat> {
    let mut ops = generate_hexagonal_low_operations();
    // 2-fold axes in the basal plane every 30°
    ops.extend(quats(&[
        [1.0, 0.0, 0.0, 0.0],
        [R3, H, 0.0, 0.0],
        [H, R3, 0.0, 0.0],
        [0.0, 1.0, 0.0, 0.0],
        [-H, R3, 0.0, 0.0],
        [-R3, H, 0.0, 0.0],
    ]));
    ops
}

/// Rotation group 6 (Laue class 6/m)
pub fn generate_hexagonal_low_operations() -> Vec<Quat> {
    quats(&[
        [0.0, 0.0, 0.0, 1.0],
        [0.0, 0.0, H, R3],
        [0.0, 0.0, R3, H],
        [0.0, 0.0, 1.0, 0.0],
        [0.0, 0.0, -R3, H],
        [0.0, 0.0, -H, R3],
    ])
}

/// Rotation group 422 (Laue class 4/mmm)
pub fn generate_tetragonal_high_operations() -> Vec<Quat> {
    quats(&[
        [0.0, 0.0, 0.0, 1.0],
        [1.0, 0.0, 0.0, 0.0],
        [0.0, 1.0, 0.0, 0.0],
        [0.0, 0.0, 1.0, 0.0],
        [0.0, 0.0, S, S],
        [0.0, 0.0, -S, S],
        [S, S, 0.0, 0.0],
        [-S, S, 0.0, 0.0],
    ])
}

/// Rotation group 4 (Laue class 4/m)
pub fn generate_tetragonal_low_operations() -> Vec<Quat> {
    quats(&[
        [0.0, 0.0, 0.0, 1.0],
        [0.0, 0.0, 1.0, 0.0],
        [0.0, 0.0, S, S],
        [0.0, 0.0, -S, S],
    ])
}

/// Rotation group 32 (Laue class -3m)
pub fn generate_trigonal_high_operations() -> Vec<Quat> {
    let mut ops = generate_trigonal_low_operations();
    ops.extend(quats(&[
        [1.0, 0.0, 0.0, 0.0],
        [-H, R3, 0.0, 0.0],
        [-H, -R3, 0.0, 0.0],
    ]));
    ops
}

/// Rotation group 3 (Laue class -3)
pub fn generate_trigonal_low_operations() -> Vec<Quat> {
    quats(&[
        [0.0, 0.0, 0.0, 1.0],
        [0.0, 0.0, R3, H],
        [0.0, 0.0, -R3, H],
    ])
}

/// Rotation group 222 (Laue class mmm)
pub fn generate_orthorhombic_operations() -> Vec<Quat> {
    quats(&[
        [0.0, 0.0, 0.0, 1.0],
        [1.0, 0.0, 0.0, 0.0],
        [0.0, 1.0, 0.0, 0.0],
        [0.0, 0.0, 1.0, 0.0],
    ])
}

/// Rotation group 2 with the 2-fold axis along b (Laue class 2/m)
pub fn generate_monoclinic_operations() -> Vec<Quat> {
    quats(&[[0.0, 0.0, 0.0, 1.0], [0.0, 1.0, 0.0, 0.0]])
}

/// Rotation group 1 (Laue class -1)
pub fn generate_triclinic_operations() -> Vec<Quat> {
    quats(&[[0.0, 0.0, 0.0, 1.0]])
}
