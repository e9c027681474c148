// Orientation transforms between Euler angles, orientation matrices, quaternions,
// axis-angle pairs, Rodrigues vectors and homochoric vectors.
//
// Conventions: Bunge passive Euler angles; a quaternion q describes the same
// orientation as the matrix g = R(q)^T, where R(q) is the active (Hamilton)
// rotation matrix. All angles are radians.

use nalgebra::{Matrix3, Quaternion, UnitQuaternion, Vector3};
use std::f64::consts::{PI, TAU};

use crate::config::{HOMOCHORIC_SOLVER_MAX_ITER, HOMOCHORIC_SOLVER_TOLERANCE, ROD_INFINITY};
use crate::orientation::orientation_types::{
    positive_quat, AxisAngle, Euler, Homochoric, Quat, Rodrigues,
};

// ======================== EULER ANGLES ========================

/// Euler angles → quaternion with non-negative scalar part.
pub fn euler_to_quat(eu: &Euler) -> Quat {
    let sigma = 0.5 * (eu.phi1 + eu.phi2);
    let delta = 0.5 * (eu.phi1 - eu.phi2);
    let c = (0.5 * eu.phi).cos();
    let s = (0.5 * eu.phi).sin();

    let q = Quaternion::new(
        c * sigma.cos(),
        s * delta.cos(),
        s * delta.sin(),
        c * sigma.sin(),
    );
    positive_quat(&UnitQuaternion::new_normalize(q))
}

/// Quaternion → Euler angles with φ1, φ2 in [0, 2π) and Φ in [0, π].
pub fn quat_to_euler(q: &Quat) -> Euler {
    let (q0, q1, q2, q3) = (q.w, q.i, q.j, q.k);
    let q03 = q0 * q0 + q3 * q3;
    let q12 = q1 * q1 + q2 * q2;
    let chi = (q03 * q12).sqrt();

    let (phi1, phi, phi2) = if chi == 0.0 {
        if q12 == 0.0 {
            ((2.0 * q0 * q3).atan2(q0 * q0 - q3 * q3), 0.0, 0.0)
        } else {
            ((2.0 * q1 * q2).atan2(q1 * q1 - q2 * q2), PI, 0.0)
        }
    } else {
        (
            (q1 * q3 + q0 * q2).atan2(q0 * q1 - q2 * q3),
            (2.0 * chi).atan2(q03 - q12),
            (q1 * q3 - q0 * q2).atan2(q2 * q3 + q0 * q1),
        )
    };

    Euler::new(wrap_two_pi(phi1), phi, wrap_two_pi(phi2))
}

/// Euler angles → passive orientation matrix (sample → crystal).
pub fn euler_to_matrix(eu: &Euler) -> Matrix3<f64> {
    let (s1, c1) = eu.phi1.sin_cos();
    let (s, c) = eu.phi.sin_cos();
    let (s2, c2) = eu.phi2.sin_cos();

    Matrix3::new(
        c1 * c2 - s1 * c * s2,
        s1 * c2 + c1 * c * s2,
        s * s2,
        -c1 * s2 - s1 * c * c2,
        -s1 * s2 + c1 * c * c2,
        s * c2,
        s1 * s,
        -c1 * s,
        c,
    )
}

fn wrap_two_pi(angle: f64) -> f64 {
    if angle < 0.0 {
        angle + TAU
    } else {
        angle
    }
}

// ======================== QUATERNIONS ========================

/// Quaternion → passive orientation matrix.
pub fn quat_to_matrix(q: &Quat) -> Matrix3<f64> {
    q.to_rotation_matrix().into_inner().transpose()
}

/// Quaternion → axis-angle with angle in [0, π].
pub fn quat_to_axis_angle(q: &Quat) -> AxisAngle {
    let q = positive_quat(q);
    let v = q.imag();
    let n = v.norm();
    if n == 0.0 {
        return AxisAngle::identity();
    }
    AxisAngle::new(v / n, 2.0 * n.atan2(q.w))
}

pub fn axis_angle_to_quat(ax: &AxisAngle) -> Quat {
    let (s, c) = (0.5 * ax.angle).sin_cos();
    let v = ax.axis * s;
    UnitQuaternion::new_normalize(Quaternion::new(c, v.x, v.y, v.z))
}

pub fn quat_to_rodrigues(q: &Quat) -> Rodrigues {
    axis_angle_to_rodrigues(&quat_to_axis_angle(q))
}

pub fn rodrigues_to_quat(ro: &Rodrigues) -> Quat {
    axis_angle_to_quat(&rodrigues_to_axis_angle(ro))
}

// ======================== RODRIGUES ========================

/// Axis-angle → Rodrigues; tan(θ/2) is capped at `ROD_INFINITY`.
pub fn axis_angle_to_rodrigues(ax: &AxisAngle) -> Rodrigues {
    if ax.angle == 0.0 {
        return Rodrigues::identity();
    }
    let mut w = (0.5 * ax.angle).tan();
    if w > ROD_INFINITY {
        w = ROD_INFINITY;
    }
    Rodrigues::new(ax.axis, w)
}

pub fn rodrigues_to_axis_angle(ro: &Rodrigues) -> AxisAngle {
    if ro.w == 0.0 {
        return AxisAngle::identity();
    }
    if ro.w < 0.0 {
        return AxisAngle::new(-ro.axis, 2.0 * (-ro.w).atan());
    }
    AxisAngle::new(ro.axis, 2.0 * ro.w.atan())
}

pub fn rodrigues_to_euler(ro: &Rodrigues) -> Euler {
    quat_to_euler(&rodrigues_to_quat(ro))
}

pub fn euler_to_rodrigues(eu: &Euler) -> Rodrigues {
    quat_to_rodrigues(&euler_to_quat(eu))
}

// ======================== HOMOCHORIC ========================

/// h = n · (3/4 (θ − sin θ))^(1/3)
pub fn axis_angle_to_homochoric(ax: &AxisAngle) -> Homochoric {
    let f = 0.75 * (ax.angle - ax.angle.sin());
    Homochoric(ax.axis * f.cbrt())
}

/// Inverse of [`axis_angle_to_homochoric`]. The angle is recovered by a
/// bracketed Newton iteration on θ − sin θ = 4/3 |h|³.
pub fn homochoric_to_axis_angle(ho: &Homochoric) -> AxisAngle {
    let r = ho.0.norm();
    if r == 0.0 {
        return AxisAngle::identity();
    }
    let target = 4.0 / 3.0 * r * r * r;
    AxisAngle::new(ho.0 / r, solve_homochoric_angle(target))
}

pub fn rodrigues_to_homochoric(ro: &Rodrigues) -> Homochoric {
    axis_angle_to_homochoric(&rodrigues_to_axis_angle(ro))
}

pub fn homochoric_to_rodrigues(ho: &Homochoric) -> Rodrigues {
    axis_angle_to_rodrigues(&homochoric_to_axis_angle(ho))
}

// Solves θ − sin θ = target for θ ∈ [0, π]; the left side is monotone there.
fn solve_homochoric_angle(target: f64) -> f64 {
    if target.is_nan() {
        return target;
    }
    if target <= 0.0 {
        return 0.0;
    }
    if target >= PI {
        return PI;
    }

    let (mut lo, mut hi) = (0.0_f64, PI);
    // Small-angle series θ − sin θ ≈ θ³/6 gives the starting point
    let mut theta = (6.0 * target).cbrt().min(PI);

    for _ in 0..HOMOCHORIC_SOLVER_MAX_ITER {
        let residual = theta - theta.sin() - target;
        if residual > 0.0 {
            hi = theta;
        } else {
            lo = theta;
        }

        let slope = 1.0 - theta.cos();
        let mut next = if slope > 0.0 {
            theta - residual / slope
        } else {
            0.5 * (lo + hi)
        };
        if !(next > lo && next < hi) {
            next = 0.5 * (lo + hi);
        }

        if (next - theta).abs() < HOMOCHORIC_SOLVER_TOLERANCE {
            return next;
        }
        theta = next;
    }
    theta
}

/// Rotate `v` from the sample frame into the crystal frame.
pub fn sample_to_crystal(g: &Matrix3<f64>, v: &Vector3<f64>) -> Vector3<f64> {
    g * v
}
