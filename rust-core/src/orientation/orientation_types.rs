use nalgebra::{Quaternion, UnitQuaternion, Vector3};
use serde::{Deserialize, Serialize};

/// Unit quaternion, stored scalar-last (`[i, j, k, w]`).
pub type Quat = UnitQuaternion<f64>;

/// Build a quaternion from scalar-last components. The result is normalized.
pub fn quat_xyzw(x: f64, y: f64, z: f64, w: f64) -> Quat {
    UnitQuaternion::new_normalize(Quaternion::new(w, x, y, z))
}

/// Flip the sign of `q` so that its scalar part is non-negative.
pub fn positive_quat(q: &Quat) -> Quat {
    if q.w < 0.0 {
        UnitQuaternion::new_unchecked(-q.into_inner())
    } else {
        *q
    }
}

/// Widen an `f32` quaternion to `f64`.
pub fn quat_to_f64(q: &UnitQuaternion<f32>) -> Quat {
    UnitQuaternion::new_normalize(q.quaternion().cast::<f64>())
}

/// Bunge Euler angles (φ1, Φ, φ2) in radians, passive convention.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Euler {
    pub phi1: f64,
    pub phi: f64,
    pub phi2: f64,
}

impl Euler {
    pub fn new(phi1: f64, phi: f64, phi2: f64) -> Self {
        Self { phi1, phi, phi2 }
    }

    /// Create from angles given in degrees.
    pub fn from_degrees(phi1: f64, phi: f64, phi2: f64) -> Self {
        Self::new(phi1.to_radians(), phi.to_radians(), phi2.to_radians())
    }

    pub fn to_degrees(&self) -> [f64; 3] {
        [self.phi1.to_degrees(), self.phi.to_degrees(), self.phi2.to_degrees()]
    }

    pub fn as_array(&self) -> [f64; 3] {
        [self.phi1, self.phi, self.phi2]
    }
}

/// Rotation by `angle` radians about the unit vector `axis`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AxisAngle {
    pub axis: Vector3<f64>,
    pub angle: f64,
}

impl AxisAngle {
    pub fn new(axis: Vector3<f64>, angle: f64) -> Self {
        Self { axis, angle }
    }

    /// Zero rotation. The axis is arbitrary and fixed to +z.
    pub fn identity() -> Self {
        Self::new(Vector3::z(), 0.0)
    }
}

/// Rodrigues vector in (unit axis, w = tan(θ/2)) form.
///
/// 180° rotations carry `w = ROD_INFINITY` instead of an actual infinity so
/// that composition formulas stay finite.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rodrigues {
    pub axis: Vector3<f64>,
    pub w: f64,
}

impl Rodrigues {
    pub fn new(axis: Vector3<f64>, w: f64) -> Self {
        Self { axis, w }
    }

    pub fn identity() -> Self {
        Self::new(Vector3::z(), 0.0)
    }

    /// Split a three-component Rodrigues vector into axis and length.
    pub fn from_vector(v: Vector3<f64>) -> Self {
        let mag = v.norm();
        if mag == 0.0 {
            return Self::identity();
        }
        Self::new(v / mag, mag)
    }

    /// Three-component Rodrigues vector `axis * w`.
    pub fn vector(&self) -> Vector3<f64> {
        self.axis * self.w
    }

    /// Rotation angle in radians.
    pub fn angle(&self) -> f64 {
        2.0 * self.w.atan()
    }
}

/// Homochoric (equal-volume) vector. Its length lies in `[0, (3π/4)^(1/3)]`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Homochoric(pub Vector3<f64>);

impl Homochoric {
    pub fn new(h1: f64, h2: f64, h3: f64) -> Self {
        Self(Vector3::new(h1, h2, h3))
    }
}
