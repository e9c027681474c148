use nalgebra::{UnitQuaternion, Vector3};
use rand::Rng;

use crate::laue_ops::engine::LaueOps;
use crate::orientation::{euler_to_quat, positive_quat, quat_to_euler, quat_to_f64, AxisAngle, Euler, Quat};

impl LaueOps {
    /// Disorientation between two orientations: the smallest rotation angle
    /// over all symmetric equivalents of `q1⁻¹ ⊗ q2`, with its axis.
    ///
    /// The angle lies in `[0, π]`. A zero angle reports the +z axis.
    pub fn misorientation(&self, q1: &Quat, q2: &Quat) -> AxisAngle {
        let delta = q1.inverse() * q2;

        let mut best_angle = f64::NAN;
        let mut best_axis = Vector3::z();
        for (i, op) in self.operators().iter().enumerate() {
            let c = positive_quat(&(delta * op.quat));
            // f64::min would swallow NaN
            let w = if c.w > 1.0 { 1.0 } else { c.w };
            let angle = 2.0 * w.acos();
            if i == 0 || angle < best_angle {
                best_angle = angle;
                best_axis = c.imag();
            }
        }

        let n = best_axis.norm();
        if best_angle == 0.0 || n == 0.0 {
            return AxisAngle::new(Vector3::z(), best_angle);
        }
        AxisAngle::new(best_axis / n, best_angle)
    }

    /// Single precision entry point; the computation runs in `f64`.
    pub fn misorientation_f32(&self, q1: &UnitQuaternion<f32>, q2: &UnitQuaternion<f32>) -> AxisAngle {
        self.misorientation(&quat_to_f64(q1), &quat_to_f64(q2))
    }

    /// Symmetric equivalent `q2 ⊗ s` closest to `q1`, signed so that its dot
    /// product with `q1` is non-negative.
    pub fn nearest_symmetric_equivalent(&self, q1: &Quat, q2: &Quat) -> Quat {
        let mut best = *q2;
        let mut best_dot = f64::NEG_INFINITY;
        for op in self.operators() {
            let c = q2 * op.quat;
            let dot = q1.coords.dot(&c.coords);
            if dot.abs() > best_dot {
                best_dot = dot.abs();
                best = if dot < 0.0 {
                    UnitQuaternion::new_unchecked(-c.into_inner())
                } else {
                    c
                };
            }
        }
        best
    }

    /// Single precision entry point; the search runs in `f64`.
    pub fn nearest_symmetric_equivalent_f32(
        &self,
        q1: &UnitQuaternion<f32>,
        q2: &UnitQuaternion<f32>,
    ) -> UnitQuaternion<f32> {
        let q = self.nearest_symmetric_equivalent(&quat_to_f64(q1), &quat_to_f64(q2));
        UnitQuaternion::new_unchecked(q.into_inner().cast::<f32>())
    }

    /// Apply a uniformly chosen symmetry operator to `eu`.
    pub fn randomize_euler_angles<R: Rng + ?Sized>(&self, eu: &Euler, rng: &mut R) -> Euler {
        let op = &self.operators()[rng.gen_range(0..self.num_sym_ops())];
        quat_to_euler(&(euler_to_quat(eu) * op.quat))
    }
}
