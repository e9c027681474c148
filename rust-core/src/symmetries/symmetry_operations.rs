use nalgebra::{Matrix3, Vector3};
use serde::{Deserialize, Serialize};
use std::f64::consts::TAU;

use crate::config::{ANGLE_TOLERANCE, OPERATOR_TOLERANCE};
use crate::errors::{LaueError, LaueResult};
use crate::orientation::{quat_to_axis_angle, quat_to_rodrigues, rodrigues_to_quat, Quat, Rodrigues};

/// A proper rotation of a crystal point group, held in three synchronized forms.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SymmetryOperator {
    /// Unit quaternion, the source of truth
    pub quat: Quat,
    /// Rodrigues form, 180° rotations carry `ROD_INFINITY`
    pub rodrigues: Rodrigues,
    /// Active rotation matrix R(quat)
    pub matrix: Matrix3<f64>,
}

impl SymmetryOperator {
    /// Derive the Rodrigues and matrix forms from a quaternion.
    pub fn from_quat(quat: Quat) -> Self {
        Self {
            quat,
            rodrigues: quat_to_rodrigues(&quat),
            matrix: quat.to_rotation_matrix().into_inner(),
        }
    }

    pub fn identity() -> Self {
        Self::from_quat(Quat::identity())
    }

    /// Rotate a crystal direction.
    pub fn apply(&self, v: &Vector3<f64>) -> Vector3<f64> {
        self.matrix * v
    }

    /// Number of applications needed to return to the identity.
    pub fn order(&self) -> usize {
        let angle = quat_to_axis_angle(&self.quat).angle;
        if angle < ANGLE_TOLERANCE {
            return 1;
        }
        (TAU / angle).round() as usize
    }

    pub fn is_identity(&self) -> bool {
        quat_to_axis_angle(&self.quat).angle < ANGLE_TOLERANCE
    }

    /// True when `q` is the same rotation, either sign of the double cover.
    pub fn same_rotation(&self, q: &Quat) -> bool {
        (self.quat.coords.dot(&q.coords).abs() - 1.0).abs() < OPERATOR_TOLERANCE
    }
}

/// Ordered operator set of one rotation point group. Immutable once built.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OperatorTable {
    ops: Vec<SymmetryOperator>,
}

impl OperatorTable {
    pub fn from_quats(quats: &[Quat]) -> Self {
        Self {
            ops: quats.iter().copied().map(SymmetryOperator::from_quat).collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.ops.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ops.is_empty()
    }

    pub fn operators(&self) -> &[SymmetryOperator] {
        &self.ops
    }

    pub fn iter(&self) -> std::slice::Iter<'_, SymmetryOperator> {
        self.ops.iter()
    }

    /// Operator at `index`, range checked.
    pub fn get(&self, index: usize) -> LaueResult<&SymmetryOperator> {
        self.ops.get(index).ok_or(LaueError::InvalidSymOpIndex {
            index,
            count: self.ops.len(),
        })
    }

    /// Index of the operator equal to `q` (up to sign), if any.
    pub fn find(&self, q: &Quat) -> Option<usize> {
        self.ops.iter().position(|op| op.same_rotation(q))
    }

    /// Check identity-first ordering, representation agreement and group closure.
    pub fn verify(&self, group: &str) -> LaueResult<()> {
        let fail = |index: usize, reason: String| LaueError::InconsistentOperatorTable {
            group: group.to_string(),
            index,
            reason,
        };

        match self.ops.first() {
            Some(op) if op.is_identity() => {}
            _ => return Err(fail(0, "first operator is not the identity".into())),
        }

        for (i, op) in self.ops.iter().enumerate() {
            let norm = op.quat.coords.norm();
            if (norm - 1.0).abs() > OPERATOR_TOLERANCE {
                return Err(fail(i, format!("quaternion norm {norm}")));
            }

            let orthogonality = (op.matrix * op.matrix.transpose() - Matrix3::identity()).norm();
            if orthogonality > OPERATOR_TOLERANCE || (op.matrix.determinant() - 1.0).abs() > OPERATOR_TOLERANCE {
                return Err(fail(i, "matrix is not a proper rotation".into()));
            }

            if !op.same_rotation(&rodrigues_to_quat(&op.rodrigues)) {
                return Err(fail(i, "Rodrigues vector disagrees with quaternion".into()));
            }

            for (j, other) in self.ops.iter().enumerate() {
                if self.find(&(op.quat * other.quat)).is_none() {
                    return Err(fail(i, format!("product with operator {j} leaves the group")));
                }
            }
        }
        Ok(())
    }
}
