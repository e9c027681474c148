use log::warn;
use nalgebra::Vector3;
use serde::{Deserialize, Serialize};

use crate::laue_ops::engine::LaueOps;

/// Highest Schmid factor over the symmetric variants of one slip system.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SchmidFactor {
    /// cos φ · cos λ
    pub factor: f64,
    /// [φ, λ] in radians: load to plane normal, load to slip direction
    pub angles: [f64; 2],
    /// Operator that produced the winning variant
    pub op_index: usize,
}

impl LaueOps {
    /// Schmid factor of the slip system (`plane`, `direction`) under uniaxial
    /// `load`, maximized over the operator table.
    ///
    /// Variants whose rotated plane normal points to negative z are skipped;
    /// they duplicate a variant with z ≥ 0.
    pub fn schmid_factor(
        &self,
        load: &Vector3<f64>,
        plane: &Vector3<f64>,
        direction: &Vector3<f64>,
    ) -> SchmidFactor {
        let load_mag = load.norm();
        let plane_mag = plane.norm() * load_mag;
        let direction_mag = direction.norm() * load_mag;

        if plane_mag == 0.0 || direction_mag == 0.0 {
            warn!(
                "Schmid factor of zero-length input: load {:?} plane {:?} direction {:?}",
                load.as_slice(),
                plane.as_slice(),
                direction.as_slice()
            );
            return SchmidFactor {
                factor: f64::NAN,
                angles: [f64::NAN; 2],
                op_index: 0,
            };
        }

        let mut best = SchmidFactor {
            factor: 0.0,
            angles: [0.0; 2],
            op_index: 0,
        };
        for (i, op) in self.operators().iter().enumerate() {
            let slip_plane = op.matrix * plane;
            if slip_plane.z < 0.0 {
                continue;
            }
            let slip_direction = op.matrix * direction;

            let cos_phi = load.dot(&slip_plane).abs() / plane_mag;
            let cos_lambda = load.dot(&slip_direction).abs() / direction_mag;
            let schmid = cos_phi * cos_lambda;
            if schmid > best.factor {
                best = SchmidFactor {
                    factor: schmid,
                    angles: [cos_phi.min(1.0).acos(), cos_lambda.min(1.0).acos()],
                    op_index: i,
                };
            }
        }
        best
    }
}
