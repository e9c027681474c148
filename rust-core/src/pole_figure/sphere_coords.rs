use log::debug;
use nalgebra::Vector3;
#[cfg(feature = "parallel")]
use rayon::prelude::*;
use serde::{Deserialize, Serialize};

use crate::errors::{LaueError, LaueResult};
use crate::laue_ops::LaueOps;
use crate::orientation::{euler_to_matrix, Euler};

/// Unit-sphere points of the three pole figure families.
///
/// Each family is a flat buffer of `f32` xyz triples, orientation-major; every
/// family direction contributes the point and its antipode, in that order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SphereCoords {
    pub families: [Vec<f32>; 3],
}

impl SphereCoords {
    pub fn new() -> Self {
        Self::default()
    }

    /// Flat xyz buffer of family `i`.
    pub fn family(&self, i: usize) -> LaueResult<&[f32]> {
        self.families
            .get(i)
            .map(Vec::as_slice)
            .ok_or(LaueError::InvalidFamilyIndex(i))
    }

    /// Number of xyz triples held for family `i`.
    pub fn num_points(&self, i: usize) -> LaueResult<usize> {
        Ok(self.family(i)?.len() / 3)
    }
}

impl LaueOps {
    /// Project every family direction of every orientation in `eulers`
    /// (radians, three per orientation) onto the sample-frame unit sphere.
    ///
    /// Buffers in `out` that are too small are grown; larger buffers keep
    /// their tail untouched.
    pub fn generate_sphere_coords(&self, eulers: &[f32], out: &mut SphereCoords) -> LaueResult<()> {
        if eulers.len() % 3 != 0 {
            return Err(LaueError::BufferSizeMismatch {
                expected_multiple: 3,
                actual: eulers.len(),
            });
        }
        let n = eulers.len() / 3;
        let per_orientation = self.num_symmetry();

        for (i, buf) in out.families.iter_mut().enumerate() {
            let needed = n * per_orientation[i] * 3;
            if buf.len() < needed {
                debug!("Growing family {} buffer from {} to {} floats", i, buf.len(), needed);
                buf.resize(needed, 0.0);
            }
            fill_family(eulers, self.family_directions(i)?, &mut buf[..needed]);
        }

        debug!(
            "Generated sphere coordinates for {} orientations ({} {})",
            n,
            self.symmetry_name(),
            if cfg!(feature = "parallel") { "parallel" } else { "serial" }
        );
        Ok(())
    }
}

#[cfg(feature = "parallel")]
fn fill_family(eulers: &[f32], directions: &[Vector3<f64>], out: &mut [f32]) {
    out.par_chunks_mut(directions.len() * 6)
        .zip(eulers.par_chunks(3))
        .for_each(|(chunk, eu)| project_orientation(eu, directions, chunk));
}

#[cfg(not(feature = "parallel"))]
fn fill_family(eulers: &[f32], directions: &[Vector3<f64>], out: &mut [f32]) {
    out.chunks_mut(directions.len() * 6)
        .zip(eulers.chunks(3))
        .for_each(|(chunk, eu)| project_orientation(eu, directions, chunk));
}

// Writes gᵀd and -gᵀd for each direction d.
fn project_orientation(eu: &[f32], directions: &[Vector3<f64>], out: &mut [f32]) {
    let g = euler_to_matrix(&Euler::new(eu[0] as f64, eu[1] as f64, eu[2] as f64));
    let g_t = g.transpose();
    for (d, slot) in directions.iter().zip(out.chunks_exact_mut(6)) {
        let p = g_t * d;
        let xyz = [p.x as f32, p.y as f32, p.z as f32];
        slot[..3].copy_from_slice(&xyz);
        slot[3..].copy_from_slice(&xyz.map(|v| -v));
    }
}
