use serde::{Deserialize, Serialize};

use crate::config::ODF_BIN_RESOLUTION_DEG;
use crate::errors::{LaueError, LaueResult};
use crate::orientation::Homochoric;

/// Uniform grid over the cube `[-init, init]` in homochoric space.
///
/// Invariant: `step[i] = init[i] / (num_bins[i] / 2)`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BinGeometry {
    /// Half extent of the grid along each axis
    pub init: [f64; 3],
    pub num_bins: [usize; 3],
    pub step: [f64; 3],
}

/// Homochoric length of a rotation by `angle`.
pub fn homochoric_extent(angle: f64) -> f64 {
    (0.75 * (angle - angle.sin())).cbrt()
}

impl BinGeometry {
    /// Grid covering rotations up to `max_angles[i]` along axis `i`, one bin
    /// per `ODF_BIN_RESOLUTION_DEG` degrees on either side of the origin.
    pub fn from_max_angles(max_angles: [f64; 3]) -> Self {
        let init = max_angles.map(homochoric_extent);
        let num_bins =
            max_angles.map(|a| 2 * (a.to_degrees() / ODF_BIN_RESOLUTION_DEG).round() as usize);
        let step = [0, 1, 2].map(|i| init[i] / (num_bins[i] / 2) as f64);
        Self {
            init,
            num_bins,
            step,
        }
    }

    /// Total number of bins.
    pub fn size(&self) -> usize {
        self.num_bins.iter().product()
    }

    /// Flattened bin of a homochoric point; coordinates off the grid clamp
    /// to the outermost bin and NaN coordinates land in bin 0 of their axis.
    pub fn bin_index(&self, ho: &Homochoric) -> usize {
        let mut idx = [0usize; 3];
        for i in 0..3 {
            let last = self.num_bins[i] - 1;
            let b = ((ho.0[i] + self.init[i]) / self.step[i]).floor();
            idx[i] = if b >= last as f64 {
                last
            } else if b > 0.0 {
                b as usize
            } else {
                0
            };
        }
        self.flatten(idx)
    }

    pub fn flatten(&self, idx: [usize; 3]) -> usize {
        idx[0] + idx[1] * self.num_bins[0] + idx[2] * self.num_bins[0] * self.num_bins[1]
    }

    /// Inverse of [`flatten`](Self::flatten), range checked.
    pub fn decode(&self, bin: usize) -> LaueResult<[usize; 3]> {
        if bin >= self.size() {
            return Err(LaueError::InvalidBinIndex {
                index: bin,
                size: self.size(),
            });
        }
        let [n0, n1, _] = self.num_bins;
        Ok([bin % n0, (bin / n0) % n1, bin / (n0 * n1)])
    }

    /// Point inside the cell of `bin`; `random` values in `[0, 1)` place it
    /// uniformly within the cell.
    pub fn sample(&self, random: [f64; 3], bin: usize) -> LaueResult<Homochoric> {
        let idx = self.decode(bin)?;
        let h = [0, 1, 2].map(|i| self.step[i] * idx[i] as f64 + self.step[i] * random[i] - self.init[i]);
        Ok(Homochoric::new(h[0], h[1], h[2]))
    }
}
