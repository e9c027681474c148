use log::debug;
#[cfg(feature = "parallel")]
use rayon::prelude::*;
use serde::{Deserialize, Serialize};

use crate::errors::LaueResult;
use crate::laue_ops::LaueOps;
use crate::pole_figure::pole_figure_config::PoleFigureConfiguration;
use crate::pole_figure::sphere_coords::SphereCoords;

/// Rasterizes sphere points into an intensity image.
///
/// Implementations own the projection (stereographic, Lambert, ...) and the
/// image layout; the engine only supplies points and collects images.
pub trait IntensityProjector {
    /// `xyz` holds flat `f32` triples on the unit sphere. The returned image
    /// is expected to hold `config.image_dim²` values.
    fn project(&self, xyz: &[f32], config: &PoleFigureConfiguration) -> Vec<f64>;
}

/// Intensity image of one direction family.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PoleFigure {
    pub label: String,
    pub image_dim: usize,
    pub intensity: Vec<f64>,
}

impl LaueOps {
    /// Pole figures of the orientations in `config`, one per family.
    ///
    /// Sets `config.sphere_radius` to 1 and `config.min_scale`/`max_scale` to
    /// the extremes over all three images (`+inf`/`-inf` when the images are
    /// empty). Figures are returned in the positions given by `config.order`.
    pub fn generate_pole_figure<P>(
        &self,
        config: &mut PoleFigureConfiguration,
        projector: &P,
    ) -> LaueResult<Vec<PoleFigure>>
    where
        P: IntensityProjector + Sync,
    {
        let order = config.resolve_order()?;

        let mut coords = SphereCoords::new();
        self.generate_sphere_coords(&config.eulers, &mut coords)?;
        config.sphere_radius = 1.0;

        let images = project_families(&coords, config, projector);

        let (min, max) = images
            .iter()
            .flatten()
            .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), &v| (lo.min(v), hi.max(v)));
        config.min_scale = min;
        config.max_scale = max;
        debug!("Pole figure intensity range [{}, {}]", min, max);

        let defaults = self.default_pole_figure_names();
        let mut slots: [Option<PoleFigure>; 3] = [None, None, None];
        for (i, intensity) in images.into_iter().enumerate() {
            slots[order[i]] = Some(PoleFigure {
                label: config.label_or(i, defaults[i]).to_string(),
                image_dim: config.image_dim,
                intensity,
            });
        }
        Ok(slots.into_iter().flatten().collect())
    }
}

#[cfg(feature = "parallel")]
fn project_families<P: IntensityProjector + Sync>(
    coords: &SphereCoords,
    config: &PoleFigureConfiguration,
    projector: &P,
) -> Vec<Vec<f64>> {
    coords
        .families
        .par_iter()
        .map(|xyz| projector.project(xyz, config))
        .collect()
}

#[cfg(not(feature = "parallel"))]
fn project_families<P: IntensityProjector + Sync>(
    coords: &SphereCoords,
    config: &PoleFigureConfiguration,
    projector: &P,
) -> Vec<Vec<f64>> {
    coords
        .families
        .iter()
        .map(|xyz| projector.project(xyz, config))
        .collect()
}
