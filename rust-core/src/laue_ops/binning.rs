use crate::errors::LaueResult;
use crate::laue_ops::engine::LaueOps;
use crate::orientation::{homochoric_to_rodrigues, rodrigues_to_euler, rodrigues_to_homochoric, Euler, Rodrigues};

impl LaueOps {
    /// Flattened ODF bin of an orientation. The input is reduced to the
    /// fundamental zone first, so any symmetric equivalent gives the same bin.
    pub fn odf_bin(&self, rod: &Rodrigues) -> usize {
        let fz = self.reduce_to_fundamental_zone(rod);
        self.bin_geometry().bin_index(&rodrigues_to_homochoric(&fz))
    }

    /// Flattened MDF bin of a misorientation.
    pub fn mdf_bin(&self, rod: &Rodrigues) -> usize {
        let mz = self.reduce_to_misorientation_zone(rod);
        self.bin_geometry().bin_index(&rodrigues_to_homochoric(&mz))
    }

    /// Orientation inside ODF bin `bin`, placed by `random` (each in `[0, 1)`)
    /// and reduced to the fundamental zone.
    pub fn sample_orientation_from_bin(&self, random: [f64; 3], bin: usize) -> LaueResult<Euler> {
        let ho = self.bin_geometry().sample(random, bin)?;
        let fz = self.reduce_to_fundamental_zone(&homochoric_to_rodrigues(&ho));
        Ok(rodrigues_to_euler(&fz))
    }

    /// Misorientation inside MDF bin `bin`, as a Rodrigues vector in the
    /// misorientation zone.
    pub fn sample_misorientation_from_bin(&self, random: [f64; 3], bin: usize) -> LaueResult<Rodrigues> {
        let ho = self.bin_geometry().sample(random, bin)?;
        Ok(self.reduce_to_misorientation_zone(&homochoric_to_rodrigues(&ho)))
    }
}
