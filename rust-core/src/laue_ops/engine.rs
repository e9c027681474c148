use log::{debug, error};
use nalgebra::{Matrix3, Vector3};
use std::sync::LazyLock;

use crate::config::ODF_BIN_RESOLUTION_DEG;
use crate::errors::{LaueError, LaueResult};
use crate::orientation::{Quat, Rodrigues};
use crate::symmetries::{
    generate_symmetry_operations, BinGeometry, LaueGroup, OperatorTable, SymmetryOperator,
};

/// Symmetry-aware orientation operations for one Laue class.
///
/// Everything is computed once from the operator table of the class and never
/// mutated afterwards, so a `LaueOps` can be shared freely between threads.
#[derive(Debug, Clone)]
pub struct LaueOps {
    group: LaueGroup,
    table: OperatorTable,
    geometry: BinGeometry,
    // Symmetrically distinct directions of each pole figure family, up to sign
    families: [Vec<Vector3<f64>>; 3],
}

impl LaueOps {
    /// Build the operator table, bin grid and pole figure families of `group`.
    pub fn new(group: LaueGroup) -> Self {
        let table = OperatorTable::from_quats(&generate_symmetry_operations(group));
        let geometry = BinGeometry::from_max_angles(group.odf_max_angles());
        let families = group
            .pole_figure_families()
            .map(|fam| family_orbit(&table, &Vector3::from(fam.direction)));
        Self {
            group,
            table,
            geometry,
            families,
        }
    }

    /// Run the operator table consistency check.
    pub fn verify(&self) -> LaueResult<()> {
        self.table.verify(self.group.symmetry_name())
    }

    pub fn group(&self) -> LaueGroup {
        self.group
    }

    pub fn operators(&self) -> &[SymmetryOperator] {
        self.table.operators()
    }

    pub fn operator_table(&self) -> &OperatorTable {
        &self.table
    }

    pub fn bin_geometry(&self) -> &BinGeometry {
        &self.geometry
    }

    /// Distinct directions of pole figure family `i` (0..3).
    pub fn family_directions(&self, i: usize) -> LaueResult<&[Vector3<f64>]> {
        self.families
            .get(i)
            .map(Vec::as_slice)
            .ok_or(LaueError::InvalidFamilyIndex(i))
    }

    // ======================== DESCRIPTORS ========================

    pub fn num_sym_ops(&self) -> usize {
        self.table.len()
    }

    pub fn odf_num_bins(&self) -> [usize; 3] {
        self.geometry.num_bins
    }

    pub fn odf_size(&self) -> usize {
        self.geometry.size()
    }

    /// MDF bins share the ODF grid.
    pub fn mdf_size(&self) -> usize {
        self.geometry.size()
    }

    /// Angle bins of a misorientation-angle histogram, one per
    /// `ODF_BIN_RESOLUTION_DEG` up to the largest disorientation.
    pub fn mdf_plot_bins(&self) -> usize {
        (self.group.max_disorientation_deg() / ODF_BIN_RESOLUTION_DEG).ceil() as usize
    }

    /// Number of sphere points generated per orientation for each pole figure
    /// family (both poles of every direction).
    pub fn num_symmetry(&self) -> [usize; 3] {
        [0, 1, 2].map(|i| 2 * self.families[i].len())
    }

    pub fn symmetry_name(&self) -> &'static str {
        self.group.symmetry_name()
    }

    pub fn rotation_point_group(&self) -> &'static str {
        self.group.rotation_point_group()
    }

    pub fn has_inversion(&self) -> bool {
        self.group.has_inversion()
    }

    pub fn default_pole_figure_names(&self) -> [&'static str; 3] {
        self.group.pole_figure_families().map(|f| f.label)
    }

    // ======================== OPERATOR ACCESS ========================

    pub fn quat_sym_op(&self, i: usize) -> LaueResult<Quat> {
        Ok(self.table.get(i)?.quat)
    }

    pub fn rod_sym_op(&self, i: usize) -> LaueResult<Rodrigues> {
        Ok(self.table.get(i)?.rodrigues)
    }

    pub fn mat_sym_op(&self, i: usize) -> LaueResult<Matrix3<f64>> {
        Ok(self.table.get(i)?.matrix)
    }
}

// Orbit of `direction` under the table, deduplicated up to sign, first-seen order.
fn family_orbit(table: &OperatorTable, direction: &Vector3<f64>) -> Vec<Vector3<f64>> {
    let mut members: Vec<Vector3<f64>> = Vec::new();
    for op in table.iter() {
        let d = op.apply(direction);
        let seen = members
            .iter()
            .any(|m| (m - d).norm() < FAMILY_TOLERANCE || (m + d).norm() < FAMILY_TOLERANCE);
        if !seen {
            members.push(d);
        }
    }
    members
}

const FAMILY_TOLERANCE: f64 = 1e-8;

// ======================== REGISTRY ========================

static REGISTRY: LazyLock<[LaueOps; 11]> = LazyLock::new(|| {
    LaueGroup::ALL.map(|group| {
        let ops = LaueOps::new(group);
        match ops.verify() {
            Ok(()) => debug!(
                "Built {} with {} operators, {} ODF bins",
                group,
                ops.num_sym_ops(),
                ops.odf_size()
            ),
            Err(e) => error!("{e}"),
        }
        ops
    })
});

/// Shared, lazily built engine for `group`.
pub fn laue_ops(group: LaueGroup) -> &'static LaueOps {
    &REGISTRY[group.crystal_structure_index() as usize]
}

/// All eleven engines in crystal structure order.
pub fn all_laue_ops() -> &'static [LaueOps; 11] {
    &REGISTRY
}
