//! Error types for Laue-group operations.
//!
//! Orientation math itself never fails: degenerate numbers propagate as
//! NaN/Inf. Errors are reserved for caller mistakes that can be checked
//! cheaply (indices, buffer shapes, unknown group names) and for operator
//! tables that fail their construction-time consistency check.

use thiserror::Error;

/// Unified error type for the crate.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum LaueError {
    /// Symmetry operator index outside `[0, count)`.
    #[error("symmetry operator index {index} out of range (group has {count} operators)")]
    InvalidSymOpIndex { index: usize, count: usize },

    /// Flattened ODF/MDF bin index outside `[0, size)`.
    #[error("bin index {index} out of range (grid has {size} bins)")]
    InvalidBinIndex { index: usize, size: usize },

    /// A flat buffer whose length is not a multiple of its tuple size.
    #[error("buffer length {actual} is not a multiple of {expected_multiple}")]
    BufferSizeMismatch {
        expected_multiple: usize,
        actual: usize,
    },

    /// Pole figure family index outside `0..3`.
    #[error("pole figure family index {0} out of range (there are 3 families)")]
    InvalidFamilyIndex(usize),

    /// Pole figure order that is not a permutation of `0..3`.
    #[error("pole figure order {0:?} is not a permutation of [0, 1, 2]")]
    InvalidPoleFigureOrder(Vec<usize>),

    /// Name that does not match any Laue class.
    #[error("unknown Laue group '{0}'")]
    UnknownLaueGroup(String),

    /// Crystal structure index outside the 11 Laue classes.
    #[error("crystal structure index {0} does not name a Laue class")]
    InvalidCrystalStructure(u32),

    /// Operator table failed verification.
    #[error("inconsistent operator table for {group} at operator {index}: {reason}")]
    InconsistentOperatorTable {
        group: String,
        index: usize,
        reason: String,
    },
}

/// Result alias used by the library API.
pub type LaueResult<T> = std::result::Result<T, LaueError>;
