use serde::{Deserialize, Serialize};
use std::f64::consts::{FRAC_1_SQRT_2, FRAC_PI_2, FRAC_PI_3, FRAC_PI_4, FRAC_PI_6, PI};
use std::fmt;
use std::str::FromStr;

use crate::errors::{LaueError, LaueResult};

const INV_SQRT_3: f64 = 0.577_350_269_189_625_8;

/// The eleven Laue classes. Discriminants follow the EBSD crystal structure index.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LaueGroup {
    HexagonalHigh = 0,
    CubicHigh = 1,
    HexagonalLow = 2,
    CubicLow = 3,
    Triclinic = 4,
    Monoclinic = 5,
    OrthoRhombic = 6,
    TetragonalLow = 7,
    TetragonalHigh = 8,
    TrigonalLow = 9,
    TrigonalHigh = 10,
}

/// How a misorientation is folded into the misorientation fundamental zone.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MisorientationZonePolicy {
    /// |axis| components sorted descending, angle kept (cubic classes)
    SortedAbsoluteAxis,
    /// Same zone as for orientations
    OrientationZone,
}

/// Upper bound of the polar angle χ inside the IPF unit triangle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ChiLimit {
    /// χ ≤ 90°
    Equator,
    /// χ ≤ acos(sqrt(1 / (2 + tan²η))), η ≤ 45°
    CubicHigh,
    /// As `CubicHigh`, mirrored about η = 45°
    CubicLow,
}

/// Standard stereographic triangle of a Laue class, angles in degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct IpfTriangle {
    pub eta_min_deg: f64,
    pub eta_max_deg: f64,
    pub chi_limit: ChiLimit,
}

/// A crystallographic direction family plotted on a pole figure.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PoleFigureFamily {
    pub label: &'static str,
    /// Representative unit direction in the crystal frame
    pub direction: [f64; 3],
}

const fn family(label: &'static str, direction: [f64; 3]) -> PoleFigureFamily {
    PoleFigureFamily { label, direction }
}

const CUBIC_FAMILIES: [PoleFigureFamily; 3] = [
    family("<001>", [1.0, 0.0, 0.0]),
    family("<011>", [FRAC_1_SQRT_2, FRAC_1_SQRT_2, 0.0]),
    family("<111>", [INV_SQRT_3, INV_SQRT_3, INV_SQRT_3]),
];

const HEXAGONAL_FAMILIES: [PoleFigureFamily; 3] = [
    family("<0001>", [0.0, 0.0, 1.0]),
    family("<2-1-10>", [1.0, 0.0, 0.0]),
    family("<10-10>", [0.866_025_403_784_438_6, 0.5, 0.0]),
];

const TRIGONAL_FAMILIES: [PoleFigureFamily; 3] = [
    family("<0001>", [0.0, 0.0, 1.0]),
    family("<2-1-10>", [1.0, 0.0, 0.0]),
    family("<-1010>", [0.0, 1.0, 0.0]),
];

const TETRAGONAL_FAMILIES: [PoleFigureFamily; 3] = [
    family("<001>", [0.0, 0.0, 1.0]),
    family("<100>", [1.0, 0.0, 0.0]),
    family("<110>", [FRAC_1_SQRT_2, FRAC_1_SQRT_2, 0.0]),
];

const ORTHOGONAL_FAMILIES: [PoleFigureFamily; 3] = [
    family("<001>", [0.0, 0.0, 1.0]),
    family("<100>", [1.0, 0.0, 0.0]),
    family("<010>", [0.0, 1.0, 0.0]),
];

impl LaueGroup {
    pub const ALL: [LaueGroup; 11] = [
        LaueGroup::HexagonalHigh,
        LaueGroup::CubicHigh,
        LaueGroup::HexagonalLow,
        LaueGroup::CubicLow,
        LaueGroup::Triclinic,
        LaueGroup::Monoclinic,
        LaueGroup::OrthoRhombic,
        LaueGroup::TetragonalLow,
        LaueGroup::TetragonalHigh,
        LaueGroup::TrigonalLow,
        LaueGroup::TrigonalHigh,
    ];

    pub fn crystal_structure_index(self) -> u32 {
        self as u32
    }

    pub fn from_crystal_structure(index: u32) -> LaueResult<Self> {
        Self::ALL
            .get(index as usize)
            .copied()
            .ok_or(LaueError::InvalidCrystalStructure(index))
    }

    /// Hermann-Mauguin and Schoenflies name of the Laue class
    pub fn symmetry_name(self) -> &'static str {
        match self {
            Self::HexagonalHigh => "Hexagonal 6/mmm (D6h)",
            Self::CubicHigh => "Cubic m-3m (Oh)",
            Self::HexagonalLow => "Hexagonal 6/m (C6h)",
            Self::CubicLow => "Cubic m-3 (Th)",
            Self::Triclinic => "Triclinic -1 (Ci)",
            Self::Monoclinic => "Monoclinic 2/m (C2h)",
            Self::OrthoRhombic => "OrthoRhombic mmm (D2h)",
            Self::TetragonalLow => "Tetragonal 4/m (C4h)",
            Self::TetragonalHigh => "Tetragonal 4/mmm (D4h)",
            Self::TrigonalLow => "Trigonal -3 (C3i)",
            Self::TrigonalHigh => "Trigonal -3m (D3d)",
        }
    }

    /// Hermann-Mauguin symbol of the proper rotation subgroup
    pub fn rotation_point_group(self) -> &'static str {
        match self {
            Self::HexagonalHigh => "622",
            Self::CubicHigh => "432",
            Self::HexagonalLow => "6",
            Self::CubicLow => "23",
            Self::Triclinic => "1",
            Self::Monoclinic => "2",
            Self::OrthoRhombic => "222",
            Self::TetragonalLow => "4",
            Self::TetragonalHigh => "422",
            Self::TrigonalLow => "3",
            Self::TrigonalHigh => "32",
        }
    }

    /// Every Laue class is centrosymmetric.
    pub fn has_inversion(self) -> bool {
        true
    }

    /// Largest rotation angle along each homochoric axis covered by the ODF grid.
    pub fn odf_max_angles(self) -> [f64; 3] {
        match self {
            Self::HexagonalHigh => [FRAC_PI_2, FRAC_PI_2, FRAC_PI_6],
            Self::CubicHigh => [FRAC_PI_4; 3],
            Self::HexagonalLow => [PI, PI, FRAC_PI_6],
            Self::CubicLow => [FRAC_PI_2; 3],
            Self::Triclinic => [PI; 3],
            Self::Monoclinic => [PI, FRAC_PI_2, PI],
            Self::OrthoRhombic => [FRAC_PI_2; 3],
            Self::TetragonalLow => [PI, PI, FRAC_PI_4],
            Self::TetragonalHigh => [FRAC_PI_2, FRAC_PI_2, FRAC_PI_4],
            Self::TrigonalLow => [PI, PI, FRAC_PI_3],
            Self::TrigonalHigh => [FRAC_PI_2, FRAC_PI_2, FRAC_PI_3],
        }
    }

    /// Largest disorientation angle between two crystals of this class, in degrees.
    pub fn max_disorientation_deg(self) -> f64 {
        match self {
            Self::CubicHigh => 62.8,
            Self::CubicLow => 90.0,
            Self::HexagonalHigh => 93.84,
            Self::TetragonalHigh => 98.42,
            Self::TrigonalHigh => 104.48,
            Self::OrthoRhombic => 120.0,
            Self::HexagonalLow
            | Self::TetragonalLow
            | Self::TrigonalLow
            | Self::Monoclinic
            | Self::Triclinic => 180.0,
        }
    }

    pub fn misorientation_policy(self) -> MisorientationZonePolicy {
        match self {
            Self::CubicHigh | Self::CubicLow => MisorientationZonePolicy::SortedAbsoluteAxis,
            _ => MisorientationZonePolicy::OrientationZone,
        }
    }

    pub fn pole_figure_families(self) -> [PoleFigureFamily; 3] {
        match self {
            Self::CubicHigh | Self::CubicLow => CUBIC_FAMILIES,
            Self::HexagonalHigh | Self::HexagonalLow => HEXAGONAL_FAMILIES,
            Self::TrigonalHigh | Self::TrigonalLow => TRIGONAL_FAMILIES,
            Self::TetragonalHigh | Self::TetragonalLow => TETRAGONAL_FAMILIES,
            Self::OrthoRhombic | Self::Monoclinic | Self::Triclinic => ORTHOGONAL_FAMILIES,
        }
    }

    pub fn ipf_triangle(self) -> IpfTriangle {
        let (eta_min_deg, eta_max_deg, chi_limit) = match self {
            Self::HexagonalHigh => (0.0, 30.0, ChiLimit::Equator),
            Self::CubicHigh => (0.0, 45.0, ChiLimit::CubicHigh),
            Self::HexagonalLow => (0.0, 60.0, ChiLimit::Equator),
            Self::CubicLow => (0.0, 90.0, ChiLimit::CubicLow),
            Self::Triclinic => (-180.0, 180.0, ChiLimit::Equator),
            Self::Monoclinic => (0.0, 180.0, ChiLimit::Equator),
            Self::OrthoRhombic => (0.0, 90.0, ChiLimit::Equator),
            Self::TetragonalLow => (0.0, 90.0, ChiLimit::Equator),
            Self::TetragonalHigh => (0.0, 45.0, ChiLimit::Equator),
            Self::TrigonalLow => (-120.0, 0.0, ChiLimit::Equator),
            Self::TrigonalHigh => (-90.0, -30.0, ChiLimit::Equator),
        };
        IpfTriangle {
            eta_min_deg,
            eta_max_deg,
            chi_limit,
        }
    }

    /// Short kebab-case name used on the command line
    pub fn cli_name(self) -> &'static str {
        match self {
            Self::HexagonalHigh => "hexagonal-high",
            Self::CubicHigh => "cubic-high",
            Self::HexagonalLow => "hexagonal-low",
            Self::CubicLow => "cubic-low",
            Self::Triclinic => "triclinic",
            Self::Monoclinic => "monoclinic",
            Self::OrthoRhombic => "orthorhombic",
            Self::TetragonalLow => "tetragonal-low",
            Self::TetragonalHigh => "tetragonal-high",
            Self::TrigonalLow => "trigonal-low",
            Self::TrigonalHigh => "trigonal-high",
        }
    }
}

impl fmt::Display for LaueGroup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symmetry_name())
    }
}

impl FromStr for LaueGroup {
    type Err = LaueError;

    /// Accepts the CLI name, the Laue symbol or the rotation group symbol.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key = s.trim().to_ascii_lowercase();
        Self::ALL
            .iter()
            .copied()
            .find(|g| {
                g.cli_name() == key
                    || g.rotation_point_group() == key
                    || laue_symbol(g.symmetry_name()).is_some_and(|sym| sym == key)
            })
            .ok_or_else(|| LaueError::UnknownLaueGroup(s.to_string()))
    }
}

// "Cubic m-3m (Oh)" -> "m-3m"
fn laue_symbol(name: &str) -> Option<String> {
    name.split_whitespace().nth(1).map(str::to_ascii_lowercase)
}
