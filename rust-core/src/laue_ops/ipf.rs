use nalgebra::Vector3;
use serde::{Deserialize, Serialize};
use std::f64::consts::FRAC_PI_2;

use crate::laue_ops::engine::LaueOps;
use crate::orientation::{euler_to_matrix, Euler};
use crate::symmetries::ChiLimit;

/// Packed ARGB8 colour, alpha in the high byte.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Rgb(pub u32);

impl Rgb {
    pub fn new(red: u8, green: u8, blue: u8) -> Self {
        Self(0xFF00_0000 | (red as u32) << 16 | (green as u32) << 8 | blue as u32)
    }

    /// Channels in `[0, 1]`; values outside are clamped, NaN maps to 0.
    pub fn from_unit(red: f64, green: f64, blue: f64) -> Self {
        let byte = |v: f64| (v.clamp(0.0, 1.0) * 255.0) as u8;
        Self::new(byte(red), byte(green), byte(blue))
    }

    pub fn red(&self) -> u8 {
        (self.0 >> 16) as u8
    }

    pub fn green(&self) -> u8 {
        (self.0 >> 8) as u8
    }

    pub fn blue(&self) -> u8 {
        self.0 as u8
    }

    pub fn alpha(&self) -> u8 {
        (self.0 >> 24) as u8
    }
}

fn cubic_chi_max(eta: f64) -> f64 {
    let t = eta.tan();
    (1.0 / (2.0 + t * t)).sqrt().clamp(-1.0, 1.0).acos()
}

impl LaueOps {
    /// `[η_min, η_max, χ_max]` of the unit triangle at azimuth `eta`, radians.
    pub fn ipf_color_angle_limits(&self, eta: f64) -> [f64; 3] {
        let tri = self.group().ipf_triangle();
        let chi_max = match tri.chi_limit {
            ChiLimit::Equator => FRAC_PI_2,
            ChiLimit::CubicHigh => cubic_chi_max(eta),
            ChiLimit::CubicLow => {
                if eta.to_degrees() > 45.0 {
                    cubic_chi_max(FRAC_PI_2 - eta)
                } else {
                    cubic_chi_max(eta)
                }
            }
        };
        [tri.eta_min_deg.to_radians(), tri.eta_max_deg.to_radians(), chi_max]
    }

    /// True when the pole (η, χ) lies in the standard stereographic triangle.
    pub fn in_unit_triangle(&self, eta: f64, chi: f64) -> bool {
        let [eta_min, eta_max, chi_max] = self.ipf_color_angle_limits(eta);
        eta >= eta_min && eta <= eta_max && chi >= 0.0 && chi <= chi_max
    }

    /// Inverse pole figure colour of the sample direction `reference` for an
    /// orientation given in radians.
    pub fn ipf_color(&self, eu: &Euler, reference: &Vector3<f64>) -> Rgb {
        let g = euler_to_matrix(eu);
        let crystal_dir = (g * reference).normalize();

        let mut eta = 0.0;
        let mut chi = 0.0;
        for op in self.operators() {
            let mut p = op.matrix * crystal_dir;
            if p.z < 0.0 {
                p = -p;
            }
            chi = p.z.min(1.0).acos();
            eta = p.y.atan2(p.x);
            if self.in_unit_triangle(eta, chi) {
                break;
            }
        }

        let [eta_min, eta_max, chi_max] = self.ipf_color_angle_limits(eta);
        let chi_frac = chi / chi_max;
        let mut rgb = [0.0; 3];
        rgb[0] = 1.0 - chi_frac;
        rgb[2] = (eta - eta_min).abs() / (eta_max - eta_min);
        rgb[1] = (1.0 - rgb[2]) * chi_frac;
        rgb[2] *= chi_frac;

        let rgb = rgb.map(f64::sqrt);
        let max = rgb.iter().copied().fold(f64::NEG_INFINITY, f64::max);
        Rgb::from_unit(rgb[0] / max, rgb[1] / max, rgb[2] / max)
    }

    /// As [`ipf_color`](Self::ipf_color) with Euler angles in degrees.
    pub fn ipf_color_degrees(&self, eu_deg: &Euler, reference: &Vector3<f64>) -> Rgb {
        let eu = Euler::from_degrees(eu_deg.phi1, eu_deg.phi, eu_deg.phi2);
        self.ipf_color(&eu, reference)
    }

    /// Colour of a Rodrigues vector scaled by the ODF grid extent.
    pub fn rodrigues_color(&self, r1: f64, r2: f64, r3: f64) -> Rgb {
        let init = self.bin_geometry().init;
        let channel = |r: f64, max: f64| (r + max) / (2.0 * max) / max;
        Rgb::from_unit(
            channel(r1, init[0]),
            channel(r2, init[1]),
            channel(r3, init[2]),
        )
    }
}
