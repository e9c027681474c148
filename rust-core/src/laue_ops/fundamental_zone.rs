use nalgebra::Vector3;

use crate::config::FZ_TIE_TOLERANCE;
use crate::laue_ops::engine::LaueOps;
use crate::orientation::{axis_angle_to_rodrigues, rodrigues_to_axis_angle, AxisAngle, Rodrigues};
use crate::symmetries::MisorientationZonePolicy;

/// Rodrigues vector of `a ⊗ b`.
pub fn compose_rodrigues(a: &Vector3<f64>, b: &Vector3<f64>) -> Vector3<f64> {
    (a + b + a.cross(b)) / (1.0 - a.dot(b))
}

/// `(|n1|, |n2|, |n3|)` in descending order. Ties keep the later component
/// first, matching the comparison tree used for the misorientation zone.
pub fn sort_abs_descending(n: &Vector3<f64>) -> Vector3<f64> {
    let (n1, n2, n3) = (n.x.abs(), n.y.abs(), n.z.abs());
    let (a, b, c) = if n1 > n2 {
        if n1 > n3 {
            if n2 > n3 {
                (n1, n2, n3)
            } else {
                (n1, n3, n2)
            }
        } else {
            (n3, n1, n2)
        }
    } else if n2 > n3 {
        if n1 > n3 {
            (n2, n1, n3)
        } else {
            (n2, n3, n1)
        }
    } else {
        (n3, n2, n1)
    };
    Vector3::new(a, b, c)
}

// Lexicographic `a > b` with component differences inside the tie tolerance counted as equal
fn lex_greater(a: &Vector3<f64>, b: &Vector3<f64>) -> bool {
    for i in 0..3 {
        let d = a[i] - b[i];
        if d > FZ_TIE_TOLERANCE {
            return true;
        }
        if d < -FZ_TIE_TOLERANCE {
            return false;
        }
    }
    false
}

impl LaueOps {
    fn zone_candidates(&self, rho: Vector3<f64>) -> impl Iterator<Item = Vector3<f64>> + '_ {
        self.operators()
            .iter()
            .map(move |op| compose_rodrigues(&rho, &op.rodrigues.vector()))
    }

    /// Symmetric equivalent of `rod` closest to the origin.
    ///
    /// Candidates whose squared norm is within `FZ_TIE_TOLERANCE` of the
    /// minimum sit on the zone boundary and tie; the lexicographically largest
    /// `(ρ1, ρ2, ρ3)` among them wins, and components below the tolerance are
    /// snapped to zero. All symmetric equivalents of one orientation thus
    /// reduce to the same vector and the same bin. NaN input stays NaN.
    pub fn reduce_to_fundamental_zone(&self, rod: &Rodrigues) -> Rodrigues {
        let rho = rod.vector();
        let min_norm = self
            .zone_candidates(rho)
            .map(|c| c.norm_squared())
            .fold(f64::INFINITY, |m, n| if n < m { n } else { m });
        let limit = min_norm + FZ_TIE_TOLERANCE * min_norm.max(1.0);

        let best = self
            .zone_candidates(rho)
            .filter(|c| c.norm_squared() <= limit)
            .reduce(|best, c| if lex_greater(&c, &best) { c } else { best });

        match best {
            Some(v) => Rodrigues::from_vector(v.map(|x| if x.abs() < FZ_TIE_TOLERANCE { 0.0 } else { x })),
            // NaN candidates never pass the filter
            None => Rodrigues::from_vector(rho),
        }
    }

    /// Representative of `rod` in the misorientation fundamental zone.
    pub fn reduce_to_misorientation_zone(&self, rod: &Rodrigues) -> Rodrigues {
        let fz = self.reduce_to_fundamental_zone(rod);
        match self.group().misorientation_policy() {
            MisorientationZonePolicy::OrientationZone => fz,
            MisorientationZonePolicy::SortedAbsoluteAxis => {
                let ax = rodrigues_to_axis_angle(&fz);
                axis_angle_to_rodrigues(&AxisAngle::new(sort_abs_descending(&ax.axis), ax.angle))
            }
        }
    }
}
