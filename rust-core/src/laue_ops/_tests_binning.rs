#[cfg(test)]
mod _tests_binning {
    use super::super::engine::laue_ops;
    use crate::errors::LaueError;
    use crate::orientation::*;
    use crate::symmetries::LaueGroup;
    use approx::assert_relative_eq;
    use nalgebra::Vector3;
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};
    use std::f64::consts::TAU;

    #[test]
    fn test_identity_bin_is_grid_center() {
        let ops = laue_ops(LaueGroup::CubicLow);
        let bin = ops.odf_bin(&Rodrigues::identity());
        let idx = ops.bin_geometry().decode(bin).unwrap();
        for i in idx {
            assert!(i == 17 || i == 18, "{idx:?}");
        }
    }

    #[test]
    fn test_bins_are_in_range() {
        let mut rng = StdRng::seed_from_u64(31);
        for group in LaueGroup::ALL {
            let ops = laue_ops(group);
            for _ in 0..50 {
                let eu = Euler::new(
                    rng.gen_range(0.0..std::f64::consts::TAU),
                    rng.gen_range(0.0..std::f64::consts::PI),
                    rng.gen_range(0.0..std::f64::consts::TAU),
                );
                let rod = euler_to_rodrigues(&eu);
                assert!(ops.odf_bin(&rod) < ops.odf_size(), "{group}");
                assert!(ops.mdf_bin(&rod) < ops.mdf_size(), "{group}");
            }
        }
    }

    #[test]
    fn test_symmetric_equivalents_share_bin() {
        let ops = laue_ops(LaueGroup::CubicLow);
        let q = quat_xyzw(0.12, -0.31, 0.22, 0.9);
        let bin = ops.odf_bin(&quat_to_rodrigues(&q));
        let mut agree = 0;
        for op in ops.operators() {
            if ops.odf_bin(&quat_to_rodrigues(&(q * op.quat))) == bin {
                agree += 1;
            }
        }
        assert_eq!(agree, ops.num_sym_ops());
    }

    fn random_quat(rng: &mut StdRng) -> Quat {
        // Uniform on SO(3) (Shoemake)
        let (u1, u2, u3): (f64, f64, f64) = (rng.gen(), rng.gen(), rng.gen());
        let (a, b) = ((1.0 - u1).sqrt(), u1.sqrt());
        quat_xyzw(
            a * (TAU * u2).sin(),
            a * (TAU * u2).cos(),
            b * (TAU * u3).sin(),
            b * (TAU * u3).cos(),
        )
    }

    #[test]
    fn test_sample_round_trip_uniform_orientations() {
        // Cells cut by the zone boundary fold their outer part into other
        // bins, so a few percent of samples leave their bin
        let mut rng = StdRng::seed_from_u64(42);
        for group in [
            LaueGroup::CubicLow,
            LaueGroup::CubicHigh,
            LaueGroup::HexagonalHigh,
            LaueGroup::OrthoRhombic,
        ] {
            let ops = laue_ops(group);
            let total = 4000;
            let mut hits = 0;
            for _ in 0..total {
                let bin = ops.odf_bin(&quat_to_rodrigues(&random_quat(&mut rng)));
                let random = [rng.gen::<f64>(), rng.gen::<f64>(), rng.gen::<f64>()];
                let eu = ops.sample_orientation_from_bin(random, bin).unwrap();
                if ops.odf_bin(&euler_to_rodrigues(&eu)) == bin {
                    hits += 1;
                }
            }
            let rate = hits as f64 / total as f64;
            assert!(rate >= 0.92, "{group}: {hits}/{total}");
        }
    }

    #[test]
    fn test_sample_round_trip_interior_cells() {
        // Cells well inside the cubic-low zone never fold
        let mut rng = StdRng::seed_from_u64(44);
        let ops = laue_ops(LaueGroup::CubicLow);
        let geometry = ops.bin_geometry();
        for i in 15..21 {
            for j in 15..21 {
                for k in 15..21 {
                    let bin = geometry.flatten([i, j, k]);
                    let random = [rng.gen::<f64>(), rng.gen::<f64>(), rng.gen::<f64>()];
                    let eu = ops.sample_orientation_from_bin(random, bin).unwrap();
                    assert_eq!(ops.odf_bin(&euler_to_rodrigues(&eu)), bin, "{:?}", [i, j, k]);
                }
            }
        }
    }

    #[test]
    fn test_sampled_orientations_are_reduced() {
        let mut rng = StdRng::seed_from_u64(43);
        let ops = laue_ops(LaueGroup::CubicLow);
        for _ in 0..100 {
            let bin = rng.gen_range(0..ops.odf_size());
            let random = [rng.gen::<f64>(), rng.gen::<f64>(), rng.gen::<f64>()];
            let eu = ops.sample_orientation_from_bin(random, bin).unwrap();
            let rod = euler_to_rodrigues(&eu);
            let fz = ops.reduce_to_fundamental_zone(&rod);
            assert_relative_eq!(rod.angle(), fz.angle(), epsilon = 1e-8);
        }
    }

    #[test]
    fn test_sample_out_of_range() {
        let ops = laue_ops(LaueGroup::CubicLow);
        assert_eq!(
            ops.sample_orientation_from_bin([0.5; 3], 46656).unwrap_err(),
            LaueError::InvalidBinIndex { index: 46656, size: 46656 }
        );
        assert!(ops.sample_misorientation_from_bin([0.5; 3], 46656).is_err());
    }

    #[test]
    fn test_misorientation_sample_round_trip() {
        let ops = laue_ops(LaueGroup::CubicLow);
        let geometry = ops.bin_geometry();
        // Sorted |axis| with x >= y >= z >= 0 lands in the positive octant
        let bin = geometry.flatten([22, 20, 19]);
        let rod = ops.sample_misorientation_from_bin([0.5; 3], bin).unwrap();
        assert!(rod.axis.x >= rod.axis.y && rod.axis.y >= rod.axis.z);
        assert_eq!(ops.mdf_bin(&rod), bin);
    }

    #[test]
    fn test_nan_bins_to_corner() {
        let ops = laue_ops(LaueGroup::CubicLow);
        let rod = Rodrigues::new(Vector3::new(f64::NAN, f64::NAN, f64::NAN), f64::NAN);
        assert_eq!(ops.odf_bin(&rod), 0);
    }
}
