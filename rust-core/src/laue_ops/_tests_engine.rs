#[cfg(test)]
mod _tests_engine {
    use super::super::engine::*;
    use crate::config::ROD_INFINITY;
    use crate::errors::LaueError;
    use crate::orientation::quat_xyzw;
    use crate::symmetries::LaueGroup;
    use approx::assert_relative_eq;
    use nalgebra::{Matrix3, Vector3};

    #[test]
    fn test_cubic_low_descriptors() {
        let ops = laue_ops(LaueGroup::CubicLow);
        assert_eq!(ops.num_sym_ops(), 12);
        assert_eq!(ops.odf_num_bins(), [36, 36, 36]);
        assert_eq!(ops.odf_size(), 46656);
        assert_eq!(ops.mdf_size(), 46656);
        assert_eq!(ops.num_symmetry(), [6, 12, 8]);
        assert_eq!(ops.symmetry_name(), "Cubic m-3 (Th)");
        assert_eq!(ops.rotation_point_group(), "23");
        assert!(ops.has_inversion());
        assert_eq!(ops.default_pole_figure_names(), ["<001>", "<011>", "<111>"]);
    }

    #[test]
    fn test_family_sizes_all_groups() {
        let expected = [
            (LaueGroup::HexagonalHigh, [2, 6, 6]),
            (LaueGroup::CubicHigh, [6, 12, 8]),
            (LaueGroup::HexagonalLow, [2, 6, 6]),
            (LaueGroup::CubicLow, [6, 12, 8]),
            (LaueGroup::Triclinic, [2, 2, 2]),
            (LaueGroup::Monoclinic, [2, 2, 2]),
            (LaueGroup::OrthoRhombic, [2, 2, 2]),
            (LaueGroup::TetragonalLow, [2, 4, 4]),
            (LaueGroup::TetragonalHigh, [2, 4, 4]),
            (LaueGroup::TrigonalLow, [2, 6, 6]),
            (LaueGroup::TrigonalHigh, [2, 6, 6]),
        ];
        for (group, sizes) in expected {
            assert_eq!(laue_ops(group).num_symmetry(), sizes, "{group}");
        }
    }

    #[test]
    fn test_cubic_low_family_order() {
        let ops = laue_ops(LaueGroup::CubicLow);
        let first = ops.family_directions(0).unwrap();
        assert_relative_eq!(first[0], Vector3::x(), epsilon = 1e-12);
        assert_relative_eq!(first[1], Vector3::y(), epsilon = 1e-12);
        assert_relative_eq!(first[2], Vector3::z(), epsilon = 1e-12);
    }

    #[test]
    fn test_registry_matches_groups() {
        for (i, ops) in all_laue_ops().iter().enumerate() {
            assert_eq!(ops.group().crystal_structure_index(), i as u32);
            assert_eq!(ops.verify(), Ok(()));
        }
        assert!(std::ptr::eq(
            laue_ops(LaueGroup::CubicHigh),
            laue_ops(LaueGroup::CubicHigh)
        ));
    }

    #[test]
    fn test_operator_accessors() {
        let ops = laue_ops(LaueGroup::CubicLow);
        let q = ops.quat_sym_op(4).unwrap();
        assert_relative_eq!(q, quat_xyzw(0.5, 0.5, 0.5, 0.5), epsilon = 1e-12);
        assert_eq!(ops.rod_sym_op(3).unwrap().w, ROD_INFINITY);
        assert_relative_eq!(ops.mat_sym_op(0).unwrap(), Matrix3::identity(), epsilon = 1e-12);
    }

    #[test]
    fn test_operator_accessors_out_of_range() {
        let ops = laue_ops(LaueGroup::CubicLow);
        let err = LaueError::InvalidSymOpIndex { index: 12, count: 12 };
        assert_eq!(ops.quat_sym_op(12).unwrap_err(), err);
        assert_eq!(ops.rod_sym_op(12).unwrap_err(), err);
        assert_eq!(ops.mat_sym_op(12).unwrap_err(), err);
    }

    #[test]
    fn test_engine_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<LaueOps>();
    }

    #[test]
    fn test_mdf_plot_bins() {
        let expected = [
            (LaueGroup::CubicHigh, 13),
            (LaueGroup::CubicLow, 18),
            (LaueGroup::HexagonalHigh, 19),
            (LaueGroup::TetragonalHigh, 20),
            (LaueGroup::TrigonalHigh, 21),
            (LaueGroup::OrthoRhombic, 24),
            (LaueGroup::Triclinic, 36),
        ];
        for (group, bins) in expected {
            assert_eq!(laue_ops(group).mdf_plot_bins(), bins, "{group}");
        }
    }

    #[test]
    fn test_family_directions_out_of_range() {
        let ops = laue_ops(LaueGroup::CubicLow);
        assert_eq!(ops.family_directions(2).unwrap().len(), 4);
        assert_eq!(ops.family_directions(3).unwrap_err(), LaueError::InvalidFamilyIndex(3));
    }
}
