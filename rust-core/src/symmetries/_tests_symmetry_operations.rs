#[cfg(test)]
mod _tests_symmetry_operations {
    use super::super::laue_group::LaueGroup;
    use super::super::symmetry_operations::{OperatorTable, SymmetryOperator};
    use super::super::symmetry_point_groups::*;
    use crate::config::ROD_INFINITY;
    use crate::errors::LaueError;
    use crate::orientation::{quat_xyzw, Quat};
    use approx::assert_relative_eq;
    use nalgebra::{Matrix3, Vector3};

    const TOL: f64 = 1e-12;

    fn table(group: LaueGroup) -> OperatorTable {
        OperatorTable::from_quats(&generate_symmetry_operations(group))
    }

    #[test]
    fn test_operator_counts() {
        let expected = [
            (LaueGroup::HexagonalHigh, 12),
            (LaueGroup::CubicHigh, 24),
            (LaueGroup::HexagonalLow, 6),
            (LaueGroup::CubicLow, 12),
            (LaueGroup::Triclinic, 1),
            (LaueGroup::Monoclinic, 2),
            (LaueGroup::OrthoRhombic, 4),
            (LaueGroup::TetragonalLow, 4),
            (LaueGroup::TetragonalHigh, 8),
            (LaueGroup::TrigonalLow, 3),
            (LaueGroup::TrigonalHigh, 6),
        ];
        for (group, count) in expected {
            assert_eq!(table(group).len(), count, "{group}");
        }
    }

    #[test]
    fn test_all_tables_verify() {
        for group in LaueGroup::ALL {
            assert_eq!(table(group).verify(group.symmetry_name()), Ok(()), "{group}");
        }
    }

    #[test]
    fn test_identity_first() {
        for group in LaueGroup::ALL {
            assert!(table(group).operators()[0].is_identity(), "{group}");
        }
    }

    #[test]
    fn test_cubic_low_matrices_match_reference_table() {
        // Active rotation matrices, row-major, in table order
        let reference: [[f64; 9]; 12] = [
            [1.0, 0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0, 1.0],
            [1.0, 0.0, 0.0, 0.0, -1.0, 0.0, 0.0, 0.0, -1.0],
            [-1.0, 0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0, -1.0],
            [-1.0, 0.0, 0.0, 0.0, -1.0, 0.0, 0.0, 0.0, 1.0],
            [0.0, 0.0, 1.0, 1.0, 0.0, 0.0, 0.0, 1.0, 0.0],
            [0.0, 1.0, 0.0, 0.0, 0.0, 1.0, 1.0, 0.0, 0.0],
            [0.0, -1.0, 0.0, 0.0, 0.0, -1.0, 1.0, 0.0, 0.0],
            [0.0, 0.0, 1.0, -1.0, 0.0, 0.0, 0.0, -1.0, 0.0],
            [0.0, -1.0, 0.0, 0.0, 0.0, 1.0, -1.0, 0.0, 0.0],
            [0.0, 0.0, -1.0, -1.0, 0.0, 0.0, 0.0, 1.0, 0.0],
            [0.0, 0.0, -1.0, 1.0, 0.0, 0.0, 0.0, -1.0, 0.0],
            [0.0, 1.0, 0.0, 0.0, 0.0, -1.0, -1.0, 0.0, 0.0],
        ];
        let ops = table(LaueGroup::CubicLow);
        for (i, m) in reference.iter().enumerate() {
            let expected = Matrix3::from_row_slice(m);
            let actual = ops.get(i).unwrap().matrix;
            assert_relative_eq!(actual, expected, epsilon = TOL);
        }
    }

    #[test]
    fn test_two_fold_rodrigues_uses_sentinel() {
        let op = table(LaueGroup::CubicLow).get(1).cloned().unwrap();
        assert_eq!(op.rodrigues.w, ROD_INFINITY);
        assert_relative_eq!(op.rodrigues.axis, Vector3::x(), epsilon = TOL);
    }

    #[test]
    fn test_three_fold_rodrigues() {
        // 120° about [111]: tan(60°) = sqrt(3)
        let op = table(LaueGroup::CubicLow).get(4).cloned().unwrap();
        assert_relative_eq!(op.rodrigues.w, 3.0_f64.sqrt(), epsilon = 1e-10);
        let n = 1.0 / 3.0_f64.sqrt();
        assert_relative_eq!(op.rodrigues.axis, Vector3::new(n, n, n), epsilon = 1e-10);
    }

    #[test]
    fn test_operator_orders() {
        let ops = table(LaueGroup::CubicHigh);
        assert_eq!(ops.get(0).unwrap().order(), 1);
        assert_eq!(ops.get(1).unwrap().order(), 2);
        assert_eq!(ops.get(4).unwrap().order(), 4);
        assert_eq!(ops.get(16).unwrap().order(), 3);

        let hex = table(LaueGroup::HexagonalLow);
        assert_eq!(hex.get(1).unwrap().order(), 6);
    }

    #[test]
    fn test_get_out_of_range() {
        let ops = table(LaueGroup::CubicLow);
        assert_eq!(
            ops.get(12).unwrap_err(),
            LaueError::InvalidSymOpIndex { index: 12, count: 12 }
        );
    }

    #[test]
    fn test_find_ignores_quaternion_sign() {
        let ops = table(LaueGroup::CubicLow);
        let negated = quat_xyzw(-0.5, -0.5, -0.5, -0.5);
        assert_eq!(ops.find(&negated), Some(4));
        assert_eq!(ops.find(&quat_xyzw(0.0, 0.0, 0.38, 0.92)), None);
    }

    #[test]
    fn test_verify_rejects_incomplete_group() {
        // 4-fold about z without its square is not closed
        let quats: Vec<Quat> = vec![
            Quat::identity(),
            quat_xyzw(0.0, 0.0, std::f64::consts::FRAC_1_SQRT_2, std::f64::consts::FRAC_1_SQRT_2),
        ];
        let result = OperatorTable::from_quats(&quats).verify("broken");
        assert!(matches!(
            result,
            Err(LaueError::InconsistentOperatorTable { index: 1, .. })
        ));
    }

    #[test]
    fn test_verify_rejects_missing_identity() {
        let quats = vec![quat_xyzw(1.0, 0.0, 0.0, 0.0), Quat::identity()];
        let result = OperatorTable::from_quats(&quats).verify("broken");
        assert!(matches!(
            result,
            Err(LaueError::InconsistentOperatorTable { index: 0, .. })
        ));
    }

    #[test]
    fn test_apply_rotates_direction() {
        let op = SymmetryOperator::from_quat(quat_xyzw(0.5, 0.5, 0.5, 0.5));
        let v = op.apply(&Vector3::x());
        assert_relative_eq!(v, Vector3::y(), epsilon = TOL);
    }

    #[test]
    fn test_high_groups_contain_low_groups() {
        let pairs = [
            (LaueGroup::CubicHigh, LaueGroup::CubicLow),
            (LaueGroup::HexagonalHigh, LaueGroup::HexagonalLow),
            (LaueGroup::TetragonalHigh, LaueGroup::TetragonalLow),
            (LaueGroup::TrigonalHigh, LaueGroup::TrigonalLow),
            (LaueGroup::CubicLow, LaueGroup::OrthoRhombic),
        ];
        for (high, low) in pairs {
            let high_ops = table(high);
            for op in table(low).iter() {
                assert!(high_ops.find(&op.quat).is_some(), "{low} not in {high}");
            }
        }
    }
}
