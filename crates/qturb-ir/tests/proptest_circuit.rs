//! Property-based checks of circuit construction.

use proptest::prelude::*;
use qturb_ir::{Circuit, ClbitId, IrError, ParameterExpression, QubitId};

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn ladder_circuit_has_expected_shape(n in 1u32..12) {
        let mut circuit = Circuit::with_size("ladder", n, n);
        for i in 0..n {
            circuit.h(QubitId(i)).unwrap();
        }
        for i in 0..n.saturating_sub(1) {
            circuit.cx(QubitId(i), QubitId(i + 1)).unwrap();
        }
        circuit.measure_all().unwrap();

        let ops = circuit.count_ops();
        prop_assert_eq!(ops.get("h").copied().unwrap_or(0), n as usize);
        prop_assert_eq!(ops.get("cx").copied().unwrap_or(0), (n - 1) as usize);
        prop_assert_eq!(circuit.measurements().len(), n as usize);
        // H layer, CX chain of n - 1, then the last measurement.
        prop_assert_eq!(circuit.depth(), n as usize + 1);
    }

    #[test]
    fn out_of_range_operands_are_rejected(n in 1u32..8, extra in 0u32..4) {
        let mut circuit = Circuit::with_size("bounds", n, n);
        let bad = QubitId(n + extra);
        let is_not_found = matches!(circuit.x(bad), Err(IrError::QubitNotFound { .. }));
        prop_assert!(is_not_found);
        let clbit_missing = matches!(
            circuit.measure(QubitId(0), ClbitId(n + extra)),
            Err(IrError::ClbitNotFound { .. })
        );
        prop_assert!(clbit_missing);
        prop_assert_eq!(circuit.num_ops(), 0);
    }

    #[test]
    fn binding_removes_every_symbol(scale in -4.0f64..4.0, value in -3.2f64..3.2) {
        let theta = ParameterExpression::symbol("θ");
        let mut circuit = Circuit::with_size("bind", 2, 0);
        circuit.ry(theta.clone() * scale, QubitId(0)).unwrap();
        circuit.crz(theta / 2.0, QubitId(0), QubitId(1)).unwrap();

        let bound = circuit.bind_parameter("θ", value);
        prop_assert!(!bound.is_parameterized());
        prop_assert!(bound.parameters().is_empty());
        prop_assert_eq!(bound.num_ops(), circuit.num_ops());
    }
}
