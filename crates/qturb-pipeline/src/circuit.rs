//! The per-time-step turbulence circuit.

use tracing::{debug, instrument};

use qturb_ir::{Circuit, ClbitId, IrError, IrResult, ParameterExpression, QubitId};

/// Name of the rotation parameter.
pub const THETA: &str = "θ";

/// Build the circuit for one time step and bind `θ` to `theta`.
///
/// Layout on `n` qubits with `n` classical bits:
/// 1. `H` on every qubit;
/// 2. `CX(i, i+1)` along the chain;
/// 3. `RY(θ·t)` then `RZ(θ·t/2)` on every qubit;
/// 4. `CRZ(θ·t)` from qubit `i` to `i+1` along the chain;
/// 5. qubit `i` measured into classical bit `i`.
///
/// The time step scales the angle expressions directly, so the bound angles
/// are `theta·t` and `theta·t/2`. A single qubit has no chain gates; zero
/// qubits is an error.
#[instrument]
pub fn turbulence_circuit(num_qubits: u32, time_step: f64, theta: f64) -> IrResult<Circuit> {
    if num_qubits == 0 {
        return Err(IrError::EmptyCircuit);
    }

    let mut circuit = Circuit::with_size(
        format!("turbulence_t{time_step:.3}"),
        num_qubits,
        num_qubits,
    );
    let param = ParameterExpression::symbol(THETA);
    let pairs = || (0..num_qubits - 1).map(|i| (QubitId(i), QubitId(i + 1)));

    for q in (0..num_qubits).map(QubitId) {
        circuit.h(q)?;
    }
    for (a, b) in pairs() {
        circuit.cx(a, b)?;
    }
    for q in (0..num_qubits).map(QubitId) {
        circuit
            .ry(param.clone() * time_step, q)?
            .rz(param.clone() * time_step / 2.0, q)?;
    }
    for (a, b) in pairs() {
        circuit.crz(param.clone() * time_step, a, b)?;
    }
    for i in 0..num_qubits {
        circuit.measure(QubitId(i), ClbitId(i))?;
    }

    let bound = circuit.bind_parameter(THETA, theta);
    debug!(
        "Built {} with {} ops, depth {}",
        bound.name(),
        bound.num_ops(),
        bound.depth()
    );
    Ok(bound)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use qturb_ir::{InstructionKind, StandardGate};
    use std::f64::consts::FRAC_PI_4;

    fn angles(circuit: &Circuit, name: &str) -> Vec<f64> {
        circuit
            .instructions()
            .iter()
            .filter_map(|inst| inst.as_gate())
            .filter(|g| g.name() == name)
            .filter_map(|g| g.kind.parameter())
            .filter_map(ParameterExpression::as_f64)
            .collect()
    }

    #[test]
    fn test_gate_counts() {
        let circuit = turbulence_circuit(7, 0.5, FRAC_PI_4).unwrap();
        let ops = circuit.count_ops();
        assert_eq!(ops["h"], 7);
        assert_eq!(ops["cx"], 6);
        assert_eq!(ops["ry"], 7);
        assert_eq!(ops["rz"], 7);
        assert_eq!(ops["crz"], 6);
        assert_eq!(ops["measure"], 7);
        assert_eq!(circuit.num_qubits(), 7);
        assert_eq!(circuit.num_clbits(), 7);
    }

    #[test]
    fn test_angles_are_bound_and_scaled() {
        let t = 1.3;
        let circuit = turbulence_circuit(2, t, FRAC_PI_4).unwrap();
        assert!(!circuit.is_parameterized());

        let angle = |name: &str| {
            circuit
                .instructions()
                .iter()
                .filter_map(|inst| inst.as_gate())
                .find(|g| g.name() == name)
                .and_then(|g| g.kind.parameter())
                .and_then(ParameterExpression::as_f64)
                .unwrap()
        };
        assert!((angle("ry") - FRAC_PI_4 * t).abs() < 1e-12);
        assert!((angle("rz") - FRAC_PI_4 * t / 2.0).abs() < 1e-12);
        assert!((angle("crz") - FRAC_PI_4 * t).abs() < 1e-12);
    }

    #[test]
    fn test_seven_qubits_at_t_055() {
        let t = 0.55;
        let circuit = turbulence_circuit(7, t, FRAC_PI_4).unwrap();
        assert_eq!(circuit.name(), "turbulence_t0.550");

        let ry = angles(&circuit, "ry");
        let rz = angles(&circuit, "rz");
        let crz = angles(&circuit, "crz");
        assert_eq!((ry.len(), rz.len(), crz.len()), (7, 7, 6));
        assert!(ry.iter().all(|a| (a - FRAC_PI_4 * t).abs() < 1e-12));
        assert!(rz.iter().all(|a| (a - FRAC_PI_4 * t / 2.0).abs() < 1e-12));
        assert!(crz.iter().all(|a| (a - FRAC_PI_4 * t).abs() < 1e-12));
    }

    #[test]
    fn test_gate_order() {
        let circuit = turbulence_circuit(3, 0.1, FRAC_PI_4).unwrap();
        let names: Vec<_> = circuit.instructions().iter().map(|i| i.name()).collect();
        assert_eq!(
            names,
            [
                "h", "h", "h", "cx", "cx", "ry", "rz", "ry", "rz", "ry", "rz", "crz", "crz",
                "measure", "measure", "measure"
            ]
        );
        let crz = &circuit.instructions()[11];
        assert!(matches!(
            &crz.kind,
            InstructionKind::Gate(g) if matches!(g.kind, StandardGate::CRz(_))
        ));
        assert_eq!(crz.qubits, vec![QubitId(0), QubitId(1)]);
    }

    #[test]
    fn test_single_qubit() {
        let circuit = turbulence_circuit(1, 2.0, FRAC_PI_4).unwrap();
        let ops = circuit.count_ops();
        assert!(!ops.contains_key("cx"));
        assert!(!ops.contains_key("crz"));
        assert_eq!(circuit.measurements(), vec![(QubitId(0), ClbitId(0))]);
    }

    #[test]
    fn test_zero_qubits_rejected() {
        assert!(matches!(
            turbulence_circuit(0, 0.1, FRAC_PI_4),
            Err(IrError::EmptyCircuit)
        ));
    }

    proptest! {
        #[test]
        fn chain_shape_holds_for_any_size(n in 2u32..13, t in -5.0f64..5.0) {
            let circuit = turbulence_circuit(n, t, FRAC_PI_4).unwrap();
            let ops = circuit.count_ops();
            let count = |name: &str| ops.get(name).copied().unwrap_or(0);

            prop_assert_eq!(circuit.num_qubits(), n as usize);
            prop_assert_eq!(circuit.num_clbits(), n as usize);
            prop_assert_eq!(count("h"), n as usize);
            prop_assert_eq!(count("cx"), n as usize - 1);
            prop_assert_eq!(count("crz"), n as usize - 1);
            prop_assert_eq!(count("measure"), n as usize);
            prop_assert!(!circuit.is_parameterized());
        }
    }
}
