//! Lowering to a restricted basis must preserve the measured distribution.

use proptest::prelude::*;
use qturb_adapter_sim::Statevector;
use qturb_compile::{BasisGates, CompileError, PassManagerBuilder};
use qturb_ir::{Circuit, ParameterExpression, QubitId};

fn layered_circuit(n: u32, angle: f64) -> Circuit {
    let theta = ParameterExpression::symbol("θ");
    let mut circuit = Circuit::with_size("layered", n, n);
    for i in 0..n {
        circuit.h(QubitId(i)).unwrap();
    }
    for i in 0..n - 1 {
        circuit.cx(QubitId(i), QubitId(i + 1)).unwrap();
    }
    for i in 0..n {
        circuit.ry(theta.clone() * 1.3, QubitId(i)).unwrap();
        circuit.rz(theta.clone() * 1.3 / 2.0, QubitId(i)).unwrap();
    }
    for i in 0..n - 1 {
        circuit.crz(theta.clone() * 1.3, QubitId(i), QubitId(i + 1)).unwrap();
    }
    circuit.measure_all().unwrap();
    circuit.bind_parameter("θ", angle)
}

fn probabilities(circuit: &Circuit) -> Vec<f64> {
    let mut sv = Statevector::new(circuit.num_qubits());
    for inst in circuit.instructions() {
        sv.apply(inst).unwrap();
    }
    sv.probabilities()
}

fn compile(circuit: &Circuit, basis: BasisGates) -> Circuit {
    let (pm, mut props) = PassManagerBuilder::new().with_basis_gates(basis).build();
    let mut compiled = circuit.clone();
    pm.run(&mut compiled, &mut props).unwrap();
    compiled
}

fn assert_same_distribution(a: &[f64], b: &[f64]) {
    assert_eq!(a.len(), b.len());
    for (i, (x, y)) in a.iter().zip(b).enumerate() {
        assert!((x - y).abs() < 1e-9, "basis state {i}: {x} vs {y}");
    }
}

#[test]
fn universal_basis_keeps_gate_sequence() {
    let circuit = layered_circuit(4, std::f64::consts::FRAC_PI_4);
    let compiled = compile(&circuit, BasisGates::universal());

    let names = |c: &Circuit| c.instructions().iter().map(|i| i.name()).collect::<Vec<_>>();
    assert_eq!(names(&compiled), names(&circuit));
    assert_eq!(compiled.measurements(), circuit.measurements());
}

#[test]
fn rz_sx_cx_lowering_removes_high_level_gates() {
    let circuit = layered_circuit(3, 0.9);
    let compiled = compile(&circuit, BasisGates::rz_sx_cx());

    let ops = compiled.count_ops();
    for gate in ["h", "ry", "crz"] {
        assert!(!ops.contains_key(gate), "{gate} survived lowering");
    }
    assert_eq!(ops.get("measure"), Some(&3));
    assert_same_distribution(&probabilities(&circuit), &probabilities(&compiled));
}

#[test]
fn pauli_and_phase_gates_lower_faithfully() {
    // Hadamards on both sides turn relative phases into populations.
    let mut circuit = Circuit::with_size("phases", 2, 2);
    circuit.h(QubitId(0)).unwrap().h(QubitId(1)).unwrap();
    circuit
        .rx(1.1, QubitId(0))
        .unwrap()
        .p(0.7, QubitId(0))
        .unwrap()
        .y(QubitId(1))
        .unwrap()
        .z(QubitId(1))
        .unwrap();
    circuit.cx(QubitId(0), QubitId(1)).unwrap();
    circuit.h(QubitId(0)).unwrap().h(QubitId(1)).unwrap();
    circuit.measure_all().unwrap();

    let expected = probabilities(&circuit);
    for basis in [BasisGates::rz_sx_cx(), BasisGates::rz_sx_cz()] {
        let compiled = compile(&circuit, basis);
        let ops = compiled.count_ops();
        for gate in ["y", "z", "p", "rx", "h"] {
            assert!(!ops.contains_key(gate), "{gate} survived lowering");
        }
        assert_same_distribution(&expected, &probabilities(&compiled));
    }
}

#[test]
fn rz_sx_cz_lowering_preserves_distribution() {
    let circuit = layered_circuit(3, 0.4);
    let compiled = compile(&circuit, BasisGates::rz_sx_cz());
    assert!(!compiled.count_ops().contains_key("cx"));
    assert_same_distribution(&probabilities(&circuit), &probabilities(&compiled));
}

#[test]
fn symbolic_circuit_is_rejected() {
    let mut circuit = Circuit::with_size("free", 1, 1);
    circuit
        .ry(ParameterExpression::symbol("φ"), QubitId(0))
        .unwrap();
    let (pm, mut props) = PassManagerBuilder::new().build();
    let err = pm.run(&mut circuit, &mut props).unwrap_err();
    assert!(matches!(err, CompileError::UnboundParameters(_)));
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(32))]

    #[test]
    fn lowering_is_exact_for_any_angle(n in 2u32..5, angle in -6.3f64..6.3) {
        let circuit = layered_circuit(n, angle);
        let compiled = compile(&circuit, BasisGates::rz_sx_cx());
        let (a, b) = (probabilities(&circuit), probabilities(&compiled));
        for (x, y) in a.iter().zip(&b) {
            prop_assert!((x - y).abs() < 1e-9);
        }
    }
}
