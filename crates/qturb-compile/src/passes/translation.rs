//! Basis translation pass.

use std::f64::consts::{FRAC_PI_2, PI};

use tracing::debug;

use qturb_ir::{Circuit, Instruction, ParameterExpression, QubitId, StandardGate};

use crate::error::{CompileError, CompileResult};
use crate::pass::{Pass, PassKind};
use crate::property::{BasisGates, PropertySet};

/// How many rewrite steps a single gate may take before it is declared
/// untranslatable.
const MAX_REWRITE_DEPTH: usize = 6;

/// Rewrites gates outside the target basis.
///
/// Rules, each exact up to global phase:
///
/// | Gate | Replacement |
/// |------|-------------|
/// | `h` | `rz(π/2) · sx · rz(π/2)` |
/// | `x` | `sx · sx` |
/// | `y` | `rz(π) · x` |
/// | `z` | `rz(π)` |
/// | `p(θ)` | `rz(θ)` |
/// | `rx(θ)` | `h · rz(θ) · h` |
/// | `ry(θ)` | `sx · rz(θ + π) · sx · rz(π)` |
/// | `sx` | `h · rz(π/2) · h` |
/// | `cx` | `h(t) · cz · h(t)` |
/// | `cz` | `h(t) · cx · h(t)` |
/// | `crz(θ)` | `rz(θ/2)(t) · cx · rz(-θ/2)(t) · cx` |
///
/// Replacements are rewritten again until every gate is in the basis. When
/// the basis already holds every gate the pass leaves the circuit untouched.
pub struct BasisTranslation;

impl Pass for BasisTranslation {
    fn name(&self) -> &'static str {
        "basis_translation"
    }

    fn kind(&self) -> PassKind {
        PassKind::Transformation
    }

    fn run(&self, circuit: &mut Circuit, properties: &mut PropertySet) -> CompileResult<()> {
        let basis = properties
            .basis_gates
            .as_ref()
            .ok_or(CompileError::MissingBasisGates)?;

        let all_in_basis = circuit
            .instructions()
            .iter()
            .all(|inst| !inst.is_gate() || basis.contains(inst.name()));
        if all_in_basis {
            debug!("All gates already in basis");
            return Ok(());
        }

        let mut translated = Circuit::with_size(
            circuit.name(),
            circuit.num_qubits() as u32,
            circuit.num_clbits() as u32,
        );
        for inst in circuit.instructions() {
            for replacement in translate(inst, basis, 0)? {
                translated.append(replacement)?;
            }
        }

        debug!(
            "Translated {} ops into {} ops",
            circuit.num_ops(),
            translated.num_ops()
        );
        *circuit = translated;
        Ok(())
    }

    fn should_run(&self, _circuit: &Circuit, properties: &PropertySet) -> bool {
        properties.basis_gates.is_some()
    }
}

fn translate(
    inst: &Instruction,
    basis: &BasisGates,
    depth: usize,
) -> CompileResult<Vec<Instruction>> {
    let Some(gate) = inst.as_gate() else {
        return Ok(vec![inst.clone()]);
    };
    if basis.contains(gate.name()) {
        return Ok(vec![inst.clone()]);
    }
    if depth >= MAX_REWRITE_DEPTH {
        return Err(CompileError::GateNotInBasis(gate.name().to_string()));
    }

    let steps = rewrite(&gate.kind, &inst.qubits);
    if steps.is_empty() {
        return Err(CompileError::GateNotInBasis(gate.name().to_string()));
    }
    let mut out = vec![];
    for step in steps {
        out.extend(translate(&step, basis, depth + 1)?);
    }
    Ok(out)
}

/// One rewrite step for a gate outside the basis.
fn rewrite(gate: &StandardGate, qubits: &[QubitId]) -> Vec<Instruction> {
    let one = |g: StandardGate, q: QubitId| Instruction::single_qubit_gate(g, q);
    let rz = |angle: ParameterExpression, q: QubitId| one(StandardGate::Rz(angle), q);

    match (gate, qubits) {
        (StandardGate::H, &[q]) => vec![
            rz(FRAC_PI_2.into(), q),
            one(StandardGate::SX, q),
            rz(FRAC_PI_2.into(), q),
        ],
        (StandardGate::X, &[q]) => vec![one(StandardGate::SX, q), one(StandardGate::SX, q)],
        (StandardGate::Y, &[q]) => vec![rz(PI.into(), q), one(StandardGate::X, q)],
        (StandardGate::Z, &[q]) => vec![rz(PI.into(), q)],
        (StandardGate::P(theta), &[q]) => vec![rz(theta.clone(), q)],
        (StandardGate::Rx(theta), &[q]) => vec![
            one(StandardGate::H, q),
            rz(theta.clone(), q),
            one(StandardGate::H, q),
        ],
        (StandardGate::Ry(theta), &[q]) => vec![
            one(StandardGate::SX, q),
            rz(theta.clone() + PI.into(), q),
            one(StandardGate::SX, q),
            rz(PI.into(), q),
        ],
        (StandardGate::SX, &[q]) => vec![
            one(StandardGate::H, q),
            rz(FRAC_PI_2.into(), q),
            one(StandardGate::H, q),
        ],
        (StandardGate::CX, &[c, t]) => vec![
            one(StandardGate::H, t),
            Instruction::two_qubit_gate(StandardGate::CZ, c, t),
            one(StandardGate::H, t),
        ],
        (StandardGate::CZ, &[c, t]) => vec![
            one(StandardGate::H, t),
            Instruction::two_qubit_gate(StandardGate::CX, c, t),
            one(StandardGate::H, t),
        ],
        (StandardGate::CRz(theta), &[c, t]) => vec![
            rz(theta.clone() / 2.0, t),
            Instruction::two_qubit_gate(StandardGate::CX, c, t),
            rz(-(theta.clone() / 2.0), t),
            Instruction::two_qubit_gate(StandardGate::CX, c, t),
        ],
        // Rz has no rewrite; a basis without it cannot express rotations.
        _ => vec![],
    }
}
