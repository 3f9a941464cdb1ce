//! Verification passes.

use rustc_hash::FxHashSet;
use tracing::debug;

use qturb_ir::Circuit;

use crate::error::{CompileError, CompileResult};
use crate::pass::{Pass, PassKind};
use crate::property::PropertySet;

/// Findings of [`MeasurementVerification`], stored in the `PropertySet`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VerificationResult {
    /// Number of distinct qubits that are measured.
    pub qubits_measured: usize,
    /// Number of measurement instructions.
    pub measurements_found: usize,
}

/// Checks that no gate acts on a qubit after that qubit was measured.
pub struct MeasurementVerification;

impl Pass for MeasurementVerification {
    fn name(&self) -> &'static str {
        "measurement_verification"
    }

    fn kind(&self) -> PassKind {
        PassKind::Analysis
    }

    fn run(&self, circuit: &mut Circuit, properties: &mut PropertySet) -> CompileResult<()> {
        let mut measured = FxHashSet::default();
        let mut measurements_found = 0;

        for inst in circuit.instructions() {
            if inst.is_measure() {
                measurements_found += 1;
                measured.extend(inst.qubits.iter().copied());
            } else if inst.is_gate() {
                if let Some(q) = inst.qubits.iter().find(|q| measured.contains(*q)) {
                    return Err(CompileError::MeasurementViolation {
                        gate_name: inst.name().to_string(),
                        qubit: q.0,
                    });
                }
            }
        }

        let result = VerificationResult {
            qubits_measured: measured.len(),
            measurements_found,
        };
        debug!(
            "Measurement verification passed: {} qubits measured, {} measurements",
            result.qubits_measured, result.measurements_found
        );
        properties.insert(result);
        Ok(())
    }
}

/// Rejects circuits wider than the target.
pub struct QubitLimitCheck;

impl Pass for QubitLimitCheck {
    fn name(&self) -> &'static str {
        "qubit_limit_check"
    }

    fn kind(&self) -> PassKind {
        PassKind::Analysis
    }

    fn run(&self, circuit: &mut Circuit, properties: &mut PropertySet) -> CompileResult<()> {
        match properties.max_qubits {
            Some(available) if circuit.num_qubits() > available as usize => {
                Err(CompileError::CircuitTooLarge {
                    required: circuit.num_qubits(),
                    available,
                })
            }
            _ => Ok(()),
        }
    }

    fn should_run(&self, _circuit: &Circuit, properties: &PropertySet) -> bool {
        properties.max_qubits.is_some()
    }
}
