//! Error types for the IR crate.

use crate::qubit::{ClbitId, QubitId};
use thiserror::Error;

/// Errors that can occur while building or transforming a circuit.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum IrError {
    /// Qubit index is outside the circuit.
    #[error("Qubit {qubit} not found in circuit with {num_qubits} qubits{}", gate_context(.gate_name))]
    QubitNotFound {
        /// The offending qubit.
        qubit: QubitId,
        /// Number of qubits in the circuit.
        num_qubits: u32,
        /// Gate that referenced the qubit, if any.
        gate_name: Option<String>,
    },

    /// Classical bit index is outside the circuit.
    #[error("Classical bit {clbit} not found in circuit with {num_clbits} bits")]
    ClbitNotFound {
        /// The offending classical bit.
        clbit: ClbitId,
        /// Number of classical bits in the circuit.
        num_clbits: u32,
    },

    /// Gate received the wrong number of operands.
    #[error("Gate '{gate_name}' requires {expected} qubits, got {got}")]
    QubitCountMismatch {
        /// Name of the gate.
        gate_name: String,
        /// Expected number of qubits.
        expected: u32,
        /// Actual number of qubits provided.
        got: u32,
    },

    /// The same qubit appears twice in one operation.
    #[error("Duplicate qubit {qubit} in operation{}", gate_context(.gate_name))]
    DuplicateQubit {
        /// The duplicated qubit.
        qubit: QubitId,
        /// Gate that referenced the qubit, if any.
        gate_name: Option<String>,
    },

    /// A parameter is still symbolic where a number is required.
    #[error("Parameter '{0}' is unbound")]
    UnboundParameter(String),

    /// Circuit must have at least one qubit.
    #[error("Circuit must have at least one qubit")]
    EmptyCircuit,
}

#[allow(clippy::ref_option)]
fn gate_context(gate_name: &Option<String>) -> String {
    gate_name
        .as_ref()
        .map(|name| format!(" (gate: {name})"))
        .unwrap_or_default()
}

/// Result type for IR operations.
pub type IrResult<T> = Result<T, IrError>;
