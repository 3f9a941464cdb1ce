//! Error types for the compilation crate.

use thiserror::Error;

/// Errors that can occur during compilation.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum CompileError {
    /// Error from the IR crate.
    #[error("IR error: {0}")]
    Ir(#[from] qturb_ir::IrError),

    /// Missing basis gates.
    #[error("Missing basis gates for translation")]
    MissingBasisGates,

    /// Gate cannot be expressed in the target basis.
    #[error("Gate '{0}' not in target basis")]
    GateNotInBasis(String),

    /// Gate parameters still reference free symbols.
    #[error("Circuit has unbound parameters: {}", .0.join(", "))]
    UnboundParameters(Vec<String>),

    /// A gate acts on a qubit after the qubit was measured.
    #[error("Gate '{gate_name}' acts on qubit {qubit} after it was measured")]
    MeasurementViolation {
        /// The offending gate.
        gate_name: String,
        /// The measured qubit.
        qubit: u32,
    },

    /// Circuit too large for target.
    #[error("Circuit requires {required} qubits but target only has {available}")]
    CircuitTooLarge {
        /// Qubits the circuit uses.
        required: usize,
        /// Qubits the target offers.
        available: u32,
    },
}

/// Result type for compilation operations.
pub type CompileResult<T> = Result<T, CompileError>;
