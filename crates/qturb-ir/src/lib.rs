//! qturb Circuit Intermediate Representation
//!
//! Core data structures for quantum circuits: qubit and classical bit
//! identifiers, symbolic gate parameters, gates, instructions and the
//! [`Circuit`] builder.
//!
//! # Example: Parameterized Circuit
//!
//! ```rust
//! use qturb_ir::{Circuit, ParameterExpression, QubitId};
//! use std::f64::consts::PI;
//!
//! let theta = ParameterExpression::symbol("θ");
//!
//! let mut circuit = Circuit::with_size("variational", 2, 2);
//! circuit.h(QubitId(0)).unwrap();
//! circuit.cx(QubitId(0), QubitId(1)).unwrap();
//! circuit.ry(theta.clone() * 0.5, QubitId(1)).unwrap();
//! circuit.measure_all().unwrap();
//!
//! assert!(circuit.is_parameterized());
//! let bound = circuit.bind_parameter("θ", PI / 4.0);
//! assert!(!bound.is_parameterized());
//! ```
//!
//! # Supported Gates
//!
//! | Gate | Qubits | Description |
//! |------|--------|-------------|
//! | `H` | 1 | Hadamard gate |
//! | `X`, `Y`, `Z` | 1 | Pauli gates |
//! | `SX` | 1 | sqrt(X) |
//! | `Rx`, `Ry`, `Rz` | 1 | Rotation gates |
//! | `P` | 1 | Phase gate |
//! | `CX`, `CZ` | 2 | Controlled-X and controlled-Z |
//! | `CRz` | 2 | Controlled Z rotation |

pub mod circuit;
pub mod error;
pub mod gate;
pub mod instruction;
pub mod parameter;
pub mod qubit;

pub use circuit::Circuit;
pub use error::{IrError, IrResult};
pub use gate::{Gate, Matrix2, StandardGate};
pub use instruction::{Instruction, InstructionKind};
pub use parameter::ParameterExpression;
pub use qubit::{ClbitId, QubitId};
