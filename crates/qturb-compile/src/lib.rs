//! qturb Circuit Compilation
//!
//! Pass-based lowering of circuits to a backend's gate basis.
//!
//! ```text
//! Input Circuit
//!       │
//!       ▼
//! ┌─────────────┐
//! │ PassManager │ ◄── PropertySet (basis gates, qubit limit)
//! └─────────────┘
//!       │
//!       ├── QubitLimitCheck
//!       ├── UnboundParameterCheck
//!       ├── BasisTranslation
//!       ├── FoldParameters
//!       └── MeasurementVerification
//!       │
//!       ▼
//! Output Circuit (backend-compatible)
//! ```
//!
//! # Example
//!
//! ```rust
//! use qturb_compile::{BasisGates, PassManagerBuilder};
//! use qturb_ir::Circuit;
//!
//! let (pm, mut props) = PassManagerBuilder::new()
//!     .with_basis_gates(BasisGates::rz_sx_cx())
//!     .build();
//!
//! let mut circuit = Circuit::bell().unwrap();
//! pm.run(&mut circuit, &mut props).unwrap();
//! assert!(!circuit.count_ops().contains_key("h"));
//! ```

pub mod error;
pub mod manager;
pub mod pass;
pub mod passes;
pub mod property;

pub use error::{CompileError, CompileResult};
pub use manager::{PassManager, PassManagerBuilder};
pub use pass::{Pass, PassKind};
pub use passes::{
    BasisTranslation, FoldParameters, MeasurementVerification, QubitLimitCheck,
    UnboundParameterCheck, VerificationResult,
};
pub use property::{BasisGates, PropertySet};
