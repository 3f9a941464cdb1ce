//! qturb Local Statevector Simulator
//!
//! Exact statevector simulation of a circuit's unitary part followed by
//! sampling of measurement outcomes. Suitable for up to ~20 qubits.
//!
//! | Qubits | Memory |
//! |--------|--------|
//! | 10 | ~16 KB |
//! | 15 | ~512 KB |
//! | 20 | ~16 MB |
//!
//! # Example
//!
//! ```ignore
//! use qturb_adapter_sim::SimulatorBackend;
//! use qturb_hal::Backend;
//! use qturb_ir::Circuit;
//!
//! let backend = SimulatorBackend::new().with_seed(1);
//! let job_id = backend.submit(&Circuit::bell()?, 1024).await?;
//! let result = backend.wait(&job_id).await?;
//! for (bitstring, count) in result.counts.sorted() {
//!     println!("{bitstring}: {count}");
//! }
//! ```

mod simulator;
mod statevector;

pub use simulator::{DEFAULT_MAX_QUBITS, SimulatorBackend};
pub use statevector::{Sampler, Statevector, bitstring};
