//! qturb Hardware Abstraction Layer
//!
//! A common interface for executing circuits on quantum backends:
//! - the [`Backend`] trait for job submission and management
//! - [`Capabilities`] describing qubit limits and gate sets
//! - [`ExecutionResult`] and [`Counts`] for measurement histograms
//!
//! # Example
//!
//! ```ignore
//! use qturb_hal::Backend;
//! use qturb_adapter_sim::SimulatorBackend;
//! use qturb_ir::Circuit;
//!
//! let backend = SimulatorBackend::new().with_seed(7);
//! let job = backend.submit(&Circuit::bell()?, 1024).await?;
//! let result = backend.wait(&job).await?;
//! println!("{:?}", result.counts.most_frequent());
//! ```

pub mod backend;
pub mod capability;
pub mod error;
pub mod job;
pub mod result;

pub use backend::{Backend, BackendAvailability, ValidationResult};
pub use capability::{Capabilities, GateSet};
pub use error::{HalError, HalResult};
pub use job::{Job, JobId, JobStatus};
pub use result::{Counts, ExecutionResult};
