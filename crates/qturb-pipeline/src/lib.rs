//! qturb Pipeline
//!
//! For each configured time step: build the turbulence circuit, execute it
//! through a [`CircuitExecutor`], and generate a turbulence field. The
//! output holds everything needed to present the run; nothing here prints
//! or writes files.
//!
//! # Example
//!
//! ```rust,no_run
//! use qturb_adapter_sim::SimulatorBackend;
//! use qturb_pipeline::{BackendExecutor, Pipeline, PipelineConfig};
//!
//! # async fn demo() -> Result<(), qturb_pipeline::PipelineError> {
//! let config = PipelineConfig { seed: Some(7), ..PipelineConfig::default() };
//! let executor = BackendExecutor::new(SimulatorBackend::new().with_seed(7), config.shots);
//! let output = Pipeline::new(config, executor)?.run().await?;
//! assert_eq!(output.len(), 10);
//! # Ok(())
//! # }
//! ```

pub mod circuit;
pub mod config;
pub mod error;
pub mod executor;
pub mod pipeline;

pub use circuit::{THETA, turbulence_circuit};
pub use config::{PipelineConfig, TimeSteps, linspace};
pub use error::{ConfigError, ConfigResult, PipelineError, PipelineResult};
pub use executor::{BackendExecutor, CircuitExecutor};
pub use pipeline::{Pipeline, PipelineOutput, StepRecord};
