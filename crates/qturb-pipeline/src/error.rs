//! Error types for the pipeline crate.

use std::path::PathBuf;

use thiserror::Error;

/// Errors raised while loading or validating a [`PipelineConfig`](crate::PipelineConfig).
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ConfigError {
    /// The configuration file could not be read.
    #[error("Cannot read config file {path}: {source}")]
    Io {
        /// File that failed to load.
        path: PathBuf,
        /// Underlying error.
        source: std::io::Error,
    },

    /// The configuration file is not valid YAML for this schema.
    #[error("Parse error: {0}")]
    Parse(#[from] serde_yaml_ng::Error),

    /// A value is out of range.
    #[error("Validation error: {0}")]
    Validation(String),
}

/// Errors that abort a pipeline run.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum PipelineError {
    /// Invalid configuration.
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Circuit construction failed.
    #[error("Circuit error: {0}")]
    Ir(#[from] qturb_ir::IrError),

    /// Compilation for the backend failed.
    #[error("Compilation error: {0}")]
    Compile(#[from] qturb_compile::CompileError),

    /// The backend rejected or failed the job.
    #[error("Backend error: {0}")]
    Hal(#[from] qturb_hal::HalError),
}

/// Result type for configuration loading.
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Result type for pipeline operations.
pub type PipelineResult<T> = Result<T, PipelineError>;
