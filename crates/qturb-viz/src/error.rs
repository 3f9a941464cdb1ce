//! Error types for the visualization crate.

use thiserror::Error;

/// Errors that can occur while building or writing figures.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum VizError {
    /// No fields were supplied.
    #[error("Cannot assemble a figure from zero fields")]
    NoFields,

    /// The number of fields disagrees with the number of time steps.
    #[error("Got {fields} fields for {time_steps} time steps")]
    StepCountMismatch {
        /// Number of fields supplied.
        fields: usize,
        /// Number of time steps requested.
        time_steps: usize,
    },

    /// Figure serialization failed.
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Writing output failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for visualization operations.
pub type VizResult<T> = Result<T, VizError>;
