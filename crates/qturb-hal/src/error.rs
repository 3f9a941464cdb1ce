//! Backend and job errors.

use thiserror::Error;

use crate::job::{JobId, JobStatus};

/// Errors raised while validating, submitting or collecting a job.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum HalError {
    /// Backend refused work.
    #[error("Backend not available: {0}")]
    BackendUnavailable(String),

    /// Circuit is wider than the backend.
    #[error("Circuit needs {required} qubits but {backend} supports {available}")]
    CircuitTooLarge {
        backend: String,
        required: usize,
        available: u32,
    },

    /// Shot count outside `1..=max`.
    #[error("Invalid shot count {shots}: expected 1..={max}")]
    InvalidShots { shots: u32, max: u32 },

    /// Circuit uses something the backend cannot run.
    #[error("Invalid circuit: {0}")]
    InvalidCircuit(String),

    #[error("Job not found: {0}")]
    JobNotFound(JobId),

    /// Result requested before the job reached a terminal state.
    #[error("Job {job_id} has no result yet ({status})")]
    ResultNotReady { job_id: JobId, status: JobStatus },

    #[error("Job failed: {0}")]
    JobFailed(String),

    #[error("Job {0} was cancelled")]
    JobCancelled(JobId),

    /// [`Backend::wait`](crate::Backend::wait) ran out of polls.
    #[error("Gave up on job {job_id} after {polls} polls")]
    Timeout { job_id: JobId, polls: u32 },
}

/// Result type for backend operations.
pub type HalResult<T> = Result<T, HalError>;
