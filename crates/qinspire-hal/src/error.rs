//! Error types for the HAL crate.

use thiserror::Error;

use crate::job::JobStatus;

/// Errors that can occur in HAL operations.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum HalError {
    /// The job already carries an identifier and cannot be submitted again.
    #[error("Job has already been submitted: {0}")]
    AlreadySubmitted(String),

    /// The job is still waiting for `submit()` and has no remote project yet.
    #[error("Job has not been submitted yet")]
    NotSubmitted,

    /// The job identifier cannot be used as a project reference.
    #[error("Invalid job id '{0}': expected a numeric project id")]
    InvalidJobId(String),

    /// Authentication failed.
    #[error("Authentication failed: {0}")]
    AuthenticationFailed(String),

    /// Job submission failed.
    #[error("Job submission failed: {0}")]
    SubmissionFailed(String),

    /// The job reached a final state other than done, so no result exists.
    #[error("Result unavailable for job {job_id}: job is {status}")]
    ResultUnavailable {
        /// The job that was waited on.
        job_id: String,
        /// The final status that ended the wait.
        status: JobStatus,
    },

    /// Project not found on the remote platform.
    #[error("Project not found: {0}")]
    ProjectNotFound(String),

    /// Network error.
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    /// Serialization error.
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Configuration error.
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Timeout waiting for job.
    #[error("Failed getting result for job {0}: timeout reached")]
    Timeout(String),

    /// Generic backend error.
    #[error("Backend error: {0}")]
    Backend(String),
}

/// Result type for HAL operations.
pub type HalResult<T> = Result<T, HalError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_result_unavailable_display() {
        let err = HalError::ResultUnavailable {
            job_id: "42".into(),
            status: JobStatus::Cancelled,
        };
        let msg = err.to_string();
        assert!(msg.contains("42"));
        assert!(msg.contains("Cancelled"));
    }

    #[test]
    fn test_timeout_display() {
        let err = HalError::Timeout("17".into());
        assert!(err.to_string().contains("timeout reached"));
    }
}
