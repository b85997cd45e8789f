//! Error types for the Quantum Inspire API adapter.

use thiserror::Error;

/// Result type for Quantum Inspire API operations.
pub type QiApiResult<T> = Result<T, QiApiError>;

/// Errors that can occur when talking to the Quantum Inspire API.
#[derive(Debug, Error)]
pub enum QiApiError {
    /// HTTP request failed.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// JSON parsing error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Authentication failed.
    #[error("Authentication failed: {0}")]
    AuthFailed(String),

    /// Missing credentials.
    #[error("Missing Quantum Inspire credentials (set API_USERNAME and API_PASSWORD)")]
    MissingCredentials,

    /// Invalid base URL.
    #[error("Invalid API URL '{0}'")]
    InvalidUrl(String),

    /// Project not found.
    #[error("Project not found: {0}")]
    ProjectNotFound(String),

    /// API error response.
    #[error("API error ({status}): {message}")]
    ApiError { status: u16, message: String },
}

impl From<QiApiError> for qinspire_hal::HalError {
    fn from(e: QiApiError) -> Self {
        match e {
            QiApiError::Http(err) => qinspire_hal::HalError::Network(err),
            QiApiError::Json(err) => qinspire_hal::HalError::Serialization(err),
            QiApiError::MissingCredentials | QiApiError::AuthFailed(_) => {
                qinspire_hal::HalError::AuthenticationFailed(e.to_string())
            }
            QiApiError::InvalidUrl(_) => qinspire_hal::HalError::Configuration(e.to_string()),
            QiApiError::ProjectNotFound(id) => qinspire_hal::HalError::ProjectNotFound(id),
            QiApiError::ApiError { .. } => qinspire_hal::HalError::Backend(e.to_string()),
        }
    }
}
