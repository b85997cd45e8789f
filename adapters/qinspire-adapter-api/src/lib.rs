//! Quantum Inspire API adapter
//!
//! This crate binds the project endpoints of the Quantum Inspire REST API
//! that a [`qinspire_job::QiJob`] needs to follow a job: listing the
//! executions of a project and deleting a project. [`QiApiClient`]
//! implements [`qinspire_hal::ProjectApi`].
//!
//! # Authentication
//!
//! ```bash
//! export API_USERNAME="you@example.com"
//! export API_PASSWORD="your-password"
//! export QI_API_URL="https://api.quantum-inspire.com"  # optional, this is the default
//! ```
//!
//! # Example
//!
//! ```ignore
//! use std::sync::Arc;
//! use qinspire_adapter_api::QiApiClient;
//! use qinspire_hal::JobId;
//! use qinspire_job::QiJob;
//!
//! let api = Arc::new(QiApiClient::from_env()?);
//! let mut job = QiJob::attach(backend, api, JobId::new("4242")).await?;
//! println!("status: {}", job.status().await?);
//! ```
//!
//! [`qinspire_job::QiJob`]: https://docs.rs/qinspire-job

mod api;
mod error;

pub use api::{ApiConfig, BASE_URL, QiApiClient};
pub use error::{QiApiError, QiApiResult};

// Re-export common types
pub use qinspire_hal::{ProjectApi, ProjectId, RemoteJob};
