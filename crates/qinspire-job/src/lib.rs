//! Quantum Inspire job controller
//!
//! [`QiJob`] follows one unit of work on the Quantum Inspire platform from
//! creation to result:
//!
//! ```text
//!   pending(qobj) ──submit()──┐
//!                             ├──→ status() … status() ──→ result() / cancel()
//!   attach(id) ───────────────┘
//! ```
//!
//! The platform groups the executions of a job in a project. The job status
//! is derived from those executions on every [`QiJob::status`] call; see
//! [`qinspire_hal::SubJobTally`] for the rules.
//!
//! # Example
//!
//! ```ignore
//! use std::sync::Arc;
//! use qinspire_job::{PollConfig, QiJob};
//!
//! let mut job = QiJob::pending(backend, api, qobj);
//! job.submit().await?;
//!
//! let config = PollConfig::from_env()?;
//! let result = job.result_with(&config).await?;
//! if let Some(counts) = result.get_counts("bell") {
//!     println!("{counts:?}");
//! }
//! ```

mod config;
mod job;

pub use config::{DEFAULT_WAIT, PollConfig};
pub use job::{BACKEND_VERSION, JobSource, QiJob};

// Re-export common types
pub use qinspire_hal::{HalError, HalResult, JobId, JobResult, JobStatus};
