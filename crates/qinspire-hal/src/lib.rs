//! Quantum Inspire Hardware Abstraction Layer
//!
//! This crate holds the types shared between the job controller and the
//! remote platform bindings.
//!
//! # Overview
//!
//! - [`Backend`] executes a [`QasmQobj`] and serves its results
//! - [`ProjectApi`] lists and deletes the remote project behind a job
//! - [`JobStatus`] is the closed set of job states; [`SubJobTally`] derives
//!   it from the remote executions of a project
//! - [`JobResult`] and [`ExperimentResult`] carry the outcome of a finished job
//!
//! # Implementing a Backend
//!
//! ```ignore
//! use qinspire_hal::{Backend, ExperimentResult, HalResult, JobId, QasmQobj};
//! use async_trait::async_trait;
//!
//! struct MyBackend;
//!
//! #[async_trait]
//! impl Backend for MyBackend {
//!     fn backend_name(&self) -> &str { "my_backend" }
//!
//!     async fn run(&self, qobj: &QasmQobj) -> HalResult<JobId> {
//!         // Create a project and start its executions
//!         # todo!()
//!     }
//!
//!     async fn get_experiment_results(&self, job_id: &JobId) -> HalResult<Vec<ExperimentResult>> {
//!         // Read back the measured histograms
//!         # todo!()
//!     }
//! }
//! ```

pub mod backend;
pub mod error;
pub mod job;
pub mod qobj;
pub mod result;

pub use backend::{Backend, ProjectApi};
pub use error::{HalError, HalResult};
pub use job::{JobId, JobStatus, ProjectId, RemoteJob, RemoteJobStatus, SubJobTally};
pub use qobj::{QasmExperiment, QasmQobj};
pub use result::{ExperimentData, ExperimentHeader, ExperimentResult, JobResult};
