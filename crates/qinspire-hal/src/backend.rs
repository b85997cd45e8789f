//! Collaborator traits consumed by the job controller.
//!
//! A job talks to two remote parties:
//!
//! ```text
//!   Backend     ── run() ──────────────────→ JobId
//!               ── get_experiment_results() → Vec<ExperimentResult>
//!
//!   ProjectApi  ── get_jobs_from_project() ─→ Vec<RemoteJob>
//!               ── delete_project() ────────→ ()
//! ```
//!
//! ## Design principles
//!
//! - **Async-native**: all I/O methods are async.
//! - **Thread-safe**: `Send + Sync` bound enables shared ownership through
//!   `Arc<dyn ..>`.
//! - **No retries**: implementations report transport failures as-is; callers
//!   decide what to do with them.

use async_trait::async_trait;

use crate::error::HalResult;
use crate::job::{JobId, ProjectId, RemoteJob};
use crate::qobj::QasmQobj;
use crate::result::ExperimentResult;

/// A backend able to execute compiled payloads.
#[async_trait]
pub trait Backend: Send + Sync {
    /// Name of this backend (e.g. `"QX single-node simulator"`).
    fn backend_name(&self) -> &str;

    /// Start remote execution of a payload.
    ///
    /// Returns the identifier of the remote project created for it.
    async fn run(&self, qobj: &QasmQobj) -> HalResult<JobId>;

    /// Fetch per-experiment results of a finished job.
    ///
    /// MUST only be called once the job status is `Done`.
    async fn get_experiment_results(&self, job_id: &JobId) -> HalResult<Vec<ExperimentResult>>;
}

/// The project endpoints of the remote API.
#[async_trait]
pub trait ProjectApi: Send + Sync {
    /// List the executions belonging to a project.
    async fn get_jobs_from_project(&self, project_id: ProjectId) -> HalResult<Vec<RemoteJob>>;

    /// Delete a project and everything running under it.
    ///
    /// Irreversible.
    async fn delete_project(&self, project_id: ProjectId) -> HalResult<()>;
}
