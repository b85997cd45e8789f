//! Job lifecycle types.
//!
//! A Quantum Inspire job is backed by a remote *project* that holds one or
//! more executions (sub-jobs). The job status is never reported directly by
//! the platform; it is derived from the statuses of those sub-jobs:
//!
//! ```text
//!   Initializing ──→ Queued ──→ Running ──→ Done
//!                      │           │
//!                      │           ├──→ Error      (partially cancelled)
//!                      │           │
//!                      └───────────┴──→ Cancelled  (all cancelled)
//! ```
//!
//! The derivation is implemented by [`SubJobTally::status`].

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{HalError, HalResult};

/// Unique identifier for a job.
///
/// On Quantum Inspire the identifier is the id of the project that groups the
/// job's executions, so it is numeric in practice. It stays a string here and
/// is converted with [`JobId::project_id`] at the API boundary.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct JobId(pub String);

impl JobId {
    /// Create a new job ID.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Interpret the identifier as a remote project reference.
    pub fn project_id(&self) -> HalResult<ProjectId> {
        self.0
            .trim()
            .parse::<u64>()
            .map(ProjectId)
            .map_err(|_| HalError::InvalidJobId(self.0.clone()))
    }

    /// Borrow the raw identifier.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for JobId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<String> for JobId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl From<&str> for JobId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl From<ProjectId> for JobId {
    fn from(id: ProjectId) -> Self {
        Self(id.0.to_string())
    }
}

/// Numeric project reference used by the remote API.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ProjectId(pub u64);

impl fmt::Display for ProjectId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Status of a job.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum JobStatus {
    /// Job object exists but its status has not been queried yet.
    Initializing,
    /// Job is waiting in queue.
    Queued,
    /// Job is currently running.
    Running,
    /// Job completed successfully.
    Done,
    /// Job was cancelled.
    Cancelled,
    /// Some, but not all, executions of the job were cancelled.
    Error,
}

impl JobStatus {
    /// Check if this is a final state.
    pub fn is_final(&self) -> bool {
        matches!(self, JobStatus::Done | JobStatus::Cancelled | JobStatus::Error)
    }

    /// Check if the job is still pending (queued or running).
    pub fn is_pending(&self) -> bool {
        matches!(self, JobStatus::Queued | JobStatus::Running)
    }

    /// Check if the job completed successfully.
    pub fn is_success(&self) -> bool {
        matches!(self, JobStatus::Done)
    }
}

impl fmt::Display for JobStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            JobStatus::Initializing => "Initializing",
            JobStatus::Queued => "Queued",
            JobStatus::Running => "Running",
            JobStatus::Done => "Done",
            JobStatus::Cancelled => "Cancelled",
            JobStatus::Error => "Error",
        };
        f.write_str(name)
    }
}

/// Status of a single execution inside a remote project.
///
/// Built from the raw wire string; values the platform may add later land in
/// [`RemoteJobStatus::Other`] and count as not yet terminal.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum RemoteJobStatus {
    /// `RUNNING`
    Running,
    /// `CANCELLED`
    Cancelled,
    /// `COMPLETE`
    Complete,
    /// Anything else (e.g. `NEW`).
    Other(String),
}

impl From<&str> for RemoteJobStatus {
    fn from(s: &str) -> Self {
        match s {
            "RUNNING" => RemoteJobStatus::Running,
            "CANCELLED" => RemoteJobStatus::Cancelled,
            "COMPLETE" => RemoteJobStatus::Complete,
            other => RemoteJobStatus::Other(other.to_string()),
        }
    }
}

impl From<String> for RemoteJobStatus {
    fn from(s: String) -> Self {
        RemoteJobStatus::from(s.as_str())
    }
}

impl From<RemoteJobStatus> for String {
    fn from(status: RemoteJobStatus) -> Self {
        match status {
            RemoteJobStatus::Running => "RUNNING".into(),
            RemoteJobStatus::Cancelled => "CANCELLED".into(),
            RemoteJobStatus::Complete => "COMPLETE".into(),
            RemoteJobStatus::Other(s) => s,
        }
    }
}

/// An execution record as listed by `get_jobs_from_project`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RemoteJob {
    /// Remote execution id.
    #[serde(default)]
    pub id: u64,
    /// Execution status.
    pub status: RemoteJobStatus,
}

impl RemoteJob {
    /// Create a record with the given status.
    pub fn new(id: u64, status: impl Into<RemoteJobStatus>) -> Self {
        Self {
            id,
            status: status.into(),
        }
    }
}

/// Counts of sub-jobs per remote state.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SubJobTally {
    /// Number of sub-jobs in the project.
    pub total: usize,
    /// Sub-jobs reported `CANCELLED`.
    pub cancelled: usize,
    /// Sub-jobs reported `RUNNING`.
    pub running: usize,
    /// Sub-jobs reported `COMPLETE`.
    pub completed: usize,
}

impl SubJobTally {
    /// Count the sub-jobs of a project per state.
    pub fn from_jobs(jobs: &[RemoteJob]) -> Self {
        jobs.iter().fold(
            Self {
                total: jobs.len(),
                ..Self::default()
            },
            |mut tally, job| {
                match job.status {
                    RemoteJobStatus::Running => tally.running += 1,
                    RemoteJobStatus::Cancelled => tally.cancelled += 1,
                    RemoteJobStatus::Complete => tally.completed += 1,
                    RemoteJobStatus::Other(_) => {}
                }
                tally
            },
        )
    }

    /// Derive the job status.
    ///
    /// The checks are ordered and must stay that way: a partial cancellation
    /// wins over everything, and a mix of completed and unfinished sub-jobs
    /// is still running. An empty project has nothing listed yet and is
    /// queued.
    pub fn status(&self) -> JobStatus {
        let Self {
            total,
            cancelled,
            running,
            completed,
        } = *self;

        if total == 0 {
            JobStatus::Queued
        } else if 0 < cancelled && cancelled < total {
            JobStatus::Error
        } else if cancelled == total {
            JobStatus::Cancelled
        } else if running > 0 || (0 < completed && completed < total) {
            JobStatus::Running
        } else if completed == total {
            JobStatus::Done
        } else {
            JobStatus::Queued
        }
    }
}
