//! The job controller.

use std::fmt;
use std::sync::Arc;
use std::time::Duration;

use chrono::Utc;
use tokio::time::{Instant, sleep};
use tracing::{debug, info, instrument};

use qinspire_hal::{
    Backend, ExperimentHeader, HalError, HalResult, JobId, JobResult, JobStatus, ProjectApi,
    ProjectId, QasmQobj, SubJobTally,
};

use crate::config::PollConfig;

/// Version reported in every [`JobResult`].
pub const BACKEND_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Where a job comes from.
#[derive(Debug, Clone)]
pub enum JobSource {
    /// A payload that still has to be submitted with [`QiJob::submit`].
    PendingSubmission {
        /// The compiled payload.
        qobj: QasmQobj,
    },
    /// A job that already runs remotely under `id`.
    AttachedToExisting {
        /// The remote project id.
        id: JobId,
    },
}

enum Submission {
    Pending(QasmQobj),
    Submitted {
        id: JobId,
        /// `None` when the job was attached by id.
        qobj: Option<QasmQobj>,
    },
}

/// A job executed on the Quantum Inspire platform.
///
/// A job is either created from a payload and submitted later, or attached to
/// a project that already runs remotely:
///
/// ```ignore
/// let mut job = QiJob::pending(backend.clone(), api.clone(), qobj);
/// job.submit().await?;
/// let result = job.result(Some(Duration::from_secs(60)), Duration::from_millis(500)).await?;
///
/// // later, from a stored id
/// let job = QiJob::attach(backend, api, JobId::new("4242")).await?;
/// ```
///
/// The status is never pushed by the platform. Every [`QiJob::status`] call
/// lists the executions of the job's project and derives the job status from
/// them; the last value is kept in [`QiJob::last_status`].
pub struct QiJob {
    backend: Arc<dyn Backend>,
    api: Arc<dyn ProjectApi>,
    submission: Submission,
    status: JobStatus,
    experiments: Option<Vec<ExperimentHeader>>,
}

impl fmt::Debug for QiJob {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("QiJob")
            .field("backend", &self.backend.backend_name())
            .field("job_id", &self.job_id())
            .field("status", &self.status)
            .finish()
    }
}

impl QiJob {
    /// Create a job from its source.
    ///
    /// Attaching to an existing job queries its status once.
    pub async fn new(
        backend: Arc<dyn Backend>,
        api: Arc<dyn ProjectApi>,
        source: JobSource,
    ) -> HalResult<Self> {
        match source {
            JobSource::PendingSubmission { qobj } => Ok(Self::pending(backend, api, qobj)),
            JobSource::AttachedToExisting { id } => Self::attach(backend, api, id).await,
        }
    }

    /// Create a job for a payload that has not been submitted yet.
    ///
    /// No remote call is made.
    pub fn pending(backend: Arc<dyn Backend>, api: Arc<dyn ProjectApi>, qobj: QasmQobj) -> Self {
        Self {
            backend,
            api,
            submission: Submission::Pending(qobj),
            status: JobStatus::Initializing,
            experiments: None,
        }
    }

    /// Recreate a job from the id of a project that already runs remotely.
    pub async fn attach(
        backend: Arc<dyn Backend>,
        api: Arc<dyn ProjectApi>,
        id: JobId,
    ) -> HalResult<Self> {
        let mut job = Self {
            backend,
            api,
            submission: Submission::Submitted { id, qobj: None },
            status: JobStatus::Initializing,
            experiments: None,
        };
        job.status().await?;
        Ok(job)
    }

    /// The job id, or `None` while the job waits for submission.
    pub fn job_id(&self) -> Option<&JobId> {
        match &self.submission {
            Submission::Pending(_) => None,
            Submission::Submitted { id, .. } => Some(id),
        }
    }

    /// The backend executing this job.
    pub fn backend(&self) -> &Arc<dyn Backend> {
        &self.backend
    }

    /// The payload, if this job was created from one.
    pub fn qobj(&self) -> Option<&QasmQobj> {
        match &self.submission {
            Submission::Pending(qobj) => Some(qobj),
            Submission::Submitted { qobj, .. } => qobj.as_ref(),
        }
    }

    /// Headers of the experiments, known once the result has been fetched.
    pub fn experiments(&self) -> Option<&[ExperimentHeader]> {
        self.experiments.as_deref()
    }

    /// Status computed by the most recent [`QiJob::status`] call.
    pub fn last_status(&self) -> JobStatus {
        self.status
    }

    /// Submit the payload to the backend.
    ///
    /// Fails with [`HalError::AlreadySubmitted`] if the job has an id, without
    /// contacting the backend.
    #[instrument(skip(self))]
    pub async fn submit(&mut self) -> HalResult<JobId> {
        let qobj = match &self.submission {
            Submission::Submitted { id, .. } => {
                return Err(HalError::AlreadySubmitted(id.0.clone()));
            }
            Submission::Pending(qobj) => qobj,
        };

        let id = self.backend.run(qobj).await?;
        info!(
            "Job {} submitted to {} ({} experiments)",
            id,
            self.backend.backend_name(),
            qobj.experiments.len()
        );

        let qobj = qobj.clone();
        self.submission = Submission::Submitted {
            id: id.clone(),
            qobj: Some(qobj),
        };

        Ok(id)
    }

    /// Query the platform for the status of the job.
    #[instrument(skip(self))]
    pub async fn status(&mut self) -> HalResult<JobStatus> {
        let project_id = self.project_id()?;
        let jobs = self.api.get_jobs_from_project(project_id).await?;

        let tally = SubJobTally::from_jobs(&jobs);
        self.status = tally.status();
        debug!(
            "Project {}: {} executions ({} running, {} complete, {} cancelled) -> {}",
            project_id, tally.total, tally.running, tally.completed, tally.cancelled, self.status
        );

        Ok(self.status)
    }

    /// Wait for the job to finish and return its result.
    ///
    /// Polls [`QiJob::status`] every `wait` until the job is done. Fails with
    /// [`HalError::Timeout`] once more than `timeout` has elapsed, and with
    /// [`HalError::ResultUnavailable`] as soon as the job is cancelled or in
    /// error.
    pub async fn result(&mut self, timeout: Option<Duration>, wait: Duration) -> HalResult<JobResult> {
        self.result_with(&PollConfig { wait, timeout }).await
    }

    /// [`QiJob::result`] with the timing taken from a [`PollConfig`].
    #[instrument(skip(self))]
    pub async fn result_with(&mut self, config: &PollConfig) -> HalResult<JobResult> {
        let start = Instant::now();

        loop {
            let status = self.status().await?;
            match status {
                JobStatus::Done => break,
                JobStatus::Cancelled | JobStatus::Error => {
                    return Err(HalError::ResultUnavailable {
                        job_id: self.submitted_id()?.0.clone(),
                        status,
                    });
                }
                JobStatus::Initializing | JobStatus::Queued | JobStatus::Running => {}
            }

            if let Some(timeout) = config.timeout {
                if start.elapsed() > timeout {
                    return Err(HalError::Timeout(self.submitted_id()?.0.clone()));
                }
            }

            debug!("Job status: {} - waiting {:?}", status, config.wait);
            sleep(config.wait).await;
        }

        let job_id = self.submitted_id()?.clone();
        let results = self.backend.get_experiment_results(&job_id).await?;
        self.experiments = Some(results.iter().map(|r| r.header.clone()).collect());
        info!("Job {} done with {} experiment results", job_id, results.len());

        Ok(JobResult {
            backend_name: self.backend.backend_name().to_string(),
            backend_version: BACKEND_VERSION.to_string(),
            job_id: job_id.clone(),
            qobj_id: job_id,
            success: true,
            date: Utc::now(),
            results,
        })
    }

    /// Cancel the job by deleting its project.
    #[instrument(skip(self))]
    pub async fn cancel(&mut self) -> HalResult<()> {
        let project_id = self.project_id()?;
        self.api.delete_project(project_id).await?;
        self.status = JobStatus::Cancelled;
        info!("Job cancelled: project {} deleted", project_id);
        Ok(())
    }

    /// Refresh the status and check whether the job is done.
    pub async fn done(&mut self) -> HalResult<bool> {
        Ok(self.status().await? == JobStatus::Done)
    }

    /// Refresh the status and check whether the job is running.
    pub async fn running(&mut self) -> HalResult<bool> {
        Ok(self.status().await? == JobStatus::Running)
    }

    /// Refresh the status and check whether the job was cancelled.
    pub async fn cancelled(&mut self) -> HalResult<bool> {
        Ok(self.status().await? == JobStatus::Cancelled)
    }

    /// Refresh the status and check whether it is final.
    pub async fn in_final_state(&mut self) -> HalResult<bool> {
        Ok(self.status().await?.is_final())
    }

    fn submitted_id(&self) -> HalResult<&JobId> {
        self.job_id().ok_or(HalError::NotSubmitted)
    }

    fn project_id(&self) -> HalResult<ProjectId> {
        self.submitted_id()?.project_id()
    }
}
