//! Result records produced once a job is done.

use chrono::{DateTime, Utc};
use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use crate::job::JobId;

/// Identifying metadata of one experiment result.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExperimentHeader {
    /// Name of the experiment, as in the submitted payload.
    pub name: String,
}

/// Measurement data of one experiment.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ExperimentData {
    /// Histogram of measured states (state → count).
    #[serde(default)]
    pub counts: FxHashMap<String, u64>,
    /// Probability of each measured state.
    #[serde(default)]
    pub probabilities: FxHashMap<String, f64>,
}

/// Outcome of a single experiment within a job.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExperimentResult {
    /// Shots executed.
    pub shots: u32,
    /// Whether this experiment ran successfully.
    pub success: bool,
    /// Experiment metadata.
    pub header: ExperimentHeader,
    /// Measurement data.
    pub data: ExperimentData,
}

impl ExperimentResult {
    /// Build a successful result from state counts.
    pub fn from_counts(
        name: impl Into<String>,
        counts: impl IntoIterator<Item = (String, u64)>,
    ) -> Self {
        let counts: FxHashMap<String, u64> = counts.into_iter().collect();
        let shots: u64 = counts.values().sum();
        let probabilities = counts
            .iter()
            .map(|(state, &n)| (state.clone(), n as f64 / shots.max(1) as f64))
            .collect();

        Self {
            shots: shots as u32,
            success: true,
            header: ExperimentHeader { name: name.into() },
            data: ExperimentData {
                counts,
                probabilities,
            },
        }
    }
}

/// Result of a finished job.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JobResult {
    /// Name of the backend that executed the job.
    pub backend_name: String,
    /// Version of this integration.
    pub backend_version: String,
    /// Job identifier.
    pub job_id: JobId,
    /// Payload identifier; the platform does not keep one, so it equals `job_id`.
    pub qobj_id: JobId,
    /// Overall success flag.
    pub success: bool,
    /// When the result was materialized.
    pub date: DateTime<Utc>,
    /// Per-experiment outcomes.
    pub results: Vec<ExperimentResult>,
}

impl JobResult {
    /// Look up the result of an experiment by name.
    pub fn experiment(&self, name: &str) -> Option<&ExperimentResult> {
        self.results.iter().find(|r| r.header.name == name)
    }

    /// Measurement data of an experiment.
    pub fn data(&self, name: &str) -> Option<&ExperimentData> {
        self.experiment(name).map(|r| &r.data)
    }

    /// Histogram of an experiment.
    pub fn get_counts(&self, name: &str) -> Option<&FxHashMap<String, u64>> {
        self.data(name).map(|d| &d.counts)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bell_result() -> JobResult {
        JobResult {
            backend_name: "QX single-node simulator".into(),
            backend_version: "0.1.0".into(),
            job_id: JobId::new("42"),
            qobj_id: JobId::new("42"),
            success: true,
            date: Utc::now(),
            results: vec![ExperimentResult::from_counts(
                "bell",
                [("00".to_string(), 128), ("11".to_string(), 128)],
            )],
        }
    }

    #[test]
    fn test_from_counts_probabilities() {
        let r = ExperimentResult::from_counts("bell", [("00".to_string(), 3), ("11".to_string(), 1)]);
        assert_eq!(r.shots, 4);
        assert!(r.success);
        assert!((r.data.probabilities["00"] - 0.75).abs() < 1e-12);
        assert!((r.data.probabilities["11"] - 0.25).abs() < 1e-12);
    }

    #[test]
    fn test_get_counts_by_name() {
        let result = bell_result();
        let counts = result.get_counts("bell").unwrap();
        assert_eq!(counts["00"], 128);
        assert!(result.get_counts("ghz").is_none());
    }

    #[test]
    fn test_experiment_result_deserialize_defaults() {
        let json = r#"{"shots": 10, "success": true, "header": {"name": "e"}, "data": {}}"#;
        let r: ExperimentResult = serde_json::from_str(json).unwrap();
        assert!(r.data.counts.is_empty());
        assert!(r.data.probabilities.is_empty());
    }
}
