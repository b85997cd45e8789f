//! Compiled circuit payload handed to a backend for execution.

use serde::{Deserialize, Serialize};

/// A single compiled circuit inside a [`QasmQobj`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QasmExperiment {
    /// Experiment name, used to look up its result later.
    pub name: String,
    /// cQASM/QASM source of the circuit.
    pub qasm: String,
}

/// A batch of compiled experiments submitted as one job.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QasmQobj {
    /// Client-side identifier of the payload.
    pub qobj_id: String,
    /// Number of shots per experiment.
    pub shots: u32,
    /// Experiments in submission order.
    pub experiments: Vec<QasmExperiment>,
}

impl QasmQobj {
    /// Create an empty payload.
    pub fn new(qobj_id: impl Into<String>, shots: u32) -> Self {
        Self {
            qobj_id: qobj_id.into(),
            shots,
            experiments: Vec::new(),
        }
    }

    /// Append an experiment.
    pub fn with_experiment(mut self, name: impl Into<String>, qasm: impl Into<String>) -> Self {
        self.experiments.push(QasmExperiment {
            name: name.into(),
            qasm: qasm.into(),
        });
        self
    }
}
