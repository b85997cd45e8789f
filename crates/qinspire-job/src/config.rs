//! Polling configuration for result retrieval.
//!
//! Values can be set in code or read from the environment:
//!
//! | Variable | Meaning | Default |
//! |----------|---------|---------|
//! | `QI_POLL_INTERVAL_MS` | pause between status queries | 500 |
//! | `QI_RESULT_TIMEOUT_SECS` | give up after this many seconds | none |

use std::time::Duration;

use qinspire_hal::{HalError, HalResult};

/// Default pause between two status queries.
pub const DEFAULT_WAIT: Duration = Duration::from_millis(500);

/// How `QiJob::result_with` waits for a job to finish.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PollConfig {
    /// Pause between status queries.
    pub wait: Duration,
    /// Maximum time to wait; `None` waits until the job reaches a final state.
    pub timeout: Option<Duration>,
}

impl Default for PollConfig {
    fn default() -> Self {
        Self {
            wait: DEFAULT_WAIT,
            timeout: None,
        }
    }
}

impl PollConfig {
    /// Set the pause between status queries.
    pub fn with_wait(mut self, wait: Duration) -> Self {
        self.wait = wait;
        self
    }

    /// Set the overall deadline.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Create config from environment variables.
    pub fn from_env() -> HalResult<Self> {
        Self::from_vars(|key| std::env::var(key).ok())
    }

    fn from_vars(lookup: impl Fn(&str) -> Option<String>) -> HalResult<Self> {
        let mut config = Self::default();

        if let Some(ms) = lookup("QI_POLL_INTERVAL_MS") {
            let ms = ms.trim().parse::<u64>().map_err(|e| {
                HalError::Configuration(format!("QI_POLL_INTERVAL_MS='{ms}': {e}"))
            })?;
            config.wait = Duration::from_millis(ms);
        }

        if let Some(secs) = lookup("QI_RESULT_TIMEOUT_SECS") {
            let secs = secs.trim().parse::<f64>().map_err(|e| {
                HalError::Configuration(format!("QI_RESULT_TIMEOUT_SECS='{secs}': {e}"))
            })?;
            config.timeout = Some(Duration::try_from_secs_f64(secs).map_err(|e| {
                HalError::Configuration(format!("QI_RESULT_TIMEOUT_SECS={secs}: {e}"))
            })?);
        }

        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn vars(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults() {
        let config = PollConfig::from_vars(vars(&[])).unwrap();
        assert_eq!(config, PollConfig::default());
        assert_eq!(config.wait, Duration::from_millis(500));
        assert!(config.timeout.is_none());
    }

    #[test]
    fn test_from_vars() {
        let config = PollConfig::from_vars(vars(&[
            ("QI_POLL_INTERVAL_MS", "250"),
            ("QI_RESULT_TIMEOUT_SECS", "1.5"),
        ]))
        .unwrap();
        assert_eq!(config.wait, Duration::from_millis(250));
        assert_eq!(config.timeout, Some(Duration::from_millis(1500)));
    }

    #[test]
    fn test_invalid_interval() {
        let err = PollConfig::from_vars(vars(&[("QI_POLL_INTERVAL_MS", "soon")])).unwrap_err();
        assert!(matches!(err, HalError::Configuration(msg) if msg.contains("soon")));
    }

    #[test]
    fn test_negative_timeout() {
        let err = PollConfig::from_vars(vars(&[("QI_RESULT_TIMEOUT_SECS", "-1")])).unwrap_err();
        assert!(matches!(err, HalError::Configuration(_)));
    }

    #[test]
    fn test_builder() {
        let config = PollConfig::default()
            .with_wait(Duration::from_secs(2))
            .with_timeout(Duration::from_secs(60));
        assert_eq!(config.wait, Duration::from_secs(2));
        assert_eq!(config.timeout, Some(Duration::from_secs(60)));
    }
}
