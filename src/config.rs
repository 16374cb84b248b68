//! Runtime configuration for monitoring sessions.

use std::path::Path;

use serde::Deserialize;

use crate::application::ClusterParams;
use crate::domain::AlertThresholds;
use crate::{Result, VitalwatchError};

/// Every recognized option, with canonical defaults.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct MonitorConfig {
    /// Rolling-window capacity per series
    pub capacity: usize,
    /// Presenter tick interval in milliseconds; the core never schedules
    pub tick_interval_ms: u64,
    /// Alert cut-points applied to every risk score
    pub thresholds: AlertThresholds,
    /// Clustering parameters
    pub clustering: ClusterParams,
    /// Fixed seed for the synthetic feed (reproducible demo sessions)
    pub source_seed: Option<u64>,
}

impl Default for MonitorConfig {
    fn default() -> Self {
        Self {
            capacity: 100,
            tick_interval_ms: 1000,
            thresholds: AlertThresholds::default(),
            clustering: ClusterParams::default(),
            source_seed: None,
        }
    }
}

impl MonitorConfig {
    /// Load configuration from the file named by `VITALWATCH_CONFIG`,
    /// falling back to defaults when unset.
    ///
    /// # Errors
    /// Returns error if the named file is unreadable or invalid.
    pub fn from_env() -> Result<Self> {
        match std::env::var("VITALWATCH_CONFIG") {
            Ok(path) => Self::load(Path::new(&path)),
            Err(_) => Ok(Self::default()),
        }
    }

    /// Load and validate configuration from a JSON file.
    ///
    /// # Errors
    /// Returns error if the file is unreadable, not valid JSON, or fails
    /// validation.
    pub fn load(path: &Path) -> Result<Self> {
        let raw = std::fs::read_to_string(path)?;
        let config: Self = serde_json::from_str(&raw)?;
        config.validate()?;
        Ok(config)
    }

    /// Check the configuration for values the pipeline cannot run with.
    ///
    /// # Errors
    /// Returns [`VitalwatchError::Validation`] describing the first problem.
    pub fn validate(&self) -> Result<()> {
        if self.capacity == 0 {
            return Err(VitalwatchError::Validation(
                "capacity must be at least 1".to_string(),
            ));
        }
        if self.tick_interval_ms == 0 {
            return Err(VitalwatchError::Validation(
                "tick_interval_ms must be at least 1".to_string(),
            ));
        }
        self.thresholds
            .validate()
            .map_err(VitalwatchError::Validation)?;
        if self.clustering.k == 0 {
            return Err(VitalwatchError::Validation(
                "clustering.k must be at least 1".to_string(),
            ));
        }
        if self.clustering.min_history < self.clustering.k {
            return Err(VitalwatchError::Validation(format!(
                "clustering.min_history ({}) must not be below clustering.k ({})",
                self.clustering.min_history, self.clustering.k
            )));
        }
        if self.clustering.max_iterations == 0 {
            return Err(VitalwatchError::Validation(
                "clustering.max_iterations must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_canonical_and_valid() {
        let config = MonitorConfig::default();

        assert_eq!(config.capacity, 100);
        assert_eq!(config.thresholds.critical, 80);
        assert_eq!(config.clustering.k, 3);
        assert_eq!(config.clustering.min_history, 15);
        config.validate().expect("Defaults should validate");
    }

    #[test]
    fn test_partial_json_keeps_defaults() {
        let config: MonitorConfig =
            serde_json::from_str(r#"{"capacity": 60, "thresholds": {"critical": 90}}"#)
                .expect("Should parse");

        assert_eq!(config.capacity, 60);
        assert_eq!(config.thresholds.critical, 90);
        assert_eq!(config.thresholds.moderate, 30);
        assert_eq!(config.clustering.seed, 42);
    }

    #[test]
    fn test_validate_rejects_zero_capacity() {
        let config = MonitorConfig {
            capacity: 0,
            ..MonitorConfig::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_gate_below_k() {
        let mut config = MonitorConfig::default();
        config.clustering.min_history = 2;
        assert!(config.validate().is_err());
    }
}
