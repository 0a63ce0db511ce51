//! Configuration for a visualizer session.

use std::time::Duration;

use crate::error::ExecutionError;

/// Defaults for the entry fields and animation cadence.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct VisualizerConfig {
    /// Initial text of the "Min Value" field (default: "0")
    pub min_value: String,
    /// Initial text of the "Max Value" field (default: "100")
    pub max_value: String,
    /// Initial text of the "Num Elements" field (default: "30")
    pub num_elements: String,
    /// Delay between sorting frames (default: 100ms)
    pub sort_interval: Duration,
    /// Delay between search frames (default: 500ms)
    pub search_interval: Duration,
    /// Seed for list generation; `None` seeds from the OS
    pub seed: Option<u64>,
}

impl VisualizerConfig {
    pub const DEFAULT_SORT_INTERVAL: Duration = Duration::from_millis(100);
    pub const DEFAULT_SEARCH_INTERVAL: Duration = Duration::from_millis(500);

    pub fn validate(&self) -> Result<(), ExecutionError> {
        if self.sort_interval.is_zero() {
            return Err(ExecutionError::InvalidConfig(
                "sort frame interval must be greater than zero".into(),
            ));
        }
        if self.search_interval.is_zero() {
            return Err(ExecutionError::InvalidConfig(
                "search frame interval must be greater than zero".into(),
            ));
        }
        Ok(())
    }
}

impl Default for VisualizerConfig {
    fn default() -> Self {
        Self {
            min_value: "0".into(),
            max_value: "100".into(),
            num_elements: "30".into(),
            sort_interval: Self::DEFAULT_SORT_INTERVAL,
            search_interval: Self::DEFAULT_SEARCH_INTERVAL,
            seed: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = VisualizerConfig::default();
        assert_eq!(config.min_value, "0");
        assert_eq!(config.max_value, "100");
        assert_eq!(config.num_elements, "30");
        assert_eq!(config.sort_interval, Duration::from_millis(100));
        assert_eq!(config.search_interval, Duration::from_millis(500));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_zero_interval_rejected() {
        let config = VisualizerConfig {
            sort_interval: Duration::ZERO,
            ..Default::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ExecutionError::InvalidConfig(_))
        ));
    }
}
