//! Configuration builder for the pair comparator.

use super::PairComparator;
use crate::core::hamming::HASH_WORD_BITS;
use crate::error::ConfigError;
use serde::{Deserialize, Serialize};

/// Default Hamming threshold for the first cut
pub const DEFAULT_HAMMING_THRESHOLD: u32 = 8;

/// Default minimum correlation for a pair to count as similar
pub const DEFAULT_MIN_CORRELATION: f32 = 0.9;

/// Configuration builder for [`PairComparator`]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompareConfig {
    /// Maximum Hamming distance (0-64) before correlation is skipped
    hamming_threshold: u32,
    /// Minimum correlation score (0-1) for a candidate to be similar
    min_correlation: f32,
}

impl CompareConfig {
    /// Create a new configuration with defaults
    pub fn new() -> Self {
        Self {
            hamming_threshold: DEFAULT_HAMMING_THRESHOLD,
            min_correlation: DEFAULT_MIN_CORRELATION,
        }
    }

    /// Set the Hamming threshold (0-64)
    ///
    /// Lower is stricter: fewer pairs reach the correlation stage.
    pub fn hamming_threshold(mut self, threshold: u32) -> Self {
        self.hamming_threshold = threshold;
        self
    }

    /// Set the minimum correlation score (0-1)
    pub fn min_correlation(mut self, score: f32) -> Self {
        self.min_correlation = score;
        self
    }

    /// Check the configured values without building
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.hamming_threshold > HASH_WORD_BITS {
            return Err(ConfigError::InvalidThreshold {
                value: self.hamming_threshold,
            });
        }
        if !(0.0..=1.0).contains(&self.min_correlation) {
            return Err(ConfigError::InvalidCorrelation {
                value: self.min_correlation,
            });
        }
        Ok(())
    }

    /// Build the comparator
    pub fn build(self) -> Result<PairComparator, ConfigError> {
        self.validate()?;
        Ok(PairComparator::new(self.hamming_threshold, self.min_correlation))
    }
}

impl Default for CompareConfig {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_defaults() {
        let config = CompareConfig::new();
        assert_eq!(config.hamming_threshold, DEFAULT_HAMMING_THRESHOLD);
        assert_eq!(config.min_correlation, DEFAULT_MIN_CORRELATION);
    }

    #[test]
    fn config_builder_works() {
        let config = CompareConfig::new()
            .hamming_threshold(12)
            .min_correlation(0.75);

        assert_eq!(config.hamming_threshold, 12);
        assert_eq!(config.min_correlation, 0.75);
    }

    #[test]
    fn build_carries_configured_values() {
        let comparator = CompareConfig::new()
            .hamming_threshold(64)
            .min_correlation(0.5)
            .build()
            .unwrap();
        assert_eq!(comparator.hamming_threshold(), 64);
        assert_eq!(comparator.min_correlation(), 0.5);
    }

    #[test]
    fn threshold_above_word_width_is_rejected() {
        let err = CompareConfig::new().hamming_threshold(65).build().unwrap_err();
        assert!(matches!(err, ConfigError::InvalidThreshold { value: 65 }));
    }

    #[test]
    fn correlation_outside_unit_interval_is_rejected() {
        for value in [-0.1, 1.5, f32::NAN] {
            let result = CompareConfig::new().min_correlation(value).validate();
            assert!(
                matches!(result, Err(ConfigError::InvalidCorrelation { .. })),
                "{} should be rejected",
                value
            );
        }
    }

    #[test]
    fn config_round_trips_through_json() {
        let config = CompareConfig::new().hamming_threshold(5);
        let json = serde_json::to_string(&config).unwrap();
        let restored: CompareConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(restored, config);
    }
}
