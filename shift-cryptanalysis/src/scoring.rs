//! Length-adaptive confidence score
//!
//! Each raw metric is mapped onto a 0-100 sub-score and the three sub-scores
//! are blended with weights chosen by the number of letters in the ciphertext.
//! Short messages lean on recognized words, long ones on the chi-squared
//! distance. All constants live in [`ScoringConfig`] so they can be
//! recalibrated for another language without touching the algorithm.

use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{AnalysisError, Result};
use crate::metrics::Metrics;

const WEIGHT_SUM_TOLERANCE: f64 = 1e-6;

/// Relative importance of the three sub-scores. Must sum to 1.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Weights {
    pub chi: f64,
    pub ic: f64,
    pub words: f64,
}

impl Weights {
    pub const fn new(chi: f64, ic: f64, words: f64) -> Self {
        Self { chi, ic, words }
    }

    fn validate(&self, bucket: LengthBucket) -> Result<()> {
        let all = [self.chi, self.ic, self.words];
        if all.iter().any(|w| !w.is_finite() || *w < 0.0) {
            return Err(AnalysisError::InvalidConfig(format!(
                "{:?} weights must be non-negative, got {:?}",
                bucket, self
            )));
        }

        let sum: f64 = all.iter().sum();
        if (sum - 1.0).abs() > WEIGHT_SUM_TOLERANCE {
            return Err(AnalysisError::InvalidConfig(format!(
                "{:?} weights must sum to 1, got {}",
                bucket, sum
            )));
        }

        Ok(())
    }
}

/// Ciphertext length class used to pick the weights.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum LengthBucket {
    Short,
    Medium,
    Long,
}

/// Normalized 0-100 sub-scores of one candidate.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SubScores {
    pub chi: f64,
    pub ic: f64,
    pub words: f64,
}

/// Tunable constants of the score combiner.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScoringConfig {
    /// Chi-squared points per lost sub-score point.
    pub chi_divisor: f64,
    /// Sub-score points lost per unit of IC deviation from the target.
    pub ic_scale: f64,
    /// Sub-score points earned per recognized word.
    pub word_bonus: f64,
    /// Texts with fewer letters than this are short.
    pub short_below: usize,
    /// Texts with fewer letters than this (and not short) are medium.
    pub medium_below: usize,
    pub short: Weights,
    pub medium: Weights,
    pub long: Weights,
}

impl Default for ScoringConfig {
    fn default() -> Self {
        Self {
            chi_divisor: 5.0,
            ic_scale: 1000.0,
            word_bonus: 50.0,
            short_below: 15,
            medium_below: 30,
            short: Weights::new(0.1, 0.3, 0.6),
            medium: Weights::new(0.4, 0.3, 0.3),
            long: Weights::new(0.7, 0.2, 0.1),
        }
    }
}

impl ScoringConfig {
    pub fn validate(&self) -> Result<()> {
        for (name, value) in [
            ("chi_divisor", self.chi_divisor),
            ("ic_scale", self.ic_scale),
            ("word_bonus", self.word_bonus),
        ] {
            if !value.is_finite() || value <= 0.0 {
                return Err(AnalysisError::InvalidConfig(format!(
                    "{} must be positive, got {}",
                    name, value
                )));
            }
        }

        if self.short_below > self.medium_below {
            return Err(AnalysisError::InvalidConfig(format!(
                "short_below ({}) exceeds medium_below ({})",
                self.short_below, self.medium_below
            )));
        }

        self.short.validate(LengthBucket::Short)?;
        self.medium.validate(LengthBucket::Medium)?;
        self.long.validate(LengthBucket::Long)
    }

    /// Parses and validates a configuration from JSON. Missing fields keep
    /// their default values.
    pub fn from_json_str(json: &str) -> Result<Self> {
        let config: ScoringConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_json_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        debug!("Loading scoring configuration from {}", path.display());
        let content = std::fs::read_to_string(path)?;
        Self::from_json_str(&content)
    }

    pub fn bucket(&self, original_length: usize) -> LengthBucket {
        if original_length < self.short_below {
            LengthBucket::Short
        } else if original_length < self.medium_below {
            LengthBucket::Medium
        } else {
            LengthBucket::Long
        }
    }

    pub fn weights(&self, bucket: LengthBucket) -> Weights {
        match bucket {
            LengthBucket::Short => self.short,
            LengthBucket::Medium => self.medium,
            LengthBucket::Long => self.long,
        }
    }

    /// Maps raw metrics onto 0-100 sub-scores.
    pub fn sub_scores(&self, metrics: &Metrics, target_ic: f64) -> SubScores {
        let chi = (100.0 - metrics.chi_squared / self.chi_divisor).max(0.0);
        let ic = (100.0 - (metrics.index_of_coincidence - target_ic).abs() * self.ic_scale)
            .max(0.0);
        let words = (metrics.known_word_count as f64 * self.word_bonus).min(100.0);
        SubScores { chi, ic, words }
    }

    /// Combines the metrics of one candidate into a 0-100 score.
    ///
    /// `original_length` is the letter count of the ciphertext, shared by all
    /// candidates of a ranking pass.
    pub fn combine(&self, metrics: &Metrics, target_ic: f64, original_length: usize) -> f64 {
        let sub = self.sub_scores(metrics, target_ic);
        let w = self.weights(self.bucket(original_length));
        (w.chi * sub.chi + w.ic * sub.ic + w.words * sub.words).clamp(0.0, 100.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::metrics::CHI_SQUARED_SENTINEL;

    const TARGET: f64 = 0.067;

    fn metrics(chi_squared: f64, index_of_coincidence: f64, known_word_count: usize) -> Metrics {
        Metrics { chi_squared, index_of_coincidence, known_word_count }
    }

    #[test]
    fn test_default_is_valid() {
        assert!(ScoringConfig::default().validate().is_ok());
    }

    #[test]
    fn test_buckets() {
        let config = ScoringConfig::default();
        assert_eq!(config.bucket(0), LengthBucket::Short);
        assert_eq!(config.bucket(14), LengthBucket::Short);
        assert_eq!(config.bucket(15), LengthBucket::Medium);
        assert_eq!(config.bucket(29), LengthBucket::Medium);
        assert_eq!(config.bucket(30), LengthBucket::Long);
        assert_eq!(config.bucket(10_000), LengthBucket::Long);
    }

    #[test]
    fn test_sub_scores() {
        let config = ScoringConfig::default();

        let perfect = config.sub_scores(&metrics(0.0, TARGET, 2), TARGET);
        assert_eq!(perfect, SubScores { chi: 100.0, ic: 100.0, words: 100.0 });

        let worst = config.sub_scores(&metrics(500.0, TARGET + 0.1, 0), TARGET);
        assert_eq!(worst.chi, 0.0);
        assert!(worst.ic.abs() < 1e-9);
        assert_eq!(worst.words, 0.0);

        let partial = config.sub_scores(&metrics(100.0, 0.057, 1), TARGET);
        assert!((partial.chi - 80.0).abs() < 1e-9);
        assert!((partial.ic - 90.0).abs() < 1e-9);
        assert_eq!(partial.words, 50.0);

        let saturated = config.sub_scores(&metrics(0.0, TARGET, 7), TARGET);
        assert_eq!(saturated.words, 100.0);
    }

    #[test]
    fn test_combine_weights_by_length() {
        let config = ScoringConfig::default();
        // chi 80, ic 90, words 50
        let m = metrics(100.0, 0.057, 1);

        let short = config.combine(&m, TARGET, 7);
        assert!((short - (0.6 * 50.0 + 0.3 * 90.0 + 0.1 * 80.0)).abs() < 1e-9);

        let medium = config.combine(&m, TARGET, 20);
        assert!((medium - (0.4 * 80.0 + 0.3 * 90.0 + 0.3 * 50.0)).abs() < 1e-9);

        let long = config.combine(&m, TARGET, 45);
        assert!((long - (0.7 * 80.0 + 0.2 * 90.0 + 0.1 * 50.0)).abs() < 1e-9);
    }

    #[test]
    fn test_combine_without_letters() {
        // Sentinel chi, zero IC: only the IC deviation contributes.
        let config = ScoringConfig::default();
        let score = config.combine(&metrics(CHI_SQUARED_SENTINEL, 0.0, 0), TARGET, 0);
        assert!((score - 0.3 * 33.0).abs() < 1e-9);
    }

    #[test]
    fn test_rejects_weights_not_summing_to_one() {
        let config = ScoringConfig {
            long: Weights::new(0.7, 0.2, 0.2),
            ..Default::default()
        };
        assert!(matches!(config.validate(), Err(AnalysisError::InvalidConfig(_))));
    }

    #[test]
    fn test_rejects_negative_weight() {
        let config = ScoringConfig {
            short: Weights::new(1.2, -0.2, 0.0),
            ..Default::default()
        };
        assert!(matches!(config.validate(), Err(AnalysisError::InvalidConfig(_))));
    }

    #[test]
    fn test_rejects_bad_scales_and_thresholds() {
        let zero_divisor = ScoringConfig { chi_divisor: 0.0, ..Default::default() };
        assert!(zero_divisor.validate().is_err());

        let inverted = ScoringConfig { short_below: 40, medium_below: 30, ..Default::default() };
        assert!(inverted.validate().is_err());
    }

    #[test]
    fn test_partial_json_keeps_defaults() {
        let config = ScoringConfig::from_json_str(r#"{"word_bonus": 25.0}"#).unwrap();
        assert_eq!(config.word_bonus, 25.0);
        assert_eq!(config.short_below, 15);
        assert_eq!(config.long, Weights::new(0.7, 0.2, 0.1));
    }

    #[test]
    fn test_invalid_json_config() {
        let json = r#"{"medium": {"chi": 0.5, "ic": 0.5, "words": 0.5}}"#;
        assert!(matches!(
            ScoringConfig::from_json_str(json),
            Err(AnalysisError::InvalidConfig(_))
        ));
        assert!(matches!(
            ScoringConfig::from_json_str("not json"),
            Err(AnalysisError::Json(_))
        ));
    }
}
