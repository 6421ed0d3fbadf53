//! Exhaustive key search
//!
//! The ranker decodes the ciphertext under each of the 25 keys, scores every
//! candidate plaintext and orders them from most to least plausible.

use std::fmt;
use std::sync::Arc;

use rayon::prelude::*;
use serde::Serialize;
use tracing::{debug, info, warn};

use crate::alphabet::alphabetic_len;
use crate::cipher::{ShiftKey, decode};
use crate::language::LanguageProfile;
use crate::metrics::Metrics;
use crate::scoring::ScoringConfig;

/// Scores above this are high confidence.
pub const HIGH_CONFIDENCE_ABOVE: f64 = 70.0;
/// Scores above this (and not high) are medium confidence.
pub const MEDIUM_CONFIDENCE_ABOVE: f64 = 40.0;

/// One decryption attempt.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Candidate {
    pub key: ShiftKey,
    pub plaintext: String,
    pub metrics: Metrics,
    pub score: f64,
}

/// How much the best score can be trusted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Confidence {
    High,
    Medium,
    Low,
}

impl Confidence {
    pub fn from_score(score: f64) -> Self {
        if score > HIGH_CONFIDENCE_ABOVE {
            Confidence::High
        } else if score > MEDIUM_CONFIDENCE_ABOVE {
            Confidence::Medium
        } else {
            Confidence::Low
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Confidence::High => "high confidence",
            Confidence::Medium => "medium confidence",
            Confidence::Low => "low confidence",
        }
    }

    pub fn advice(self) -> &'static str {
        match self {
            Confidence::High => "the key is very likely correct",
            Confidence::Medium => "check the top 3 candidates",
            Confidence::Low => "text may be too short, manual review recommended",
        }
    }
}

impl fmt::Display for Confidence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// The best candidate of a ranking.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Verdict {
    pub key: ShiftKey,
    pub plaintext: String,
    pub score: f64,
    pub confidence: Confidence,
    pub known_words: usize,
}

/// All 25 candidates, best first.
///
/// Only [`KeyRanker::rank`] builds a ranking, so it always holds the full key
/// space.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Ranking {
    pub original_length: usize,
    candidates: Vec<Candidate>,
}

impl Ranking {
    pub fn candidates(&self) -> &[Candidate] {
        &self.candidates
    }

    pub fn verdict(&self) -> Verdict {
        let best = &self.candidates[0];
        Verdict {
            key: best.key,
            plaintext: best.plaintext.clone(),
            score: best.score,
            confidence: Confidence::from_score(best.score),
            known_words: best.metrics.known_word_count,
        }
    }

    pub fn top(&self, n: usize) -> &[Candidate] {
        &self.candidates[..n.min(self.candidates.len())]
    }

    pub fn len(&self) -> usize {
        self.candidates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.candidates.is_empty()
    }

    /// Candidate for a given key, wherever it ranked.
    pub fn candidate(&self, key: ShiftKey) -> Option<&Candidate> {
        self.candidates.iter().find(|c| c.key == key)
    }

    /// 1-based rank of a key.
    pub fn position(&self, key: ShiftKey) -> Option<usize> {
        self.candidates.iter().position(|c| c.key == key).map(|i| i + 1)
    }
}

/// Ranks keys against a language profile with a given scoring configuration.
#[derive(Debug, Clone)]
pub struct KeyRanker {
    profile: Arc<LanguageProfile>,
    config: ScoringConfig,
}

impl Default for KeyRanker {
    fn default() -> Self {
        Self::new(LanguageProfile::french(), ScoringConfig::default())
    }
}

impl KeyRanker {
    pub fn new(profile: Arc<LanguageProfile>, config: ScoringConfig) -> Self {
        Self { profile, config }
    }

    pub fn profile(&self) -> &LanguageProfile {
        &self.profile
    }

    pub fn config(&self) -> &ScoringConfig {
        &self.config
    }

    /// Combined 0-100 score of a candidate plaintext.
    pub fn score_text(&self, text: &str, original_length: usize) -> f64 {
        let metrics = Metrics::measure(text, &self.profile);
        self.config
            .combine(&metrics, self.profile.target_ic, original_length)
    }

    /// Scores one key.
    pub fn evaluate(&self, ciphertext: &str, key: ShiftKey, original_length: usize) -> Candidate {
        let plaintext = decode(ciphertext, key);
        let metrics = Metrics::measure(&plaintext, &self.profile);
        let score = self
            .config
            .combine(&metrics, self.profile.target_ic, original_length);

        debug!(
            "key {:2} | chi2={:8.2} ic={:.3} words={} | score={:5.1}",
            key, metrics.chi_squared, metrics.index_of_coincidence, metrics.known_word_count, score
        );

        Candidate { key, plaintext, metrics, score }
    }

    /// Tries every key and returns the candidates ordered by descending score.
    ///
    /// Equal scores keep ascending key order.
    pub fn rank(&self, ciphertext: &str) -> Ranking {
        let original_length = alphabetic_len(ciphertext);
        if original_length < self.config.short_below {
            warn!(
                "Ciphertext has only {} letters; the ranking relies on recognized words",
                original_length
            );
        }

        let keys: Vec<ShiftKey> = ShiftKey::all().collect();
        let mut candidates: Vec<Candidate> = keys
            .into_par_iter()
            .map(|key| self.evaluate(ciphertext, key, original_length))
            .collect();

        candidates.sort_by(|a, b| b.score.total_cmp(&a.score).then(a.key.cmp(&b.key)));

        let ranking = Ranking { original_length, candidates };
        let verdict = ranking.verdict();
        info!(
            "Best key {} with score {:.1} ({}, {:?} bucket)",
            verdict.key,
            verdict.score,
            verdict.confidence,
            self.config.bucket(original_length)
        );

        ranking
    }
}

/// Ranks `ciphertext` against French with the default scoring.
pub fn rank(ciphertext: &str) -> Ranking {
    KeyRanker::default().rank(ciphertext)
}
