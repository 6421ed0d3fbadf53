//! Reference statistics for the plaintext language
//!
//! A [`LanguageProfile`] bundles the expected letter frequencies, the set of
//! recognized words and the index of coincidence of natural text in that
//! language. Profiles are immutable once built and shared behind an [`Arc`].

use std::collections::HashSet;
use std::path::Path;
use std::sync::{Arc, LazyLock};

use serde::Deserialize;
use tracing::debug;

use crate::alphabet::{ALPHABET_LEN, index_of};
use crate::error::{AnalysisError, Result};

/// Allowed distance between the table total and 100%.
///
/// Published tables are rounded and often omit accented letters, so they rarely
/// sum to exactly 100.
const FREQUENCY_TOTAL_TOLERANCE: f64 = 5.0;

/// French letter frequencies in percent, A to Z.
const FRENCH_FREQUENCIES: [f64; ALPHABET_LEN] = [
    7.63, 0.90, 3.26, 3.67, 14.72, 1.07, 1.07, 0.74, 7.53, 0.61, 0.05, 5.46, 2.97,
    7.10, 5.80, 2.52, 1.36, 6.55, 7.95, 7.24, 6.31, 1.63, 0.11, 0.43, 0.13, 0.33,
];

/// Common French words, plus the Latin of Caesar's own motto.
const FRENCH_WORDS: &[&str] = &[
    "VENI", "VIDI", "VICI",
    "LE", "LA", "DE", "UN", "UNE", "ET", "EST", "DANS", "POUR",
    "AVEC", "QUE", "AVOIR", "FAIRE", "TOUT", "BIEN", "ETRE",
    "BONJOUR", "MONDE", "MESSAGE", "SECRET", "CRYPTOGRAPHIE",
    "SECURITE", "CODE", "CESAR", "CHIFFRE",
];

/// Index of coincidence of French prose.
pub const FRENCH_TARGET_IC: f64 = 0.067;

static FRENCH: LazyLock<Arc<LanguageProfile>> = LazyLock::new(|| {
    Arc::new(LanguageProfile {
        name: "french".to_string(),
        frequencies: FrequencyTable(FRENCH_FREQUENCIES),
        known_words: KnownWordSet::new(FRENCH_WORDS.iter().copied()),
        target_ic: FRENCH_TARGET_IC,
    })
});

/// Expected relative frequency (percent) of each alphabet symbol.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrequencyTable([f64; ALPHABET_LEN]);

impl FrequencyTable {
    /// Builds a table, rejecting negative entries and totals far from 100%.
    pub fn new(percentages: [f64; ALPHABET_LEN]) -> Result<Self> {
        if let Some(position) = percentages.iter().position(|p| !p.is_finite() || *p < 0.0) {
            return Err(AnalysisError::InvalidFrequencyTable(format!(
                "entry {} is {}",
                position, percentages[position]
            )));
        }

        let total: f64 = percentages.iter().sum();
        if (total - 100.0).abs() > FREQUENCY_TOTAL_TOLERANCE {
            return Err(AnalysisError::InvalidFrequencyTable(format!(
                "entries sum to {:.2}%",
                total
            )));
        }

        Ok(Self(percentages))
    }

    /// Expected percentage for the symbol at `position`.
    pub fn expected(&self, position: usize) -> f64 {
        self.0[position]
    }

    /// Expected percentage for an uppercase symbol, 0 for anything else.
    pub fn expected_for(&self, symbol: char) -> f64 {
        index_of(symbol).map_or(0.0, |position| self.0[position])
    }

    pub fn iter(&self) -> impl Iterator<Item = f64> + '_ {
        self.0.iter().copied()
    }
}

/// Whole words recognized as belonging to the language, stored uppercase.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct KnownWordSet(HashSet<String>);

impl KnownWordSet {
    pub fn new<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self(words.into_iter().map(|w| w.as_ref().to_uppercase()).collect())
    }

    /// Case-insensitive exact membership test.
    pub fn contains(&self, token: &str) -> bool {
        self.0.contains(&token.to_uppercase())
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// Statistics describing the expected plaintext language.
#[derive(Debug, Clone, PartialEq)]
pub struct LanguageProfile {
    pub name: String,
    pub frequencies: FrequencyTable,
    pub known_words: KnownWordSet,
    pub target_ic: f64,
}

/// On-disk form of a profile, validated through [`LanguageProfile::new`].
#[derive(Debug, Deserialize)]
struct ProfileFile {
    name: String,
    frequencies: [f64; ALPHABET_LEN],
    known_words: Vec<String>,
    target_ic: f64,
}

impl LanguageProfile {
    pub fn new<I, S>(
        name: impl Into<String>,
        frequencies: [f64; ALPHABET_LEN],
        known_words: I,
        target_ic: f64,
    ) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        if !(0.0..=1.0).contains(&target_ic) {
            return Err(AnalysisError::InvalidFrequencyTable(format!(
                "target index of coincidence {} is outside [0, 1]",
                target_ic
            )));
        }

        Ok(Self {
            name: name.into(),
            frequencies: FrequencyTable::new(frequencies)?,
            known_words: KnownWordSet::new(known_words),
            target_ic,
        })
    }

    /// The built-in French profile, shared by every caller.
    pub fn french() -> Arc<LanguageProfile> {
        Arc::clone(&FRENCH)
    }

    /// Parses a profile from its JSON representation.
    pub fn from_json_str(json: &str) -> Result<Self> {
        let file: ProfileFile = serde_json::from_str(json)?;
        Self::new(file.name, file.frequencies, file.known_words, file.target_ic)
    }

    /// Loads a profile from a JSON file.
    pub fn from_json_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        debug!("Loading language profile from {}", path.display());
        let content = std::fs::read_to_string(path)?;
        Self::from_json_str(&content)
    }
}
