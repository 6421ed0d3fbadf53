//! Statistical measurements over a candidate plaintext
//!
//! Every function only looks at alphabet symbols after case normalization;
//! spaces, digits, punctuation and accented letters do not contribute.

use serde::Serialize;

use crate::alphabet::{ALPHABET_LEN, letter_counts};
use crate::language::LanguageProfile;

/// Chi-squared value returned when a text is too short to measure.
pub const CHI_SQUARED_SENTINEL: f64 = 9999.0;

/// Fewest letters for which a chi-squared distance is computed.
pub const CHI_SQUARED_MIN_LETTERS: u32 = 3;

/// The three raw measurements of one candidate plaintext.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Metrics {
    pub chi_squared: f64,
    pub index_of_coincidence: f64,
    pub known_word_count: usize,
}

impl Metrics {
    pub fn measure(text: &str, profile: &LanguageProfile) -> Self {
        let counts = letter_counts(text);
        Self {
            chi_squared: chi_squared_from_counts(&counts, profile),
            index_of_coincidence: index_of_coincidence_from_counts(&counts),
            known_word_count: known_word_count(text, profile),
        }
    }
}

/// Chi-squared distance between the letter distribution of `text` and the
/// profile's reference frequencies. Lower is a better match.
///
/// Returns [`CHI_SQUARED_SENTINEL`] when `text` holds fewer than three letters.
pub fn chi_squared(text: &str, profile: &LanguageProfile) -> f64 {
    chi_squared_from_counts(&letter_counts(text), profile)
}

fn chi_squared_from_counts(counts: &[u32; ALPHABET_LEN], profile: &LanguageProfile) -> f64 {
    let total: u32 = counts.iter().sum();
    if total < CHI_SQUARED_MIN_LETTERS {
        return CHI_SQUARED_SENTINEL;
    }

    counts
        .iter()
        .zip(profile.frequencies.iter())
        .filter(|&(_, expected)| expected > 0.0)
        .map(|(&count, expected)| {
            let observed = count as f64 / total as f64 * 100.0;
            (observed - expected).powi(2) / expected
        })
        .sum()
}

/// Probability that two letters drawn from `text` without replacement are equal.
///
/// Returns 0.0 when `text` holds fewer than two letters.
pub fn index_of_coincidence(text: &str) -> f64 {
    index_of_coincidence_from_counts(&letter_counts(text))
}

fn index_of_coincidence_from_counts(counts: &[u32; ALPHABET_LEN]) -> f64 {
    let total: u64 = counts.iter().map(|&c| c as u64).sum();
    if total < 2 {
        return 0.0;
    }

    let numerator: u64 = counts
        .iter()
        .map(|&c| c as u64 * (c as u64).saturating_sub(1))
        .sum();

    numerator as f64 / (total * (total - 1)) as f64
}

/// Number of whitespace-separated tokens that are exactly a known word.
pub fn known_word_count(text: &str, profile: &LanguageProfile) -> usize {
    text.split_whitespace()
        .filter(|token| profile.known_words.contains(token))
        .count()
}
