//! # Shift Cryptanalysis Library
//!
//! This library recovers the key of a shift (Caesar) cipher without knowing it.
//!
//! ## Method
//!
//! Every key from 1 to 25 is tried. Each candidate plaintext is measured with
//! three independent statistics:
//!
//! - **Chi-squared distance** between its letter distribution and the language's
//! - **Index of coincidence**, compared with the language's typical value
//! - **Known words** found verbatim in the candidate
//!
//! The measurements are blended into a 0-100 score whose weights depend on the
//! ciphertext length, and the candidates are ranked by that score.
//!
//! ## Usage
//!
//! ```rust
//! use shift_cryptanalysis::{rank, Confidence, ShiftKey};
//!
//! let ranking = rank("PELCGBTENCUVR");
//! let verdict = ranking.verdict();
//!
//! assert_eq!(verdict.key, ShiftKey::new(13)?);
//! assert_eq!(verdict.plaintext, "CRYPTOGRAPHIE");
//! assert_ne!(verdict.confidence, Confidence::High);
//! # Ok::<(), shift_cryptanalysis::AnalysisError>(())
//! ```

// Public modules
pub mod alphabet;
pub mod cipher;
pub mod error;
pub mod language;
pub mod metrics;
pub mod ranker;
pub mod scoring;

// Re-exports for easy access
pub use cipher::{ShiftKey, decode, encode};
pub use error::{AnalysisError, Result};
pub use language::{FrequencyTable, KnownWordSet, LanguageProfile};
pub use metrics::{Metrics, chi_squared, index_of_coincidence, known_word_count};
pub use ranker::{Candidate, Confidence, KeyRanker, Ranking, Verdict, rank};
pub use scoring::{LengthBucket, ScoringConfig, SubScores, Weights};

/// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// A ciphertext with the key and plaintext it was built from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Sample {
    pub title: &'static str,
    pub ciphertext: &'static str,
    pub key: u8,
    pub plaintext: &'static str,
}

/// Messages to try the analysis on.
///
/// The first one is a deliberately corrupted encryption of "VENI VIDI VICI"
/// (W instead of Q), so no key decodes it exactly.
pub const SAMPLES: &[Sample] = &[
    Sample {
        title: "Latin motto with a typo",
        ciphertext: "YHWL YLGL YLFL",
        key: 3,
        plaintext: "VETI VIDI VICI",
    },
    Sample {
        title: "Short French word",
        ciphertext: "ERQMRXU",
        key: 3,
        plaintext: "BONJOUR",
    },
    Sample {
        title: "English greeting",
        ciphertext: "MJQQT BTWQI",
        key: 5,
        plaintext: "HELLO WORLD",
    },
    Sample {
        title: "Technical term (ROT13)",
        ciphertext: "PELCGBTENCUVR",
        key: 13,
        plaintext: "CRYPTOGRAPHIE",
    },
    Sample {
        title: "Full sentence",
        ciphertext: "NC UGEWTKVG GUV KORQTVCPVG",
        key: 2,
        plaintext: "LA SECURITE EST IMPORTANTE",
    },
];
