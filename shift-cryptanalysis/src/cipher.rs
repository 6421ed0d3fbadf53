//! Shift cipher transform
//!
//! Encryption: `C = (P + k) mod 26`. Decryption: `P = (C - k) mod 26`.
//! Text is upper-cased first; characters outside the alphabet pass through.

use std::fmt;

use serde::Serialize;

use crate::alphabet::{ALPHABET_LEN, index_of, symbol_at};
use crate::error::{AnalysisError, Result};

/// A non-trivial shift, guaranteed to lie in `1..=25`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct ShiftKey(u8);

impl ShiftKey {
    pub const MIN: u8 = 1;
    pub const MAX: u8 = (ALPHABET_LEN - 1) as u8;

    /// Validates a key supplied from outside the ranker.
    pub fn new(key: u8) -> Result<Self> {
        if (Self::MIN..=Self::MAX).contains(&key) {
            Ok(Self(key))
        } else {
            Err(AnalysisError::InvalidKey(key))
        }
    }

    /// Every key of the key space, in ascending order.
    pub fn all() -> impl DoubleEndedIterator<Item = ShiftKey> + ExactSizeIterator + Clone {
        (Self::MIN..=Self::MAX).map(ShiftKey)
    }

    pub fn get(self) -> u8 {
        self.0
    }
}

impl fmt::Display for ShiftKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl TryFrom<u8> for ShiftKey {
    type Error = AnalysisError;

    fn try_from(key: u8) -> Result<Self> {
        Self::new(key)
    }
}

/// Moves every alphabet symbol `offset` positions forward, wrapping at Z.
fn shift(text: &str, offset: usize) -> String {
    text.to_uppercase()
        .chars()
        .map(|c| match index_of(c) {
            Some(position) => symbol_at(position + offset),
            None => c,
        })
        .collect()
}

/// Decrypts `ciphertext` under `key`.
///
/// # Arguments
///
/// * `ciphertext` - The text to decrypt, in any case.
/// * `key` - The shift that was used to encrypt it.
///
/// # Returns
///
/// The upper-cased candidate plaintext.
pub fn decode(ciphertext: &str, key: ShiftKey) -> String {
    shift(ciphertext, ALPHABET_LEN - key.get() as usize)
}

/// Encrypts `plaintext` under `key`; the inverse of [`decode`].
pub fn encode(plaintext: &str, key: ShiftKey) -> String {
    shift(plaintext, key.get() as usize)
}
