//! The 26-letter Latin alphabet and letter counting helpers

/// Number of symbols in the alphabet.
pub const ALPHABET_LEN: usize = 26;

/// The alphabet in positional order (A = 0, ..., Z = 25).
pub const ALPHABET: [char; ALPHABET_LEN] = [
    'A', 'B', 'C', 'D', 'E', 'F', 'G', 'H', 'I', 'J', 'K', 'L', 'M',
    'N', 'O', 'P', 'Q', 'R', 'S', 'T', 'U', 'V', 'W', 'X', 'Y', 'Z',
];

/// Position of an uppercase alphabet symbol, `None` for anything else.
///
/// Lowercase letters are not symbols of the alphabet; callers normalize case first.
pub fn index_of(c: char) -> Option<usize> {
    if c.is_ascii_uppercase() {
        Some((c as u8 - b'A') as usize)
    } else {
        None
    }
}

/// Symbol at `position`, wrapping around the alphabet.
pub fn symbol_at(position: usize) -> char {
    ALPHABET[position % ALPHABET_LEN]
}

/// Counts the occurrences of each alphabet symbol in the given text.
///
/// # Arguments
///
/// * `text` - The input text to analyze. Case is normalized before counting.
///
/// # Returns
///
/// An array of 26 counts for letters A-Z.
pub fn letter_counts(text: &str) -> [u32; ALPHABET_LEN] {
    let mut counts: [u32; ALPHABET_LEN] = [0; ALPHABET_LEN];

    for c in text.chars().flat_map(char::to_uppercase) {
        if let Some(index) = index_of(c) {
            counts[index] += 1;
        }
    }

    counts
}

/// Number of alphabetic characters in the raw input, accented letters included.
pub fn alphabetic_len(text: &str) -> usize {
    text.chars().filter(|c| c.is_alphabetic()).count()
}
