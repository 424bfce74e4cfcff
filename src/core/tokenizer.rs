//! Tokenizer for raw text
//!
//! Turns raw text into a sequence of lowercase alphabetic tokens. Everything
//! outside `a-z`, spaces and newlines is stripped before splitting.

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    /// Characters that never survive tokenization
    static ref NON_WORD_CHARS: Regex = Regex::new(r"[^a-z \n]").unwrap();
}

/// Split text into lowercase tokens without punctuation
///
/// Characters are removed, not replaced, so `"don't"` becomes `"dont"` and
/// `"abc123"` becomes `"abc"`. Tabs are removed as well and therefore join
/// the words around them.
///
/// # Arguments
///
/// * `text` - The raw text
///
/// # Returns
///
/// A list of tokens, empty for empty input
pub fn tokenize(text: &str) -> Vec<String> {
    if text.is_empty() {
        return Vec::new();
    }

    let lowered = text.to_lowercase();
    NON_WORD_CHARS
        .replace_all(&lowered, "")
        .split_whitespace()
        .map(str::to_string)
        .collect()
}
