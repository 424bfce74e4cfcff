//! Word frequency analysis
//!
//! Stop-word removal, frequency counting and top-N extraction over token
//! sequences produced by the tokenizer.

use std::collections::{HashMap, HashSet};
use std::ops::Index;

use log::debug;

/// Stop words used when no custom list is configured
pub const DEFAULT_STOP_WORDS: &[&str] = &[
    "a", "an", "and", "are", "as", "at", "be", "but", "by", "for", "from", "has", "have", "he",
    "her", "his", "i", "if", "in", "into", "is", "it", "its", "of", "on", "or", "she", "so",
    "that", "the", "their", "them", "there", "they", "this", "to", "was", "we", "were", "with",
    "you",
];

/// Remove stop words from a list of tokens
///
/// # Arguments
///
/// * `tokens` - Tokens to filter
/// * `stop_words` - Words to drop
///
/// # Returns
///
/// The remaining tokens in their original order
pub fn remove_stop_words<T, S>(tokens: &[T], stop_words: &[S]) -> Vec<String>
where
    T: AsRef<str>,
    S: AsRef<str>,
{
    if tokens.is_empty() {
        return Vec::new();
    }

    let stop_set: HashSet<&str> = stop_words.iter().map(|word| word.as_ref()).collect();
    let filtered: Vec<String> = tokens
        .iter()
        .map(|token| token.as_ref())
        .filter(|token| !stop_set.contains(token))
        .map(str::to_string)
        .collect();

    debug!(
        "Removed {} stop words from {} tokens",
        tokens.len() - filtered.len(),
        tokens.len()
    );
    filtered
}

/// Token counts that remember the order in which words first appeared
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Frequencies {
    counts: HashMap<String, usize>,
    order: Vec<String>,
}

impl Frequencies {
    /// Count one more occurrence of `word`
    pub fn add(&mut self, word: &str) {
        match self.counts.get_mut(word) {
            Some(count) => *count += 1,
            None => {
                self.counts.insert(word.to_string(), 1);
                self.order.push(word.to_string());
            }
        }
    }

    pub fn get(&self, word: &str) -> Option<usize> {
        self.counts.get(word).copied()
    }

    /// Number of distinct words
    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Words with their counts, in order of first appearance
    pub fn iter(&self) -> impl Iterator<Item = (&str, usize)> + '_ {
        self.order
            .iter()
            .map(move |word| (word.as_str(), self.counts[word]))
    }
}

impl Index<&str> for Frequencies {
    type Output = usize;

    fn index(&self, word: &str) -> &usize {
        &self.counts[word]
    }
}

/// Count how often each token occurs
pub fn calculate_frequencies<T: AsRef<str>>(tokens: &[T]) -> Frequencies {
    let mut frequencies = Frequencies::default();
    for token in tokens {
        frequencies.add(token.as_ref());
    }
    frequencies
}

/// Get the most common words of a frequency table
///
/// Words are ordered by descending count. Words with equal counts keep the
/// order in which they first appeared in the text.
///
/// # Arguments
///
/// * `freq_dict` - Frequencies as produced by [`calculate_frequencies`]
/// * `top_n` - Number of words to return
///
/// # Returns
///
/// At most `top_n` words
pub fn get_top_n_words(freq_dict: &Frequencies, top_n: usize) -> Vec<String> {
    top_n_with_counts(freq_dict, top_n)
        .into_iter()
        .map(|(word, _)| word)
        .collect()
}

/// Same ordering as [`get_top_n_words`], keeping the counts
pub fn top_n_with_counts(freq_dict: &Frequencies, top_n: usize) -> Vec<(String, usize)> {
    let mut entries: Vec<(&str, usize)> = freq_dict.iter().collect();
    // Stable, so ties stay in first-appearance order
    entries.sort_by(|(_, count_a), (_, count_b)| count_b.cmp(count_a));

    entries
        .into_iter()
        .take(top_n)
        .map(|(word, count)| (word.to_string(), count))
        .collect()
}
