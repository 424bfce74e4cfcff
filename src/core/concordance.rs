//! Concordance (keyword-in-context) extraction
//!
//! Every function here is total: invalid window sizes, an empty token list or
//! an empty search word produce an empty result instead of an error.

use std::cmp::Ordering;

use log::debug;
use serde::Serialize;

/// A validated pair of context sizes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct WindowSize {
    left: usize,
    right: usize,
}

impl WindowSize {
    /// Validate signed sizes. Negative sizes and the degenerate `0, 0`
    /// window are rejected.
    fn parse(left: isize, right: isize) -> Option<Self> {
        if left < 0 || right < 0 {
            debug!("Rejecting negative context size ({}, {})", left, right);
            return None;
        }
        if left == 0 && right == 0 {
            debug!("Rejecting empty context window");
            return None;
        }
        Some(Self {
            left: left.unsigned_abs(),
            right: right.unsigned_abs(),
        })
    }
}

/// One occurrence of the search word with its surrounding tokens
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContextWindow {
    tokens: Vec<String>,
    keyword_index: usize,
}

impl ContextWindow {
    /// All tokens of the window, keyword included
    pub fn tokens(&self) -> &[String] {
        &self.tokens
    }

    pub fn keyword(&self) -> &str {
        &self.tokens[self.keyword_index]
    }

    /// Tokens before the keyword, in text order
    pub fn left_context(&self) -> &[String] {
        &self.tokens[..self.keyword_index]
    }

    /// Tokens after the keyword, in text order
    pub fn right_context(&self) -> &[String] {
        &self.tokens[self.keyword_index + 1..]
    }

    pub fn into_tokens(self) -> Vec<String> {
        self.tokens
    }

    /// Split the window into its three parts
    pub fn to_line(&self) -> ConcordanceLine {
        ConcordanceLine {
            left: self.left_context().to_vec(),
            keyword: self.keyword().to_string(),
            right: self.right_context().to_vec(),
        }
    }
}

/// A context window split into left context, keyword and right context
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ConcordanceLine {
    pub left: Vec<String>,
    pub keyword: String,
    pub right: Vec<String>,
}

/// Build the context windows for every occurrence of `word`
///
/// # Arguments
///
/// * `tokens` - Token sequence to search
/// * `word` - Word to search for, matched exactly
/// * `left_context_size` - Number of tokens to keep before each occurrence
/// * `right_context_size` - Number of tokens to keep after each occurrence
///
/// # Returns
///
/// One window per occurrence in text order, clipped at the sequence bounds
pub fn concordance_windows<T: AsRef<str>>(
    tokens: &[T],
    word: &str,
    left_context_size: isize,
    right_context_size: isize,
) -> Vec<ContextWindow> {
    if tokens.is_empty() || word.is_empty() {
        return Vec::new();
    }
    let size = match WindowSize::parse(left_context_size, right_context_size) {
        Some(size) => size,
        None => return Vec::new(),
    };

    tokens
        .iter()
        .enumerate()
        .filter(|(_, token)| token.as_ref() == word)
        .map(|(index, _)| {
            let start = index.saturating_sub(size.left);
            let end = index.saturating_add(size.right).min(tokens.len() - 1);
            ContextWindow {
                tokens: tokens[start..=end]
                    .iter()
                    .map(|token| token.as_ref().to_string())
                    .collect(),
                keyword_index: index - start,
            }
        })
        .collect()
}

/// Get a concordance of a word
///
/// A concordance lists each occurrence of a word in a text together with the
/// words surrounding it.
///
/// ```
/// use text_concordance::get_concordance;
///
/// let tokens = ["the", "man", "is", "happy", "the", "dog", "is", "happy", "but", "the", "cat"];
/// let concordance = get_concordance(&tokens, "happy", 1, 1);
/// assert_eq!(concordance, vec![vec!["is", "happy", "the"], vec!["is", "happy", "but"]]);
/// ```
pub fn get_concordance<T: AsRef<str>>(
    tokens: &[T],
    word: &str,
    left_context_size: isize,
    right_context_size: isize,
) -> Vec<Vec<String>> {
    concordance_windows(tokens, word, left_context_size, right_context_size)
        .into_iter()
        .map(ContextWindow::into_tokens)
        .collect()
}

/// Get the boundary words of every context window
///
/// With `left_n == 0` each entry holds the last token of its window, with
/// `right_n == 0` the first token, otherwise both.
///
/// # Arguments
///
/// * `tokens` - Token sequence to search
/// * `word` - Word to search for
/// * `left_n` - Distance to the adjacent word on the left
/// * `right_n` - Distance to the adjacent word on the right
///
/// # Returns
///
/// One list of adjacent words per occurrence
pub fn get_adjacent_words<T: AsRef<str>>(
    tokens: &[T],
    word: &str,
    left_n: isize,
    right_n: isize,
) -> Vec<Vec<String>> {
    concordance_windows(tokens, word, left_n, right_n)
        .iter()
        .filter_map(|window| {
            let (first, last) = (window.tokens.first()?, window.tokens.last()?);
            Some(if left_n == 0 {
                vec![last.clone()]
            } else if right_n == 0 {
                vec![first.clone()]
            } else {
                vec![first.clone(), last.clone()]
            })
        })
        .collect()
}

/// Compare two windows by their left context, nearest word first
fn compare_left(a: &ContextWindow, b: &ContextWindow) -> Ordering {
    a.left_context().iter().rev().cmp(b.left_context().iter().rev())
}

/// Compare two windows by their right context, nearest word first
fn compare_right(a: &ContextWindow, b: &ContextWindow) -> Ordering {
    a.right_context().iter().cmp(b.right_context().iter())
}

/// Sort context windows in place by left or right context
///
/// The sort is stable, so windows with equal context keep text order.
pub fn sort_windows(windows: &mut [ContextWindow], sort_by_left: bool) {
    if sort_by_left {
        windows.sort_by(compare_left);
    } else {
        windows.sort_by(compare_right);
    }
}

/// Get a concordance of a word sorted by its left or right context
///
/// Left sorting orders windows by the word right before the keyword, then by
/// the word before that, and so on. Right sorting does the same with the
/// words following the keyword.
///
/// # Arguments
///
/// * `tokens` - Token sequence to search
/// * `word` - Word to search for
/// * `left_context_size` - Number of tokens to keep before each occurrence
/// * `right_context_size` - Number of tokens to keep after each occurrence
/// * `sort_by_left` - Sort by the left context if true, by the right context otherwise
///
/// # Returns
///
/// The sorted concordance
pub fn sort_concordance<T: AsRef<str>>(
    tokens: &[T],
    word: &str,
    left_context_size: isize,
    right_context_size: isize,
    sort_by_left: bool,
) -> Vec<Vec<String>> {
    let mut windows = concordance_windows(tokens, word, left_context_size, right_context_size);
    sort_windows(&mut windows, sort_by_left);
    windows.into_iter().map(ContextWindow::into_tokens).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    const TOKENS: [&str; 17] = [
        "the", "weather", "is", "sunny", "the", "man", "is", "happy", "the", "dog", "is", "happy",
        "but", "the", "cat", "is", "sad",
    ];

    fn owned(rows: &[&[&str]]) -> Vec<Vec<String>> {
        rows.iter()
            .map(|row| row.iter().map(|s| s.to_string()).collect())
            .collect()
    }

    #[test]
    fn test_get_concordance_several_contexts() {
        let actual = get_concordance(&TOKENS, "happy", 2, 3);
        let expected = owned(&[
            &["man", "is", "happy", "the", "dog", "is"],
            &["dog", "is", "happy", "but", "the", "cat"],
        ]);
        assert_eq!(actual, expected);
    }

    #[test]
    fn test_get_concordance_missing_word() {
        let mut tokens = TOKENS.to_vec();
        tokens[7] = "glad";
        tokens[11] = "glad";
        assert!(get_concordance(&tokens, "happy", 2, 3).is_empty());
    }

    #[test]
    fn test_get_concordance_empty_inputs() {
        let empty: [&str; 0] = [];
        assert!(get_concordance(&empty, "happy", 2, 3).is_empty());
        assert!(get_concordance(&["happy"], "", 2, 3).is_empty());
        assert!(get_concordance(&["happy"], "happy", 0, 0).is_empty());
    }

    #[test]
    fn test_get_concordance_negative_sizes() {
        assert!(get_concordance(&["happy", "man"], "happy", -1, 0).is_empty());
        assert!(get_concordance(&["happy", "man"], "man", -1, 0).is_empty());
        assert!(get_concordance(&["happy", "man"], "man", 1, -5).is_empty());
    }

    #[test]
    fn test_get_concordance_one_sided() {
        assert_eq!(
            get_concordance(&["happy", "man"], "happy", 0, 1),
            owned(&[&["happy", "man"]])
        );
        assert_eq!(
            get_concordance(&["happy", "man"], "man", 1, 0),
            owned(&[&["happy", "man"]])
        );
    }

    #[test]
    fn test_get_concordance_big_sizes_are_clipped() {
        let tokens = ["one", "happy", "man"];
        assert_eq!(
            get_concordance(&tokens, "happy", 0, 1000),
            owned(&[&["happy", "man"]])
        );
        assert_eq!(
            get_concordance(&tokens, "happy", 1000, 0),
            owned(&[&["one", "happy"]])
        );
        assert_eq!(
            get_concordance(&tokens, "happy", isize::MAX, isize::MAX),
            owned(&[&["one", "happy", "man"]])
        );
    }

    #[test]
    fn test_get_concordance_overlapping_windows() {
        let tokens = ["a", "b", "a", "c"];
        assert_eq!(
            get_concordance(&tokens, "a", 1, 1),
            owned(&[&["a", "b"], &["b", "a", "c"]])
        );
    }

    #[test]
    fn test_get_concordance_is_case_sensitive() {
        assert!(get_concordance(&["Happy", "man"], "happy", 1, 1).is_empty());
    }

    #[test]
    fn test_window_length_matches_clipping() {
        let positions = [2usize, 6, 10, 15];
        for (left, right) in [(1isize, 1isize), (2, 3), (5, 0), (0, 4), (20, 20)] {
            let windows = concordance_windows(&TOKENS, "is", left, right);
            assert_eq!(windows.len(), positions.len());
            for (window, position) in windows.iter().zip(positions) {
                let expected = (left as usize).min(position)
                    + 1
                    + (right as usize).min(TOKENS.len() - 1 - position);
                assert_eq!(window.tokens().len(), expected);
                assert_eq!(window.keyword(), "is");
            }
        }
    }

    #[test]
    fn test_context_window_parts() {
        let windows = concordance_windows(&TOKENS, "happy", 2, 3);
        let line = windows[0].to_line();
        assert_eq!(line.left, vec!["man", "is"]);
        assert_eq!(line.keyword, "happy");
        assert_eq!(line.right, vec!["the", "dog", "is"]);
    }

    #[test]
    fn test_get_adjacent_words_both_sides() {
        assert_eq!(
            get_adjacent_words(&TOKENS, "happy", 2, 3),
            owned(&[&["man", "is"], &["dog", "cat"]])
        );
    }

    #[test]
    fn test_get_adjacent_words_one_side() {
        assert_eq!(
            get_adjacent_words(&TOKENS, "happy", 2, 0),
            owned(&[&["man"], &["dog"]])
        );
        let right_only = get_adjacent_words(&TOKENS, "happy", 0, 3);
        assert_eq!(right_only, owned(&[&["is"], &["cat"]]));
        assert!(right_only.iter().all(|entry| entry.len() == 1));
    }

    #[test]
    fn test_get_adjacent_words_invalid() {
        assert!(get_adjacent_words(&TOKENS, "happy", 0, 0).is_empty());
        assert!(get_adjacent_words(&TOKENS, "happy", -2, 3).is_empty());
        assert!(get_adjacent_words(&TOKENS, "joyful", 2, 3).is_empty());
    }

    #[test]
    fn test_sort_concordance_left() {
        assert_eq!(
            sort_concordance(&TOKENS, "happy", 2, 3, true),
            owned(&[
                &["dog", "is", "happy", "but", "the", "cat"],
                &["man", "is", "happy", "the", "dog", "is"],
            ])
        );
    }

    #[test]
    fn test_sort_concordance_right() {
        assert_eq!(
            sort_concordance(&TOKENS, "is", 1, 1, false),
            owned(&[
                &["man", "is", "happy"],
                &["dog", "is", "happy"],
                &["cat", "is", "sad"],
                &["weather", "is", "sunny"],
            ])
        );
    }

    #[test]
    fn test_sort_concordance_left_uses_nearest_word_first() {
        let tokens = ["b", "z", "x", "a", "y", "x"];
        // Nearest left words are "z" and "y", so the second occurrence comes first
        assert_eq!(
            sort_concordance(&tokens, "x", 2, 0, true),
            owned(&[&["a", "y", "x"], &["b", "z", "x"]])
        );
    }

    #[test]
    fn test_sort_concordance_is_stable() {
        let tokens = ["q", "x", "end", "p", "x", "end"];
        // Equal right context keeps text order
        assert_eq!(
            sort_concordance(&tokens, "x", 1, 1, false),
            owned(&[&["q", "x", "end"], &["p", "x", "end"]])
        );
        assert_eq!(
            sort_concordance(&tokens, "x", 1, 1, true),
            owned(&[&["p", "x", "end"], &["q", "x", "end"]])
        );
    }

    #[test]
    fn test_sort_concordance_invalid() {
        assert!(sort_concordance(&TOKENS, "happy", 0, 0, true).is_empty());
        assert!(sort_concordance(&TOKENS, "happy", -1, 2, false).is_empty());
    }
}
