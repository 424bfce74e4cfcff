//! Text analyzer implementation
//!
//! Runs the full pipeline over one text: tokenization, stop-word removal,
//! frequency counting, top-N extraction and the concordance of a search word.

use std::path::Path;
use std::time::Instant;

use anyhow::{Context, Result};
use chrono::{DateTime, Local};
use log::{debug, info, warn};
use serde::Serialize;

use crate::config::AnalyzerConfig;
use crate::core::concordance::{self, ConcordanceLine};
use crate::core::frequency::{self, DEFAULT_STOP_WORDS};
use crate::core::tokenizer::tokenize;
use crate::utils::file_utils;

/// A word and the number of times it occurs
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WordCount {
    pub word: String,
    pub count: usize,
}

/// Results of analysing one text
#[derive(Debug, Clone, Serialize)]
pub struct AnalysisReport {
    /// Where the text came from (file path or a caller supplied label)
    pub source: String,

    /// The concordance search word
    pub word: String,

    pub generated_at: DateTime<Local>,

    /// Number of tokens in the text
    pub total_tokens: usize,

    /// Number of tokens left after stop-word removal
    pub filtered_tokens: usize,

    /// Most frequent words, stop words excluded
    pub top_words: Vec<WordCount>,

    /// Concordance of the search word, sorted if configured
    pub concordance: Vec<ConcordanceLine>,

    /// Boundary words of each concordance window
    pub adjacent_words: Vec<Vec<String>>,
}

impl AnalysisReport {
    /// Number of occurrences of the search word that produced a window
    pub fn occurrences(&self) -> usize {
        self.concordance.len()
    }
}

/// Coordinates the analysis of texts with one configuration
pub struct TextAnalyzer {
    /// Context sizes, sorting and top-N settings
    config: AnalyzerConfig,

    /// Words excluded from the frequency analysis
    stop_words: Vec<String>,
}

impl TextAnalyzer {
    /// Create a new TextAnalyzer instance
    ///
    /// Loads the stop-word file named in the configuration, or falls back to
    /// the built-in list when none is configured.
    ///
    /// # Arguments
    ///
    /// * `config` - Analyzer configuration
    ///
    /// # Returns
    ///
    /// A new TextAnalyzer, or an error if the stop-word file cannot be read
    pub fn new(config: &AnalyzerConfig) -> Result<Self> {
        let stop_words = match &config.stop_words_file {
            Some(path) => file_utils::load_stop_words(path)?,
            None => DEFAULT_STOP_WORDS.iter().map(|w| w.to_string()).collect(),
        };
        debug!("Using {} stop words", stop_words.len());

        Ok(Self::with_stop_words(config, stop_words))
    }

    /// Create an analyzer with an explicit stop-word list
    pub fn with_stop_words(config: &AnalyzerConfig, stop_words: Vec<String>) -> Self {
        Self {
            config: config.clone(),
            stop_words,
        }
    }

    pub fn config(&self) -> &AnalyzerConfig {
        &self.config
    }

    pub fn stop_words(&self) -> &[String] {
        &self.stop_words
    }

    /// Analyze a file
    ///
    /// # Arguments
    ///
    /// * `file_path` - Path to the text file
    /// * `word` - Concordance search word
    ///
    /// # Returns
    ///
    /// The analysis report; read failures are returned as errors
    pub fn analyze_file(&self, file_path: &Path, word: &str) -> Result<AnalysisReport> {
        info!("Analyzing file: {}", file_path.display());

        let text = file_utils::read_from_file(file_path)
            .context(format!("Failed to read {}", file_path.display()))?;

        Ok(self.analyze_text(&text, word, &file_path.display().to_string()))
    }

    /// Analyze a text held in memory
    ///
    /// # Arguments
    ///
    /// * `text` - Raw text
    /// * `word` - Concordance search word, normalised like the text tokens
    /// * `source` - Label recorded in the report
    pub fn analyze_text(&self, text: &str, word: &str, source: &str) -> AnalysisReport {
        let start_time = Instant::now();
        // Same rules as the text, so "Happy." finds "happy"
        let word = tokenize(word).concat();

        let tokens = tokenize(text);
        debug!("Tokenized {} into {} tokens", source, tokens.len());

        let filtered = frequency::remove_stop_words(&tokens, &self.stop_words);
        let frequencies = frequency::calculate_frequencies(&filtered);
        let top_words = frequency::top_n_with_counts(&frequencies, self.config.top_n)
            .into_iter()
            .map(|(word, count)| WordCount { word, count })
            .collect();

        let left = self.config.left_context_size;
        let right = self.config.right_context_size;
        let mut windows = concordance::concordance_windows(&tokens, &word, left, right);
        if let Some(sort_by_left) = self.config.sort_by_left {
            concordance::sort_windows(&mut windows, sort_by_left);
        }
        let adjacent_words = concordance::get_adjacent_words(&tokens, &word, left, right);

        if windows.is_empty() {
            warn!(
                "No concordance for '{}' in {} (context {}, {})",
                word, source, left, right
            );
        }

        info!("Analysis completed in {:?}", start_time.elapsed());

        AnalysisReport {
            source: source.to_string(),
            word,
            generated_at: Local::now(),
            total_tokens: tokens.len(),
            filtered_tokens: filtered.len(),
            top_words,
            concordance: windows.iter().map(|window| window.to_line()).collect(),
            adjacent_words,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TEXT: &str = "The weather is sunny, the man is happy. \
                        The dog is happy but the cat is sad.";

    fn analyzer(config: AnalyzerConfig) -> TextAnalyzer {
        TextAnalyzer::with_stop_words(&config, vec!["the".to_string(), "is".to_string()])
    }

    #[test]
    fn test_analyze_text_counts() {
        let report = analyzer(AnalyzerConfig::default()).analyze_text(TEXT, "happy", "inline");

        assert_eq!(report.total_tokens, 17);
        assert_eq!(report.filtered_tokens, 9);
        assert_eq!(
            report.top_words[0],
            WordCount { word: "happy".to_string(), count: 2 }
        );
        assert_eq!(report.occurrences(), 2);
        assert_eq!(report.source, "inline");
    }

    #[test]
    fn test_analyze_text_concordance_and_adjacent() {
        let report = analyzer(AnalyzerConfig::default()).analyze_text(TEXT, "Happy", "inline");

        assert_eq!(report.word, "happy");
        assert_eq!(report.concordance[0].left, vec!["man", "is"]);
        assert_eq!(report.concordance[0].right, vec!["the", "dog", "is"]);
        assert_eq!(report.adjacent_words, vec![vec!["man", "is"], vec!["dog", "cat"]]);
    }

    #[test]
    fn test_search_word_normalised_like_tokens() {
        let analyzer = analyzer(AnalyzerConfig::default());

        let report = analyzer.analyze_text(TEXT, " Happy. ", "inline");
        assert_eq!(report.word, "happy");
        assert_eq!(report.occurrences(), 2);

        let report = analyzer.analyze_text("Don't stop now, don't.", "don't", "inline");
        assert_eq!(report.word, "dont");
        assert_eq!(report.occurrences(), 2);

        let report = analyzer.analyze_text(TEXT, "...", "inline");
        assert!(report.word.is_empty());
        assert!(report.concordance.is_empty());
    }

    #[test]
    fn test_analyze_text_sorted_by_left() {
        let config = AnalyzerConfig {
            sort_by_left: Some(true),
            ..AnalyzerConfig::default()
        };
        let report = analyzer(config).analyze_text(TEXT, "happy", "inline");

        assert_eq!(report.concordance[0].left, vec!["dog", "is"]);
        assert_eq!(report.concordance[1].left, vec!["man", "is"]);
    }

    #[test]
    fn test_analyze_text_without_match() {
        let report = analyzer(AnalyzerConfig::default()).analyze_text(TEXT, "joyful", "inline");
        assert!(report.concordance.is_empty());
        assert!(report.adjacent_words.is_empty());
    }

    #[test]
    fn test_default_stop_words_loaded() {
        let analyzer = TextAnalyzer::new(&AnalyzerConfig::default()).expect("Failed to build analyzer");
        assert!(analyzer.stop_words().iter().any(|w| w == "the"));
    }

    #[test]
    fn test_missing_stop_word_file() {
        let config = AnalyzerConfig {
            stop_words_file: Some("no/such/stop_words.txt".into()),
            ..AnalyzerConfig::default()
        };
        assert!(TextAnalyzer::new(&config).is_err());
    }
}
