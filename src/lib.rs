//! Text Concordance - text analysis utilities
//!
//! Tokenization, stop-word removal, word frequencies and concordance
//! (keyword-in-context) extraction over plain text.

pub mod core;
pub mod utils;

// Re-export the analysis functions for convenience
pub use crate::core::analyzer::{AnalysisReport, TextAnalyzer, WordCount};
pub use crate::core::concordance::{
    get_adjacent_words, get_concordance, sort_concordance, ConcordanceLine, ContextWindow,
};
pub use crate::core::frequency::{
    calculate_frequencies, get_top_n_words, remove_stop_words, Frequencies,
};
pub use crate::core::tokenizer::tokenize;
pub use crate::utils::file_utils::{read_from_file, write_to_file, TextFileError};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Analyze a single file with the default configuration
///
/// This is a convenience function for simple use cases.
///
/// # Arguments
///
/// * `file_path` - Path to the text file
/// * `word` - Concordance search word
///
/// # Returns
///
/// The analysis report
pub fn analyze_file<P: AsRef<std::path::Path>>(file_path: P, word: &str) -> anyhow::Result<AnalysisReport> {
    let analyzer = TextAnalyzer::new(&config::default_config())?;
    analyzer.analyze_file(file_path.as_ref(), word)
}

/// Analyzer configuration
pub mod config {
    use std::path::{Path, PathBuf};
    use std::str::FromStr;

    use log::{error, info, LevelFilter};
    use serde::{Deserialize, Serialize};

    /// Settings for a [`TextAnalyzer`](crate::TextAnalyzer)
    #[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
    #[serde(default)]
    pub struct AnalyzerConfig {
        /// Tokens kept before each occurrence
        pub left_context_size: isize,

        /// Tokens kept after each occurrence
        pub right_context_size: isize,

        /// Number of most frequent words to report
        pub top_n: usize,

        /// Sort the concordance by left (`true`) or right (`false`) context,
        /// keep text order when unset
        pub sort_by_left: Option<bool>,

        /// Stop-word list; the built-in list is used when unset
        pub stop_words_file: Option<PathBuf>,

        pub log_level: String,

        pub log_file: Option<PathBuf>,
    }

    impl Default for AnalyzerConfig {
        fn default() -> Self {
            Self {
                left_context_size: 2,
                right_context_size: 3,
                top_n: 10,
                sort_by_left: None,
                stop_words_file: None,
                log_level: "info".to_string(),
                log_file: None,
            }
        }
    }

    impl AnalyzerConfig {
        /// Parsed log level, `Info` if the configured name is unknown
        pub fn log_level(&self) -> LevelFilter {
            LevelFilter::from_str(&self.log_level).unwrap_or(LevelFilter::Info)
        }
    }

    /// Create default configuration
    pub fn default_config() -> AnalyzerConfig {
        AnalyzerConfig::default()
    }

    /// Load configuration from a JSON file if provided
    ///
    /// A missing file or invalid JSON is logged and the defaults are used
    /// instead.
    pub fn load_config(config_path: Option<&Path>) -> AnalyzerConfig {
        let path = match config_path {
            Some(path) => path,
            None => return default_config(),
        };

        if !path.exists() {
            error!("Configuration file not found: {}", path.display());
            return default_config();
        }

        let config_str = match std::fs::read_to_string(path) {
            Ok(config_str) => config_str,
            Err(e) => {
                error!("Failed to read configuration file {}: {}", path.display(), e);
                return default_config();
            }
        };

        match serde_json::from_str(&config_str) {
            Ok(config) => {
                info!("Loaded configuration from {}", path.display());
                config
            }
            Err(e) => {
                error!("Invalid JSON in configuration file: {}", e);
                default_config()
            }
        }
    }

}
