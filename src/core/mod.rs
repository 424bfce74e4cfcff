//! Core module for text analysis
//!
//! Tokenization, frequency analysis and concordance extraction, plus the
//! analyzer that runs them together over one text.

pub mod analyzer;
pub mod concordance;
pub mod frequency;
pub mod tokenizer;
