//! Utility modules for the text analyzer
//!
//! File handling, output formatting and logging setup.

pub mod file_utils;
pub mod logging;
pub mod output_formatter;
