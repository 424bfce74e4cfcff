//! File handling utilities
//!
//! Reading source texts and stop-word lists, and writing token lists back to
//! disk. Unlike the analysis functions these fail loudly: silently returning
//! an empty text would corrupt everything downstream.

use std::fs::{self, File};
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use log::{debug, warn};

/// Errors raised while accessing text files
#[derive(Debug, thiserror::Error)]
pub enum TextFileError {
    /// An empty path was given
    #[error("No file path given")]
    EmptyPath,

    /// The file does not exist
    #[error("File not found: {}", .0.display())]
    FileNotFound(PathBuf),

    /// Any other I/O failure
    #[error("Failed to access {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// Check that a path is usable for reading
fn check_readable(path: &Path) -> Result<(), TextFileError> {
    if path.as_os_str().is_empty() {
        return Err(TextFileError::EmptyPath);
    }
    if !path.exists() {
        return Err(TextFileError::FileNotFound(path.to_path_buf()));
    }
    Ok(())
}

/// Read the content of a text file
///
/// # Arguments
///
/// * `path_to_file` - Path to the file
///
/// # Returns
///
/// The whole file content as a string
pub fn read_from_file<P: AsRef<Path>>(path_to_file: P) -> Result<String, TextFileError> {
    let path = path_to_file.as_ref();
    check_readable(path)?;

    let content = fs::read_to_string(path).map_err(|source| TextFileError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    debug!("Read {} bytes from {}", content.len(), path.display());
    Ok(content)
}

/// Write token lists to a file
///
/// The tokens of every inner list are concatenated without separators and
/// written as one newline-terminated line.
///
/// # Arguments
///
/// * `path_to_file` - Output path, created or truncated
/// * `content` - Lists of tokens, one line each
pub fn write_to_file<P, T>(path_to_file: P, content: &[Vec<T>]) -> Result<()>
where
    P: AsRef<Path>,
    T: AsRef<str>,
{
    let path = path_to_file.as_ref();
    if path.as_os_str().is_empty() {
        return Err(TextFileError::EmptyPath.into());
    }

    let file = File::create(path)
        .context(format!("Failed to create output file: {}", path.display()))?;
    let mut writer = BufWriter::new(file);

    for entry in content {
        let line: String = entry.iter().map(|token| token.as_ref()).collect();
        writeln!(writer, "{}", line)?;
    }
    writer.flush()?;

    debug!("Wrote {} lines to {}", content.len(), path.display());
    Ok(())
}

/// Load a stop-word list
///
/// Words are separated by whitespace; lines starting with `#` are ignored.
/// Words are lowercased so they match tokenizer output.
pub fn load_stop_words<P: AsRef<Path>>(path_to_file: P) -> Result<Vec<String>> {
    let path = path_to_file.as_ref();
    let content = read_from_file(path)
        .context(format!("Failed to load stop words from {}", path.display()))?;

    let words: Vec<String> = content
        .lines()
        .map(str::trim)
        .filter(|line| !line.starts_with('#'))
        .flat_map(str::split_whitespace)
        .map(str::to_lowercase)
        .collect();

    if words.is_empty() {
        warn!("Stop-word file {} is empty", path.display());
    }
    Ok(words)
}
