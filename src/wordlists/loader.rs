//! Word list loading utilities
//!
//! Normalization matches what the solver expects: each line is trimmed and
//! lowercased, blank lines are dropped, and both `\n` and `\r\n` endings are
//! accepted.

use std::fs;
use std::io;
use std::path::Path;

/// Load and normalize words from a newline-delimited file
///
/// # Errors
///
/// Returns an I/O error if the file cannot be read or opened.
///
/// # Examples
/// ```no_run
/// use weaver_solver::wordlists::loader::load_from_file;
///
/// let words = load_from_file("data/words.txt").unwrap();
/// println!("Loaded {} words", words.len());
/// ```
pub fn load_from_file<P: AsRef<Path>>(path: P) -> io::Result<Vec<String>> {
    let content = fs::read_to_string(path)?;
    Ok(normalize_lines(&content))
}

/// Normalize embedded string slice entries the same way as file lines
#[must_use]
pub fn words_from_slice(slice: &[&str]) -> Vec<String> {
    slice
        .iter()
        .filter_map(|&line| {
            let trimmed = line.trim();
            if trimmed.is_empty() {
                None
            } else {
                Some(trimmed.to_lowercase())
            }
        })
        .collect()
}

fn normalize_lines(content: &str) -> Vec<String> {
    // str::lines already strips the \r of CRLF endings
    content
        .lines()
        .filter_map(|line| {
            let trimmed = line.trim();
            if trimmed.is_empty() {
                None
            } else {
                Some(trimmed.to_lowercase())
            }
        })
        .collect()
}
