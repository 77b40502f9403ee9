//! Word removal from a dictionary file
//!
//! Management operation on the backing word list: drops every line whose
//! trimmed text equals the trimmed target. The in-memory vocabulary of any
//! live `Dictionary` is untouched; callers reset it for the edit to become
//! visible to the solver.

use anyhow::{Context, Result};
use std::fs;
use std::path::Path;

/// What happened to the word list
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RemoveOutcome {
    /// The word was present; this many lines were removed
    Removed(usize),
    /// No line matched the word
    NotFound,
}

/// Remove all lines matching `word` from the word-list file at `path`
///
/// Matching is on trimmed lines, so trailing whitespace or `\r` left by CRLF
/// editors does not hide a word. The file is only rewritten when something
/// matched.
///
/// # Errors
/// Returns an error when the file cannot be read or written.
pub fn remove_word<P: AsRef<Path>>(path: P, word: &str) -> Result<RemoveOutcome> {
    let path = path.as_ref();
    let target = word.trim();

    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read word list {}", path.display()))?;

    let lines: Vec<&str> = content.lines().collect();
    let kept: Vec<&str> = lines
        .iter()
        .copied()
        .filter(|line| line.trim() != target)
        .collect();

    let removed = lines.len() - kept.len();
    if removed == 0 {
        return Ok(RemoveOutcome::NotFound);
    }

    let mut rewritten = kept.join("\n");
    rewritten.push('\n');
    fs::write(path, rewritten)
        .with_context(|| format!("Failed to write word list {}", path.display()))?;

    Ok(RemoveOutcome::Removed(removed))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_list(name: &str, content: &str) -> std::path::PathBuf {
        let path = std::env::temp_dir().join(name);
        fs::write(&path, content).unwrap();
        path
    }

    #[test]
    fn removes_matching_line() {
        let path = temp_list("weaver_remove_one.txt", "cat\ncot\ndog\n");

        let outcome = remove_word(&path, "cot").unwrap();
        assert_eq!(outcome, RemoveOutcome::Removed(1));

        let content = fs::read_to_string(&path).unwrap();
        assert_eq!(content, "cat\ndog\n");

        fs::remove_file(&path).ok();
    }

    #[test]
    fn removes_every_duplicate_line() {
        let path = temp_list("weaver_remove_dup.txt", "cat\ndog\ncat\ncat\n");

        let outcome = remove_word(&path, "cat").unwrap();
        assert_eq!(outcome, RemoveOutcome::Removed(3));

        let content = fs::read_to_string(&path).unwrap();
        assert_eq!(content, "dog\n");

        fs::remove_file(&path).ok();
    }

    #[test]
    fn matches_trimmed_lines_and_target() {
        let path = temp_list("weaver_remove_trim.txt", "cat \r\ndog\n");

        let outcome = remove_word(&path, " cat ").unwrap();
        assert_eq!(outcome, RemoveOutcome::Removed(1));

        fs::remove_file(&path).ok();
    }

    #[test]
    fn missing_word_is_not_found() {
        let path = temp_list("weaver_remove_missing.txt", "cat\ndog\n");

        let outcome = remove_word(&path, "fox").unwrap();
        assert_eq!(outcome, RemoveOutcome::NotFound);

        // File untouched
        let content = fs::read_to_string(&path).unwrap();
        assert_eq!(content, "cat\ndog\n");

        fs::remove_file(&path).ok();
    }

    #[test]
    fn unreadable_file_is_an_error() {
        let result = remove_word("/nonexistent/weaver/words.txt", "cat");
        assert!(result.is_err());
    }
}
