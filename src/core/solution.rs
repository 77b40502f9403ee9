//! Solve results and the failure taxonomy
//!
//! Every failure is an ordinary value returned from `solve`, presentable to
//! an end user as a plain message. None of these variants should ever
//! escalate to a panic.

use thiserror::Error;

/// A shortest ladder from start to end
///
/// `path` begins at the start word and ends at the end word; consecutive
/// entries differ by exactly one edit under the active mode. `steps` is the
/// edge count: `path.len() - 1`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Solution {
    pub path: Vec<String>,
    pub steps: usize,
}

impl Solution {
    /// Wrap a non-empty path, deriving the step count
    #[must_use]
    pub fn from_path(path: Vec<String>) -> Self {
        let steps = path.len().saturating_sub(1);
        Self { path, steps }
    }
}

/// Why a solve failed
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SolveError {
    /// Start or end word is not in the vocabulary
    #[error("Word \"{0}\" not found in dictionary")]
    NotInDictionary(String),

    /// Weaver mode requires equal-length start and end words
    #[error("In weaver mode, start and end words must have the same length (got {start_len} and {end_len})")]
    LengthMismatch { start_len: usize, end_len: usize },

    /// The iteration bound was hit before the end word was reached
    #[error("Search limit exceeded. No solution found within reasonable time")]
    SearchLimitExceeded,

    /// The frontier emptied: no ladder connects the two words
    #[error("No solution found")]
    NoSolutionFound,
}
