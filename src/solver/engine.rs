//! Solve orchestration
//!
//! Validates and normalizes inputs, applies mode preconditions, and hands off
//! to the breadth-first search.

use super::search::{SearchLimits, shortest_path};
use crate::core::{Mode, Solution, SolveError, Word};
use crate::dictionary::Dictionary;

/// Ladder solver bound to a dictionary
///
/// Holds no per-solve state: each `solve` call owns its own queue and visited
/// set, so one solver can serve concurrent solves over the shared read-only
/// vocabulary.
pub struct Solver<'a> {
    dictionary: &'a Dictionary,
    limits: SearchLimits,
}

impl<'a> Solver<'a> {
    /// Solver with default search limits
    #[must_use]
    pub const fn new(dictionary: &'a Dictionary) -> Self {
        Self {
            dictionary,
            limits: SearchLimits::new(),
        }
    }

    /// Solver with explicit search limits
    #[must_use]
    pub const fn with_limits(dictionary: &'a Dictionary, limits: SearchLimits) -> Self {
        Self { dictionary, limits }
    }

    /// Find the shortest ladder from `start` to `end` under `mode`
    ///
    /// Inputs are trimmed and lowercased before validation. All failures are
    /// returned as `SolveError` values; nothing here panics on user input.
    ///
    /// # Errors
    /// - `NotInDictionary` when either word is absent from the vocabulary
    ///   (an unparseable word can never be a member, so it reports the same)
    /// - `LengthMismatch` in weaver mode with different-length words
    /// - `SearchLimitExceeded` / `NoSolutionFound` from the search itself
    pub fn solve(&self, start: &str, end: &str, mode: Mode) -> Result<Solution, SolveError> {
        let start = normalize(start)?;
        let end = normalize(end)?;

        let vocabulary = self.dictionary.load();
        if !vocabulary.contains(start.text()) {
            return Err(SolveError::NotInDictionary(start.into_string()));
        }
        if !vocabulary.contains(end.text()) {
            return Err(SolveError::NotInDictionary(end.into_string()));
        }

        if mode == Mode::Weaver && start.len() != end.len() {
            return Err(SolveError::LengthMismatch {
                start_len: start.len(),
                end_len: end.len(),
            });
        }

        // Trivial ladder: already there
        if start == end {
            return Ok(Solution::from_path(vec![start.into_string()]));
        }

        shortest_path(start.text(), end.text(), mode, &vocabulary, self.limits)
            .map(Solution::from_path)
    }
}

fn normalize(input: &str) -> Result<Word, SolveError> {
    // A word that fails validation cannot be a vocabulary member either
    Word::new(input).map_err(|_| SolveError::NotInDictionary(input.trim().to_lowercase()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ladder_dictionary() -> Dictionary {
        Dictionary::from_words(["cat", "cot", "cog", "dog"])
    }

    #[test]
    fn classic_four_word_ladder() {
        let dictionary = ladder_dictionary();
        let solver = Solver::new(&dictionary);

        let solution = solver.solve("cat", "dog", Mode::Weaver).unwrap();
        assert_eq!(solution.path, vec!["cat", "cot", "cog", "dog"]);
        assert_eq!(solution.steps, 3);
    }

    #[test]
    fn identity_solve_is_zero_steps() {
        let dictionary = ladder_dictionary();
        let solver = Solver::new(&dictionary);

        for mode in [Mode::Weaver, Mode::WeaverX] {
            let solution = solver.solve("cat", "cat", mode).unwrap();
            assert_eq!(solution.path, vec!["cat"]);
            assert_eq!(solution.steps, 0);
        }
    }

    #[test]
    fn inputs_are_normalized() {
        let dictionary = ladder_dictionary();
        let solver = Solver::new(&dictionary);

        let solution = solver.solve("  CAT ", "Dog\t", Mode::Weaver).unwrap();
        assert_eq!(solution.path, vec!["cat", "cot", "cog", "dog"]);
    }

    #[test]
    fn unknown_word_names_the_offender() {
        let dictionary = ladder_dictionary();
        let solver = Solver::new(&dictionary);

        let err = solver.solve("zzzzzxxxx", "cat", Mode::Weaver).unwrap_err();
        assert_eq!(err, SolveError::NotInDictionary("zzzzzxxxx".to_string()));

        let err = solver.solve("cat", "zzzzzxxxx", Mode::Weaver).unwrap_err();
        assert_eq!(err, SolveError::NotInDictionary("zzzzzxxxx".to_string()));
    }

    #[test]
    fn length_mismatch_in_weaver_mode() {
        let dictionary = Dictionary::from_words(["cat", "dogs"]);
        let solver = Solver::new(&dictionary);

        let err = solver.solve("cat", "dogs", Mode::Weaver).unwrap_err();
        assert_eq!(
            err,
            SolveError::LengthMismatch {
                start_len: 3,
                end_len: 4
            }
        );
    }

    #[test]
    fn weaverx_permits_length_change() {
        let dictionary = Dictionary::from_words(["cat", "cats", "oats", "oat"]);
        let solver = Solver::new(&dictionary);

        let solution = solver.solve("cat", "oats", Mode::WeaverX).unwrap();
        assert_eq!(solution.steps, 2);
        assert_eq!(solution.path.first().map(String::as_str), Some("cat"));
        assert_eq!(solution.path.last().map(String::as_str), Some("oats"));
    }

    #[test]
    fn weaver_path_preserves_length() {
        let dictionary = Dictionary::from_words([
            "cold", "cord", "card", "ward", "warm", "corm", "word", "worm",
        ]);
        let solver = Solver::new(&dictionary);

        let solution = solver.solve("cold", "warm", Mode::Weaver).unwrap();
        assert!(solution.path.iter().all(|w| w.len() == 4));
    }

    #[test]
    fn unreachable_pair_reports_no_solution() {
        let dictionary = Dictionary::from_words(["cat", "cot", "dig", "dug"]);
        let solver = Solver::new(&dictionary);

        let err = solver.solve("cat", "dig", Mode::Weaver).unwrap_err();
        assert_eq!(err, SolveError::NoSolutionFound);
    }

    #[test]
    fn empty_vocabulary_rejects_everything() {
        let dictionary = Dictionary::from_file("/nonexistent/weaver/words.txt");
        let solver = Solver::new(&dictionary);

        let err = solver.solve("cat", "dog", Mode::Weaver).unwrap_err();
        assert_eq!(err, SolveError::NotInDictionary("cat".to_string()));
    }

    #[test]
    fn invalid_input_reads_as_not_in_dictionary() {
        let dictionary = ladder_dictionary();
        let solver = Solver::new(&dictionary);

        let err = solver.solve("c4t", "dog", Mode::Weaver).unwrap_err();
        assert_eq!(err, SolveError::NotInDictionary("c4t".to_string()));
    }

    #[test]
    fn repeated_solves_are_identical() {
        let dictionary = Dictionary::from_words([
            "lend", "land", "lond", "band", "bend", "bond", "bind",
        ]);
        let solver = Solver::new(&dictionary);

        let first = solver.solve("lend", "bond", Mode::Weaver).unwrap();
        let second = solver.solve("lend", "bond", Mode::Weaver).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn identity_solve_for_every_vocabulary_word() {
        let dictionary = ladder_dictionary();
        let solver = Solver::new(&dictionary);

        for word in ["cat", "cot", "cog", "dog"] {
            for mode in [Mode::Weaver, Mode::WeaverX] {
                let solution = solver.solve(word, word, mode).unwrap();
                assert_eq!(solution.path, vec![word.to_string()]);
                assert_eq!(solution.steps, 0);
            }
        }
    }

    #[test]
    fn custom_limits_flow_through() {
        let dictionary = ladder_dictionary();
        let limits = SearchLimits {
            max_iterations: 1,
            max_depth: SearchLimits::DEFAULT_MAX_DEPTH,
        };
        let solver = Solver::with_limits(&dictionary, limits);

        let err = solver.solve("cat", "dog", Mode::Weaver).unwrap_err();
        assert_eq!(err, SolveError::SearchLimitExceeded);
    }
}
