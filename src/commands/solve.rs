//! Ladder solving command
//!
//! Runs a single solve and packages the outcome with timing for the output
//! layer.

use crate::core::{Mode, Solution, SolveError};
use crate::dictionary::Dictionary;
use crate::solver::{SearchLimits, Solver};
use std::time::{Duration, Instant};

/// Configuration for one solve run
pub struct SolveConfig {
    pub start: String,
    pub end: String,
    pub mode: Mode,
    pub limits: SearchLimits,
}

impl SolveConfig {
    #[must_use]
    pub const fn new(start: String, end: String, mode: Mode) -> Self {
        Self {
            start,
            end,
            mode,
            limits: SearchLimits::new(),
        }
    }
}

/// Outcome of a solve run, failures included
///
/// Solve failures are normal results here, not process errors; the output
/// layer renders both.
pub struct SolveReport {
    pub start: String,
    pub end: String,
    pub mode: Mode,
    pub outcome: Result<Solution, SolveError>,
    pub duration: Duration,
}

/// Run a solve against the given dictionary
#[must_use]
pub fn run_solve(config: SolveConfig, dictionary: &Dictionary) -> SolveReport {
    let solver = Solver::with_limits(dictionary, config.limits);

    let started = Instant::now();
    let outcome = solver.solve(&config.start, &config.end, config.mode);
    let duration = started.elapsed();

    SolveReport {
        start: config.start,
        end: config.end,
        mode: config.mode,
        outcome,
        duration,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn report_carries_solution() {
        let dictionary = Dictionary::from_words(["cat", "cot", "cog", "dog"]);
        let config = SolveConfig::new("cat".to_string(), "dog".to_string(), Mode::Weaver);

        let report = run_solve(config, &dictionary);
        let solution = report.outcome.unwrap();
        assert_eq!(solution.steps, 3);
        assert_eq!(report.start, "cat");
        assert_eq!(report.end, "dog");
    }

    #[test]
    fn report_carries_failure_as_value() {
        let dictionary = Dictionary::from_words(["cat"]);
        let config = SolveConfig::new("cat".to_string(), "dog".to_string(), Mode::Weaver);

        let report = run_solve(config, &dictionary);
        assert_eq!(
            report.outcome,
            Err(SolveError::NotInDictionary("dog".to_string()))
        );
    }

    #[test]
    fn custom_limits_are_respected() {
        let dictionary = Dictionary::from_words(["cat", "cot", "cog", "dog"]);
        let mut config = SolveConfig::new("cat".to_string(), "dog".to_string(), Mode::Weaver);
        config.limits.max_iterations = 1;

        let report = run_solve(config, &dictionary);
        assert_eq!(report.outcome, Err(SolveError::SearchLimitExceeded));
    }
}
