//! Command implementations

pub mod info;
pub mod remove;
pub mod solve;

pub use info::{DictionaryInfo, dictionary_info};
pub use remove::{RemoveOutcome, remove_word};
pub use solve::{SolveConfig, SolveReport, run_solve};
