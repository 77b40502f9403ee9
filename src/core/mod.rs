//! Core domain types for ladder solving

mod mode;
mod solution;
mod word;

pub use mode::Mode;
pub use solution::{Solution, SolveError};
pub use word::{Word, WordError};
