//! Terminal output formatting

mod display;

pub use display::{print_dictionary_info, print_remove_outcome, print_solve_report};
