//! Ladder solving
//!
//! The solver is a breadth-first shortest-path search over the implicit graph
//! whose edges are one-edit word transformations.

mod engine;
mod neighbors;
mod search;

pub use engine::Solver;
pub use neighbors::neighbors;
pub use search::SearchLimits;
