//! Weaver Solver
//!
//! A word-ladder solver for Weaver-style puzzles. Given a start word, an end
//! word, and a transformation mode, it finds the shortest sequence of
//! dictionary words connecting them, one edit per rung.
//!
//! Two modes are supported: `weaver` (fixed length, substitutions only) and
//! `weaverx` (substitutions plus insertions and deletions, so ladders may
//! cross word lengths). Paths are exact shortest paths from a breadth-first
//! search, returned deterministically.
//!
//! # Quick Start
//!
//! ```rust
//! use weaver_solver::core::Mode;
//! use weaver_solver::dictionary::Dictionary;
//! use weaver_solver::solver::Solver;
//!
//! let dictionary = Dictionary::from_words(["cat", "cot", "cog", "dog"]);
//! let solver = Solver::new(&dictionary);
//!
//! let solution = solver.solve("cat", "dog", Mode::Weaver).unwrap();
//! assert_eq!(solution.path, vec!["cat", "cot", "cog", "dog"]);
//! assert_eq!(solution.steps, 3);
//! ```

// Core domain types
pub mod core;

// Vocabulary store
pub mod dictionary;

// Shortest-path solving
pub mod solver;

// Word lists
pub mod wordlists;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;
