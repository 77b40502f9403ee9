//! Breadth-first shortest-path search
//!
//! BFS explores nodes in non-decreasing distance from the start word, so the
//! first path to reach the end word is a shortest one. Nodes live in an arena
//! with parent indices; the path is reconstructed by walking parents once the
//! end word is found, instead of carrying a full path per queue entry.

use super::neighbors::neighbors;
use crate::core::{Mode, SolveError};
use rustc_hash::FxHashSet;
use std::collections::VecDeque;

/// Safety bounds for a single search
///
/// These are policy valves against pathological graphs, not correctness
/// requirements. The defaults match long-standing empirical values.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchLimits {
    /// Dequeues allowed before aborting with `SearchLimitExceeded`
    pub max_iterations: usize,
    /// Maximum nodes in a partial path; paths at this depth are dead ends
    pub max_depth: usize,
}

impl SearchLimits {
    pub const DEFAULT_MAX_ITERATIONS: usize = 200_000;
    pub const DEFAULT_MAX_DEPTH: usize = 50;

    #[must_use]
    pub const fn new() -> Self {
        Self {
            max_iterations: Self::DEFAULT_MAX_ITERATIONS,
            max_depth: Self::DEFAULT_MAX_DEPTH,
        }
    }
}

impl Default for SearchLimits {
    fn default() -> Self {
        Self::new()
    }
}

/// Arena entry: a visited word plus where it was reached from
struct Node {
    word: String,
    parent: Option<usize>,
    /// Nodes on the path from the start word, inclusive
    depth: usize,
}

/// Find a shortest ladder from `start` to `end`
///
/// Callers guarantee both words are vocabulary members, `start != end`, and
/// equal lengths in weaver mode. Words are marked visited when enqueued, so
/// no word is expanded twice and memory stays bounded by the vocabulary.
///
/// # Errors
/// `SearchLimitExceeded` when the iteration bound trips; `NoSolutionFound`
/// when the frontier empties without reaching `end`.
pub(crate) fn shortest_path(
    start: &str,
    end: &str,
    mode: Mode,
    vocabulary: &FxHashSet<String>,
    limits: SearchLimits,
) -> Result<Vec<String>, SolveError> {
    let mut arena = vec![Node {
        word: start.to_string(),
        parent: None,
        depth: 1,
    }];
    let mut queue: VecDeque<usize> = VecDeque::from([0]);
    let mut visited: FxHashSet<String> = FxHashSet::default();
    visited.insert(start.to_string());

    let mut iterations = 0usize;

    while let Some(index) = queue.pop_front() {
        iterations += 1;
        if iterations > limits.max_iterations {
            return Err(SolveError::SearchLimitExceeded);
        }

        let depth = arena[index].depth;
        if depth >= limits.max_depth {
            // Depth cap reached: treat as a dead end, not an error
            continue;
        }

        let word = arena[index].word.clone();
        for neighbor in neighbors(&word, mode, vocabulary) {
            if neighbor == end {
                let mut path = reconstruct(&arena, index);
                path.push(neighbor);
                return Ok(path);
            }

            if !visited.contains(&neighbor) {
                visited.insert(neighbor.clone());
                arena.push(Node {
                    word: neighbor,
                    parent: Some(index),
                    depth: depth + 1,
                });
                queue.push_back(arena.len() - 1);
            }
        }
    }

    Err(SolveError::NoSolutionFound)
}

/// Walk parent indices back to the start, then reverse
fn reconstruct(arena: &[Node], mut index: usize) -> Vec<String> {
    let mut path = Vec::with_capacity(arena[index].depth);
    loop {
        path.push(arena[index].word.clone());
        match arena[index].parent {
            Some(parent) => index = parent,
            None => break,
        }
    }
    path.reverse();
    path
}
