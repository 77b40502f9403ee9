//! One-edit neighbor enumeration
//!
//! The ladder graph is implicit: a word's neighbors are every vocabulary
//! member exactly one edit away under the active mode. Enumeration order is
//! fixed (substitutions by position then letter, then insertions, then
//! deletions) so that searches are reproducible.

use crate::core::Mode;
use rustc_hash::FxHashSet;

const ALPHABET: std::ops::RangeInclusive<u8> = b'a'..=b'z';

/// Enumerate all dictionary words one edit away from `word`
///
/// `word` must already be normalized (lowercase ASCII); candidates inherit
/// its casing, so unnormalized input would never match the vocabulary.
/// Duplicates may appear in the output; the search dedups via its visited
/// set.
#[must_use]
pub fn neighbors(word: &str, mode: Mode, vocabulary: &FxHashSet<String>) -> Vec<String> {
    let bytes = word.as_bytes();
    let mut found = Vec::new();

    // Substitutions: the only edit in weaver mode, always tried first
    let mut candidate = bytes.to_vec();
    for i in 0..bytes.len() {
        let original = bytes[i];
        for letter in ALPHABET {
            if letter == original {
                continue;
            }
            candidate[i] = letter;
            push_if_member(&candidate, vocabulary, &mut found);
        }
        candidate[i] = original;
    }

    if mode.allows_length_change() {
        // Insertions: every gap from 0 to len inclusive
        for i in 0..=bytes.len() {
            let mut candidate = Vec::with_capacity(bytes.len() + 1);
            candidate.extend_from_slice(&bytes[..i]);
            candidate.push(b'a');
            candidate.extend_from_slice(&bytes[i..]);
            for letter in ALPHABET {
                candidate[i] = letter;
                push_if_member(&candidate, vocabulary, &mut found);
            }
        }

        // Deletions: never reduce a word below one letter
        if bytes.len() > 1 {
            for i in 0..bytes.len() {
                let mut candidate = Vec::with_capacity(bytes.len() - 1);
                candidate.extend_from_slice(&bytes[..i]);
                candidate.extend_from_slice(&bytes[i + 1..]);
                push_if_member(&candidate, vocabulary, &mut found);
            }
        }
    }

    found
}

fn push_if_member(candidate: &[u8], vocabulary: &FxHashSet<String>, found: &mut Vec<String>) {
    // Candidates are built from ASCII bytes, so this never fails
    if let Ok(text) = std::str::from_utf8(candidate) {
        if vocabulary.contains(text) {
            found.push(text.to_string());
        }
    }
}
