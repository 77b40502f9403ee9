//! Word lists for ladder solving
//!
//! Provides the embedded default dictionary compiled into the binary plus a
//! loader for external word-list files.

mod embedded;
pub mod loader;

pub use embedded::{WORDS, WORDS_COUNT};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn words_count_matches_const() {
        assert_eq!(WORDS.len(), WORDS_COUNT);
    }

    #[test]
    fn words_are_lowercase_alphabetic() {
        for &word in &WORDS[..50.min(WORDS.len())] {
            // Just check a prefix for speed
            assert!(
                word.chars().all(|c| c.is_ascii_lowercase()),
                "Word '{word}' contains non-lowercase chars"
            );
        }
    }

    #[test]
    fn words_contain_classic_ladder() {
        for rung in ["cat", "cot", "cog", "dog"] {
            assert!(WORDS.contains(&rung), "missing '{rung}'");
        }
    }

    #[test]
    fn words_have_no_duplicates() {
        let set: std::collections::HashSet<_> = WORDS.iter().collect();
        assert_eq!(set.len(), WORDS.len());
    }
}
