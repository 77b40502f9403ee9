//! Transformation modes
//!
//! Weaver is the classic fixed-length ladder: every rung swaps one letter.
//! Weaver X relaxes the length constraint by also allowing single-letter
//! insertions and deletions, i.e. full single-edit Levenshtein adjacency.

use clap::ValueEnum;
use std::fmt;

/// Edit rule set for a solve
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Mode {
    /// Fixed length, substitution only
    Weaver,
    /// Variable length: substitution, insertion, and deletion
    #[value(name = "weaverx")]
    WeaverX,
}

impl Mode {
    /// Create a mode from a name string
    ///
    /// Recognizes "weaver" and "weaverx"; anything else is `None` — callers
    /// at the input boundary must reject unknown modes before solving.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "weaver" => Some(Self::Weaver),
            "weaverx" => Some(Self::WeaverX),
            _ => None,
        }
    }

    /// Canonical lowercase name
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Weaver => "weaver",
            Self::WeaverX => "weaverx",
        }
    }

    /// Whether insertions and deletions are allowed
    #[must_use]
    pub const fn allows_length_change(self) -> bool {
        matches!(self, Self::WeaverX)
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_name_recognizes_both_modes() {
        assert_eq!(Mode::from_name("weaver"), Some(Mode::Weaver));
        assert_eq!(Mode::from_name("weaverx"), Some(Mode::WeaverX));
    }

    #[test]
    fn from_name_rejects_unknown() {
        assert_eq!(Mode::from_name("WEAVER"), None);
        assert_eq!(Mode::from_name("levenshtein"), None);
        assert_eq!(Mode::from_name(""), None);
    }

    #[test]
    fn round_trip_names() {
        for mode in [Mode::Weaver, Mode::WeaverX] {
            assert_eq!(Mode::from_name(mode.as_str()), Some(mode));
        }
    }

    #[test]
    fn length_change_only_in_weaverx() {
        assert!(!Mode::Weaver.allows_length_change());
        assert!(Mode::WeaverX.allows_length_change());
    }
}
