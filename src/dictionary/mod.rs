//! Dictionary store
//!
//! Owns the vocabulary: the set of words considered valid nodes in the ladder
//! graph. The vocabulary is loaded lazily, exactly once, and shared read-only
//! between solves. A failed read degrades to an empty vocabulary instead of
//! surfacing errors through membership checks; `reset` is the explicit path
//! for re-reading the source (after an external edit, for instance).

use crate::wordlists::{WORDS, loader};
use rustc_hash::FxHashSet;
use std::fmt;
use std::path::PathBuf;
use std::sync::{Arc, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};
use tracing::{info, warn};

/// Where the vocabulary comes from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Source {
    /// The word list compiled into the binary
    Embedded,
    /// A newline-delimited word-list file
    File(PathBuf),
    /// An in-memory list, mainly for tests and embedding callers
    Memory(Vec<String>),
}

impl fmt::Display for Source {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Embedded => write!(f, "embedded"),
            Self::File(path) => write!(f, "{}", path.display()),
            Self::Memory(_) => write!(f, "memory"),
        }
    }
}

/// Lazily-loaded, process-wide vocabulary set
///
/// Cheap to share by reference across threads: the cached set lives behind an
/// `Arc`, and the store itself only locks around the one-time load.
pub struct Dictionary {
    source: Source,
    vocabulary: RwLock<Option<Arc<FxHashSet<String>>>>,
}

impl Dictionary {
    /// Store backed by the embedded default word list
    #[must_use]
    pub const fn embedded() -> Self {
        Self {
            source: Source::Embedded,
            vocabulary: RwLock::new(None),
        }
    }

    /// Store backed by a word-list file
    #[must_use]
    pub fn from_file(path: impl Into<PathBuf>) -> Self {
        Self {
            source: Source::File(path.into()),
            vocabulary: RwLock::new(None),
        }
    }

    /// Store backed by an explicit word list
    ///
    /// Entries are normalized on load like file lines (trimmed, lowercased,
    /// blanks dropped).
    #[must_use]
    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            source: Source::Memory(words.into_iter().map(Into::into).collect()),
            vocabulary: RwLock::new(None),
        }
    }

    /// The configured source
    #[must_use]
    pub const fn source(&self) -> &Source {
        &self.source
    }

    /// Get the vocabulary, reading the source on first call
    ///
    /// Concurrent first loads are serialized by the write lock; losers of the
    /// race observe the winner's completed set. A failed read logs a warning
    /// and caches an empty set, so membership checks never error.
    pub fn load(&self) -> Arc<FxHashSet<String>> {
        if let Some(vocabulary) = self.read_guard().as_ref() {
            return Arc::clone(vocabulary);
        }

        let mut guard = self.write_guard();
        // Double-check: another thread may have loaded while we waited
        if let Some(vocabulary) = guard.as_ref() {
            return Arc::clone(vocabulary);
        }

        let vocabulary = Arc::new(self.read_source());
        *guard = Some(Arc::clone(&vocabulary));
        vocabulary
    }

    /// O(1) membership test on the normalized vocabulary
    ///
    /// Callers must pass already-normalized (trimmed, lowercase) words.
    pub fn contains(&self, word: &str) -> bool {
        self.load().contains(word)
    }

    /// Number of words in the vocabulary (loads if needed)
    pub fn len(&self) -> usize {
        self.load().len()
    }

    /// True when the vocabulary is empty, as after a failed load
    pub fn is_empty(&self) -> bool {
        self.load().is_empty()
    }

    /// Drop the cached vocabulary so the next `load` re-reads the source
    pub fn reset(&self) {
        *self.write_guard() = None;
    }

    fn read_source(&self) -> FxHashSet<String> {
        let words = match &self.source {
            Source::Embedded => Ok(loader::words_from_slice(WORDS)),
            Source::File(path) => loader::load_from_file(path),
            Source::Memory(words) => Ok(words
                .iter()
                .map(|w| w.trim().to_lowercase())
                .filter(|w| !w.is_empty())
                .collect()),
        };

        match words {
            Ok(words) => {
                let set: FxHashSet<String> = words.into_iter().collect();
                info!(source = %self.source, size = set.len(), "Loaded dictionary");
                set
            }
            Err(error) => {
                warn!(source = %self.source, %error, "Failed to load dictionary, vocabulary is empty");
                FxHashSet::default()
            }
        }
    }

    fn read_guard(&self) -> RwLockReadGuard<'_, Option<Arc<FxHashSet<String>>>> {
        self.vocabulary
            .read()
            .unwrap_or_else(PoisonError::into_inner)
    }

    fn write_guard(&self) -> RwLockWriteGuard<'_, Option<Arc<FxHashSet<String>>>> {
        self.vocabulary
            .write()
            .unwrap_or_else(PoisonError::into_inner)
    }
}
