//! Dictionary inspection command

use crate::dictionary::Dictionary;

/// Snapshot of the loaded dictionary
pub struct DictionaryInfo {
    pub source: String,
    pub size: usize,
}

/// Load the dictionary and report its stats
#[must_use]
pub fn dictionary_info(dictionary: &Dictionary) -> DictionaryInfo {
    DictionaryInfo {
        source: dictionary.source().to_string(),
        size: dictionary.len(),
    }
}
