// crates/core/src/stats.rs
use serde::Serialize;
use text_utils_shared_kernel::Result;

use crate::frequency::FrequencyTable;

/// Snapshot of the text queries under one configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TextSummary {
    /// Number of whitespace-delimited words.
    pub total_words: usize,
    /// Number of distinct lowercase words.
    pub unique_words: usize,
    /// Longest word in its original casing, empty for empty text.
    pub longest_word: String,
    /// Top words by frequency.
    pub most_common: FrequencyTable<String>,
    /// Words left after removing common words, by frequency.
    pub keywords: FrequencyTable<String>,
}

impl TextSummary {
    /// # Errors
    ///
    /// Returns a serialization error if JSON encoding fails.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }

    /// # Errors
    ///
    /// Returns a serialization error if JSON encoding fails.
    pub fn to_json_pretty(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}
