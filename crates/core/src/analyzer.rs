// crates/core/src/analyzer.rs
use hashbrown::HashSet;
use num_traits::PrimInt;

use crate::{
    config::AnalysisConfig,
    frequency::FrequencyTable,
    lexical,
    number,
    ranking::Ranking,
    stats::TextSummary,
    stopwords::StopwordFilter,
    tokenize,
};

/// Query methods over a single piece of text.
///
/// Every query is recomputed from the held text on each call; nothing is
/// cached, so reassigning the text with [`set_text`](Self::set_text) is
/// always safe.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TextAnalysisUtility {
    text: String,
    config: AnalysisConfig,
}

impl TextAnalysisUtility {
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into(), config: AnalysisConfig::default() }
    }

    /// Attach per-instance defaults for `top_n` and common words.
    #[must_use]
    pub fn with_config(mut self, config: AnalysisConfig) -> Self {
        log::debug!(
            "attaching analysis config: {} common words, top_n={}",
            config.common_words.len(),
            config.top_n
        );
        self.config = config;
        self
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn set_text(&mut self, text: impl Into<String>) {
        self.text = text.into();
    }

    pub fn config(&self) -> &AnalysisConfig {
        &self.config
    }

    /// Number of distinct lowercase words.
    pub fn count_unique_words(&self) -> usize {
        let unique: HashSet<String> = tokenize::folded_words(&self.text).collect();
        log::trace!("count_unique_words: {} distinct", unique.len());
        unique.len()
    }

    /// Number of whitespace-delimited words, repeats included.
    pub fn count_words(&self) -> usize {
        tokenize::words(&self.text).count()
    }

    /// Lowercase alphanumeric characters and how often each appears.
    pub fn character_frequency(&self) -> FrequencyTable<char> {
        let table: FrequencyTable<char> = tokenize::folded_alphanumerics(&self.text).collect();
        log::trace!("character_frequency: {} distinct characters", table.len());
        table
    }

    /// Longest word, first one on ties; `""` for empty text.
    pub fn longest_word(&self) -> &str {
        lexical::longest_word(&self.text)
    }

    /// Lowercase words and how often each appears, in first-seen order.
    pub fn word_frequency(&self) -> FrequencyTable<String> {
        let table: FrequencyTable<String> = tokenize::folded_words(&self.text).collect();
        log::trace!("word_frequency: {} distinct words", table.len());
        table
    }

    /// The `n` most frequent words, highest first. Ties keep first-seen order.
    pub fn most_common_words(&self, n: usize) -> FrequencyTable<String> {
        Ranking::descending().with_limit(n).apply(self.word_frequency())
    }

    /// [`most_common_words`](Self::most_common_words) with the configured `top_n`.
    pub fn most_common_words_default(&self) -> FrequencyTable<String> {
        self.most_common_words(self.config.top_n)
    }

    /// Word frequencies without `common_words`, highest first.
    ///
    /// Pass [`StopwordFilter::empty()`] to keep every word.
    pub fn detect_keywords(&self, common_words: impl Into<StopwordFilter>) -> FrequencyTable<String> {
        let filter = common_words.into();
        let mut table = self.word_frequency();
        table.retain(|word, _| !filter.is_stopword(word));
        log::trace!("detect_keywords: {} words after {} stopwords", table.len(), filter.len());
        Ranking::descending().apply(table)
    }

    /// [`detect_keywords`](Self::detect_keywords) with the configured common words.
    pub fn detect_keywords_with_config(&self) -> FrequencyTable<String> {
        self.detect_keywords(self.config.stopwords())
    }

    pub fn are_anagrams(&self, first: &str, second: &str) -> bool {
        lexical::are_anagrams(first, second)
    }

    pub fn is_prime<N: PrimInt>(&self, value: N) -> bool {
        number::is_prime(value)
    }

    pub fn longest_common_prefix<S: AsRef<str>>(&self, words: &[S]) -> String {
        lexical::longest_common_prefix(words)
    }

    /// Run the text queries under the attached configuration.
    pub fn summary(&self) -> TextSummary {
        TextSummary {
            total_words: self.count_words(),
            unique_words: self.count_unique_words(),
            longest_word: self.longest_word().to_string(),
            most_common: self.most_common_words_default(),
            keywords: self.detect_keywords_with_config(),
        }
    }
}

impl From<&str> for TextAnalysisUtility {
    fn from(text: &str) -> Self {
        Self::new(text)
    }
}

impl From<String> for TextAnalysisUtility {
    fn from(text: String) -> Self {
        Self::new(text)
    }
}
