// crates/core/src/stopwords.rs
//! Caller-supplied common words excluded from keyword detection.

use hashbrown::HashSet;

/// A case-insensitive set of words to ignore.
///
/// Words are stored lowercase; the default filter is empty and lets every
/// word through.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StopwordFilter {
    stopwords: HashSet<String>,
}

impl StopwordFilter {
    /// Create an empty stopword filter (no filtering)
    pub fn empty() -> Self {
        Self::default()
    }

    /// Create a stopword filter from a custom list
    pub fn from_list<S: AsRef<str>>(words: &[S]) -> Self {
        words.iter().map(|w| w.as_ref()).collect()
    }

    /// Add additional stopwords to the filter
    pub fn add_stopwords<S: AsRef<str>>(&mut self, words: &[S]) {
        for word in words {
            self.stopwords.insert(word.as_ref().to_lowercase());
        }
    }

    /// Check if a word is a stopword
    pub fn is_stopword(&self, word: &str) -> bool {
        self.stopwords.contains(word.to_lowercase().as_str())
    }

    pub fn len(&self) -> usize {
        self.stopwords.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stopwords.is_empty()
    }
}

impl<'a> FromIterator<&'a str> for StopwordFilter {
    fn from_iter<I: IntoIterator<Item = &'a str>>(iter: I) -> Self {
        Self { stopwords: iter.into_iter().map(str::to_lowercase).collect() }
    }
}

impl<S: AsRef<str>> From<&[S]> for StopwordFilter {
    fn from(words: &[S]) -> Self {
        Self::from_list(words)
    }
}

impl<S: AsRef<str>, const N: usize> From<[S; N]> for StopwordFilter {
    fn from(words: [S; N]) -> Self {
        Self::from_list(&words)
    }
}

impl<S: AsRef<str>, const N: usize> From<&[S; N]> for StopwordFilter {
    fn from(words: &[S; N]) -> Self {
        Self::from_list(words)
    }
}

impl<S: AsRef<str>> From<Vec<S>> for StopwordFilter {
    fn from(words: Vec<S>) -> Self {
        Self::from_list(&words)
    }
}

impl<S: AsRef<str>> From<&Vec<S>> for StopwordFilter {
    fn from(words: &Vec<S>) -> Self {
        Self::from_list(words)
    }
}
