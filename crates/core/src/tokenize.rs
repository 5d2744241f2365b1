// crates/core/src/tokenize.rs
//! Whitespace tokenization and character folding.
//!
//! A word is a maximal run of non-whitespace characters. No punctuation
//! stripping or stemming is performed.

/// Iterate over the words of `text` in their original casing.
#[inline]
pub fn words(text: &str) -> impl Iterator<Item = &str> {
    text.split_whitespace()
}

/// Iterate over the lowercase words of `text`.
pub fn folded_words(text: &str) -> impl Iterator<Item = String> + '_ {
    words(text).map(str::to_lowercase)
}

/// Iterate over the lowercase alphanumeric characters of `text`.
///
/// Lowercasing can expand one character into several (`'İ'` becomes `"i\u{307}"`);
/// only the alphanumeric parts of the expansion are yielded.
pub fn folded_alphanumerics(text: &str) -> impl Iterator<Item = char> + '_ {
    text.chars()
        .filter(|c| c.is_alphanumeric())
        .flat_map(char::to_lowercase)
        .filter(|c| c.is_alphanumeric())
}

/// Number of characters (Unicode scalar values) in `word`.
#[inline]
pub fn char_len(word: &str) -> usize {
    word.chars().count()
}
