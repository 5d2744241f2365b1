// crates/core/src/lexical.rs
//! Word-level comparisons that do not depend on the analysed text.

use crate::tokenize::{char_len, words};

/// Longest word of `text`, the first one on ties. Empty text yields `""`.
///
/// Length is measured in characters, so `"única"` counts as five.
pub fn longest_word(text: &str) -> &str {
    let mut best = "";
    let mut best_len = 0;
    for word in words(text) {
        let len = char_len(word);
        if len > best_len {
            best = word;
            best_len = len;
        }
    }
    best
}

/// Whether `first` and `second` use the same characters the same number of
/// times, ignoring case.
pub fn are_anagrams(first: &str, second: &str) -> bool {
    let mut left: Vec<char> = first.to_lowercase().chars().collect();
    let mut right: Vec<char> = second.to_lowercase().chars().collect();
    if left.len() != right.len() {
        return false;
    }
    left.sort_unstable();
    right.sort_unstable();
    left == right
}

/// Longest string that every entry of `words` starts with.
///
/// The shortest entry (the first one on ties) is walked character by
/// character against all the others. An empty list yields `""`.
pub fn longest_common_prefix<S: AsRef<str>>(words: &[S]) -> String {
    let Some(shortest) = words.iter().map(|w| w.as_ref()).min_by_key(|w| char_len(w)) else {
        return String::new();
    };

    let mut others: Vec<_> = words.iter().map(|w| w.as_ref().chars()).collect();
    for (byte_pos, expected) in shortest.char_indices() {
        // 最短の単語より長いので next() は必ず Some を返す
        let mismatch = others.iter_mut().any(|chars| chars.next() != Some(expected));
        if mismatch {
            return shortest[..byte_pos].to_string();
        }
    }
    shortest.to_string()
}
