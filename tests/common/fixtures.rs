// tests/common/fixtures.rs
use text_utils::FrequencyTable;

/// Nine words, six of them distinct once lowercased.
pub const CASA: &str = "a casa é bonita e a casa é grande";

/// The casa sentence extended with a third clause.
pub const CASA_LIMPA: &str = "a casa é bonita e a casa é grande e a casa está limpa";

pub const PORTUGUESE_STOPWORDS: [&str; 4] = ["a", "é", "e", "está"];

/// Flatten a word table into `(word, count)` pairs for comparison.
pub fn word_counts(table: &FrequencyTable<String>) -> Vec<(String, usize)> {
    table.iter().map(|(word, count)| (word.clone(), count.value())).collect()
}

/// Build the expected `(word, count)` pairs from literals.
pub fn expected(pairs: &[(&str, usize)]) -> Vec<(String, usize)> {
    pairs.iter().map(|(word, count)| ((*word).to_string(), *count)).collect()
}
