// tests/unit/analysis.rs
use text_utils::{StopwordFilter, TextAnalysisUtility, lexical, number};

use crate::common::{CASA, CASA_LIMPA, PORTUGUESE_STOPWORDS, expected, word_counts};

#[test]
fn unique_words_in_casa_sentence() {
    assert_eq!(TextAnalysisUtility::new(CASA).count_unique_words(), 6);
}

#[test]
fn character_frequency_ignores_punctuation_and_case() {
    let t = TextAnalysisUtility::new("a, b! a.");
    let pairs: Vec<_> = t.character_frequency().iter().map(|(c, n)| (*c, n.value())).collect();
    assert_eq!(pairs, vec![('a', 2), ('b', 1)]);
}

#[test]
fn character_frequency_keeps_accented_letters_and_digits() {
    let t = TextAnalysisUtility::new("É é 2x!");
    let pairs: Vec<_> = t.character_frequency().iter().map(|(c, n)| (*c, n.value())).collect();
    assert_eq!(pairs, vec![('é', 2), ('2', 1), ('x', 1)]);
}

#[test]
fn longest_word_and_empty_text() {
    let mut t = TextAnalysisUtility::new("a casa é bonita e grande");
    assert_eq!(t.longest_word(), "bonita");
    t.set_text("");
    assert_eq!(t.longest_word(), "");
}

#[test]
fn most_common_words_default_is_top_three() {
    let t = TextAnalysisUtility::new(CASA);
    assert_eq!(word_counts(&t.most_common_words_default()), expected(&[("a", 2), ("casa", 2), ("é", 2)]));
}

#[test]
fn keywords_exclude_portuguese_stopwords() {
    let t = TextAnalysisUtility::new(CASA_LIMPA);
    assert_eq!(
        word_counts(&t.detect_keywords(PORTUGUESE_STOPWORDS)),
        expected(&[("casa", 3), ("bonita", 1), ("grande", 1), ("limpa", 1)])
    );
}

#[test]
fn keywords_without_stopwords_equal_ranked_word_frequency() {
    let t = TextAnalysisUtility::new(CASA_LIMPA);
    let keywords = t.detect_keywords(StopwordFilter::empty());
    assert_eq!(keywords.len(), t.count_unique_words());
    assert_eq!(
        word_counts(&keywords)[..3],
        expected(&[("a", 3), ("casa", 3), ("é", 2)])[..]
    );
}

#[test]
fn anagrams() {
    assert!(lexical::are_anagrams("listen", "silent"));
    assert!(lexical::are_anagrams("", ""));
    assert!(!lexical::are_anagrams("", "nonempty"));
}

#[test]
fn primes_and_non_primes() {
    for n in [2, 3, 5, 7, 11] {
        assert!(number::is_prime(n), "{n} should be prime");
    }
    for n in [1, 4, 6, 10, 15, -7] {
        assert!(!number::is_prime(n), "{n} should not be prime");
    }
}

#[test]
fn common_prefix() {
    let t = TextAnalysisUtility::default();
    assert_eq!(t.longest_common_prefix(&["flower", "flow", "flight"]), "fl");
    let none: Vec<String> = Vec::new();
    assert_eq!(t.longest_common_prefix(&none), "");
}

#[test]
fn queries_do_not_mutate_text() {
    let t = TextAnalysisUtility::new(CASA);
    let first = (t.count_unique_words(), t.longest_word().to_string(), t.word_frequency());
    let second = (t.count_unique_words(), t.longest_word().to_string(), t.word_frequency());
    assert_eq!(first, second);
    assert_eq!(t.text(), CASA);
}
