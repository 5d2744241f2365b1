// tests/unit/config.rs
use text_utils::{AnalysisConfig, DomainError, TextAnalysisUtility, TextUtilsError};

use crate::common::{CASA_LIMPA, expected, word_counts};

#[test]
fn json_config_drives_keywords_and_ranking() {
    let config = AnalysisConfig::from_json_str(r#"{"common_words": ["A", "É", "E", "Está"], "top_n": 2}"#)
        .expect("valid config");
    let t = TextAnalysisUtility::new(CASA_LIMPA).with_config(config);

    assert_eq!(
        word_counts(&t.detect_keywords_with_config()),
        expected(&[("casa", 3), ("bonita", 1), ("grande", 1), ("limpa", 1)])
    );
    assert_eq!(word_counts(&t.most_common_words_default()), expected(&[("a", 3), ("casa", 3)]));
}

#[test]
fn builder_config_is_attached() {
    let config = AnalysisConfig::builder().top_n(4usize).build().expect("builds");
    let t = TextAnalysisUtility::new("x").with_config(config.clone());
    assert_eq!(t.config(), &config);
}

#[test]
fn invalid_config_is_a_domain_error() {
    match AnalysisConfig::from_json_str(r#"{"top_n": 0}"#) {
        Err(TextUtilsError::Domain(DomainError::InvalidConfiguration { reason })) => {
            assert!(reason.contains("top_n"));
        }
        other => panic!("unexpected result: {other:?}"),
    }
}

#[test]
fn malformed_config_is_a_serialization_error() {
    let err = AnalysisConfig::from_json_str("[1, 2").unwrap_err();
    match err {
        TextUtilsError::Context { source, .. } => {
            assert!(matches!(*source, TextUtilsError::Serialization(_)));
        }
        other => panic!("unexpected error: {other:?}"),
    }
}
