// tests/unit/serialization.rs
use serde_json::Value;
use text_utils::{AnalysisConfig, TextAnalysisUtility};

use crate::common::CASA;

#[test]
fn word_frequency_json_keeps_first_seen_order() {
    let t = TextAnalysisUtility::new("zeta alfa zeta beta");
    let json = serde_json::to_string(&t.word_frequency()).expect("serializes");
    assert_eq!(json, r#"{"zeta":2,"alfa":1,"beta":1}"#);
}

#[test]
fn character_frequency_json_uses_string_keys() {
    let t = TextAnalysisUtility::new("Ab a");
    let json = serde_json::to_string(&t.character_frequency()).expect("serializes");
    assert_eq!(json, r#"{"a":2,"b":1}"#);
}

#[test]
fn summary_serializes_all_fields() {
    let config = AnalysisConfig { common_words: vec!["a".into(), "é".into(), "e".into()], top_n: 3 };
    let summary = TextAnalysisUtility::new(CASA).with_config(config).summary();
    let value: Value = serde_json::from_str(&summary.to_json().expect("serializes")).expect("valid json");

    assert_eq!(value["total_words"], 9);
    assert_eq!(value["unique_words"], 6);
    assert_eq!(value["longest_word"], "bonita");
    assert_eq!(value["most_common"]["casa"], 2);
    assert_eq!(value["keywords"]["grande"], 1);
    assert!(value["keywords"].get("a").is_none());
}

#[test]
fn pretty_summary_is_multiline() {
    let summary = TextAnalysisUtility::new("").summary();
    let pretty = summary.to_json_pretty().expect("serializes");
    assert!(pretty.contains('\n'));
    assert!(pretty.contains("\"longest_word\": \"\""));
}
