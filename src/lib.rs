// src/lib.rs
//! Text analysis utilities over a single piece of text.
//!
//! ```
//! use text_utils::TextAnalysisUtility;
//!
//! let text = TextAnalysisUtility::new("a casa é bonita e a casa é grande");
//! assert_eq!(text.count_unique_words(), 6);
//! assert_eq!(text.longest_word(), "bonita");
//! ```
#![allow(clippy::multiple_crate_versions)]

pub use text_utils_core::{
    AnalysisConfig, AnalysisConfigBuilder, DEFAULT_TOP_N, FrequencyTable, Ranking, SortOrder, StopwordFilter,
    TextAnalysisUtility, TextSummary, lexical, number, tokenize,
};
pub use text_utils_shared_kernel::{
    DomainError, DomainResult, ErrorContext, Occurrences, Result, SerializationError, TextUtilsError,
};

pub const VERSION: &str = env!("CARGO_PKG_VERSION");
