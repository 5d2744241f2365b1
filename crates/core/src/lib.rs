// crates/core/src/lib.rs
#![allow(clippy::cargo_common_metadata)]
#![allow(clippy::multiple_crate_versions)]

pub mod analyzer;
pub mod config;
pub mod frequency;
pub mod lexical;
pub mod number;
pub mod ranking;
pub mod stats;
pub mod stopwords;
pub mod tokenize;

pub use analyzer::TextAnalysisUtility;
pub use config::{AnalysisConfig, AnalysisConfigBuilder, DEFAULT_TOP_N};
pub use frequency::FrequencyTable;
pub use ranking::{Ranking, SortOrder};
pub use stats::TextSummary;
pub use stopwords::StopwordFilter;
