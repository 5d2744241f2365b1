// crates/core/src/config.rs
use derive_builder::Builder;
use serde::{Deserialize, Serialize};
use text_utils_shared_kernel::{DomainError, DomainResult, ErrorContext, Result};

use crate::stopwords::StopwordFilter;

/// Number of entries `most_common_words` returns when none is requested.
pub const DEFAULT_TOP_N: usize = 3;

/// Per-instance defaults for the analysis queries.
#[derive(Debug, Clone, PartialEq, Eq, Builder, Serialize, Deserialize)]
#[builder(setter(into), build_fn(validate = "Self::validate"))]
#[serde(default, deny_unknown_fields)]
pub struct AnalysisConfig {
    /// Words ignored by keyword detection, matched case-insensitively.
    #[builder(default)]
    pub common_words: Vec<String>,
    /// How many entries the frequency ranking keeps by default.
    #[builder(default = "DEFAULT_TOP_N")]
    pub top_n: usize,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self { common_words: Vec::new(), top_n: DEFAULT_TOP_N }
    }
}

impl AnalysisConfig {
    pub fn builder() -> AnalysisConfigBuilder {
        AnalysisConfigBuilder::default()
    }

    /// Parse and validate a JSON object such as
    /// `{"common_words": ["a", "e"], "top_n": 5}`.
    ///
    /// Missing fields take their defaults; unknown fields are rejected.
    ///
    /// # Errors
    ///
    /// Returns a serialization error for malformed JSON and a domain error
    /// when the parsed values are out of range.
    pub fn from_json_str(input: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(input).context("failed to parse analysis config")?;
        if let Err(err) = config.validate() {
            log::warn!("rejected analysis config: {err}");
            return Err(err.into());
        }
        log::debug!(
            "parsed analysis config: {} common words, top_n={}",
            config.common_words.len(),
            config.top_n
        );
        Ok(config)
    }

    /// # Errors
    ///
    /// Returns [`DomainError::InvalidConfiguration`] when `top_n` is zero.
    pub fn validate(&self) -> DomainResult<()> {
        if self.top_n == 0 {
            return Err(DomainError::InvalidConfiguration {
                reason: "top_n must be at least 1".to_string(),
            });
        }
        Ok(())
    }

    pub fn stopwords(&self) -> StopwordFilter {
        StopwordFilter::from_list(&self.common_words)
    }
}

impl AnalysisConfigBuilder {
    fn validate(&self) -> std::result::Result<(), String> {
        match self.top_n {
            Some(0) => Err("top_n must be at least 1".to_string()),
            _ => Ok(()),
        }
    }
}

impl From<AnalysisConfigBuilderError> for DomainError {
    fn from(err: AnalysisConfigBuilderError) -> Self {
        Self::InvalidConfiguration { reason: err.to_string() }
    }
}
