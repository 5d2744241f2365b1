// crates/shared-kernel/src/error.rs
use thiserror::Error;

/// Root error type shared across the workspace.
///
/// Query operations on text are total and never produce this type; it only
/// surfaces at the configuration and serialization seams.
#[derive(Debug, Error)]
pub enum TextUtilsError {
    /// Adds human context while preserving original error as the source.
    #[error("{context}: {source}")]
    Context {
        context: String,
        #[source]
        source: Box<TextUtilsError>,
    },

    #[error("Domain error: {0}")]
    Domain(#[from] DomainError),

    #[error("Serialization error: {0}")]
    Serialization(#[from] SerializationError),
}

pub type Result<T> = std::result::Result<T, TextUtilsError>;

/// Domain-layer specific errors.
#[derive(Debug, Error)]
pub enum DomainError {
    #[error("Invalid configuration: {reason}")]
    InvalidConfiguration { reason: String },
}

pub type DomainResult<T> = std::result::Result<T, DomainError>;

/// Errors raised while encoding or decoding structured data.
#[derive(Debug, Error)]
pub enum SerializationError {
    #[error("Failed to process JSON: {details}")]
    Json { details: String },
}

impl From<serde_json::Error> for SerializationError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json { details: err.to_string() }
    }
}

impl From<serde_json::Error> for TextUtilsError {
    fn from(err: serde_json::Error) -> Self {
        SerializationError::from(err).into()
    }
}

/// Extension trait to add additional context to results.
pub trait ErrorContext<T> {
    fn context(self, context: impl Into<String>) -> Result<T>;
    fn with_context<F>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> String;
}

impl<T, E> ErrorContext<T> for std::result::Result<T, E>
where
    E: Into<TextUtilsError>,
{
    fn context(self, context: impl Into<String>) -> Result<T> {
        self.map_err(|e| TextUtilsError::Context {
            context: context.into(),
            source: Box::new(e.into()),
        })
    }

    fn with_context<F>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> String,
    {
        self.map_err(|e| TextUtilsError::Context {
            context: f(),
            source: Box::new(e.into()),
        })
    }
}
