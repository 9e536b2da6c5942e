//! Error types for neuroatlas-core.

use thiserror::Error;

/// Result type alias using QuizError.
pub type Result<T> = std::result::Result<T, QuizError>;

/// Errors raised while building quiz questions.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum QuizError {
    #[error("unknown item: {id}")]
    UnknownItem { id: String },
}

/// A persisted card that failed schema validation.
///
/// Consumers re-initialize the card instead of propagating this.
#[derive(Debug, Error, PartialEq, Eq)]
#[error("malformed card {item_id}: {reason}")]
pub struct MalformedCard {
    pub item_id: String,
    pub reason: String,
}

/// Errors from the key-value persistence boundary.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("storage backend error: {0}")]
    Backend(String),
}
