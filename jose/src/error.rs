//! # Errors

use thiserror::Error;

/// Result type for token encoding and decoding.
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Errors raised while encoding or decoding token segments.
#[derive(Debug, Error)]
pub enum Error {
    /// The value could not be serialized to JSON.
    #[error("issue encoding segment: {0}")]
    Encoding(#[from] serde_json::Error),

    /// A segment is not base64url, or does not hold the expected JSON.
    #[error("issue decoding segment: {0}")]
    Decoding(String),

    /// The token is not made up of three dot-separated segments.
    #[error("invalid compact token format: {0}")]
    Format(String),
}
