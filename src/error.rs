//! Error types for the persona generator.
//!
//! Only the fetch and persistence layers are fallible.  The analyzer and the
//! report renderer degrade malformed input to defaults and raise nothing.

use thiserror::Error;

/// Errors surfaced by the scraper and report persistence.
#[derive(Debug, Error)]
pub enum PersonaError {
    /// The supplied profile URL does not match the expected Reddit format.
    #[error("invalid Reddit profile URL: {url}")]
    InvalidUrl { url: String },

    /// Transport-level HTTP failure.
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// The Reddit API kept returning an error status after all retries.
    #[error("Reddit API error: status {status}")]
    HttpStatus { status: u16 },

    /// The response body could not be decoded as a Reddit listing.
    #[error("failed to decode Reddit response: {0}")]
    Json(#[from] serde_json::Error),

    /// The user has no visible posts or comments.
    #[error("no posts or comments found for u/{username}")]
    EmptyProfile { username: String },

    /// Failure writing the report to disk.
    #[error(transparent)]
    Io(#[from] std::io::Error),
}
