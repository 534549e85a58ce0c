//! Error types for the fetch-and-parse pipeline.
//!
//! Every fallible step returns [`NewsError`]. The fetch boundary in
//! [`crate::guardian::fetch`] logs these and converts them into an absent
//! result, so none of them ever reaches the list renderer.

use thiserror::Error;

/// Result type alias for business_news operations
pub type Result<T> = std::result::Result<T, NewsError>;

/// Main error type for business_news
#[derive(Debug, Error)]
pub enum NewsError {
    /// The query URL could not be parsed, or is not an http(s) URL
    #[error("invalid URL {url:?}: {reason}")]
    InvalidUrl {
        /// The offending URL text
        url: String,
        /// Why it was rejected
        reason: String,
    },

    /// Connection failure, timeout, or an error while reading the body
    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),

    /// The server answered with something other than 200 OK
    #[error("unexpected HTTP status {0}")]
    Status(u16),

    /// The response body is not valid JSON
    #[error("malformed JSON: {0}")]
    Decode(#[from] serde_json::Error),

    /// The JSON is valid but lacks part of the `response.results` structure
    #[error("missing `{0}` in response")]
    MissingField(&'static str),

    /// A publication date does not match `yyyy-MM-ddTHH:mm:ssZ`
    #[error("unrecognised publication date {value:?}: {reason}")]
    Format {
        /// The date text as received
        value: String,
        /// What did not match
        reason: String,
    },

    /// The settings file is not valid YAML for [`crate::config::Settings`]
    #[error("configuration error: {0}")]
    Config(#[from] serde_yaml::Error),

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl NewsError {
    /// True for failures that happen before or during the HTTP exchange.
    pub fn is_network(&self) -> bool {
        matches!(self, NewsError::Network(_) | NewsError::Status(_))
    }
}
