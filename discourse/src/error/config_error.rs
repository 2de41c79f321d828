//! Client construction errors.

use thiserror::Error;

/// Errors raised while building a [`DiscourseClient`](crate::DiscourseClient).
///
/// These indicate programmer or configuration mistakes and never come out of
/// an API call.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The base address could not be parsed as a URL.
    #[error("Invalid base URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    /// The base address uses a scheme other than `http` or `https`.
    #[error("Unsupported URL scheme: {scheme}")]
    UnsupportedScheme {
        /// The rejected scheme.
        scheme: String,
    },

    /// A required credential was empty.
    #[error("Missing required credential: {field}")]
    MissingCredential {
        /// The name of the empty field.
        field: &'static str,
    },

    /// The underlying HTTP client could not be constructed.
    #[error("Failed to build HTTP client: {0}")]
    HttpClient(#[from] reqwest::Error),
}

impl ConfigError {
    /// Creates a missing credential error.
    pub fn missing_credential(field: &'static str) -> Self {
        Self::MissingCredential { field }
    }
}
