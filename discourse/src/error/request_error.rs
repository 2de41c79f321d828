//! Transport-level failures.

use thiserror::Error;

/// The HTTP exchange could not be completed.
///
/// Covers DNS and connection failures, timeouts imposed by a caller-supplied
/// HTTP client, unreadable bodies, and success responses that are not valid
/// JSON for the expected shape.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("HTTP request failed: {message}")]
pub struct RequestError {
    /// Description of the underlying failure.
    pub message: String,
}

impl RequestError {
    /// Creates a request error from a description.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

impl From<reqwest::Error> for RequestError {
    fn from(err: reqwest::Error) -> Self {
        // reqwest's Display omits the source chain ("error sending request"),
        // so walk it to keep the useful part (e.g. "Connection refused").
        let mut message = err.to_string();
        let mut source = std::error::Error::source(&err);
        while let Some(cause) = source {
            message.push_str(": ");
            message.push_str(&cause.to_string());
            source = cause.source();
        }
        Self::new(message)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        let err = RequestError::new("connection refused");
        assert_eq!(err.to_string(), "HTTP request failed: connection refused");
    }
}
