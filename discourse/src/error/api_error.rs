//! Server-reported failures.

use serde::Deserialize;
use thiserror::Error;

/// The server completed the exchange but did not succeed.
///
/// `errors` always holds at least one message. When the response body carries
/// no structured `errors` array it contains the single entry `"HTTP <status>"`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("API error ({status}): {}", .errors.join(", "))]
pub struct ApiError {
    /// The HTTP status code.
    pub status: u16,
    /// Messages reported by the server, in order.
    pub errors: Vec<String>,
    /// The server's error classification, e.g. `"invalid_access"`.
    pub error_type: Option<String>,
}

/// The error body Discourse sends with failed requests.
#[derive(Debug, Deserialize)]
pub(crate) struct ErrorResponse {
    pub errors: Vec<String>,
    #[serde(default)]
    pub error_type: Option<String>,
}

impl ApiError {
    /// Creates an API error from its parts.
    pub fn new(status: u16, errors: Vec<String>, error_type: Option<String>) -> Self {
        Self {
            status,
            errors,
            error_type,
        }
    }

    /// Builds the error for a failed response from its status and raw body.
    ///
    /// Falls back to `"HTTP <status>"` when the body is empty, is not JSON,
    /// or has no non-empty `errors` array.
    pub(crate) fn from_response(status: u16, body: &[u8]) -> Self {
        match serde_json::from_slice::<ErrorResponse>(body) {
            Ok(ErrorResponse { errors, error_type }) if !errors.is_empty() => {
                Self::new(status, errors, error_type)
            }
            _ => Self::new(status, vec![format!("HTTP {status}")], None),
        }
    }

    /// Returns `true` for 404 Not Found.
    pub fn is_not_found(&self) -> bool {
        self.status == 404
    }

    /// Returns `true` for 401 Unauthorized.
    pub fn is_unauthorized(&self) -> bool {
        self.status == 401
    }

    /// Returns `true` for 403 Forbidden.
    pub fn is_forbidden(&self) -> bool {
        self.status == 403
    }

    /// Returns `true` for 429 Too Many Requests.
    pub fn is_rate_limited(&self) -> bool {
        self.status == 429
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_structured_body() {
        let err = ApiError::from_response(422, br#"{"errors":["bad thing"],"error_type":"invalid"}"#);
        assert_eq!(err.status, 422);
        assert_eq!(err.errors, vec!["bad thing"]);
        assert_eq!(err.error_type.as_deref(), Some("invalid"));
    }

    #[test]
    fn test_structured_body_without_type() {
        let err = ApiError::from_response(400, br#"{"errors":["one","two"]}"#);
        assert_eq!(err.errors, vec!["one", "two"]);
        assert_eq!(err.error_type, None);
    }

    #[test]
    fn test_empty_body() {
        let err = ApiError::from_response(502, b"");
        assert_eq!(err.errors, vec!["HTTP 502"]);
        assert_eq!(err.error_type, None);
    }

    #[test]
    fn test_html_body() {
        let err = ApiError::from_response(500, b"<html>oops</html>");
        assert_eq!(err.errors, vec!["HTTP 500"]);
    }

    #[test]
    fn test_json_without_errors_key() {
        let err = ApiError::from_response(404, br#"{"error_type":"not_found"}"#);
        assert_eq!(err.errors, vec!["HTTP 404"]);
        assert_eq!(err.error_type, None);
    }

    #[test]
    fn test_empty_errors_array() {
        let err = ApiError::from_response(403, br#"{"errors":[],"error_type":"invalid_access"}"#);
        assert_eq!(err.errors, vec!["HTTP 403"]);
        assert_eq!(err.error_type, None);
    }

    #[test]
    fn test_status_predicates() {
        assert!(ApiError::from_response(404, b"").is_not_found());
        assert!(ApiError::from_response(401, b"").is_unauthorized());
        assert!(ApiError::from_response(403, b"").is_forbidden());
        assert!(ApiError::from_response(429, b"").is_rate_limited());
        assert!(!ApiError::from_response(500, b"").is_not_found());
    }

    #[test]
    fn test_display() {
        let err = ApiError::new(422, vec!["Title is too short".to_string()], None);
        assert_eq!(err.to_string(), "API error (422): Title is too short");
    }
}
