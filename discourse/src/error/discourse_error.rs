//! Top-level error type for client calls.

use thiserror::Error;

use super::{ApiError, RequestError};

/// Convenience alias used by every client call.
pub type Result<T, E = DiscourseError> = std::result::Result<T, E>;

/// The failure of a single client call.
///
/// Both variants are transparent, so the displayed message is the one of the
/// wrapped error. Matching is exhaustive:
///
/// ```rust,ignore
/// use discourse::DiscourseError;
///
/// match client.get_post(42).await {
///     Ok(post) => println!("{}", post.cooked),
///     Err(DiscourseError::Api(e)) => eprintln!("server said {}: {:?}", e.status, e.errors),
///     Err(DiscourseError::Request(e)) => eprintln!("network: {e}"),
/// }
/// ```
#[derive(Debug, Error)]
pub enum DiscourseError {
    /// The server answered with a non-success status.
    #[error(transparent)]
    Api(#[from] ApiError),

    /// The HTTP exchange could not be completed.
    #[error(transparent)]
    Request(#[from] RequestError),
}

impl DiscourseError {
    /// Returns the HTTP status for server-reported failures.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Api(e) => Some(e.status),
            Self::Request(_) => None,
        }
    }

    /// Returns `true` if the server rejected the request.
    pub fn is_api(&self) -> bool {
        matches!(self, Self::Api(_))
    }

    /// Returns `true` if the exchange never completed.
    pub fn is_request(&self) -> bool {
        matches!(self, Self::Request(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_api_error() {
        let err: DiscourseError = ApiError::new(404, vec!["not found".to_string()], None).into();
        assert!(err.is_api());
        assert!(!err.is_request());
        assert_eq!(err.status(), Some(404));
    }

    #[test]
    fn test_from_request_error() {
        let err: DiscourseError = RequestError::new("connection refused").into();
        assert!(err.is_request());
        assert_eq!(err.status(), None);
    }

    #[test]
    fn test_display_is_transparent() {
        let err: DiscourseError = RequestError::new("dns failure").into();
        assert_eq!(err.to_string(), "HTTP request failed: dns failure");

        let err: DiscourseError =
            ApiError::new(422, vec!["a".to_string(), "b".to_string()], None).into();
        assert_eq!(err.to_string(), "API error (422): a, b");
    }

    #[test]
    fn test_question_mark_keeps_classification() {
        fn inner() -> Result<()> {
            Err(ApiError::new(403, vec!["forbidden".to_string()], None).into())
        }
        fn outer() -> Result<()> {
            inner()?;
            Ok(())
        }

        assert!(matches!(outer(), Err(DiscourseError::Api(ApiError { status: 403, .. }))));
    }
}
