//! Outgoing request values.

use bytes::Bytes;
use serde::Serialize;
use strum::{Display, EnumIter, EnumString};

use crate::error::RequestError;

/// HTTP methods used by the Discourse API.
///
/// ## Examples
///
/// ```rust
/// use discourse::HttpMethod;
///
/// let method = HttpMethod::Get;
/// assert!(!method.has_body());
/// assert!(method.is_safe());
///
/// let parsed: HttpMethod = "PUT".parse().unwrap();
/// assert_eq!(parsed, HttpMethod::Put);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumIter, EnumString)]
#[strum(serialize_all = "UPPERCASE")]
pub enum HttpMethod {
    /// Read a resource.
    Get,
    /// Create a resource or trigger an action.
    Post,
    /// Update a resource.
    Put,
    /// Remove a resource.
    Delete,
}

impl HttpMethod {
    /// Returns `true` if requests with this method carry a JSON body.
    pub fn has_body(&self) -> bool {
        matches!(self, Self::Post | Self::Put)
    }

    /// Returns `true` if this method is read-only.
    pub fn is_safe(&self) -> bool {
        matches!(self, Self::Get)
    }

    /// Converts to the equivalent `reqwest::Method`.
    pub fn to_reqwest(self) -> reqwest::Method {
        match self {
            Self::Get => reqwest::Method::GET,
            Self::Post => reqwest::Method::POST,
            Self::Put => reqwest::Method::PUT,
            Self::Delete => reqwest::Method::DELETE,
        }
    }
}

impl From<HttpMethod> for reqwest::Method {
    fn from(method: HttpMethod) -> Self {
        method.to_reqwest()
    }
}

/// A single request, owned by the call that issues it.
#[derive(Debug, Clone, PartialEq)]
pub struct OutgoingRequest {
    /// The HTTP method.
    pub method: HttpMethod,
    /// Path relative to the base address, including any query string.
    pub path: String,
    /// Serialized JSON body. Always `None` for GET and DELETE.
    pub body: Option<Bytes>,
}

impl OutgoingRequest {
    /// Creates a request without a body.
    pub fn new(method: HttpMethod, path: impl Into<String>) -> Self {
        Self {
            method,
            path: path.into(),
            body: None,
        }
    }

    /// Creates a request with `body` serialized as JSON.
    ///
    /// The body is dropped for methods that never send one.
    ///
    /// ## Errors
    ///
    /// Returns a [`RequestError`] if `body` cannot be serialized.
    pub fn with_json<B>(method: HttpMethod, path: impl Into<String>, body: &B) -> Result<Self, RequestError>
    where
        B: Serialize + ?Sized,
    {
        let mut request = Self::new(method, path);
        if method.has_body() {
            let json = serde_json::to_vec(body)
                .map_err(|e| RequestError::new(format!("failed to serialize request body: {e}")))?;
            request.body = Some(Bytes::from(json));
        }
        Ok(request)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use strum::IntoEnumIterator;

    #[test]
    fn test_display() {
        assert_eq!(HttpMethod::Get.to_string(), "GET");
        assert_eq!(HttpMethod::Delete.to_string(), "DELETE");
    }

    #[test]
    fn test_parse() {
        assert_eq!("POST".parse::<HttpMethod>().unwrap(), HttpMethod::Post);
        assert!("PATCH".parse::<HttpMethod>().is_err());
    }

    #[test]
    fn test_has_body() {
        assert!(!HttpMethod::Get.has_body());
        assert!(HttpMethod::Post.has_body());
        assert!(HttpMethod::Put.has_body());
        assert!(!HttpMethod::Delete.has_body());
    }

    #[test]
    fn test_only_get_is_safe() {
        let safe: Vec<_> = HttpMethod::iter().filter(HttpMethod::is_safe).collect();
        assert_eq!(safe, vec![HttpMethod::Get]);
    }

    #[test]
    fn test_to_reqwest() {
        assert_eq!(HttpMethod::Put.to_reqwest(), reqwest::Method::PUT);
        assert_eq!(reqwest::Method::from(HttpMethod::Delete), reqwest::Method::DELETE);
    }

    #[test]
    fn test_with_json_serializes_body() {
        let body = serde_json::json!({"raw": "hello"});
        let request = OutgoingRequest::with_json(HttpMethod::Post, "/posts.json", &body).unwrap();
        assert_eq!(request.body.as_deref(), Some(br#"{"raw":"hello"}"#.as_slice()));
    }

    #[test]
    fn test_with_json_drops_body_for_get() {
        let request = OutgoingRequest::with_json(HttpMethod::Get, "/x", &serde_json::json!({})).unwrap();
        assert_eq!(request.body, None);
    }

    #[test]
    fn test_with_json_reports_unserializable_body() {
        let mut body = HashMap::new();
        body.insert((1, 2), "tuple keys are not valid JSON object keys");

        let err = OutgoingRequest::with_json(HttpMethod::Put, "/x", &body).unwrap_err();
        assert!(err.message.contains("failed to serialize request body"));
    }
}
