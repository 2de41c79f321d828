//! Path and query string construction.
//!
//! The request pipeline concatenates the base address and the path verbatim,
//! so every caller-supplied token (usernames, search terms, sort orders) must
//! be percent-encoded before it lands in a path.

use std::fmt::Display;

use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, utf8_percent_encode};

/// Characters left as-is in a URI component: `A-Z a-z 0-9 - _ . ! ~ * ' ( )`.
const URI_COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

/// Percent-encodes a single path segment or query value.
///
/// ## Examples
///
/// ```
/// use discourse::encode_component;
///
/// assert_eq!(encode_component("a b"), "a%20b");
/// assert_eq!(encode_component("tag:rust&x"), "tag%3Arust%26x");
/// ```
pub fn encode_component(value: &str) -> String {
    utf8_percent_encode(value, URI_COMPONENT).to_string()
}

/// Builds a relative path with a query string.
///
/// Parameters are appended in call order; keys are written verbatim so that
/// array keys such as `post_ids[]` stay readable.
#[derive(Debug, Clone)]
pub(crate) struct PathBuilder {
    path: String,
    has_query: bool,
}

impl PathBuilder {
    pub fn new(path: impl Into<String>) -> Self {
        let path = path.into();
        let has_query = path.contains('?');
        Self { path, has_query }
    }

    fn separator(&mut self) -> char {
        if self.has_query {
            '&'
        } else {
            self.has_query = true;
            '?'
        }
    }

    /// Appends `key=value` with `value` written as-is.
    pub fn param(mut self, key: &str, value: impl Display) -> Self {
        let sep = self.separator();
        self.path.push_str(&format!("{sep}{key}={value}"));
        self
    }

    /// Appends `key=value` with `value` percent-encoded.
    pub fn encoded_param(self, key: &str, value: &str) -> Self {
        let encoded = encode_component(value);
        self.param(key, encoded)
    }

    /// Appends `key=value` only when a value is present.
    pub fn optional_param<V: Display>(self, key: &str, value: Option<V>) -> Self {
        match value {
            Some(value) => self.param(key, value),
            None => self,
        }
    }

    pub fn build(self) -> String {
        self.path
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encode_space_and_reserved() {
        assert_eq!(encode_component("a b"), "a%20b");
        assert_eq!(encode_component("a/b?c=d#e"), "a%2Fb%3Fc%3Dd%23e");
    }

    #[test]
    fn test_encode_keeps_unreserved() {
        assert_eq!(encode_component("Az09-_.!~*'()"), "Az09-_.!~*'()");
    }

    #[test]
    fn test_encode_utf8() {
        assert_eq!(encode_component("café"), "caf%C3%A9");
    }

    #[test]
    fn test_first_param_uses_question_mark() {
        let path = PathBuilder::new("/latest.json").param("page", 2).build();
        assert_eq!(path, "/latest.json?page=2");
    }

    #[test]
    fn test_existing_query_appends() {
        let path = PathBuilder::new("/t/5/posts.json?include_raw=1")
            .param("post_ids[]", 10)
            .param("post_ids[]", 11)
            .build();
        assert_eq!(path, "/t/5/posts.json?include_raw=1&post_ids[]=10&post_ids[]=11");
    }

    #[test]
    fn test_optional_param_omitted() {
        let path = PathBuilder::new("/search.json")
            .encoded_param("q", "a b")
            .optional_param::<u32>("page", None)
            .build();
        assert_eq!(path, "/search.json?q=a%20b");
    }

    #[test]
    fn test_optional_param_present() {
        let path = PathBuilder::new("/user_actions.json")
            .param("username", "sam")
            .optional_param("offset", Some(30))
            .build();
        assert_eq!(path, "/user_actions.json?username=sam&offset=30");
    }

    #[test]
    fn test_no_params() {
        assert_eq!(PathBuilder::new("/categories.json").build(), "/categories.json");
    }
}
