//! Authentication strategies for the Discourse API.
//!
//! Discourse accepts two kinds of credentials:
//!
//! - **Admin API keys**, created under *Admin → API*, sent as `Api-Key` together
//!   with the `Api-Username` the request acts as.
//! - **User API keys**, granted per user through the user API key flow, sent as
//!   `User-Api-Key` with an optional `User-Api-Client-Id`.
//!
//! A client holds exactly one [`AuthStrategy`] for its whole lifetime.
//!
//! ## Examples
//!
//! ```
//! use discourse::AuthStrategy;
//!
//! let auth = AuthStrategy::admin("secret", "system");
//! let names: Vec<_> = auth.headers().into_iter().map(|(name, _)| name).collect();
//! assert_eq!(names, ["Content-Type", "Api-Key", "Api-Username"]);
//! ```

use std::fmt;

/// `Content-Type` header name.
pub const CONTENT_TYPE: &str = "Content-Type";
/// Admin API key header name.
pub const API_KEY: &str = "Api-Key";
/// Admin API username header name.
pub const API_USERNAME: &str = "Api-Username";
/// User API key header name.
pub const USER_API_KEY: &str = "User-Api-Key";
/// User API client id header name.
pub const USER_API_CLIENT_ID: &str = "User-Api-Client-Id";

const JSON_CONTENT_TYPE: &str = "application/json";

/// How outgoing requests are credentialed.
#[derive(Clone, Default, PartialEq, Eq)]
pub enum AuthStrategy {
    /// Anonymous access; only public content is visible.
    #[default]
    None,

    /// Admin API key acting as a specific user.
    Admin {
        /// The API key.
        api_key: String,
        /// The username requests are performed as.
        api_username: String,
    },

    /// Per-user API key.
    User {
        /// The user API key.
        user_api_key: String,
        /// The client id the key was issued to, if any.
        client_id: Option<String>,
    },
}

impl AuthStrategy {
    /// Creates an admin API key strategy.
    pub fn admin(api_key: impl Into<String>, api_username: impl Into<String>) -> Self {
        Self::Admin {
            api_key: api_key.into(),
            api_username: api_username.into(),
        }
    }

    /// Creates a user API key strategy.
    pub fn user(user_api_key: impl Into<String>, client_id: Option<String>) -> Self {
        Self::User {
            user_api_key: user_api_key.into(),
            client_id,
        }
    }

    /// Short name of the active variant, safe to log.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::None => "none",
            Self::Admin { .. } => "admin",
            Self::User { .. } => "user",
        }
    }

    /// Returns the headers every request made with this strategy carries.
    ///
    /// `Content-Type: application/json` always comes first. Header values are
    /// passed through as-is; malformed credentials are left for the server to
    /// reject.
    pub fn headers(&self) -> Vec<(&'static str, String)> {
        let mut headers = vec![(CONTENT_TYPE, JSON_CONTENT_TYPE.to_string())];

        match self {
            Self::None => {}
            Self::Admin {
                api_key,
                api_username,
            } => {
                headers.push((API_KEY, api_key.clone()));
                headers.push((API_USERNAME, api_username.clone()));
            }
            Self::User {
                user_api_key,
                client_id,
            } => {
                headers.push((USER_API_KEY, user_api_key.clone()));
                if let Some(client_id) = client_id {
                    headers.push((USER_API_CLIENT_ID, client_id.clone()));
                }
            }
        }

        headers
    }
}

impl fmt::Debug for AuthStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::None => f.write_str("None"),
            Self::Admin { api_username, .. } => f
                .debug_struct("Admin")
                .field("api_key", &"<redacted>")
                .field("api_username", api_username)
                .finish(),
            Self::User { client_id, .. } => f
                .debug_struct("User")
                .field("user_api_key", &"<redacted>")
                .field("client_id", client_id)
                .finish(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn names(auth: &AuthStrategy) -> Vec<&'static str> {
        auth.headers().into_iter().map(|(name, _)| name).collect()
    }

    #[test]
    fn test_none_only_content_type() {
        let headers = AuthStrategy::None.headers();
        assert_eq!(headers, vec![(CONTENT_TYPE, "application/json".to_string())]);
    }

    #[test]
    fn test_admin_headers() {
        let headers = AuthStrategy::admin("key-123", "system").headers();
        assert_eq!(
            headers,
            vec![
                (CONTENT_TYPE, "application/json".to_string()),
                (API_KEY, "key-123".to_string()),
                (API_USERNAME, "system".to_string()),
            ]
        );
    }

    #[test]
    fn test_user_without_client_id() {
        let auth = AuthStrategy::user("user-key", None);
        assert_eq!(names(&auth), vec![CONTENT_TYPE, USER_API_KEY]);
    }

    #[test]
    fn test_user_with_client_id() {
        let auth = AuthStrategy::user("user-key", Some("client-1".to_string()));
        let headers = auth.headers();
        assert_eq!(names(&auth), vec![CONTENT_TYPE, USER_API_KEY, USER_API_CLIENT_ID]);
        assert_eq!(headers[2].1, "client-1");
    }

    #[test]
    fn test_headers_are_stable() {
        let auth = AuthStrategy::admin("k", "u");
        assert_eq!(auth.headers(), auth.headers());
    }

    #[test]
    fn test_kind() {
        assert_eq!(AuthStrategy::default().kind(), "none");
        assert_eq!(AuthStrategy::admin("k", "u").kind(), "admin");
        assert_eq!(AuthStrategy::user("k", None).kind(), "user");
    }

    #[test]
    fn test_debug_redacts_keys() {
        let admin = format!("{:?}", AuthStrategy::admin("super-secret", "system"));
        assert!(!admin.contains("super-secret"));
        assert!(admin.contains("system"));

        let user = format!("{:?}", AuthStrategy::user("user-secret", Some("cli".to_string())));
        assert!(!user.contains("user-secret"));
        assert!(user.contains("cli"));
    }
}
