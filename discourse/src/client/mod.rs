//! The Discourse client and its configuration.
//!
//! A [`DiscourseClient`] is an immutable pair of base address and
//! [`AuthStrategy`] plus a pooled `reqwest::Client`. It is cheap to clone and
//! safe to share between tasks; every call is an independent HTTP exchange.
//!
//! ## Examples
//!
//! ```rust,ignore
//! use discourse::DiscourseClient;
//!
//! // Anonymous access
//! let client = DiscourseClient::new("https://meta.discourse.org")?;
//! let latest = client.get_latest().await?;
//!
//! // Admin API key acting as "system"
//! let admin = DiscourseClient::with_api_key("https://forum.example.com/", "key", "system")?;
//! admin.create_topic("Hello", "First post body", None).await?;
//! ```

mod pipeline;

use url::Url;

use crate::auth::AuthStrategy;
use crate::error::ConfigError;

/// Default `User-Agent` sent by clients built without a custom HTTP client.
pub const DEFAULT_USER_AGENT: &str = concat!("discourse-rs/", env!("CARGO_PKG_VERSION"));

/// Builder for configuring a [`DiscourseClient`].
#[derive(Debug)]
pub struct ClientBuilder {
    base_url: String,
    auth: AuthStrategy,
    user_agent: String,
    http_client: Option<reqwest::Client>,
}

impl ClientBuilder {
    fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            auth: AuthStrategy::None,
            user_agent: DEFAULT_USER_AGENT.to_string(),
            http_client: None,
        }
    }

    /// Sets the authentication strategy.
    pub fn auth(mut self, auth: AuthStrategy) -> Self {
        self.auth = auth;
        self
    }

    /// Authenticates with an admin API key acting as `api_username`.
    pub fn api_key(self, api_key: impl Into<String>, api_username: impl Into<String>) -> Self {
        self.auth(AuthStrategy::admin(api_key, api_username))
    }

    /// Authenticates with a user API key.
    pub fn user_api_key(self, user_api_key: impl Into<String>, client_id: Option<String>) -> Self {
        self.auth(AuthStrategy::user(user_api_key, client_id))
    }

    /// Overrides the `User-Agent` header.
    ///
    /// Ignored when a custom HTTP client is supplied.
    pub fn user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    /// Uses an existing `reqwest::Client` for all requests.
    ///
    /// This is the place to configure timeouts, proxies, or TLS settings.
    pub fn http_client(mut self, client: reqwest::Client) -> Self {
        self.http_client = Some(client);
        self
    }

    /// Builds the [`DiscourseClient`].
    ///
    /// ## Errors
    ///
    /// Returns an error if:
    /// - the base address is not an absolute `http` or `https` URL
    /// - a required credential is empty
    /// - the HTTP client cannot be constructed
    pub fn build(self) -> Result<DiscourseClient, ConfigError> {
        let base_url = normalize_base_url(&self.base_url)?;
        let auth = validate_auth(self.auth)?;

        let http = match self.http_client {
            Some(client) => client,
            None => reqwest::Client::builder()
                .user_agent(self.user_agent)
                .build()?,
        };

        Ok(DiscourseClient {
            http,
            base_url,
            auth,
        })
    }
}

/// Strips trailing separators and checks that the address is usable.
fn normalize_base_url(raw: &str) -> Result<String, ConfigError> {
    let trimmed = raw.trim().trim_end_matches('/');
    let parsed = Url::parse(trimmed)?;

    match parsed.scheme() {
        "http" | "https" => Ok(trimmed.to_string()),
        other => Err(ConfigError::UnsupportedScheme {
            scheme: other.to_string(),
        }),
    }
}

fn validate_auth(auth: AuthStrategy) -> Result<AuthStrategy, ConfigError> {
    match auth {
        AuthStrategy::Admin { api_key, .. } if api_key.is_empty() => {
            Err(ConfigError::missing_credential("api_key"))
        }
        AuthStrategy::Admin { api_username, .. } if api_username.is_empty() => {
            Err(ConfigError::missing_credential("api_username"))
        }
        AuthStrategy::User { user_api_key, .. } if user_api_key.is_empty() => {
            Err(ConfigError::missing_credential("user_api_key"))
        }
        // An empty client id is the same as none at all.
        AuthStrategy::User {
            user_api_key,
            client_id,
        } => Ok(AuthStrategy::User {
            user_api_key,
            client_id: client_id.filter(|id| !id.is_empty()),
        }),
        other => Ok(other),
    }
}

/// Async client for the Discourse HTTP API.
///
/// Endpoint methods live in [`crate::endpoints`]; the raw verb methods
/// ([`get`](Self::get), [`post`](Self::post), [`put`](Self::put),
/// [`delete`](Self::delete)) are public for endpoints the crate does not wrap.
#[derive(Debug, Clone)]
pub struct DiscourseClient {
    http: reqwest::Client,
    base_url: String,
    auth: AuthStrategy,
}

impl DiscourseClient {
    /// Creates a new builder for the forum at `base_url`.
    pub fn builder(base_url: impl Into<String>) -> ClientBuilder {
        ClientBuilder::new(base_url)
    }

    /// Creates an anonymous client.
    ///
    /// ## Errors
    ///
    /// Returns an error if the base address is invalid or the HTTP client
    /// cannot be constructed.
    pub fn new(base_url: impl Into<String>) -> Result<Self, ConfigError> {
        Self::builder(base_url).build()
    }

    /// Creates a client authenticated with an admin API key.
    ///
    /// ## Errors
    ///
    /// Returns an error if either credential is empty or the base address is
    /// invalid.
    pub fn with_api_key(
        base_url: impl Into<String>,
        api_key: impl Into<String>,
        api_username: impl Into<String>,
    ) -> Result<Self, ConfigError> {
        Self::builder(base_url).api_key(api_key, api_username).build()
    }

    /// Creates a client authenticated with a user API key.
    ///
    /// ## Errors
    ///
    /// Returns an error if the key is empty or the base address is invalid.
    pub fn with_user_api_key(
        base_url: impl Into<String>,
        user_api_key: impl Into<String>,
        client_id: Option<String>,
    ) -> Result<Self, ConfigError> {
        Self::builder(base_url)
            .user_api_key(user_api_key, client_id)
            .build()
    }

    /// The base address, without trailing `/`.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// The active authentication strategy.
    pub fn auth(&self) -> &AuthStrategy {
        &self.auth
    }

    fn url_for(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trailing_slashes_stripped() {
        let client = DiscourseClient::new("https://forum.example.com///").unwrap();
        assert_eq!(client.base_url(), "https://forum.example.com");
        assert_eq!(client.url_for("/latest.json"), "https://forum.example.com/latest.json");
    }

    #[test]
    fn test_subfolder_install_kept() {
        let client = DiscourseClient::new("https://example.com/forum/").unwrap();
        assert_eq!(client.url_for("/t/1.json"), "https://example.com/forum/t/1.json");
    }

    #[test]
    fn test_same_urls_with_and_without_slash() {
        let a = DiscourseClient::new("https://forum.example.com").unwrap();
        let b = DiscourseClient::new("https://forum.example.com/").unwrap();
        assert_eq!(a.url_for("/posts.json"), b.url_for("/posts.json"));
    }

    #[test]
    fn test_invalid_url_rejected() {
        let err = DiscourseClient::new("forum.example.com").unwrap_err();
        assert!(matches!(err, ConfigError::InvalidUrl(_)));
    }

    #[test]
    fn test_unsupported_scheme_rejected() {
        let err = DiscourseClient::new("ftp://forum.example.com").unwrap_err();
        assert!(matches!(err, ConfigError::UnsupportedScheme { scheme } if scheme == "ftp"));
    }

    #[test]
    fn test_admin_requires_both_credentials() {
        let err = DiscourseClient::with_api_key("https://f.example", "", "system").unwrap_err();
        assert!(matches!(err, ConfigError::MissingCredential { field: "api_key" }));

        let err = DiscourseClient::with_api_key("https://f.example", "key", "").unwrap_err();
        assert!(matches!(err, ConfigError::MissingCredential { field: "api_username" }));
    }

    #[test]
    fn test_user_requires_key() {
        let err = DiscourseClient::with_user_api_key("https://f.example", "", None).unwrap_err();
        assert!(matches!(err, ConfigError::MissingCredential { field: "user_api_key" }));
    }

    #[test]
    fn test_empty_client_id_dropped() {
        let client =
            DiscourseClient::with_user_api_key("https://f.example", "key", Some(String::new()))
                .unwrap();
        assert_eq!(client.auth(), &AuthStrategy::user("key", None));
    }

    #[test]
    fn test_builder_auth() {
        let client = DiscourseClient::builder("https://f.example")
            .api_key("key", "system")
            .user_agent("my-bot/1.0")
            .build()
            .unwrap();
        assert_eq!(client.auth().kind(), "admin");
    }

    #[test]
    fn test_custom_http_client() {
        let http = reqwest::Client::builder().build().unwrap();
        let client = DiscourseClient::builder("https://f.example")
            .http_client(http)
            .build()
            .unwrap();
        assert_eq!(client.auth(), &AuthStrategy::None);
    }

    #[test]
    fn test_debug_does_not_leak_key() {
        let client = DiscourseClient::with_api_key("https://f.example", "hunter2", "system").unwrap();
        assert!(!format!("{client:?}").contains("hunter2"));
    }
}
