//! Typed async client for the Discourse forum HTTP API.
//!
//! The `discourse` crate wraps the JSON API of a Discourse site: it builds
//! request paths, attaches credentials, and turns every response into either a
//! typed value or a [`DiscourseError`].
//!
//! ## Features
//!
//! - **Three auth modes**: anonymous, admin API key, or user API key
//! - **One exchange per call**: no retries, caching, or background tasks
//! - **Two-kind errors**: [`ApiError`] when the server says no,
//!   [`RequestError`] when the request never completes
//! - **Tracing**: each exchange runs in a `discourse_request` span
//!
//! ## Example
//!
//! ```rust,ignore
//! use discourse::{DiscourseClient, SearchOptions};
//!
//! let client = DiscourseClient::with_api_key("https://forum.example.com", "key", "system")?;
//!
//! let created = client.create_topic("Release notes", "We shipped!", Some(4)).await?;
//! client.like_post(created.id).await?;
//!
//! let hits = client.search("release in:title", &SearchOptions::page(1)).await?;
//! for post in hits.posts {
//!     println!("{}: {}", post.username, post.blurb);
//! }
//! ```

pub mod auth;
pub mod client;
pub mod encode;
pub mod endpoints;
pub mod error;
pub mod request;
pub mod types;

// Re-exports for convenience
pub use auth::AuthStrategy;
pub use client::{ClientBuilder, DEFAULT_USER_AGENT, DiscourseClient};
pub use encode::encode_component;
pub use endpoints::LIKE_ACTION_TYPE_ID;
pub use error::{ApiError, ConfigError, DiscourseError, RequestError, Result};
pub use request::{HttpMethod, OutgoingRequest};
pub use types::*;
