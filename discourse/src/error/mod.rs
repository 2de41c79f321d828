//! Error types for the Discourse client.
//!
//! Every call on a [`DiscourseClient`](crate::DiscourseClient) fails with a
//! [`DiscourseError`], which is exactly one of:
//! - [`ApiError`] - the exchange completed but the server rejected the request
//! - [`RequestError`] - the exchange itself could not be completed
//!
//! [`ConfigError`] is separate: it is only produced while building a client.

mod api_error;
mod config_error;
mod discourse_error;
mod request_error;

pub use api_error::ApiError;
pub use config_error::ConfigError;
pub use discourse_error::{DiscourseError, Result};
pub use request_error::RequestError;
