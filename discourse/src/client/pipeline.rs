//! Request execution with tracing instrumentation.
//!
//! Every endpoint funnels into `DiscourseClient::execute`, which performs one
//! HTTP exchange and normalizes the outcome:
//!
//! - exchange failed → [`RequestError`]
//! - non-2xx status → [`ApiError`] (from the `{errors, error_type}` body, or `"HTTP <status>"`)
//! - 2xx status → raw body, decoded by the verb method

use bytes::Bytes;
use serde::Serialize;
use serde::de::DeserializeOwned;
use tracing::{Span, debug, instrument, warn};

use super::DiscourseClient;
use crate::error::{ApiError, DiscourseError, RequestError, Result};
use crate::request::{HttpMethod, OutgoingRequest};

impl DiscourseClient {
    /// Sends a GET request and decodes the JSON response.
    ///
    /// `path` is relative to the base address and must already be
    /// percent-encoded, query string included.
    ///
    /// ## Errors
    ///
    /// Returns [`DiscourseError::Api`](crate::DiscourseError::Api) for
    /// non-success statuses and
    /// [`DiscourseError::Request`](crate::DiscourseError::Request) when the
    /// exchange fails or the body does not decode as `T`.
    pub async fn get<T>(&self, path: &str) -> Result<T>
    where
        T: DeserializeOwned,
    {
        let body = self.execute(OutgoingRequest::new(HttpMethod::Get, path)).await?;
        decode(&body)
    }

    /// Sends a POST request with a JSON body and decodes the JSON response.
    ///
    /// ## Errors
    ///
    /// Same as [`get`](Self::get); a body that cannot be serialized is a
    /// request error.
    pub async fn post<B, T>(&self, path: &str, body: &B) -> Result<T>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let request = OutgoingRequest::with_json(HttpMethod::Post, path, body)?;
        let body = self.execute(request).await?;
        decode(&body)
    }

    /// Sends a PUT request with a JSON body and decodes the JSON response.
    ///
    /// ## Errors
    ///
    /// Same as [`post`](Self::post).
    pub async fn put<B, T>(&self, path: &str, body: &B) -> Result<T>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let request = OutgoingRequest::with_json(HttpMethod::Put, path, body)?;
        let body = self.execute(request).await?;
        decode(&body)
    }

    /// Sends a DELETE request. The response body is ignored on success.
    ///
    /// ## Errors
    ///
    /// Same as [`get`](Self::get), minus decoding.
    pub async fn delete(&self, path: &str) -> Result<()> {
        self.execute(OutgoingRequest::new(HttpMethod::Delete, path))
            .await
            .map(|_| ())
    }

    /// Performs the exchange and returns the body of a success response.
    #[instrument(
        name = "discourse_request",
        skip(self, request),
        fields(
            http.method = %request.method,
            http.path = %request.path,
            http.status_code = tracing::field::Empty,
            otel.kind = "client",
            otel.status_code = tracing::field::Empty,
        )
    )]
    pub(crate) async fn execute(&self, request: OutgoingRequest) -> Result<Bytes> {
        let url = self.url_for(&request.path);
        debug!(auth = self.auth.kind(), has_body = request.body.is_some(), "Sending request");

        let mut builder = self.http.request(request.method.to_reqwest(), url);
        for (name, value) in self.auth.headers() {
            builder = builder.header(name, value);
        }
        if let Some(body) = request.body {
            builder = builder.body(body);
        }

        let response = match builder.send().await {
            Ok(response) => response,
            Err(e) => {
                Span::current().record("otel.status_code", "ERROR");
                warn!(error = %e, "Request failed");
                return Err(RequestError::from(e).into());
            }
        };

        let status = response.status();
        let status_code = status.as_u16();
        Span::current().record("http.status_code", status_code);
        debug!(http.status_code = status_code, "Received response");

        if !status.is_success() {
            // An unreadable error body still yields an API error.
            let body = response.bytes().await.unwrap_or_default();
            let err = ApiError::from_response(status_code, &body);

            let otel_status = if status.is_server_error() { "ERROR" } else { "UNSET" };
            Span::current().record("otel.status_code", otel_status);
            warn!(
                status = status_code,
                errors = ?err.errors,
                error_type = ?err.error_type,
                "API returned error"
            );
            return Err(err.into());
        }

        let body = match response.bytes().await {
            Ok(body) => body,
            Err(e) => {
                Span::current().record("otel.status_code", "ERROR");
                warn!(error = %e, "Failed to read response body");
                return Err(RequestError::from(e).into());
            }
        };

        Span::current().record("otel.status_code", "OK");
        Ok(body)
    }
}

/// Decodes a success body as JSON.
fn decode<T: DeserializeOwned>(body: &[u8]) -> Result<T> {
    serde_json::from_slice(body).map_err(|e| {
        warn!(error = %e, "Response body is not the expected JSON");
        DiscourseError::from(RequestError::new(format!("invalid JSON in response body: {e}")))
    })
}
