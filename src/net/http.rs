//! HTTP client adapter for the compliance API.
//!
//! Client-side (`csr`): real HTTP calls via `gloo-net`, with the configured
//! base address prepended and the bearer token from the session store
//! attached when one is present.
//! Native builds: stubs returning [`ApiError::Network`], since these calls
//! are only meaningful in the browser.
//!
//! ERROR HANDLING
//! ==============
//! Every call returns `Result<_, ApiError>`. Non-2xx responses become
//! [`ApiError::Status`] carrying the server's `{"message": ...}` body field
//! when it parses; transport failures become [`ApiError::Network`]. Nothing
//! is retried and nothing panics; callers render the message inline.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "http_test.rs"]
mod http_test;

use thiserror::Error;

/// Failure surfaced by any API call.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum ApiError {
    /// Transport-level failure: the request never produced a response.
    #[error("network error: {0}")]
    Network(String),
    /// The server answered with a non-2xx status.
    #[error("server returned status {status}")]
    Status { status: u16, message: Option<String> },
}

impl ApiError {
    /// The message the server attached to a non-2xx response, if any.
    pub fn server_message(&self) -> Option<&str> {
        match self {
            Self::Status { message, .. } => message.as_deref(),
            Self::Network(_) => None,
        }
    }

    /// User-facing message: the server-provided one when available,
    /// otherwise a generic fallback.
    pub fn message(&self) -> String {
        self.server_message()
            .map_or_else(|| "Request failed. Please try again.".to_owned(), str::to_owned)
    }
}

/// Build the [`ApiError`] for a non-2xx response from its status and raw
/// body text. The body is expected (but not required) to be a JSON object
/// with a `message` field.
pub fn status_error(status: u16, body: &str) -> ApiError {
    let message = serde_json::from_str::<serde_json::Value>(body)
        .ok()
        .and_then(|value| value.get("message").and_then(|m| m.as_str()).map(str::to_owned));
    ApiError::Status { status, message }
}

/// Thin wrapper around the HTTP transport carrying the API base address.
///
/// Owned by `App` and handed to views via context, so the base address is
/// configured in exactly one place.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ApiClient {
    base: String,
}

impl Default for ApiClient {
    fn default() -> Self {
        Self::new("/api")
    }
}

impl ApiClient {
    pub fn new(base: impl Into<String>) -> Self {
        let base = base.into();
        Self {
            base: base.trim_end_matches('/').to_owned(),
        }
    }

    /// Absolute request URL for an API path (path must start with `/`).
    pub fn url(&self, path: &str) -> String {
        format!("{}{path}", self.base)
    }
}

#[cfg(feature = "csr")]
impl ApiClient {
    /// `GET` a JSON resource, bearer-authenticated when a token is stored.
    pub async fn get_json<T: serde::de::DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        let resp = authorize(gloo_net::http::Request::get(&self.url(path)))
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        parse_response(resp).await
    }

    /// `POST` a JSON body without attaching the bearer token.
    ///
    /// The login call is the one place a token must never be sent, even if
    /// a stale one is still in the store from a previous session.
    pub async fn post_json_unauthed<T, B>(&self, path: &str, body: &B) -> Result<T, ApiError>
    where
        T: serde::de::DeserializeOwned,
        B: serde::Serialize,
    {
        self.send_body(gloo_net::http::Request::post(&self.url(path)), body, false)
            .await
    }

    /// `PATCH` a JSON body, bearer-authenticated when a token is stored.
    pub async fn patch_json<T, B>(&self, path: &str, body: &B) -> Result<T, ApiError>
    where
        T: serde::de::DeserializeOwned,
        B: serde::Serialize,
    {
        self.send_body(gloo_net::http::Request::patch(&self.url(path)), body, true)
            .await
    }

    async fn send_body<T, B>(
        &self,
        builder: gloo_net::http::RequestBuilder,
        body: &B,
        with_auth: bool,
    ) -> Result<T, ApiError>
    where
        T: serde::de::DeserializeOwned,
        B: serde::Serialize,
    {
        let builder = if with_auth { authorize(builder) } else { builder };
        let resp = builder
            .json(body)
            .map_err(|e| ApiError::Network(e.to_string()))?
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        parse_response(resp).await
    }
}

#[cfg(not(feature = "csr"))]
impl ApiClient {
    pub async fn get_json<T: serde::de::DeserializeOwned>(&self, _path: &str) -> Result<T, ApiError> {
        Err(not_in_browser())
    }

    pub async fn post_json_unauthed<T, B>(&self, _path: &str, _body: &B) -> Result<T, ApiError>
    where
        T: serde::de::DeserializeOwned,
        B: serde::Serialize,
    {
        Err(not_in_browser())
    }

    pub async fn patch_json<T, B>(&self, _path: &str, _body: &B) -> Result<T, ApiError>
    where
        T: serde::de::DeserializeOwned,
        B: serde::Serialize,
    {
        Err(not_in_browser())
    }
}

#[cfg(not(feature = "csr"))]
fn not_in_browser() -> ApiError {
    ApiError::Network("not available outside the browser".to_owned())
}

/// Attach the bearer token from the session store, if one is present.
#[cfg(feature = "csr")]
fn authorize(builder: gloo_net::http::RequestBuilder) -> gloo_net::http::RequestBuilder {
    match crate::state::session::SessionStore::new().read().token {
        Some(token) => builder.header("Authorization", &format!("Bearer {token}")),
        None => builder,
    }
}

#[cfg(feature = "csr")]
async fn parse_response<T: serde::de::DeserializeOwned>(
    resp: gloo_net::http::Response,
) -> Result<T, ApiError> {
    if !resp.ok() {
        let body = resp.text().await.unwrap_or_default();
        return Err(status_error(resp.status(), &body));
    }
    resp.json::<T>().await.map_err(|e| ApiError::Network(e.to_string()))
}
