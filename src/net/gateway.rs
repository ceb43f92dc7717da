//! Authenticated request gateway over the plain HTTP transport.
//!
//! Every call is a single pass-through request: no retries, no caching, no
//! rate limiting. The gateway joins the configured base URL with an endpoint
//! path, attaches headers, and maps the response. The `Authorization` header
//! is injected here (and only here) whenever the gateway's token source
//! yields a token.
//!
//! The actual HTTP call is gated behind `#[cfg(feature = "hydrate")]` since
//! it requires a browser environment; elsewhere `send` fails fast with a
//! network error.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "gateway_test.rs"]
mod gateway_test;

use serde_json::Value;

/// Header telling an ngrok-style tunnel to skip its browser warning page.
/// Sent on every request, authenticated or not.
const BYPASS_WARNING_HEADER: (&str, &str) = ("ngrok-skip-browser-warning", "true");

/// API base URL baked in at compile time via `BLOG_API_BASE` (for example a
/// tunnel origin). Empty means same-origin relative requests.
pub fn base_url_from_env() -> &'static str {
    option_env!("BLOG_API_BASE").unwrap_or("")
}

/// HTTP methods used by the blog REST endpoints.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
    Put,
    Delete,
}

impl Method {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Get => "GET",
            Self::Post => "POST",
            Self::Put => "PUT",
            Self::Delete => "DELETE",
        }
    }
}

/// Failure of a single request, keeping the HTTP status so callers can
/// branch on it (401 invalid credentials, 409 conflict, ...).
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    /// The request never produced a response (transport failure, or no
    /// browser environment to issue it from).
    #[error("network error: {0}")]
    Network(String),
    /// The server answered with a non-2xx status.
    #[error("request failed with status {status}")]
    Status { status: u16, body: String },
    /// A body could not be serialized or deserialized.
    #[error("malformed body: {0}")]
    Decode(String),
}

impl ApiError {
    /// HTTP status of the failed response, if the server answered at all.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Status { status, .. } => Some(*status),
            Self::Network(_) | Self::Decode(_) => None,
        }
    }
}

/// A 2xx response: status code plus raw body text.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ApiResponse {
    pub status: u16,
    pub body: String,
}

impl ApiResponse {
    /// Deserialize the body as JSON.
    ///
    /// # Errors
    ///
    /// Returns `ApiError::Decode` if the body is not valid JSON for `T`.
    pub fn json<T: serde::de::DeserializeOwned>(&self) -> Result<T, ApiError> {
        serde_json::from_str(&self.body).map_err(|e| ApiError::Decode(e.to_string()))
    }
}

/// Read capability on the current bearer token. The gateway only ever reads
/// the token at call time; it never mutates session state.
pub trait TokenSource {
    fn token(&self) -> Option<String>;
}

/// Token source for the public channel: never authorizes.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoTokens;

impl TokenSource for NoTokens {
    fn token(&self) -> Option<String> {
        None
    }
}

/// Request dispatcher bound to a base URL and a token source.
///
/// Stateless between calls apart from reading the token source when a
/// request goes out.
#[derive(Clone, Debug)]
pub struct Gateway<T: TokenSource> {
    base_url: String,
    tokens: T,
}

impl<T: TokenSource> Gateway<T> {
    pub fn new(base_url: &str, tokens: T) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_owned(),
            tokens,
        }
    }

    #[cfg(test)]
    pub(crate) fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Issue a single request against `path`.
    ///
    /// # Errors
    ///
    /// `ApiError::Network` when the transport fails, `ApiError::Status` for
    /// any non-2xx response. Both propagate unchanged to the caller.
    #[cfg(feature = "hydrate")]
    pub async fn send(
        &self,
        method: Method,
        path: &str,
        body: Option<&Value>,
    ) -> Result<ApiResponse, ApiError> {
        use gloo_net::http::Request;

        let url = join_url(&self.base_url, path);
        let mut builder = match method {
            Method::Get => Request::get(&url),
            Method::Post => Request::post(&url),
            Method::Put => Request::put(&url),
            Method::Delete => Request::delete(&url),
        };
        for (name, value) in request_headers(self.tokens.token().as_deref()) {
            builder = builder.header(name, &value);
        }

        let request = match body {
            Some(json) => builder
                .json(json)
                .map_err(|e| ApiError::Network(e.to_string()))?,
            None => builder
                .build()
                .map_err(|e| ApiError::Network(e.to_string()))?,
        };

        let response = request
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        let status = response.status();
        let body = response.text().await.unwrap_or_default();

        if (200..300).contains(&status) {
            Ok(ApiResponse { status, body })
        } else {
            Err(ApiError::Status { status, body })
        }
    }

    /// Outside the browser there is no transport to delegate to.
    #[cfg(not(feature = "hydrate"))]
    pub async fn send(
        &self,
        method: Method,
        path: &str,
        body: Option<&Value>,
    ) -> Result<ApiResponse, ApiError> {
        let _ = (method, path, body, &self.base_url, self.tokens.token());
        Err(ApiError::Network("not available outside the browser".to_owned()))
    }
}

/// Headers for one outgoing request. `Authorization: Bearer <token>` appears
/// exactly when a token is present; the warning-bypass header always does.
pub fn request_headers(token: Option<&str>) -> Vec<(&'static str, String)> {
    let mut headers = vec![(BYPASS_WARNING_HEADER.0, BYPASS_WARNING_HEADER.1.to_owned())];
    if let Some(token) = token {
        headers.push(("Authorization", format!("Bearer {token}")));
    }
    headers
}

pub fn join_url(base: &str, path: &str) -> String {
    if path.starts_with('/') {
        format!("{base}{path}")
    } else {
        format!("{base}/{path}")
    }
}
