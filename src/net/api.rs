//! Typed endpoint functions over the request gateway.
//!
//! Mirrors the remote REST surface: the account/session endpoints go through
//! the public gateway, everything under `/categories` and `/posts` through
//! the private (token-attaching) one. Functions re-throw `ApiError`
//! unchanged so callers can branch on the HTTP status (401, 409, ...).

use serde::Serialize;
use serde_json::Value;

use crate::net::gateway::{ApiError, ApiResponse, Gateway, Method, NoTokens, base_url_from_env};
use crate::net::types::{Category, LoginPayload, NewPost, Post, RegisterPayload, SessionResponse};
use crate::state::session::SessionTokens;

/// REST client handed to components via context.
///
/// Holds two gateways against the same base URL, split the way the API
/// expects: a public channel for account creation and login, and a private
/// channel that carries the session's bearer token.
#[derive(Clone)]
pub struct ApiClient {
    public: Gateway<NoTokens>,
    private: Gateway<SessionTokens>,
}

impl ApiClient {
    /// Build the client against the compile-time API base URL.
    pub fn new(session: SessionTokens) -> Self {
        let base = base_url_from_env();
        Self {
            public: Gateway::new(base, NoTokens),
            private: Gateway::new(base, session),
        }
    }

    /// `POST /account` — create an account; the server answers 201.
    ///
    /// # Errors
    ///
    /// 409 means the e-mail is already registered.
    pub async fn register(&self, payload: &RegisterPayload) -> Result<ApiResponse, ApiError> {
        let body = encode(payload)?;
        self.public.send(Method::Post, "/account", Some(&body)).await
    }

    /// `POST /sessions` — log in; returns the bearer token on 200.
    ///
    /// # Errors
    ///
    /// 401 means the credentials were rejected.
    pub async fn login(&self, payload: &LoginPayload) -> Result<String, ApiError> {
        let body = encode(payload)?;
        let response = self.public.send(Method::Post, "/sessions", Some(&body)).await?;
        Ok(response.json::<SessionResponse>()?.token)
    }

    /// `GET /categories`.
    ///
    /// # Errors
    ///
    /// Propagates any transport or status failure.
    pub async fn categories(&self) -> Result<Vec<Category>, ApiError> {
        self.private.send(Method::Get, "/categories", None).await?.json()
    }

    /// `GET /posts`.
    ///
    /// # Errors
    ///
    /// Propagates any transport or status failure.
    pub async fn posts(&self) -> Result<Vec<Post>, ApiError> {
        self.private.send(Method::Get, "/posts", None).await?.json()
    }

    /// `GET /posts/:id`.
    ///
    /// # Errors
    ///
    /// Propagates any transport or status failure.
    pub async fn post(&self, id: &str) -> Result<Post, ApiError> {
        self.private
            .send(Method::Get, &format!("/posts/{id}"), None)
            .await?
            .json()
    }

    /// `POST /posts` — the server answers 201 on success.
    ///
    /// # Errors
    ///
    /// Propagates any transport or status failure.
    pub async fn create_post(&self, payload: &NewPost) -> Result<ApiResponse, ApiError> {
        let body = encode(payload)?;
        self.private.send(Method::Post, "/posts", Some(&body)).await
    }

    /// `PUT /posts/:id` — the server answers 200 on success.
    ///
    /// # Errors
    ///
    /// Propagates any transport or status failure.
    pub async fn update_post(&self, id: &str, payload: &NewPost) -> Result<ApiResponse, ApiError> {
        let body = encode(payload)?;
        self.private
            .send(Method::Put, &format!("/posts/{id}"), Some(&body))
            .await
    }

    /// `DELETE /posts/:id` — the server answers 200 on success.
    ///
    /// # Errors
    ///
    /// Propagates any transport or status failure.
    pub async fn delete_post(&self, id: &str) -> Result<ApiResponse, ApiError> {
        self.private
            .send(Method::Delete, &format!("/posts/{id}"), None)
            .await
    }
}

fn encode<T: Serialize>(payload: &T) -> Result<Value, ApiError> {
    serde_json::to_value(payload).map_err(|e| ApiError::Decode(e.to_string()))
}
