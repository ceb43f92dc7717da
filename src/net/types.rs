//! Wire payloads for the blog REST API.
//!
//! Value records only; schema validation happens in `crate::forms` before a
//! request is sent, and on the server after.

use serde::{Deserialize, Serialize};

/// New-account payload for `POST /account`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct RegisterPayload {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub password: String,
}

/// Credentials for `POST /sessions`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct LoginPayload {
    pub email: String,
    pub password: String,
}

/// Body of a successful login, carrying the bearer token.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct SessionResponse {
    pub token: String,
}

/// A post category.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    pub id: String,
    pub name: String,
}

/// A blog post as returned by the API. List responses may omit the heavier
/// fields, so everything past the title is optional.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Post {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub content: Option<String>,
    #[serde(default)]
    pub excerpt: Option<String>,
    #[serde(default)]
    pub cover_url: Option<String>,
    #[serde(default)]
    pub category_id: Option<String>,
    #[serde(default)]
    pub created_at: Option<String>,
}

/// Create/edit payload for `POST /posts` and `PUT /posts/:id`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewPost {
    pub title: String,
    pub content: String,
    pub category_id: String,
}
