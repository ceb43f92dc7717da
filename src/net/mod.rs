//! HTTP access to the remote blog API.
//!
//! `gateway` is the transport wrapper (base URL, headers, status mapping),
//! `api` the typed endpoint functions, `types` the wire payloads.

pub mod api;
pub mod gateway;
pub mod types;
