//! Routed pages: the authentication screens and the admin post listing.

pub mod login;
pub mod posts;
pub mod register;
