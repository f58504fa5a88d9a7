//! HTTP boundary: the generic request helper and the auth endpoint wrappers.

pub mod auth;
pub mod client;

pub use auth::{AccessToken, AuthApi, TokenPair, UNEXPECTED_FAILURE};
pub use client::ApiClient;
