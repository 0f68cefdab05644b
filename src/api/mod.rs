//! Backend API
//!
//! Session/auth client and typed bindings for the Market Llama REST API.

pub mod auth;
pub mod client;

pub use auth::ApiError;
