//! Data transfer objects shared by the HTTP API.
//!
//! These types describe the JSON bodies accepted and returned by the server's
//! endpoints and carry the OpenAPI schemas used to document them.

pub mod api;
pub mod content;
pub mod user;
pub mod webhook;
