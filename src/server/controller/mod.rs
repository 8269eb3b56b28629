//! HTTP controller endpoints for the Lectern web API.
//!
//! This module contains Axum handlers for the marketplace webhook, password authentication,
//! the student content tree and catalog administration. Controllers resolve the caller from
//! the session, delegate to services and return JSON responses. They integrate with
//! tower-sessions for session management and use utoipa for OpenAPI documentation.

pub mod admin;
pub mod auth;
pub mod course;
pub mod user;
pub mod util;
pub mod webhook;
