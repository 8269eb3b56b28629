//! Tests for HTTP controller endpoints.
//!
//! This module contains integration tests for the application's HTTP controllers,
//! verifying request handling, response formatting, authentication and entitlement checks,
//! and error handling for all API endpoints.

mod admin;
mod auth;
mod course;
mod user;
mod webhook;

use axum::{body::to_bytes, response::Response};
use lectern::server::model::session::user::SessionUserId;
use tower_sessions::Session;

/// Reads a response body as JSON
async fn body_json(resp: Response) -> serde_json::Value {
    let bytes = to_bytes(resp.into_body(), usize::MAX).await.unwrap();

    serde_json::from_slice(&bytes).unwrap()
}

async fn login_as(session: &Session, user_id: i32) {
    SessionUserId::insert(session, user_id).await.unwrap();
}
