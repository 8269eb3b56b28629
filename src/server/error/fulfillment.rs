use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use dioxus_logger::tracing;
use thiserror::Error;

use crate::server::error::error_response;

/// Failures of a single marketplace webhook delivery.
///
/// Every variant is terminal for the delivery. The marketplace retries on any
/// non-2xx status, which is what eventually completes a delivery that failed
/// halfway.
#[derive(Error, Debug)]
pub enum FulfillmentError {
    #[error("Webhook delivered with unsupported method {0}")]
    MethodNotAllowed(String),
    #[error("Webhook delivered without a valid token")]
    Unauthorized,
    #[error("Webhook payload matched no known schema version")]
    BadRequest,
    /// The email lookup found no account but the insert hit the unique email
    /// constraint. Surfaced for manual intervention rather than retried.
    #[error("Account for {0:?} exists but was not found by email lookup")]
    ConsistencyConflict(String),
    #[error("Failed to create account: {0}")]
    AccountCreation(String),
    #[error("Failed to upsert enrollment for user ID {user_id} in course ID {course_id}: {reason}")]
    EnrollmentFailed {
        user_id: i32,
        course_id: i32,
        reason: String,
    },
    #[error(transparent)]
    Unhandled(#[from] sea_orm::DbErr),
}

impl IntoResponse for FulfillmentError {
    fn into_response(self) -> Response {
        match self {
            Self::MethodNotAllowed(_) => {
                tracing::debug!("{}", self);

                (StatusCode::METHOD_NOT_ALLOWED, "Method not allowed").into_response()
            }
            Self::Unauthorized => {
                tracing::warn!("{}", self);

                error_response(StatusCode::UNAUTHORIZED, "Unauthorized")
            }
            Self::BadRequest => {
                tracing::debug!("{}", self);

                error_response(StatusCode::BAD_REQUEST, "Missing email or product ID")
            }
            Self::ConsistencyConflict(_) => {
                tracing::error!("{}", self);

                error_response(
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "User exists but retrieval failed",
                )
            }
            Self::AccountCreation(ref reason) => {
                tracing::error!("{}", self);

                error_response(StatusCode::INTERNAL_SERVER_ERROR, reason.clone())
            }
            Self::EnrollmentFailed { .. } => {
                tracing::error!("{}", self);

                error_response(StatusCode::INTERNAL_SERVER_ERROR, "Enrollment failed")
            }
            Self::Unhandled(_) => {
                tracing::error!("Unhandled webhook failure: {}", self);

                error_response(StatusCode::INTERNAL_SERVER_ERROR, "Internal Server Error")
            }
        }
    }
}
