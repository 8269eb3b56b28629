use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use dioxus_logger::tracing;
use thiserror::Error;

use crate::server::error::{error_response, InternalServerError};

#[derive(Error, Debug)]
pub enum AuthError {
    #[error("User ID is not present in session")]
    UserNotInSession,
    #[error("User ID {0:?} not found in database despite having an active session")]
    UserNotInDatabase(i32),
    #[error("Login attempt failed for {0:?}")]
    InvalidCredentials(String),
    #[error("User ID {0:?} attempted an administrative operation without the admin role")]
    Forbidden(i32),
    #[error("Registration rejected, email {0:?} is already registered")]
    EmailAlreadyRegistered(String),
    #[error("Registration rejected: {0}")]
    InvalidRegistration(String),
    #[error("Failed to hash password: {0}")]
    PasswordHash(String),
}

impl AuthError {
    fn user_not_found() -> Response {
        error_response(StatusCode::NOT_FOUND, "User not found")
    }
}

impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        match self {
            Self::UserNotInSession => {
                tracing::debug!("{}", self);

                Self::user_not_found()
            }
            Self::UserNotInDatabase(user_id) => {
                tracing::debug!(
                    user_id = %user_id,
                    "{}",
                    self
                );

                Self::user_not_found()
            }
            Self::InvalidCredentials(_) => {
                tracing::debug!("{}", self);

                error_response(StatusCode::UNAUTHORIZED, "Invalid email or password")
            }
            Self::Forbidden(user_id) => {
                tracing::warn!(user_id = %user_id, "{}", self);

                error_response(StatusCode::FORBIDDEN, "Forbidden")
            }
            Self::EmailAlreadyRegistered(_) => {
                tracing::debug!("{}", self);

                error_response(StatusCode::CONFLICT, "Email is already registered")
            }
            Self::InvalidRegistration(reason) => error_response(StatusCode::BAD_REQUEST, reason),
            Self::PasswordHash(_) => InternalServerError(self).into_response(),
        }
    }
}
