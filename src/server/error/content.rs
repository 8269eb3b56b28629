use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use dioxus_logger::tracing;
use thiserror::Error;

use crate::server::error::error_response;

#[derive(Error, Debug)]
pub enum ContentError {
    #[error("Course ID {0} not found")]
    CourseNotFound(i32),
    #[error("Module ID {0} not found")]
    ModuleNotFound(i32),
    #[error("Lesson ID {0} not found")]
    LessonNotFound(i32),
    #[error("User ID {user_id} is not enrolled in the course owning lesson ID {lesson_id}")]
    LessonLocked { user_id: i32, lesson_id: i32 },
    #[error("Hotmart product ID {0:?} is already mapped to another course")]
    HotmartIdInUse(String),
    #[error("{0}")]
    InvalidInput(String),
}

impl IntoResponse for ContentError {
    fn into_response(self) -> Response {
        let status = match self {
            Self::CourseNotFound(_) | Self::ModuleNotFound(_) | Self::LessonNotFound(_) => {
                StatusCode::NOT_FOUND
            }
            Self::LessonLocked { .. } => StatusCode::FORBIDDEN,
            Self::HotmartIdInUse(_) => StatusCode::CONFLICT,
            Self::InvalidInput(_) => StatusCode::BAD_REQUEST,
        };

        tracing::debug!("{}", self);

        error_response(status, self.to_string())
    }
}
