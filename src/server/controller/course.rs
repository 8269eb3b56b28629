use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use tower_sessions::Session;

use crate::{
    model::{
        api::ErrorDto,
        content::{LessonDto, StudentTreeDto},
    },
    server::{
        controller::util::get_user::get_user_from_session, error::Error, model::app::AppState,
        service::content::ContentService,
    },
};

pub static COURSE_TAG: &str = "course";

/// Get every course with its modules and lessons
///
/// Lessons of courses the user is not enrolled in are listed without their video or resources.
#[utoipa::path(
    get,
    path = "/api/courses",
    tag = COURSE_TAG,
    responses(
        (status = 200, description = "Content tree as seen by the user", body = StudentTreeDto),
        (status = 404, description = "User not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_courses(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, Error> {
    let user = get_user_from_session(&state, &session).await?;

    let tree = ContentService::new(&state.db).student_tree(&user).await?;

    Ok((StatusCode::OK, Json(tree)))
}

/// Get a lesson the user is entitled to watch
#[utoipa::path(
    get,
    path = "/api/lessons/{id}",
    tag = COURSE_TAG,
    params(("id" = i32, Path, description = "ID of the lesson")),
    responses(
        (status = 200, description = "Lesson with its video", body = LessonDto),
        (status = 403, description = "User is not enrolled in the lesson's course", body = ErrorDto),
        (status = 404, description = "User or lesson not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_lesson(
    State(state): State<AppState>,
    session: Session,
    Path(lesson_id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    let user = get_user_from_session(&state, &session).await?;

    let lesson = ContentService::new(&state.db)
        .get_lesson(&user, lesson_id)
        .await?;

    Ok((StatusCode::OK, Json(lesson)))
}
