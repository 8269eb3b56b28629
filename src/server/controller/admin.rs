//! Catalog administration endpoints.
//!
//! Every endpoint requires the admin role and responds with the administrative tree as it
//! stands after the operation, so clients replace their view instead of patching it.

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
        content::{
            AdminCourseDto, CreateCourseDto, CreateLessonDto, CreateModuleDto, UpdateCourseDto,
        },
    },
    server::{
        controller::util::get_user::require_admin, error::Error, model::app::AppState,
        service::content::ContentService,
    },
};

pub static ADMIN_TAG: &str = "admin";

/// Get every course with its modules, without lessons
#[utoipa::path(
    get,
    path = "/api/admin/courses",
    tag = ADMIN_TAG,
    responses(
        (status = 200, description = "Administrative tree", body = Vec<AdminCourseDto>),
        (status = 403, description = "User is not an admin", body = ErrorDto),
        (status = 404, description = "User not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_admin_courses(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, Error> {
    require_admin(&state, &session).await?;

    let tree = ContentService::new(&state.db).admin_tree().await?;

    Ok((StatusCode::OK, Json(tree)))
}

/// Create a course
#[utoipa::path(
    post,
    path = "/api/admin/courses",
    tag = ADMIN_TAG,
    request_body = CreateCourseDto,
    responses(
        (status = 201, description = "Course created, returns the refreshed tree", body = Vec<AdminCourseDto>),
        (status = 400, description = "Invalid course", body = ErrorDto),
        (status = 403, description = "User is not an admin", body = ErrorDto),
        (status = 404, description = "User not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_course(
    State(state): State<AppState>,
    session: Session,
    Json(payload): Json<CreateCourseDto>,
) -> Result<impl IntoResponse, Error> {
    require_admin(&state, &session).await?;

    let content_service = ContentService::new(&state.db);
    content_service.create_course(payload).await?;
    let tree = content_service.admin_tree().await?;

    Ok((StatusCode::CREATED, Json(tree)))
}

/// Update a course's details or marketplace product mapping
#[utoipa::path(
    patch,
    path = "/api/admin/courses/{id}",
    tag = ADMIN_TAG,
    params(("id" = i32, Path, description = "ID of the course")),
    request_body = UpdateCourseDto,
    responses(
        (status = 200, description = "Course updated, returns the refreshed tree", body = Vec<AdminCourseDto>),
        (status = 400, description = "Invalid course", body = ErrorDto),
        (status = 403, description = "User is not an admin", body = ErrorDto),
        (status = 404, description = "User or course not found", body = ErrorDto),
        (status = 409, description = "Product is already mapped to another course", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_course(
    State(state): State<AppState>,
    session: Session,
    Path(course_id): Path<i32>,
    Json(payload): Json<UpdateCourseDto>,
) -> Result<impl IntoResponse, Error> {
    require_admin(&state, &session).await?;

    let content_service = ContentService::new(&state.db);
    content_service.update_course(course_id, payload).await?;
    let tree = content_service.admin_tree().await?;

    Ok((StatusCode::OK, Json(tree)))
}

/// Delete a course along with its modules, lessons and enrollments
#[utoipa::path(
    delete,
    path = "/api/admin/courses/{id}",
    tag = ADMIN_TAG,
    params(("id" = i32, Path, description = "ID of the course")),
    responses(
        (status = 200, description = "Course deleted, returns the refreshed tree", body = Vec<AdminCourseDto>),
        (status = 403, description = "User is not an admin", body = ErrorDto),
        (status = 404, description = "User or course not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_course(
    State(state): State<AppState>,
    session: Session,
    Path(course_id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    require_admin(&state, &session).await?;

    let content_service = ContentService::new(&state.db);
    content_service.delete_course(course_id).await?;
    let tree = content_service.admin_tree().await?;

    Ok((StatusCode::OK, Json(tree)))
}

/// Create a module at the end of a course
#[utoipa::path(
    post,
    path = "/api/admin/modules",
    tag = ADMIN_TAG,
    request_body = CreateModuleDto,
    responses(
        (status = 201, description = "Module created, returns the refreshed tree", body = Vec<AdminCourseDto>),
        (status = 400, description = "Invalid module", body = ErrorDto),
        (status = 403, description = "User is not an admin", body = ErrorDto),
        (status = 404, description = "User or course not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_module(
    State(state): State<AppState>,
    session: Session,
    Json(payload): Json<CreateModuleDto>,
) -> Result<impl IntoResponse, Error> {
    require_admin(&state, &session).await?;

    let content_service = ContentService::new(&state.db);
    content_service.create_module(payload).await?;
    let tree = content_service.admin_tree().await?;

    Ok((StatusCode::CREATED, Json(tree)))
}

/// Delete a module along with its lessons
#[utoipa::path(
    delete,
    path = "/api/admin/modules/{id}",
    tag = ADMIN_TAG,
    params(("id" = i32, Path, description = "ID of the module")),
    responses(
        (status = 200, description = "Module deleted, returns the refreshed tree", body = Vec<AdminCourseDto>),
        (status = 403, description = "User is not an admin", body = ErrorDto),
        (status = 404, description = "User or module not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_module(
    State(state): State<AppState>,
    session: Session,
    Path(module_id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    require_admin(&state, &session).await?;

    let content_service = ContentService::new(&state.db);
    content_service.delete_module(module_id).await?;
    let tree = content_service.admin_tree().await?;

    Ok((StatusCode::OK, Json(tree)))
}

/// Create a lesson at the end of a module
#[utoipa::path(
    post,
    path = "/api/admin/lessons",
    tag = ADMIN_TAG,
    request_body = CreateLessonDto,
    responses(
        (status = 201, description = "Lesson created, returns the refreshed tree", body = Vec<AdminCourseDto>),
        (status = 400, description = "Invalid lesson", body = ErrorDto),
        (status = 403, description = "User is not an admin", body = ErrorDto),
        (status = 404, description = "User or module not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_lesson(
    State(state): State<AppState>,
    session: Session,
    Json(payload): Json<CreateLessonDto>,
) -> Result<impl IntoResponse, Error> {
    require_admin(&state, &session).await?;

    let content_service = ContentService::new(&state.db);
    content_service.create_lesson(payload).await?;
    let tree = content_service.admin_tree().await?;

    Ok((StatusCode::CREATED, Json(tree)))
}

/// Delete a lesson
#[utoipa::path(
    delete,
    path = "/api/admin/lessons/{id}",
    tag = ADMIN_TAG,
    params(("id" = i32, Path, description = "ID of the lesson")),
    responses(
        (status = 200, description = "Lesson deleted, returns the refreshed tree", body = Vec<AdminCourseDto>),
        (status = 403, description = "User is not an admin", body = ErrorDto),
        (status = 404, description = "User or lesson not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_lesson(
    State(state): State<AppState>,
    session: Session,
    Path(lesson_id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    require_admin(&state, &session).await?;

    let content_service = ContentService::new(&state.db);
    content_service.delete_lesson(lesson_id).await?;
    let tree = content_service.admin_tree().await?;

    Ok((StatusCode::OK, Json(tree)))
}
