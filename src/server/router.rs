//! HTTP routing and OpenAPI documentation configuration.
//!
//! This module defines the application's HTTP routes and generates OpenAPI documentation
//! using utoipa. All API endpoints are registered here with their OpenAPI specifications,
//! and Swagger UI is configured to provide interactive API documentation at `/api/docs`.

use axum::{routing::any, Router};
use utoipa::OpenApi;
use utoipa_axum::{router::OpenApiRouter, routes};
use utoipa_swagger_ui::SwaggerUi;

use crate::server::{controller, model::app::AppState};

/// Path of the Hotmart purchase webhook
pub const HOTMART_WEBHOOK_PATH: &str = "/api/webhook/hotmart";

/// Builds the application's HTTP router with all API endpoints and Swagger UI documentation.
///
/// # Registered Endpoints
/// - `ANY /api/webhook/hotmart` - Hotmart purchase webhook, only POST is processed
/// - `POST /api/auth/register` - Register with email and password
/// - `POST /api/auth/login` - Log in with email and password
/// - `POST /api/auth/logout` - Logout current user
/// - `GET /api/auth/user` - Get current user information
/// - `POST /api/user/heartbeat` - Record activity of the current user
/// - `GET /api/courses` - Content tree as seen by the current user
/// - `GET /api/lessons/{id}` - Lesson with its video, requires enrollment
/// - `GET, POST /api/admin/courses` - Administrative tree, create course
/// - `PATCH, DELETE /api/admin/courses/{id}` - Update or delete a course
/// - `POST /api/admin/modules`, `DELETE /api/admin/modules/{id}` - Create or delete a module
/// - `POST /api/admin/lessons`, `DELETE /api/admin/lessons/{id}` - Create or delete a lesson
///
/// The OpenAPI specification is available at `/api/docs/openapi.json` and Swagger UI is
/// served at `/api/docs`.
pub fn routes() -> Router<AppState> {
    #[derive(OpenApi)]
    #[openapi(
        info(title = "Lectern", description = "Lectern API"),
        paths(controller::webhook::hotmart),
        tags(
            (name = controller::webhook::WEBHOOK_TAG, description = "Marketplace webhook routes"),
            (name = controller::auth::AUTH_TAG, description = "Authentication API routes"),
            (name = controller::user::USER_TAG, description = "User API routes"),
            (name = controller::course::COURSE_TAG, description = "Course content API routes"),
            (name = controller::admin::ADMIN_TAG, description = "Catalog administration API routes"),
        )
    )]
    struct ApiDoc;

    let (routes, api) = OpenApiRouter::with_openapi(ApiDoc::openapi())
        .routes(routes!(controller::auth::register))
        .routes(routes!(controller::auth::login))
        .routes(routes!(controller::auth::logout))
        .routes(routes!(controller::auth::get_user))
        .routes(routes!(controller::user::heartbeat))
        .routes(routes!(controller::course::get_courses))
        .routes(routes!(controller::course::get_lesson))
        .routes(routes!(
            controller::admin::get_admin_courses,
            controller::admin::create_course
        ))
        .routes(routes!(
            controller::admin::update_course,
            controller::admin::delete_course
        ))
        .routes(routes!(controller::admin::create_module))
        .routes(routes!(controller::admin::delete_module))
        .routes(routes!(controller::admin::create_lesson))
        .routes(routes!(controller::admin::delete_lesson))
        .split_for_parts();

    // Registered for every method so non-POST deliveries reach the handler's 405
    routes
        .route(HOTMART_WEBHOOK_PATH, any(controller::webhook::hotmart))
        .merge(SwaggerUi::new("/api/docs").url("/api/docs/openapi.json", api))
}
