use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use tower_sessions::Session;

use crate::{
    model::{
        api::ErrorDto,
        user::{LoginDto, RegisterDto, UserDto},
    },
    server::{
        controller::util::get_user::get_user_from_session,
        error::Error,
        model::{app::AppState, session::user::SessionUserId},
        service::account::AccountService,
    },
};

pub static AUTH_TAG: &str = "auth";

/// Starts a session for the account, issuing a new session ID
async fn start_session(session: &Session, user_id: i32) -> Result<(), Error> {
    session.cycle_id().await?;
    SessionUserId::insert(session, user_id).await?;

    Ok(())
}

/// Register an account with an email and password and log it in
#[utoipa::path(
    post,
    path = "/api/auth/register",
    tag = AUTH_TAG,
    request_body = RegisterDto,
    responses(
        (status = 201, description = "Account registered and logged in", body = UserDto),
        (status = 400, description = "Email or password not acceptable", body = ErrorDto),
        (status = 409, description = "Email is already registered", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn register(
    State(state): State<AppState>,
    session: Session,
    Json(payload): Json<RegisterDto>,
) -> Result<impl IntoResponse, Error> {
    let user = AccountService::new(&state.db)
        .register(&payload.email, &payload.password, payload.display_name)
        .await?;

    start_session(&session, user.id).await?;

    Ok((StatusCode::CREATED, Json(user)))
}

/// Log in with an email and password
#[utoipa::path(
    post,
    path = "/api/auth/login",
    tag = AUTH_TAG,
    request_body = LoginDto,
    responses(
        (status = 200, description = "Logged in", body = UserDto),
        (status = 401, description = "Invalid email or password", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn login(
    State(state): State<AppState>,
    session: Session,
    Json(payload): Json<LoginDto>,
) -> Result<impl IntoResponse, Error> {
    let user = AccountService::new(&state.db)
        .authenticate(&payload.email, &payload.password)
        .await?;

    start_session(&session, user.id).await?;

    Ok((StatusCode::OK, Json(user)))
}

/// Logs the user out by deleting their session
#[utoipa::path(
    post,
    path = "/api/auth/logout",
    tag = AUTH_TAG,
    responses(
        (status = 204, description = "Logged out"),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn logout(session: Session) -> Result<impl IntoResponse, Error> {
    let maybe_user_id = SessionUserId::get(&session).await?;

    // Anonymous sessions have nothing stored to delete
    if maybe_user_id.is_some() {
        session.flush().await?;
    }

    Ok(StatusCode::NO_CONTENT)
}

/// Get the logged in account
#[utoipa::path(
    get,
    path = "/api/auth/user",
    tag = AUTH_TAG,
    responses(
        (status = 200, description = "Success when retrieving user information", body = UserDto),
        (status = 404, description = "User not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_user(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, Error> {
    let user = get_user_from_session(&state, &session).await?;

    Ok((StatusCode::OK, Json(user)))
}
