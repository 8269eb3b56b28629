use axum::{extract::State, http::StatusCode, response::IntoResponse};
use dioxus_logger::tracing;
use tower_sessions::Session;

use crate::{
    model::api::ErrorDto,
    server::{
        error::{auth::AuthError, Error},
        model::{app::AppState, session::user::SessionUserId},
        service::account::AccountService,
    },
};

pub static USER_TAG: &str = "user";

/// Record that the logged in user is active
///
/// Called periodically by clients for as long as a session is open.
#[utoipa::path(
    post,
    path = "/api/user/heartbeat",
    tag = USER_TAG,
    responses(
        (status = 204, description = "Activity recorded"),
        (status = 404, description = "User not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn heartbeat(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, Error> {
    let Some(user_id) = SessionUserId::get(&session).await? else {
        return Err(AuthError::UserNotInSession.into());
    };

    if !AccountService::new(&state.db)
        .record_heartbeat(user_id)
        .await?
    {
        session.clear().await;

        tracing::debug!(
            "Session cleared for user ID {} sending heartbeats but was not found in database",
            user_id
        );

        return Err(AuthError::UserNotInDatabase(user_id).into());
    }

    Ok(StatusCode::NO_CONTENT)
}
