use axum::{extract::State, http::StatusCode, response::IntoResponse};
use entity::sea_orm_active_enums::AccountRole;
use lectern::server::{
    controller::user::heartbeat, data::account::AccountRepository,
    model::session::user::SessionUserId,
};
use lectern_test_utils::prelude::*;

use super::login_as;

/// Expect 204 no content and a recorded last seen time for a logged in user
#[tokio::test]
async fn records_last_seen() -> Result<(), TestError> {
    let test = test_setup_with_content_tables!()?;
    let account = test
        .insert_account("student@example.com", AccountRole::Student)
        .await?;
    login_as(&test.session, account.id).await;

    let result = heartbeat(State(test.state()), test.session.clone()).await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::NO_CONTENT);
    let account = AccountRepository::new(&test.state.db)
        .get_by_id(account.id)
        .await?
        .unwrap();
    assert!(account.last_seen_at.is_some());

    Ok(())
}

/// Expect 404 not found when nobody is logged in
#[tokio::test]
async fn returns_not_found_without_session() -> Result<(), TestError> {
    let test = test_setup_with_content_tables!()?;

    let result = heartbeat(State(test.state()), test.session.clone()).await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    Ok(())
}

/// Expect 404 not found and a cleared session when the account no longer exists
#[tokio::test]
async fn clears_session_for_deleted_account() -> Result<(), TestError> {
    let test = test_setup_with_content_tables!()?;
    login_as(&test.session, 1).await;

    let result = heartbeat(State(test.state()), test.session.clone()).await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    assert!(SessionUserId::get(&test.session).await.unwrap().is_none());

    Ok(())
}
