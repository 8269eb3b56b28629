use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use entity::sea_orm_active_enums::AccountRole;
use lectern::{
    model::{
        content::CreateCourseDto,
        user::{LoginDto, RegisterDto},
    },
    server::{
        controller::{
            admin::create_course,
            auth::{get_user, login, logout, register},
        },
        model::session::user::SessionUserId,
        service::account::AccountService,
    },
};
use lectern_test_utils::prelude::*;

use super::{body_json, login_as};

fn register_dto(email: &str) -> RegisterDto {
    RegisterDto {
        email: email.to_string(),
        password: "long-enough".to_string(),
        display_name: Some("Maria".to_string()),
    }
}

/// Expect 201 created and a logged in session after registering
#[tokio::test]
async fn registers_and_logs_in() -> Result<(), TestError> {
    let test = test_setup_with_content_tables!()?;

    let result = register(
        State(test.state()),
        test.session.clone(),
        Json(register_dto("student@example.com")),
    )
    .await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::CREATED);
    let body = body_json(resp).await;
    assert_eq!(body["role"], "student");
    let maybe_user_id = SessionUserId::get(&test.session).await.unwrap();
    assert_eq!(maybe_user_id.map(i64::from), body["id"].as_i64());

    Ok(())
}

/// Expect 409 conflict when registering an email that is already registered
#[tokio::test]
async fn rejects_registered_email() -> Result<(), TestError> {
    let test = test_setup_with_content_tables!()?;
    test.insert_account("student@example.com", AccountRole::Student)
        .await?;

    let result = register(
        State(test.state()),
        test.session.clone(),
        Json(register_dto("student@example.com")),
    )
    .await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::CONFLICT);

    Ok(())
}

/// Expect a student session without admin access when registering with the admin email
#[tokio::test]
async fn registers_admin_email_without_admin_access() -> Result<(), TestError> {
    let test = test_setup_with_content_tables!()?;

    let registered = register(
        State(test.state()),
        test.session.clone(),
        Json(register_dto(TEST_ADMIN_EMAIL)),
    )
    .await;

    assert!(registered.is_ok());
    let resp = registered.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::CREATED);
    let body = body_json(resp).await;
    assert_eq!(body["role"], "student");

    let result = create_course(
        State(test.state()),
        test.session.clone(),
        Json(CreateCourseDto {
            title: "Rust 101".to_string(),
        }),
    )
    .await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::FORBIDDEN);

    Ok(())
}

/// Expect 200 success and a logged in session for correct credentials
#[tokio::test]
async fn logs_in_with_correct_password() -> Result<(), TestError> {
    let test = test_setup_with_content_tables!()?;
    AccountService::new(&test.state.db)
        .register("student@example.com", "long-enough", None)
        .await
        .unwrap();
    let session = test.session.clone();

    let result = login(
        State(test.state()),
        session.clone(),
        Json(LoginDto {
            email: "student@example.com".to_string(),
            password: "long-enough".to_string(),
        }),
    )
    .await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::OK);
    assert!(SessionUserId::get(&session).await.unwrap().is_some());

    Ok(())
}

/// Expect 401 unauthorized and no session for a wrong password
#[tokio::test]
async fn rejects_wrong_password() -> Result<(), TestError> {
    let test = test_setup_with_content_tables!()?;
    test.insert_account("student@example.com", AccountRole::Student)
        .await?;

    let result = login(
        State(test.state()),
        test.session.clone(),
        Json(LoginDto {
            email: "student@example.com".to_string(),
            password: "wrong-password".to_string(),
        }),
    )
    .await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
    assert!(SessionUserId::get(&test.session).await.unwrap().is_none());

    Ok(())
}

/// Expect 204 no content and a cleared session after logout
#[tokio::test]
async fn clears_session_on_logout() -> Result<(), TestError> {
    let test = test_setup_with_tables!()?;
    login_as(&test.session, 1).await;

    let result = logout(test.session.clone()).await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::NO_CONTENT);
    assert!(SessionUserId::get(&test.session).await.unwrap().is_none());

    Ok(())
}

/// Expect 204 no content when logging out without a session
#[tokio::test]
async fn succeeds_on_logout_without_session() -> Result<(), TestError> {
    let test = test_setup_with_tables!()?;

    let result = logout(test.session).await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::NO_CONTENT);

    Ok(())
}

/// Expect 200 success with the logged in account
#[tokio::test]
async fn returns_logged_in_user() -> Result<(), TestError> {
    let test = test_setup_with_content_tables!()?;
    let account = test
        .insert_account(TEST_ADMIN_EMAIL, AccountRole::Admin)
        .await?;
    login_as(&test.session, account.id).await;

    let result = get_user(State(test.state()), test.session.clone()).await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::OK);
    let body = body_json(resp).await;
    assert_eq!(body["email"], TEST_ADMIN_EMAIL);
    assert_eq!(body["role"], "admin");

    Ok(())
}

/// Expect 404 not found when nobody is logged in
#[tokio::test]
async fn returns_not_found_without_session() -> Result<(), TestError> {
    let test = test_setup_with_content_tables!()?;

    let result = get_user(State(test.state()), test.session.clone()).await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    Ok(())
}
