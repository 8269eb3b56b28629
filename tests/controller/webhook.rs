use axum::{
    body::{to_bytes, Bytes},
    extract::State,
    http::{Method, StatusCode},
    response::IntoResponse,
};
use entity::sea_orm_active_enums::AccountRole;
use lectern::server::{
    controller::webhook::hotmart,
    error::{fulfillment::FulfillmentError, Error},
};
use lectern_test_utils::prelude::*;
use serde_json::json;

use super::body_json;

fn delivery(value: serde_json::Value) -> Bytes {
    Bytes::from(value.to_string())
}

fn flat_delivery(hottok: &str, email: &str, prod: &str) -> Bytes {
    delivery(json!({
        "hottok": hottok,
        "email": email,
        "prod": prod,
        "name": "Maria"
    }))
}

/// Expect 200 success with course title and user ID for a new buyer
#[tokio::test]
async fn enrolls_new_buyer() -> Result<(), TestError> {
    let test = test_setup_with_content_tables!()?;
    let course = test
        .insert_course_with_hotmart_id("Rust 101", Some("4242"))
        .await?;

    let result = hotmart(
        State(test.state()),
        Method::POST,
        flat_delivery(TEST_HOTTOK, "buyer@example.com", "4242"),
    )
    .await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::OK);
    let body = body_json(resp).await;
    assert_eq!(body["message"], "Success");
    assert_eq!(body["course"], course.title);
    assert!(body["user"].is_i64());
    assert_eq!(test.count_accounts_by_email("buyer@example.com").await?, 1);
    assert_eq!(test.count_enrollments().await?, 1);

    Ok(())
}

/// Expect 200 with exactly one account and enrollment when a delivery is replayed
#[tokio::test]
async fn converges_on_replayed_delivery() -> Result<(), TestError> {
    let test = test_setup_with_content_tables!()?;
    test.insert_course_with_hotmart_id("Rust 101", Some("4242"))
        .await?;

    for _ in 0..2 {
        let result = hotmart(
            State(test.state()),
            Method::POST,
            flat_delivery(TEST_HOTTOK, "buyer@example.com", "4242"),
        )
        .await;

        assert!(result.is_ok());
        let resp = result.unwrap().into_response();
        assert_eq!(resp.status(), StatusCode::OK);
    }

    assert_eq!(test.count_accounts_by_email("buyer@example.com").await?, 1);
    assert_eq!(test.count_enrollments().await?, 1);

    Ok(())
}

/// Expect 200 for a webhook v2 delivery carrying its token under `data` and a numeric product
#[tokio::test]
async fn accepts_nested_delivery() -> Result<(), TestError> {
    let test = test_setup_with_content_tables!()?;
    test.insert_account("buyer@example.com", AccountRole::Student)
        .await?;
    test.insert_course_with_hotmart_id("Rust 101", Some("4242"))
        .await?;

    let result = hotmart(
        State(test.state()),
        Method::POST,
        delivery(json!({
            "event": "PURCHASE_APPROVED",
            "data": {
                "hottok": TEST_HOTTOK,
                "buyer": { "email": "BUYER@example.com" },
                "product": { "id": 4242 }
            }
        })),
    )
    .await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(test.count_accounts_by_email("buyer@example.com").await?, 1);
    assert_eq!(test.count_enrollments().await?, 1);

    Ok(())
}

/// Expect 200 with a skip message and no writes for a product without a course
#[tokio::test]
async fn skips_unmapped_product() -> Result<(), TestError> {
    let test = test_setup_with_content_tables!()?;

    let result = hotmart(
        State(test.state()),
        Method::POST,
        flat_delivery(TEST_HOTTOK, "buyer@example.com", "9999"),
    )
    .await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::OK);
    let body = body_json(resp).await;
    assert_eq!(body["message"], "Course not found, skipping");
    assert_eq!(test.count_accounts_by_email("buyer@example.com").await?, 0);
    assert_eq!(test.count_enrollments().await?, 0);

    Ok(())
}

/// Expect 401 and no writes for a delivery with the wrong token
#[tokio::test]
async fn rejects_wrong_token() -> Result<(), TestError> {
    let test = test_setup_with_content_tables!()?;
    test.insert_course_with_hotmart_id("Rust 101", Some("4242"))
        .await?;

    let result = hotmart(
        State(test.state()),
        Method::POST,
        flat_delivery("not-the-secret", "buyer@example.com", "4242"),
    )
    .await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
    let body = body_json(resp).await;
    assert_eq!(body["error"], "Unauthorized");
    assert_eq!(test.count_accounts_by_email("buyer@example.com").await?, 0);
    assert_eq!(test.count_enrollments().await?, 0);

    Ok(())
}

/// Expect 401 for a body that is not JSON
#[tokio::test]
async fn rejects_non_json_body() -> Result<(), TestError> {
    let test = test_setup_with_content_tables!()?;

    let result = hotmart(
        State(test.state()),
        Method::POST,
        Bytes::from_static(b"email=buyer%40example.com&prod=4242"),
    )
    .await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);

    Ok(())
}

/// Expect 400 and no writes for a delivery without a buyer email
#[tokio::test]
async fn rejects_missing_email() -> Result<(), TestError> {
    let test = test_setup_with_content_tables!()?;
    test.insert_course_with_hotmart_id("Rust 101", Some("4242"))
        .await?;

    let result = hotmart(
        State(test.state()),
        Method::POST,
        delivery(json!({ "hottok": TEST_HOTTOK, "prod": "4242" })),
    )
    .await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body = body_json(resp).await;
    assert_eq!(body["error"], "Missing email or product ID");
    assert_eq!(test.count_enrollments().await?, 0);

    Ok(())
}

/// Expect 405 with a plain text body for methods other than POST
#[tokio::test]
async fn rejects_other_methods() -> Result<(), TestError> {
    let test = test_setup_with_content_tables!()?;

    let result = hotmart(
        State(test.state()),
        Method::GET,
        flat_delivery(TEST_HOTTOK, "buyer@example.com", "4242"),
    )
    .await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::METHOD_NOT_ALLOWED);
    let bytes = to_bytes(resp.into_body(), usize::MAX).await.unwrap();
    assert_eq!(&bytes[..], b"Method not allowed");

    Ok(())
}

/// Expect 500 internal server error when required database tables dont exist
#[tokio::test]
async fn error_when_required_tables_dont_exist() -> Result<(), TestError> {
    let test = test_setup_with_tables!()?;

    let result = hotmart(
        State(test.state()),
        Method::POST,
        flat_delivery(TEST_HOTTOK, "buyer@example.com", "4242"),
    )
    .await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let body = body_json(resp).await;
    assert_eq!(body["error"], "Internal Server Error");

    Ok(())
}

/// Expect 500 with the enrollment failure message and no account left behind when the
/// enrollment cannot be written
#[tokio::test]
async fn error_when_enrollment_cannot_be_written() -> Result<(), TestError> {
    let test = test_setup_with_tables!(
        entity::prelude::Account,
        entity::prelude::Course,
        entity::prelude::CourseModule,
        entity::prelude::Lesson
    )?;
    test.insert_course_with_hotmart_id("Rust 101", Some("4242"))
        .await?;

    let result = hotmart(
        State(test.state()),
        Method::POST,
        flat_delivery(TEST_HOTTOK, "buyer@example.com", "4242"),
    )
    .await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let body = body_json(resp).await;
    assert_eq!(body["error"], "Enrollment failed");
    assert_eq!(test.count_accounts_by_email("buyer@example.com").await?, 0);

    Ok(())
}

/// Expect 500 with the retrieval failure message when an account collides with a missed
/// email lookup
#[tokio::test]
async fn error_body_for_consistency_conflict() -> Result<(), TestError> {
    let error = Error::from(FulfillmentError::ConsistencyConflict(
        "buyer@example.com".to_string(),
    ));

    let resp = error.into_response();

    assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let body = body_json(resp).await;
    assert_eq!(body["error"], "User exists but retrieval failed");

    Ok(())
}
