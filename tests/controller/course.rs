use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};
use entity::sea_orm_active_enums::AccountRole;
use lectern::server::controller::course::{get_courses, get_lesson};
use lectern_test_utils::prelude::*;

use super::{body_json, login_as};

/// Expect 200 with the ordered tree, first lesson active and media only for enrolled courses
#[tokio::test]
async fn returns_student_tree() -> Result<(), TestError> {
    let test = test_setup_with_content_tables!()?;
    let account = test
        .insert_account("student@example.com", AccountRole::Student)
        .await?;
    let enrolled = test.insert_course("Rust 101").await?;
    let locked = test.insert_course("Go 101").await?;
    let m1 = test.insert_module(enrolled.id, "Ownership").await?;
    let m2 = test.insert_module(enrolled.id, "Traits").await?;
    let l1 = test.insert_lesson(m1.id, "Moves").await?;
    let l2 = test.insert_lesson(m1.id, "Borrowing").await?;
    let locked_module = test.insert_module(locked.id, "Goroutines").await?;
    test.insert_lesson(locked_module.id, "Channels").await?;
    test.insert_enrollment(account.id, enrolled.id).await?;
    login_as(&test.session, account.id).await;

    let result = get_courses(State(test.state()), test.session.clone()).await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::OK);
    let body = body_json(resp).await;
    assert_eq!(body["active_lesson_id"], l1.id);
    let courses = body["courses"].as_array().unwrap();
    assert_eq!(courses[0]["id"], enrolled.id);
    assert_eq!(courses[0]["has_access"], true);
    assert_eq!(courses[0]["modules"][0]["id"], m1.id);
    assert_eq!(courses[0]["modules"][1]["id"], m2.id);
    assert_eq!(courses[0]["modules"][0]["lessons"][0]["id"], l1.id);
    assert_eq!(courses[0]["modules"][0]["lessons"][1]["id"], l2.id);
    assert_eq!(
        courses[0]["modules"][0]["lessons"][0]["video_url"],
        l1.video_url
    );
    assert_eq!(courses[1]["has_access"], false);
    assert!(courses[1]["modules"][0]["lessons"][0]["video_url"].is_null());

    Ok(())
}

/// Expect 404 not found when nobody is logged in
#[tokio::test]
async fn returns_not_found_without_session() -> Result<(), TestError> {
    let test = test_setup_with_content_tables!()?;

    let result = get_courses(State(test.state()), test.session.clone()).await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    Ok(())
}

/// Expect 200 with the video for a lesson of an enrolled course
#[tokio::test]
async fn returns_enrolled_lesson() -> Result<(), TestError> {
    let test = test_setup_with_content_tables!()?;
    let account = test
        .insert_account("student@example.com", AccountRole::Student)
        .await?;
    let course = test.insert_course("Rust 101").await?;
    let module = test.insert_module(course.id, "Ownership").await?;
    let lesson = test.insert_lesson(module.id, "Moves").await?;
    test.insert_enrollment(account.id, course.id).await?;
    login_as(&test.session, account.id).await;

    let result = get_lesson(State(test.state()), test.session.clone(), Path(lesson.id)).await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::OK);
    let body = body_json(resp).await;
    assert_eq!(body["video_url"], lesson.video_url);

    Ok(())
}

/// Expect 403 forbidden for a lesson of a course the student is not enrolled in
#[tokio::test]
async fn rejects_locked_lesson() -> Result<(), TestError> {
    let test = test_setup_with_content_tables!()?;
    let account = test
        .insert_account("student@example.com", AccountRole::Student)
        .await?;
    let course = test.insert_course("Rust 101").await?;
    let module = test.insert_module(course.id, "Ownership").await?;
    let lesson = test.insert_lesson(module.id, "Moves").await?;
    login_as(&test.session, account.id).await;

    let result = get_lesson(State(test.state()), test.session.clone(), Path(lesson.id)).await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::FORBIDDEN);

    Ok(())
}

/// Expect 404 not found for a lesson that does not exist
#[tokio::test]
async fn returns_not_found_for_nonexistent_lesson() -> Result<(), TestError> {
    let test = test_setup_with_content_tables!()?;
    let account = test
        .insert_account("student@example.com", AccountRole::Student)
        .await?;
    login_as(&test.session, account.id).await;

    let result = get_lesson(State(test.state()), test.session.clone(), Path(1)).await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    Ok(())
}
