use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use entity::sea_orm_active_enums::AccountRole;
use lectern::{
    model::content::{CreateCourseDto, CreateLessonDto, CreateModuleDto, UpdateCourseDto},
    server::controller::admin::{
        create_course, create_lesson, create_module, delete_course, delete_lesson,
        delete_module, get_admin_courses, update_course,
    },
};
use lectern_test_utils::prelude::*;

use super::{body_json, login_as};

/// Content tables with an admin logged in
async fn setup_admin() -> Result<TestSetup, TestError> {
    let test = test_setup_with_content_tables!()?;
    let admin = test
        .insert_account(TEST_ADMIN_EMAIL, AccountRole::Admin)
        .await?;
    login_as(&test.session, admin.id).await;

    Ok(test)
}

/// Expect 200 with courses and modules but no lessons
#[tokio::test]
async fn returns_admin_tree() -> Result<(), TestError> {
    let test = setup_admin().await?;
    let course = test.insert_course("Rust 101").await?;
    let module = test.insert_module(course.id, "Ownership").await?;
    test.insert_lesson(module.id, "Moves").await?;

    let result = get_admin_courses(State(test.state()), test.session.clone()).await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::OK);
    let body = body_json(resp).await;
    assert_eq!(body[0]["id"], course.id);
    assert_eq!(body[0]["modules"][0]["id"], module.id);
    assert!(body[0]["modules"][0].get("lessons").is_none());

    Ok(())
}

/// Expect 403 forbidden for a student
#[tokio::test]
async fn rejects_student() -> Result<(), TestError> {
    let test = test_setup_with_content_tables!()?;
    let student = test
        .insert_account("student@example.com", AccountRole::Student)
        .await?;
    login_as(&test.session, student.id).await;

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
    let body = body_json(resp).await;
    assert_eq!(body["error"], "Forbidden");

    Ok(())
}

/// Expect 201 created with the refreshed tree after creating a course
#[tokio::test]
async fn creates_course() -> Result<(), TestError> {
    let test = setup_admin().await?;

    let result = create_course(
        State(test.state()),
        test.session.clone(),
        Json(CreateCourseDto {
            title: "Rust 101".to_string(),
        }),
    )
    .await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::CREATED);
    let body = body_json(resp).await;
    assert_eq!(body[0]["title"], "Rust 101");

    Ok(())
}

/// Expect 400 bad request for a blank course title
#[tokio::test]
async fn rejects_blank_course_title() -> Result<(), TestError> {
    let test = setup_admin().await?;

    let result = create_course(
        State(test.state()),
        test.session.clone(),
        Json(CreateCourseDto {
            title: " ".to_string(),
        }),
    )
    .await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    Ok(())
}

/// Expect 200 with the refreshed tree showing the new product mapping
#[tokio::test]
async fn updates_course() -> Result<(), TestError> {
    let test = setup_admin().await?;
    let course = test.insert_course("Rust 101").await?;

    let result = update_course(
        State(test.state()),
        test.session.clone(),
        Path(course.id),
        Json(UpdateCourseDto {
            hotmart_id: Some("4242".to_string()),
            ..Default::default()
        }),
    )
    .await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::OK);
    let body = body_json(resp).await;
    assert_eq!(body[0]["hotmart_id"], "4242");

    Ok(())
}

/// Expect 409 conflict when the product is already mapped to another course
#[tokio::test]
async fn rejects_duplicate_hotmart_id() -> Result<(), TestError> {
    let test = setup_admin().await?;
    test.insert_course_with_hotmart_id("Rust 101", Some("4242"))
        .await?;
    let other = test.insert_course("Go 101").await?;

    let result = update_course(
        State(test.state()),
        test.session.clone(),
        Path(other.id),
        Json(UpdateCourseDto {
            hotmart_id: Some("4242".to_string()),
            ..Default::default()
        }),
    )
    .await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::CONFLICT);

    Ok(())
}

/// Expect the deleted course and its modules to be gone from the refreshed tree
#[tokio::test]
async fn deletes_course() -> Result<(), TestError> {
    let test = setup_admin().await?;
    let course = test.insert_course("Rust 101").await?;
    test.insert_module(course.id, "Ownership").await?;

    let result = delete_course(State(test.state()), test.session.clone(), Path(course.id)).await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::OK);
    let body = body_json(resp).await;
    assert_eq!(body.as_array().map(Vec::len), Some(0));

    Ok(())
}

/// Expect 404 not found when deleting a course that does not exist
#[tokio::test]
async fn returns_not_found_deleting_nonexistent_course() -> Result<(), TestError> {
    let test = setup_admin().await?;

    let result = delete_course(State(test.state()), test.session.clone(), Path(1)).await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    Ok(())
}

/// Expect 201 created with modules listed in creation order
#[tokio::test]
async fn creates_module() -> Result<(), TestError> {
    let test = setup_admin().await?;
    let course = test.insert_course("Rust 101").await?;
    let existing = test.insert_module(course.id, "Ownership").await?;

    let result = create_module(
        State(test.state()),
        test.session.clone(),
        Json(CreateModuleDto {
            title: "Traits".to_string(),
            course_id: course.id,
        }),
    )
    .await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::CREATED);
    let body = body_json(resp).await;
    assert_eq!(body[0]["modules"][0]["id"], existing.id);
    assert_eq!(body[0]["modules"][1]["title"], "Traits");

    Ok(())
}

/// Expect 404 not found when creating a module for a course that does not exist
#[tokio::test]
async fn rejects_module_for_nonexistent_course() -> Result<(), TestError> {
    let test = setup_admin().await?;

    let result = create_module(
        State(test.state()),
        test.session.clone(),
        Json(CreateModuleDto {
            title: "Traits".to_string(),
            course_id: 1,
        }),
    )
    .await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    Ok(())
}

/// Expect the deleted module to be gone from the refreshed tree
#[tokio::test]
async fn deletes_module() -> Result<(), TestError> {
    let test = setup_admin().await?;
    let course = test.insert_course("Rust 101").await?;
    let module = test.insert_module(course.id, "Ownership").await?;

    let result = delete_module(State(test.state()), test.session.clone(), Path(module.id)).await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::OK);
    let body = body_json(resp).await;
    assert_eq!(body[0]["modules"].as_array().map(Vec::len), Some(0));

    Ok(())
}

/// Expect 201 created when adding a lesson and 200 when deleting it
#[tokio::test]
async fn creates_and_deletes_lesson() -> Result<(), TestError> {
    let test = setup_admin().await?;
    let course = test.insert_course("Rust 101").await?;
    let module = test.insert_module(course.id, "Ownership").await?;

    let created = create_lesson(
        State(test.state()),
        test.session.clone(),
        Json(CreateLessonDto {
            module_id: module.id,
            title: "Moves".to_string(),
            video_url: "https://videos.example.com/moves".to_string(),
            duration: Some("08:15".to_string()),
            description: String::new(),
            resources: None,
        }),
    )
    .await;

    assert!(created.is_ok());
    let resp = created.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::CREATED);

    let lesson = test.insert_lesson(module.id, "Borrowing").await?;
    let deleted = delete_lesson(State(test.state()), test.session.clone(), Path(lesson.id)).await;

    assert!(deleted.is_ok());
    let resp = deleted.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::OK);

    Ok(())
}
