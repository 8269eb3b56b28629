use axum::{
    body::Bytes,
    extract::State,
    http::{Method, StatusCode},
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::{ErrorDto, MessageDto},
        webhook::FulfillmentDto,
    },
    server::{
        error::{fulfillment::FulfillmentError, Error},
        model::app::AppState,
        service::fulfillment::{payload::decode_delivery, FulfillmentOutcome, FulfillmentService},
    },
};

pub static WEBHOOK_TAG: &str = "webhook";

/// Hotmart purchase webhook
///
/// Enrolls the buyer in the course sold as the purchased product, creating an account for
/// buyers without one. Authenticated by the shared token Hotmart includes in the body.
/// Mounted for every method so that anything other than POST gets a plain text 405.
#[utoipa::path(
    post,
    path = "/api/webhook/hotmart",
    tag = WEBHOOK_TAG,
    request_body(content = String, description = "Hotmart delivery", content_type = "application/json"),
    responses(
        (status = 200, description = "Buyer enrolled, or no course is sold as the product", body = FulfillmentDto),
        (status = 400, description = "Missing email or product ID", body = ErrorDto),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 405, description = "Method not allowed", body = String),
        (status = 500, description = "Delivery could not be fulfilled", body = ErrorDto)
    ),
)]
pub async fn hotmart(
    State(state): State<AppState>,
    method: Method,
    body: Bytes,
) -> Result<impl IntoResponse, Error> {
    if method != Method::POST {
        return Err(FulfillmentError::MethodNotAllowed(method.to_string()).into());
    }

    let sale = decode_delivery(&body, &state.hotmart_hottok)?;

    let outcome = FulfillmentService::new(&state.db).fulfill(sale).await?;

    let response = match outcome {
        FulfillmentOutcome::Skipped { .. } => (
            StatusCode::OK,
            Json(MessageDto {
                message: "Course not found, skipping".to_string(),
            }),
        )
            .into_response(),
        FulfillmentOutcome::Fulfilled {
            course_title,
            user_id,
            ..
        } => (
            StatusCode::OK,
            Json(FulfillmentDto {
                message: "Success".to_string(),
                course: course_title,
                user: user_id,
            }),
        )
            .into_response(),
    };

    Ok(response)
}
