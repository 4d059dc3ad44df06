//! Feedback endpoints. Feedback is append-only: list, fetch and submit.

use actix_web::{get, post, web, HttpResponse};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use stockroom_core::{validation, NewFeedbackItem};

use super::envelope::Envelope;
use super::error::ApiResult;
use super::schemas::{ErrorResponse, FeedbackItemResponse, FeedbackListResponse};
use super::state::HttpState;

/// Body for submitting feedback. Every field is required.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(deny_unknown_fields)]
pub struct FeedbackItemRequest {
    /// Date of the feedback (ISO 8601)
    #[schema(example = "2025-11-14")]
    pub date: String,
    /// Title of the feedback
    #[schema(example = "Great product quality")]
    pub title: String,
    /// Email of the reporter
    #[schema(example = "customer@example.com")]
    pub email: String,
    /// Detailed description of the feedback
    #[schema(example = "The product exceeded my expectations. Very satisfied with the purchase.")]
    pub description: String,
}

impl From<FeedbackItemRequest> for NewFeedbackItem {
    fn from(request: FeedbackItemRequest) -> Self {
        Self {
            date: request.date,
            title: request.title,
            email: request.email,
            description: request.description,
        }
    }
}

/// List all feedback.
#[utoipa::path(
    get,
    path = "/api/feedback",
    responses(
        (status = 200, description = "Successfully retrieved feedback items", body = FeedbackListResponse)
    ),
    tag = "Feedback",
    operation_id = "listFeedback"
)]
#[get("/api/feedback")]
pub async fn list_feedback(state: web::Data<HttpState>) -> HttpResponse {
    HttpResponse::Ok().json(Envelope::list(state.feedback.list_all()))
}

/// Get a specific feedback item.
#[utoipa::path(
    get,
    path = "/api/feedback/{id}",
    params(("id" = u64, Path, description = "Unique identifier of the feedback item", example = 1)),
    responses(
        (status = 200, description = "Successfully retrieved feedback item", body = FeedbackItemResponse),
        (status = 404, description = "Feedback item not found", body = ErrorResponse)
    ),
    tag = "Feedback",
    operation_id = "getFeedbackItem"
)]
#[get("/api/feedback/{id}")]
pub async fn get_feedback_item(
    state: web::Data<HttpState>,
    id: web::Path<u64>,
) -> ApiResult<HttpResponse> {
    let item = state.feedback.get(id.into_inner())?;
    Ok(HttpResponse::Ok().json(Envelope::data(item)))
}

/// Submit new feedback.
#[utoipa::path(
    post,
    path = "/api/feedback",
    request_body = FeedbackItemRequest,
    responses(
        (status = 201, description = "Feedback submitted successfully", body = FeedbackItemResponse),
        (status = 400, description = "Invalid input data", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    tag = "Feedback",
    operation_id = "createFeedback"
)]
#[post("/api/feedback")]
pub async fn create_feedback(
    state: web::Data<HttpState>,
    payload: web::Json<FeedbackItemRequest>,
) -> ApiResult<HttpResponse> {
    let input = NewFeedbackItem::from(payload.into_inner());
    validation::feedback(&input)?;

    // Saving may wait on the data file lock
    let item = web::block(move || state.feedback.create(input)).await??;
    Ok(HttpResponse::Created().json(Envelope::with_message(
        "Feedback submitted successfully",
        item,
    )))
}
