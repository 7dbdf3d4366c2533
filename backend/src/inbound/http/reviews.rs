//! Review HTTP handlers.
//!
//! ```text
//! POST   /api/v1/reviews
//! GET    /api/v1/reviews
//! GET    /api/v1/reviews/{id}
//! PUT    /api/v1/reviews/{id}
//! DELETE /api/v1/reviews/{id}
//! ```

use actix_web::{HttpResponse, delete, get, post, put, web};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::{AttributeMap, NewReview, Review, ReviewId, ReviewPatch};
use crate::inbound::http::ApiResult;
use crate::inbound::http::schemas::{ErrorSchema, ReviewSchema, ReviewUpdateSchema};
use crate::inbound::http::state::HttpState;
use crate::inbound::http::validation::{decode_patch, not_found, parse_path_id};

/// Request body for `POST /api/v1/reviews`.
#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateReviewRequest {
    /// Review body.
    #[schema(example = "Spotless and quiet")]
    pub text: String,
    /// Rating from 1 to 5.
    #[schema(example = 5, minimum = 1, maximum = 5)]
    pub rating: i64,
    /// Identifier of the reviewing user.
    pub user_id: String,
    /// Identifier of the reviewed place.
    pub place_id: String,
}

impl From<CreateReviewRequest> for NewReview {
    fn from(value: CreateReviewRequest) -> Self {
        Self {
            text: value.text,
            rating: value.rating,
            user_id: value.user_id,
            place_id: value.place_id,
        }
    }
}

/// Confirmation returned by `DELETE /api/v1/reviews/{id}`.
#[derive(Debug, Serialize, ToSchema)]
pub struct DeletedResponse {
    /// Human-readable confirmation.
    #[schema(example = "Review deleted successfully")]
    pub message: String,
}

/// Write a review for an existing place.
#[utoipa::path(
    post,
    path = "/api/v1/reviews",
    request_body = CreateReviewRequest,
    responses(
        (status = 201, description = "Review created", body = ReviewSchema),
        (status = 400, description = "Invalid input or unknown user/place", body = ErrorSchema)
    ),
    tags = ["reviews"],
    operation_id = "createReview"
)]
#[post("/reviews")]
pub async fn create_review(
    state: web::Data<HttpState>,
    payload: web::Json<CreateReviewRequest>,
) -> ApiResult<HttpResponse> {
    let review = state.facade.create_review(payload.into_inner().into())?;
    Ok(HttpResponse::Created().json(review))
}

/// List reviews.
#[utoipa::path(
    get,
    path = "/api/v1/reviews",
    responses((status = 200, description = "Reviews", body = [ReviewSchema])),
    tags = ["reviews"],
    operation_id = "listReviews"
)]
#[get("/reviews")]
pub async fn list_reviews(state: web::Data<HttpState>) -> web::Json<Vec<Review>> {
    web::Json(state.facade.get_all_reviews())
}

/// Fetch one review.
#[utoipa::path(
    get,
    path = "/api/v1/reviews/{id}",
    params(("id" = String, Path, description = "Review identifier")),
    responses(
        (status = 200, description = "Review", body = ReviewSchema),
        (status = 404, description = "Review not found", body = ErrorSchema)
    ),
    tags = ["reviews"],
    operation_id = "getReview"
)]
#[get("/reviews/{id}")]
pub async fn get_review(
    state: web::Data<HttpState>,
    path: web::Path<String>,
) -> ApiResult<web::Json<Review>> {
    let id: ReviewId = parse_path_id(&path, "Review")?;
    let review = state
        .facade
        .get_review(id)
        .ok_or_else(|| not_found("Review"))?;
    Ok(web::Json(review))
}

/// Change a review's text or rating.
#[utoipa::path(
    put,
    path = "/api/v1/reviews/{id}",
    params(("id" = String, Path, description = "Review identifier")),
    request_body = ReviewUpdateSchema,
    responses(
        (status = 200, description = "Updated review", body = ReviewSchema),
        (status = 400, description = "Invalid input", body = ErrorSchema),
        (status = 404, description = "Review not found", body = ErrorSchema)
    ),
    tags = ["reviews"],
    operation_id = "updateReview"
)]
#[put("/reviews/{id}")]
pub async fn update_review(
    state: web::Data<HttpState>,
    path: web::Path<String>,
    payload: web::Json<AttributeMap>,
) -> ApiResult<web::Json<Review>> {
    let id: ReviewId = parse_path_id(&path, "Review")?;
    let patch: ReviewPatch = decode_patch(&payload)?;
    let review = state
        .facade
        .update_review(id, patch)?
        .ok_or_else(|| not_found("Review"))?;
    Ok(web::Json(review))
}

/// Delete a review and remove it from its place.
#[utoipa::path(
    delete,
    path = "/api/v1/reviews/{id}",
    params(("id" = String, Path, description = "Review identifier")),
    responses(
        (status = 200, description = "Review deleted", body = DeletedResponse),
        (status = 404, description = "Review not found", body = ErrorSchema)
    ),
    tags = ["reviews"],
    operation_id = "deleteReview"
)]
#[delete("/reviews/{id}")]
pub async fn delete_review(
    state: web::Data<HttpState>,
    path: web::Path<String>,
) -> ApiResult<web::Json<DeletedResponse>> {
    let id: ReviewId = parse_path_id(&path, "Review")?;
    if !state.facade.delete_review(id) {
        return Err(not_found("Review"));
    }
    Ok(web::Json(DeletedResponse {
        message: "Review deleted successfully".to_owned(),
    }))
}
