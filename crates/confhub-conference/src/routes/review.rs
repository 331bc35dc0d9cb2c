//! Review Routes - Rated comments on conferences
//!
//! Every mutation refreshes the score of the owning conference.

use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};

use super::{json_body, to_http_error};
use crate::models::{CreateReviewRequest, ReviewResponse, UpdateReviewRequest};
use crate::AppState;

/// List the Reviews of a Conference, newest first
#[utoipa::path(
    get,
    path = "/api/conferences/{id}/reviews",
    params(
        ("id" = i64, Path, description = "Conference ID")
    ),
    responses(
        (status = 200, description = "Reviews of the Conference", body = Vec<ReviewResponse>),
        (status = 404, description = "Conference not found"),
        (status = 500, description = "Internal server error")
    ),
    tag = "Review"
)]
pub async fn list_conference_reviews(
    State(state): State<AppState>,
    Path(conference_id): Path<i64>,
) -> Result<Json<Vec<ReviewResponse>>, (StatusCode, String)> {
    let reviews = state
        .review_service
        .list_for_conference(conference_id)
        .await
        .map_err(to_http_error)?;

    Ok(Json(reviews.into_iter().map(ReviewResponse::from).collect()))
}

/// Add a Review to a Conference
#[utoipa::path(
    post,
    path = "/api/conferences/{id}/reviews",
    params(
        ("id" = i64, Path, description = "Conference ID")
    ),
    request_body = CreateReviewRequest,
    responses(
        (status = 201, description = "Review added successfully", body = ReviewResponse),
        (status = 400, description = "Invalid review"),
        (status = 404, description = "Conference not found"),
        (status = 500, description = "Internal server error")
    ),
    tag = "Review"
)]
pub async fn add_review(
    State(state): State<AppState>,
    Path(conference_id): Path<i64>,
    payload: Result<Json<CreateReviewRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<ReviewResponse>), (StatusCode, String)> {
    let payload = json_body(payload)?;
    let review = state
        .review_service
        .add(conference_id, payload.date, payload.body, payload.rating)
        .await
        .map_err(to_http_error)?;

    Ok((StatusCode::CREATED, Json(review.into())))
}

/// Get Review by ID
#[utoipa::path(
    get,
    path = "/api/conferences/reviews/{id}",
    params(
        ("id" = i64, Path, description = "Review ID")
    ),
    responses(
        (status = 200, description = "Review found", body = ReviewResponse),
        (status = 404, description = "Review not found"),
        (status = 500, description = "Internal server error")
    ),
    tag = "Review"
)]
pub async fn get_review(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<ReviewResponse>, (StatusCode, String)> {
    let review = state
        .review_service
        .get(id)
        .await
        .map_err(to_http_error)?;

    Ok(Json(review.into()))
}

/// Update Review
#[utoipa::path(
    put,
    path = "/api/conferences/reviews/{id}",
    params(
        ("id" = i64, Path, description = "Review ID")
    ),
    request_body = UpdateReviewRequest,
    responses(
        (status = 200, description = "Review updated successfully", body = ReviewResponse),
        (status = 400, description = "Invalid review"),
        (status = 404, description = "Review not found"),
        (status = 500, description = "Internal server error")
    ),
    tag = "Review"
)]
pub async fn update_review(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    payload: Result<Json<UpdateReviewRequest>, JsonRejection>,
) -> Result<Json<ReviewResponse>, (StatusCode, String)> {
    let payload = json_body(payload)?;
    let review = state
        .review_service
        .update(id, payload.into())
        .await
        .map_err(to_http_error)?;

    Ok(Json(review.into()))
}

/// Delete Review
#[utoipa::path(
    delete,
    path = "/api/conferences/reviews/{id}",
    params(
        ("id" = i64, Path, description = "Review ID")
    ),
    responses(
        (status = 204, description = "Review deleted successfully"),
        (status = 404, description = "Review not found"),
        (status = 500, description = "Internal server error")
    ),
    tag = "Review"
)]
pub async fn delete_review(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<StatusCode, (StatusCode, String)> {
    state
        .review_service
        .delete(id)
        .await
        .map_err(to_http_error)?;

    Ok(StatusCode::NO_CONTENT)
}

pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/api/conferences/:id/reviews",
            get(list_conference_reviews).post(add_review),
        )
        .route(
            "/api/conferences/reviews/:id",
            get(get_review).put(update_review).delete(delete_review),
        )
}
