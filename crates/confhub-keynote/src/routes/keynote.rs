//! Keynote Routes - Speaker management
//!
//! HTTP handlers that delegate to KeynoteService for business logic.

use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};

use super::{json_body, to_http_error};
use crate::models::{KeynoteRequest, KeynoteResponse};
use crate::AppState;

/// List all Keynotes
#[utoipa::path(
    get,
    path = "/api/keynotes",
    responses(
        (status = 200, description = "List of all Keynotes", body = Vec<KeynoteResponse>),
        (status = 500, description = "Internal server error")
    ),
    tag = "Keynote"
)]
pub async fn list_keynotes(
    State(state): State<AppState>,
) -> Result<Json<Vec<KeynoteResponse>>, (StatusCode, String)> {
    let keynotes = state
        .keynote_service
        .list_all()
        .await
        .map_err(to_http_error)?;

    Ok(Json(keynotes.into_iter().map(KeynoteResponse::from).collect()))
}

/// Create new Keynote
#[utoipa::path(
    post,
    path = "/api/keynotes",
    request_body = KeynoteRequest,
    responses(
        (status = 201, description = "Keynote created successfully", body = KeynoteResponse),
        (status = 400, description = "Missing or invalid field"),
        (status = 409, description = "Email already in use"),
        (status = 500, description = "Internal server error")
    ),
    tag = "Keynote"
)]
pub async fn create_keynote(
    State(state): State<AppState>,
    payload: Result<Json<KeynoteRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<KeynoteResponse>), (StatusCode, String)> {
    let payload = json_body(payload)?;
    let keynote = state
        .keynote_service
        .create(payload.into())
        .await
        .map_err(to_http_error)?;

    Ok((StatusCode::CREATED, Json(keynote.into())))
}

/// Get Keynote by ID
#[utoipa::path(
    get,
    path = "/api/keynotes/{id}",
    params(
        ("id" = i64, Path, description = "Keynote ID")
    ),
    responses(
        (status = 200, description = "Keynote found", body = KeynoteResponse),
        (status = 404, description = "Keynote not found"),
        (status = 500, description = "Internal server error")
    ),
    tag = "Keynote"
)]
pub async fn get_keynote(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<KeynoteResponse>, (StatusCode, String)> {
    let keynote = state
        .keynote_service
        .get(id)
        .await
        .map_err(to_http_error)?;

    Ok(Json(keynote.into()))
}

/// Replace Keynote
#[utoipa::path(
    put,
    path = "/api/keynotes/{id}",
    params(
        ("id" = i64, Path, description = "Keynote ID")
    ),
    request_body = KeynoteRequest,
    responses(
        (status = 200, description = "Keynote updated successfully", body = KeynoteResponse),
        (status = 400, description = "Missing or invalid field"),
        (status = 404, description = "Keynote not found"),
        (status = 409, description = "Email already in use"),
        (status = 500, description = "Internal server error")
    ),
    tag = "Keynote"
)]
pub async fn update_keynote(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    payload: Result<Json<KeynoteRequest>, JsonRejection>,
) -> Result<Json<KeynoteResponse>, (StatusCode, String)> {
    let payload = json_body(payload)?;
    let keynote = state
        .keynote_service
        .update(id, payload.into())
        .await
        .map_err(to_http_error)?;

    Ok(Json(keynote.into()))
}

/// Delete Keynote
#[utoipa::path(
    delete,
    path = "/api/keynotes/{id}",
    params(
        ("id" = i64, Path, description = "Keynote ID")
    ),
    responses(
        (status = 204, description = "Keynote deleted successfully"),
        (status = 404, description = "Keynote not found"),
        (status = 500, description = "Internal server error")
    ),
    tag = "Keynote"
)]
pub async fn delete_keynote(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<StatusCode, (StatusCode, String)> {
    state
        .keynote_service
        .delete(id)
        .await
        .map_err(to_http_error)?;

    Ok(StatusCode::NO_CONTENT)
}

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/api/keynotes", get(list_keynotes).post(create_keynote))
        .route(
            "/api/keynotes/:id",
            get(get_keynote).put(update_keynote).delete(delete_keynote),
        )
}
