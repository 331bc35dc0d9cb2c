//! Conference Routes - Conference management, search and enrichment
//!
//! HTTP handlers that delegate to ConferenceService for business logic.

use axum::{
    extract::{rejection::JsonRejection, Path, Query, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};

use super::{json_body, to_http_error};
use crate::models::{
    ConferenceResponse, CreateConferenceRequest, SearchConferencesQuery, UpdateConferenceRequest,
};
use crate::AppState;

fn to_responses(conferences: Vec<confhub::Conference>) -> Vec<ConferenceResponse> {
    conferences.into_iter().map(ConferenceResponse::from).collect()
}

/// List all Conferences
#[utoipa::path(
    get,
    path = "/api/conferences",
    responses(
        (status = 200, description = "List of all Conferences", body = Vec<ConferenceResponse>),
        (status = 500, description = "Internal server error")
    ),
    tag = "Conference"
)]
pub async fn list_conferences(
    State(state): State<AppState>,
) -> Result<Json<Vec<ConferenceResponse>>, (StatusCode, String)> {
    let conferences = state
        .conference_service
        .list_all()
        .await
        .map_err(to_http_error)?;

    Ok(Json(to_responses(conferences)))
}

/// Search Conferences by title fragment and date range
#[utoipa::path(
    get,
    path = "/api/conferences/search",
    params(SearchConferencesQuery),
    responses(
        (status = 200, description = "Matching Conferences", body = Vec<ConferenceResponse>),
        (status = 400, description = "Invalid date range"),
        (status = 500, description = "Internal server error")
    ),
    tag = "Conference"
)]
pub async fn search_conferences(
    State(state): State<AppState>,
    Query(query): Query<SearchConferencesQuery>,
) -> Result<Json<Vec<ConferenceResponse>>, (StatusCode, String)> {
    let conferences = state
        .conference_service
        .search(query.into())
        .await
        .map_err(to_http_error)?;

    Ok(Json(to_responses(conferences)))
}

/// Create new Conference
#[utoipa::path(
    post,
    path = "/api/conferences",
    request_body = CreateConferenceRequest,
    responses(
        (status = 201, description = "Conference created successfully", body = ConferenceResponse),
        (status = 400, description = "Invalid conference"),
        (status = 500, description = "Internal server error")
    ),
    tag = "Conference"
)]
pub async fn create_conference(
    State(state): State<AppState>,
    payload: Result<Json<CreateConferenceRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<ConferenceResponse>), (StatusCode, String)> {
    let payload = json_body(payload)?;
    let conference = state
        .conference_service
        .create(payload.into())
        .await
        .map_err(to_http_error)?;

    Ok((StatusCode::CREATED, Json(conference.into())))
}

/// Get Conference by ID, with its Reviews
#[utoipa::path(
    get,
    path = "/api/conferences/{id}",
    params(
        ("id" = i64, Path, description = "Conference ID")
    ),
    responses(
        (status = 200, description = "Conference found", body = ConferenceResponse),
        (status = 404, description = "Conference not found"),
        (status = 500, description = "Internal server error")
    ),
    tag = "Conference"
)]
pub async fn get_conference(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<ConferenceResponse>, (StatusCode, String)> {
    let details = state
        .conference_service
        .get(id)
        .await
        .map_err(to_http_error)?;

    Ok(Json(details.into()))
}

/// Get Conference by ID, with its Reviews and Keynote.
///
/// When the keynote service is unavailable the keynote is a placeholder
/// whose last name is "Service unavailable".
#[utoipa::path(
    get,
    path = "/api/conferences/{id}/full",
    params(
        ("id" = i64, Path, description = "Conference ID")
    ),
    responses(
        (status = 200, description = "Conference with keynote", body = ConferenceResponse),
        (status = 404, description = "Conference not found"),
        (status = 500, description = "Internal server error")
    ),
    tag = "Conference"
)]
pub async fn get_conference_full(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<ConferenceResponse>, (StatusCode, String)> {
    let details = state
        .conference_service
        .get_with_keynote(id)
        .await
        .map_err(to_http_error)?;

    Ok(Json(details.into()))
}

/// List Conferences of a type
#[utoipa::path(
    get,
    path = "/api/conferences/type/{conference_type}",
    params(
        ("conference_type" = String, Path, description = "ACADEMIC or COMMERCIAL")
    ),
    responses(
        (status = 200, description = "Conferences of the type", body = Vec<ConferenceResponse>),
        (status = 400, description = "Unknown conference type"),
        (status = 500, description = "Internal server error")
    ),
    tag = "Conference"
)]
pub async fn list_conferences_by_type(
    State(state): State<AppState>,
    Path(conference_type): Path<String>,
) -> Result<Json<Vec<ConferenceResponse>>, (StatusCode, String)> {
    let conference_type = conference_type
        .parse::<confhub::ConferenceType>()
        .map_err(|e| (StatusCode::BAD_REQUEST, e))?;

    let conferences = state
        .conference_service
        .list_by_type(conference_type)
        .await
        .map_err(to_http_error)?;

    Ok(Json(to_responses(conferences)))
}

/// List Conferences given by a Keynote
#[utoipa::path(
    get,
    path = "/api/conferences/keynote/{keynote_id}",
    params(
        ("keynote_id" = i64, Path, description = "Keynote ID")
    ),
    responses(
        (status = 200, description = "Conferences of the keynote", body = Vec<ConferenceResponse>),
        (status = 500, description = "Internal server error")
    ),
    tag = "Conference"
)]
pub async fn list_conferences_by_keynote(
    State(state): State<AppState>,
    Path(keynote_id): Path<i64>,
) -> Result<Json<Vec<ConferenceResponse>>, (StatusCode, String)> {
    let conferences = state
        .conference_service
        .list_by_keynote(keynote_id)
        .await
        .map_err(to_http_error)?;

    Ok(Json(to_responses(conferences)))
}

/// Update Conference
#[utoipa::path(
    put,
    path = "/api/conferences/{id}",
    params(
        ("id" = i64, Path, description = "Conference ID")
    ),
    request_body = UpdateConferenceRequest,
    responses(
        (status = 200, description = "Conference updated successfully", body = ConferenceResponse),
        (status = 400, description = "Invalid conference"),
        (status = 404, description = "Conference not found"),
        (status = 500, description = "Internal server error")
    ),
    tag = "Conference"
)]
pub async fn update_conference(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    payload: Result<Json<UpdateConferenceRequest>, JsonRejection>,
) -> Result<Json<ConferenceResponse>, (StatusCode, String)> {
    let payload = json_body(payload)?;
    let conference = state
        .conference_service
        .update(id, payload.into())
        .await
        .map_err(to_http_error)?;

    Ok(Json(conference.into()))
}

/// Delete Conference and its Reviews
#[utoipa::path(
    delete,
    path = "/api/conferences/{id}",
    params(
        ("id" = i64, Path, description = "Conference ID")
    ),
    responses(
        (status = 204, description = "Conference deleted successfully"),
        (status = 404, description = "Conference not found"),
        (status = 500, description = "Internal server error")
    ),
    tag = "Conference"
)]
pub async fn delete_conference(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<StatusCode, (StatusCode, String)> {
    state
        .conference_service
        .delete(id)
        .await
        .map_err(to_http_error)?;

    Ok(StatusCode::NO_CONTENT)
}

pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/api/conferences",
            get(list_conferences).post(create_conference),
        )
        .route("/api/conferences/search", get(search_conferences))
        .route(
            "/api/conferences/type/:conference_type",
            get(list_conferences_by_type),
        )
        .route(
            "/api/conferences/keynote/:keynote_id",
            get(list_conferences_by_keynote),
        )
        .route(
            "/api/conferences/:id",
            get(get_conference)
                .put(update_conference)
                .delete(delete_conference),
        )
        .route("/api/conferences/:id/full", get(get_conference_full))
}
