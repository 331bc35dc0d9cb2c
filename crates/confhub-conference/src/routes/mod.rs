//! Confhub Conference API Routes
//!
//! - /api/conferences - Conference management and search
//! - /api/conferences/:id/full - Conference with its keynote
//! - /api/conferences/:id/reviews - Reviews of a conference
//! - /api/conferences/reviews/:id - Review management

use axum::{extract::rejection::JsonRejection, http::StatusCode, Json};
use confhub::DomainError;

pub mod conference;
pub mod review;
pub mod swagger;

/// Map a domain error to the HTTP status and message returned to the caller
pub fn to_http_error(e: DomainError) -> (StatusCode, String) {
    let status = match &e {
        DomainError::NotFound { .. } => StatusCode::NOT_FOUND,
        DomainError::Validation(_) => StatusCode::BAD_REQUEST,
        DomainError::Conflict(_) => StatusCode::CONFLICT,
        DomainError::DownstreamUnavailable(_) => StatusCode::SERVICE_UNAVAILABLE,
        DomainError::Repository(_) => StatusCode::INTERNAL_SERVER_ERROR,
    };

    if !e.is_client_error() {
        tracing::error!("Request failed: {}", e);
    }

    (status, e.to_string())
}

/// Unwrap a JSON body. Missing fields and mistyped values are bad requests.
pub fn json_body<T>(payload: Result<Json<T>, JsonRejection>) -> Result<T, (StatusCode, String)> {
    match payload {
        Ok(Json(value)) => Ok(value),
        Err(rejection) => {
            let status = match rejection.status() {
                StatusCode::UNPROCESSABLE_ENTITY => StatusCode::BAD_REQUEST,
                status => status,
            };
            Err((status, rejection.body_text()))
        }
    }
}
