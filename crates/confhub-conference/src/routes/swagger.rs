//! OpenAPI Documentation
//!
//! Centralized API documentation using utoipa.

use utoipa::OpenApi;

use crate::models::{
    // Conference models
    ConferenceResponse,
    ConferenceType,
    CreateConferenceRequest,
    // Review models
    CreateReviewRequest,
    // Keynote models
    KeynoteResponse,
    ReviewResponse,
    UpdateConferenceRequest,
    UpdateReviewRequest,
};

#[derive(OpenApi)]
#[openapi(
    paths(
        // Conference endpoints
        super::conference::list_conferences,
        super::conference::search_conferences,
        super::conference::create_conference,
        super::conference::get_conference,
        super::conference::get_conference_full,
        super::conference::list_conferences_by_type,
        super::conference::list_conferences_by_keynote,
        super::conference::update_conference,
        super::conference::delete_conference,
        // Review endpoints
        super::review::list_conference_reviews,
        super::review::add_review,
        super::review::get_review,
        super::review::update_review,
        super::review::delete_review,
    ),
    info(
        title = "Confhub Conference API",
        version = "0.1.0",
        description = "Conferences, their reviews and derived scores.\n\nKeynotes are fetched from the keynote service behind a circuit breaker.",
        license(name = "MIT"),
    ),
    servers(
        (url = "/", description = "Current server"),
    ),
    tags(
        (name = "Health", description = "Health check endpoints"),
        (name = "Conference", description = "Conference management, search and keynote enrichment"),
        (name = "Review", description = "Reviews and conference scoring"),
    ),
    components(
        schemas(
            // Conference
            ConferenceType,
            CreateConferenceRequest,
            UpdateConferenceRequest,
            ConferenceResponse,
            // Review
            CreateReviewRequest,
            UpdateReviewRequest,
            ReviewResponse,
            // Keynote
            KeynoteResponse,
        )
    ),
)]
pub struct ApiDoc;
