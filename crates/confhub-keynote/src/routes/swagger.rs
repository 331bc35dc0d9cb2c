//! OpenAPI Documentation
//!
//! Centralized API documentation using utoipa.

use utoipa::OpenApi;

use crate::models::{KeynoteRequest, KeynoteResponse};

#[derive(OpenApi)]
#[openapi(
    paths(
        super::keynote::list_keynotes,
        super::keynote::create_keynote,
        super::keynote::get_keynote,
        super::keynote::update_keynote,
        super::keynote::delete_keynote,
    ),
    info(
        title = "Confhub Keynote API",
        version = "0.1.0",
        description = "Keynote speakers referenced by conferences.",
        license(name = "MIT"),
    ),
    servers(
        (url = "/", description = "Current server"),
    ),
    tags(
        (name = "Health", description = "Health check endpoints"),
        (name = "Keynote", description = "Keynote speaker management"),
    ),
    components(
        schemas(
            KeynoteRequest,
            KeynoteResponse,
        )
    ),
)]
pub struct ApiDoc;
