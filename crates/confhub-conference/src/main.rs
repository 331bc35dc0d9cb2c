use anyhow::Context;
use axum::{routing::get, Json, Router};
use serde::Serialize;
use sqlx::PgPool;
use std::sync::Arc;
use tower::ServiceBuilder;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

mod adapters;
mod application;
mod config;
mod models;
mod routes;
mod seed;
mod services;

use adapters::{HttpKeynoteClient, PgConferenceRepository, PgReviewRepository};
use application::{ConferenceService, ReviewService};
use config::ServiceConfig;
use services::CircuitBreaker;

/// Type aliases for application services with concrete adapter implementations
pub type AppConferenceService =
    ConferenceService<PgConferenceRepository, PgReviewRepository, HttpKeynoteClient>;
pub type AppReviewService = ReviewService<PgConferenceRepository, PgReviewRepository>;

/// Application state shared across all routes
#[derive(Clone)]
pub struct AppState {
    pub conference_service: Arc<AppConferenceService>,
    pub review_service: Arc<AppReviewService>,
}

#[derive(Serialize)]
struct HealthCheck {
    status: String,
    message: String,
    version: String,
}

async fn health_check() -> Json<HealthCheck> {
    Json(HealthCheck {
        status: "ok".to_string(),
        message: "Confhub conference service is running".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

#[shuttle_runtime::main]
async fn main(
    #[shuttle_shared_db::Postgres] pool: PgPool,
    #[shuttle_runtime::Secrets] secrets: shuttle_runtime::SecretStore,
) -> shuttle_axum::ShuttleAxum {
    tracing::info!("Confhub conference service initializing...");

    let config =
        ServiceConfig::from_lookup(|key| secrets.get(key)).context("Invalid configuration")?;

    // Run migrations
    sqlx::migrate!()
        .run(&pool)
        .await
        .context("Failed to run database migrations")?;

    tracing::info!("Database migrations completed");

    // Keynote service client, guarded by one breaker shared by every request
    let keynote_client = HttpKeynoteClient::new(&config.keynote_service_url, config.keynote_timeout)
        .context("Failed to build keynote service client")?;
    let keynote_breaker = Arc::new(CircuitBreaker::new(
        "keynote-service",
        config.keynote_breaker,
    ));

    tracing::info!(
        "Keynote service at {} (breaker '{}' {:?}, timeout {:?}, threshold {}, cooldown {:?})",
        config.keynote_service_url,
        keynote_breaker.name(),
        keynote_breaker.state(),
        config.keynote_timeout,
        config.keynote_breaker.failure_threshold,
        config.keynote_breaker.open_cooldown
    );

    // Initialize application services
    let conference_repo = Arc::new(PgConferenceRepository::new(pool.clone()));
    let review_repo = Arc::new(PgReviewRepository::new(pool));
    let conference_service = Arc::new(ConferenceService::new(
        Arc::clone(&conference_repo),
        Arc::clone(&review_repo),
        Arc::new(keynote_client),
        keynote_breaker,
    ));
    let review_service = Arc::new(ReviewService::new(conference_repo, review_repo));

    if config.seed_sample_data {
        seed::seed_sample_data(&conference_service, &review_service)
            .await
            .context("Failed to load sample data")?;
    }

    // Create application state
    let state = AppState {
        conference_service,
        review_service,
    };

    // OpenAPI documentation
    let openapi = routes::swagger::ApiDoc::openapi();

    // Build router with shared state
    let router = Router::new()
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", openapi))
        .route("/health", get(health_check))
        .merge(routes::conference::router())
        .merge(routes::review::router())
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(CorsLayer::permissive()),
        )
        .with_state(state);

    tracing::info!("Swagger UI: /swagger-ui");
    tracing::info!("Confhub conference service ready");

    Ok(router.into())
}
