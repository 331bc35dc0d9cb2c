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
mod models;
mod routes;

use adapters::PgKeynoteRepository;
use application::KeynoteService;

/// Type alias for the application service with its concrete repository
pub type AppKeynoteService = KeynoteService<PgKeynoteRepository>;

/// Application state shared across all routes
#[derive(Clone)]
pub struct AppState {
    pub keynote_service: Arc<AppKeynoteService>,
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
        message: "Confhub keynote service is running".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

#[shuttle_runtime::main]
async fn main(#[shuttle_shared_db::Postgres] pool: PgPool) -> shuttle_axum::ShuttleAxum {
    tracing::info!("Confhub keynote service initializing...");

    // Run migrations
    sqlx::migrate!()
        .run(&pool)
        .await
        .context("Failed to run database migrations")?;

    tracing::info!("Database migrations completed");

    let keynote_repo = Arc::new(PgKeynoteRepository::new(pool));
    let state = AppState {
        keynote_service: Arc::new(KeynoteService::new(keynote_repo)),
    };

    // OpenAPI documentation
    let openapi = routes::swagger::ApiDoc::openapi();

    let router = Router::new()
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", openapi))
        .route("/health", get(health_check))
        .merge(routes::keynote::router())
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(CorsLayer::permissive()),
        )
        .with_state(state);

    tracing::info!("Swagger UI: /swagger-ui");
    tracing::info!("Confhub keynote service ready");

    Ok(router.into())
}
