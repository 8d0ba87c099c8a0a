//! API routes.

pub mod analytics;
pub mod digest;
pub mod health;

use axum::{routing::get, Router};
use tower_http::{
    compression::CompressionLayer,
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use crate::state::AppState;

/// Creates the API router.
pub fn router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/analytics/funnel", get(analytics::funnel_handler))
        .route("/analytics/revenue", get(analytics::revenue_handler))
        .route("/analytics/channels", get(analytics::channels_handler))
        .route(
            "/analytics/time-insights",
            get(analytics::time_insights_handler),
        )
        .route("/analytics/digest", get(digest::digest_handler))
        .route("/health", get(health::health_handler))
        .route("/health/ready", get(health::ready_handler))
        .route("/health/live", get(health::live_handler))
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}
