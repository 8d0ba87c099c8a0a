//! Manager digest endpoint.

use analytics::{
    compute_channel_performance, compute_funnel, compute_monthly_revenue, compute_time_insights,
};
use assist::{build_digest, DigestInput};
use axum::{extract::State, Json};
use std::time::Instant;
use telemetry::metrics;
use tracing::info;

use crate::response::{ApiError, DigestResponse};
use crate::routes::analytics::{fetch_failed, record_fetch};
use crate::state::AppState;

/// GET /analytics/digest
///
/// Runs all four aggregators over a single fetch and hands the results
/// to the digest builder; the rule-based fallback covers an absent or
/// failing generator, so this endpoint only errors on upstream fetches.
pub async fn digest_handler(
    State(state): State<AppState>,
) -> Result<Json<DigestResponse>, ApiError> {
    let start = Instant::now();
    metrics().digest_requests.inc();

    let (interactions, leads, bookings) = tokio::try_join!(
        state.source.interactions(),
        state.source.leads(),
        state.source.bookings(),
    )
    .map_err(fetch_failed)?;
    record_fetch(interactions.len() + leads.len() + bookings.len());

    let funnel = compute_funnel(&leads, &bookings, &interactions);
    let monthly = compute_monthly_revenue(&bookings);
    let channels = compute_channel_performance(&interactions, &leads, &bookings);
    let insights = compute_time_insights(&interactions, &leads);

    let digest = build_digest(
        state.generator.as_deref(),
        DigestInput {
            funnel: &funnel,
            monthly: &monthly,
            channels: &channels,
            insights: &insights,
        },
    )
    .await;

    if digest.source == "fallback" {
        metrics().digest_fallbacks.inc();
    }

    let latency_ms = start.elapsed().as_millis() as u64;
    metrics().analytics_latency_ms.observe(latency_ms);
    info!(
        source = %digest.source,
        highlights = digest.highlights.len(),
        latency_ms = latency_ms,
        "Digest built"
    );

    Ok(Json(DigestResponse { digest }))
}
