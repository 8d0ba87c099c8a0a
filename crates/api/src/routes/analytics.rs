//! Analytics endpoint handlers.
//!
//! Each handler fetches the record lists it needs from the injected
//! data source (concurrently), runs the matching pure aggregator, and
//! returns the derived rows in a single-key JSON envelope. Any upstream
//! failure is a 500 with `{ "error": ... }`; no partial results.

use analytics::{
    compute_channel_performance, compute_funnel, compute_monthly_revenue, compute_time_insights,
};
use axum::{extract::State, Json};
use std::time::Instant;
use telemetry::{health, metrics};
use tracing::{error, info};

use crate::response::{
    ApiError, ChannelsResponse, FunnelResponse, InsightsResponse, RevenueResponse,
};
use crate::state::AppState;

/// GET /analytics/funnel
pub async fn funnel_handler(
    State(state): State<AppState>,
) -> Result<Json<FunnelResponse>, ApiError> {
    let start = Instant::now();
    metrics().funnel_requests.inc();

    let (leads, bookings, interactions) = tokio::try_join!(
        state.source.leads(),
        state.source.bookings(),
        state.source.interactions(),
    )
    .map_err(fetch_failed)?;
    record_fetch(leads.len() + bookings.len() + interactions.len());

    let funnel = compute_funnel(&leads, &bookings, &interactions);

    let latency_ms = start.elapsed().as_millis() as u64;
    metrics().analytics_latency_ms.observe(latency_ms);
    info!(
        leads = leads.len(),
        bookings = bookings.len(),
        interactions = interactions.len(),
        latency_ms = latency_ms,
        "Funnel computed"
    );

    Ok(Json(FunnelResponse { funnel }))
}

/// GET /analytics/revenue
pub async fn revenue_handler(
    State(state): State<AppState>,
) -> Result<Json<RevenueResponse>, ApiError> {
    let start = Instant::now();
    metrics().revenue_requests.inc();

    let bookings = state.source.bookings().await.map_err(fetch_failed)?;
    record_fetch(bookings.len());

    let monthly_revenue = compute_monthly_revenue(&bookings);

    let latency_ms = start.elapsed().as_millis() as u64;
    metrics().analytics_latency_ms.observe(latency_ms);
    info!(
        bookings = bookings.len(),
        months = monthly_revenue.len(),
        latency_ms = latency_ms,
        "Monthly revenue computed"
    );

    Ok(Json(RevenueResponse { monthly_revenue }))
}

/// GET /analytics/channels
pub async fn channels_handler(
    State(state): State<AppState>,
) -> Result<Json<ChannelsResponse>, ApiError> {
    let start = Instant::now();
    metrics().channel_requests.inc();

    let (interactions, leads, bookings) = tokio::try_join!(
        state.source.interactions(),
        state.source.leads(),
        state.source.bookings(),
    )
    .map_err(fetch_failed)?;
    record_fetch(interactions.len() + leads.len() + bookings.len());

    let channel_performance = compute_channel_performance(&interactions, &leads, &bookings);

    let latency_ms = start.elapsed().as_millis() as u64;
    metrics().analytics_latency_ms.observe(latency_ms);
    info!(
        interactions = interactions.len(),
        latency_ms = latency_ms,
        "Channel performance computed"
    );

    Ok(Json(ChannelsResponse {
        channel_performance,
    }))
}

/// GET /analytics/time-insights
pub async fn time_insights_handler(
    State(state): State<AppState>,
) -> Result<Json<InsightsResponse>, ApiError> {
    let start = Instant::now();
    metrics().insight_requests.inc();

    let (interactions, leads) =
        tokio::try_join!(state.source.interactions(), state.source.leads())
            .map_err(fetch_failed)?;
    record_fetch(interactions.len() + leads.len());

    let insights = compute_time_insights(&interactions, &leads);

    let latency_ms = start.elapsed().as_millis() as u64;
    metrics().analytics_latency_ms.observe(latency_ms);
    info!(
        interactions = interactions.len(),
        insights = insights.len(),
        latency_ms = latency_ms,
        "Time insights computed"
    );

    Ok(Json(InsightsResponse { insights }))
}

/// Maps an upstream fetch failure to the 500 `{error}` contract.
pub(crate) fn fetch_failed(err: crm_core::Error) -> ApiError {
    error!(error = %err, "Upstream fetch failed");
    metrics().fetch_failures.inc();
    health().datasource.set_unhealthy(err.to_string());
    ApiError::from(err)
}

pub(crate) fn record_fetch(records: usize) {
    metrics().records_fetched.inc_by(records as u64);
    metrics().last_fetch_records.set(records as u64);
    health().datasource.set_healthy();
}
