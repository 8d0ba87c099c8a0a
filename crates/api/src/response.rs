//! Standardized API responses.
//!
//! Each analytics endpoint wraps its rows in a single-key envelope the
//! dashboard charts from; failures are always a bare `{ "error": ... }`
//! body, no partial results.

use analytics::{ChannelPerformance, FunnelStage, MonthlyRevenue, TimeInsight};
use assist::Digest;
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize)]
pub struct FunnelResponse {
    pub funnel: Vec<FunnelStage>,
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RevenueResponse {
    pub monthly_revenue: Vec<MonthlyRevenue>,
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChannelsResponse {
    pub channel_performance: Vec<ChannelPerformance>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct InsightsResponse {
    pub insights: Vec<TimeInsight>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct DigestResponse {
    pub digest: Digest,
}

/// Health check response.
#[derive(Debug, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub datasource_connected: bool,
    pub assist_available: bool,
    pub requests_served: u64,
}

/// Error response body: exactly `{ "error": string }`.
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}

/// API error type.
pub struct ApiError {
    pub status: StatusCode,
    pub message: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (
            self.status,
            Json(ErrorResponse {
                error: self.message,
            }),
        )
            .into_response()
    }
}

impl From<crm_core::Error> for ApiError {
    fn from(err: crm_core::Error) -> Self {
        let status = StatusCode::from_u16(err.http_status())
            .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
        Self {
            status,
            message: err.to_string(),
        }
    }
}
