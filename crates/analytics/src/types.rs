//! Derived analytics records returned to the dashboard.
//!
//! Field names (camelCase) are the wire format the presentation layer
//! charts from; these are produced fresh on every call and never stored.

use serde::{Deserialize, Serialize};

/// One funnel stage row. Exactly five are produced per computation, in
/// fixed order New, Contacted, Qualified, Booked, Completed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FunnelStage {
    /// Stage name.
    pub stage: String,
    /// Records in this stage; stages are inclusion filters, not a
    /// partition, so counts across stages can overlap.
    pub count: usize,
    /// Percentage of the New stage count (0-100).
    pub percentage: f64,
    /// Percentage drop from the immediately preceding stage (0-100;
    /// negative when a later stage outgrows its predecessor).
    pub dropoff: f64,
    /// Estimated revenue for the stage's records.
    pub revenue: f64,
}

/// Monthly revenue rollup row.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MonthlyRevenue {
    /// Display label, e.g. "Jul 2024".
    pub month: String,
    /// Calendar month number (1-12).
    pub month_num: u32,
    pub year: i32,
    /// Revenue from Confirmed bookings.
    pub confirmed: f64,
    /// Revenue from Pending bookings.
    pub pending: f64,
    /// Revenue from all bookings regardless of status.
    pub projected: f64,
    /// Same as projected; kept as its own field for the chart layer.
    /// Can exceed confirmed + pending when Cancelled bookings exist.
    pub total: f64,
}

/// Per-channel conversion performance row. Exactly three are produced
/// per computation: Call, Chat, Web Form.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChannelPerformance {
    pub channel: String,
    /// Interactions on this channel.
    pub total: usize,
    /// Conversions attributed to this channel.
    pub converted: usize,
    /// converted / total × 100 (0 when total is 0).
    pub conversion_rate: f64,
    /// total_revenue / converted (0 when converted is 0).
    pub avg_revenue: f64,
    pub total_revenue: f64,
}

/// A mined activity pattern.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TimeInsight {
    /// Short pattern key, e.g. "Friday", "14:00", "Friday 14:00".
    pub pattern: String,
    /// Human-readable description for the dashboard.
    pub description: String,
    /// Interactions matching the pattern's top event type.
    pub frequency: usize,
    /// frequency / total dated interactions × 100.
    pub percentage: f64,
    /// Up to three example customer names.
    pub examples: Vec<String>,
}
