//! CRM input records as supplied by the upstream data-fetch collaborator.
//!
//! Field names follow the upstream sheet JSON (camelCase). The analytics
//! engine treats these as read-only; nothing here is ever mutated or
//! persisted by this service.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::timeparse;

/// Status of a customer interaction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum InteractionStatus {
    Completed,
    Missed,
    #[serde(rename = "In Progress")]
    InProgress,
}

/// The medium of a customer interaction.
///
/// `WebForm` is recognized by every aggregator but never produced by the
/// current fetchers; it still gets a row in channel performance output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Channel {
    Call,
    Chat,
    #[serde(rename = "Web Form")]
    WebForm,
}

impl Channel {
    /// All channels in the fixed reporting order.
    pub const ALL: [Channel; 3] = [Channel::Call, Channel::Chat, Channel::WebForm];

    /// Returns the display name.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Call => "Call",
            Self::Chat => "Chat",
            Self::WebForm => "Web Form",
        }
    }
}

/// A logged call or chat with a customer.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct Interaction {
    #[serde(default)]
    pub id: String,

    #[validate(length(min = 1, max = 200))]
    pub customer_name: String,

    /// Phone number or email, free-form.
    #[validate(length(max = 200))]
    pub contact: String,

    /// When the interaction happened; tolerantly coerced, `None` when
    /// the upstream value is missing or unparseable.
    #[serde(default, with = "timeparse::flexible")]
    pub timestamp: Option<DateTime<Utc>>,

    pub status: InteractionStatus,

    pub channel: Channel,

    #[validate(length(max = 20000))]
    #[serde(default)]
    pub transcript: String,

    #[serde(default)]
    pub tags: Vec<String>,

    /// Event-type label captured during the interaction, if any.
    #[validate(length(max = 100))]
    pub event_type: Option<String>,

    #[validate(range(min = 1, max = 100_000))]
    pub headcount: Option<u32>,

    #[validate(length(max = 2000))]
    pub description: Option<String>,
}

/// Lead pipeline status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LeadStatus {
    New,
    Contacted,
    Qualified,
    Lost,
}

/// A sales lead.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct Lead {
    #[serde(default)]
    pub id: String,

    #[validate(length(min = 1, max = 200))]
    pub name: String,

    /// In this domain the "company" field doubles as the event-type
    /// label (Wedding, Corporate, ...).
    #[validate(length(max = 200))]
    #[serde(default)]
    pub company: String,

    #[validate(length(max = 200))]
    pub contact: String,

    pub status: LeadStatus,

    #[serde(default, with = "timeparse::flexible")]
    pub last_interaction: Option<DateTime<Utc>>,
}

/// Booking status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BookingStatus {
    Confirmed,
    Pending,
    Cancelled,
}

/// A booked event.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct Booking {
    #[serde(default)]
    pub id: String,

    #[validate(length(min = 1, max = 200))]
    pub customer_name: String,

    /// Service label; doubles as the event-type label.
    #[validate(length(max = 200))]
    #[serde(default)]
    pub service: String,

    #[validate(length(max = 200))]
    #[serde(default)]
    pub staff: String,

    #[serde(default, with = "timeparse::flexible")]
    pub date_time: Option<DateTime<Utc>>,

    pub status: BookingStatus,
}

/// An address-book contact. Fetched for completeness of the source seam;
/// not consumed by the analytics engine.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct Contact {
    #[serde(default)]
    pub id: String,

    #[validate(length(min = 1, max = 200))]
    pub name: String,

    #[validate(length(max = 200))]
    #[serde(default)]
    pub company: String,

    #[validate(length(max = 200))]
    pub contact: String,

    #[serde(default, with = "timeparse::flexible")]
    pub last_interaction: Option<DateTime<Utc>>,
}
