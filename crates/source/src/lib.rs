//! Record-fetch seam for the VenueLens analytics service.
//!
//! The production dashboard pulls its records from an operator-owned
//! spreadsheet; that fetcher lives outside this service. Everything here
//! talks to the [`DataSource`] trait instead, with an in-memory
//! implementation for tests and a JSON-file implementation for local
//! development.

pub mod json;
pub mod memory;

use async_trait::async_trait;
use crm_core::{Booking, Contact, Interaction, Lead, Result};

pub use json::JsonFileSource;
pub use memory::MemorySource;

/// Supplier of CRM record lists.
///
/// Implementations fetch fresh lists per call; the analytics engine
/// never mutates or caches what it is handed. Fetch failures surface as
/// `Error::Upstream` and become a generic 500 at the API boundary.
#[async_trait]
pub trait DataSource: Send + Sync {
    async fn interactions(&self) -> Result<Vec<Interaction>>;
    async fn leads(&self) -> Result<Vec<Lead>>;
    async fn bookings(&self) -> Result<Vec<Booking>>;
    async fn contacts(&self) -> Result<Vec<Contact>>;

    /// Whether the source expects fetches to succeed right now.
    fn is_healthy(&self) -> bool {
        true
    }
}
