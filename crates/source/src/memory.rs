//! In-memory data source for tests and development.

use async_trait::async_trait;
use crm_core::{Booking, Contact, Interaction, Lead, Result};
use parking_lot::RwLock;

use crate::DataSource;

/// Holds record lists in memory and clones them out per fetch.
///
/// Mirrors the production fetch contract (fresh lists per call) without
/// any I/O, which keeps endpoint tests fast and deterministic.
#[derive(Default)]
pub struct MemorySource {
    interactions: RwLock<Vec<Interaction>>,
    leads: RwLock<Vec<Lead>>,
    bookings: RwLock<Vec<Booking>>,
    contacts: RwLock<Vec<Contact>>,
}

impl MemorySource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_records(
        interactions: Vec<Interaction>,
        leads: Vec<Lead>,
        bookings: Vec<Booking>,
    ) -> Self {
        let source = Self::new();
        *source.interactions.write() = interactions;
        *source.leads.write() = leads;
        *source.bookings.write() = bookings;
        source
    }

    pub fn set_interactions(&self, records: Vec<Interaction>) {
        *self.interactions.write() = records;
    }

    pub fn set_leads(&self, records: Vec<Lead>) {
        *self.leads.write() = records;
    }

    pub fn set_bookings(&self, records: Vec<Booking>) {
        *self.bookings.write() = records;
    }

    pub fn set_contacts(&self, records: Vec<Contact>) {
        *self.contacts.write() = records;
    }
}

#[async_trait]
impl DataSource for MemorySource {
    async fn interactions(&self) -> Result<Vec<Interaction>> {
        Ok(self.interactions.read().clone())
    }

    async fn leads(&self) -> Result<Vec<Lead>> {
        Ok(self.leads.read().clone())
    }

    async fn bookings(&self) -> Result<Vec<Booking>> {
        Ok(self.bookings.read().clone())
    }

    async fn contacts(&self) -> Result<Vec<Contact>> {
        Ok(self.contacts.read().clone())
    }
}
