//! JSON-file data source for local development.
//!
//! Reads record lists from a data directory (`interactions.json`,
//! `leads.json`, `bookings.json`, `contacts.json`), standing in for the
//! out-of-scope spreadsheet fetcher. Records that fail validation are
//! dropped with a warning rather than failing the fetch; records that
//! arrive without an id get one assigned.

use async_trait::async_trait;
use crm_core::{Booking, Contact, Error, Interaction, Lead, Result};
use serde::de::DeserializeOwned;
use std::path::{Path, PathBuf};
use tracing::warn;
use uuid::Uuid;
use validator::Validate;

use crate::DataSource;

/// Reads CRM record lists from JSON files under a data directory.
pub struct JsonFileSource {
    data_dir: PathBuf,
}

impl JsonFileSource {
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
        }
    }

    async fn load<T>(&self, file: &str) -> Result<Vec<T>>
    where
        T: DeserializeOwned + Validate + HasId,
    {
        let path = self.data_dir.join(file);
        let bytes = tokio::fs::read(&path)
            .await
            .map_err(|e| Error::upstream(format!("reading {}: {e}", path.display())))?;

        let records: Vec<T> = serde_json::from_slice(&bytes)
            .map_err(|e| Error::upstream(format!("parsing {}: {e}", path.display())))?;

        Ok(records
            .into_iter()
            .filter_map(|mut record| {
                if let Err(e) = record.validate() {
                    warn!(file = file, error = %e, "Dropping invalid record");
                    return None;
                }
                if record.id().is_empty() {
                    record.set_id(Uuid::new_v4().to_string());
                }
                Some(record)
            })
            .collect())
    }

    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }
}

#[async_trait]
impl DataSource for JsonFileSource {
    async fn interactions(&self) -> Result<Vec<Interaction>> {
        self.load("interactions.json").await
    }

    async fn leads(&self) -> Result<Vec<Lead>> {
        self.load("leads.json").await
    }

    async fn bookings(&self) -> Result<Vec<Booking>> {
        self.load("bookings.json").await
    }

    async fn contacts(&self) -> Result<Vec<Contact>> {
        self.load("contacts.json").await
    }

    fn is_healthy(&self) -> bool {
        self.data_dir.is_dir()
    }
}

/// Records that carry a string id the loader may assign.
trait HasId {
    fn id(&self) -> &str;
    fn set_id(&mut self, id: String);
}

macro_rules! has_id {
    ($($ty:ty),+) => {
        $(impl HasId for $ty {
            fn id(&self) -> &str {
                &self.id
            }
            fn set_id(&mut self, id: String) {
                self.id = id;
            }
        })+
    };
}

has_id!(Interaction, Lead, Booking, Contact);
