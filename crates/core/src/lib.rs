//! Core types, pricing, and record matching for the VenueLens analytics service.

pub mod error;
pub mod matching;
pub mod pricing;
pub mod records;
pub mod timeparse;

pub use error::{Error, Result};
pub use matching::{names_match, normalize_name};
pub use pricing::estimate_revenue;
pub use records::*;
