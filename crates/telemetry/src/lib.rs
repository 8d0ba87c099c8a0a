//! Internal telemetry for the VenueLens analytics service.
//!
//! In-memory counters and health state only; there is no external
//! metrics system behind this.

pub mod health;
pub mod metrics;
pub mod tracing_setup;

pub use health::*;
pub use metrics::*;
pub use tracing_setup::*;
