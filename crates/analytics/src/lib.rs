//! Pure aggregation engine for the VenueLens dashboard.
//!
//! Every function here is synchronous, side-effect-free, and stateless:
//! flat record slices in, fresh derived records out. Nothing is cached,
//! logged, or mutated, so concurrent calls from the request layer are
//! safe by construction and calling twice with the same input yields
//! identical output.

pub mod channels;
pub mod funnel;
pub mod insights;
pub mod revenue;
pub mod types;

pub use channels::compute_channel_performance;
pub use funnel::compute_funnel;
pub use insights::compute_time_insights;
pub use revenue::compute_monthly_revenue;
pub use types::*;
