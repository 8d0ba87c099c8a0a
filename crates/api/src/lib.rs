//! HTTP API layer for the VenueLens analytics service.

pub mod response;
pub mod routes;
pub mod state;

pub use routes::router;
pub use state::AppState;
