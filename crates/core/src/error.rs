//! Unified error types for the VenueLens analytics service.
//!
//! The analytics engine itself is infallible on well-formed input; these
//! errors cover the boundaries around it: upstream record fetches, record
//! validation at load time, and the optional text-generation capability.

use thiserror::Error;

/// Result type alias using our Error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Unified error type for the analytics service.
#[derive(Debug, Error)]
pub enum Error {
    /// Upstream data-fetch failure (network, parsing, missing source).
    /// Surfaced to API callers as a generic 500; never retried here.
    /// Individual records that fail validation are dropped at the
    /// source boundary instead of failing the fetch.
    #[error("upstream fetch failed: {0}")]
    Upstream(String),

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// The injected text-generation capability failed or returned a
    /// malformed result. Callers fall back to the rule-based digest.
    #[error("text generation failed: {0}")]
    Generation(String),

    #[error("internal error: {0}")]
    Internal(String),
}

impl Error {
    pub fn upstream(msg: impl Into<String>) -> Self {
        Self::Upstream(msg.into())
    }

    pub fn generation(msg: impl Into<String>) -> Self {
        Self::Generation(msg.into())
    }

    pub fn internal(msg: impl Into<String>) -> Self {
        Self::Internal(msg.into())
    }

    /// Get the HTTP status code for this error.
    ///
    /// Everything the analytics endpoints surface maps to 500 per the
    /// API contract: no partial results, no retryable statuses.
    pub fn http_status(&self) -> u16 {
        500
    }
}
