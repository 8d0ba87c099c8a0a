//! AI-assisted text helpers for the VenueLens dashboard.
//!
//! The actual language model lives behind an opaque [`TextGenerator`]
//! capability; this crate owns the prompt/JSON contract and a
//! deterministic rule-based digest used whenever the capability is
//! absent, fails, or returns a malformed shape.

pub mod digest;

use async_trait::async_trait;
use crm_core::Result;
use serde_json::Value;

pub use digest::{build_digest, fallback_digest, Digest, DigestInput};

/// Opaque structured text generation.
///
/// Callers hand over a prompt and get back a JSON-shaped result; what
/// model (if any) sits behind this is not this service's concern.
#[async_trait]
pub trait TextGenerator: Send + Sync {
    async fn generate_structured(&self, prompt: &str) -> Result<Value>;
}
