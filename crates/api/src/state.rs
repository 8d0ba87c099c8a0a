//! Application state shared across handlers.

use assist::TextGenerator;
use datasource::DataSource;
use std::sync::Arc;

/// Shared application state.
///
/// The data source is the injected fetch collaborator; the text
/// generator is optional, and the digest endpoint falls back to the
/// rule-based summary when it is absent.
#[derive(Clone)]
pub struct AppState {
    pub source: Arc<dyn DataSource>,
    pub generator: Option<Arc<dyn TextGenerator>>,
}

impl AppState {
    pub fn new(source: Arc<dyn DataSource>) -> Self {
        Self {
            source,
            generator: None,
        }
    }

    pub fn with_generator(source: Arc<dyn DataSource>, generator: Arc<dyn TextGenerator>) -> Self {
        Self {
            source,
            generator: Some(generator),
        }
    }
}
