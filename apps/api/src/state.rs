use std::sync::Arc;

use crate::config::Config;
use crate::describer::RetryPolicy;
use crate::directory::PlacesDirectory;
use crate::llm_client::TextGenerator;
use crate::storage::{KeyValueStore, TableStore};

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    /// Locations of the three pipeline tables.
    pub tables: TableStore,
    /// Holds the last search context between the collector and the scorer.
    pub context_store: Arc<dyn KeyValueStore>,
    pub directory: Arc<dyn PlacesDirectory>,
    pub llm: Arc<dyn TextGenerator>,
    pub retry_policy: RetryPolicy,
}
