//! Global search façade
//!
//! The single entry point consumed by the UI/API layer. Validates input,
//! applies configuration, and assembles the grouped response. A search that
//! loses entities to failures or the deadline still returns a structurally
//! valid result; the only caller-visible error is input validation.

use crate::search::aggregator::aggregate;
use crate::search::backend::SearchBackend;
use crate::search::config::SearchConfig;
use crate::search::error::{SearchError, SearchResult};
use crate::search::executor::QueryExecutor;
use crate::search::registry::SearchRegistry;
use crate::search::results::GlobalResult;
use crate::search::scheduler::FanOutScheduler;
use std::sync::Arc;
use std::time::Duration;
use tracing::debug;

/// Per-call overrides of the configured defaults
#[derive(Debug, Clone, Copy, Default)]
pub struct SearchOptions {
    /// Overall deadline for this call, in milliseconds
    pub global_timeout_ms: Option<u64>,

    /// Max items per entity for this call
    pub per_model_cap: Option<usize>,
}

/// Cross-model search service
pub struct GlobalSearchService {
    registry: Arc<SearchRegistry>,
    scheduler: FanOutScheduler,
    config: SearchConfig,
}

impl GlobalSearchService {
    pub fn new(
        registry: Arc<SearchRegistry>,
        backend: Arc<dyn SearchBackend>,
        config: SearchConfig,
    ) -> Self {
        let scheduler = FanOutScheduler::new(QueryExecutor::new(backend), &config);
        Self {
            registry,
            scheduler,
            config,
        }
    }

    /// Search every registered entity with the configured defaults
    pub async fn search(&self, query: &str) -> SearchResult<GlobalResult> {
        self.search_with(query, SearchOptions::default()).await
    }

    /// Search with per-call overrides
    pub async fn search_with(
        &self,
        query: &str,
        options: SearchOptions,
    ) -> SearchResult<GlobalResult> {
        let query = self.validate_query(query)?;

        let global_timeout = Duration::from_millis(
            options
                .global_timeout_ms
                .unwrap_or(self.config.global_timeout_ms),
        );
        let per_model_cap = options.per_model_cap.unwrap_or(self.config.per_model_cap);

        debug!(
            query,
            entities = self.registry.len(),
            timeout_ms = global_timeout.as_millis() as u64,
            per_model_cap,
            "Starting global search"
        );

        let outcome = self
            .scheduler
            .run(query, &self.registry, global_timeout, per_model_cap)
            .await;

        Ok(aggregate(outcome))
    }

    /// The registry this service searches
    pub fn registry(&self) -> &SearchRegistry {
        &self.registry
    }

    fn validate_query<'a>(&self, query: &'a str) -> SearchResult<&'a str> {
        let query = query.trim();
        if query.is_empty() {
            return Err(SearchError::InvalidQuery(
                "query must not be empty".to_string(),
            ));
        }

        let length = query.chars().count();
        if length > self.config.max_query_length {
            return Err(SearchError::InvalidQuery(format!(
                "query length {length} exceeds the maximum of {}",
                self.config.max_query_length
            )));
        }

        Ok(query)
    }
}
