//! Cross-model global search engine
//!
//! Given a free-text query, this module searches every registered entity
//! concurrently and folds whatever completes before the global deadline into
//! one ranked, grouped, time-bounded response:
//!
//! - **Descriptor registry**: static table of searchable entities (columns,
//!   URL templates, caps) loaded once at startup
//! - **Query executor**: one bounded, cancellable text search per entity,
//!   mapping raw rows into display items
//! - **Fan-out scheduler**: one task per entity under a single shared
//!   absolute deadline; slow or failing entities are dropped, never awaited
//!   past the cutoff
//! - **Aggregator**: groups completed results by owning app into the final
//!   response
//!
//! ```text
//! query ──▶ GlobalSearchService ──▶ FanOutScheduler ──┬──▶ QueryExecutor (product)
//!                                                     ├──▶ QueryExecutor (ticket)
//!                                                     └──▶ QueryExecutor (…)
//!                  GlobalResult ◀── aggregate() ◀─────┴── completed ModelResults
//! ```
//!
//! # Example
//!
//! ```no_run
//! use global_search::search::{
//!     GlobalSearchService, MemoryBackend, ModelDescriptor, SearchConfig, SearchRegistry,
//! };
//! use std::sync::Arc;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let mut registry = SearchRegistry::new();
//!     registry.register(
//!         ModelDescriptor::new(11, "products", "product")
//!             .with_search_fields(&["name", "sku", "description"]),
//!     )?;
//!
//!     let service = GlobalSearchService::new(
//!         Arc::new(registry),
//!         Arc::new(MemoryBackend::new()),
//!         SearchConfig::default(),
//!     );
//!
//!     let results = service.search("shoe").await?;
//!     println!("{} items in {}ms", results.item_count(), results.elapsed_time_ms);
//!
//!     Ok(())
//! }
//! ```

mod aggregator;
mod backend;
mod config;
mod error;
mod executor;
mod memory;
mod registry;
mod results;
mod scheduler;
mod service;

pub use aggregator::aggregate;
pub use backend::{RowData, SearchBackend};
pub use config::{SearchConfig, SearchConfigBuilder};
pub use error::{SearchError, SearchResult};
pub use executor::QueryExecutor;
pub use memory::{MemoryBackend, StoredRow};
pub use registry::{MatchMode, ModelDescriptor, SearchRegistry};
pub use results::{AppResult, GlobalResult, ModelResult, SearchItem};
pub use scheduler::{FanOutOutcome, FanOutScheduler};
pub use service::{GlobalSearchService, SearchOptions};
