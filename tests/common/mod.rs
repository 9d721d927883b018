//! Shared helpers for integration tests

use async_trait::async_trait;
use chrono::{DateTime, Duration, TimeZone, Utc};
use global_search::search::{
    MemoryBackend, ModelDescriptor, RowData, SearchBackend, SearchRegistry, SearchResult,
    StoredRow,
};
use std::collections::HashMap;

pub const ARTICLE: u32 = 41;
pub const PRODUCT: u32 = 11;

pub fn stamp(offset_minutes: i64) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, 6, 1, 12, 0, 0).unwrap() + Duration::minutes(offset_minutes)
}

/// Two entities in two apps: articles capped at 2, products capped at 2
pub fn two_entity_registry() -> SearchRegistry {
    let mut registry = SearchRegistry::new();
    registry
        .register(
            ModelDescriptor::new(ARTICLE, "content", "article")
                .with_search_fields(&["title", "summary"])
                .with_display_field("title")
                .with_result_cap(2),
        )
        .unwrap();
    registry
        .register(
            ModelDescriptor::new(PRODUCT, "products", "product")
                .with_search_fields(&["name", "sku"])
                .with_display_field("name")
                .with_result_cap(2),
        )
        .unwrap();
    registry
}

/// Five articles and one product matching "shoe"
pub fn two_entity_backend() -> MemoryBackend {
    let backend = MemoryBackend::new();
    for i in 1..=5u64 {
        backend.insert_row(
            ARTICLE,
            StoredRow::new(i, stamp(i as i64))
                .with_field("title", &format!("Shoe review {i}"))
                .with_field("summary", "running shoes compared"),
        );
    }
    backend.insert_row(
        PRODUCT,
        StoredRow::new(1, stamp(0))
            .with_field("name", "Trail Running Shoe")
            .with_field("sku", "SHOE-001"),
    );
    backend
}

/// Delays configured entities before delegating to the inner store
pub struct DelayedBackend {
    inner: MemoryBackend,
    delays: HashMap<u32, std::time::Duration>,
}

impl DelayedBackend {
    pub fn new(inner: MemoryBackend) -> Self {
        Self {
            inner,
            delays: HashMap::new(),
        }
    }

    pub fn with_delay(mut self, content_type_id: u32, delay: std::time::Duration) -> Self {
        self.delays.insert(content_type_id, delay);
        self
    }
}

#[async_trait]
impl SearchBackend for DelayedBackend {
    async fn find_matching(
        &self,
        descriptor: &ModelDescriptor,
        pattern: &str,
        limit: usize,
    ) -> SearchResult<Vec<RowData>> {
        if let Some(delay) = self.delays.get(&descriptor.content_type_id) {
            tokio::time::sleep(*delay).await;
        }
        self.inner.find_matching(descriptor, pattern, limit).await
    }
}
