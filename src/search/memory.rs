//! In-memory search backend (for the demo server and testing)

use crate::search::backend::{RowData, SearchBackend};
use crate::search::error::SearchResult;
use crate::search::registry::{MatchMode, ModelDescriptor};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use dashmap::DashMap;
use std::collections::HashMap;
use std::sync::Arc;

/// One stored row: search-column values plus the recency key used for
/// result ordering
#[derive(Debug, Clone)]
pub struct StoredRow {
    pub id: u64,
    pub created_at: DateTime<Utc>,
    pub fields: HashMap<String, String>,
}

impl StoredRow {
    pub fn new(id: u64, created_at: DateTime<Utc>) -> Self {
        Self {
            id,
            created_at,
            fields: HashMap::new(),
        }
    }

    pub fn with_field(mut self, name: &str, value: &str) -> Self {
        self.fields.insert(name.to_string(), value.to_string());
        self
    }
}

/// In-memory table store keyed by content type id
#[derive(Clone, Default)]
pub struct MemoryBackend {
    tables: Arc<DashMap<u32, Vec<StoredRow>>>,
}

impl MemoryBackend {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert_row(&self, content_type_id: u32, row: StoredRow) {
        self.tables.entry(content_type_id).or_default().push(row);
    }

    pub fn insert_rows(&self, content_type_id: u32, rows: Vec<StoredRow>) {
        self.tables
            .entry(content_type_id)
            .or_default()
            .extend(rows);
    }

    pub fn row_count(&self, content_type_id: u32) -> usize {
        self.tables
            .get(&content_type_id)
            .map(|rows| rows.len())
            .unwrap_or(0)
    }
}

fn row_matches(row: &StoredRow, fields: &[String], pattern: &str, mode: MatchMode) -> bool {
    let field_contains = |needle: &str| {
        fields.iter().any(|field| {
            row.fields
                .get(field)
                .is_some_and(|value| value.to_lowercase().contains(needle))
        })
    };

    match mode {
        MatchMode::Substring => field_contains(pattern),
        MatchMode::AnyToken => {
            pattern.split_whitespace().next().is_some()
                && pattern.split_whitespace().all(field_contains)
        }
    }
}

#[async_trait]
impl SearchBackend for MemoryBackend {
    async fn find_matching(
        &self,
        descriptor: &ModelDescriptor,
        pattern: &str,
        limit: usize,
    ) -> SearchResult<Vec<RowData>> {
        let Some(table) = self.tables.get(&descriptor.content_type_id) else {
            return Ok(Vec::new());
        };

        let needle = pattern.to_lowercase();
        let mut matched: Vec<&StoredRow> = table
            .iter()
            .filter(|row| {
                row_matches(row, &descriptor.search_fields, &needle, descriptor.match_mode)
            })
            .collect();

        // Recency order, ties by id ascending, for deterministic output
        matched.sort_by(|a, b| b.created_at.cmp(&a.created_at).then(a.id.cmp(&b.id)));

        Ok(matched
            .into_iter()
            .take(limit)
            .map(|row| RowData {
                id: row.id,
                fields: row.fields.clone(),
            })
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn ts(minute: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 6, 1, 12, minute, 0).unwrap()
    }

    fn product_descriptor() -> ModelDescriptor {
        ModelDescriptor::new(11, "products", "product")
            .with_search_fields(&["name", "sku", "description"])
    }

    fn seeded_backend() -> MemoryBackend {
        let backend = MemoryBackend::new();
        backend.insert_rows(
            11,
            vec![
                StoredRow::new(1, ts(0))
                    .with_field("name", "Trail Running Shoe")
                    .with_field("sku", "SHOE-001")
                    .with_field("description", "Lightweight trail shoe"),
                StoredRow::new(2, ts(5))
                    .with_field("name", "Leather Boot")
                    .with_field("sku", "BOOT-001")
                    .with_field("description", "Classic leather boot"),
                StoredRow::new(3, ts(3))
                    .with_field("name", "Canvas Shoe")
                    .with_field("sku", "SHOE-002")
                    .with_field("description", ""),
            ],
        );
        backend
    }

    #[tokio::test]
    async fn test_substring_match_is_case_insensitive() {
        let backend = seeded_backend();
        let rows = backend
            .find_matching(&product_descriptor(), "shoe", 10)
            .await
            .unwrap();

        // "Leather Boot" has no "shoe" in any search column
        assert_eq!(rows.len(), 2);
    }

    #[tokio::test]
    async fn test_match_any_search_column() {
        let backend = seeded_backend();
        // Only the sku column carries "boot-001"
        let rows = backend
            .find_matching(&product_descriptor(), "boot-001", 10)
            .await
            .unwrap();

        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].id, 2);
    }

    #[tokio::test]
    async fn test_recency_order_with_id_tiebreak() {
        let backend = MemoryBackend::new();
        backend.insert_rows(
            11,
            vec![
                StoredRow::new(9, ts(1)).with_field("name", "shoe a"),
                StoredRow::new(4, ts(1)).with_field("name", "shoe b"),
                StoredRow::new(7, ts(2)).with_field("name", "shoe c"),
            ],
        );

        let rows = backend
            .find_matching(&product_descriptor(), "shoe", 10)
            .await
            .unwrap();

        let ids: Vec<u64> = rows.iter().map(|r| r.id).collect();
        assert_eq!(ids, vec![7, 4, 9]);
    }

    #[tokio::test]
    async fn test_limit_applied_after_ordering() {
        let backend = seeded_backend();
        let rows = backend
            .find_matching(&product_descriptor(), "shoe", 1)
            .await
            .unwrap();

        assert_eq!(rows.len(), 1);
        // Newest matching row wins the single slot
        assert_eq!(rows[0].id, 3);
    }

    #[tokio::test]
    async fn test_any_token_mode_requires_every_token() {
        let backend = seeded_backend();
        let descriptor = product_descriptor().with_match_mode(MatchMode::AnyToken);

        let rows = backend
            .find_matching(&descriptor, "trail shoe", 10)
            .await
            .unwrap();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].id, 1);

        let rows = backend
            .find_matching(&descriptor, "trail boot", 10)
            .await
            .unwrap();
        assert!(rows.is_empty());
    }

    #[tokio::test]
    async fn test_unknown_entity_yields_no_rows() {
        let backend = MemoryBackend::new();
        let rows = backend
            .find_matching(&product_descriptor(), "shoe", 10)
            .await
            .unwrap();
        assert!(rows.is_empty());
    }
}
