//! Storage capability consumed by the search core
//!
//! The core never depends on a concrete storage engine. Each adapter
//! implements one operation: given an entity's search columns and a pattern,
//! return up to `limit` matching rows ordered by a stable key. The external
//! schema layer translates this into its native query form and supplies the
//! row-to-item projection data.

use crate::search::error::SearchResult;
use crate::search::registry::ModelDescriptor;
use async_trait::async_trait;
use std::collections::HashMap;

/// Projection of one matched row, as supplied by the storage layer
///
/// `fields` holds the values of the descriptor's search columns (related
/// lookups pre-resolved), keyed by column name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RowData {
    /// Primary key of the row
    pub id: u64,

    /// Search-column values, keyed by column name
    pub fields: HashMap<String, String>,
}

impl RowData {
    pub fn new(id: u64) -> Self {
        Self {
            id,
            fields: HashMap::new(),
        }
    }

    pub fn with_field(mut self, name: &str, value: &str) -> Self {
        self.fields.insert(name.to_string(), value.to_string());
        self
    }
}

/// Bounded text search over an entity's named columns
///
/// Contract:
/// - strictly read-only; a search never writes a row
/// - matches `pattern` per the descriptor's `match_mode`, case-insensitive,
///   OR'd across all of the descriptor's search columns
/// - returns at most `limit` rows ordered by recency, ties broken by id
///   ascending, so repeated queries against unchanged data are deterministic
#[async_trait]
pub trait SearchBackend: Send + Sync {
    async fn find_matching(
        &self,
        descriptor: &ModelDescriptor,
        pattern: &str,
        limit: usize,
    ) -> SearchResult<Vec<RowData>>;
}
