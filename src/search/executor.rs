//! Per-model query execution
//!
//! One executor call runs one bounded text search against one entity's
//! storage and maps the raw rows into display items. The shared absolute
//! deadline is enforced here so that a model dispatched late still stops at
//! the same cutoff as its siblings.

use crate::search::backend::{RowData, SearchBackend};
use crate::search::error::{SearchError, SearchResult};
use crate::search::registry::ModelDescriptor;
use crate::search::results::{ModelResult, SearchItem};
use std::sync::Arc;
use std::time::Instant;
use tokio::time::timeout_at;
use tracing::debug;
use url::form_urlencoded;

/// Executes one entity's search under the shared deadline
#[derive(Clone)]
pub struct QueryExecutor {
    backend: Arc<dyn SearchBackend>,
}

impl QueryExecutor {
    pub fn new(backend: Arc<dyn SearchBackend>) -> Self {
        Self { backend }
    }

    /// Run one bounded search for `descriptor`
    ///
    /// Fetches `cap + 1` rows to detect `has_more` without a count query; the
    /// extra row is discarded. A query that has not completed by `deadline`
    /// is cancelled and reported as `Timeout`; a partial match list is never
    /// fabricated. Zero matches is a success with an empty item list.
    pub async fn execute(
        &self,
        descriptor: &ModelDescriptor,
        query: &str,
        cap: usize,
        deadline: tokio::time::Instant,
    ) -> SearchResult<ModelResult> {
        let started = Instant::now();

        let fetch = self.backend.find_matching(descriptor, query, cap + 1);
        let mut rows = match timeout_at(deadline, fetch).await {
            Ok(Ok(rows)) => rows,
            Ok(Err(err)) => return Err(err),
            Err(_) => {
                return Err(SearchError::Timeout {
                    model: descriptor.model_name.clone(),
                })
            }
        };

        let has_more = rows.len() > cap;
        rows.truncate(cap);

        let items = rows
            .iter()
            .map(|row| SearchItem {
                url: descriptor.url_template.replace("{id}", &row.id.to_string()),
                display_text: display_text(descriptor, row),
            })
            .collect::<Vec<_>>();

        let elapsed_time_ms = started.elapsed().as_millis() as u64;
        debug!(
            model = %descriptor.model_name,
            items = items.len(),
            has_more,
            elapsed_time_ms,
            "Model query completed"
        );

        Ok(ModelResult {
            content_type_id: descriptor.content_type_id,
            model_name: descriptor.model_name.clone(),
            verbose_name: descriptor.verbose_name.clone(),
            verbose_name_plural: descriptor.verbose_name_plural.clone(),
            items,
            has_more,
            changelist_url: descriptor
                .changelist_template
                .as_ref()
                .map(|template| template.replace("{query}", &encode_query(query))),
            elapsed_time_ms,
        })
    }
}

/// Display text policy: configured display field, else the first non-empty
/// search column, else a "<verbose name> #<id>" placeholder
fn display_text(descriptor: &ModelDescriptor, row: &RowData) -> String {
    if let Some(field) = &descriptor.display_field {
        if let Some(value) = row.fields.get(field) {
            if !value.is_empty() {
                return value.clone();
            }
        }
    }

    descriptor
        .search_fields
        .iter()
        .find_map(|field| {
            row.fields
                .get(field)
                .filter(|value| !value.is_empty())
                .cloned()
        })
        .unwrap_or_else(|| format!("{} #{}", descriptor.verbose_name, row.id))
}

fn encode_query(query: &str) -> String {
    form_urlencoded::byte_serialize(query.as_bytes()).collect()
}
