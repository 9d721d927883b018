//! Searchable-entity descriptors and their registry
//!
//! The registry is the static configuration table that replaces runtime
//! schema introspection: every searchable entity is declared once at startup
//! and the set is immutable afterwards, which makes it safely shareable
//! across concurrent searches without synchronization.

use crate::search::error::{SearchError, SearchResult};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::sync::Arc;

/// Text-matching strategy applied to an entity's search columns
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchMode {
    /// Case-insensitive substring, OR across all search columns (no stemming)
    #[default]
    Substring,

    /// Whitespace-tokenized: every token must substring-match some column
    AnyToken,
}

/// Immutable description of one searchable entity
///
/// Owned by the external schema layer, read-only to the search core. The
/// double-underscore column names of related lookups (`user__username`) are
/// kept as opaque keys; the storage boundary supplies their values
/// pre-projected on each row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModelDescriptor {
    /// Stable identifier of the owning table/content-type
    pub content_type_id: u32,

    /// Owning application group
    pub app_label: String,

    /// Display name of the owning application
    pub app_verbose_name: String,

    /// Machine name of the model
    pub model_name: String,

    /// Display name, singular
    pub verbose_name: String,

    /// Display name, plural
    pub verbose_name_plural: String,

    /// Columns matched against the query text
    pub search_fields: Vec<String>,

    /// Detail-view link template; `{id}` is substituted per row
    pub url_template: String,

    /// Filtered list-view template; `{query}` is substituted per search
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub changelist_template: Option<String>,

    /// Column used for an item's display text; falls back to the first
    /// non-empty search column when unset
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub display_field: Option<String>,

    /// Per-model override of the global result cap
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub result_cap: Option<usize>,

    /// Matching strategy for this entity
    #[serde(default)]
    pub match_mode: MatchMode,
}

impl ModelDescriptor {
    /// Create a descriptor with admin-convention URL templates and display
    /// names derived from the model name
    pub fn new(content_type_id: u32, app_label: &str, model_name: &str) -> Self {
        let verbose_name = model_name.replace('_', " ");
        Self {
            content_type_id,
            app_label: app_label.to_string(),
            app_verbose_name: title_case(app_label),
            model_name: model_name.to_string(),
            verbose_name_plural: format!("{verbose_name}s"),
            verbose_name,
            search_fields: Vec::new(),
            url_template: format!("/admin/{app_label}/{model_name}/{{id}}/change/"),
            changelist_template: Some(format!("/admin/{app_label}/{model_name}/?q={{query}}")),
            display_field: None,
            result_cap: None,
            match_mode: MatchMode::Substring,
        }
    }

    pub fn with_search_fields(mut self, fields: &[&str]) -> Self {
        self.search_fields = fields.iter().map(|f| f.to_string()).collect();
        self
    }

    pub fn with_verbose_names(mut self, singular: &str, plural: &str) -> Self {
        self.verbose_name = singular.to_string();
        self.verbose_name_plural = plural.to_string();
        self
    }

    pub fn with_app_verbose_name(mut self, name: &str) -> Self {
        self.app_verbose_name = name.to_string();
        self
    }

    pub fn with_url_template(mut self, template: &str) -> Self {
        self.url_template = template.to_string();
        self
    }

    pub fn with_changelist_template(mut self, template: &str) -> Self {
        self.changelist_template = Some(template.to_string());
        self
    }

    /// Entities without a list view omit `changelist_url` from their results
    pub fn without_changelist(mut self) -> Self {
        self.changelist_template = None;
        self
    }

    pub fn with_display_field(mut self, field: &str) -> Self {
        self.display_field = Some(field.to_string());
        self
    }

    pub fn with_result_cap(mut self, cap: usize) -> Self {
        self.result_cap = Some(cap);
        self
    }

    pub fn with_match_mode(mut self, mode: MatchMode) -> Self {
        self.match_mode = mode;
        self
    }
}

fn title_case(label: &str) -> String {
    let mut chars = label.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Registry of all searchable entities, in stable registration order
///
/// Populated once at startup, then frozen behind an `Arc`. The order of
/// `all()` is what makes the final response deterministic for a fixed
/// registry and query, independent of scheduling jitter.
#[derive(Debug, Default)]
pub struct SearchRegistry {
    descriptors: Vec<Arc<ModelDescriptor>>,
    by_entity: HashMap<u32, usize>,
}

impl SearchRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a searchable entity; startup only
    pub fn register(&mut self, descriptor: ModelDescriptor) -> SearchResult<()> {
        if descriptor.search_fields.is_empty() {
            return Err(SearchError::InvalidDescriptor {
                model: descriptor.model_name,
                message: "no search fields declared".to_string(),
            });
        }
        if self.by_entity.contains_key(&descriptor.content_type_id) {
            return Err(SearchError::DuplicateEntity {
                content_type_id: descriptor.content_type_id,
                model: descriptor.model_name,
            });
        }

        tracing::debug!(
            content_type_id = descriptor.content_type_id,
            model = %descriptor.model_name,
            "Registered searchable entity"
        );

        self.by_entity
            .insert(descriptor.content_type_id, self.descriptors.len());
        self.descriptors.push(Arc::new(descriptor));
        Ok(())
    }

    /// Every registered entity, in registration order
    pub fn all(&self) -> &[Arc<ModelDescriptor>] {
        &self.descriptors
    }

    /// Look up a descriptor by content type id
    pub fn get(&self, content_type_id: u32) -> Option<&Arc<ModelDescriptor>> {
        self.by_entity
            .get(&content_type_id)
            .map(|&idx| &self.descriptors[idx])
    }

    pub fn len(&self) -> usize {
        self.descriptors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.descriptors.is_empty()
    }
}
