//! Result value objects returned by a search call
//!
//! All of these are immutable snapshots produced fresh per search and never
//! shared or mutated after construction. They serialize to JSON as-is for
//! consumption by a UI.

use serde::{Deserialize, Serialize};

/// One matched record
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchItem {
    /// Link to the record's detail view
    pub url: String,

    /// Human-readable label for the record
    pub display_text: String,
}

/// Search results for one entity
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModelResult {
    /// Stable identifier of the owning table/content-type
    pub content_type_id: u32,

    /// Machine name of the model
    pub model_name: String,

    /// Display name, singular
    pub verbose_name: String,

    /// Display name, plural
    pub verbose_name_plural: String,

    /// Matched items, at most the configured per-model cap
    pub items: Vec<SearchItem>,

    /// True if the underlying query matched more rows than were returned
    pub has_more: bool,

    /// Link to a filtered list of all matches, when the entity has one
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub changelist_url: Option<String>,

    /// Wall-clock time spent executing this model's query
    #[serde(default)]
    pub elapsed_time_ms: u64,
}

impl ModelResult {
    /// True when the query matched nothing for this entity
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

/// Search results for one owning application group
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppResult {
    /// Application grouping key
    pub app_label: String,

    /// Display name of the application
    pub app_verbose_name: String,

    /// Results for each model belonging to this app, in registry order
    pub models: Vec<ModelResult>,
}

/// The full response for one search call
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GlobalResult {
    /// App groups with at least one non-empty model result
    pub apps: Vec<AppResult>,

    /// Wall-clock time for the whole fan-out
    pub elapsed_time_ms: u64,

    /// True if the global deadline was hit before every model finished
    #[serde(default)]
    pub is_timeout: bool,
}

impl GlobalResult {
    /// Total number of items across all apps and models
    pub fn item_count(&self) -> usize {
        self.apps
            .iter()
            .flat_map(|app| app.models.iter())
            .map(|model| model.items.len())
            .sum()
    }

    /// Look up one model's results by content type id
    pub fn model(&self, content_type_id: u32) -> Option<&ModelResult> {
        self.apps
            .iter()
            .flat_map(|app| app.models.iter())
            .find(|model| model.content_type_id == content_type_id)
    }
}
