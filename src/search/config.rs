//! Search configuration

use serde::{Deserialize, Serialize};

/// Search engine configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchConfig {
    /// Overall deadline for one search call, in milliseconds
    #[serde(default = "default_global_timeout_ms")]
    pub global_timeout_ms: u64,

    /// Max items returned per entity before `has_more` flips
    #[serde(default = "default_per_model_cap")]
    pub per_model_cap: usize,

    /// Maximum accepted query length, in characters
    #[serde(default = "default_max_query_length")]
    pub max_query_length: usize,

    /// Extra wait past the deadline for cancellation acknowledgment
    #[serde(default = "default_cancellation_grace_ms")]
    pub cancellation_grace_ms: u64,
}

fn default_global_timeout_ms() -> u64 {
    2000
}

fn default_per_model_cap() -> usize {
    5
}

fn default_max_query_length() -> usize {
    256
}

fn default_cancellation_grace_ms() -> u64 {
    100
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            global_timeout_ms: default_global_timeout_ms(),
            per_model_cap: default_per_model_cap(),
            max_query_length: default_max_query_length(),
            cancellation_grace_ms: default_cancellation_grace_ms(),
        }
    }
}

/// Builder for SearchConfig
pub struct SearchConfigBuilder {
    config: SearchConfig,
}

impl SearchConfigBuilder {
    pub fn new() -> Self {
        Self {
            config: SearchConfig::default(),
        }
    }

    pub fn global_timeout_ms(mut self, ms: u64) -> Self {
        self.config.global_timeout_ms = ms;
        self
    }

    pub fn per_model_cap(mut self, cap: usize) -> Self {
        self.config.per_model_cap = cap;
        self
    }

    pub fn max_query_length(mut self, chars: usize) -> Self {
        self.config.max_query_length = chars;
        self
    }

    pub fn cancellation_grace_ms(mut self, ms: u64) -> Self {
        self.config.cancellation_grace_ms = ms;
        self
    }

    pub fn build(self) -> SearchConfig {
        self.config
    }
}

impl Default for SearchConfigBuilder {
    fn default() -> Self {
        Self::new()
    }
}
