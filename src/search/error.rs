//! Error types for search operations

use crate::error::AppError;

/// Result type for search operations
pub type SearchResult<T> = std::result::Result<T, SearchError>;

/// Errors that can occur during search operations
#[derive(Debug, thiserror::Error)]
pub enum SearchError {
    /// Query rejected before fan-out (empty or oversized)
    #[error("Invalid query: {0}")]
    InvalidQuery(String),

    /// One entity's storage call failed; the entity is dropped, the search continues
    #[error("Query failed for {model}: {message}")]
    QueryFailed { model: String, message: String },

    /// One entity did not finish before the shared deadline
    #[error("Query for {model} exceeded the search deadline")]
    Timeout { model: String },

    /// A descriptor was registered twice under the same content type id
    #[error("Entity {content_type_id} ({model}) is already registered")]
    DuplicateEntity { content_type_id: u32, model: String },

    /// A descriptor is unusable (e.g. no search fields declared)
    #[error("Invalid descriptor for {model}: {message}")]
    InvalidDescriptor { model: String, message: String },
}

impl SearchError {
    /// True for the per-entity outcomes the scheduler recovers locally
    pub fn is_entity_scoped(&self) -> bool {
        matches!(
            self,
            SearchError::QueryFailed { .. } | SearchError::Timeout { .. }
        )
    }
}

impl From<SearchError> for AppError {
    fn from(err: SearchError) -> Self {
        match err {
            SearchError::InvalidQuery(msg) => AppError::Validation(msg),
            SearchError::DuplicateEntity { .. } | SearchError::InvalidDescriptor { .. } => {
                AppError::Configuration(err.to_string())
            }
            _ => AppError::Internal(err.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_entity_scoped_classification() {
        assert!(SearchError::Timeout {
            model: "product".to_string()
        }
        .is_entity_scoped());
        assert!(SearchError::QueryFailed {
            model: "product".to_string(),
            message: "connection reset".to_string()
        }
        .is_entity_scoped());
        assert!(!SearchError::InvalidQuery("empty".to_string()).is_entity_scoped());
    }

    #[test]
    fn test_app_error_mapping() {
        let err: AppError = SearchError::InvalidQuery("too long".to_string()).into();
        assert!(matches!(err, AppError::Validation(_)));

        let err: AppError = SearchError::DuplicateEntity {
            content_type_id: 7,
            model: "ticket".to_string(),
        }
        .into();
        assert!(matches!(err, AppError::Configuration(_)));
    }
}
