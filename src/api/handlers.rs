use crate::api::AppState;
use crate::error::Result;
use crate::search::{GlobalResult, SearchOptions};
use axum::{
    extract::{Query, State},
    Json,
};
use serde::{Deserialize, Serialize};
use validator::Validate;

/// Health check endpoint
pub async fn health_check() -> Result<Json<HealthResponse>> {
    Ok(Json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    }))
}

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
}

/// Search every registered entity
///
/// The façade re-validates the query against its configured maximum; the
/// request-level bound here only rejects grossly oversized input early.
pub async fn global_search(
    State(state): State<AppState>,
    Query(params): Query<SearchParams>,
) -> Result<Json<GlobalResult>> {
    params.validate()?;

    let options = SearchOptions {
        global_timeout_ms: params.timeout_ms,
        per_model_cap: params.cap,
    };

    let result = state.search.search_with(&params.q, options).await?;
    Ok(Json(result))
}

#[derive(Debug, Deserialize, Validate)]
pub struct SearchParams {
    /// Free-text query
    #[validate(length(min = 1, max = 1024))]
    pub q: String,

    /// Per-call deadline override, in milliseconds
    pub timeout_ms: Option<u64>,

    /// Per-call result cap override
    pub cap: Option<usize>,
}
