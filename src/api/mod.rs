pub mod handlers;
pub mod routes;

pub use routes::*;

use crate::search::GlobalSearchService;
use std::sync::Arc;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub search: Arc<GlobalSearchService>,
}

impl AppState {
    pub fn new(search: Arc<GlobalSearchService>) -> Self {
        Self { search }
    }
}
