use std::sync::Arc;

use crate::services::{providers::CompletionProvider, Catalog, Recommender};

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub catalog: Arc<Catalog>,
    pub recommender: Recommender,
}

impl AppState {
    /// Builds state serving `catalog` and recommending through `provider`
    pub fn new(catalog: Catalog, provider: Arc<dyn CompletionProvider>) -> Self {
        let catalog = Arc::new(catalog);
        Self {
            recommender: Recommender::new(catalog.clone(), provider),
            catalog,
        }
    }
}
