use std::collections::HashSet;

use crate::models::{Product, ProductId};

/// User-facing message when the catalog cannot be loaded
pub const CATALOG_ERROR: &str = "Failed to load products.";

/// User-facing message when a recommendation request fails
pub const RECOMMENDATION_ERROR: &str = "Failed to get recommendations.";

/// Everything the view renders from
#[derive(Debug, Clone, Default, PartialEq)]
pub struct UiState {
    pub products: Vec<Product>,
    pub preferences_text: String,
    pub recommended_ids: HashSet<ProductId>,
    pub recommended_products: Vec<Product>,
    pub is_loading_catalog: bool,
    pub is_loading_recommendation: bool,
    pub error_message: Option<String>,
    /// Token of the most recently issued recommendation request
    pub latest_request: u64,
}

impl UiState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether the service recommended this product
    pub fn is_recommended(&self, id: ProductId) -> bool {
        self.recommended_ids.contains(&id)
    }

    /// Submission is disabled while a request is in flight or there is nothing to send
    pub fn can_submit(&self) -> bool {
        !self.is_loading_recommendation && !self.preferences_text.trim().is_empty()
    }

    pub(crate) fn clear_recommendation(&mut self) {
        self.recommended_ids.clear();
        self.recommended_products.clear();
    }
}
