use std::sync::Arc;

use tokio::sync::RwLock;
use tracing::instrument;

use super::state::{UiState, CATALOG_ERROR, RECOMMENDATION_ERROR};
use crate::client::RecommendationService;
use crate::models::ProductId;

/// What became of a recommendation submission
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Blank preferences; nothing was sent and no request state changed
    Skipped,
    /// The response was applied to the state
    Applied,
    /// The request failed and the error message was set
    Failed,
    /// A newer submission was issued before this one resolved; its result was dropped
    Stale,
}

/// Owns the UI state and drives both service calls
///
/// Cloning is cheap and every clone shares the same state, so submissions can be
/// run on separate tasks. Overlapping submissions are resolved by sequence token:
/// only the response to the most recently issued request is applied.
#[derive(Clone)]
pub struct RecommendationController {
    state: Arc<RwLock<UiState>>,
    service: Arc<dyn RecommendationService>,
}

impl RecommendationController {
    pub fn new(service: Arc<dyn RecommendationService>) -> Self {
        Self {
            state: Arc::new(RwLock::new(UiState::new())),
            service,
        }
    }

    /// Copy of the current state for rendering
    pub async fn snapshot(&self) -> UiState {
        self.state.read().await.clone()
    }

    pub async fn is_recommended(&self, id: ProductId) -> bool {
        self.state.read().await.is_recommended(id)
    }

    pub async fn can_submit(&self) -> bool {
        self.state.read().await.can_submit()
    }

    pub async fn set_preferences(&self, text: impl Into<String>) {
        self.state.write().await.preferences_text = text.into();
    }

    /// Replace the catalog with whatever the service returns
    ///
    /// Failures clear the catalog and set the catalog error message. There is no
    /// retry.
    #[instrument(skip(self))]
    pub async fn load_catalog(&self) {
        self.state.write().await.is_loading_catalog = true;

        let outcome = self.service.fetch_catalog().await;

        let mut state = self.state.write().await;
        match outcome {
            Ok(products) => {
                tracing::info!(products = products.len(), "Catalog loaded");
                state.products = products;
            }
            Err(e) => {
                tracing::error!(error = %e, "Failed to load catalog");
                state.products.clear();
                state.error_message = Some(CATALOG_ERROR.to_string());
            }
        }
        state.is_loading_catalog = false;
    }

    /// Store `text` as the preferences and submit it unless submission is disabled
    ///
    /// This is one round of the interactive prompt: blank input is kept in the
    /// state but nothing is sent.
    pub async fn enter_preferences(&self, text: impl Into<String>) -> SubmitOutcome {
        self.set_preferences(text).await;
        if !self.can_submit().await {
            return SubmitOutcome::Skipped;
        }
        self.submit().await
    }

    /// Submit the preferences text currently held in the state
    pub async fn submit(&self) -> SubmitOutcome {
        let preferences = self.state.read().await.preferences_text.clone();
        self.request_recommendation(&preferences).await
    }

    /// Ask the service for recommendations matching `preferences`
    ///
    /// The text is sent verbatim. Blank text is a no-op.
    #[instrument(skip(self, preferences))]
    pub async fn request_recommendation(&self, preferences: &str) -> SubmitOutcome {
        if preferences.trim().is_empty() {
            tracing::debug!("Ignoring blank preferences");
            return SubmitOutcome::Skipped;
        }

        let token = {
            let mut state = self.state.write().await;
            state.latest_request += 1;
            state.error_message = None;
            state.clear_recommendation();
            state.is_loading_recommendation = true;
            state.latest_request
        };

        let outcome = self.service.fetch_recommendations(preferences).await;

        let mut state = self.state.write().await;
        if state.latest_request != token {
            tracing::debug!(
                token,
                latest = state.latest_request,
                "Discarding response to superseded request"
            );
            return SubmitOutcome::Stale;
        }

        let submit_outcome = match outcome {
            Ok(result) => {
                tracing::info!(
                    token,
                    ids = result.ids.len(),
                    products = result.recommended_products.len(),
                    "Recommendations received"
                );
                state.recommended_ids = result.ids.into_iter().collect();
                state.recommended_products = result.recommended_products;
                SubmitOutcome::Applied
            }
            Err(e) => {
                tracing::error!(token, error = %e, "Failed to get recommendations");
                state.error_message = Some(RECOMMENDATION_ERROR.to_string());
                SubmitOutcome::Failed
            }
        };
        state.is_loading_recommendation = false;

        submit_outcome
    }
}
