use std::sync::{Arc, LazyLock};

use regex::Regex;
use serde_json::Value;
use tracing::instrument;

use crate::{
    error::AppResult,
    models::{ProductId, RecommendationResult},
    services::{
        catalog::Catalog,
        prompt::{build_recommendation_prompt, SYSTEM_PROMPT},
        providers::{CompletionProvider, CompletionRequest},
    },
};

const TEMPERATURE: f32 = 0.2;

static JSON_ARRAY: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?s)\[.*\]").expect("static regex is valid")
});

/// Picks catalog products for free-text preferences with a chat model
#[derive(Clone)]
pub struct Recommender {
    catalog: Arc<Catalog>,
    provider: Arc<dyn CompletionProvider>,
}

impl Recommender {
    pub fn new(catalog: Arc<Catalog>, provider: Arc<dyn CompletionProvider>) -> Self {
        Self { catalog, provider }
    }

    /// Generates recommendations for `preferences`
    ///
    /// `ids` keeps the order the model answered in; `recommended_products` follows
    /// catalog order. Ids outside the catalog are dropped.
    #[instrument(skip(self, preferences), fields(provider = self.provider.name()))]
    pub async fn recommend(&self, preferences: &str) -> AppResult<RecommendationResult> {
        let prompt = build_recommendation_prompt(self.catalog.products(), preferences);
        let reply = self
            .provider
            .complete(CompletionRequest {
                system: SYSTEM_PROMPT.to_string(),
                user: prompt,
                temperature: TEMPERATURE,
            })
            .await?;

        let candidates = parse_ids(&reply);
        let ids: Vec<ProductId> = candidates
            .iter()
            .copied()
            .filter(|id| self.catalog.contains(*id))
            .collect();

        if ids.len() != candidates.len() {
            tracing::warn!(
                returned = candidates.len(),
                kept = ids.len(),
                "Model returned ids outside the catalog"
            );
        }

        let recommended_products = self.catalog.select(&ids);

        tracing::info!(ids = ?ids, "Recommendations generated");

        Ok(RecommendationResult {
            ids,
            recommended_products,
        })
    }
}

/// Extract integer ids from a model reply
///
/// Accepts a bare JSON array, or falls back to the outermost `[...]` span in
/// surrounding prose. Anything unparseable yields no ids; non-integer entries are
/// skipped.
pub fn parse_ids(reply: &str) -> Vec<ProductId> {
    let parsed = serde_json::from_str::<Value>(reply.trim()).ok().or_else(|| {
        JSON_ARRAY
            .find(reply)
            .and_then(|m| serde_json::from_str::<Value>(m.as_str()).ok())
    });

    match parsed {
        Some(Value::Array(items)) => items.iter().filter_map(Value::as_u64).collect(),
        _ => {
            tracing::debug!(reply = %reply, "No id array found in model reply");
            Vec::new()
        }
    }
}
