use axum::{extract::State, http::StatusCode, Extension, Json};
use serde_json::{json, Value};

use crate::error::AppResult;
use crate::middleware::RequestId;
use crate::models::{CatalogResponse, RecommendationRequest, RecommendationResult};

use super::AppState;

/// Service banner
pub async fn root() -> Json<Value> {
    Json(json!({
        "status": "ok",
        "message": "AI Product Recommender backend running"
    }))
}

/// Health check endpoint
pub async fn health_check() -> (StatusCode, Json<Value>) {
    (StatusCode::OK, Json(json!({ "status": "healthy" })))
}

/// Full product catalog
pub async fn get_products(State(state): State<AppState>) -> Json<CatalogResponse> {
    Json(CatalogResponse {
        products: state.catalog.products().to_vec(),
    })
}

/// Recommend catalog products for free-text preferences
pub async fn recommend(
    State(state): State<AppState>,
    request_id: Option<Extension<RequestId>>,
    Json(request): Json<RecommendationRequest>,
) -> AppResult<Json<RecommendationResult>> {
    let request_id = request_id.map(|Extension(id)| id.to_string());
    tracing::info!(
        request_id = request_id.as_deref().unwrap_or("unknown"),
        preferences_len = request.preferences.len(),
        "Recommendation requested"
    );

    let result = state.recommender.recommend(&request.preferences).await?;
    Ok(Json(result))
}
