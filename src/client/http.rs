use reqwest::{Client as HttpClient, Response};
use tracing::instrument;

use super::{ClientError, ClientResult, RecommendationService};
use crate::models::{CatalogResponse, Product, RecommendationRequest, RecommendationResult};

/// Talks to the service over HTTP/JSON
///
/// No timeout is configured: a request that never resolves keeps its caller
/// suspended.
#[derive(Clone)]
pub struct HttpRecommendationService {
    http_client: HttpClient,
    base_url: String,
}

impl HttpRecommendationService {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self::with_client(HttpClient::new(), base_url)
    }

    pub fn with_client(http_client: HttpClient, base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self {
            http_client,
            base_url,
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn check_status(response: Response) -> ClientResult<Response> {
        let status = response.status();
        if !status.is_success() {
            return Err(ClientError::RequestFailed {
                status: status.as_u16(),
            });
        }
        Ok(response)
    }
}

#[async_trait::async_trait]
impl RecommendationService for HttpRecommendationService {
    #[instrument(skip(self), fields(base_url = %self.base_url))]
    async fn fetch_catalog(&self) -> ClientResult<Vec<Product>> {
        let url = format!("{}/products", self.base_url);
        let response = self.http_client.get(&url).send().await?;
        let catalog: CatalogResponse = Self::check_status(response)?.json().await?;

        tracing::debug!(products = catalog.products.len(), "Catalog fetched");
        Ok(catalog.products)
    }

    #[instrument(skip(self, preferences), fields(base_url = %self.base_url))]
    async fn fetch_recommendations(&self, preferences: &str) -> ClientResult<RecommendationResult> {
        let url = format!("{}/recommend", self.base_url);
        let body = RecommendationRequest {
            preferences: preferences.to_string(),
        };
        let response = self.http_client.post(&url).json(&body).send().await?;
        let result: RecommendationResult = Self::check_status(response)?.json().await?;

        tracing::debug!(
            ids = result.ids.len(),
            products = result.recommended_products.len(),
            "Recommendations fetched"
        );
        Ok(result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trailing_slash_is_dropped() {
        let service = HttpRecommendationService::new("http://localhost:8000/");
        assert_eq!(service.base_url(), "http://localhost:8000");
    }

    #[tokio::test]
    async fn test_unreachable_service_is_transport_error() {
        // Port 9 (discard) on loopback is not expected to accept connections
        let service = HttpRecommendationService::new("http://127.0.0.1:9");
        let err = service.fetch_catalog().await.unwrap_err();
        assert!(matches!(err, ClientError::TransportOrParse(_)));
    }
}
