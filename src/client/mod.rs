//! Client side of the product/recommendation service
//!
//! The UI controller only sees the [`RecommendationService`] trait, so the HTTP
//! implementation can be swapped for a mock in tests.
use crate::models::{Product, RecommendationResult};

pub mod http;

pub use http::HttpRecommendationService;

/// Why a call to the recommendation service failed
#[derive(thiserror::Error, Debug)]
pub enum ClientError {
    /// The service answered with a status outside the 2xx range
    #[error("Request failed with HTTP status {status}")]
    RequestFailed { status: u16 },

    /// The request never completed or the body could not be decoded
    #[error("Transport or parse error: {0}")]
    TransportOrParse(#[from] reqwest::Error),
}

pub type ClientResult<T> = Result<T, ClientError>;

/// Remote operations the UI depends on
#[cfg_attr(test, mockall::automock)]
#[async_trait::async_trait]
pub trait RecommendationService: Send + Sync {
    /// Fetch the full product catalog
    async fn fetch_catalog(&self) -> ClientResult<Vec<Product>>;

    /// Submit free-text preferences and get the service's pick
    async fn fetch_recommendations(&self, preferences: &str) -> ClientResult<RecommendationResult>;
}
