use serde::{Deserialize, Deserializer, Serialize};
use std::fmt::Display;

/// Identifier of a catalog product
pub type ProductId = u64;

/// A product as listed in the catalog
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    pub price: f64,
    pub category: String,
}

impl Product {
    pub fn new(id: ProductId, name: impl Into<String>, price: f64, category: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            price,
            category: category.into(),
        }
    }
}

impl Display for Product {
    /// Renders as `Phone A — $400 (Electronics)`
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} — ${} ({})", self.name, self.price, self.category)
    }
}

// ============================================================================
// Wire Types
// ============================================================================

/// Payload of `GET /products`
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct CatalogResponse {
    #[serde(default, deserialize_with = "null_as_default")]
    pub products: Vec<Product>,
}

/// Body of `POST /recommend`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RecommendationRequest {
    pub preferences: String,
}

/// Payload of a successful `POST /recommend`
///
/// `ids` and `recommended_products` come from the service independently; nothing
/// guarantees they describe the same products.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct RecommendationResult {
    #[serde(default, deserialize_with = "null_as_default")]
    pub ids: Vec<ProductId>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub recommended_products: Vec<Product>,
}

/// Treats an explicit `null` the same as a missing field
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_product_display_whole_price() {
        let product = Product::new(1, "Phone A", 400.0, "Electronics");
        assert_eq!(product.to_string(), "Phone A — $400 (Electronics)");
    }

    #[test]
    fn test_product_display_fractional_price() {
        let product = Product::new(2, "Earbuds", 49.99, "Audio");
        assert_eq!(product.to_string(), "Earbuds — $49.99 (Audio)");
    }

    #[test]
    fn test_catalog_missing_products_is_empty() {
        let catalog: CatalogResponse = serde_json::from_value(json!({})).unwrap();
        assert!(catalog.products.is_empty());
    }

    #[test]
    fn test_catalog_null_products_is_empty() {
        let catalog: CatalogResponse =
            serde_json::from_value(json!({ "products": null })).unwrap();
        assert!(catalog.products.is_empty());
    }

    #[test]
    fn test_recommendation_missing_fields_are_empty() {
        let result: RecommendationResult = serde_json::from_value(json!({})).unwrap();
        assert!(result.ids.is_empty());
        assert!(result.recommended_products.is_empty());

        let result: RecommendationResult =
            serde_json::from_value(json!({ "ids": null, "recommendedProducts": null })).unwrap();
        assert!(result.ids.is_empty());
        assert!(result.recommended_products.is_empty());
    }

    #[test]
    fn test_recommendation_uses_camel_case_on_the_wire() {
        let result = RecommendationResult {
            ids: vec![1],
            recommended_products: vec![Product::new(1, "Phone A", 400.0, "Electronics")],
        };
        let value = serde_json::to_value(&result).unwrap();
        assert_eq!(value["ids"], json!([1]));
        assert_eq!(value["recommendedProducts"][0]["name"], "Phone A");
    }

    #[test]
    fn test_recommendation_ignores_unknown_fields() {
        let result: RecommendationResult = serde_json::from_value(json!({
            "ids": [2, 5],
            "model": "llama"
        }))
        .unwrap();
        assert_eq!(result.ids, vec![2, 5]);
    }
}
