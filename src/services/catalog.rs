use std::path::Path;

use serde::Deserialize;

use crate::models::{Product, ProductId};

#[derive(thiserror::Error, Debug)]
pub enum CatalogError {
    #[error("Failed to read catalog file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse catalog file: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Duplicate product id {0} in catalog")]
    DuplicateId(ProductId),
}

/// Accepted catalog file layouts
#[derive(Deserialize)]
#[serde(untagged)]
enum CatalogFile {
    Bare(Vec<Product>),
    Wrapped { products: Vec<Product> },
}

/// The fixed product catalog served by the backend
#[derive(Debug, Clone, PartialEq)]
pub struct Catalog {
    products: Vec<Product>,
}

impl Catalog {
    pub fn new(products: Vec<Product>) -> Result<Self, CatalogError> {
        let mut seen = std::collections::HashSet::new();
        for product in &products {
            if !seen.insert(product.id) {
                return Err(CatalogError::DuplicateId(product.id));
            }
        }
        Ok(Self { products })
    }

    /// Built-in demo catalog
    pub fn demo() -> Self {
        let products = vec![
            Product::new(1, "Phone A", 400.0, "Electronics"),
            Product::new(2, "Phone B Pro", 899.0, "Electronics"),
            Product::new(3, "Budget Phone C", 199.0, "Electronics"),
            Product::new(4, "Gaming Laptop X", 1499.0, "Computers"),
            Product::new(5, "Ultrabook Air", 1099.0, "Computers"),
            Product::new(6, "Wireless Earbuds", 79.99, "Audio"),
            Product::new(7, "Noise-Cancelling Headphones", 299.0, "Audio"),
            Product::new(8, "Smartwatch S", 249.0, "Wearables"),
            Product::new(9, "Fitness Band", 49.0, "Wearables"),
            Product::new(10, "4K Monitor", 329.0, "Computers"),
        ];
        Self { products }
    }

    /// Load a catalog from a JSON file holding either `[...]` or `{ "products": [...] }`
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, CatalogError> {
        let raw = std::fs::read_to_string(path)?;
        Self::from_json(&raw)
    }

    pub fn from_json(raw: &str) -> Result<Self, CatalogError> {
        let products = match serde_json::from_str::<CatalogFile>(raw)? {
            CatalogFile::Bare(products) => products,
            CatalogFile::Wrapped { products } => products,
        };
        Self::new(products)
    }

    pub fn products(&self) -> &[Product] {
        &self.products
    }

    pub fn contains(&self, id: ProductId) -> bool {
        self.products.iter().any(|p| p.id == id)
    }

    /// Products whose id is in `ids`, in catalog order
    pub fn select(&self, ids: &[ProductId]) -> Vec<Product> {
        self.products
            .iter()
            .filter(|p| ids.contains(&p.id))
            .cloned()
            .collect()
    }
}
