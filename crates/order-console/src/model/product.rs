//! Catalog products. Prices are integers in the minor currency unit.

use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// Opaque product identifier issued by the catalog service.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProductId(pub String);

impl From<u32> for ProductId {
    fn from(id: u32) -> Self {
        Self(format!("p{}", id))
    }
}

impl From<&str> for ProductId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

impl Display for ProductId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub product_id: ProductId,
    pub name: String,
    pub price: u64,
}

impl Product {
    /// Creates a new Product.
    ///
    /// # Arguments
    /// * `product_id` - Identifier issued by the catalog service
    /// * `name` - Display name
    /// * `price` - Unit price in the minor currency unit
    pub fn new(product_id: impl Into<ProductId>, name: impl Into<String>, price: u64) -> Self {
        Self {
            product_id: product_id.into(),
            name: name.into(),
            price,
        }
    }
}

/// Payload for adding a product to the in-process backend.
#[derive(Debug, Clone)]
pub struct ProductCreate {
    pub name: String,
    pub price: u64,
}
