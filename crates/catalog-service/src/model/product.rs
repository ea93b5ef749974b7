//! Product records.
//!
//! [`Product`] implements the [`RepositoryEntity`](repository_framework::RepositoryEntity) trait,
//! allowing it to be held by a [`Repository`](repository_framework::Repository).
//!
//! Serializes with camelCase keys; `price` is emitted as a JSON number carrying the
//! decimal's exact digits and scale.
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use std::fmt::Display;

/// Type-safe identifier for Products.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProductId(pub i32);

impl From<i32> for ProductId {
    fn from(id: i32) -> Self {
        Self(id)
    }
}

impl Display for ProductId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    pub description: String,
    #[serde(with = "rust_decimal::serde::arbitrary_precision")]
    pub price: Decimal,
    pub stock: u32,
    pub category: String,
}

impl Product {
    /// Creates a new Product instance.
    ///
    /// # Arguments
    /// * `id` - Unique identifier within the product repository
    /// * `name` - Product name
    /// * `description` - Free-text description, may be empty
    /// * `price` - Unit price
    /// * `stock` - Units on hand
    /// * `category` - Category name, matched case-insensitively
    pub fn new(
        id: impl Into<ProductId>,
        name: impl Into<String>,
        description: impl Into<String>,
        price: Decimal,
        stock: u32,
        category: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            description: description.into(),
            price,
            stock,
            category: category.into(),
        }
    }
}
