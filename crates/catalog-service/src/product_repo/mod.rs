//! # Product Repository
//!
//! This module wires the Product records into the generic repository framework.
//!
//! ## Structure
//!
//! - [`entity`] - [`RepositoryEntity`](repository_framework::RepositoryEntity) implementation for [`Product`]
//! - [`error`] - [`ProductError`] type for type-safe error handling
//! - [`seed`] - The fixed product catalog
//! - [`new()`] - Factory function that loads the repository and returns its query translator
//!
//! ## Usage
//!
//! ```rust
//! use catalog_service::product_repo;
//! use catalog_service::model::ProductId;
//! use repository_framework::EntityQuery;
//!
//! let products = product_repo::new().unwrap();
//!
//! let laptop = products.by_id(ProductId(1)).unwrap();
//! assert_eq!(laptop.name, "Laptop");
//!
//! let audio = products.by_category("AUDIO");
//! assert_eq!(audio.len(), 1);
//! ```

pub mod entity;
pub mod error;
pub mod seed;

pub use error::*;

use crate::error::CatalogError;
use crate::queries::ProductQuery;
use repository_framework::Repository;

/// Loads the product repository from the seed catalog.
///
/// # Errors
///
/// Fails if the seed data contains duplicate ids.
pub fn new() -> Result<ProductQuery, CatalogError> {
    let repository = Repository::new(seed::seed())?;
    Ok(ProductQuery::new(repository))
}
