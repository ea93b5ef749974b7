//! # Product Query
//!
//! Provides a high-level API over the Product repository.
//! It wraps a `Repository<Product>` and exposes the catalog's named queries.
use crate::model::{Product, ProductId};
use crate::product_repo::ProductError;
use repository_framework::text::{contains_ignore_case, eq_ignore_case, is_blank};
use repository_framework::{EntityQuery, Repository};
use std::sync::Arc;
use tracing::{debug, instrument};

/// Query translator for the Product repository.
#[derive(Clone)]
pub struct ProductQuery {
    inner: Arc<Repository<Product>>,
}

impl ProductQuery {
    pub fn new(repository: Repository<Product>) -> Self {
        Self {
            inner: Arc::new(repository),
        }
    }
}

impl EntityQuery<Product> for ProductQuery {
    type Error = ProductError;

    fn repository(&self) -> &Repository<Product> {
        &self.inner
    }

    fn not_found(id: ProductId) -> Self::Error {
        ProductError::NotFound(id)
    }
}

impl ProductQuery {
    /// Products whose category equals `category`, ignoring case.
    ///
    /// An unknown category yields an empty list.
    #[instrument(skip(self))]
    pub fn by_category(&self, category: &str) -> Vec<Product> {
        debug!("Filtering by category");
        self.inner
            .filter(|product| eq_ignore_case(&product.category, category))
    }

    /// Products whose name or description contains `query`, ignoring case.
    ///
    /// An absent, empty or whitespace-only query returns the whole catalog.
    #[instrument(skip(self))]
    pub fn search(&self, query: Option<&str>) -> Vec<Product> {
        let text = match query {
            Some(text) if !is_blank(Some(text)) => text,
            _ => {
                debug!("Blank query, returning all products");
                return self.all();
            }
        };

        debug!("Searching name and description");
        self.inner.search(|product| {
            contains_ignore_case(&product.name, text)
                || contains_ignore_case(&product.description, text)
        })
    }
}
