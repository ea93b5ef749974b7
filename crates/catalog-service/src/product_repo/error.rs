//! Error types for Product queries.

use crate::model::ProductId;
use thiserror::Error;

/// Errors that can occur during product queries.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ProductError {
    /// No product has the requested id.
    #[error("Product with ID {0} not found")]
    NotFound(ProductId),
}
