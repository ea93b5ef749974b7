//! Error types for User queries.

use crate::model::UserId;
use thiserror::Error;

/// Errors that can occur during user queries.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum UserError {
    /// No user has the requested id.
    #[error("User with ID {0} not found")]
    NotFound(UserId),
}
