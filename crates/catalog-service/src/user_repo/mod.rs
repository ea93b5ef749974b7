//! # User Repository
//!
//! This module wires the User records into the generic repository framework. It is the
//! simpler of the two entity kinds: no free-text search, just department and
//! active-flag filters.
//!
//! ## Structure
//!
//! - [`entity`] - [`RepositoryEntity`](repository_framework::RepositoryEntity) implementation for [`User`]
//! - [`error`] - [`UserError`] type for type-safe error handling
//! - [`seed`] - The fixed user directory
//! - [`new()`] - Factory function that loads the repository and returns its query translator

pub mod entity;
pub mod error;
pub mod seed;

pub use error::*;

use crate::error::CatalogError;
use crate::queries::UserQuery;
use repository_framework::Repository;

/// Loads the user repository from the seed directory.
///
/// # Errors
///
/// Fails if the seed data contains duplicate ids or an invalid date.
pub fn new() -> Result<UserQuery, CatalogError> {
    let repository = Repository::new(seed::seed()?)?;
    Ok(UserQuery::new(repository))
}
