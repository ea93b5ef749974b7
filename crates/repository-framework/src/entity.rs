//! # RepositoryEntity Trait
//!
//! The `RepositoryEntity` trait defines the contract every record type (Product, User, …)
//! must satisfy to be stored in a generic [`Repository`](crate::Repository).
//!
//! Records are plain immutable values. The only thing the framework needs to know about
//! them is how to read their identifier, which is used for lookups and for the
//! id-uniqueness check performed when a repository is loaded.

use std::fmt::{Debug, Display};
use std::hash::Hash;

/// Trait that any record type must implement to be held by a [`Repository`](crate::Repository).
///
/// # Architecture Note
/// By defining a contract (`RepositoryEntity`) that all our record types must satisfy,
/// the lookup, filter and search logic is written *once* in [`Repository`](crate::Repository)
/// and reused for every entity kind.
///
/// The associated `Id` type keeps lookups type-safe: a `ProductId` can never be used to
/// query the user repository.
pub trait RepositoryEntity: Clone + Send + Sync + 'static {
    /// The unique identifier for this entity (e.g., a newtype around an integer).
    type Id: Eq + Hash + Clone + Send + Sync + Display + Debug;

    /// Returns the identifier assigned to this record at load time.
    fn id(&self) -> &Self::Id;
}

/// Short type name of an entity, used as the `entity_type` field in logs.
///
/// Returns `"Product"` instead of `"catalog_service::model::product::Product"`.
pub fn entity_type<T: RepositoryEntity>() -> &'static str {
    std::any::type_name::<T>()
        .split("::")
        .last()
        .unwrap_or("Unknown")
}
