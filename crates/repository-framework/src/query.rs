//! # EntityQuery Trait
//!
//! Provides a common interface for entity-specific query translators, adding default
//! `all` and `by_id` methods built on top of a generic [`Repository`].
use crate::entity::{entity_type, RepositoryEntity};
use crate::Repository;
use tracing::{info, warn};

/// Trait for entity-specific query translators to inherit the standard lookups.
///
/// A translator wraps a [`Repository`] and owns the mapping from "no record with this
/// id" to its own typed error. Filtering operations that are specific to one entity
/// (by category, by department, free-text search) are plain inherent methods on the
/// implementing type.
///
/// # Example
///
/// ```rust
/// use repository_framework::{EntityQuery, Repository, RepositoryEntity};
///
/// #[derive(Clone, Debug)]
/// struct Team { id: u16 }
///
/// impl RepositoryEntity for Team {
///     type Id = u16;
///     fn id(&self) -> &u16 { &self.id }
/// }
///
/// #[derive(Debug, thiserror::Error)]
/// #[error("Team with ID {0} not found")]
/// struct TeamNotFound(u16);
///
/// struct TeamQuery { repository: Repository<Team> }
///
/// impl EntityQuery<Team> for TeamQuery {
///     type Error = TeamNotFound;
///
///     fn repository(&self) -> &Repository<Team> {
///         &self.repository
///     }
///
///     fn not_found(id: u16) -> TeamNotFound {
///         TeamNotFound(id)
///     }
/// }
///
/// let query = TeamQuery { repository: Repository::new(vec![Team { id: 1 }]).unwrap() };
/// // all() and by_id() are provided automatically!
/// assert_eq!(query.all().len(), 1);
/// assert!(query.by_id(2).is_err());
/// ```
pub trait EntityQuery<T: RepositoryEntity>: Send + Sync {
    /// The entity-specific error type.
    type Error: std::error::Error + Send + Sync + 'static;

    /// Access the underlying repository.
    fn repository(&self) -> &Repository<T>;

    /// Build the error reported when no record has the requested id.
    fn not_found(id: T::Id) -> Self::Error;

    /// Fetch every record, in insertion order.
    #[tracing::instrument(skip(self))]
    fn all(&self) -> Vec<T> {
        info!(entity_type = entity_type::<T>(), "Getting all");
        self.repository().get_all()
    }

    /// Fetch a single record by id.
    ///
    /// # Errors
    ///
    /// Returns [`EntityQuery::not_found`] for the id when no record matches.
    #[tracing::instrument(skip(self))]
    fn by_id(&self, id: T::Id) -> Result<T, Self::Error> {
        match self.repository().get_by_id(&id) {
            Some(record) => Ok(record),
            None => {
                warn!(entity_type = entity_type::<T>(), %id, "Not found");
                Err(Self::not_found(id))
            }
        }
    }
}
