//! # Generic Repository
//!
//! This module defines the `Repository`, the component that owns a fixed collection of
//! records and answers queries against it without ever mutating it.

use crate::entity::{entity_type, RepositoryEntity};
use crate::error::FrameworkError;
use std::collections::HashSet;
use tracing::{debug, info, warn};

/// An ordered, immutable, in-memory collection of entities.
///
/// # Architecture Note
/// The repository is loaded once and then only read. Because nothing can change the
/// backing `Vec` after [`Repository::new`] returns, a single instance can be wrapped
/// in an `Arc` and queried from any number of tasks at once, with no `Mutex` or
/// `RwLock` in sight.
///
/// # Ordering
/// Insertion order is the enumeration order of every operation. Queries never sort
/// or otherwise reorder records.
///
/// ## Operations
///
/// * **get_all**: every record, in insertion order.
/// * **get_by_id**: the first record with a matching id, or `None`.
/// * **filter**: every record matching a predicate, in insertion order.
/// * **search**: same contract as `filter`, for predicates built from free text.
///
/// Results are clones; callers never hold references into the store.
#[derive(Debug, Clone)]
pub struct Repository<T: RepositoryEntity> {
    records: Vec<T>,
}

impl<T: RepositoryEntity> Repository<T> {
    /// Loads a repository from its seed records.
    ///
    /// # Errors
    ///
    /// Returns [`FrameworkError::DuplicateId`] if two records share an identifier.
    pub fn new(records: impl IntoIterator<Item = T>) -> Result<Self, FrameworkError> {
        let entity_type = entity_type::<T>();
        let records: Vec<T> = records.into_iter().collect();

        let mut seen = HashSet::with_capacity(records.len());
        for record in &records {
            if !seen.insert(record.id()) {
                let id = record.id();
                warn!(entity_type, %id, "Duplicate id in seed data");
                return Err(FrameworkError::DuplicateId {
                    entity_type,
                    id: id.to_string(),
                });
            }
        }

        info!(entity_type, size = records.len(), "Repository loaded");
        Ok(Self { records })
    }

    /// Returns every record in insertion order.
    pub fn get_all(&self) -> Vec<T> {
        self.records.clone()
    }

    /// Returns the first record whose id equals `id`, scanning in insertion order.
    ///
    /// Absence is an ordinary value at this layer, not an error.
    pub fn get_by_id(&self, id: &T::Id) -> Option<T> {
        let item = self.records.iter().find(|record| record.id() == id).cloned();
        debug!(entity_type = entity_type::<T>(), %id, found = item.is_some(), "Get");
        item
    }

    /// Returns, in insertion order, every record for which `predicate` holds.
    pub fn filter<P>(&self, predicate: P) -> Vec<T>
    where
        P: Fn(&T) -> bool,
    {
        let matches: Vec<T> = self
            .records
            .iter()
            .filter(|&record| predicate(record))
            .cloned()
            .collect();
        debug!(entity_type = entity_type::<T>(), matches = matches.len(), "Filter");
        matches
    }

    /// Returns, in insertion order, every record for which `predicate` holds.
    ///
    /// Identical to [`Repository::filter`]; callers use it for predicates built from
    /// free-text input so the two kinds of query stay distinguishable in logs.
    pub fn search<P>(&self, predicate: P) -> Vec<T>
    where
        P: Fn(&T) -> bool,
    {
        let matches: Vec<T> = self
            .records
            .iter()
            .filter(|&record| predicate(record))
            .cloned()
            .collect();
        debug!(entity_type = entity_type::<T>(), matches = matches.len(), "Search");
        matches
    }

    /// Iterates the records in insertion order without cloning them.
    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.records.iter()
    }

    /// Number of records held.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// True when the repository holds no records.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
