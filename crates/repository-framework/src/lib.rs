//! # Repository Framework
//!
//! Generic building blocks for read-only, in-memory entity repositories.
//!
//! A repository holds a fixed, ordered collection of records that is loaded once
//! and never mutated afterwards. Every query is a pure function of that collection
//! and its arguments, so a repository can be shared freely between threads without
//! any locking.
//!
//! ## Architecture Overview
//!
//! The framework separates concerns into three layers:
//!
//! 1. **Entity Layer** ([`RepositoryEntity`]) - Your domain records and how they are identified
//! 2. **Storage Layer** ([`Repository`]) - Ordered storage with lookup, filter and search
//! 3. **Query Layer** ([`EntityQuery`]) - Per-entity translators that turn absence into typed errors
//!
//! ## Example
//!
//! ```rust
//! use repository_framework::{EntityQuery, Repository, RepositoryEntity};
//! use std::sync::Arc;
//!
//! #[derive(Clone, Debug)]
//! struct Book {
//!     id: u32,
//!     title: String,
//! }
//!
//! impl RepositoryEntity for Book {
//!     type Id = u32;
//!
//!     fn id(&self) -> &u32 {
//!         &self.id
//!     }
//! }
//!
//! #[derive(Debug, thiserror::Error)]
//! #[error("Book with ID {0} not found")]
//! struct BookNotFound(u32);
//!
//! struct BookQuery {
//!     repository: Arc<Repository<Book>>,
//! }
//!
//! impl EntityQuery<Book> for BookQuery {
//!     type Error = BookNotFound;
//!
//!     fn repository(&self) -> &Repository<Book> {
//!         &self.repository
//!     }
//!
//!     fn not_found(id: u32) -> BookNotFound {
//!         BookNotFound(id)
//!     }
//! }
//!
//! let books = Repository::new(vec![
//!     Book { id: 1, title: "Dune".into() },
//!     Book { id: 2, title: "Emma".into() },
//! ])
//! .unwrap();
//! let query = BookQuery { repository: Arc::new(books) };
//!
//! assert_eq!(query.all().len(), 2);
//! assert_eq!(query.by_id(2).unwrap().title, "Emma");
//! assert_eq!(query.by_id(7).unwrap_err().to_string(), "Book with ID 7 not found");
//! ```
//!
//! ## Case-insensitive matching
//!
//! The [`text`] module provides the ordinal case-folding helpers used to build
//! predicates for [`Repository::filter`] and [`Repository::search`].

pub mod entity;
pub mod error;
pub mod query;
pub mod repository;
pub mod text;
pub mod tracing;

// Re-export core types for convenience
pub use entity::{entity_type, RepositoryEntity};
pub use error::FrameworkError;
pub use query::EntityQuery;
pub use repository::Repository;
