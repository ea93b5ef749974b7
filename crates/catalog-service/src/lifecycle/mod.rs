//! # System Lifecycle & Orchestration
//!
//! This module owns the runtime lifecycle of the catalog: loading the repositories,
//! wiring their query translators into the HTTP routes, and serving until shutdown.
//!
//! ## The CatalogSystem Pattern
//!
//! ```rust,ignore
//! impl CatalogSystem {
//!     pub fn new() -> Result<Self, CatalogError> {
//!         // 1. Load each repository once from its seed data
//!         let product_query = product_repo::new()?;
//!         let user_query = user_repo::new()?;
//!         Ok(Self { product_query, user_query })
//!     }
//!
//!     pub fn router(&self) -> Router {
//!         // 2. Inject the translators into the routes
//!         api::router(self.product_query.clone(), self.user_query.clone())
//!     }
//! }
//! ```
//!
//! ## Dependency Injection
//!
//! Repositories are never global. Each one is created by [`CatalogSystem::new`], wrapped
//! in an `Arc` by its query translator, and passed explicitly to the router. Cloning a
//! translator clones the `Arc`, so every request handler reads the same records.
//!
//! ## Graceful Shutdown
//!
//! [`CatalogSystem::serve`] takes the shutdown future as an argument. The binary passes
//! [`shutdown_signal`] (Ctrl-C); tests pass a future that is already complete.
//!
//! ## Observability & Tracing
//!
//! Call [`repository_framework::tracing::setup_tracing`] before [`CatalogSystem::new`]
//! so repository loading is logged.

pub mod catalog_system;

pub use catalog_system::*;
