//! # Catalog Service Library
//!
//! Read-only query access to a fixed product catalog and user directory, built on
//! [`repository_framework`]. This library exposes the core modules of the application
//! for the binary and for integration testing.
//!
//! - **[model]**: Pure data structures ([`Product`](model::Product), [`User`](model::User)).
//! - **[product_repo]** / **[user_repo]**: Entity wiring, seed data and per-entity errors.
//! - **[queries]**: Type-safe query translators ([`ProductQuery`](queries::ProductQuery), [`UserQuery`](queries::UserQuery)).
//! - **[lifecycle]**: [`CatalogSystem`](lifecycle::CatalogSystem), which loads everything and serves HTTP.
//! - **[api]**: axum routes and the error-to-response mapping.

pub mod api;
pub mod config;
pub mod error;
pub mod lifecycle;
pub mod model;
pub mod product_repo;
pub mod queries;
pub mod user_repo;
