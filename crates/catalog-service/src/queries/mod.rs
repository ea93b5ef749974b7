//! Type-safe query translators around [`Repository`](repository_framework::Repository).
//!
//! Each translator implements [`EntityQuery`](repository_framework::EntityQuery) for the
//! shared `all`/`by_id` lookups and adds the filters specific to its entity.

pub mod product_query;
pub mod user_query;

pub use product_query::*;
pub use user_query::*;
