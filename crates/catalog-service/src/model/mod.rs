//! Pure data structures implementing the [`RepositoryEntity`](repository_framework::RepositoryEntity) trait.

pub mod product;
pub mod user;

pub use product::*;
pub use user::*;
