//! RepositoryEntity trait implementation for the Product domain type.
//!
//! This module contains the [`RepositoryEntity`] trait implementation
//! that enables [`Product`] to be held by the generic [`repository_framework::Repository`].

use crate::model::{Product, ProductId};
use repository_framework::RepositoryEntity;

impl RepositoryEntity for Product {
    type Id = ProductId;

    fn id(&self) -> &ProductId {
        &self.id
    }
}
