//! RepositoryEntity trait implementation for the User domain type.

use crate::model::{User, UserId};
use repository_framework::RepositoryEntity;

impl RepositoryEntity for User {
    type Id = UserId;

    fn id(&self) -> &UserId {
        &self.id
    }
}
