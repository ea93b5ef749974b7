use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use std::fmt::Display;

/// Type-safe identifier for Users.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UserId(pub i32);

impl From<i32> for UserId {
    fn from(id: i32) -> Self {
        Self(id)
    }
}

impl Display for UserId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Represents a registered user in the directory.
///
/// # Repository Framework
/// This struct implements the [`RepositoryEntity`](repository_framework::RepositoryEntity) trait,
/// allowing it to be held by a [`Repository`](repository_framework::Repository).
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: UserId,
    pub name: String,
    pub email: String,
    pub department: String,
    pub joined_date: NaiveDate,
    pub is_active: bool,
}

impl User {
    /// Creates a new User instance.
    ///
    /// # Arguments
    /// * `id` - Unique identifier within the user repository
    /// * `name` - Display name
    /// * `email` - Email address, stored as given
    /// * `department` - Department name, matched case-insensitively
    /// * `joined_date` - Calendar date the user joined
    /// * `is_active` - Whether the account is active
    pub fn new(
        id: impl Into<UserId>,
        name: impl Into<String>,
        email: impl Into<String>,
        department: impl Into<String>,
        joined_date: NaiveDate,
        is_active: bool,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            email: email.into(),
            department: department.into(),
            joined_date,
            is_active,
        }
    }
}
