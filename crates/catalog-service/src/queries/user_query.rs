use crate::model::{User, UserId};
use crate::user_repo::UserError;
use repository_framework::text::eq_ignore_case;
use repository_framework::{EntityQuery, Repository};
use std::sync::Arc;
use tracing::{debug, instrument};

/// Query translator for the User repository.
#[derive(Clone)]
pub struct UserQuery {
    inner: Arc<Repository<User>>,
}

impl UserQuery {
    pub fn new(repository: Repository<User>) -> Self {
        Self {
            inner: Arc::new(repository),
        }
    }
}

impl EntityQuery<User> for UserQuery {
    type Error = UserError;

    fn repository(&self) -> &Repository<User> {
        &self.inner
    }

    fn not_found(id: UserId) -> Self::Error {
        UserError::NotFound(id)
    }
}

impl UserQuery {
    /// Users whose department equals `department`, ignoring case.
    #[instrument(skip(self))]
    pub fn by_department(&self, department: &str) -> Vec<User> {
        debug!("Filtering by department");
        self.inner
            .filter(|user| eq_ignore_case(&user.department, department))
    }

    /// Users with an active account.
    #[instrument(skip(self))]
    pub fn active(&self) -> Vec<User> {
        debug!("Filtering active users");
        self.inner.filter(|user| user.is_active)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::user_repo;

    fn ids(users: &[User]) -> Vec<i32> {
        users.iter().map(|u| u.id.0).collect()
    }

    #[test]
    fn all_returns_seed_in_insertion_order() {
        let query = user_repo::new().unwrap();
        assert_eq!(ids(&query.all()), vec![1, 2, 3, 4, 5]);
    }

    #[test]
    fn by_id_returns_exactly_that_user() {
        let query = user_repo::new().unwrap();
        for id in 1..=5 {
            let user = query.by_id(UserId(id)).unwrap();
            assert_eq!(user.id, UserId(id));
        }
        let user = query.by_id(UserId(3)).unwrap();
        assert_eq!(user.name, "Bob Johnson");
        assert_eq!(user.email, "bob.johnson@example.com");
    }

    #[test]
    fn by_id_reports_missing_users() {
        let query = user_repo::new().unwrap();
        let err = query.by_id(UserId(42)).unwrap_err();
        assert_eq!(err, UserError::NotFound(UserId(42)));
        assert_eq!(err.to_string(), "User with ID 42 not found");
    }

    #[test]
    fn by_department_ignores_case_and_keeps_order() {
        let query = user_repo::new().unwrap();
        let engineering = query.by_department("engineering");
        assert_eq!(ids(&engineering), vec![1, 4]);
        assert_eq!(query.by_department("ENGINEERING"), engineering);
        assert_eq!(ids(&query.by_department("hr")), vec![5]);
    }

    #[test]
    fn by_department_without_matches_is_empty() {
        let query = user_repo::new().unwrap();
        assert!(query.by_department("Finance").is_empty());
    }

    #[test]
    fn active_excludes_inactive_users() {
        let query = user_repo::new().unwrap();
        let active = query.active();
        assert_eq!(ids(&active), vec![1, 2, 3, 4]);
        assert!(active.iter().all(|u| u.is_active));
    }
}
