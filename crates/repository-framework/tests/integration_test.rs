use repository_framework::text::{contains_ignore_case, eq_ignore_case, is_blank};
use repository_framework::{EntityQuery, FrameworkError, Repository, RepositoryEntity};
use std::sync::Arc;

// --- Test Entity ---

#[derive(Clone, Debug, PartialEq)]
struct SimpleUser {
    id: u32,
    name: String,
    team: String,
    is_admin: bool,
}

impl RepositoryEntity for SimpleUser {
    type Id = u32;

    fn id(&self) -> &u32 {
        &self.id
    }
}

#[derive(Debug, PartialEq, thiserror::Error)]
#[error("SimpleUser with ID {0} not found")]
struct SimpleUserNotFound(u32);

#[derive(Clone)]
struct SimpleUserQuery {
    repository: Arc<Repository<SimpleUser>>,
}

impl EntityQuery<SimpleUser> for SimpleUserQuery {
    type Error = SimpleUserNotFound;

    fn repository(&self) -> &Repository<SimpleUser> {
        &self.repository
    }

    fn not_found(id: u32) -> SimpleUserNotFound {
        SimpleUserNotFound(id)
    }
}

impl SimpleUserQuery {
    fn by_team(&self, team: &str) -> Vec<SimpleUser> {
        self.repository.filter(|u| eq_ignore_case(&u.team, team))
    }

    fn admins(&self) -> Vec<SimpleUser> {
        self.repository.filter(|u| u.is_admin)
    }

    fn search(&self, query: Option<&str>) -> Vec<SimpleUser> {
        match query {
            Some(text) if !is_blank(Some(text)) => {
                self.repository.search(|u| contains_ignore_case(&u.name, text))
            }
            _ => self.all(),
        }
    }
}

fn user(id: u32, name: &str, team: &str, is_admin: bool) -> SimpleUser {
    SimpleUser {
        id,
        name: name.to_string(),
        team: team.to_string(),
        is_admin,
    }
}

fn query() -> SimpleUserQuery {
    let repository = Repository::new(vec![
        user(10, "Alice", "Core", true),
        user(20, "Bob", "Web", false),
        user(30, "Carol", "core", false),
        user(40, "Dave", "Ops", true),
    ])
    .expect("seed ids are unique");
    SimpleUserQuery {
        repository: Arc::new(repository),
    }
}

#[test]
fn test_query_translator_end_to_end() {
    let query = query();

    // 1. All, in insertion order
    let ids: Vec<u32> = query.all().iter().map(|u| u.id).collect();
    assert_eq!(ids, vec![10, 20, 30, 40]);

    // 2. By id
    assert_eq!(query.by_id(30).unwrap().name, "Carol");
    assert_eq!(query.by_id(31), Err(SimpleUserNotFound(31)));
    assert_eq!(
        query.by_id(31).unwrap_err().to_string(),
        "SimpleUser with ID 31 not found"
    );

    // 3. Case-insensitive exact filter
    let team = query.by_team("CORE");
    let core: Vec<&str> = team.iter().map(|u| u.name.as_str()).collect();
    assert_eq!(core, vec!["Alice", "Carol"]);
    assert!(query.by_team("Design").is_empty());

    // 4. Boolean filter
    let admins: Vec<u32> = query.admins().iter().map(|u| u.id).collect();
    assert_eq!(admins, vec![10, 40]);

    // 5. Free-text search with blank fallback
    assert_eq!(query.search(None), query.all());
    assert_eq!(query.search(Some("  ")), query.all());
    assert_eq!(query.search(Some("AR")).len(), 1);
}

#[test]
fn test_repeated_queries_are_identical() {
    let query = query();
    assert_eq!(query.all(), query.all());
    assert_eq!(query.by_team("core"), query.by_team("core"));
    assert_eq!(query.search(Some("o")), query.search(Some("o")));
}

#[test]
fn test_concurrent_readers_share_one_repository() {
    let query = query();

    let handles: Vec<_> = (0..8)
        .map(|_| {
            let query = query.clone();
            std::thread::spawn(move || query.by_team("core").len())
        })
        .collect();

    for handle in handles {
        assert_eq!(handle.join().unwrap(), 2);
    }
}

#[test]
fn test_duplicate_seed_is_rejected() {
    let result = Repository::new(vec![
        user(1, "Alice", "Core", true),
        user(1, "Bob", "Web", false),
    ]);
    assert!(matches!(
        result,
        Err(FrameworkError::DuplicateId { entity_type: "SimpleUser", .. })
    ));
}
