//! Null object pattern: a lookup miss yields a "Guest" that answers every
//! question a real user would, so call sites never branch on presence.

use crate::error::{PatternError, Result};

pub const GUEST_NAME: &str = "Guest";

pub trait UserRecord {
    fn id(&self) -> i64;
    fn name(&self) -> &str;
    fn has_access(&self) -> bool;
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    id: i64,
    name: String,
    has_access: bool,
}

impl User {
    pub fn new(id: i64, name: impl Into<String>, has_access: bool) -> Self {
        User {
            id,
            name: name.into(),
            has_access,
        }
    }
}

impl UserRecord for User {
    fn id(&self) -> i64 {
        self.id
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn has_access(&self) -> bool {
        self.has_access
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct NullUser;

impl UserRecord for NullUser {
    fn id(&self) -> i64 {
        -1
    }

    fn name(&self) -> &str {
        GUEST_NAME
    }

    fn has_access(&self) -> bool {
        false
    }
}

static GUEST: NullUser = NullUser;

#[derive(Debug, Clone, Default)]
pub struct UserDirectory {
    users: Vec<User>,
}

impl UserDirectory {
    /// Builds a directory where only names on `access_list` get in.
    pub fn new<'a>(entries: impl IntoIterator<Item = (i64, &'a str)>, access_list: &[String]) -> Self {
        let users = entries
            .into_iter()
            .map(|(id, name)| User::new(id, name, access_list.iter().any(|allowed| allowed == name)))
            .collect();
        UserDirectory { users }
    }

    /// Bob (1) and John (2); only Bob has access.
    pub fn sample() -> Self {
        Self::new([(1, "Bob"), (2, "John")], &["Bob".to_string()])
    }

    pub fn find_user(&self, id: i64) -> Result<&User> {
        self.users
            .iter()
            .find(|user| user.id == id)
            .ok_or(PatternError::RecordNotFound { id })
    }

    pub fn get_user(&self, id: i64) -> &dyn UserRecord {
        match self.find_user(id) {
            Ok(user) => user as &dyn UserRecord,
            Err(err) => {
                tracing::debug!(error = %err, "falling back to guest");
                &GUEST
            }
        }
    }
}

// =============================================================================
// Milestone 1: Presence checks at the call site
// =============================================================================

pub fn greeting_with_checks(user: Option<&User>) -> Vec<String> {
    let mut name = GUEST_NAME;
    if let Some(user) = user {
        if !user.name.is_empty() {
            name = user.name.as_str();
        }
    }

    let access = match user {
        Some(user) if user.has_access => "You have access",
        _ => "You are not allowed here",
    };

    vec![format!("Hello {name}"), access.to_string()]
}

// =============================================================================
// Milestone 2: Null object
// =============================================================================

pub fn greeting(user: &dyn UserRecord) -> Vec<String> {
    let access = if user.has_access() {
        "You have access"
    } else {
        "You are not allowed here"
    };
    vec![format!("Hello {}", user.name()), access.to_string()]
}

pub fn print_user(directory: &UserDirectory, id: i64) {
    for line in greeting(directory.get_user(id)) {
        println!("{line}");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_get_user_hit_and_miss() {
        let directory = UserDirectory::sample();
        assert_eq!(greeting(directory.get_user(1)), vec!["Hello Bob", "You have access"]);
        assert_eq!(greeting(directory.get_user(2)), vec!["Hello John", "You are not allowed here"]);
        assert_eq!(greeting(directory.get_user(3)), vec!["Hello Guest", "You are not allowed here"]);
        assert_eq!(directory.get_user(3).id(), -1);
    }

    #[test]
    fn test_strict_lookup_reports_miss() {
        let directory = UserDirectory::sample();
        assert_eq!(directory.find_user(9).unwrap_err(), PatternError::RecordNotFound { id: 9 });
        assert_eq!(directory.find_user(2).unwrap().name(), "John");
    }

    #[test]
    fn test_checked_version_matches_null_object_version() {
        let directory = UserDirectory::sample();
        for id in 0..4 {
            assert_eq!(
                greeting_with_checks(directory.find_user(id).ok()),
                greeting(directory.get_user(id))
            );
        }
    }

    #[test]
    fn test_access_list_is_configurable() {
        let access = vec!["Bob".to_string(), "John".to_string()];
        let directory = UserDirectory::new([(1, "Bob"), (2, "John")], &access);
        assert!(directory.get_user(2).has_access());
    }

    #[test]
    fn test_records_are_interchangeable() {
        let bob = User::new(1, "Bob", true);
        let records: [&dyn UserRecord; 2] = [&bob, &NullUser];
        let lines: Vec<Vec<String>> = records.iter().map(|record| greeting(*record)).collect();

        assert_eq!(lines[0][0], "Hello Bob");
        assert_eq!(lines[1][0], "Hello Guest");
        assert_ne!(lines[0][1], lines[1][1]);
    }
}
