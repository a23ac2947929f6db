//! User name → authored post keys.

use std::collections::{BTreeSet, HashMap};

use crate::error::{Result, YodelrError};
use crate::store::Timestamp;

/// Registry of users and the keys of the posts they own.
///
/// A user with no posts maps to an empty set, which is distinct from the
/// user not existing at all.
#[derive(Debug, Default)]
pub struct UserIndex {
    users: HashMap<String, BTreeSet<Timestamp>>,
}

impl UserIndex {
    pub fn new() -> Self {
        Self {
            users: HashMap::new(),
        }
    }

    /// Register a user with no posts.
    pub fn add_user(&mut self, name: &str) -> Result<()> {
        if self.users.contains_key(name) {
            return Err(YodelrError::DuplicateUser(name.to_string()));
        }
        self.users.insert(name.to_string(), BTreeSet::new());
        Ok(())
    }

    /// Remove a user, handing back the keys it owned so the caller can
    /// cascade the delete.
    pub fn delete_user(&mut self, name: &str) -> Result<BTreeSet<Timestamp>> {
        self.users
            .remove(name)
            .ok_or_else(|| YodelrError::UnknownUser(name.to_string()))
    }

    /// Attach a post key to an existing user.
    pub fn record_post(&mut self, name: &str, key: Timestamp) -> Result<()> {
        let keys = self
            .users
            .get_mut(name)
            .ok_or_else(|| YodelrError::UnknownUser(name.to_string()))?;
        keys.insert(key);
        Ok(())
    }

    /// Keys owned by `name`, ascending.
    pub fn posts_of(&self, name: &str) -> Result<&BTreeSet<Timestamp>> {
        self.users
            .get(name)
            .ok_or_else(|| YodelrError::UnknownUser(name.to_string()))
    }

    pub fn contains(&self, name: &str) -> bool {
        self.users.contains_key(name)
    }

    /// Iterate `(name, keys)` in no particular order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &BTreeSet<Timestamp>)> {
        self.users.iter().map(|(name, keys)| (name.as_str(), keys))
    }

    pub fn len(&self) -> usize {
        self.users.len()
    }

    pub fn is_empty(&self) -> bool {
        self.users.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_user_has_no_posts() {
        let mut index = UserIndex::new();
        index.add_user("alice").unwrap();

        assert!(index.contains("alice"));
        assert!(index.posts_of("alice").unwrap().is_empty());
        assert_eq!(index.len(), 1);
    }

    #[test]
    fn test_duplicate_user_rejected() {
        let mut index = UserIndex::new();
        index.add_user("alice").unwrap();
        index.record_post("alice", 1).unwrap();

        assert_eq!(
            index.add_user("alice"),
            Err(YodelrError::DuplicateUser("alice".to_string()))
        );
        // existing posts untouched
        assert_eq!(index.posts_of("alice").unwrap().len(), 1);
    }

    #[test]
    fn test_unknown_user_errors() {
        let mut index = UserIndex::new();
        let unknown = YodelrError::UnknownUser("ghost".to_string());

        assert_eq!(index.posts_of("ghost").unwrap_err(), unknown);
        assert_eq!(index.record_post("ghost", 1).unwrap_err(), unknown);
        assert_eq!(index.delete_user("ghost").unwrap_err(), unknown);
        assert!(index.is_empty());
    }

    #[test]
    fn test_delete_returns_owned_keys() {
        let mut index = UserIndex::new();
        index.add_user("alice").unwrap();
        index.add_user("bob").unwrap();
        index.record_post("alice", 3).unwrap();
        index.record_post("alice", 1).unwrap();
        index.record_post("bob", 2).unwrap();

        let owned = index.delete_user("alice").unwrap();
        assert_eq!(owned.into_iter().collect::<Vec<_>>(), vec![1, 3]);
        assert!(!index.contains("alice"));
        assert_eq!(index.posts_of("bob").unwrap().len(), 1);
    }

    #[test]
    fn test_names_are_case_sensitive() {
        let mut index = UserIndex::new();
        index.add_user("alice").unwrap();
        assert!(index.add_user("Alice").is_ok());
        assert_eq!(index.len(), 2);
    }
}
