//! Mock directory for testing and demos
//!
//! Holds users and group memberships in memory. A failure switch makes
//! every call return a provider error, for exercising 500 paths.
//!
//! # Example
//!
//! ```
//! use yami_shared::directory::{Directory, MockDirectory};
//! use yami_shared::models::DirectoryUser;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let directory = MockDirectory::new()
//!     .with_user(DirectoryUser::new("alice").with_attribute("email", "alice@example.com"))
//!     .with_membership("Admins", "alice");
//!
//! let admins = directory.list_group_members("Admins").await?;
//! assert_eq!(admins.len(), 1);
//! # Ok(())
//! # }
//! ```

use std::collections::HashMap;
use std::sync::Mutex;

use async_trait::async_trait;

use super::{Directory, DirectoryError, DirectoryResult};
use crate::models::DirectoryUser;

/// In-memory directory implementation
#[derive(Debug, Default)]
pub struct MockDirectory {
    users: Vec<DirectoryUser>,
    memberships: Mutex<HashMap<String, Vec<String>>>,
    failure: Option<String>,
}

impl MockDirectory {
    /// Creates an empty directory
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a user to the pool (builder style)
    pub fn with_user(mut self, user: DirectoryUser) -> Self {
        self.users.push(user);
        self
    }

    /// Adds a user to a group (builder style)
    ///
    /// The username does not have to exist in the pool; the real provider
    /// tracks memberships independently of the user listing as well.
    pub fn with_membership(self, group: impl Into<String>, username: impl Into<String>) -> Self {
        self.memberships
            .lock()
            .expect("membership lock poisoned")
            .entry(group.into())
            .or_default()
            .push(username.into());
        self
    }

    /// Makes every call fail with the given provider error text
    pub fn failing(mut self, message: impl Into<String>) -> Self {
        self.failure = Some(message.into());
        self
    }

    /// Group memberships recorded so far, for assertions
    pub fn members_of(&self, group: &str) -> Vec<String> {
        self.memberships
            .lock()
            .expect("membership lock poisoned")
            .get(group)
            .cloned()
            .unwrap_or_default()
    }

    fn check_failure(&self) -> DirectoryResult<()> {
        match &self.failure {
            Some(message) => Err(DirectoryError::Provider(message.clone())),
            None => Ok(()),
        }
    }

    fn user_by_name(&self, username: &str) -> DirectoryUser {
        self.users
            .iter()
            .find(|u| u.username == username)
            .cloned()
            .unwrap_or_else(|| DirectoryUser::new(username))
    }
}

#[async_trait]
impl Directory for MockDirectory {
    async fn list_users(&self) -> DirectoryResult<Vec<DirectoryUser>> {
        self.check_failure()?;
        Ok(self.users.clone())
    }

    async fn list_group_members(&self, group: &str) -> DirectoryResult<Vec<DirectoryUser>> {
        self.check_failure()?;
        Ok(self
            .members_of(group)
            .iter()
            .map(|username| self.user_by_name(username))
            .collect())
    }

    async fn add_user_to_group(&self, username: &str, group: &str) -> DirectoryResult<()> {
        self.check_failure()?;
        self.memberships
            .lock()
            .expect("membership lock poisoned")
            .entry(group.to_string())
            .or_default()
            .push(username.to_string());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_membership_roundtrip() {
        let directory = MockDirectory::new().with_membership("Admins", "alice");
        assert_eq!(directory.members_of("Admins"), vec!["alice"]);
        assert!(directory.members_of("Devs").is_empty());
    }

    #[tokio::test]
    async fn test_add_user_to_group_records_membership() {
        let directory = MockDirectory::new();
        directory.add_user_to_group("bob", "Devs").await.unwrap();
        assert_eq!(directory.members_of("Devs"), vec!["bob"]);
    }

    #[tokio::test]
    async fn test_group_members_carry_pool_attributes() {
        let directory = MockDirectory::new()
            .with_user(DirectoryUser::new("alice").with_attribute("email", "alice@example.com"))
            .with_membership("Admins", "alice");

        let admins = directory.list_group_members("Admins").await.unwrap();
        assert_eq!(admins[0].email(), Some("alice@example.com"));
    }

    #[tokio::test]
    async fn test_failing_directory() {
        let directory = MockDirectory::new().failing("simulated outage");
        let err = directory.list_users().await.unwrap_err();
        assert!(err.to_string().contains("simulated outage"));
    }
}
