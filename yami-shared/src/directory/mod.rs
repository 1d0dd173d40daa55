//! User directory provider
//!
//! This module defines the contract the API layer uses to talk to the
//! identity provider's admin API, plus the two implementations:
//!
//! - [`CognitoDirectory`]: the production implementation backed by the
//!   Cognito Identity Provider SDK
//! - [`MockDirectory`]: an in-memory implementation for tests and demos
//!
//! The directory is the sole source of truth for group membership; nothing
//! in this crate caches or mirrors it.

pub mod cognito;
pub mod mock;

pub use cognito::CognitoDirectory;
pub use mock::MockDirectory;

use async_trait::async_trait;

use crate::models::DirectoryUser;

/// Error type for directory operations
#[derive(Debug, thiserror::Error)]
pub enum DirectoryError {
    /// The provider rejected or failed the request
    #[error("Directory request failed: {0}")]
    Provider(String),
}

/// Directory result type alias
pub type DirectoryResult<T> = Result<T, DirectoryError>;

/// Contract for the identity provider's admin API
///
/// All listing operations page through the provider internally and return
/// the complete result; callers never see pagination tokens.
#[async_trait]
pub trait Directory: Send + Sync {
    /// Lists every user in the pool
    async fn list_users(&self) -> DirectoryResult<Vec<DirectoryUser>>;

    /// Lists the members of one group
    async fn list_group_members(&self, group: &str) -> DirectoryResult<Vec<DirectoryUser>>;

    /// Adds a user to a group
    ///
    /// The group name is forwarded to the provider verbatim; the provider
    /// is the one that rejects names it does not know.
    async fn add_user_to_group(&self, username: &str, group: &str) -> DirectoryResult<()>;
}
