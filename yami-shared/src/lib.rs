//! # Yami Shared Library
//!
//! This crate contains the types and service abstractions shared by the
//! Yami API server and the Cognito trigger binaries.
//!
//! ## Module Organization
//!
//! - `models`: Account records, roles, and directory user types
//! - `auth`: Bearer token verification and group authorization
//! - `directory`: User directory provider (Cognito admin API)
//! - `store`: Account record persistence (DynamoDB)

pub mod auth;
pub mod directory;
pub mod models;
pub mod store;

/// Current version of the Yami shared library
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version_is_set() {
        assert!(!VERSION.is_empty());
    }
}
