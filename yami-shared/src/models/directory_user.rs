//! A user as reported by the directory admin API
//!
//! The provider returns each user as a username plus a flat list of named
//! attributes. We keep the attributes as a map; the only attribute the API
//! layer reads today is `email`.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// One user from a directory listing
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DirectoryUser {
    /// Username as known to the identity provider
    pub username: String,

    /// Attribute name → value, as returned by the provider
    pub attributes: HashMap<String, String>,
}

impl DirectoryUser {
    /// Creates a user with no attributes
    pub fn new(username: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            attributes: HashMap::new(),
        }
    }

    /// Adds an attribute (builder style, used heavily by tests)
    pub fn with_attribute(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.attributes.insert(name.into(), value.into());
        self
    }

    /// The `email` attribute, if the provider reported one
    pub fn email(&self) -> Option<&str> {
        self.attributes.get("email").map(String::as_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_email_lookup() {
        let user = DirectoryUser::new("alice").with_attribute("email", "alice@example.com");
        assert_eq!(user.email(), Some("alice@example.com"));
    }

    #[test]
    fn test_email_missing() {
        let user = DirectoryUser::new("bob");
        assert_eq!(user.email(), None);
    }
}
