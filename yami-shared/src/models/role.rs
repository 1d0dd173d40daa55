//! Fixed directory roles
//!
//! The user pool defines exactly three groups. Group names are what the
//! identity provider stores; role labels are what the API reports back to
//! clients. Nothing in this crate enforces semantics beyond the names.

use serde::{Deserialize, Serialize};

/// One of the three fixed directory roles
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Role {
    /// Member of the "Admins" group
    Admin,

    /// Member of the "Devs" group
    Dev,

    /// Member of the "Users" group
    User,
}

impl Role {
    /// All roles, in the order the user listing reports them
    pub const ALL: [Role; 3] = [Role::Admin, Role::Dev, Role::User];

    /// Group name as stored in the identity provider
    pub fn group_name(&self) -> &'static str {
        match self {
            Role::Admin => "Admins",
            Role::Dev => "Devs",
            Role::User => "Users",
        }
    }

    /// Role label as reported in API responses
    pub fn label(&self) -> &'static str {
        match self {
            Role::Admin => "Admin",
            Role::Dev => "Dev",
            Role::User => "User",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_group_names() {
        assert_eq!(Role::Admin.group_name(), "Admins");
        assert_eq!(Role::Dev.group_name(), "Devs");
        assert_eq!(Role::User.group_name(), "Users");
    }

    #[test]
    fn test_labels() {
        assert_eq!(Role::Admin.label(), "Admin");
        assert_eq!(Role::Dev.label(), "Dev");
        assert_eq!(Role::User.label(), "User");
    }

    #[test]
    fn test_all_covers_every_role() {
        assert_eq!(Role::ALL.len(), 3);
        assert_eq!(Role::ALL[0], Role::Admin);
    }

    #[test]
    fn test_serializes_as_label() {
        let json = serde_json::to_string(&Role::Admin).unwrap();
        assert_eq!(json, "\"Admin\"");
    }
}
