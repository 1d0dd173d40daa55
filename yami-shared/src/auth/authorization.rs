//! Group-based authorization
//!
//! Authorization here is coarse: a request either carries the required
//! group claim or it does not. The gate runs after token verification, so
//! a missing group is a distinct rejection (403 "Admins only") from an
//! invalid token (403 "Invalid token").

use super::token::TokenClaims;

/// Group required by both administrative endpoints
pub const ADMIN_GROUP: &str = "Admins";

/// Error type for authorization checks
#[derive(Debug, thiserror::Error)]
pub enum AuthzError {
    /// The claims do not include the required group
    #[error("Missing required group: {group}")]
    MissingGroup {
        /// The group that was required
        group: String,
    },
}

/// Requires that the claims include a group
///
/// # Errors
///
/// Returns `AuthzError::MissingGroup` if the group claim is absent.
pub fn require_group(claims: &TokenClaims, group: &str) -> Result<(), AuthzError> {
    if claims.has_group(group) {
        Ok(())
    } else {
        Err(AuthzError::MissingGroup {
            group: group.to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn claims(groups: &[&str]) -> TokenClaims {
        TokenClaims {
            sub: "sub-1".to_string(),
            username: Some("alice".to_string()),
            groups: groups.iter().map(|g| g.to_string()).collect(),
            exp: 4_102_444_800,
        }
    }

    #[test]
    fn test_admin_passes() {
        assert!(require_group(&claims(&["Admins"]), ADMIN_GROUP).is_ok());
    }

    #[test]
    fn test_non_admin_is_rejected() {
        let err = require_group(&claims(&["Users"]), ADMIN_GROUP).unwrap_err();
        assert!(matches!(err, AuthzError::MissingGroup { group } if group == "Admins"));
    }

    #[test]
    fn test_no_groups_is_rejected() {
        assert!(require_group(&claims(&[]), ADMIN_GROUP).is_err());
    }
}
