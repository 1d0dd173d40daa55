//! Account record written to the user table at signup
//!
//! The post-confirmation trigger copies a fixed set of attributes from the
//! identity provider event into one table row, keyed by the provider's
//! unique user id (`sub`). The record is write-once: nothing in this
//! repository updates or deletes it afterwards.
//!
//! # Table item shape
//!
//! ```json
//! {
//!   "userId": "c1d2...",
//!   "email": "user@example.com",
//!   "email_verified": true,
//!   "created_at": "2025-01-04T12:00:00+00:00",
//!   "cognito_username": "user",
//!   "first_name": "Ada",
//!   "last_name": "Lovelace",
//!   "phone_number": "+15555550100"
//! }
//! ```
//!
//! Optional attributes are omitted entirely when the signup event did not
//! carry them.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One row in the user table
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AccountRecord {
    /// Provider-generated unique id (`sub` claim); table partition key
    #[serde(rename = "userId")]
    pub user_id: String,

    /// Email address at signup time
    pub email: String,

    /// Whether the provider had verified the email when signup completed
    pub email_verified: bool,

    /// When this record was written
    pub created_at: DateTime<Utc>,

    /// Username as known to the identity provider
    #[serde(rename = "cognito_username")]
    pub username: String,

    /// Optional given name
    #[serde(skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,

    /// Optional family name
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,

    /// Optional phone number
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone_number: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record() -> AccountRecord {
        AccountRecord {
            user_id: "sub-123".to_string(),
            email: "user@example.com".to_string(),
            email_verified: true,
            created_at: Utc::now(),
            username: "user".to_string(),
            first_name: None,
            last_name: None,
            phone_number: None,
        }
    }

    #[test]
    fn test_serializes_with_table_key_names() {
        let json = serde_json::to_value(record()).unwrap();
        assert_eq!(json["userId"], "sub-123");
        assert_eq!(json["cognito_username"], "user");
        assert_eq!(json["email_verified"], true);
    }

    #[test]
    fn test_optional_attributes_are_omitted() {
        let json = serde_json::to_value(record()).unwrap();
        assert!(json.get("first_name").is_none());
        assert!(json.get("phone_number").is_none());
    }
}
