//! # Yami Cognito Triggers
//!
//! The post-confirmation trigger copies a fixed set of attributes from the
//! signup event into the user table, then hands the event back to the
//! identity provider unchanged. Returning the event unmodified is the
//! contract that lets signup complete; failing loudly is the contract that
//! makes the provider surface a signup error instead of silently dropping
//! the record.

use std::collections::HashMap;

use aws_lambda_events::event::cognito::CognitoEventUserPoolsPostConfirmation;
use chrono::{DateTime, Utc};

use yami_shared::models::AccountRecord;
use yami_shared::store::{AccountStore, StoreError};

/// Error type for the post-confirmation trigger
#[derive(Debug, thiserror::Error)]
pub enum HookError {
    /// The event did not carry the provider username
    #[error("Event is missing the userName field")]
    MissingUsername,

    /// A required user attribute is absent from the event
    #[error("Event is missing required attribute: {0}")]
    MissingAttribute(&'static str),

    /// The table write failed
    #[error(transparent)]
    Store(#[from] StoreError),
}

fn required<'a>(
    attributes: &'a HashMap<String, String>,
    name: &'static str,
) -> Result<&'a str, HookError> {
    attributes
        .get(name)
        .map(String::as_str)
        .ok_or(HookError::MissingAttribute(name))
}

/// Builds the account record from the event's user attributes
///
/// `sub`, `email`, and `email_verified` are required; the given name,
/// family name, and phone number are copied only when present.
pub fn build_account_record(
    username: &str,
    attributes: &HashMap<String, String>,
    now: DateTime<Utc>,
) -> Result<AccountRecord, HookError> {
    Ok(AccountRecord {
        user_id: required(attributes, "sub")?.to_string(),
        email: required(attributes, "email")?.to_string(),
        email_verified: required(attributes, "email_verified")?.eq_ignore_ascii_case("true"),
        created_at: now,
        username: username.to_string(),
        first_name: attributes.get("given_name").cloned(),
        last_name: attributes.get("family_name").cloned(),
        phone_number: attributes.get("phone_number").cloned(),
    })
}

/// Handles one post-confirmation event
///
/// Writes exactly one account record and returns the received event
/// unchanged. Any failure propagates to the caller; the runtime reports it
/// to the identity provider, which fails the signup.
pub async fn handle_post_confirmation(
    store: &dyn AccountStore,
    event: CognitoEventUserPoolsPostConfirmation,
) -> Result<CognitoEventUserPoolsPostConfirmation, HookError> {
    let username = event
        .cognito_event_user_pools_header
        .user_name
        .as_deref()
        .ok_or(HookError::MissingUsername)?;

    let record = build_account_record(username, &event.request.user_attributes, Utc::now())?;
    store.put_account(&record).await?;

    tracing::info!(user_id = %record.user_id, email = %record.email, "recorded confirmed signup");

    Ok(event)
}

#[cfg(test)]
mod tests {
    use super::*;
    use yami_shared::store::MemoryStore;

    fn attributes() -> HashMap<String, String> {
        let mut attrs = HashMap::new();
        attrs.insert("sub".to_string(), "sub-123".to_string());
        attrs.insert("email".to_string(), "ada@example.com".to_string());
        attrs.insert("email_verified".to_string(), "true".to_string());
        attrs
    }

    fn event(attrs: HashMap<String, String>) -> CognitoEventUserPoolsPostConfirmation {
        let mut event = CognitoEventUserPoolsPostConfirmation::default();
        event.cognito_event_user_pools_header.user_name = Some("ada".to_string());
        event.request.user_attributes = attrs;
        event
    }

    #[test]
    fn test_builds_record_from_required_attributes() {
        let record = build_account_record("ada", &attributes(), Utc::now()).unwrap();
        assert_eq!(record.user_id, "sub-123");
        assert_eq!(record.email, "ada@example.com");
        assert!(record.email_verified);
        assert_eq!(record.username, "ada");
        assert_eq!(record.first_name, None);
    }

    #[test]
    fn test_copies_optional_attributes() {
        let mut attrs = attributes();
        attrs.insert("given_name".to_string(), "Ada".to_string());
        attrs.insert("family_name".to_string(), "Lovelace".to_string());
        attrs.insert("phone_number".to_string(), "+15555550100".to_string());

        let record = build_account_record("ada", &attrs, Utc::now()).unwrap();
        assert_eq!(record.first_name.as_deref(), Some("Ada"));
        assert_eq!(record.last_name.as_deref(), Some("Lovelace"));
        assert_eq!(record.phone_number.as_deref(), Some("+15555550100"));
    }

    #[test]
    fn test_missing_email_is_an_error() {
        let mut attrs = attributes();
        attrs.remove("email");

        let err = build_account_record("ada", &attrs, Utc::now()).unwrap_err();
        assert!(matches!(err, HookError::MissingAttribute("email")));
    }

    #[test]
    fn test_unverified_email_parses_to_false() {
        let mut attrs = attributes();
        attrs.insert("email_verified".to_string(), "false".to_string());

        let record = build_account_record("ada", &attrs, Utc::now()).unwrap();
        assert!(!record.email_verified);
    }

    #[tokio::test]
    async fn test_handle_returns_event_unchanged_and_writes_once() {
        let store = MemoryStore::new();
        let input = event(attributes());

        let output = handle_post_confirmation(&store, input.clone()).await.unwrap();
        assert_eq!(output, input);

        let records = store.records();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].user_id, "sub-123");
        assert_eq!(records[0].username, "ada");
    }

    #[tokio::test]
    async fn test_missing_username_fails_before_writing() {
        let store = MemoryStore::new();
        let mut input = event(attributes());
        input.cognito_event_user_pools_header.user_name = None;

        let err = handle_post_confirmation(&store, input).await.unwrap_err();
        assert!(matches!(err, HookError::MissingUsername));
        assert!(store.records().is_empty());
    }

    #[tokio::test]
    async fn test_store_failure_propagates() {
        let store = MemoryStore::new().failing("table missing");
        let err = handle_post_confirmation(&store, event(attributes()))
            .await
            .unwrap_err();
        assert!(matches!(err, HookError::Store(_)));
    }
}
