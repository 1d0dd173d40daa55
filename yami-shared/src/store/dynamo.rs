//! DynamoDB-backed account store
//!
//! One `put_item` per record, keyed by `userId`. Optional attributes are
//! left out of the item entirely rather than written as empty strings.

use std::collections::HashMap;

use async_trait::async_trait;
use aws_sdk_dynamodb::types::AttributeValue;
use aws_sdk_dynamodb::Client;

use super::{AccountStore, StoreError};
use crate::models::AccountRecord;

/// Account store backed by one DynamoDB table
#[derive(Clone)]
pub struct DynamoStore {
    client: Client,
    table_name: String,
}

impl DynamoStore {
    /// Creates a store for one table
    pub fn new(client: Client, table_name: impl Into<String>) -> Self {
        Self {
            client,
            table_name: table_name.into(),
        }
    }
}

fn to_item(record: &AccountRecord) -> HashMap<String, AttributeValue> {
    let mut item = HashMap::new();
    item.insert(
        "userId".to_string(),
        AttributeValue::S(record.user_id.clone()),
    );
    item.insert("email".to_string(), AttributeValue::S(record.email.clone()));
    item.insert(
        "email_verified".to_string(),
        AttributeValue::Bool(record.email_verified),
    );
    item.insert(
        "created_at".to_string(),
        AttributeValue::S(record.created_at.to_rfc3339()),
    );
    item.insert(
        "cognito_username".to_string(),
        AttributeValue::S(record.username.clone()),
    );

    if let Some(first_name) = &record.first_name {
        item.insert(
            "first_name".to_string(),
            AttributeValue::S(first_name.clone()),
        );
    }
    if let Some(last_name) = &record.last_name {
        item.insert(
            "last_name".to_string(),
            AttributeValue::S(last_name.clone()),
        );
    }
    if let Some(phone_number) = &record.phone_number {
        item.insert(
            "phone_number".to_string(),
            AttributeValue::S(phone_number.clone()),
        );
    }

    item
}

#[async_trait]
impl AccountStore for DynamoStore {
    async fn put_account(&self, record: &AccountRecord) -> Result<(), StoreError> {
        self.client
            .put_item()
            .table_name(&self.table_name)
            .set_item(Some(to_item(record)))
            .send()
            .await
            .map_err(|e| StoreError::Write(e.to_string()))?;

        tracing::info!(user_id = %record.user_id, email = %record.email, "wrote account record");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    #[test]
    fn test_item_includes_required_attributes() {
        let record = AccountRecord {
            user_id: "sub-1".to_string(),
            email: "a@example.com".to_string(),
            email_verified: true,
            created_at: Utc::now(),
            username: "alice".to_string(),
            first_name: Some("Ada".to_string()),
            last_name: None,
            phone_number: None,
        };

        let item = to_item(&record);
        assert_eq!(item["userId"], AttributeValue::S("sub-1".to_string()));
        assert_eq!(item["email_verified"], AttributeValue::Bool(true));
        assert_eq!(item["first_name"], AttributeValue::S("Ada".to_string()));
        assert!(!item.contains_key("last_name"));
        assert!(!item.contains_key("phone_number"));
    }
}
