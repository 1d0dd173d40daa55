//! Cognito-backed directory implementation
//!
//! Thin adapter over `aws-sdk-cognitoidentityprovider`. Listing calls
//! follow the provider's pagination tokens until exhausted; errors are
//! flattened to their display text since the API layer only ever logs and
//! relays them.

use async_trait::async_trait;
use aws_sdk_cognitoidentityprovider::types::UserType;
use aws_sdk_cognitoidentityprovider::Client;

use super::{Directory, DirectoryError, DirectoryResult};
use crate::models::DirectoryUser;

/// Directory backed by a Cognito user pool
#[derive(Clone)]
pub struct CognitoDirectory {
    client: Client,
    user_pool_id: String,
}

impl CognitoDirectory {
    /// Creates a directory for one user pool
    pub fn new(client: Client, user_pool_id: impl Into<String>) -> Self {
        Self {
            client,
            user_pool_id: user_pool_id.into(),
        }
    }
}

fn to_directory_user(user: &UserType) -> DirectoryUser {
    let attributes = user
        .attributes()
        .iter()
        .filter_map(|attr| {
            attr.value()
                .map(|value| (attr.name().to_string(), value.to_string()))
        })
        .collect();

    DirectoryUser {
        username: user.username().unwrap_or_default().to_string(),
        attributes,
    }
}

#[async_trait]
impl Directory for CognitoDirectory {
    async fn list_users(&self) -> DirectoryResult<Vec<DirectoryUser>> {
        let mut users = Vec::new();
        let mut pagination_token: Option<String> = None;

        loop {
            let response = self
                .client
                .list_users()
                .user_pool_id(&self.user_pool_id)
                .set_pagination_token(pagination_token.take())
                .send()
                .await
                .map_err(|e| DirectoryError::Provider(e.to_string()))?;

            users.extend(response.users().iter().map(to_directory_user));

            match response.pagination_token() {
                Some(token) => pagination_token = Some(token.to_string()),
                None => break,
            }
        }

        tracing::debug!(count = users.len(), "listed pool users");
        Ok(users)
    }

    async fn list_group_members(&self, group: &str) -> DirectoryResult<Vec<DirectoryUser>> {
        let mut users = Vec::new();
        let mut next_token: Option<String> = None;

        loop {
            let response = self
                .client
                .list_users_in_group()
                .user_pool_id(&self.user_pool_id)
                .group_name(group)
                .set_next_token(next_token.take())
                .send()
                .await
                .map_err(|e| DirectoryError::Provider(e.to_string()))?;

            users.extend(response.users().iter().map(to_directory_user));

            match response.next_token() {
                Some(token) => next_token = Some(token.to_string()),
                None => break,
            }
        }

        tracing::debug!(group, count = users.len(), "listed group members");
        Ok(users)
    }

    async fn add_user_to_group(&self, username: &str, group: &str) -> DirectoryResult<()> {
        self.client
            .admin_add_user_to_group()
            .user_pool_id(&self.user_pool_id)
            .username(username)
            .group_name(group)
            .send()
            .await
            .map_err(|e| DirectoryError::Provider(e.to_string()))?;

        tracing::info!(username, group, "added user to group");
        Ok(())
    }
}
