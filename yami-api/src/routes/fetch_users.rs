//! User listing endpoint
//!
//! # Endpoint
//!
//! ```text
//! GET /fetch-users
//! Authorization: Bearer <token>
//! ```
//!
//! Lists every user in the pool, then the members of the three fixed
//! groups, and partitions the pool into users with a role and users
//! without one. A user in several groups appears once per group; a user
//! missing an email attribute is reported with an empty email rather than
//! failing the whole listing.
//!
//! # Response
//!
//! ```json
//! {
//!   "usersWithRoles": [
//!     { "userId": "alice", "email": "alice@example.com", "role": "Admin" }
//!   ],
//!   "usersWithoutRoles": [
//!     { "userId": "carol", "email": "carol@example.com" }
//!   ]
//! }
//! ```

use std::collections::HashSet;

use axum::{extract::State, Json};
use serde::Serialize;

use crate::{app::AppState, error::ApiResult};
use yami_shared::models::{DirectoryUser, Role};

/// A user that belongs to at least one of the fixed groups
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UserWithRole {
    /// Username as known to the identity provider
    pub user_id: String,

    /// Email attribute (empty if the provider reported none)
    pub email: String,

    /// Role label (Admin / Dev / User)
    pub role: &'static str,
}

/// A user outside all three fixed groups
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UserWithoutRole {
    /// Username as known to the identity provider
    pub user_id: String,

    /// Email attribute (empty if the provider reported none)
    pub email: String,
}

/// User listing response
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FetchUsersResponse {
    /// One entry per (user, group) membership
    pub users_with_roles: Vec<UserWithRole>,

    /// Users that belong to none of the fixed groups
    pub users_without_roles: Vec<UserWithoutRole>,
}

fn email_of(user: &DirectoryUser) -> String {
    user.email().unwrap_or_default().to_string()
}

/// User listing handler
pub async fn fetch_users(State(state): State<AppState>) -> ApiResult<Json<FetchUsersResponse>> {
    let all_users = state.directory.list_users().await?;

    let mut users_with_roles = Vec::new();
    let mut assigned: HashSet<String> = HashSet::new();

    for role in Role::ALL {
        let members = state
            .directory
            .list_group_members(role.group_name())
            .await?;

        for member in members {
            assigned.insert(member.username.clone());
            users_with_roles.push(UserWithRole {
                email: email_of(&member),
                user_id: member.username,
                role: role.label(),
            });
        }
    }

    let users_without_roles = all_users
        .iter()
        .filter(|user| !assigned.contains(&user.username))
        .map(|user| UserWithoutRole {
            user_id: user.username.clone(),
            email: email_of(user),
        })
        .collect();

    Ok(Json(FetchUsersResponse {
        users_with_roles,
        users_without_roles,
    }))
}
