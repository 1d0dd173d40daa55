//! Role assignment endpoint
//!
//! # Endpoint
//!
//! ```text
//! POST /assign-role
//! Authorization: Bearer <token>
//! Content-Type: application/json
//!
//! { "userId": "alice", "groupName": "Devs" }
//! ```
//!
//! The admin gate runs before this handler; by the time it executes the
//! caller is a verified member of the `Admins` group.
//!
//! The group name is forwarded to the provider as-is. Unknown names are
//! the provider's to reject, and its rejection surfaces as a 500 with the
//! provider's error text.
//!
//! # Responses
//!
//! - 200 `{"message": "User alice added to group Devs"}`
//! - 400 `{"message": "Missing userId or groupName in request"}`
//! - 401 / 403 from the admin gate
//! - 500 `{"error": "..."}` if the provider call fails

use axum::{
    extract::{rejection::JsonRejection, State},
    Extension, Json,
};
use serde::{Deserialize, Serialize};

use crate::{app::AppState, error::{ApiError, ApiResult}};
use yami_shared::auth::TokenClaims;

/// Role assignment request body
///
/// Both fields are declared optional so that an absent field produces the
/// endpoint's own 400 response rather than a deserialization rejection.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AssignRoleRequest {
    /// Username to add to the group
    #[serde(default)]
    pub user_id: Option<String>,

    /// Group to add the user to
    #[serde(default)]
    pub group_name: Option<String>,
}

/// Role assignment response
#[derive(Debug, Serialize)]
pub struct AssignRoleResponse {
    /// Confirmation message
    pub message: String,
}

/// Role assignment handler
///
/// A body that fails to parse at all (bad JSON, wrong content type) is
/// mapped into the same `{"message": ...}` 400 shape as a missing field.
pub async fn assign_role(
    State(state): State<AppState>,
    Extension(claims): Extension<TokenClaims>,
    body: Result<Json<AssignRoleRequest>, JsonRejection>,
) -> ApiResult<Json<AssignRoleResponse>> {
    let Json(body) = body.map_err(|rejection| ApiError::BadRequest(rejection.body_text()))?;

    let (user_id, group_name) = match (
        body.user_id.filter(|s| !s.is_empty()),
        body.group_name.filter(|s| !s.is_empty()),
    ) {
        (Some(user_id), Some(group_name)) => (user_id, group_name),
        _ => {
            return Err(ApiError::BadRequest(
                "Missing userId or groupName in request".to_string(),
            ))
        }
    };

    tracing::info!(
        admin = claims.username.as_deref().unwrap_or(&claims.sub),
        user_id,
        group_name,
        "assigning role"
    );

    state
        .directory
        .add_user_to_group(&user_id, &group_name)
        .await?;

    Ok(Json(AssignRoleResponse {
        message: format!("User {} added to group {}", user_id, group_name),
    }))
}
