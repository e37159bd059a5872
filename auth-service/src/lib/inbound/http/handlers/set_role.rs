use axum::extract::Path;
use axum::extract::State;
use axum::Extension;
use axum::Json;
use serde::Deserialize;
use serde::Serialize;

use super::ApiError;
use crate::domain::user::models::Role;
use crate::domain::user::models::UserId;
use crate::domain::user::policy;
use crate::inbound::http::middleware::AuthenticatedUser;
use crate::inbound::http::router::AppState;
use crate::user::errors::UserError;

pub async fn set_role(
    State(state): State<AppState>,
    Extension(caller): Extension<AuthenticatedUser>,
    Path(user_id): Path<String>,
    Json(body): Json<SetRoleRequestBody>,
) -> Result<Json<SetRoleResponseBody>, ApiError> {
    // Admin gate first: a non-admin learns nothing about roles or targets.
    if !policy::may_assign_roles(caller.role) {
        return Err(ApiError::Forbidden(
            "Access denied. Admin role required.".to_string(),
        ));
    }

    let role: Role = body
        .role
        .parse()
        .map_err(|_| ApiError::BadRequest("Invalid role.".to_string()))?;

    // A malformed id cannot name an account
    let target = UserId::from_string(&user_id)
        .map_err(|_| ApiError::NotFound("User not found.".to_string()))?;

    let user = state
        .auth_service
        .set_role(&target, role)
        .await
        .map_err(|e| match e {
            UserError::NotFound(_) => ApiError::NotFound("User not found.".to_string()),
            other => ApiError::from(other),
        })?;

    Ok(Json(SetRoleResponseBody {
        message: format!("Role for user {} set to {}.", target, user.role),
    }))
}

/// Role arrives as a raw string so an unknown value maps to 400, not a
/// deserialization failure.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct SetRoleRequestBody {
    role: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SetRoleResponseBody {
    pub message: String,
}
