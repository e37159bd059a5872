use axum::extract::Path;
use axum::extract::State;
use axum::Extension;
use axum::Json;
use serde::Serialize;

use super::ApiError;
use crate::domain::user::models::UserId;
use crate::domain::user::policy;
use crate::inbound::http::middleware::AuthenticatedUser;
use crate::inbound::http::router::AppState;

const ACCESS_DENIED: &str =
    "Access denied. You can only delete your own account or need the admin role.";

pub async fn unregister(
    State(state): State<AppState>,
    Extension(caller): Extension<AuthenticatedUser>,
    Path(user_id): Path<String>,
) -> Result<Json<UnregisterResponseBody>, ApiError> {
    let target = match UserId::from_string(&user_id) {
        Ok(target) => target,
        // A malformed id cannot name the caller's own account
        Err(_) => return Err(ApiError::Forbidden(ACCESS_DENIED.to_string())),
    };

    if !policy::may_unregister(&caller.user_id, caller.role, &target) {
        return Err(ApiError::Forbidden(ACCESS_DENIED.to_string()));
    }

    // Permanent deletion; no soft-delete. An already-absent target still
    // acknowledges success.
    state
        .auth_service
        .unregister_user(&target)
        .await
        .map_err(ApiError::from)?;

    Ok(Json(UnregisterResponseBody {
        message: "User deleted successfully.".to_string(),
    }))
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UnregisterResponseBody {
    pub message: String,
}
