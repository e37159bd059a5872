use axum::Extension;
use axum::Json;
use serde::Serialize;

use super::ApiError;
use crate::domain::user::models::Role;
use crate::inbound::http::middleware::AuthenticatedUser;

/// Pure token check: responds with the identity decoded from the claims, no
/// store lookup.
pub async fn validate_user(
    Extension(caller): Extension<AuthenticatedUser>,
) -> Result<Json<ValidateUserResponseBody>, ApiError> {
    Ok(Json(ValidateUserResponseBody {
        message: "Token valid.".to_string(),
        user: ValidatedIdentity {
            id: caller.user_id.to_string(),
            role: caller.role,
        },
    }))
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValidateUserResponseBody {
    pub message: String,
    pub user: ValidatedIdentity,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValidatedIdentity {
    pub id: String,
    pub role: Role,
}
