use axum::extract::State;
use axum::Extension;
use axum::Json;
use serde::Deserialize;
use serde::Serialize;

use super::ApiError;
use crate::inbound::http::middleware::AuthenticatedUser;
use crate::inbound::http::router::AppState;
use crate::user::errors::UserError;

pub async fn update_password(
    State(state): State<AppState>,
    Extension(caller): Extension<AuthenticatedUser>,
    Json(body): Json<UpdatePasswordRequestBody>,
) -> Result<Json<UpdatePasswordResponseBody>, ApiError> {
    state
        .auth_service
        .update_password(&caller.user_id, &body.current_password, &body.new_password)
        .await
        .map_err(|e| match e {
            // A token can outlive its account; treat that the same as a
            // failed current-password check.
            UserError::InvalidCredentials | UserError::NotFound(_) => {
                ApiError::Unauthorized("Current password is incorrect.".to_string())
            }
            other => ApiError::from(other),
        })?;

    Ok(Json(UpdatePasswordResponseBody {
        message: "Password updated successfully.".to_string(),
    }))
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdatePasswordRequestBody {
    current_password: String,
    new_password: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UpdatePasswordResponseBody {
    pub message: String,
}
