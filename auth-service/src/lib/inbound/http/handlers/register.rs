use auth::Claims;
use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use serde::Deserialize;
use serde::Serialize;

use super::ApiError;
use super::UserSummary;
use crate::domain::user::models::EmailAddress;
use crate::domain::user::models::RegisterUserCommand;
use crate::domain::user::models::Role;
use crate::inbound::http::router::AppState;

pub async fn register(
    State(state): State<AppState>,
    Json(body): Json<RegisterRequestBody>,
) -> Result<(StatusCode, Json<RegisterResponseBody>), ApiError> {
    let command = body.try_into_command()?;

    let user = state
        .auth_service
        .register_user(command)
        .await
        .map_err(ApiError::from)?;

    let claims = Claims::for_subject(user.id, user.role, state.token_expiration_hours);
    let token = state
        .authenticator
        .issue_token(&claims)
        .map_err(|e| ApiError::InternalServerError(format!("Token generation failed: {}", e)))?;

    Ok((
        StatusCode::CREATED,
        Json(RegisterResponseBody {
            message: "Registration successful.".to_string(),
            user: (&user).into(),
            token,
        }),
    ))
}

/// HTTP request body for registration (raw JSON)
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct RegisterRequestBody {
    email: String,
    password: String,
    role: Option<Role>,
}

impl RegisterRequestBody {
    fn try_into_command(self) -> Result<RegisterUserCommand, ApiError> {
        let email = EmailAddress::new(self.email)
            .map_err(|e| ApiError::UnprocessableEntity(e.to_string()))?;
        // Role defaults to `user` when the request omits it
        let role = self.role.unwrap_or_default();
        Ok(RegisterUserCommand::new(email, self.password, role))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RegisterResponseBody {
    pub message: String,
    pub user: UserSummary,
    pub token: String,
}
