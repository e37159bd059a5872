use auth::Claims;
use axum::extract::State;
use axum::Json;
use serde::Deserialize;
use serde::Serialize;

use super::ApiError;
use super::UserSummary;
use crate::domain::user::models::EmailAddress;
use crate::inbound::http::router::AppState;
use crate::user::errors::UserError;

const INVALID_CREDENTIALS: &str = "Invalid email or password.";

pub async fn login(
    State(state): State<AppState>,
    Json(body): Json<LoginRequestBody>,
) -> Result<Json<LoginResponseBody>, ApiError> {
    // A malformed email can never match a stored account
    let email = EmailAddress::new(body.email)
        .map_err(|_| ApiError::Unauthorized(INVALID_CREDENTIALS.to_string()))?;

    let user = state
        .auth_service
        .get_user_by_email(&email)
        .await
        .map_err(|e| match e {
            UserError::NotFound(_) => ApiError::Unauthorized(INVALID_CREDENTIALS.to_string()),
            _ => ApiError::from(e),
        })?;

    let claims = Claims::for_subject(user.id, user.role, state.token_expiration_hours);

    // Verify password and generate token
    let result = state
        .authenticator
        .authenticate(&body.password, &user.password_hash, &claims)
        .map_err(|e| match e {
            auth::AuthenticationError::InvalidCredentials => {
                ApiError::Unauthorized(INVALID_CREDENTIALS.to_string())
            }
            auth::AuthenticationError::PasswordError(err) => {
                ApiError::InternalServerError(format!("Password verification failed: {}", err))
            }
            auth::AuthenticationError::TokenError(err) => {
                ApiError::InternalServerError(format!("Token generation failed: {}", err))
            }
        })?;

    Ok(Json(LoginResponseBody {
        message: "Login successful.".to_string(),
        user: (&user).into(),
        token: result.access_token,
    }))
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct LoginRequestBody {
    email: String,
    password: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LoginResponseBody {
    pub message: String,
    pub user: UserSummary,
    pub token: String,
}
