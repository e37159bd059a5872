use axum::extract::Request;
use axum::extract::State;
use axum::http::{self};
use axum::middleware::Next;
use axum::response::IntoResponse;
use axum::response::Response;

use crate::domain::user::models::Role;
use crate::domain::user::models::UserId;
use crate::inbound::http::handlers::ApiError;
use crate::inbound::http::router::AppState;

/// Extension type carrying the authenticated identity through the request
#[derive(Debug, Clone)]
pub struct AuthenticatedUser {
    pub user_id: UserId,
    pub role: Role,
}

/// Middleware guarding protected routes.
///
/// Two distinct rejection kinds, both 401: a missing or non-Bearer header is
/// "no credentials presented"; a present token that fails signature or
/// expiry checks is "invalid token". Expired, malformed, and badly signed
/// tokens are not distinguished to the caller.
pub async fn authenticate(
    State(state): State<AppState>,
    mut req: Request,
    next: Next,
) -> Result<Response, Response> {
    let token = bearer_token(req.headers()).ok_or_else(|| {
        ApiError::Unauthorized("Not authorized, no token.".to_string()).into_response()
    })?;

    let claims = state.authenticator.validate_token(token).map_err(|e| {
        tracing::warn!("Token validation failed: {}", e);
        ApiError::Unauthorized("Invalid token.".to_string()).into_response()
    })?;

    let user_id = UserId::from_string(&claims.sub).map_err(|e| {
        tracing::error!("Failed to parse user ID from token: {}", e);
        ApiError::Unauthorized("Invalid token.".to_string()).into_response()
    })?;

    let role: Role = claims.role.parse().map_err(|e| {
        tracing::error!("Failed to parse role from token: {}", e);
        ApiError::Unauthorized("Invalid token.".to_string()).into_response()
    })?;

    req.extensions_mut()
        .insert(AuthenticatedUser { user_id, role });

    Ok(next.run(req).await)
}

/// Extract the bearer token from the Authorization header.
///
/// A header without the `Bearer ` prefix counts as no token at all.
pub fn bearer_token(headers: &http::HeaderMap) -> Option<&str> {
    let auth_str = headers.get(http::header::AUTHORIZATION)?.to_str().ok()?;

    auth_str.strip_prefix("Bearer ").filter(|t| !t.is_empty())
}
