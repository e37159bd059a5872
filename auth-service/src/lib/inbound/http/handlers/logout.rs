use axum::http::HeaderMap;
use axum::Json;
use serde::Serialize;

use super::ApiError;
use crate::inbound::http::middleware::bearer_token;

/// Stateless logout.
///
/// There is no server-side session or token store, so nothing is
/// invalidated here: the response only acknowledges that the client should
/// discard its token. The handler checks for a bearer token's presence and
/// never validates it.
pub async fn logout(headers: HeaderMap) -> Result<Json<LogoutResponseBody>, ApiError> {
    if bearer_token(&headers).is_none() {
        return Err(ApiError::BadRequest("No token to log out.".to_string()));
    }

    Ok(Json(LogoutResponseBody {
        message: "Logged out successfully. Token invalidated on the client side.".to_string(),
    }))
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LogoutResponseBody {
    pub message: String,
}
