use std::sync::Arc;
use std::time::Duration;

use auth::Authenticator;
use axum::body::Body;
use axum::http::Request;
use axum::http::Response;
use axum::middleware;
use axum::routing::delete;
use axum::routing::get;
use axum::routing::post;
use axum::routing::put;
use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::Span;

use super::handlers::get_roles::get_roles;
use super::handlers::login::login;
use super::handlers::logout::logout;
use super::handlers::register::register;
use super::handlers::set_role::set_role;
use super::handlers::unregister::unregister;
use super::handlers::update_password::update_password;
use super::handlers::validate_user::validate_user;
use super::middleware::authenticate as auth_middleware;
use crate::domain::user::ports::AuthServicePort;

#[derive(Clone)]
pub struct AppState {
    pub auth_service: Arc<dyn AuthServicePort>,
    pub authenticator: Arc<Authenticator>,
    pub token_expiration_hours: i64,
}

pub fn create_router(
    auth_service: Arc<dyn AuthServicePort>,
    authenticator: Arc<Authenticator>,
    token_expiration_hours: i64,
) -> Router {
    let state = AppState {
        auth_service,
        authenticator,
        token_expiration_hours,
    };

    // Logout stays public: it only inspects the header and never validates
    // the token, so it must not sit behind the auth middleware.
    let public_routes = Router::new()
        .route("/register", post(register))
        .route("/login", post(login))
        .route("/roles", get(get_roles))
        .route("/logout", delete(logout));

    let protected_routes = Router::new()
        .route("/validateUser", get(validate_user))
        .route("/updatePassword", put(update_password))
        .route("/setRole/:user_id", put(set_role))
        .route("/unregister/:user_id", delete(unregister))
        .route_layer(middleware::from_fn_with_state(
            state.clone(),
            auth_middleware,
        ));

    let trace_layer = TraceLayer::new_for_http()
        .make_span_with(|request: &Request<Body>| {
            tracing::info_span!(
                "http_request",
                method = %request.method(),
                uri = %request.uri(),
                version = ?request.version(),
            )
        })
        .on_request(|request: &Request<Body>, _span: &Span| {
            tracing::info!(
                method = %request.method(),
                uri = %request.uri(),
                "Request started"
            );
        })
        .on_response(
            |response: &Response<Body>, latency: Duration, _span: &Span| {
                tracing::info!(
                    status = response.status().as_u16(),
                    latency_ms = latency.as_millis(),
                    "Request completed"
                );
            },
        );

    Router::new()
        .merge(public_routes)
        .merge(protected_routes)
        .layer(trace_layer)
        .layer(CorsLayer::permissive())
        .with_state(state)
}
