use std::sync::Arc;
use std::time::Duration;

use auth::Authenticator;
use axum::body::Body;
use axum::http::header;
use axum::http::HeaderName;
use axum::http::HeaderValue;
use axum::http::Request;
use axum::http::Response;
use axum::middleware;
use axum::routing::delete;
use axum::routing::get;
use axum::routing::post;
use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::set_header::SetResponseHeaderLayer;
use tower_http::trace::TraceLayer;
use tracing::Span;

use super::handlers::delete_user::delete_user;
use super::handlers::list_users::list_users;
use super::handlers::login::login;
use super::handlers::register_user::register_user;
use super::middleware::authenticate;
use super::rate_limit::limit_requests;
use super::rate_limit::RateLimiter;
use crate::domain::user::ports::UserServicePort;

pub struct AppState<US: UserServicePort> {
    pub user_service: Arc<US>,
    pub authenticator: Arc<Authenticator>,
}

impl<US: UserServicePort> Clone for AppState<US> {
    fn clone(&self) -> Self {
        Self {
            user_service: Arc::clone(&self.user_service),
            authenticator: Arc::clone(&self.authenticator),
        }
    }
}

/// Response headers set on every reply unless the handler already set them.
const SECURITY_HEADERS: [(HeaderName, &str); 6] = [
    (header::X_CONTENT_TYPE_OPTIONS, "nosniff"),
    (header::X_FRAME_OPTIONS, "SAMEORIGIN"),
    (header::REFERRER_POLICY, "no-referrer"),
    (header::X_DNS_PREFETCH_CONTROL, "off"),
    (
        HeaderName::from_static("cross-origin-opener-policy"),
        "same-origin",
    ),
    (
        header::STRICT_TRANSPORT_SECURITY,
        "max-age=15552000; includeSubDomains",
    ),
];

pub fn create_router<US: UserServicePort>(
    user_service: Arc<US>,
    authenticator: Arc<Authenticator>,
    rate_limiter: Arc<RateLimiter>,
) -> Router {
    let state = AppState {
        user_service,
        authenticator: Arc::clone(&authenticator),
    };

    let public_routes = Router::new()
        .route("/register", post(register_user::<US>))
        .route("/login", post(login::<US>));

    let protected_routes = Router::new()
        .route("/users", get(list_users::<US>))
        .route("/users/:id", delete(delete_user::<US>))
        .route_layer(middleware::from_fn_with_state(authenticator, authenticate));

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

    let router = Router::new()
        .merge(public_routes)
        .merge(protected_routes)
        .layer(middleware::from_fn_with_state(rate_limiter, limit_requests))
        .layer(trace_layer)
        .layer(CorsLayer::permissive());

    SECURITY_HEADERS
        .into_iter()
        .fold(router, |router, (name, value)| {
            router.layer(SetResponseHeaderLayer::if_not_present(
                name,
                HeaderValue::from_static(value),
            ))
        })
        .with_state(state)
}
