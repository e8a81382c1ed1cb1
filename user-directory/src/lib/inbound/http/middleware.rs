use std::sync::Arc;

use auth::Authenticator;
use auth::JwtError;
use auth::SessionClaims;
use axum::extract::Request;
use axum::extract::State;
use axum::http::header;
use axum::http::HeaderValue;
use axum::middleware::Next;
use axum::response::Response;

use crate::domain::user::models::UserId;
use crate::inbound::http::handlers::ApiError;

/// Returned with 403 when the Authorization header is absent or not a Bearer credential.
pub const ACCESS_DENIED_MESSAGE: &str = "Access denied. No token provided or incorrect format.";

/// Returned with 401 for any token that fails verification, whatever the reason.
pub const INVALID_TOKEN_MESSAGE: &str = "Invalid or expired token.";

const BEARER_PREFIX: &str = "Bearer ";

/// Extension type to store the authenticated caller in request extensions
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthenticatedUser {
    pub user_id: UserId,
    pub email: String,
}

impl From<SessionClaims> for AuthenticatedUser {
    fn from(claims: SessionClaims) -> Self {
        Self {
            user_id: UserId(claims.user_id),
            email: claims.email,
        }
    }
}

/// Middleware that validates session tokens and adds the caller to request extensions.
///
/// Missing or non-Bearer headers are rejected with 403. Malformed, forged and
/// expired tokens all get the same 401; the reason is only logged.
pub async fn authenticate(
    State(authenticator): State<Arc<Authenticator>>,
    mut req: Request,
    next: Next,
) -> Result<Response, ApiError> {
    let token = bearer_token(req.headers().get(header::AUTHORIZATION)).ok_or_else(|| {
        tracing::warn!(uri = %req.uri(), "Missing or malformed Authorization header");
        ApiError::Forbidden(ACCESS_DENIED_MESSAGE.to_string())
    })?;

    let claims = std::str::from_utf8(token)
        .map_err(|e| JwtError::Malformed(e.to_string()))
        .and_then(|token| authenticator.verify_token(token))
        .map_err(|e| {
            tracing::warn!(uri = %req.uri(), reason = %e, "JWT validation failed");
            ApiError::Unauthorized(INVALID_TOKEN_MESSAGE.to_string())
        })?;

    req.extensions_mut().insert(AuthenticatedUser::from(claims));

    Ok(next.run(req).await)
}

/// Extract the candidate token bytes from an Authorization header value.
///
/// The raw value must start with `Bearer ` exactly. The token is the second
/// space-separated field; anything after it is ignored, and an empty second
/// field yields an empty token.
pub fn bearer_token(value: Option<&HeaderValue>) -> Option<&[u8]> {
    let value = value?.as_bytes();

    if !value.starts_with(BEARER_PREFIX.as_bytes()) {
        return None;
    }

    Some(value.split(|byte| *byte == b' ').nth(1).unwrap_or_default())
}
