use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use serde::Deserialize;
use serde::Serialize;

use super::json_body;
use super::ApiError;
use super::ApiSuccess;
use crate::domain::user::ports::UserServicePort;
use crate::inbound::http::router::AppState;

/// Passwordless login: any caller naming a registered email receives a token.
pub async fn login<US: UserServicePort>(
    State(state): State<AppState<US>>,
    payload: Result<Json<LoginRequestBody>, JsonRejection>,
) -> Result<ApiSuccess<LoginResponseData>, ApiError> {
    let email = json_body(payload)?
        .email
        .filter(|email| !email.is_empty())
        .ok_or_else(|| ApiError::BadRequest("Email is required".to_string()))?;

    let user = state.user_service.get_user_by_email(&email).await?;

    let token = state
        .authenticator
        .issue_token(user.id.0, &user.email)
        .map_err(|e| {
            tracing::error!(user_id = %user.id, error = %e, "Token generation failed");
            ApiError::InternalServerError(format!("Token generation failed: {}", e))
        })?;

    tracing::info!(user_id = %user.id, "Session token issued");

    Ok(ApiSuccess::new(
        StatusCode::OK,
        LoginResponseData {
            message: "Login successful".to_string(),
            token,
        },
    ))
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct LoginRequestBody {
    email: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LoginResponseData {
    pub message: String,
    pub token: String,
}
