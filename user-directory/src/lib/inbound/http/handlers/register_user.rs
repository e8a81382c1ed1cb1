use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use serde::Deserialize;
use serde::Serialize;
use thiserror::Error;

use super::json_body;
use super::ApiError;
use super::ApiSuccess;
use crate::domain::user::models::RegisterUserCommand;
use crate::domain::user::models::UserId;
use crate::domain::user::ports::UserServicePort;
use crate::inbound::http::router::AppState;

pub async fn register_user<US: UserServicePort>(
    State(state): State<AppState<US>>,
    payload: Result<Json<RegisterUserRequest>, JsonRejection>,
) -> Result<ApiSuccess<RegisterUserResponseData>, ApiError> {
    let command = json_body(payload)?.try_into_command()?;

    state
        .user_service
        .register_user(command)
        .await
        .map_err(ApiError::from)
        .map(|id| ApiSuccess::new(StatusCode::CREATED, id.into()))
}

/// HTTP request body for registering a user (raw JSON)
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct RegisterUserRequest {
    name: Option<String>,
    email: Option<String>,
    department_id: Option<ReferenceId>,
    role_id: Option<ReferenceId>,
}

/// Department or role reference: a JSON integer, or a string holding one.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
enum ReferenceId {
    Integer(i64),
    Text(String),
}

impl ReferenceId {
    fn is_present(&self) -> bool {
        match self {
            ReferenceId::Integer(id) => *id != 0,
            ReferenceId::Text(text) => !text.is_empty(),
        }
    }

    fn into_id(self, field: &'static str) -> Result<i64, ParseRegisterUserRequestError> {
        match self {
            ReferenceId::Integer(id) => Ok(id),
            ReferenceId::Text(text) => text
                .parse()
                .map_err(|_| ParseRegisterUserRequestError::InvalidReference(field)),
        }
    }
}

#[derive(Debug, Clone, Error, PartialEq, Eq)]
enum ParseRegisterUserRequestError {
    #[error("All fields are required")]
    MissingFields,

    #[error("{0} must be an integer")]
    InvalidReference(&'static str),
}

impl RegisterUserRequest {
    /// Absent, null, empty-string and zero fields all count as missing.
    fn try_into_command(self) -> Result<RegisterUserCommand, ParseRegisterUserRequestError> {
        let name = self.name.filter(|s| !s.is_empty());
        let email = self.email.filter(|s| !s.is_empty());
        let department_id = self.department_id.filter(ReferenceId::is_present);
        let role_id = self.role_id.filter(ReferenceId::is_present);

        match (name, email, department_id, role_id) {
            (Some(name), Some(email), Some(department_id), Some(role_id)) => {
                Ok(RegisterUserCommand::new(
                    name,
                    email,
                    department_id.into_id("department_id")?,
                    role_id.into_id("role_id")?,
                ))
            }
            _ => Err(ParseRegisterUserRequestError::MissingFields),
        }
    }
}

impl From<ParseRegisterUserRequestError> for ApiError {
    fn from(err: ParseRegisterUserRequestError) -> Self {
        ApiError::BadRequest(err.to_string())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RegisterUserResponseData {
    pub message: String,
    #[serde(rename = "userId")]
    pub user_id: i64,
}

impl From<UserId> for RegisterUserResponseData {
    fn from(id: UserId) -> Self {
        Self {
            message: "User registered successfully".to_string(),
            user_id: id.0,
        }
    }
}
