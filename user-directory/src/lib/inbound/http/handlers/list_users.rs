use axum::extract::State;
use axum::http::StatusCode;
use axum::Extension;
use serde::Serialize;

use super::ApiError;
use super::ApiSuccess;
use crate::domain::user::models::UserListing;
use crate::domain::user::ports::UserServicePort;
use crate::inbound::http::middleware::AuthenticatedUser;
use crate::inbound::http::router::AppState;

pub async fn list_users<US: UserServicePort>(
    State(state): State<AppState<US>>,
    Extension(requester): Extension<AuthenticatedUser>,
) -> Result<ApiSuccess<Vec<UserResponseData>>, ApiError> {
    tracing::debug!(requested_by = %requester.user_id, "Listing users");

    state
        .user_service
        .list_users()
        .await
        .map_err(ApiError::from)
        .map(|users| {
            ApiSuccess::new(
                StatusCode::OK,
                users.iter().map(UserResponseData::from).collect(),
            )
        })
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UserResponseData {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub department: Option<String>,
}

impl From<&UserListing> for UserResponseData {
    fn from(user: &UserListing) -> Self {
        Self {
            id: user.id.0,
            name: user.name.clone(),
            email: user.email.clone(),
            department: user.department.clone(),
        }
    }
}
