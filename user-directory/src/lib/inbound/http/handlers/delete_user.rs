use axum::extract::Path;
use axum::extract::State;
use axum::http::StatusCode;
use axum::Extension;

use super::ApiError;
use super::ApiMessage;
use super::ApiSuccess;
use crate::domain::user::models::UserId;
use crate::domain::user::ports::UserServicePort;
use crate::inbound::http::middleware::AuthenticatedUser;
use crate::inbound::http::router::AppState;

/// Delete a user by id.
///
/// Any holder of a valid token may delete any user; no role check is made.
/// Ids that match no user, including non-numeric ones, succeed as no-ops.
pub async fn delete_user<US: UserServicePort>(
    State(state): State<AppState<US>>,
    Extension(requester): Extension<AuthenticatedUser>,
    Path(id): Path<String>,
) -> Result<ApiSuccess<ApiMessage>, ApiError> {
    match UserId::from_string(&id) {
        Ok(user_id) => {
            tracing::info!(
                user_id = %user_id,
                requested_by = %requester.user_id,
                "Deleting user"
            );
            state.user_service.delete_user(&user_id).await?;
        }
        Err(e) => {
            tracing::debug!(error = %e, "Delete id matches no user");
        }
    }

    Ok(ApiSuccess::new(
        StatusCode::OK,
        ApiMessage {
            message: "User deleted successfully".to_string(),
        },
    ))
}
