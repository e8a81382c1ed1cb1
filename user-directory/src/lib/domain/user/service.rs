use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::user::models::RegisterUserCommand;
use crate::domain::user::models::User;
use crate::domain::user::models::UserId;
use crate::domain::user::models::UserListing;
use crate::user::errors::UserError;
use crate::user::ports::UserRepository;
use crate::user::ports::UserServicePort;

/// Domain service implementation for user operations.
///
/// Concrete implementation of UserServicePort with dependency injection.
pub struct UserService<UR>
where
    UR: UserRepository,
{
    repository: Arc<UR>,
}

impl<UR> UserService<UR>
where
    UR: UserRepository,
{
    /// Create a new user service over a repository.
    pub fn new(repository: Arc<UR>) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<UR> UserServicePort for UserService<UR>
where
    UR: UserRepository,
{
    async fn register_user(&self, command: RegisterUserCommand) -> Result<UserId, UserError> {
        let id = self.repository.create(command).await?;
        tracing::info!(user_id = %id, "User registered");
        Ok(id)
    }

    async fn get_user_by_email(&self, email: &str) -> Result<User, UserError> {
        self.repository
            .find_by_email(email)
            .await?
            .ok_or_else(|| UserError::NotFoundByEmail(email.to_string()))
    }

    async fn list_users(&self) -> Result<Vec<UserListing>, UserError> {
        self.repository.list_with_departments().await
    }

    async fn delete_user(&self, id: &UserId) -> Result<(), UserError> {
        let removed = self.repository.delete(id).await?;

        if removed == 0 {
            tracing::debug!(user_id = %id, "Delete matched no user");
        } else {
            tracing::info!(user_id = %id, "User deleted");
        }

        Ok(())
    }
}
