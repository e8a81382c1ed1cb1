use async_trait::async_trait;

use crate::domain::user::models::RegisterUserCommand;
use crate::domain::user::models::User;
use crate::domain::user::models::UserId;
use crate::domain::user::models::UserListing;
use crate::user::errors::UserError;

/// Port for user domain service operations.
#[async_trait]
pub trait UserServicePort: Send + Sync + 'static {
    /// Register a new user.
    ///
    /// # Arguments
    /// * `command` - Command with name, email, department and role references
    ///
    /// # Returns
    /// Identifier assigned by the store
    ///
    /// # Errors
    /// * `DatabaseError` - Database operation failed
    async fn register_user(&self, command: RegisterUserCommand) -> Result<UserId, UserError>;

    /// Retrieve the user registered under an email address.
    ///
    /// # Errors
    /// * `NotFoundByEmail` - No user with this email
    /// * `DatabaseError` - Database operation failed
    async fn get_user_by_email(&self, email: &str) -> Result<User, UserError>;

    /// List every user with its department name.
    ///
    /// # Errors
    /// * `DatabaseError` - Database operation failed
    async fn list_users(&self) -> Result<Vec<UserListing>, UserError>;

    /// Delete a user.
    ///
    /// Deleting an identifier that matches no user is not an error.
    ///
    /// # Errors
    /// * `DatabaseError` - Database operation failed
    async fn delete_user(&self, id: &UserId) -> Result<(), UserError>;
}

/// Persistence operations for user aggregate.
#[async_trait]
pub trait UserRepository: Send + Sync + 'static {
    /// Persist a new user.
    ///
    /// # Returns
    /// Store-assigned identifier
    ///
    /// # Errors
    /// * `DatabaseError` - Database operation failed
    async fn create(&self, command: RegisterUserCommand) -> Result<UserId, UserError>;

    /// Retrieve a user by email address.
    ///
    /// When several users share the email, the one with the lowest id is returned.
    ///
    /// # Returns
    /// Optional user entity (None if not found)
    ///
    /// # Errors
    /// * `DatabaseError` - Database operation failed
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, UserError>;

    /// Retrieve all users left-joined with their department names.
    ///
    /// # Errors
    /// * `DatabaseError` - Database operation failed
    async fn list_with_departments(&self) -> Result<Vec<UserListing>, UserError>;

    /// Remove a user from storage.
    ///
    /// # Returns
    /// Number of rows removed (0 or 1)
    ///
    /// # Errors
    /// * `DatabaseError` - Database operation failed
    async fn delete(&self, id: &UserId) -> Result<u64, UserError>;
}
