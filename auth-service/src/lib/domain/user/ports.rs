use async_trait::async_trait;

use crate::domain::user::models::EmailAddress;
use crate::domain::user::models::RegisterUserCommand;
use crate::domain::user::models::Role;
use crate::domain::user::models::User;
use crate::domain::user::models::UserId;
use crate::user::errors::UserError;

/// Port for the auth domain service operations.
#[async_trait]
pub trait AuthServicePort: Send + Sync + 'static {
    /// Register a new user with validated credentials.
    ///
    /// Hashes the password and persists the record. Fails if the email is
    /// already registered.
    ///
    /// # Errors
    /// * `EmailAlreadyExists` - Email is already registered
    /// * `DatabaseError` - Store operation failed
    async fn register_user(&self, command: RegisterUserCommand) -> Result<User, UserError>;

    /// Retrieve user by email address.
    ///
    /// # Errors
    /// * `NotFound` - No user with this email
    /// * `DatabaseError` - Store operation failed
    async fn get_user_by_email(&self, email: &EmailAddress) -> Result<User, UserError>;

    /// Replace the user's password after verifying the current one.
    ///
    /// # Errors
    /// * `NotFound` - User does not exist
    /// * `InvalidCredentials` - Current password does not match
    /// * `DatabaseError` - Store operation failed
    async fn update_password(
        &self,
        id: &UserId,
        current_password: &str,
        new_password: &str,
    ) -> Result<(), UserError>;

    /// Overwrite the target user's role.
    ///
    /// Authorization (admin-only) is the caller's responsibility; this
    /// operation only performs the state change.
    ///
    /// # Errors
    /// * `NotFound` - Target user does not exist
    /// * `DatabaseError` - Store operation failed
    async fn set_role(&self, id: &UserId, role: Role) -> Result<User, UserError>;

    /// Permanently delete the user record.
    ///
    /// Deleting an already-absent user is not an error; deletion is
    /// idempotent.
    ///
    /// # Errors
    /// * `DatabaseError` - Store operation failed
    async fn unregister_user(&self, id: &UserId) -> Result<(), UserError>;
}

/// Persistence operations for the user aggregate (identity store contract).
#[async_trait]
pub trait UserRepository: Send + Sync + 'static {
    /// Persist new user to storage.
    ///
    /// # Errors
    /// * `EmailAlreadyExists` - Email is already registered
    /// * `DatabaseError` - Store operation failed
    async fn create(&self, user: User) -> Result<User, UserError>;

    /// Retrieve user by identifier.
    ///
    /// # Returns
    /// Optional user entity (None if not found)
    ///
    /// # Errors
    /// * `DatabaseError` - Store operation failed
    async fn find_by_id(&self, id: &UserId) -> Result<Option<User>, UserError>;

    /// Retrieve user by email address (exact, case-sensitive match).
    ///
    /// # Returns
    /// Optional user entity (None if not found)
    ///
    /// # Errors
    /// * `DatabaseError` - Store operation failed
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, UserError>;

    /// Update existing user in storage. Whole-record write, last write wins.
    ///
    /// # Errors
    /// * `NotFound` - User does not exist
    /// * `DatabaseError` - Store operation failed
    async fn update(&self, user: User) -> Result<User, UserError>;

    /// Remove user from storage.
    ///
    /// # Errors
    /// * `NotFound` - User does not exist
    /// * `DatabaseError` - Store operation failed
    async fn delete(&self, id: &UserId) -> Result<(), UserError>;
}
