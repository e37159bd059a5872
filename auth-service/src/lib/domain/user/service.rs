use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;

use crate::domain::user::models::EmailAddress;
use crate::domain::user::models::RegisterUserCommand;
use crate::domain::user::models::Role;
use crate::domain::user::models::User;
use crate::domain::user::models::UserId;
use crate::user::errors::UserError;
use crate::user::ports::AuthServicePort;
use crate::user::ports::UserRepository;

/// Domain service implementation for auth operations.
///
/// Concrete implementation of AuthServicePort with dependency injection.
/// Token issuance stays at the HTTP boundary; this service owns credential
/// hashing and the identity store orchestration.
pub struct AuthService<UR>
where
    UR: UserRepository,
{
    repository: Arc<UR>,
    password_hasher: auth::PasswordHasher,
}

impl<UR> AuthService<UR>
where
    UR: UserRepository,
{
    /// Create a new auth service with an injected repository.
    pub fn new(repository: Arc<UR>) -> Self {
        Self {
            repository,
            password_hasher: auth::PasswordHasher::new(),
        }
    }
}

#[async_trait]
impl<UR> AuthServicePort for AuthService<UR>
where
    UR: UserRepository,
{
    async fn register_user(&self, command: RegisterUserCommand) -> Result<User, UserError> {
        if self
            .repository
            .find_by_email(command.email.as_str())
            .await?
            .is_some()
        {
            return Err(UserError::EmailAlreadyExists(
                command.email.as_str().to_string(),
            ));
        }

        let password_hash = self
            .password_hasher
            .hash(&command.password)
            .map_err(|e| UserError::Unknown(format!("Password hashing failed: {}", e)))?;

        let user = User {
            id: UserId::new(),
            email: command.email,
            password_hash,
            role: command.role,
            created_at: Utc::now(),
        };

        self.repository.create(user).await
    }

    async fn get_user_by_email(&self, email: &EmailAddress) -> Result<User, UserError> {
        self.repository
            .find_by_email(email.as_str())
            .await?
            .ok_or(UserError::NotFound(email.as_str().to_string()))
    }

    async fn update_password(
        &self,
        id: &UserId,
        current_password: &str,
        new_password: &str,
    ) -> Result<(), UserError> {
        let mut user = self
            .repository
            .find_by_id(id)
            .await?
            .ok_or(UserError::NotFound(id.to_string()))?;

        let current_matches = self
            .password_hasher
            .verify(current_password, &user.password_hash)
            .map_err(|e| UserError::Unknown(format!("Password verification failed: {}", e)))?;

        if !current_matches {
            return Err(UserError::InvalidCredentials);
        }

        user.password_hash = self
            .password_hasher
            .hash(new_password)
            .map_err(|e| UserError::Unknown(format!("Password hashing failed: {}", e)))?;

        // No version check on the record: concurrent updates race and the
        // last write wins.
        self.repository.update(user).await?;

        Ok(())
    }

    async fn set_role(&self, id: &UserId, role: Role) -> Result<User, UserError> {
        let mut user = self
            .repository
            .find_by_id(id)
            .await?
            .ok_or(UserError::NotFound(id.to_string()))?;

        user.role = role;

        self.repository.update(user).await
    }

    async fn unregister_user(&self, id: &UserId) -> Result<(), UserError> {
        // Deletion is permanent and idempotent: an absent target is treated
        // as already deleted.
        match self.repository.delete(id).await {
            Ok(()) | Err(UserError::NotFound(_)) => Ok(()),
            Err(e) => Err(e),
        }
    }
}
