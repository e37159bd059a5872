use std::collections::HashMap;
use std::sync::RwLock;

use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::user::models::User;
use crate::domain::user::models::UserId;
use crate::domain::user::ports::UserRepository;
use crate::user::errors::UserError;

/// In-memory identity store for tests and local development.
///
/// Mirrors the Postgres implementation's contract, including the unique
/// email constraint and last-write-wins updates. The lock is never held
/// across an await point.
pub struct InMemoryUserRepository {
    users: RwLock<HashMap<Uuid, User>>,
}

impl InMemoryUserRepository {
    pub fn new() -> Self {
        Self {
            users: RwLock::new(HashMap::new()),
        }
    }
}

impl Default for InMemoryUserRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn create(&self, user: User) -> Result<User, UserError> {
        let mut users = self
            .users
            .write()
            .map_err(|e| UserError::DatabaseError(e.to_string()))?;

        if users
            .values()
            .any(|existing| existing.email == user.email)
        {
            return Err(UserError::EmailAlreadyExists(
                user.email.as_str().to_string(),
            ));
        }

        users.insert(user.id.0, user.clone());
        Ok(user)
    }

    async fn find_by_id(&self, id: &UserId) -> Result<Option<User>, UserError> {
        let users = self
            .users
            .read()
            .map_err(|e| UserError::DatabaseError(e.to_string()))?;

        Ok(users.get(&id.0).cloned())
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<User>, UserError> {
        let users = self
            .users
            .read()
            .map_err(|e| UserError::DatabaseError(e.to_string()))?;

        Ok(users
            .values()
            .find(|user| user.email.as_str() == email)
            .cloned())
    }

    async fn update(&self, user: User) -> Result<User, UserError> {
        let mut users = self
            .users
            .write()
            .map_err(|e| UserError::DatabaseError(e.to_string()))?;

        if users
            .values()
            .any(|existing| existing.email == user.email && existing.id != user.id)
        {
            return Err(UserError::EmailAlreadyExists(
                user.email.as_str().to_string(),
            ));
        }

        if !users.contains_key(&user.id.0) {
            return Err(UserError::NotFound(user.id.to_string()));
        }

        users.insert(user.id.0, user.clone());
        Ok(user)
    }

    async fn delete(&self, id: &UserId) -> Result<(), UserError> {
        let mut users = self
            .users
            .write()
            .map_err(|e| UserError::DatabaseError(e.to_string()))?;

        match users.remove(&id.0) {
            Some(_) => Ok(()),
            None => Err(UserError::NotFound(id.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use chrono::Utc;

    use super::*;
    use crate::domain::user::models::EmailAddress;
    use crate::domain::user::models::Role;

    fn user(email: &str) -> User {
        User {
            id: UserId::new(),
            email: EmailAddress::new(email.to_string()).unwrap(),
            password_hash: "$2b$10$hash".to_string(),
            role: Role::User,
            created_at: Utc::now(),
        }
    }

    #[tokio::test]
    async fn test_create_and_find() {
        let repo = InMemoryUserRepository::new();
        let created = repo.create(user("a@example.com")).await.unwrap();

        let by_id = repo.find_by_id(&created.id).await.unwrap();
        assert!(by_id.is_some());

        let by_email = repo.find_by_email("a@example.com").await.unwrap();
        assert_eq!(by_email.unwrap().id, created.id);
    }

    #[tokio::test]
    async fn test_create_duplicate_email() {
        let repo = InMemoryUserRepository::new();
        repo.create(user("a@example.com")).await.unwrap();

        let result = repo.create(user("a@example.com")).await;
        assert!(matches!(
            result.unwrap_err(),
            UserError::EmailAlreadyExists(_)
        ));
    }

    #[tokio::test]
    async fn test_email_lookup_is_case_sensitive() {
        let repo = InMemoryUserRepository::new();
        repo.create(user("Alice@example.com")).await.unwrap();

        assert!(repo.find_by_email("alice@example.com").await.unwrap().is_none());
        assert!(repo
            .find_by_email("Alice@example.com")
            .await
            .unwrap()
            .is_some());
    }

    #[tokio::test]
    async fn test_update_missing_user() {
        let repo = InMemoryUserRepository::new();
        let result = repo.update(user("a@example.com")).await;
        assert!(matches!(result.unwrap_err(), UserError::NotFound(_)));
    }

    #[tokio::test]
    async fn test_delete_twice() {
        let repo = InMemoryUserRepository::new();
        let created = repo.create(user("a@example.com")).await.unwrap();

        assert!(repo.delete(&created.id).await.is_ok());
        assert!(matches!(
            repo.delete(&created.id).await.unwrap_err(),
            UserError::NotFound(_)
        ));
    }
}
