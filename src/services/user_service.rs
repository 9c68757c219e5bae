//! User service - Handles user-related business logic.

use async_trait::async_trait;
use std::sync::Arc;

use crate::domain::{Password, User, UserPatch};
use crate::errors::AppResult;
use crate::infra::UserRepository;

/// User service trait for dependency injection.
///
/// All operations exclude soft-deleted users.
#[async_trait]
pub trait UserService: Send + Sync {
    /// List all active users
    async fn list_users(&self) -> AppResult<Vec<User>>;

    /// Get active user by ID; `None` when no active row matches
    async fn get_user(&self, id: i32) -> AppResult<Option<User>>;

    /// Create a user, hashing the submitted password before storage
    async fn create_user(&self, name: String, email: String, password: String) -> AppResult<User>;

    /// Merge the submitted fields into the row. A plaintext password in the
    /// patch is hashed here before it reaches the store. Unknown ids
    /// succeed silently.
    async fn update_user(
        &self,
        id: i32,
        name: Option<String>,
        email: Option<String>,
        password: Option<String>,
    ) -> AppResult<()>;

    /// Soft delete user by ID (idempotent)
    async fn delete_user(&self, id: i32) -> AppResult<()>;
}

/// Concrete implementation of UserService.
pub struct UserManager {
    repo: Arc<dyn UserRepository>,
}

impl UserManager {
    /// Create new user service instance
    pub fn new(repo: Arc<dyn UserRepository>) -> Self {
        Self { repo }
    }
}

#[async_trait]
impl UserService for UserManager {
    async fn list_users(&self) -> AppResult<Vec<User>> {
        self.repo.list().await
    }

    async fn get_user(&self, id: i32) -> AppResult<Option<User>> {
        self.repo.find_by_id(id).await
    }

    async fn create_user(&self, name: String, email: String, password: String) -> AppResult<User> {
        let password_hash = Password::new(&password)?.into_string();
        self.repo.create(name, email, password_hash).await
    }

    async fn update_user(
        &self,
        id: i32,
        name: Option<String>,
        email: Option<String>,
        password: Option<String>,
    ) -> AppResult<()> {
        let password_hash = match password {
            Some(plain) => Some(Password::new(&plain)?.into_string()),
            None => None,
        };

        let patch = UserPatch {
            name,
            email,
            password_hash,
        };

        self.repo.update(id, patch).await
    }

    async fn delete_user(&self, id: i32) -> AppResult<()> {
        self.repo.delete(id).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infra::repositories::MockUserRepository;
    use chrono::Utc;
    use mockall::predicate::{always, eq};

    fn stored_user(id: i32) -> User {
        User {
            id,
            name: "ahmad naufal".to_string(),
            email: "ahmad@gmail.com".to_string(),
            password_hash: "hashed".to_string(),
            created_at: Utc::now(),
            updated_at: Utc::now(),
            deleted_at: None,
        }
    }

    #[tokio::test]
    async fn create_user_hashes_password_before_storage() {
        let mut repo = MockUserRepository::new();
        repo.expect_create()
            .withf(|_, _, hash| hash != "alta@1234" && hash.starts_with("$argon2"))
            .returning(|name, email, hash| {
                Ok(User {
                    id: 1,
                    name,
                    email,
                    password_hash: hash,
                    created_at: Utc::now(),
                    updated_at: Utc::now(),
                    deleted_at: None,
                })
            });

        let service = UserManager::new(Arc::new(repo));
        let user = service
            .create_user(
                "ahmad naufal".to_string(),
                "ahmad@gmail.com".to_string(),
                "alta@1234".to_string(),
            )
            .await
            .unwrap();

        assert_eq!(user.id, 1);
    }

    #[tokio::test]
    async fn get_user_passes_through_missing_rows() {
        let mut repo = MockUserRepository::new();
        repo.expect_find_by_id().with(eq(42)).returning(|_| Ok(None));

        let service = UserManager::new(Arc::new(repo));
        assert!(service.get_user(42).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn update_user_merges_only_submitted_fields() {
        let mut repo = MockUserRepository::new();
        repo.expect_update()
            .with(
                eq(1),
                mockall::predicate::function(|patch: &UserPatch| {
                    patch.name.as_deref() == Some("renamed")
                        && patch.email.is_none()
                        && patch.password_hash.is_none()
                }),
            )
            .returning(|_, _| Ok(()));

        let service = UserManager::new(Arc::new(repo));
        service
            .update_user(1, Some("renamed".to_string()), None, None)
            .await
            .unwrap();
    }

    #[tokio::test]
    async fn update_user_hashes_new_password() {
        let mut repo = MockUserRepository::new();
        repo.expect_update()
            .with(
                always(),
                mockall::predicate::function(|patch: &UserPatch| {
                    matches!(&patch.password_hash, Some(h) if h.starts_with("$argon2"))
                }),
            )
            .returning(|_, _| Ok(()));

        let service = UserManager::new(Arc::new(repo));
        service
            .update_user(1, None, None, Some("new-password".to_string()))
            .await
            .unwrap();
    }

    #[tokio::test]
    async fn delete_user_is_forwarded_to_store() {
        let mut repo = MockUserRepository::new();
        repo.expect_delete().with(eq(7)).returning(|_| Ok(()));

        let service = UserManager::new(Arc::new(repo));
        service.delete_user(7).await.unwrap();
    }

    #[tokio::test]
    async fn list_users_returns_all_active_rows() {
        let mut repo = MockUserRepository::new();
        repo.expect_list()
            .returning(|| Ok(vec![stored_user(1), stored_user(2)]));

        let service = UserManager::new(Arc::new(repo));
        assert_eq!(service.list_users().await.unwrap().len(), 2);
    }
}
