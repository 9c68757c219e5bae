//! User repository with soft delete support.

use async_trait::async_trait;
use chrono::Utc;
use sea_orm::sea_query::Expr;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder, Set,
};

use super::entities::user::{self, ActiveModel, Entity as UserEntity};
use crate::domain::{User, UserPatch};
use crate::errors::{AppError, AppResult};

/// User persistence operations.
///
/// Mutations are idempotent from the caller's perspective: updating or
/// deleting an id with no matching active row succeeds with zero rows
/// affected.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// List all active users
    async fn list(&self) -> AppResult<Vec<User>>;

    /// Find active user by ID
    async fn find_by_id(&self, id: i32) -> AppResult<Option<User>>;

    /// Find the first active user by email (login lookup)
    async fn find_by_email(&self, email: &str) -> AppResult<Option<User>>;

    /// Insert a new user row; the store assigns id and timestamps
    async fn create(&self, name: String, email: String, password_hash: String) -> AppResult<User>;

    /// Merge the patch's set fields into the row, refreshing `updated_at`
    async fn update(&self, id: i32, patch: UserPatch) -> AppResult<()>;

    /// Soft delete by ID (sets `deleted_at`)
    async fn delete(&self, id: i32) -> AppResult<()>;
}

/// SeaORM-backed implementation of [`UserRepository`].
pub struct UserStore {
    db: DatabaseConnection,
}

impl UserStore {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl UserRepository for UserStore {
    async fn list(&self) -> AppResult<Vec<User>> {
        let models = UserEntity::find()
            .filter(user::Column::DeletedAt.is_null())
            .all(&self.db)
            .await
            .map_err(AppError::from)?;

        Ok(models.into_iter().map(User::from).collect())
    }

    async fn find_by_id(&self, id: i32) -> AppResult<Option<User>> {
        let result = UserEntity::find_by_id(id)
            .filter(user::Column::DeletedAt.is_null())
            .one(&self.db)
            .await
            .map_err(AppError::from)?;

        Ok(result.map(User::from))
    }

    async fn find_by_email(&self, email: &str) -> AppResult<Option<User>> {
        let result = UserEntity::find()
            .filter(user::Column::Email.eq(email))
            .filter(user::Column::DeletedAt.is_null())
            .order_by_asc(user::Column::Id)
            .one(&self.db)
            .await
            .map_err(AppError::from)?;

        Ok(result.map(User::from))
    }

    async fn create(&self, name: String, email: String, password_hash: String) -> AppResult<User> {
        let now = Utc::now();
        let active_model = ActiveModel {
            name: Set(name),
            email: Set(email),
            password_hash: Set(password_hash),
            created_at: Set(now),
            updated_at: Set(now),
            deleted_at: Set(None),
            ..Default::default()
        };

        let model = active_model
            .insert(&self.db)
            .await
            .map_err(AppError::from)?;

        Ok(User::from(model))
    }

    async fn update(&self, id: i32, patch: UserPatch) -> AppResult<()> {
        // Single-statement merge; no existence check, a missing row is a
        // zero-rows-affected success.
        let mut query = UserEntity::update_many()
            .col_expr(user::Column::UpdatedAt, Expr::value(Utc::now()))
            .filter(user::Column::Id.eq(id))
            .filter(user::Column::DeletedAt.is_null());

        if let Some(name) = patch.name {
            query = query.col_expr(user::Column::Name, Expr::value(name));
        }
        if let Some(email) = patch.email {
            query = query.col_expr(user::Column::Email, Expr::value(email));
        }
        if let Some(password_hash) = patch.password_hash {
            query = query.col_expr(user::Column::PasswordHash, Expr::value(password_hash));
        }

        query.exec(&self.db).await.map_err(AppError::from)?;
        Ok(())
    }

    async fn delete(&self, id: i32) -> AppResult<()> {
        let now = Utc::now();
        UserEntity::update_many()
            .col_expr(user::Column::DeletedAt, Expr::value(now))
            .col_expr(user::Column::UpdatedAt, Expr::value(now))
            .filter(user::Column::Id.eq(id))
            .filter(user::Column::DeletedAt.is_null())
            .exec(&self.db)
            .await
            .map_err(AppError::from)?;

        Ok(())
    }
}
