//! Book repository with soft delete support.

use async_trait::async_trait;
use chrono::Utc;
use sea_orm::sea_query::Expr;
use sea_orm::{ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, Set};

use super::entities::book::{self, ActiveModel, Entity as BookEntity};
use crate::domain::{Book, BookPatch};
use crate::errors::{AppError, AppResult};

/// Book persistence operations.
///
/// Same contract as the user repository: reads exclude soft-deleted rows,
/// mutations on a missing id succeed with zero rows affected.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait BookRepository: Send + Sync {
    /// List all active books
    async fn list(&self) -> AppResult<Vec<Book>>;

    /// Find active book by ID
    async fn find_by_id(&self, id: i32) -> AppResult<Option<Book>>;

    /// Insert a new book row; the store assigns id and timestamps
    async fn create(&self, title: String, publisher: String, author: String) -> AppResult<Book>;

    /// Merge the patch's set fields into the row, refreshing `updated_at`
    async fn update(&self, id: i32, patch: BookPatch) -> AppResult<()>;

    /// Soft delete by ID (sets `deleted_at`)
    async fn delete(&self, id: i32) -> AppResult<()>;
}

/// SeaORM-backed implementation of [`BookRepository`].
pub struct BookStore {
    db: DatabaseConnection,
}

impl BookStore {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl BookRepository for BookStore {
    async fn list(&self) -> AppResult<Vec<Book>> {
        let models = BookEntity::find()
            .filter(book::Column::DeletedAt.is_null())
            .all(&self.db)
            .await
            .map_err(AppError::from)?;

        Ok(models.into_iter().map(Book::from).collect())
    }

    async fn find_by_id(&self, id: i32) -> AppResult<Option<Book>> {
        let result = BookEntity::find_by_id(id)
            .filter(book::Column::DeletedAt.is_null())
            .one(&self.db)
            .await
            .map_err(AppError::from)?;

        Ok(result.map(Book::from))
    }

    async fn create(&self, title: String, publisher: String, author: String) -> AppResult<Book> {
        let now = Utc::now();
        let active_model = ActiveModel {
            title: Set(title),
            publisher: Set(publisher),
            author: Set(author),
            created_at: Set(now),
            updated_at: Set(now),
            deleted_at: Set(None),
            ..Default::default()
        };

        let model = active_model
            .insert(&self.db)
            .await
            .map_err(AppError::from)?;

        Ok(Book::from(model))
    }

    async fn update(&self, id: i32, patch: BookPatch) -> AppResult<()> {
        let mut query = BookEntity::update_many()
            .col_expr(book::Column::UpdatedAt, Expr::value(Utc::now()))
            .filter(book::Column::Id.eq(id))
            .filter(book::Column::DeletedAt.is_null());

        if let Some(title) = patch.title {
            query = query.col_expr(book::Column::Title, Expr::value(title));
        }
        if let Some(publisher) = patch.publisher {
            query = query.col_expr(book::Column::Publisher, Expr::value(publisher));
        }
        if let Some(author) = patch.author {
            query = query.col_expr(book::Column::Author, Expr::value(author));
        }

        query.exec(&self.db).await.map_err(AppError::from)?;
        Ok(())
    }

    async fn delete(&self, id: i32) -> AppResult<()> {
        let now = Utc::now();
        BookEntity::update_many()
            .col_expr(book::Column::DeletedAt, Expr::value(now))
            .col_expr(book::Column::UpdatedAt, Expr::value(now))
            .filter(book::Column::Id.eq(id))
            .filter(book::Column::DeletedAt.is_null())
            .exec(&self.db)
            .await
            .map_err(AppError::from)?;

        Ok(())
    }
}
