//! Book service - Handles book-related business logic.

use async_trait::async_trait;
use std::sync::Arc;

use crate::domain::{Book, BookPatch};
use crate::errors::AppResult;
use crate::infra::BookRepository;

/// Book service trait for dependency injection.
///
/// All operations exclude soft-deleted books.
#[async_trait]
pub trait BookService: Send + Sync {
    /// List all active books
    async fn list_books(&self) -> AppResult<Vec<Book>>;

    /// Get active book by ID; `None` when no active row matches
    async fn get_book(&self, id: i32) -> AppResult<Option<Book>>;

    /// Create a book; the store assigns id and timestamps
    async fn create_book(&self, title: String, publisher: String, author: String)
        -> AppResult<Book>;

    /// Merge the submitted fields into the row; unknown ids succeed silently
    async fn update_book(&self, id: i32, patch: BookPatch) -> AppResult<()>;

    /// Soft delete book by ID (idempotent)
    async fn delete_book(&self, id: i32) -> AppResult<()>;
}

/// Concrete implementation of BookService.
pub struct BookManager {
    repo: Arc<dyn BookRepository>,
}

impl BookManager {
    /// Create new book service instance
    pub fn new(repo: Arc<dyn BookRepository>) -> Self {
        Self { repo }
    }
}

#[async_trait]
impl BookService for BookManager {
    async fn list_books(&self) -> AppResult<Vec<Book>> {
        self.repo.list().await
    }

    async fn get_book(&self, id: i32) -> AppResult<Option<Book>> {
        self.repo.find_by_id(id).await
    }

    async fn create_book(
        &self,
        title: String,
        publisher: String,
        author: String,
    ) -> AppResult<Book> {
        self.repo.create(title, publisher, author).await
    }

    async fn update_book(&self, id: i32, patch: BookPatch) -> AppResult<()> {
        self.repo.update(id, patch).await
    }

    async fn delete_book(&self, id: i32) -> AppResult<()> {
        self.repo.delete(id).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infra::repositories::MockBookRepository;
    use chrono::Utc;
    use mockall::predicate::eq;

    fn stored_book(id: i32) -> Book {
        Book {
            id,
            title: "jalan jalan".to_string(),
            publisher: "gramed".to_string(),
            author: "ahmad".to_string(),
            created_at: Utc::now(),
            updated_at: Utc::now(),
            deleted_at: None,
        }
    }

    #[tokio::test]
    async fn get_book_returns_none_when_missing() {
        let mut repo = MockBookRepository::new();
        repo.expect_find_by_id().with(eq(1)).returning(|_| Ok(None));

        let service = BookManager::new(Arc::new(repo));
        assert!(service.get_book(1).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn create_book_forwards_fields_to_store() {
        let mut repo = MockBookRepository::new();
        repo.expect_create()
            .with(eq("jalan jalan".to_string()), eq("gramed".to_string()), eq("ahmad".to_string()))
            .returning(|title, publisher, author| {
                Ok(Book {
                    id: 1,
                    title,
                    publisher,
                    author,
                    created_at: Utc::now(),
                    updated_at: Utc::now(),
                    deleted_at: None,
                })
            });

        let service = BookManager::new(Arc::new(repo));
        let book = service
            .create_book(
                "jalan jalan".to_string(),
                "gramed".to_string(),
                "ahmad".to_string(),
            )
            .await
            .unwrap();

        assert_eq!(book.id, 1);
        assert_eq!(book.title, "jalan jalan");
    }

    #[tokio::test]
    async fn update_book_passes_partial_patch() {
        let mut repo = MockBookRepository::new();
        repo.expect_update()
            .with(
                eq(3),
                mockall::predicate::function(|patch: &BookPatch| {
                    patch.title.as_deref() == Some("retitled")
                        && patch.publisher.is_none()
                        && patch.author.is_none()
                }),
            )
            .returning(|_, _| Ok(()));

        let service = BookManager::new(Arc::new(repo));
        service
            .update_book(
                3,
                BookPatch {
                    title: Some("retitled".to_string()),
                    ..Default::default()
                },
            )
            .await
            .unwrap();
    }

    #[tokio::test]
    async fn delete_book_is_forwarded_to_store() {
        let mut repo = MockBookRepository::new();
        repo.expect_delete().with(eq(9)).returning(|_| Ok(()));

        let service = BookManager::new(Arc::new(repo));
        service.delete_book(9).await.unwrap();
    }

    #[tokio::test]
    async fn list_books_returns_all_active_rows() {
        let mut repo = MockBookRepository::new();
        repo.expect_list()
            .returning(|| Ok(vec![stored_book(1), stored_book(2)]));

        let service = BookManager::new(Arc::new(repo));
        assert_eq!(service.list_books().await.unwrap().len(), 2);
    }
}
