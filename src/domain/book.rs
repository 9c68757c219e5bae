//! Book domain entity and related types.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Book domain entity
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Book {
    pub id: i32,
    pub title: String,
    pub publisher: String,
    pub author: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    /// Soft delete timestamp (None = active, Some = deleted)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub deleted_at: Option<DateTime<Utc>>,
}

impl Book {
    /// Check if book is soft deleted
    pub fn is_deleted(&self) -> bool {
        self.deleted_at.is_some()
    }
}

/// Partial update for a book row.
///
/// `None` fields are left untouched; `Some` fields are merged into the
/// existing row and `updated_at` is refreshed.
#[derive(Debug, Clone, Default)]
pub struct BookPatch {
    pub title: Option<String>,
    pub publisher: Option<String>,
    pub author: Option<String>,
}

/// Book representation returned to clients.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct BookData {
    /// Unique book identifier
    #[schema(example = 1)]
    pub id: i32,
    /// Book title
    #[schema(example = "jalan jalan")]
    pub title: String,
    /// Publishing house
    #[schema(example = "gramed")]
    pub publisher: String,
    /// Book author
    #[schema(example = "ahmad")]
    pub author: String,
    /// Row creation timestamp
    pub created_at: DateTime<Utc>,
    /// Last update timestamp
    pub updated_at: DateTime<Utc>,
}

impl From<Book> for BookData {
    fn from(book: Book) -> Self {
        Self {
            id: book.id,
            title: book.title,
            publisher: book.publisher,
            author: book.author,
            created_at: book.created_at,
            updated_at: book.updated_at,
        }
    }
}
