//! Repository layer - Data access abstraction
//!
//! Repositories provide an abstraction over data persistence,
//! following the Repository pattern for clean separation of concerns.
//! By default, query methods exclude soft-deleted rows.

pub(crate) mod entities;

mod book_repository;
mod user_repository;

pub use book_repository::{BookRepository, BookStore};
pub use user_repository::{UserRepository, UserStore};

// Mocks for unit tests
#[cfg(test)]
pub use book_repository::MockBookRepository;
#[cfg(test)]
pub use user_repository::MockUserRepository;
