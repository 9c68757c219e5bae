//! Infrastructure layer - External systems integration
//!
//! Handles database connections, migrations, and repositories. The rest of
//! the application depends on the repository traits, never on the
//! connection itself.

pub mod db;
pub mod repositories;

pub use db::{Database, Migrator};
pub use repositories::{BookRepository, BookStore, UserRepository, UserStore};
