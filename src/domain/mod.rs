//! Domain layer - Core business entities and logic
//!
//! Contains the core domain models that represent business concepts
//! independent of infrastructure concerns.

pub mod book;
pub mod password;
pub mod user;

pub use book::{Book, BookData, BookPatch};
pub use password::Password;
pub use user::{User, UserData, UserPatch};
