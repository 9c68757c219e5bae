//! Application services layer - Use cases and business logic.
//!
//! Services orchestrate domain logic and infrastructure to fulfill
//! application use cases. They depend on repository traits for
//! dependency inversion.

mod auth_service;
mod book_service;
mod user_service;

pub use auth_service::{AuthService, AuthenticatedUser, Authenticator, Claims};
pub use book_service::{BookManager, BookService};
pub use user_service::{UserManager, UserService};
