//! Application state - Dependency injection container.
//!
//! The store connection never lives in a global; repositories are built
//! from it once and injected into the services handlers read from state.

use std::sync::Arc;

use crate::config::Config;
use crate::infra::{BookStore, Database, UserStore};
use crate::services::{AuthService, Authenticator, BookManager, BookService, UserManager, UserService};

/// Application state containing all services (DI container).
#[derive(Clone)]
pub struct AppState {
    /// Authentication service (token issuance/validation, login)
    pub auth_service: Arc<dyn AuthService>,
    /// User service
    pub user_service: Arc<dyn UserService>,
    /// Book service
    pub book_service: Arc<dyn BookService>,
}

impl AppState {
    /// Create application state from a database connection and config.
    pub fn from_config(database: Arc<Database>, config: Config) -> Self {
        let user_repo = Arc::new(UserStore::new(database.get_connection()));
        let book_repo = Arc::new(BookStore::new(database.get_connection()));

        Self {
            auth_service: Arc::new(Authenticator::new(user_repo.clone(), config)),
            user_service: Arc::new(UserManager::new(user_repo)),
            book_service: Arc::new(BookManager::new(book_repo)),
        }
    }

    /// Create application state with manually injected services (tests).
    pub fn new(
        auth_service: Arc<dyn AuthService>,
        user_service: Arc<dyn UserService>,
        book_service: Arc<dyn BookService>,
    ) -> Self {
        Self {
            auth_service,
            user_service,
            book_service,
        }
    }
}
