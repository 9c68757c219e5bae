//! OpenAPI documentation configuration.
//!
//! Provides Swagger UI for API exploration and testing.

use utoipa::openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme};
use utoipa::{Modify, OpenApi};

use crate::api::handlers::{auth_handler, book_handler, user_handler};
use crate::domain::{BookData, UserData};
use crate::services::AuthenticatedUser;
use crate::types::MessageResponse;

/// OpenAPI documentation for the Bookshelf API
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Bookshelf API",
        version = "0.1.0",
        description = "Authenticated Users/Books CRUD API with JWT sessions",
        license(name = "MIT", url = "https://opensource.org/licenses/MIT")
    ),
    servers(
        (url = "http://localhost:8000", description = "Local development server")
    ),
    paths(
        // Authentication endpoints
        auth_handler::login,
        // User endpoints
        user_handler::list_users,
        user_handler::get_user,
        user_handler::create_user,
        user_handler::update_user,
        user_handler::delete_user,
        // Book endpoints
        book_handler::list_books,
        book_handler::get_book,
        book_handler::create_book,
        book_handler::update_book,
        book_handler::delete_book,
    ),
    components(
        schemas(
            // Domain types
            UserData,
            BookData,
            AuthenticatedUser,
            MessageResponse,
            // Auth types
            auth_handler::LoginRequest,
            auth_handler::LoginResponse,
            // User handler types
            user_handler::CreateUserRequest,
            user_handler::UpdateUserRequest,
            user_handler::UserListResponse,
            user_handler::UserDetailResponse,
            // Book handler types
            book_handler::CreateBookRequest,
            book_handler::UpdateBookRequest,
            book_handler::BookListResponse,
            book_handler::BookDetailResponse,
        )
    ),
    modifiers(&SecurityAddon),
    tags(
        (name = "Authentication", description = "Session token issuance"),
        (name = "Users", description = "User management operations"),
        (name = "Books", description = "Book management operations")
    )
)]
pub struct ApiDoc;

/// Security scheme modifier for JWT Bearer authentication
struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "bearer_auth",
                SecurityScheme::Http(
                    HttpBuilder::new()
                        .scheme(HttpAuthScheme::Bearer)
                        .bearer_format("JWT")
                        .description(Some("JWT token obtained from /v1/login"))
                        .build(),
                ),
            );
        }
    }
}
