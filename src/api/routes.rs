//! Application route configuration.

use axum::{
    middleware,
    routing::{delete, get, post, put},
    Router,
};
use tower_http::trace::TraceLayer;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use super::handlers::{auth_handler, book_handler, user_handler};
use super::middleware::auth_middleware;
use super::openapi::ApiDoc;
use super::AppState;

/// Create the application router with all routes configured.
///
/// Public and protected routes share paths but not methods; the auth gate
/// is a route layer on the protected set only, so it never runs for
/// public requests.
pub fn create_router(state: AppState) -> Router {
    let public = Router::new()
        .route("/users", post(user_handler::create_user))
        .route("/login", post(auth_handler::login))
        .route("/books", get(book_handler::list_books))
        .route("/books/:id", get(book_handler::get_book));

    let protected = Router::new()
        .route("/users", get(user_handler::list_users))
        .route(
            "/users/:id",
            get(user_handler::get_user)
                .put(user_handler::update_user)
                .delete(user_handler::delete_user),
        )
        .route("/books", post(book_handler::create_book))
        .route("/books/:id", put(book_handler::update_book))
        .route("/books/:id", delete(book_handler::delete_book))
        .route_layer(middleware::from_fn_with_state(
            state.clone(),
            auth_middleware,
        ));

    Router::new()
        .route("/", get(root))
        // OpenAPI Swagger UI documentation
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .nest("/v1", public.merge(protected))
        // Global middleware
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Root endpoint
async fn root() -> &'static str {
    "Welcome to Bookshelf API"
}
