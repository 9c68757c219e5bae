//! Bookshelf API: an authenticated CRUD service over users and books.
//!
//! Two resources live in Postgres behind a repository layer; sessions are
//! stateless JWTs and deleted rows are only ever tombstoned, never removed.
//! The layering runs `api` -> `services` -> `infra`, with `domain` holding
//! the types every layer shares.
//!
//! Run it with `cargo run -- serve` after `cargo run -- migrate up`.

pub mod api;
pub mod cli;
pub mod commands;
pub mod config;
pub mod domain;
pub mod errors;
pub mod infra;
pub mod services;
pub mod types;

pub use api::AppState;
pub use config::Config;
pub use domain::{Book, Password, User};
pub use errors::{AppError, AppResult};
