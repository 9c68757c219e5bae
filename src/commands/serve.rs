//! HTTP server subcommand.

use std::sync::Arc;

use crate::api::{create_router, AppState};
use crate::cli::args::ServeArgs;
use crate::config::Config;
use crate::errors::{AppError, AppResult};
use crate::infra::Database;

/// Bring the store up, build the router, and serve until shutdown.
pub async fn execute(args: ServeArgs, config: Config) -> AppResult<()> {
    // Connects and applies pending migrations; an unreachable store here
    // is fatal.
    let database = Arc::new(Database::connect(&config).await);

    let state = AppState::from_config(database, config);
    let app = create_router(state);

    let addr = format!("{}:{}", args.host, args.port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .map_err(|e| AppError::internal(format!("cannot bind {}: {}", addr, e)))?;

    tracing::info!("listening on http://{}", addr);

    axum::serve(listener, app)
        .await
        .map_err(|e| AppError::internal(format!("server terminated: {}", e)))?;

    Ok(())
}
