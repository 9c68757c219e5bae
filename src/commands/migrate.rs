//! Schema migration subcommand.

use crate::cli::args::{MigrateAction, MigrateArgs};
use crate::config::Config;
use crate::errors::{AppError, AppResult};
use crate::infra::Database;

/// Run the requested migration action against the configured store.
pub async fn execute(args: MigrateArgs, config: Config) -> AppResult<()> {
    // Plain connection here; `up` must stay an explicit step when the
    // operator is driving the schema by hand.
    let db = Database::connect_without_migrations(&config)
        .await
        .map_err(|e| AppError::internal(format!("store connection failed: {}", e)))?;

    let result = match args.action {
        MigrateAction::Up => {
            tracing::info!("applying pending migrations");
            db.run_migrations().await
        }
        MigrateAction::Down => {
            tracing::info!("rolling back the last migration");
            db.rollback_migration().await
        }
        MigrateAction::Status => {
            for (name, applied) in db
                .migration_status()
                .await
                .map_err(|e| AppError::internal(e.to_string()))?
            {
                println!("{}: {}", name, if applied { "applied" } else { "pending" });
            }
            return Ok(());
        }
        MigrateAction::Fresh => {
            tracing::warn!("dropping all tables and re-applying every migration");
            db.fresh_migrations().await
        }
    };

    result.map_err(|e| AppError::internal(e.to_string()))?;
    tracing::info!("migration command finished");
    Ok(())
}
