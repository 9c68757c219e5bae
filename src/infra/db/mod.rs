//! Store connection handling and migration plumbing.

use std::collections::HashSet;

use sea_orm::{Database as SeaDatabase, DatabaseConnection, DbErr, EntityTrait, QueryOrder};
use sea_orm_migration::{seaql_migrations, MigratorTrait};

use crate::config::Config;

pub mod migrations;

pub use migrations::Migrator;

/// Handle on the Postgres connection pool.
///
/// Repositories take clones of the inner [`DatabaseConnection`]; this type
/// only exists for startup and migration control.
#[derive(Clone)]
pub struct Database {
    connection: DatabaseConnection,
}

impl Database {
    /// Connect and bring the schema up to date.
    ///
    /// # Panics
    /// Panics when the store is unreachable or a migration fails. The
    /// server cannot degrade without its store, so startup stops here.
    pub async fn connect(config: &Config) -> Self {
        let connection = SeaDatabase::connect(&config.database_url)
            .await
            .expect("store connection failed");

        Migrator::up(&connection, None)
            .await
            .expect("schema migration failed");

        tracing::info!("store connected, schema is current");

        Self { connection }
    }

    /// Connect without touching the schema. The migrate subcommand uses
    /// this so `up` stays an explicit operator action.
    pub async fn connect_without_migrations(config: &Config) -> Result<Self, DbErr> {
        Ok(Self {
            connection: SeaDatabase::connect(&config.database_url).await?,
        })
    }

    /// Clone of the underlying connection pool handle.
    pub fn get_connection(&self) -> DatabaseConnection {
        self.connection.clone()
    }

    pub async fn run_migrations(&self) -> Result<(), DbErr> {
        Migrator::up(&self.connection, None).await
    }

    pub async fn rollback_migration(&self) -> Result<(), DbErr> {
        Migrator::down(&self.connection, Some(1)).await
    }

    /// Every known migration paired with whether the store has applied it.
    pub async fn migration_status(&self) -> Result<Vec<(String, bool)>, DbErr> {
        let applied: HashSet<String> = seaql_migrations::Entity::find()
            .order_by_asc(seaql_migrations::Column::Version)
            .all(&self.connection)
            .await?
            .into_iter()
            .map(|row| row.version)
            .collect();

        Ok(Migrator::migrations()
            .iter()
            .map(|m| {
                let name = m.name().to_string();
                let is_applied = applied.contains(&name);
                (name, is_applied)
            })
            .collect())
    }

    /// Drop everything and re-apply the full migration set.
    pub async fn fresh_migrations(&self) -> Result<(), DbErr> {
        Migrator::fresh(&self.connection).await
    }
}
