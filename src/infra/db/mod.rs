//! Database connection pool and schema management.

use sea_orm::{ConnectOptions, Database as SeaDatabase, DatabaseConnection, DbErr};
use sea_orm_migration::{MigrationStatus, MigratorTrait};

use crate::config::Config;

pub mod migrations;

pub use migrations::Migrator;

/// Pooled connection to the catalogue database.
#[derive(Clone)]
pub struct Database {
    connection: DatabaseConnection,
}

impl Database {
    /// Open the pool and bring the schema up to date.
    pub async fn connect(config: &Config) -> Result<Self, DbErr> {
        let database = Self::connect_without_migrations(config).await?;
        database.run_migrations().await?;

        tracing::info!(
            max_connections = config.database_max_connections,
            "Database connected and migrations applied"
        );

        Ok(database)
    }

    /// Open the pool only; the `migrate` command drives the schema itself.
    pub async fn connect_without_migrations(config: &Config) -> Result<Self, DbErr> {
        let mut options = ConnectOptions::new(config.database_url.clone());
        options
            .max_connections(config.database_max_connections)
            .sqlx_logging(false);

        let connection = SeaDatabase::connect(options).await?;
        Ok(Self { connection })
    }

    /// Clone of the pooled connection handle.
    pub fn get_connection(&self) -> DatabaseConnection {
        self.connection.clone()
    }

    pub async fn run_migrations(&self) -> Result<(), DbErr> {
        Migrator::up(&self.connection, None).await
    }

    /// Roll back the most recent migration.
    pub async fn rollback_migration(&self) -> Result<(), DbErr> {
        Migrator::down(&self.connection, Some(1)).await
    }

    /// Every known migration with whether it has been applied.
    pub async fn migration_status(&self) -> Result<Vec<(String, bool)>, DbErr> {
        Ok(Migrator::get_migration_with_status(&self.connection)
            .await?
            .iter()
            .map(|m| (m.name().to_string(), m.status() == MigrationStatus::Applied))
            .collect())
    }

    /// Drop every table and re-run all migrations.
    pub async fn fresh_migrations(&self) -> Result<(), DbErr> {
        Migrator::fresh(&self.connection).await
    }

    /// Round-trip to the database, used by the health check.
    pub async fn ping(&self) -> Result<(), DbErr> {
        self.connection.ping().await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn memory_config() -> Config {
        let mut config = Config::new("sqlite::memory:", "unit-test-secret-that-is-long-enough");
        config.database_max_connections = 1;
        config
    }

    #[tokio::test]
    async fn test_connect_applies_every_migration() {
        let database = Database::connect(&memory_config()).await.unwrap();
        let status = database.migration_status().await.unwrap();

        assert_eq!(status.len(), 2);
        assert!(status.iter().all(|(_, applied)| *applied));
        assert!(database.ping().await.is_ok());
    }

    #[tokio::test]
    async fn test_rollback_leaves_pending_migration() {
        let database = Database::connect_without_migrations(&memory_config()).await.unwrap();
        database.run_migrations().await.unwrap();
        database.rollback_migration().await.unwrap();

        let status = database.migration_status().await.unwrap();
        assert_eq!(
            status,
            vec![
                ("m20240101_000001_create_users_table".to_string(), true),
                ("m20240101_000002_create_books_table".to_string(), false),
            ]
        );
    }
}
