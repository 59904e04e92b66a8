//! Database connection helpers.
//!
//! Deployment connects through [`connect`] with pool sizing taken from
//! [`DatabaseConfig`]; tests use [`memory`] for an isolated in-memory SQLite
//! database per connection.

use std::time::Duration;

use sea_orm::{ConnectOptions, Database, DatabaseConnection, DbErr};

use crate::config::DatabaseConfig;

/// Connect using the configured URL and pool limits.
pub async fn connect(config: &DatabaseConfig) -> Result<DatabaseConnection, DbErr> {
    let mut options = ConnectOptions::new(config.url.clone());
    options
        .max_connections(config.max_connections)
        .min_connections(config.min_connections)
        .connect_timeout(Duration::from_secs(config.connect_timeout))
        .sqlx_logging(config.sqlx_logging);

    Database::connect(options).await
}

/// Connect to a fresh in-memory SQLite database.
///
/// Every call returns an independent database; dropping the connection
/// discards all data. The schema still has to be applied by the caller,
/// usually through the migrator.
pub async fn memory() -> Result<DatabaseConnection, DbErr> {
    // A single connection keeps every query in one SQLite memory instance;
    // additional pool connections would each see an empty database.
    let mut options = ConnectOptions::new("sqlite::memory:");
    options.max_connections(1).sqlx_logging(false);

    Database::connect(options).await
}
