use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use sqlx::SqlitePool;
use std::str::FromStr;
use std::time::Duration;
use thiserror::Error;
use tracing::info;

use crate::config::DatabaseConfig;

/// Errors from DatabaseManager and the query service
#[derive(Debug, Error)]
pub enum DatabaseError {
    #[error("Invalid database URL: {0}")]
    InvalidDatabaseUrl(String),

    #[error("Failed to open database {url}: {source}")]
    ConnectionError {
        url: String,
        #[source]
        source: sqlx::Error,
    },

    #[error(transparent)]
    Sqlx(#[from] sqlx::Error),
}

/// Tables for the portal dataset. `district_id` uses AUTOINCREMENT so ids of
/// deleted districts are never handed out again.
const SCHEMA: &[&str] = &[
    "CREATE TABLE IF NOT EXISTS user (
        username TEXT PRIMARY KEY,
        password TEXT NOT NULL
    )",
    "CREATE TABLE IF NOT EXISTS state (
        state_id INTEGER PRIMARY KEY,
        state_name TEXT NOT NULL,
        population INTEGER NOT NULL
    )",
    "CREATE TABLE IF NOT EXISTS district (
        district_id INTEGER PRIMARY KEY AUTOINCREMENT,
        district_name TEXT NOT NULL,
        state_id INTEGER NOT NULL REFERENCES state(state_id),
        cases INTEGER NOT NULL,
        cured INTEGER NOT NULL,
        active INTEGER NOT NULL,
        deaths INTEGER NOT NULL
    )",
    "CREATE INDEX IF NOT EXISTS district_state_id ON district(state_id)",
];

/// Owns connection setup for the single SQLite database behind the service
pub struct DatabaseManager;

impl DatabaseManager {
    /// Open the pool and make sure the schema exists.
    pub async fn connect(config: &DatabaseConfig) -> Result<SqlitePool, DatabaseError> {
        let options = SqliteConnectOptions::from_str(&config.url)
            .map_err(|_| DatabaseError::InvalidDatabaseUrl(config.url.clone()))?
            .create_if_missing(config.create_if_missing)
            // District.state_id is trusted, not enforced
            .foreign_keys(false);

        let pool = SqlitePoolOptions::new()
            .max_connections(config.max_connections)
            .acquire_timeout(Duration::from_secs(config.acquire_timeout_secs))
            .connect_with(options)
            .await
            .map_err(|source| DatabaseError::ConnectionError {
                url: config.url.clone(),
                source,
            })?;

        Self::init_schema(&pool).await?;

        info!("Opened database pool for: {}", config.url);
        Ok(pool)
    }

    pub async fn init_schema(pool: &SqlitePool) -> Result<(), DatabaseError> {
        for statement in SCHEMA {
            sqlx::query(statement).execute(pool).await?;
        }
        Ok(())
    }

    /// Pings the pool to ensure connectivity
    pub async fn health_check(pool: &SqlitePool) -> Result<(), DatabaseError> {
        sqlx::query("SELECT 1").execute(pool).await?;
        Ok(())
    }
}
