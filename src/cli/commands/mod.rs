pub mod init;
pub mod serve;
pub mod state;
pub mod user;

use anyhow::Context;
use sqlx::SqlitePool;

use crate::config::AppConfig;
use crate::database::DatabaseManager;

/// Open the configured database; failures are reported as `DB Error: ...`.
async fn open_pool(config: &AppConfig) -> anyhow::Result<SqlitePool> {
    DatabaseManager::connect(&config.database).await.context("DB Error")
}
