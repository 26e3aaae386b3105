use crate::config::AppConfig;

pub async fn handle(config: AppConfig) -> anyhow::Result<()> {
    // Connecting bootstraps the schema
    let pool = super::open_pool(&config).await?;
    pool.close().await;

    println!("Database ready at {}", config.database.url);
    Ok(())
}
