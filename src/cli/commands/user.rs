use crate::auth::hash_password;
use crate::config::AppConfig;
use crate::database::service;

pub async fn handle(config: AppConfig, username: String, password: String) -> anyhow::Result<()> {
    if username.trim().is_empty() {
        anyhow::bail!("username cannot be empty");
    }

    let pool = super::open_pool(&config).await?;
    let hash = hash_password(password, config.security.bcrypt_cost).await?;
    service::upsert_user(&pool, &username, &hash).await?;
    pool.close().await;

    println!("User '{}' saved", username);
    Ok(())
}
