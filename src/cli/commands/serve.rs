use anyhow::Context;
use tokio::net::TcpListener;

use crate::config::AppConfig;
use crate::server::{self, AppState};

pub async fn handle(config: AppConfig) -> anyhow::Result<()> {
    let pool = super::open_pool(&config).await?;

    let bind_addr = config.bind_addr();
    let listener = TcpListener::bind(&bind_addr)
        .await
        .with_context(|| format!("failed to bind {}", bind_addr))?;

    server::serve(listener, AppState::new(pool, config)).await?;
    Ok(())
}
