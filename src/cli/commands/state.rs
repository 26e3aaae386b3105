use crate::config::AppConfig;
use crate::database::{models::State, service};

pub async fn handle(config: AppConfig, state_id: i64, state_name: String, population: i64) -> anyhow::Result<()> {
    let pool = super::open_pool(&config).await?;
    let state = State {
        state_id,
        state_name,
        population,
    };
    service::upsert_state(&pool, &state).await?;
    pool.close().await;

    println!("State {} ({}) saved", state.state_id, state.state_name);
    Ok(())
}
