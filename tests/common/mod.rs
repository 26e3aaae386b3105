#![allow(dead_code)]

use anyhow::{Context, Result};
use serde_json::{json, Value};
use sqlx::SqlitePool;
use tempfile::TempDir;
use tokio::net::TcpListener;

use covid19_portal_api::auth::hash_password;
use covid19_portal_api::config::AppConfig;
use covid19_portal_api::database::{models::State, service, DatabaseManager};
use covid19_portal_api::server::{self, AppState};

pub const USERNAME: &str = "christopher_phillips";
pub const PASSWORD: &str = "christy@123";

pub struct TestServer {
    pub base_url: String,
    pub pool: SqlitePool,
    _dir: TempDir,
}

impl TestServer {
    /// Start the real router on an ephemeral port over a fresh SQLite file
    pub async fn spawn() -> Result<Self> {
        let dir = tempfile::tempdir().context("failed to create temp dir")?;

        let mut config = AppConfig::development();
        config.database.url = format!("sqlite://{}", dir.path().join("portal.db").display());
        config.security.jwt_secret = "integration-test-secret".to_string();
        config.security.bcrypt_cost = 4;

        let pool = DatabaseManager::connect(&config.database).await?;
        seed(&pool, config.security.bcrypt_cost).await?;

        let listener = TcpListener::bind("127.0.0.1:0").await?;
        let base_url = format!("http://{}", listener.local_addr()?);

        let state = AppState::new(pool.clone(), config);
        tokio::spawn(async move {
            let _ = server::serve(listener, state).await;
        });

        Ok(Self {
            base_url,
            pool,
            _dir: dir,
        })
    }

    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Log in as the seeded user and return the bearer token
    pub async fn token(&self) -> Result<String> {
        let res = reqwest::Client::new()
            .post(self.url("/login"))
            .json(&json!({ "username": USERNAME, "password": PASSWORD }))
            .send()
            .await?;
        anyhow::ensure!(res.status().is_success(), "login failed with {}", res.status());

        let body = res.json::<Value>().await?;
        body["jwtToken"]
            .as_str()
            .map(str::to_string)
            .context("jwtToken missing from login response")
    }
}

async fn seed(pool: &SqlitePool, bcrypt_cost: u32) -> Result<()> {
    let hash = hash_password(PASSWORD.to_string(), bcrypt_cost).await?;
    service::upsert_user(pool, USERNAME, &hash).await?;

    let states = [
        (1, "Andaman and Nicobar Islands", 380581),
        (2, "Andhra Pradesh", 49577103),
        (8, "Karnataka", 61095297),
    ];
    for (state_id, state_name, population) in states {
        let state = State {
            state_id,
            state_name: state_name.to_string(),
            population,
        };
        service::upsert_state(pool, &state).await?;
    }

    Ok(())
}
