pub mod commands;

use clap::{Parser, Subcommand};

use crate::config::AppConfig;

#[derive(Parser)]
#[command(name = "covid19-portal-api")]
#[command(about = "COVID-19 India portal API server and data seeding tools")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    #[command(about = "Run the HTTP server (default)")]
    Serve,

    #[command(about = "Create the database schema and exit")]
    InitDb,

    #[command(about = "Create a login user or reset its password")]
    AddUser {
        #[arg(help = "Username")]
        username: String,
        #[arg(help = "Plain-text password, stored as a bcrypt hash")]
        password: String,
    },

    #[command(about = "Create or replace a state row")]
    AddState {
        #[arg(help = "State id")]
        state_id: i64,
        #[arg(help = "State name")]
        state_name: String,
        #[arg(help = "Population")]
        population: i64,
    },
}

pub async fn run(cli: Cli, config: AppConfig) -> anyhow::Result<()> {
    config.validate()?;

    match cli.command.unwrap_or(Commands::Serve) {
        Commands::Serve => commands::serve::handle(config).await,
        Commands::InitDb => commands::init::handle(config).await,
        Commands::AddUser { username, password } => commands::user::handle(config, username, password).await,
        Commands::AddState {
            state_id,
            state_name,
            population,
        } => commands::state::handle(config, state_id, state_name, population).await,
    }
}
