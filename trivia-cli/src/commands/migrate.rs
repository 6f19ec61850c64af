//! Schema migration command

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use trivia_server::db::{create_pool, migrations};

use crate::config::TriviaConfig;

#[derive(Parser, Debug)]
pub struct MigrateArgs {
    /// Database URL (overrides config file)
    #[arg(long, env = "DATABASE_URL")]
    pub database_url: Option<String>,

    /// Config file (default: ~/.trivia/config.toml)
    #[arg(long)]
    pub config: Option<PathBuf>,
}

/// Create tables and seed default categories
pub async fn run_migrate(args: MigrateArgs) -> Result<()> {
    let file = TriviaConfig::load(args.config.as_deref())?;
    let database_url = args
        .database_url
        .or(file.database.url)
        .context("DATABASE_URL not set. Set via --database-url, DATABASE_URL env, .env, or ~/.trivia/config.toml")?;

    let pool = create_pool(&database_url)
        .await
        .context("Failed to create database pool")?;

    migrations::run(&pool)
        .await
        .context("Migration failed")?;

    println!("Database schema is up to date");
    Ok(())
}
