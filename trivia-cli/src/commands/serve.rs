//! HTTP server command for the trivia API

use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Parser;
use trivia_core::{MemoryStore, NewQuestion, QuestionStore};
use trivia_server::db::{self, create_pool_with_options, PgStore};
use trivia_server::{run_server, ServerConfig, TriviaStore};

use crate::config::TriviaConfig;

/// Sample questions for `--in-memory` mode: (question, answer, category, difficulty)
const SAMPLE_QUESTIONS: [(&str, &str, i32, i32); 8] = [
    ("What is the heaviest organ in the human body?", "The Liver", 1, 4),
    ("Who discovered penicillin?", "Alexander Fleming", 1, 3),
    ("Which Dutch graphic artist is known for impossible constructions?", "Escher", 2, 1),
    ("La Giaconda is better known as what?", "Mona Lisa", 2, 3),
    ("What is the largest lake in Africa?", "Lake Victoria", 3, 2),
    ("Who invented Peanut Butter?", "George Washington Carver", 4, 2),
    ("What movie earned Tom Hanks his third straight Oscar nomination, in 1996?", "Apollo 13", 5, 4),
    ("Which country won the first ever soccer World Cup in 1930?", "Uruguay", 6, 4),
];

/// Arguments for the serve command
#[derive(Parser, Debug)]
pub struct ServeArgs {
    /// Address to bind to (default: 127.0.0.1:5000)
    #[arg(long, short = 'b', env = "TRIVIA_BIND")]
    pub bind: Option<SocketAddr>,

    /// Restrict CORS to this origin (repeatable; default: any origin)
    #[arg(long = "cors-origin")]
    pub cors_origins: Vec<String>,

    /// Database URL (overrides config file)
    #[arg(long, env = "DATABASE_URL")]
    pub database_url: Option<String>,

    /// Maximum pooled database connections
    #[arg(long)]
    pub max_connections: Option<u32>,

    /// Serve from an in-memory store seeded with sample questions (ignores the database URL)
    #[arg(long)]
    pub in_memory: bool,

    /// Config file (default: ~/.trivia/config.toml)
    #[arg(long)]
    pub config: Option<PathBuf>,
}

/// Run the HTTP server
pub async fn run_serve(args: ServeArgs) -> Result<()> {
    let file = TriviaConfig::load(args.config.as_deref())?;

    let defaults = ServerConfig::default();
    let config = ServerConfig {
        bind_addr: args.bind.or(file.server.bind).unwrap_or(defaults.bind_addr),
        allowed_origins: if args.cors_origins.is_empty() {
            file.server.cors_origins
        } else {
            args.cors_origins
        },
    };

    let store: Arc<dyn TriviaStore> = if args.in_memory {
        tracing::warn!("Using in-memory store - data is lost on shutdown");
        Arc::new(sample_store().await?)
    } else {
        let database_url = args
            .database_url
            .or(file.database.url)
            .context("DATABASE_URL not set. Set via --database-url, DATABASE_URL env, .env, or ~/.trivia/config.toml")?;
        let max_connections = args
            .max_connections
            .or(file.database.max_connections)
            .unwrap_or(db::pool::DEFAULT_MAX_CONNECTIONS);

        let pool = create_pool_with_options(&database_url, max_connections)
            .await
            .context("Failed to create database pool")?;
        Arc::new(PgStore::new(pool))
    };

    tracing::info!("Starting trivia server on {}", config.bind_addr);

    // Run server (blocks until shutdown)
    run_server(store, config).await.context("Server error")?;

    Ok(())
}

async fn sample_store() -> Result<MemoryStore> {
    let store = MemoryStore::with_default_categories();
    for (question, answer, category, difficulty) in SAMPLE_QUESTIONS {
        let new = NewQuestion::new(question, answer, category, difficulty)?;
        store.insert(new).await?;
    }
    tracing::info!(count = SAMPLE_QUESTIONS.len(), "Seeded sample questions");
    Ok(store)
}

#[cfg(test)]
mod tests {
    use super::*;
    use trivia_core::QuestionFilter;

    #[tokio::test]
    async fn sample_store_is_populated() {
        let store = sample_store().await.unwrap();
        let all = store.find(&QuestionFilter::all()).await.unwrap();
        assert_eq!(all.len(), SAMPLE_QUESTIONS.len());

        // Every sample question points at a default category
        assert!(all.iter().all(|q| (1..=6).contains(&q.category)));
    }
}
