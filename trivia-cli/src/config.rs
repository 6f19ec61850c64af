//! Optional TOML configuration file
//!
//! Looked up at `~/.trivia/config.toml` unless `--config` is given.
//! Command-line flags and environment variables take precedence.
//!
//! ```toml
//! [server]
//! bind = "0.0.0.0:5000"
//! cors_origins = ["http://localhost:3000"]
//!
//! [database]
//! url = "postgres://localhost:5432/trivia"
//! max_connections = 5
//! ```

use std::fs;
use std::net::SocketAddr;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::Deserialize;

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct TriviaConfig {
    pub server: ServerSection,
    pub database: DatabaseSection,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct ServerSection {
    pub bind: Option<SocketAddr>,
    pub cors_origins: Vec<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct DatabaseSection {
    pub url: Option<String>,
    pub max_connections: Option<u32>,
}

impl TriviaConfig {
    /// Default config file path: ~/.trivia/config.toml
    pub fn config_path() -> PathBuf {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".trivia")
            .join("config.toml")
    }

    /// Load from `path`, or the default location when `None`.
    ///
    /// A missing default file is not an error; an explicit path must exist.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::load_from(path),
            None => {
                let default_path = Self::config_path();
                if default_path.exists() {
                    Self::load_from(&default_path)
                } else {
                    Ok(Self::default())
                }
            }
        }
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        let config: Self = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file (invalid TOML): {}", path.display()))?;

        tracing::debug!(path = %path.display(), "config loaded");
        Ok(config)
    }
}
