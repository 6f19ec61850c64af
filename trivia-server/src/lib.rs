//! trivia-server: HTTP API for the trivia question bank
//!
//! Exposes question listing, search, creation, deletion and quiz play
//! over JSON, backed by PostgreSQL or the in-memory store.

pub mod db;
pub mod http;

pub use http::{build_router, cors_layer, run_server, ApiError, AppState, ServerConfig, ServerError, TriviaStore};
