// src/config.rs

use std::env;

const DEFAULT_DATABASE_URL: &str = "sqlite:///tmp/test.db";
const DEFAULT_PORT: u16 = 3000;
const DEFAULT_MAX_CONNECTIONS: u32 = 5;

#[derive(Debug, Clone)]
pub struct Config {
    pub database_url: String,
    pub port: u16,
    pub db_max_connections: u32,
    pub rust_log: String,
}

impl Config {
    /// Reads configuration from the environment. `main` loads `.env` first.
    ///
    /// Every setting has a default, so a bare `cargo run` serves on port 3000
    /// against a SQLite file under `/tmp`.
    pub fn from_env() -> Self {
        let database_url = env::var("DATABASE_URL")
            .unwrap_or_else(|_| DEFAULT_DATABASE_URL.to_string());

        let port = env::var("PORT")
            .ok()
            .and_then(|p| p.parse().ok())
            .unwrap_or(DEFAULT_PORT);

        let db_max_connections = env::var("DB_MAX_CONNECTIONS")
            .ok()
            .and_then(|n| n.parse().ok())
            .unwrap_or(DEFAULT_MAX_CONNECTIONS);

        let rust_log = env::var("RUST_LOG")
            .unwrap_or_else(|_| "info".to_string());

        Self {
            database_url,
            port,
            db_max_connections,
            rust_log,
        }
    }
}
