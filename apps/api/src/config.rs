use std::path::PathBuf;

use anyhow::{Context, Result};

/// Application configuration loaded from environment variables.
/// Startup fails if required variables are missing.
#[derive(Debug, Clone)]
pub struct Config {
    pub dgis_api_key: String,
    pub gemini_api_key: String,
    /// Root directory for the CSV tables and the search-context markers.
    pub data_dir: PathBuf,
    /// Upper bound on in-flight description requests.
    pub generation_concurrency: usize,
    pub port: u16,
    pub rust_log: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            dgis_api_key: require_env("DGIS_API_KEY")?,
            gemini_api_key: require_env("GEMINI_API_KEY")?,
            data_dir: std::env::var("DATA_DIR")
                .map(PathBuf::from)
                .unwrap_or_else(|_| PathBuf::from("data")),
            generation_concurrency: std::env::var("GENERATION_CONCURRENCY")
                .unwrap_or_else(|_| "5".to_string())
                .parse::<usize>()
                .context("GENERATION_CONCURRENCY must be a positive integer")?
                .max(1),
            port: std::env::var("PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
        })
    }
}

fn require_env(key: &str) -> Result<String> {
    std::env::var(key).with_context(|| format!("Required environment variable '{key}' is not set"))
}
