use anyhow::{Context, Result};
use dotenvy::dotenv;
use std::env;

/// Application configuration loaded from environment variables
#[derive(Debug, Clone)]
pub struct Config {
    pub newsapi_key: String,
    pub newsapi_base_url: String,
    pub newsapi_timeout_secs: u64,
    pub port: u16,
    /// Empty means any origin is allowed
    pub allowed_origins: Vec<String>,
    pub request_timeout_secs: u64,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        // Load .env file if present (development)
        let _ = dotenv();

        Ok(Self {
            newsapi_key: env::var("NEWSAPI_KEY")
                .context("NEWSAPI_KEY must be set")?,
            newsapi_base_url: env::var("NEWSAPI_BASE_URL")
                .unwrap_or_else(|_| newsapi_client::DEFAULT_BASE_URL.to_string()),
            newsapi_timeout_secs: env::var("NEWSAPI_TIMEOUT_SECS")
                .unwrap_or_else(|_| "15".to_string())
                .parse()
                .context("NEWSAPI_TIMEOUT_SECS must be a valid number")?,
            port: env::var("PORT")
                .unwrap_or_else(|_| "8000".to_string())
                .parse()
                .context("PORT must be a valid number")?,
            allowed_origins: parse_origins(&env::var("ALLOWED_ORIGINS").unwrap_or_default()),
            request_timeout_secs: env::var("REQUEST_TIMEOUT_SECS")
                .unwrap_or_else(|_| "30".to_string())
                .parse()
                .context("REQUEST_TIMEOUT_SECS must be a valid number")?,
        })
    }
}

/// Comma-separated origin list. `*` or an empty value means any origin.
fn parse_origins(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty() && s != "*")
        .collect()
}
