use anyhow::{Context, Result};

/// Application configuration loaded from environment variables.
/// Everything has a sensible default; nothing here is secret.
#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub rust_log: String,
    /// Template used when a preview request names none.
    pub default_template: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            port: std::env::var("PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
            default_template: std::env::var("DEFAULT_TEMPLATE")
                .unwrap_or_else(|_| "harvard".to_string()),
        })
    }
}
