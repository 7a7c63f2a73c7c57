use std::time::Duration;

use anyhow::{Context, Result};

const DEFAULT_CACHE_TTL_SECS: u64 = 300;
const DEFAULT_STATUS_CHECK_TIMEOUT_SECS: u64 = 10;

/// Application configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    pub backend_base_url: String,
    /// Maximum age of a cached profile before the next read refetches.
    pub cache_ttl: Duration,
    /// Upper bound on each navigation-gate status check.
    pub status_check_timeout: Duration,
    pub rust_log: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            backend_base_url: require_env("BACKEND_BASE_URL")?,
            cache_ttl: Duration::from_secs(env_u64("CACHE_TTL_SECS", DEFAULT_CACHE_TTL_SECS)?),
            status_check_timeout: Duration::from_secs(env_u64(
                "STATUS_CHECK_TIMEOUT_SECS",
                DEFAULT_STATUS_CHECK_TIMEOUT_SECS,
            )?),
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
        })
    }
}

fn require_env(key: &str) -> Result<String> {
    std::env::var(key).with_context(|| format!("Required environment variable '{key}' is not set"))
}

fn env_u64(key: &str, default: u64) -> Result<u64> {
    match std::env::var(key) {
        Ok(raw) => raw
            .parse::<u64>()
            .with_context(|| format!("'{key}' must be a non-negative integer, got '{raw}'")),
        Err(_) => Ok(default),
    }
}
