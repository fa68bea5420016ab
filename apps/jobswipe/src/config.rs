use anyhow::{Context, Result};
use std::str::FromStr;
use std::time::Duration;

pub const DEFAULT_JSEARCH_HOST: &str = "jsearch.p.rapidapi.com";
pub const DEFAULT_JSEARCH_BASE_URL: &str = "https://jsearch.p.rapidapi.com";

/// Application configuration loaded from environment variables.
/// Nothing is strictly required: without an API key every fetch degrades to demo data.
#[derive(Debug, Clone)]
pub struct Config {
    pub jsearch_api_key: Option<String>,
    pub jsearch_api_host: String,
    pub jsearch_base_url: String,
    pub job_fetch_timeout: Duration,
    pub apply_delay: Duration,
    pub confirm_notice: Duration,
    pub port: u16,
    pub rust_log: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            jsearch_api_key: std::env::var("JSEARCH_API_KEY")
                .ok()
                .filter(|k| !k.trim().is_empty()),
            jsearch_api_host: std::env::var("JSEARCH_API_HOST")
                .unwrap_or_else(|_| DEFAULT_JSEARCH_HOST.to_string()),
            jsearch_base_url: std::env::var("JSEARCH_BASE_URL")
                .unwrap_or_else(|_| DEFAULT_JSEARCH_BASE_URL.to_string()),
            job_fetch_timeout: Duration::from_secs(parse_env("JOB_FETCH_TIMEOUT_SECS", 30)?),
            apply_delay: Duration::from_millis(parse_env("APPLY_DELAY_MS", 1000)?),
            confirm_notice: Duration::from_millis(parse_env("CONFIRM_NOTICE_MS", 2000)?),
            port: parse_env("PORT", 8080)?,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
        })
    }
}

fn parse_env<T>(key: &str, default: T) -> Result<T>
where
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match std::env::var(key) {
        Ok(raw) => parse_value(key, &raw),
        Err(_) => Ok(default),
    }
}

fn parse_value<T>(key: &str, raw: &str) -> Result<T>
where
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    raw.trim()
        .parse::<T>()
        .with_context(|| format!("{key} must be a valid number, got '{raw}'"))
}
