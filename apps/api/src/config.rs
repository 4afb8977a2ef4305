use std::path::PathBuf;

use anyhow::{Context, Result};

const DEFAULT_CORS_ORIGINS: &str = "http://localhost:3000,http://localhost:5173";
const DEFAULT_MAX_UPLOAD_BYTES: usize = 10 * 1024 * 1024;

/// Application configuration loaded from environment variables.
/// Every variable is optional; malformed values fail startup.
#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub rust_log: String,
    /// Empty means permissive CORS (`CORS_ORIGINS=*`).
    pub cors_origins: Vec<String>,
    /// JSON file replacing the built-in mock catalog.
    pub catalog_path: Option<PathBuf>,
    /// Fixes the mock randomness (confidence scores, phone numbers).
    pub rng_seed: Option<u64>,
    pub max_upload_bytes: usize,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            port: 8000,
            rust_log: "info".to_string(),
            cors_origins: parse_origins(DEFAULT_CORS_ORIGINS),
            catalog_path: None,
            rng_seed: None,
            max_upload_bytes: DEFAULT_MAX_UPLOAD_BYTES,
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        let defaults = Config::default();

        Ok(Config {
            port: std::env::var("PORT")
                .unwrap_or_else(|_| defaults.port.to_string())
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: std::env::var("RUST_LOG").unwrap_or(defaults.rust_log),
            cors_origins: std::env::var("CORS_ORIGINS")
                .map(|raw| parse_origins(&raw))
                .unwrap_or(defaults.cors_origins),
            catalog_path: std::env::var_os("CATALOG_PATH").map(PathBuf::from),
            rng_seed: optional_parsed("RNG_SEED")?,
            max_upload_bytes: optional_parsed("MAX_UPLOAD_BYTES")?
                .unwrap_or(defaults.max_upload_bytes),
        })
    }
}

fn optional_parsed<T>(key: &str) -> Result<Option<T>>
where
    T: std::str::FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match std::env::var(key) {
        Ok(raw) => raw
            .trim()
            .parse::<T>()
            .map(Some)
            .with_context(|| format!("Environment variable '{key}' has an invalid value '{raw}'")),
        Err(_) => Ok(None),
    }
}

/// Splits a comma-separated origin list. `*` yields an empty list (permissive).
pub fn parse_origins(raw: &str) -> Vec<String> {
    if raw.trim() == "*" {
        return Vec::new();
    }
    raw.split(',')
        .map(str::trim)
        .filter(|origin| !origin.is_empty())
        .map(String::from)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_origins_are_local_frontends() {
        let config = Config::default();
        assert_eq!(
            config.cors_origins,
            vec!["http://localhost:3000", "http://localhost:5173"]
        );
        assert_eq!(config.port, 8000);
    }

    #[test]
    fn test_wildcard_origins_is_permissive() {
        assert!(parse_origins("*").is_empty());
        assert!(parse_origins("  * ").is_empty());
    }

    #[test]
    fn test_origins_trimmed_and_blank_entries_dropped() {
        let origins = parse_origins(" https://a.example , ,https://b.example,");
        assert_eq!(origins, vec!["https://a.example", "https://b.example"]);
    }
}
