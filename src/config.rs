//! Service configuration loaded from environment variables.
//!
//! Follows 12-factor style: all settings come from environment variables
//! (or a `.env` file via `dotenvy`).

use std::net::SocketAddr;
use std::path::PathBuf;
use std::time::Duration;

use crate::error::PageError;

/// Output format of the tracing subscriber.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogFormat {
    /// Human-readable lines.
    #[default]
    Text,
    /// One JSON object per event.
    Json,
}

impl LogFormat {
    /// Parses `"json"` (case-insensitive) as [`LogFormat::Json`]; anything
    /// else is [`LogFormat::Text`].
    #[must_use]
    pub fn parse(value: Option<&str>) -> Self {
        match value {
            Some(v) if v.eq_ignore_ascii_case("json") => Self::Json,
            _ => Self::Text,
        }
    }
}

/// Top-level service configuration.
///
/// Loaded once at startup via [`PageConfig::from_env`].
#[derive(Debug, Clone)]
pub struct PageConfig {
    /// Socket address to bind the HTTP server to (e.g. `0.0.0.0:3000`).
    pub listen_addr: SocketAddr,

    /// Apex domain named in the page copy (e.g. `o-d.dev`).
    pub site_name: String,

    /// Path of the domain list JSON file.
    pub domains_path: PathBuf,

    /// Path of the fun-fact list JSON file.
    pub fun_facts_path: PathBuf,

    /// Path of the loading-message list JSON file.
    pub loading_messages_path: PathBuf,

    /// Per-request timeout in seconds.
    pub request_timeout_secs: u64,

    /// Log output format.
    pub log_format: LogFormat,
}

impl PageConfig {
    /// Loads configuration from environment variables.
    ///
    /// Falls back to sensible defaults when a variable is not set.
    /// Calls `dotenvy::dotenv().ok()` to optionally load a `.env` file.
    ///
    /// # Errors
    ///
    /// Returns [`PageError::InvalidConfig`] if `LISTEN_ADDR` is set but
    /// cannot be parsed as a [`SocketAddr`].
    pub fn from_env() -> Result<Self, PageError> {
        dotenvy::dotenv().ok();

        let raw_addr =
            std::env::var("LISTEN_ADDR").unwrap_or_else(|_| "0.0.0.0:3000".to_string());
        let listen_addr: SocketAddr = raw_addr
            .parse()
            .map_err(|e| PageError::InvalidConfig(format!("LISTEN_ADDR {raw_addr:?}: {e}")))?;

        let site_name = std::env::var("SITE_NAME").unwrap_or_else(|_| "o-d.dev".to_string());

        let domains_path = env_path("DOMAINS_PATH", "data/domains.json");
        let fun_facts_path = env_path("FUN_FACTS_PATH", "data/funFacts.json");
        let loading_messages_path = env_path("LOADING_MESSAGES_PATH", "data/loadingMessages.json");

        let request_timeout_secs = parse_env("REQUEST_TIMEOUT_SECS", 10);
        let log_format = LogFormat::parse(std::env::var("LOG_FORMAT").ok().as_deref());

        Ok(Self {
            listen_addr,
            site_name,
            domains_path,
            fun_facts_path,
            loading_messages_path,
            request_timeout_secs,
            log_format,
        })
    }

    /// Per-request timeout as a [`Duration`].
    #[must_use]
    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }
}

/// Reads a path from the environment, falling back to `default`.
fn env_path(key: &str, default: &str) -> PathBuf {
    std::env::var_os(key).map_or_else(|| PathBuf::from(default), PathBuf::from)
}

/// Parses an environment variable as `T`, returning `default` on missing
/// or invalid values.
fn parse_env<T: std::str::FromStr>(key: &str, default: T) -> T {
    parse_or(std::env::var(key).ok().as_deref(), default)
}

fn parse_or<T: std::str::FromStr>(value: Option<&str>, default: T) -> T {
    value.and_then(|v| v.parse().ok()).unwrap_or(default)
}
