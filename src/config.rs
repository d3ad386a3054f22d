//! Configuration Module
//!
//! Builds the startup configuration from command-line flags and the `PORT`
//! environment variable. The resulting `Config` is read-only and passed
//! explicitly to the client and the server.

use std::env;
use std::time::Duration;

use clap::Parser;

use crate::error::ConfigError;

/// Default request timeout in milliseconds
pub const DEFAULT_TIMEOUT_MS: u64 = 5000;

/// Default listening port when `PORT` is not set
pub const DEFAULT_PORT: u16 = 3003;

/// Default upstream base URL
pub const DEFAULT_BASE_URL: &str = "https://swapi.dev/api/";

/// Star Wars API demo - fetch, cache and summarize SWAPI data
#[derive(Parser, Debug)]
#[command(name = "swapi_demo")]
#[command(about = "Fetches Star Wars API data, caches it and serves a small demo page")]
#[command(version)]
pub struct Cli {
    /// Disable debug output (cache hits, fetch notices, run statistics)
    #[arg(long = "no-debug")]
    pub no_debug: bool,

    /// Request timeout in milliseconds
    #[arg(
        long = "tempoLimite",
        value_name = "MS",
        default_value_t = DEFAULT_TIMEOUT_MS,
        value_parser = clap::value_parser!(u64).range(1..)
    )]
    pub tempo_limite: u64,

    /// Character id used by report runs
    #[arg(long, value_name = "ID", default_value_t = 1)]
    pub character_id: u32,

    /// Upstream API base URL
    #[arg(long, value_name = "URL", default_value = DEFAULT_BASE_URL)]
    pub base_url: String,

    /// Run the report once, print it and exit instead of serving HTTP
    #[arg(long)]
    pub once: bool,
}

/// Startup configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Debug output enabled
    pub debug: bool,
    /// Request timeout in milliseconds
    pub timeout_ms: u64,
    /// Character id used by report runs
    pub character_id: u32,
    /// Upstream base URL, always ending with `/`
    pub base_url: String,
    /// HTTP server port
    pub server_port: u16,
    /// Run a single report and exit
    pub once: bool,
}

impl Config {
    /// Creates a Config from parsed CLI flags and the process environment.
    ///
    /// # Environment Variables
    /// - `PORT` - HTTP server port (default: 3003)
    pub fn from_cli(cli: &Cli) -> Result<Self, ConfigError> {
        Self::from_parts(cli, env::var("PORT").ok())
    }

    /// Creates a Config from parsed CLI flags and an explicit `PORT` value.
    pub fn from_parts(cli: &Cli, port: Option<String>) -> Result<Self, ConfigError> {
        // An empty PORT falls back to the default like an unset one
        let server_port = match port.filter(|raw| !raw.trim().is_empty()) {
            Some(raw) => raw
                .trim()
                .parse()
                .map_err(|_| ConfigError::InvalidPort(raw.clone()))?,
            None => DEFAULT_PORT,
        };

        Ok(Self {
            debug: !cli.no_debug,
            timeout_ms: cli.tempo_limite,
            character_id: cli.character_id,
            base_url: normalize_base_url(&cli.base_url)?,
            server_port,
            once: cli.once,
        })
    }

    /// Request timeout as a Duration.
    pub fn timeout(&self) -> Duration {
        Duration::from_millis(self.timeout_ms)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            debug: true,
            timeout_ms: DEFAULT_TIMEOUT_MS,
            character_id: 1,
            base_url: DEFAULT_BASE_URL.to_string(),
            server_port: DEFAULT_PORT,
            once: false,
        }
    }
}

/// Checks the scheme and makes sure the URL ends with a slash so endpoints
/// can be appended verbatim.
fn normalize_base_url(raw: &str) -> Result<String, ConfigError> {
    let trimmed = raw.trim();
    if !(trimmed.starts_with("https://") || trimmed.starts_with("http://")) {
        return Err(ConfigError::InvalidBaseUrl(raw.to_string()));
    }
    if trimmed.ends_with('/') {
        Ok(trimmed.to_string())
    } else {
        Ok(format!("{}/", trimmed))
    }
}
