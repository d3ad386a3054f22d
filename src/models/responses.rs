//! Response DTOs for the demo HTTP server
//!
//! Defines the structure of outgoing JSON bodies.

use serde::Serialize;

use crate::cache::ClientStats;
use crate::config::Config;

/// Response body for the stats endpoint (GET /stats)
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StatsResponse {
    /// Number of cached endpoints
    pub cache_size: usize,
    /// Total failed fetches
    pub errors: u64,
    /// Debug output enabled
    pub debug: bool,
    /// Request timeout in milliseconds
    #[serde(rename = "tempoLimite")]
    pub tempo_limite: u64,
}

impl StatsResponse {
    /// Creates a new StatsResponse from client statistics and configuration
    pub fn new(stats: ClientStats, config: &Config) -> Self {
        Self {
            cache_size: stats.cache_size,
            errors: stats.errors,
            debug: config.debug,
            tempo_limite: config.timeout_ms,
        }
    }
}
