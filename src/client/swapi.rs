//! SWAPI Fetch Client
//!
//! Cached, timeout-bounded GET of upstream endpoints.

use std::sync::Arc;
use std::time::Duration;

use serde_json::Value;
use tokio::sync::RwLock;
use tracing::{debug, warn};

use crate::cache::{ClientStats, ResponseCache};
use crate::client::transport::{HttpTransport, Transport};
use crate::config::Config;
use crate::error::{FetchError, Result};

/// Fetch client shared by the report driver and the HTTP handlers.
///
/// Cloning is cheap; clones share the same cache and error counter.
#[derive(Clone)]
pub struct SwapiClient {
    /// Upstream base URL, ends with `/`
    base_url: String,
    /// Per-request timeout
    timeout: Duration,
    /// Log cache hits and successful fetches
    debug: bool,
    /// Network seam
    transport: Arc<dyn Transport>,
    /// Cache plus error counter, shared between clones
    cache: Arc<RwLock<ResponseCache>>,
}

impl SwapiClient {
    /// Creates a client over the given transport.
    pub fn new(config: &Config, transport: Arc<dyn Transport>) -> Self {
        Self {
            base_url: config.base_url.clone(),
            timeout: config.timeout(),
            debug: config.debug,
            transport,
            cache: Arc::new(RwLock::new(ResponseCache::new())),
        }
    }

    /// Creates a client backed by the real HTTP transport.
    pub fn from_config(config: &Config) -> Result<Self> {
        let transport = HttpTransport::new()?;
        Ok(Self::new(config, Arc::new(transport)))
    }

    /// Returns the payload for `endpoint`, from cache when available.
    ///
    /// A cached endpoint never triggers a network call. Any failure
    /// (timeout, status >= 400, transport, parse) increments the error
    /// counter once and is returned to the caller.
    pub async fn fetch(&self, endpoint: &str) -> Result<Value> {
        if let Some(entry) = self.cache.read().await.get(endpoint) {
            if self.debug {
                debug!("Using cached data for {} (age {}ms)", endpoint, entry.age_ms());
            }
            return Ok(entry.value.clone());
        }

        match self.fetch_remote(endpoint).await {
            Ok(value) => {
                let mut cache = self.cache.write().await;
                let value = cache.insert(endpoint.to_string(), value).value.clone();
                if self.debug {
                    debug!("Fetched {} successfully", endpoint);
                    debug!("Cache size: {}", cache.len());
                }
                Ok(value)
            }
            Err(err) => {
                self.cache.write().await.record_error();
                warn!("Fetch of {} failed: {}", endpoint, err);
                Err(err)
            }
        }
    }

    /// Current cache size and error count.
    pub async fn get_stats(&self) -> ClientStats {
        self.cache.read().await.stats()
    }

    /// Full URL for an endpoint.
    pub fn url_for(&self, endpoint: &str) -> String {
        format!("{}{}", self.base_url, endpoint)
    }

    /// Network path: GET with timeout, status check, JSON parse.
    async fn fetch_remote(&self, endpoint: &str) -> Result<Value> {
        let url = self.url_for(endpoint);

        // Dropping the future on timeout aborts the in-flight request
        let raw = tokio::time::timeout(self.timeout, self.transport.get(&url))
            .await
            .map_err(|_| FetchError::Timeout(endpoint.to_string()))??;

        if raw.status >= 400 {
            return Err(FetchError::HttpStatus(raw.status));
        }

        Ok(serde_json::from_str(&raw.body)?)
    }
}

impl std::fmt::Debug for SwapiClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SwapiClient")
            .field("base_url", &self.base_url)
            .field("timeout", &self.timeout)
            .field("debug", &self.debug)
            .finish_non_exhaustive()
    }
}
