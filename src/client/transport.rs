//! HTTP Transport
//!
//! The network seam of the fetch client: one GET returning status and body.

use async_trait::async_trait;
use reqwest::Client;

use crate::error::Result;

/// Raw upstream answer before JSON parsing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawResponse {
    /// HTTP status code
    pub status: u16,
    /// Response body as text
    pub body: String,
}

impl RawResponse {
    /// Creates a new RawResponse
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }
}

/// Performs a single HTTP GET.
///
/// Implementations return `Ok` for any completed exchange regardless of the
/// status code; status handling belongs to the caller. Bodies of responses
/// with status >= 400 are not read.
#[async_trait]
pub trait Transport: Send + Sync {
    async fn get(&self, url: &str) -> Result<RawResponse>;
}

/// reqwest-backed transport.
///
/// Certificate verification is disabled to match the upstream deployment the
/// demo was written against.
#[derive(Debug, Clone)]
pub struct HttpTransport {
    client: Client,
}

impl HttpTransport {
    /// Builds a client that accepts invalid TLS certificates.
    pub fn new() -> Result<Self> {
        let client = Client::builder()
            .danger_accept_invalid_certs(true)
            .user_agent(concat!("swapi_demo/", env!("CARGO_PKG_VERSION")))
            .build()?;
        Ok(Self { client })
    }

    /// Wraps an existing reqwest client.
    pub fn with_client(client: Client) -> Self {
        Self { client }
    }
}

#[async_trait]
impl Transport for HttpTransport {
    async fn get(&self, url: &str) -> Result<RawResponse> {
        let response = self.client.get(url).send().await?;
        let status = response.status().as_u16();
        if status >= 400 {
            return Ok(RawResponse::new(status, String::new()));
        }
        let body = response.text().await?;
        Ok(RawResponse { status, body })
    }
}
