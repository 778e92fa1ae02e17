//! XRPC transport
//!
//! The acquirer builds full request URLs; the client only performs the GET
//! and hands back the JSON body.

use async_trait::async_trait;
use serde_json::Value;
use tracing::{debug, instrument};
use url::Url;

use crate::config::SkyslotConfig;
use crate::error::{Result, SkyslotError};
use crate::util::{CONNECT_TIMEOUT, REDIRECT_LIMIT};

/// Transport for XRPC queries
///
/// Implementations:
/// - [`HttpXrpcClient`]: reqwest over the network
/// - [`MockXrpcClient`](super::MockXrpcClient): canned responses for tests
#[async_trait]
pub trait XrpcClient: Send + Sync {
    /// GET `url` and parse the body as JSON
    ///
    /// `nsid` is the method name (`app.bsky.actor.getProfile`), used for
    /// routing in mocks and for error messages.
    async fn get_json(&self, nsid: &str, url: Url) -> Result<Value>;
}

/// reqwest-backed client with a shared connection pool
#[derive(Debug, Clone)]
pub struct HttpXrpcClient {
    http_client: reqwest::Client,
}

impl HttpXrpcClient {
    /// Build a client with timeouts and user agent from config
    pub fn new(config: &SkyslotConfig) -> Result<Self> {
        let http_client = reqwest::Client::builder()
            .timeout(config.timeout())
            .connect_timeout(CONNECT_TIMEOUT)
            .redirect(reqwest::redirect::Policy::limited(REDIRECT_LIMIT))
            .user_agent(config.user_agent())
            .build()
            .map_err(|e| SkyslotError::ConfigError {
                reason: format!("Failed to build HTTP client: {}", e),
            })?;

        Ok(Self { http_client })
    }
}

#[async_trait]
impl XrpcClient for HttpXrpcClient {
    #[instrument(skip(self, url), fields(url = %url))]
    async fn get_json(&self, nsid: &str, url: Url) -> Result<Value> {
        let response = self
            .http_client
            .get(url)
            .send()
            .await
            .map_err(|e| SkyslotError::RemoteFetch {
                endpoint: nsid.to_string(),
                reason: format!("HTTP request failed: {}", e),
            })?;

        let status = response.status();
        debug!(%status, "XRPC response");
        if !status.is_success() {
            return Err(SkyslotError::RemoteFetch {
                endpoint: nsid.to_string(),
                reason: format!("HTTP {}", status),
            });
        }

        response
            .json::<Value>()
            .await
            .map_err(|e| SkyslotError::InvalidResponse {
                endpoint: nsid.to_string(),
                reason: e.to_string(),
            })
    }
}
