//! Mock XRPC client for testing
//!
//! Returns canned JSON per method and records every request URL, so tests can
//! check what was asked and in which order.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use serde_json::Value;
use url::Url;

use crate::error::{Result, SkyslotError};

use super::client::XrpcClient;

/// Mock client keyed by method name
#[derive(Debug, Clone, Default)]
pub struct MockXrpcClient {
    responses: Arc<Mutex<HashMap<String, Value>>>,
    requests: Arc<Mutex<Vec<Url>>>,
}

impl MockXrpcClient {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder: answer `nsid` with `body`
    pub fn with_response(self, nsid: &str, body: Value) -> Self {
        self.set_response(nsid, body);
        self
    }

    pub fn set_response(&self, nsid: &str, body: Value) {
        self.responses
            .lock()
            .unwrap()
            .insert(nsid.to_string(), body);
    }

    /// All requested URLs, oldest first
    pub fn requests(&self) -> Vec<Url> {
        self.requests.lock().unwrap().clone()
    }
}

#[async_trait]
impl XrpcClient for MockXrpcClient {
    async fn get_json(&self, nsid: &str, url: Url) -> Result<Value> {
        self.requests.lock().unwrap().push(url);
        self.responses
            .lock()
            .unwrap()
            .get(nsid)
            .cloned()
            .ok_or_else(|| SkyslotError::RemoteFetch {
                endpoint: nsid.to_string(),
                reason: "HTTP 404 Not Found".to_string(),
            })
    }
}
