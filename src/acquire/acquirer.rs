//! DataAcquirer - two dependent XRPC calls into one BoundRecord
//!
//! ```text
//! SourceLink ──► getProfile?actor=<username> ──► did
//!                                                 │
//!            getPosts?uris=at://<did>/app.bsky.feed.post/<postId>
//!                                                 │
//!                         posts[0] + link fields ─┴─► BoundRecord
//! ```
//!
//! The calls are sequential: the posts URI needs the profile's `did`.

use std::sync::Arc;

use serde_json::Value;
use tracing::{debug, instrument, warn};
use url::Url;

use crate::error::{Result, SkyslotError};
use crate::util::UNDEFINED;

use super::client::XrpcClient;
use super::link::SourceLink;
use super::record::BoundRecord;

pub const GET_PROFILE: &str = "app.bsky.actor.getProfile";
pub const GET_POSTS: &str = "app.bsky.feed.getPosts";
pub const POST_COLLECTION: &str = "app.bsky.feed.post";

/// `at://<did>/app.bsky.feed.post/<post_id>`
pub fn post_uri(did: &str, post_id: &str) -> String {
    format!("at://{did}/{POST_COLLECTION}/{post_id}")
}

/// Fetches and merges the record for one source link
#[derive(Clone)]
pub struct DataAcquirer {
    client: Arc<dyn XrpcClient>,
    /// Overrides `https://public.api.<hostname>` when set
    api_base: Option<String>,
}

impl DataAcquirer {
    pub fn new(client: Arc<dyn XrpcClient>) -> Self {
        Self {
            client,
            api_base: None,
        }
    }

    /// Builder: fixed XRPC base URL
    pub fn with_api_base(mut self, api_base: Option<impl Into<String>>) -> Self {
        self.api_base = api_base.map(Into::into);
        self
    }

    /// Base URL for a link: configured, or `https://public.api.<hostname>`
    pub fn api_base_for(&self, link: &SourceLink) -> String {
        match &self.api_base {
            Some(base) => base.trim_end_matches('/').to_string(),
            None => format!("https://public.api.{}", link.hostname().unwrap_or(UNDEFINED)),
        }
    }

    /// Fetch profile then post, and merge with the link fields
    #[instrument(skip(self, link), fields(href = %link.href()))]
    pub async fn acquire(&self, link: &SourceLink) -> Result<BoundRecord> {
        let fields = link.fields();
        let base = self.api_base_for(link);

        let username = fields.username.as_deref().unwrap_or_else(|| {
            warn!("link has no profile segment, requesting actor 'undefined'");
            UNDEFINED
        });
        let profile_url = xrpc_url(&base, GET_PROFILE, &[("actor", username)])?;
        let profile = self.client.get_json(GET_PROFILE, profile_url).await?;

        let did = profile.get("did").and_then(Value::as_str).unwrap_or_else(|| {
            warn!("profile response has no did");
            UNDEFINED
        });
        debug!(did, "resolved actor");

        let post_id = fields.post_id.as_deref().unwrap_or_else(|| {
            warn!("link has no trailing post id");
            UNDEFINED
        });
        let uri = post_uri(did, post_id);
        let posts_url = xrpc_url(&base, GET_POSTS, &[("uris", uri.as_str())])?;
        let posts = self.client.get_json(GET_POSTS, posts_url).await?;

        let post = first_post(posts)?;
        if post.is_none() {
            debug!(%uri, "posts collection is empty");
        }

        Ok(BoundRecord::merge(post, &fields))
    }
}

fn xrpc_url(base: &str, nsid: &str, query: &[(&str, &str)]) -> Result<Url> {
    let mut url = Url::parse(&format!("{base}/xrpc/{nsid}")).map_err(|e| {
        SkyslotError::ConfigError {
            reason: format!("Invalid XRPC base URL '{}': {}", base, e),
        }
    })?;
    url.query_pairs_mut().extend_pairs(query);
    Ok(url)
}

fn first_post(mut body: Value) -> Result<Option<Value>> {
    match body.get_mut("posts") {
        Some(Value::Array(posts)) if posts.is_empty() => Ok(None),
        Some(Value::Array(posts)) => Ok(Some(posts.swap_remove(0))),
        _ => Err(SkyslotError::InvalidResponse {
            endpoint: GET_POSTS.to_string(),
            reason: "missing 'posts' array".to_string(),
        }),
    }
}
