//! SourceLink - the post URL a host element is anchored to
//!
//! `https://bsky.app/profile/alice.test/post/abc123` derives
//! hostname `bsky.app`, username `alice.test`, postId `abc123`.
//!
//! Shape is not validated: a link without a `profile` segment simply has no
//! username, and the fetches carry `undefined` instead.

use url::Url;

use crate::error::{Result, SkyslotError};

/// Fields derived from a source link
///
/// These override same-named keys of the fetched post when merged.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LinkFields {
    pub url: String,
    pub hostname: Option<String>,
    pub username: Option<String>,
    pub post_id: Option<String>,
}

/// Parsed, immutable source link
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceLink {
    href: Url,
}

impl SourceLink {
    /// Parse an absolute URL
    pub fn parse(href: &str) -> Result<Self> {
        let href = Url::parse(href.trim()).map_err(|e| SkyslotError::InvalidLink {
            href: href.to_string(),
            reason: e.to_string(),
        })?;
        Ok(Self { href })
    }

    /// Normalized href
    pub fn href(&self) -> &str {
        self.href.as_str()
    }

    pub fn hostname(&self) -> Option<&str> {
        self.href.host_str()
    }

    /// Segment following the first `profile` segment
    pub fn username(&self) -> Option<&str> {
        let segments = self.segments();
        let at = segments.iter().position(|s| *s == "profile")?;
        segments.get(at + 1).copied()
    }

    /// Final non-empty path segment
    pub fn post_id(&self) -> Option<&str> {
        self.segments().last().copied()
    }

    pub fn fields(&self) -> LinkFields {
        LinkFields {
            url: self.href().to_string(),
            hostname: self.hostname().map(str::to_string),
            username: self.username().map(str::to_string),
            post_id: self.post_id().map(str::to_string),
        }
    }

    fn segments(&self) -> Vec<&str> {
        self.href
            .path_segments()
            .map(|segments| segments.filter(|s| !s.is_empty()).collect())
            .unwrap_or_default()
    }
}
