//! Error types with fix suggestions
//!
//! Error code ranges:
//! - SKY-000-009: Template errors
//! - SKY-010-019: Source link errors
//! - SKY-020-029: Remote fetch errors
//! - SKY-030-039: Lifecycle errors
//! - SKY-040-049: Config/IO errors
//!
//! Path misses and empty post collections are not errors: they render as
//! `undefined` text.

use thiserror::Error;

pub type Result<T> = std::result::Result<T, SkyslotError>;

/// Trait for errors that provide fix suggestions
pub trait FixSuggestion {
    fn fix_suggestion(&self) -> Option<&str>;
}

#[derive(Error, Debug)]
pub enum SkyslotError {
    // ═══════════════════════════════════════════
    // TEMPLATE ERRORS (000-009)
    // ═══════════════════════════════════════════
    #[error("[SKY-001] Template '{id}' is not registered")]
    TemplateNotFound { id: String },

    #[error("[SKY-002] Failed to parse template file '{path}': {details}")]
    TemplateParse { path: String, details: String },

    #[error("[SKY-003] Invalid template id '{id}': {reason}")]
    InvalidTemplateId { id: String, reason: String },

    // ═══════════════════════════════════════════
    // SOURCE LINK ERRORS (010-019)
    // ═══════════════════════════════════════════
    #[error("[SKY-010] Host element <{tag}> has no embedded link")]
    MissingLink { tag: String },

    #[error("[SKY-011] Invalid source link '{href}': {reason}")]
    InvalidLink { href: String, reason: String },

    // ═══════════════════════════════════════════
    // REMOTE FETCH ERRORS (020-029)
    // ═══════════════════════════════════════════
    #[error("[SKY-020] Request to {endpoint} failed: {reason}")]
    RemoteFetch { endpoint: String, reason: String },

    #[error("[SKY-021] Invalid response from {endpoint}: {reason}")]
    InvalidResponse { endpoint: String, reason: String },

    // ═══════════════════════════════════════════
    // LIFECYCLE ERRORS (030-039)
    // ═══════════════════════════════════════════
    #[error("[SKY-030] <{tag}> is already mounted")]
    AlreadyMounted { tag: String },

    // ═══════════════════════════════════════════
    // CONFIG / IO ERRORS (040-049)
    // ═══════════════════════════════════════════
    #[error("[SKY-040] Configuration error: {reason}")]
    ConfigError { reason: String },

    #[error("[SKY-041] IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("[SKY-042] JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl FixSuggestion for SkyslotError {
    fn fix_suggestion(&self) -> Option<&str> {
        match self {
            SkyslotError::TemplateNotFound { .. } => {
                Some("Register the template id, or drop the template attribute to use '<tag>-template'")
            }
            SkyslotError::TemplateParse { .. } => {
                Some("Check YAML syntax: each template needs an id and a list of nodes")
            }
            SkyslotError::InvalidTemplateId { .. } => {
                Some("Use lowercase letters, digits and dashes, e.g. 'compact-post-template'")
            }
            SkyslotError::MissingLink { .. } => {
                Some("Embed an <a href=\"https://bsky.app/profile/<user>/post/<id>\"> in the host")
            }
            SkyslotError::InvalidLink { .. } => Some("Use an absolute URL including the scheme"),
            SkyslotError::RemoteFetch { .. } => {
                Some("Check network access and the api_base setting")
            }
            SkyslotError::InvalidResponse { .. } => {
                Some("Verify the api_base points at an XRPC AppView")
            }
            SkyslotError::AlreadyMounted { .. } => Some("Create a new PostEmbed per render"),
            SkyslotError::ConfigError { .. } => {
                Some("Check ~/.config/skyslot/config.toml and SKYSLOT_* environment variables")
            }
            SkyslotError::Io(_) => Some("Check file path and permissions"),
            SkyslotError::Json(_) => Some("Ensure the input is valid JSON (try parsing with jq)"),
        }
    }
}
