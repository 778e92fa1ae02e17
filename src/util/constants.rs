//! Centralized constants for skyslot runtime configuration
//!
//! All timeout, limit and marker values in one place for easy tuning.

use std::time::Duration;

// ═══════════════════════════════════════════════════════════════
// HTTP Client Limits
// ═══════════════════════════════════════════════════════════════

/// Timeout for each XRPC request
pub const FETCH_TIMEOUT: Duration = Duration::from_secs(30);

/// Timeout for establishing HTTP connections
pub const CONNECT_TIMEOUT: Duration = Duration::from_secs(10);

/// Maximum number of HTTP redirects to follow
pub const REDIRECT_LIMIT: usize = 5;

/// User agent sent with XRPC requests
pub const USER_AGENT: &str = concat!("skyslot/", env!("CARGO_PKG_VERSION"));

// ═══════════════════════════════════════════════════════════════
// Template Markers
// ═══════════════════════════════════════════════════════════════

/// Attribute holding a slot's comma-separated path expressions
pub const SLOT_ATTRIBUTE: &str = "data-key";

/// Attribute declaring a slot's write role (image, link, text)
pub const ROLE_ATTRIBUTE: &str = "data-role";

/// The one path whose value is written as rich content (line breaks kept)
pub const BODY_TEXT_PATH: &str = "record.text";

/// Placeholder for absent values, in rendered text and in request parameters
pub const UNDEFINED: &str = "undefined";

// ═══════════════════════════════════════════════════════════════
// Tests
// ═══════════════════════════════════════════════════════════════
