//! skyslot Configuration Module
//!
//! Settings for the XRPC client.
//! Config is stored in `~/.config/skyslot/config.toml`.
//!
//! ## Priority Order (highest to lowest)
//!
//! 1. CLI flags
//! 2. Environment variables (`SKYSLOT_API_BASE`, `SKYSLOT_TIMEOUT_SECS`, `SKYSLOT_USER_AGENT`)
//! 3. Config file (`~/.config/skyslot/config.toml`)
//! 4. Defaults

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::{Result, SkyslotError};
use crate::util::constants::{FETCH_TIMEOUT, USER_AGENT};

/// Main configuration structure
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct SkyslotConfig {
    /// XRPC base URL; defaults to `https://public.api.<link hostname>`
    pub api_base: Option<String>,

    /// Per-request timeout in seconds
    pub timeout_secs: Option<u64>,

    /// User agent for XRPC requests
    pub user_agent: Option<String>,
}

impl SkyslotConfig {
    /// Get the config directory path
    ///
    /// Returns `~/.config/skyslot/` on Unix, `%APPDATA%/skyslot/` on Windows
    pub fn config_dir() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("skyslot")
    }

    /// Get the config file path
    pub fn config_path() -> PathBuf {
        Self::config_dir().join("config.toml")
    }

    /// Load configuration from the default path
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_path())
    }

    /// Load configuration from a file
    ///
    /// Returns default config if file doesn't exist.
    /// Returns error if file exists but is malformed.
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path).map_err(|e| SkyslotError::ConfigError {
            reason: format!("Failed to read config file: {}", e),
        })?;

        toml::from_str(&content).map_err(|e| SkyslotError::ConfigError {
            reason: format!("Failed to parse config file: {}", e),
        })
    }

    /// Merge with environment variables
    ///
    /// Environment variables take precedence over config file values.
    pub fn with_env(mut self) -> Result<Self> {
        if let Ok(base) = std::env::var("SKYSLOT_API_BASE") {
            if !base.is_empty() {
                self.api_base = Some(base);
            }
        }

        if let Ok(secs) = std::env::var("SKYSLOT_TIMEOUT_SECS") {
            let secs = secs.parse().map_err(|_| SkyslotError::ConfigError {
                reason: format!("SKYSLOT_TIMEOUT_SECS must be a whole number, got '{}'", secs),
            })?;
            self.timeout_secs = Some(secs);
        }

        if let Ok(agent) = std::env::var("SKYSLOT_USER_AGENT") {
            if !agent.is_empty() {
                self.user_agent = Some(agent);
            }
        }

        Ok(self)
    }

    /// Effective request timeout
    pub fn timeout(&self) -> Duration {
        self.timeout_secs
            .map(Duration::from_secs)
            .unwrap_or(FETCH_TIMEOUT)
    }

    /// Effective user agent
    pub fn user_agent(&self) -> &str {
        self.user_agent.as_deref().unwrap_or(USER_AGENT)
    }

    pub fn api_base(&self) -> Option<&str> {
        self.api_base.as_deref()
    }
}
