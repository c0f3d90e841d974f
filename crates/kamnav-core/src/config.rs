//! Persisted web-service configuration.
//!
//! The configuration is a flat record of the remote KAM service URL and the
//! request timeout, persisted as TOML in the platform config directory.
//! `load` falls back to defaults when no file exists; `save` fully
//! overwrites prior state. There is no schema versioning.

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Default public KAM web-service endpoint.
pub const DEFAULT_SERVICE_URL: &str = "http://demo.openbel.org/openbel-ws/";

/// Default request timeout in seconds.
pub const DEFAULT_TIMEOUT_SECONDS: u64 = 120;

/// Minimum accepted request timeout in seconds.
pub const MIN_TIMEOUT_SECONDS: u64 = 5;

/// Maximum accepted request timeout in seconds.
pub const MAX_TIMEOUT_SECONDS: u64 = 1800;

/// Config file name under the platform config directory.
const CONFIG_FILE: &str = "config.toml";

/// Directory name under the platform config directory.
const CONFIG_DIR: &str = "kamnav";

// ============================================================================
// Configuration
// ============================================================================

/// Remote service connection settings.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Configuration {
    /// Base URL of the KAM web service.
    pub service_url: String,
    /// Request timeout in seconds, clamped to 5..=1800.
    pub timeout_seconds: u64,
}

impl Default for Configuration {
    fn default() -> Self {
        Self {
            service_url: DEFAULT_SERVICE_URL.to_string(),
            timeout_seconds: DEFAULT_TIMEOUT_SECONDS,
        }
    }
}

impl Configuration {
    /// Creates a configuration with the given URL and timeout.
    ///
    /// The timeout is clamped into the accepted range.
    pub fn new(service_url: impl Into<String>, timeout_seconds: u64) -> Self {
        Self {
            service_url: service_url.into(),
            timeout_seconds: clamp_timeout(timeout_seconds),
        }
    }

    /// Resolve the config file path.
    ///
    /// An explicit override wins; otherwise the platform config directory is
    /// used. Returns `None` only when the platform provides no config
    /// directory.
    pub fn resolve_path(override_path: Option<&str>) -> Option<PathBuf> {
        match override_path {
            Some(p) => Some(PathBuf::from(p)),
            None => dirs::config_dir().map(|d| d.join(CONFIG_DIR).join(CONFIG_FILE)),
        }
    }

    /// Load configuration from the resolved path.
    ///
    /// A missing file yields the defaults. A present but unparseable file is
    /// an error. Timeouts outside the accepted range are clamped on load.
    pub fn load(override_path: Option<&str>) -> Result<Self> {
        let path = Self::resolve_path(override_path)
            .ok_or_else(|| Error::config("Could not determine config directory"))?;
        Self::load_from(&path)
    }

    /// Load configuration from an explicit file path.
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            log::debug!("No config file at {}, using defaults", path.display());
            return Ok(Self::default());
        }

        let content =
            std::fs::read_to_string(path).map_err(|e| Error::io_with_path(e, path))?;
        let mut config: Self = toml::from_str(&content)
            .map_err(|e| Error::parse(format!("Invalid config {}: {e}", path.display())))?;
        config.timeout_seconds = clamp_timeout(config.timeout_seconds);
        Ok(config)
    }

    /// Save configuration to the resolved path, overwriting prior state.
    pub fn save(&self, override_path: Option<&str>) -> Result<()> {
        let path = Self::resolve_path(override_path)
            .ok_or_else(|| Error::config("Could not determine config directory"))?;
        self.save_to(&path)
    }

    /// Save configuration to an explicit file path.
    ///
    /// Parent directories are created as needed. On failure the in-memory
    /// configuration is untouched so the caller can retry.
    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| Error::io_with_path(e, parent))?;
        }

        let mut clamped = self.clone();
        clamped.timeout_seconds = clamp_timeout(clamped.timeout_seconds);

        let toml_str =
            toml::to_string_pretty(&clamped).map_err(|e| Error::config(e.to_string()))?;
        std::fs::write(path, toml_str).map_err(|e| Error::io_with_path(e, path))?;
        log::info!("Saved configuration to {}", path.display());
        Ok(())
    }
}

fn clamp_timeout(seconds: u64) -> u64 {
    seconds.clamp(MIN_TIMEOUT_SECONDS, MAX_TIMEOUT_SECONDS)
}

// ============================================================================
// Tests
// ============================================================================
