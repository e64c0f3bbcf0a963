//! Analytics configuration
//!
//! Config is loaded with a two-layer resolution:
//! 1. Check for an override file (explicit path, or
//!    ~/.local/share/smartspend/config/analytics.toml)
//! 2. Fall back to embedded defaults (compiled into binary)
//!
//! `SMARTSPEND_MAX_UPLOAD_MB` overrides the upload limit from either layer.

use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use tracing::debug;

use crate::error::{Error, Result};

/// Embedded default config (compiled into binary)
const DEFAULT_CONFIG: &str = include_str!("../../../config/analytics.toml");

/// Environment variable overriding `max_upload_mb`
pub const MAX_UPLOAD_ENV: &str = "SMARTSPEND_MAX_UPLOAD_MB";

/// Tunables for the analytics engine and the import boundary
#[derive(Debug, Clone, PartialEq)]
pub struct AnalyticsConfig {
    /// Trailing window (rows) for the rolling average
    pub rolling_window: usize,
    /// Standard deviations above the mean before an amount is unusual
    pub anomaly_sigma: f64,
    /// Prefix for money values in insight sentences
    pub currency_symbol: String,
    /// Largest accepted CSV, in megabytes
    pub max_upload_mb: u64,
}

impl Default for AnalyticsConfig {
    fn default() -> Self {
        Self {
            rolling_window: 4,
            anomaly_sigma: 2.0,
            currency_symbol: "R".to_string(),
            max_upload_mb: 8,
        }
    }
}

impl AnalyticsConfig {
    /// Load from the default override location, falling back to embedded defaults
    pub fn load() -> Result<Self> {
        Self::load_from(None)
    }

    /// Load with an optional explicit override path
    ///
    /// A path that does not exist falls back to the embedded defaults, the
    /// same as a missing default override file.
    pub fn load_from(override_path: Option<&Path>) -> Result<Self> {
        let path = override_path
            .map(Path::to_path_buf)
            .or_else(default_config_path)
            .filter(|p| p.exists());

        let content = match path {
            Some(ref p) => {
                debug!("Loading analytics config from {}", p.display());
                fs::read_to_string(p)
                    .map_err(|e| Error::Config(format!("Failed to read config: {}", e)))?
            }
            None => DEFAULT_CONFIG.to_string(),
        };

        let mut config = parse_config(&content)?;
        apply_env_overrides(&mut config, std::env::var(MAX_UPLOAD_ENV).ok().as_deref())?;
        Ok(config)
    }

    /// Upload limit in bytes
    pub fn max_upload_bytes(&self) -> u64 {
        self.max_upload_mb.saturating_mul(1024 * 1024)
    }

    /// Rolling window, never below one row
    pub fn effective_rolling_window(&self) -> usize {
        self.rolling_window.max(1)
    }
}

/// Default config override path
pub fn default_config_path() -> Option<PathBuf> {
    dirs::data_local_dir().map(|d| d.join("smartspend").join("config").join("analytics.toml"))
}

/// Raw config structure for TOML parsing
#[derive(Debug, Deserialize)]
struct RawConfig {
    analysis: Option<RawAnalysis>,
    display: Option<RawDisplay>,
    import: Option<RawImport>,
}

#[derive(Debug, Deserialize)]
struct RawAnalysis {
    rolling_window: Option<usize>,
    anomaly_sigma: Option<f64>,
}

#[derive(Debug, Deserialize)]
struct RawDisplay {
    currency_symbol: Option<String>,
}

#[derive(Debug, Deserialize)]
struct RawImport {
    max_upload_mb: Option<u64>,
}

/// Parse config from TOML content, layering it over the defaults
fn parse_config(content: &str) -> Result<AnalyticsConfig> {
    let raw: RawConfig = toml::from_str(content)
        .map_err(|e| Error::Config(format!("Invalid config TOML: {}", e)))?;

    let mut config = AnalyticsConfig::default();

    if let Some(analysis) = raw.analysis {
        if let Some(window) = analysis.rolling_window {
            config.rolling_window = window;
        }
        if let Some(sigma) = analysis.anomaly_sigma {
            if !sigma.is_finite() || sigma < 0.0 {
                return Err(Error::Config(format!(
                    "anomaly_sigma must be a non-negative number, got {}",
                    sigma
                )));
            }
            config.anomaly_sigma = sigma;
        }
    }

    if let Some(display) = raw.display {
        if let Some(symbol) = display.currency_symbol {
            config.currency_symbol = symbol;
        }
    }

    if let Some(import) = raw.import {
        if let Some(mb) = import.max_upload_mb {
            config.max_upload_mb = mb;
        }
    }

    Ok(config)
}

fn apply_env_overrides(config: &mut AnalyticsConfig, max_upload: Option<&str>) -> Result<()> {
    if let Some(value) = max_upload {
        config.max_upload_mb = value.trim().parse().map_err(|_| {
            Error::Config(format!("{} must be a whole number, got {:?}", MAX_UPLOAD_ENV, value))
        })?;
    }
    Ok(())
}
