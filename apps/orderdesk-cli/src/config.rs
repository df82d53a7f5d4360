//! # Configuration
//!
//! ## Configuration Sources
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Configuration Priority                               │
//! │                                                                         │
//! │  1. Command-line flags (highest priority, applied by main)             │
//! │     --threshold 5                                                      │
//! │                                                                         │
//! │  2. Environment Variables                                              │
//! │     ORDERDESK_TAX_BASIS=gross_subtotal                                 │
//! │     ORDERDESK_TAX_RATE_BPS=825                                         │
//! │     ORDERDESK_LOW_STOCK_THRESHOLD=5                                    │
//! │     ORDERDESK_LOG_FILTER=debug                                         │
//! │                                                                         │
//! │  3. TOML Config File                                                   │
//! │     --config PATH, or the platform config dir:                         │
//! │     ~/.config/orderdesk/orderdesk.toml (Linux)                         │
//! │                                                                         │
//! │  4. Default Values (lowest priority)                                   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Loading runs before the tracing subscriber exists, so nothing here logs.
//! Every bad value is an error; [`OrderdeskConfig::source`] records where
//! the settings came from for the caller to report.
//!
//! ## Configuration File Format
//! ```toml
//! [pricing]
//! vip_discount_bps = 1500
//! regular_discount_bps = 1000
//! regular_discount_min_cents = 10000
//! bulk_discount_bps = 500
//! bulk_min_quantity = 10
//! tax_rate_bps = 800
//! tax_base = "discounted_subtotal"  # discounted_subtotal | gross_subtotal
//! low_stock_threshold = 10
//!
//! [logging]
//! filter = "info,orderdesk=debug"
//! ```

use orderdesk_core::{PricingPolicy, Rate, TaxBase};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::error::{CliError, CliResult};

pub const ENV_TAX_BASIS: &str = "ORDERDESK_TAX_BASIS";
pub const ENV_TAX_RATE_BPS: &str = "ORDERDESK_TAX_RATE_BPS";
pub const ENV_LOW_STOCK_THRESHOLD: &str = "ORDERDESK_LOW_STOCK_THRESHOLD";
pub const ENV_LOG_FILTER: &str = "ORDERDESK_LOG_FILTER";

// =============================================================================
// Logging Settings
// =============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoggingSettings {
    /// `EnvFilter` directive used when `RUST_LOG` is unset.
    #[serde(default = "default_log_filter")]
    pub filter: String,
}

fn default_log_filter() -> String {
    "info,orderdesk=debug".to_string()
}

impl Default for LoggingSettings {
    fn default() -> Self {
        LoggingSettings {
            filter: default_log_filter(),
        }
    }
}

// =============================================================================
// Main Configuration
// =============================================================================

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderdeskConfig {
    #[serde(default)]
    pub pricing: PricingPolicy,

    #[serde(default)]
    pub logging: LoggingSettings,

    /// File the settings were read from, if any.
    #[serde(skip)]
    pub source: Option<PathBuf>,
}

impl OrderdeskConfig {
    /// Loads configuration from file, environment, and defaults.
    ///
    /// ## Load Order (later overrides earlier)
    /// 1. Default values
    /// 2. Config file (explicit path, else platform config dir if present)
    /// 3. Environment variables
    ///
    /// An explicit path that does not exist is an error; a missing default
    /// file is not.
    pub fn load(config_path: Option<&Path>) -> CliResult<Self> {
        let mut config = match config_path {
            Some(path) => Self::from_file(path)?,
            None => match Self::default_config_path() {
                Some(path) if path.exists() => Self::from_file(&path)?,
                _ => Self::default(),
            },
        };

        config.apply_overrides(|key| std::env::var(key).ok())?;
        config.validate()?;

        Ok(config)
    }

    /// Parses a TOML config file.
    pub fn from_file(path: &Path) -> CliResult<Self> {
        let contents = std::fs::read_to_string(path)?;
        let mut config: Self = toml::from_str(&contents)?;
        config.source = Some(path.to_path_buf());
        Ok(config)
    }

    /// Validates the configuration.
    pub fn validate(&self) -> CliResult<()> {
        if self.logging.filter.trim().is_empty() {
            return Err(CliError::InvalidConfig(
                "logging.filter must not be empty".into(),
            ));
        }

        self.pricing.validate()?;
        Ok(())
    }

    /// Applies overrides looked up by environment variable name.
    pub fn apply_overrides<F>(&mut self, lookup: F) -> CliResult<()>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(basis) = lookup(ENV_TAX_BASIS) {
            self.pricing.tax_base = basis.parse::<TaxBase>()?;
        }

        if let Some(bps) = lookup(ENV_TAX_RATE_BPS) {
            let bps = bps.trim().parse::<u32>().map_err(|_| {
                CliError::InvalidConfig(format!("{} must be an integer, got '{}'", ENV_TAX_RATE_BPS, bps))
            })?;
            self.pricing.tax_rate = Rate::from_bps(bps);
        }

        if let Some(threshold) = lookup(ENV_LOW_STOCK_THRESHOLD) {
            self.pricing.low_stock_threshold = threshold.trim().parse::<i64>().map_err(|_| {
                CliError::InvalidConfig(format!(
                    "{} must be an integer, got '{}'",
                    ENV_LOW_STOCK_THRESHOLD, threshold
                ))
            })?;
        }

        if let Some(filter) = lookup(ENV_LOG_FILTER) {
            self.logging.filter = filter;
        }

        Ok(())
    }

    /// Returns the default config file path.
    pub fn default_config_path() -> Option<PathBuf> {
        directories::ProjectDirs::from("com", "orderdesk", "orderdesk")
            .map(|dirs| dirs.config_dir().join("orderdesk.toml"))
    }
}
