//! Sitedown Config
//!
//! This crate handles configuration loading and management
//! for sitedown, supporting TOML configuration files.
//!
//! # Overview
//!
//! Configuration is loaded from platform-specific locations:
//! - Linux: `~/.config/sitedown/config.toml`
//! - macOS: `~/Library/Application Support/sitedown/config.toml`
//! - Windows: `%APPDATA%\sitedown\config.toml`
//!
//! # Example
//!
//! ```no_run
//! use sitedown_config::Config;
//!
//! // Load config with defaults
//! let config = Config::load().unwrap();
//!
//! // Or load with an override file
//! let config = Config::load_with_override(Some("./custom.toml")).unwrap();
//! ```

mod features;

pub use features::{FeaturesConfig, FeaturesOverride, OutputConfig, OutputOverride};

use serde::{Deserialize, Serialize};
use sitedown_core::{Result, SitedownError};
use std::path::{Path, PathBuf};

/// Default TOML configuration string.
const DEFAULT_TOML: &str = r#"[features]
Images = true
Links  = true

[output]
TrailingNewline = true
"#;

/// Main configuration structure.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Inline feature flags
    #[serde(default)]
    pub features: FeaturesConfig,

    /// Output settings
    #[serde(default)]
    pub output: OutputConfig,
}

/// Settings layered over a loaded [`Config`].
///
/// Only the keys present in the override source are set, so a partial
/// override leaves every other value alone.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConfigOverride {
    #[serde(default)]
    pub features: FeaturesOverride,

    #[serde(default)]
    pub output: OutputOverride,
}

impl ConfigOverride {
    /// Parse an override from a TOML string.
    pub fn parse(toml_str: &str) -> Result<Self> {
        toml::from_str(toml_str)
            .map_err(|e| SitedownError::Config(format!("Override parse error: {}", e)))
    }

    /// Load an override from a TOML file.
    pub fn load_from(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        toml::from_str(&content)
            .map_err(|e| SitedownError::Config(format!("Parse error in {}: {}", path.display(), e)))
    }
}

impl Default for Config {
    fn default() -> Self {
        // Parse the default TOML so the string stays the single source of defaults
        toml::from_str(DEFAULT_TOML).expect("Default TOML should be valid")
    }
}

impl Config {
    /// Returns the default TOML configuration string.
    ///
    /// # Example
    ///
    /// ```
    /// use sitedown_config::Config;
    /// let toml = Config::default_toml();
    /// assert!(toml.contains("[features]"));
    /// assert!(toml.contains("[output]"));
    /// ```
    pub fn default_toml() -> &'static str {
        DEFAULT_TOML
    }

    /// Returns the platform-specific configuration file path.
    pub fn config_path() -> Option<PathBuf> {
        directories::ProjectDirs::from("", "", "sitedown")
            .map(|dirs| dirs.config_dir().join("config.toml"))
    }

    /// Load configuration from the default platform-specific path.
    ///
    /// If no config file exists, returns the default configuration.
    pub fn load() -> Result<Self> {
        if let Some(config_path) = Self::config_path() {
            if config_path.exists() {
                return Self::load_from(&config_path);
            }
        }

        Ok(Self::default())
    }

    /// Load configuration from a specific path.
    pub fn load_from(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        toml::from_str(&content)
            .map_err(|e| SitedownError::Config(format!("Parse error in {}: {}", path.display(), e)))
    }

    /// Load configuration with an optional override.
    ///
    /// The override is a path to a TOML file when such a file exists,
    /// and inline TOML otherwise.
    pub fn load_with_override(override_config: Option<&str>) -> Result<Self> {
        let mut config = Self::load()?;

        if let Some(override_str) = override_config {
            let override_path = Path::new(override_str);
            let override_config = if override_path.exists() {
                ConfigOverride::load_from(override_path)?
            } else {
                ConfigOverride::parse(override_str)?
            };
            config.merge(&override_config);
        }

        Ok(config)
    }

    /// Parse configuration from a TOML string.
    pub fn parse(toml_str: &str) -> Result<Self> {
        toml::from_str(toml_str)
            .map_err(|e| SitedownError::Config(format!("Config parse error: {}", e)))
    }

    /// Merge an override into this config.
    ///
    /// Keys set in `other` take precedence; keys it leaves out keep the
    /// value already in `self`.
    ///
    /// # Example
    ///
    /// ```
    /// use sitedown_config::{Config, ConfigOverride};
    ///
    /// let mut base = Config::default();
    /// let override_config = ConfigOverride::parse("[features]\nLinks = false").unwrap();
    ///
    /// base.merge(&override_config);
    /// assert!(!base.features.links);
    /// assert!(base.features.images);
    /// ```
    pub fn merge(&mut self, other: &ConfigOverride) {
        self.features.merge(&other.features);
        self.output.merge(&other.output);
    }

    /// Inline parser switches as `(process_links, process_images)`.
    pub fn inline_settings(&self) -> (bool, bool) {
        (self.features.links, self.features.images)
    }
}
