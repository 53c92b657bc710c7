//! Feature flags configuration.
//!
//! Switches for the optional stages of the inline parser.

use serde::{Deserialize, Serialize};

/// Feature flags configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct FeaturesConfig {
    /// Recognize `![alt](url)` images.
    /// Default: true
    #[serde(default = "default_true")]
    pub images: bool,

    /// Recognize `[text](url)` links.
    /// Default: true
    #[serde(default = "default_true")]
    pub links: bool,
}

impl Default for FeaturesConfig {
    fn default() -> Self {
        Self {
            images: true,
            links: true,
        }
    }
}

impl FeaturesConfig {
    /// Apply the keys set in `other`; unset keys keep their current value.
    pub fn merge(&mut self, other: &FeaturesOverride) {
        if let Some(images) = other.images {
            self.images = images;
        }
        if let Some(links) = other.links {
            self.links = links;
        }
    }
}

/// Partial `[features]` table from an override.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct FeaturesOverride {
    pub images: Option<bool>,
    pub links: Option<bool>,
}

/// Output configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct OutputConfig {
    /// Write a newline after each rendered document.
    /// Default: true
    #[serde(default = "default_true")]
    pub trailing_newline: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            trailing_newline: true,
        }
    }
}

impl OutputConfig {
    /// Apply the keys set in `other`.
    pub fn merge(&mut self, other: &OutputOverride) {
        if let Some(trailing_newline) = other.trailing_newline {
            self.trailing_newline = trailing_newline;
        }
    }
}

/// Partial `[output]` table from an override.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct OutputOverride {
    pub trailing_newline: Option<bool>,
}

fn default_true() -> bool {
    true
}
