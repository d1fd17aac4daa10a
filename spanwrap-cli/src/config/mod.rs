//! Configuration module

use crate::error::CliError;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use spanwrap_core::api::defaults;
use spanwrap_core::{Config, ConfigBuilder};
use std::fs;
use std::path::Path;

/// CLI configuration structure
#[derive(Debug, Deserialize, Serialize, Default, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct CliConfig {
    /// Segmenter configuration
    #[serde(default)]
    pub segmenter: SegmenterConfig,

    /// Output configuration
    #[serde(default)]
    pub output: OutputConfig,
}

/// Segmenter-related configuration
#[derive(Debug, Deserialize, Serialize, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct SegmenterConfig {
    /// Separator text (literal unless `regex` is set)
    pub separator: String,

    /// Treat the separator as a regular expression
    pub regex: bool,

    /// Wrapper tag name
    pub tag: String,

    /// Forced line-break marker
    pub line_break_marker: String,
}

impl Default for SegmenterConfig {
    fn default() -> Self {
        Self {
            separator: defaults::SEPARATOR.to_string(),
            regex: false,
            tag: defaults::TAG.to_string(),
            line_break_marker: defaults::LINE_BREAK_MARKER.to_string(),
        }
    }
}

/// Output-related configuration
#[derive(Debug, Deserialize, Serialize, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct OutputConfig {
    /// Default output format
    pub default_format: String,

    /// Pretty print JSON output
    pub pretty_json: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            default_format: "text".to_string(),
            pretty_json: true,
        }
    }
}

impl CliConfig {
    /// Load a configuration file
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        Self::from_toml(&content)
            .with_context(|| format!("Failed to load config file: {}", path.display()))
    }

    /// Parse configuration from TOML text
    pub fn from_toml(content: &str) -> Result<Self> {
        toml::from_str(content).map_err(|e| CliError::ConfigError(e.to_string()).into())
    }

    /// Render the configuration as TOML
    pub fn to_toml(&self) -> Result<String> {
        toml::to_string_pretty(self).context("Failed to serialize configuration")
    }

    /// Builder preloaded with the `[segmenter]` settings
    pub fn segmenter_builder(&self) -> ConfigBuilder {
        let segmenter = &self.segmenter;
        Config::builder()
            .separator(segmenter.separator.as_str())
            .regex(segmenter.regex)
            .tag(segmenter.tag.as_str())
            .line_break_marker(segmenter.line_break_marker.as_str())
    }

    /// Build the segmenter configuration
    pub fn segmenter_config(&self) -> Result<Config> {
        build_config(self.segmenter_builder())
    }
}

/// Build a segmenter configuration, reporting failures as CLI errors
pub fn build_config(builder: ConfigBuilder) -> Result<Config> {
    builder.build().map_err(|e| CliError::from(e).into())
}
