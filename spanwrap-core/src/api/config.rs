//! Configuration API for text segmentation

use crate::api::Error;
use crate::domain::SeparatorSpec;

/// Default configuration constants
pub mod defaults {
    /// Separator used when none is given
    pub const SEPARATOR: &str = " ";

    /// Inline tag wrapped around each segment
    pub const TAG: &str = "span";

    /// Forced line-break marker in content
    pub const LINE_BREAK_MARKER: &str = crate::domain::LINE_BREAK_MARKER;
}

/// Segmentation configuration
#[derive(Debug, Clone)]
pub struct Config {
    pub(crate) separator: SeparatorSpec,
    pub(crate) tag: String,
    pub(crate) line_break_marker: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            separator: SeparatorSpec::literal(defaults::SEPARATOR),
            tag: defaults::TAG.to_string(),
            line_break_marker: defaults::LINE_BREAK_MARKER.to_string(),
        }
    }
}

impl Config {
    /// Create a configuration builder
    pub fn builder() -> ConfigBuilder {
        ConfigBuilder::default()
    }

    /// Configuration splitting on `separator` with every other setting at
    /// its default
    pub fn with_separator(separator: impl Into<SeparatorSpec>) -> Self {
        Self {
            separator: separator.into(),
            ..Self::default()
        }
    }

    pub fn separator(&self) -> &SeparatorSpec {
        &self.separator
    }

    pub fn tag(&self) -> &str {
        &self.tag
    }

    pub fn line_break_marker(&self) -> &str {
        &self.line_break_marker
    }

    /// Validate the configuration
    pub(crate) fn validate(&self) -> Result<(), Error> {
        let mut chars = self.tag.chars();
        let tag_ok = chars.next().is_some_and(|ch| ch.is_ascii_alphabetic())
            && chars.all(|ch| ch.is_ascii_alphanumeric() || ch == '-');
        if !tag_ok {
            return Err(Error::Configuration(format!(
                "tag must be a plain element name, got {:?}",
                self.tag
            )));
        }

        if self.line_break_marker.is_empty() {
            return Err(Error::Configuration(
                "line_break_marker must not be empty".into(),
            ));
        }

        Ok(())
    }
}

/// Fluent builder for configuration
#[derive(Debug, Default)]
pub struct ConfigBuilder {
    separator: Option<String>,
    regex: bool,
    tag: Option<String>,
    line_break_marker: Option<String>,
}

impl ConfigBuilder {
    /// Create a new configuration builder
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the separator text
    pub fn separator(mut self, separator: impl Into<String>) -> Self {
        self.separator = Some(separator.into());
        self
    }

    /// Treat the separator as a regular expression
    pub fn regex(mut self, regex: bool) -> Self {
        self.regex = regex;
        self
    }

    /// Shorthand for `separator(pattern).regex(true)`
    pub fn pattern(self, pattern: impl Into<String>) -> Self {
        self.separator(pattern).regex(true)
    }

    /// Set the wrapper tag name
    pub fn tag(mut self, tag: impl Into<String>) -> Self {
        self.tag = Some(tag.into());
        self
    }

    /// Set the line-break marker
    pub fn line_break_marker(mut self, marker: impl Into<String>) -> Self {
        self.line_break_marker = Some(marker.into());
        self
    }

    /// Build the configuration, compiling a regex separator
    pub fn build(self) -> Result<Config, Error> {
        let mut config = Config::default();

        let separator = self
            .separator
            .unwrap_or_else(|| defaults::SEPARATOR.to_string());
        config.separator = if self.regex {
            SeparatorSpec::pattern(&separator)?
        } else {
            SeparatorSpec::Literal(separator)
        };

        if let Some(tag) = self.tag {
            config.tag = tag.to_ascii_lowercase();
        }

        if let Some(marker) = self.line_break_marker {
            config.line_break_marker = marker;
        }

        config.validate()?;
        Ok(config)
    }
}
