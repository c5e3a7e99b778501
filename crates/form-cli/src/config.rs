//! Render configuration
//!
//! Defaults can be overridden from a TOML file, then from command-line
//! flags.
//!
//! ```toml
//! format = "json"
//! indent = 4
//! show_types = false
//! ```

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Output format for rendered forms
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Indented control listing
    #[default]
    Text,

    /// Pretty-printed JSON array of descriptors
    Json,
}

/// How forms are rendered
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderConfig {
    /// Output format
    pub format: OutputFormat,
    /// Spaces per nesting level in text output
    pub indent: usize,
    /// Whether text output shows type tags
    pub show_types: bool,
}

impl RenderConfig {
    /// Create default configuration
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// With output format
    #[inline]
    #[must_use]
    pub fn with_format(mut self, format: OutputFormat) -> Self {
        self.format = format;
        self
    }

    /// With indent width
    #[inline]
    #[must_use]
    pub fn with_indent(mut self, indent: usize) -> Self {
        self.indent = indent;
        self
    }

    /// With type tags shown or hidden
    #[inline]
    #[must_use]
    pub fn with_show_types(mut self, show_types: bool) -> Self {
        self.show_types = show_types;
        self
    }

    /// Parse a TOML document; missing keys keep their defaults
    ///
    /// # Errors
    /// [`ConfigError::Parse`] if the document is not valid for this schema.
    pub fn from_toml_str(source: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(source)?)
    }

    /// Load a TOML file
    ///
    /// # Errors
    /// [`ConfigError::Io`] if the file cannot be read, [`ConfigError::Parse`]
    /// if it is malformed.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let source = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_toml_str(&source)?;
        tracing::debug!(path = %path.display(), ?config, "loaded render config");
        Ok(config)
    }
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            format: OutputFormat::Text,
            indent: 2,
            show_types: true,
        }
    }
}

/// Configuration loading errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// File could not be read
    #[error("failed to read config {}: {source}", .path.display())]
    Io {
        /// Path that was read
        path: PathBuf,
        /// Underlying I/O error
        source: std::io::Error,
    },

    /// File was not valid TOML for this schema
    #[error("invalid config: {0}")]
    Parse(#[from] toml::de::Error),
}
