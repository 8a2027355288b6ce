//! Theme configuration loaded from TOML
//!
//! ```toml
//! prefix = "ember"
//! scheme = "dark"
//! radius = "lg"
//! ```

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::tokens::{ColorScheme, RadiusToken};

/// Errors raised while loading a theme configuration
#[derive(Debug, Error)]
pub enum ThemeError {
    #[error("Failed to read theme config {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse theme config: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Invalid class prefix '{0}': must start with a letter and contain only letters, digits, '-' or '_'")]
    InvalidPrefix(String),
}

/// Theme configuration
#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct ThemeConfig {
    /// Prefix for every generated class name
    pub prefix: String,
    pub scheme: ColorScheme,
    /// Default corner radius for controls and surfaces
    pub radius: RadiusToken,
}

impl Default for ThemeConfig {
    fn default() -> Self {
        Self {
            prefix: "ember".to_string(),
            scheme: ColorScheme::default(),
            radius: RadiusToken::default(),
        }
    }
}

impl ThemeConfig {
    /// Parse and validate a TOML document
    pub fn from_toml_str(source: &str) -> Result<Self, ThemeError> {
        let config: ThemeConfig = toml::from_str(source)?;
        config.validate()?;
        Ok(config)
    }

    /// Load and validate a TOML file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ThemeError> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|source| ThemeError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        tracing::debug!("Loaded theme config from {}", path.display());
        Self::from_toml_str(&content)
    }

    /// Check that the prefix is a usable CSS identifier
    pub fn validate(&self) -> Result<(), ThemeError> {
        let mut chars = self.prefix.chars();
        let valid = match chars.next() {
            Some(first) => {
                first.is_ascii_alphabetic()
                    && chars.all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
            }
            None => false,
        };

        if valid {
            Ok(())
        } else {
            Err(ThemeError::InvalidPrefix(self.prefix.clone()))
        }
    }
}
