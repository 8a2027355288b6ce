//! Ember configuration file handling
//!
//! `ember.toml` holds the theme and the gallery settings:
//!
//! ```toml
//! [theme]
//! prefix = "ember"
//! scheme = "dark"
//! radius = "md"
//!
//! [gallery]
//! title = "Ember components"
//! output = "gallery.html"
//! ```

use anyhow::{Context, Result};
use ember_theme::ThemeConfig;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

pub const CONFIG_FILE: &str = "ember.toml";

/// Contents of `ember.toml`
#[derive(Debug, Default, Deserialize, Serialize)]
pub struct EmberConfig {
    #[serde(default)]
    pub theme: ThemeConfig,
    #[serde(default)]
    pub gallery: GalleryConfig,
}

/// Gallery page settings
#[derive(Debug, Deserialize, Serialize)]
pub struct GalleryConfig {
    #[serde(default = "default_title")]
    pub title: String,
    /// Output file, relative to the working directory
    #[serde(default = "default_output")]
    pub output: PathBuf,
}

fn default_title() -> String {
    "Ember components".to_string()
}

fn default_output() -> PathBuf {
    PathBuf::from("gallery.html")
}

impl Default for GalleryConfig {
    fn default() -> Self {
        Self {
            title: default_title(),
            output: default_output(),
        }
    }
}

impl EmberConfig {
    /// Load and validate a config file
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))?;
        let config = Self::from_toml_str(&content)
            .with_context(|| format!("Failed to parse {}", path.display()))?;
        tracing::debug!("Loaded config from {}", path.display());
        Ok(config)
    }

    /// Load `ember.toml` from a directory, or defaults when it has none
    pub fn load_from_dir(path: &Path) -> Result<Self> {
        let config_path = path.join(CONFIG_FILE);
        if config_path.exists() {
            return Self::load(&config_path);
        }
        tracing::info!(
            "No {} in {}, using defaults",
            CONFIG_FILE,
            path.display()
        );
        Ok(Self::default())
    }

    /// Resolve an explicit `--config` path or fall back to the directory
    pub fn resolve(config: Option<&Path>) -> Result<Self> {
        match config {
            Some(path) => Self::load(path),
            None => Self::load_from_dir(Path::new(".")),
        }
    }

    pub fn from_toml_str(source: &str) -> Result<Self> {
        let config: EmberConfig = toml::from_str(source)?;
        config.theme.validate()?;
        Ok(config)
    }

    pub fn to_toml(&self) -> Result<String> {
        Ok(toml::to_string_pretty(self)?)
    }
}
