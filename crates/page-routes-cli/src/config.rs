// File: src/config.rs
// Purpose: Configuration parsing from pages.toml

use anyhow::{Context, Result};
use page_routes::PagesOptions;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

/// Tool configuration
#[derive(Debug, Clone, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub project: ProjectConfig,

    #[serde(default)]
    pub pages: PagesOptions,
}

/// Where page files live on disk
#[derive(Debug, Clone, Deserialize)]
pub struct ProjectConfig {
    /// Application root directory scanned for pages (default: ".")
    #[serde(default = "default_root")]
    pub root: PathBuf,

    /// Page file extension, without the dot (default: "cshtml")
    #[serde(default = "default_extension")]
    pub extension: String,
}

fn default_root() -> PathBuf {
    PathBuf::from(".")
}

fn default_extension() -> String {
    "cshtml".to_string()
}

impl Default for ProjectConfig {
    fn default() -> Self {
        Self {
            root: default_root(),
            extension: default_extension(),
        }
    }
}

impl Config {
    /// Load configuration from a pages.toml file
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();

        // If file doesn't exist or is empty, return default config
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {:?}", path))?;

        if content.trim().is_empty() {
            return Ok(Self::default());
        }

        let config: Config = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {:?}", path))?;

        Ok(config)
    }
}
