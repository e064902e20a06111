use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::render_url::{RenderTemplate, DEFAULT_BASE_URL, DEFAULT_ENDPOINT};

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

fn default_endpoint() -> String {
    DEFAULT_ENDPOINT.to_string()
}

/// Optional configuration loaded from `~/.config/inklink/config.toml`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InklinkConfig {
    /// Rendering service root, e.g. a self-hosted mermaid.ink.
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// Path segment selecting the output kind ("img", "svg", ...).
    #[serde(default = "default_endpoint")]
    pub endpoint: String,
}

impl Default for InklinkConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            endpoint: default_endpoint(),
        }
    }
}

impl InklinkConfig {
    /// Validated render template for this configuration.
    pub fn template(&self) -> Result<RenderTemplate> {
        RenderTemplate::new(&self.base_url, &self.endpoint)
            .context("invalid render template in config")
    }
}

/// Location of the config file, if one exists.
pub fn config_path() -> Result<Option<PathBuf>> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("inklink")?;
    Ok(xdg_dirs.find_config_file("config.toml"))
}

/// Load configuration from disk, or defaults when no file exists.
///
/// Never creates the file.
pub fn load() -> Result<InklinkConfig> {
    match config_path()? {
        Some(path) => load_from(&path),
        None => {
            tracing::debug!("no config file, using defaults");
            Ok(InklinkConfig::default())
        }
    }
}

pub fn load_from(path: &Path) -> Result<InklinkConfig> {
    let data = fs::read_to_string(path).with_context(|| format!("read {}", path.display()))?;
    let cfg: InklinkConfig =
        toml::from_str(&data).with_context(|| format!("parse {}", path.display()))?;
    tracing::debug!("loaded config from {}", path.display());
    Ok(cfg)
}
