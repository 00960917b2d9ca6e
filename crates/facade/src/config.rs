//! Configuration file structure (site.toml).

use std::fs;
use std::path::Path;

use anyhow::Result;
use serde::Deserialize;

#[derive(Debug, Deserialize, Default)]
pub struct ConfigFile {
    #[serde(default)]
    pub site: SiteConfig,
    #[serde(default)]
    pub data: DataConfig,
    #[serde(default)]
    pub patch: PatchSettings,
}

#[derive(Debug, Deserialize)]
pub struct SiteConfig {
    #[serde(default = "default_app_dir")]
    pub app_dir: String,
    #[serde(default = "default_components_dir")]
    pub components_dir: String,
    #[serde(default = "default_brand")]
    pub brand: String,
    #[serde(default = "default_financing_url")]
    pub financing_url: String,
    #[serde(default = "default_financing_label")]
    pub financing_label: String,
}

#[derive(Debug, Deserialize, Default)]
pub struct DataConfig {
    /// Glossary asset path; built-in data when unset
    pub glossary: Option<String>,
    /// Calculator catalog asset path; built-in data when unset
    pub calculators: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct PatchSettings {
    #[serde(default = "default_patch_enabled")]
    pub enabled: bool,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            app_dir: default_app_dir(),
            components_dir: default_components_dir(),
            brand: default_brand(),
            financing_url: default_financing_url(),
            financing_label: default_financing_label(),
        }
    }
}

impl Default for PatchSettings {
    fn default() -> Self {
        Self {
            enabled: default_patch_enabled(),
        }
    }
}

fn default_app_dir() -> String {
    "app".to_string()
}
fn default_components_dir() -> String {
    "components".to_string()
}
fn default_brand() -> String {
    "Acquirely".to_string()
}
fn default_financing_url() -> String {
    "https://startinggatefinancial.com".to_string()
}
fn default_financing_label() -> String {
    "Starting Gate Financial".to_string()
}
fn default_patch_enabled() -> bool {
    true
}

/// Load configuration from site.toml if it exists.
/// Returns an error if the config file exists but is malformed.
pub fn load(path: &Path) -> Result<ConfigFile> {
    if path.exists() {
        let content = fs::read_to_string(path)
            .map_err(|e| anyhow::anyhow!("Failed to read {}: {}", path.display(), e))?;
        let config: ConfigFile = toml::from_str(&content)
            .map_err(|e| anyhow::anyhow!("Failed to parse {}: {}", path.display(), e))?;
        tracing::info!("Loaded config from {}", path.display());
        return Ok(config);
    }
    Ok(ConfigFile::default())
}
