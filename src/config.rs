use crate::error::ConfigError;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Site layout the checker resolves against.
///
/// Every directory except `abspath` is relative to `abspath` unless absolute.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SiteConfig {
    /// Application root on disk
    #[serde(default = "default_abspath")]
    pub abspath: PathBuf,
    /// Public base URL of the site
    #[serde(default = "default_site_url")]
    pub site_url: String,
    #[serde(default)]
    pub uploads: UploadsConfig,
    #[serde(default = "default_plugins_dir")]
    pub plugins_dir: String,
    #[serde(default)]
    pub theme: ThemeConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UploadsConfig {
    /// Upload base directory; `null` marks the upload directory as unavailable
    #[serde(default = "default_uploads_dir")]
    pub path: Option<String>,
    /// Append the current `YYYY/MM` sub-directory
    #[serde(default)]
    pub organize_by_month: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ThemeConfig {
    #[serde(default = "default_themes_dir")]
    pub themes_dir: String,
    /// Active theme directory name
    #[serde(default = "default_stylesheet")]
    pub stylesheet: String,
    /// Parent theme directory name, when the active theme is a child theme
    #[serde(default)]
    pub template: Option<String>,
}

fn default_abspath() -> PathBuf {
    PathBuf::from(".")
}

fn default_site_url() -> String {
    "http://localhost".to_string()
}

fn default_uploads_dir() -> Option<String> {
    Some("wp-content/uploads".to_string())
}

fn default_plugins_dir() -> String {
    "wp-content/plugins".to_string()
}

fn default_themes_dir() -> String {
    "wp-content/themes".to_string()
}

fn default_stylesheet() -> String {
    "default".to_string()
}

impl Default for UploadsConfig {
    fn default() -> Self {
        Self {
            path: default_uploads_dir(),
            organize_by_month: false,
        }
    }
}

impl Default for ThemeConfig {
    fn default() -> Self {
        Self {
            themes_dir: default_themes_dir(),
            stylesheet: default_stylesheet(),
            template: None,
        }
    }
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            abspath: default_abspath(),
            site_url: default_site_url(),
            uploads: UploadsConfig::default(),
            plugins_dir: default_plugins_dir(),
            theme: ThemeConfig::default(),
        }
    }
}

impl SiteConfig {
    /// Load and validate a JSON config file
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let raw = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_json_str(&raw)
    }

    pub fn from_json_str(raw: &str) -> Result<Self, ConfigError> {
        let config: SiteConfig = serde_json::from_str(raw)?;
        config.validate()?;
        Ok(config)
    }

    /// Config rooted at `abspath` with every other setting defaulted
    pub fn with_root(abspath: impl Into<PathBuf>) -> Self {
        Self {
            abspath: abspath.into(),
            ..Self::default()
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let url = self.site_url.to_ascii_lowercase();
        if !(url.starts_with("http://") || url.starts_with("https://")) {
            return Err(ConfigError::InvalidSiteUrl(self.site_url.clone()));
        }
        Ok(())
    }
}
