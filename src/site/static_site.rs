use super::SiteEnvironment;
use crate::config::SiteConfig;
use crate::error::SiteError;
use crate::security::PathNormalizer;
use chrono::{DateTime, Datelike, Utc};
use std::path::{Path, PathBuf};
use tracing::debug;

/// `SiteEnvironment` backed by a static `SiteConfig`
#[derive(Debug, Clone)]
pub struct StaticSite {
    config: SiteConfig,
    /// Fixed clock for the month sub-directory; `None` means "now"
    now: Option<DateTime<Utc>>,
}

impl StaticSite {
    pub fn new(config: SiteConfig) -> Self {
        Self { config, now: None }
    }

    /// Pin the clock used for month-organized uploads
    pub fn at(mut self, now: DateTime<Utc>) -> Self {
        self.now = Some(now);
        self
    }

    pub fn config(&self) -> &SiteConfig {
        &self.config
    }

    /// Resolve a configured directory against the application root
    fn rooted(&self, dir: &str) -> PathBuf {
        if Path::new(dir).is_absolute() {
            PathBuf::from(PathNormalizer::normalize(dir))
        } else {
            PathBuf::from(PathNormalizer::join(&self.config.abspath, dir))
        }
    }

    fn theme_root(&self, theme: &str) -> PathBuf {
        self.rooted(&self.config.theme.themes_dir).join(theme)
    }
}

impl SiteEnvironment for StaticSite {
    fn upload_dir(&self) -> Result<PathBuf, SiteError> {
        let base = match self.config.uploads.path.as_deref() {
            Some(path) if !path.trim().is_empty() => self.rooted(path),
            _ => {
                return Err(SiteError::UploadDirUnavailable(
                    "no upload path configured".to_string(),
                ));
            }
        };

        if !self.config.uploads.organize_by_month {
            return Ok(base);
        }

        let now = self.now.unwrap_or_else(Utc::now);
        Ok(base
            .join(format!("{:04}", now.year()))
            .join(format!("{:02}", now.month())))
    }

    fn abspath(&self) -> &Path {
        &self.config.abspath
    }

    fn plugins_dir(&self) -> PathBuf {
        self.rooted(&self.config.plugins_dir)
    }

    fn locate_template(&self, relative: &str) -> Option<PathBuf> {
        let relative = relative.trim_start_matches('/');
        if relative.is_empty() {
            return None;
        }

        let stylesheet = &self.config.theme.stylesheet;
        let mut candidates = vec![self.theme_root(stylesheet)];
        if let Some(template) = &self.config.theme.template {
            if template != stylesheet {
                candidates.push(self.theme_root(template));
            }
        }

        for root in candidates {
            let candidate = PathBuf::from(PathNormalizer::join(&root, relative));
            if candidate.exists() {
                debug!(path = %candidate.display(), "theme file located");
                return Some(candidate);
            }
        }

        debug!(relative, "theme file not found in active or parent theme");
        None
    }

    fn site_url(&self) -> &str {
        &self.config.site_url
    }
}
