mod static_site;


pub use static_site::StaticSite;

use crate::error::SiteError;
use std::path::{Path, PathBuf};

/// Host collaborators the checker consults when resolving files
pub trait SiteEnvironment: Send + Sync {
    /// Current upload directory, or an error when storage is misconfigured
    fn upload_dir(&self) -> Result<PathBuf, SiteError>;

    /// Application root that relative directories are appended to
    fn abspath(&self) -> &Path;

    /// Root directory holding plugins
    fn plugins_dir(&self) -> PathBuf;

    /// Find a theme-relative file in the active theme, then the parent theme
    fn locate_template(&self, relative: &str) -> Option<PathBuf>;

    /// Public base URL of the site
    fn site_url(&self) -> &str;
}
