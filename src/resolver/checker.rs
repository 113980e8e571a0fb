use super::ResolvedFile;
use crate::placeholder::substitute;
use crate::query::{CheckResult, Directory, FileQuery};
use crate::security::{AllowListSanitizer, MarkupSanitizer, PathNormalizer};
use crate::site::SiteEnvironment;
use std::io::Write;
use std::path::Path;
use tracing::{debug, warn};

/// Checks for a file and renders a snippet describing it.
///
/// Holds only immutable collaborators, so one checker can serve any number
/// of calls (and threads, when the collaborators allow it).
pub struct FileChecker<E, S = AllowListSanitizer> {
    site: E,
    sanitizer: S,
}

impl<E: SiteEnvironment> FileChecker<E, AllowListSanitizer> {
    /// Checker using the default allow-list sanitizer
    pub fn new(site: E) -> Self {
        Self {
            site,
            sanitizer: AllowListSanitizer::new(),
        }
    }
}

impl<E: SiteEnvironment, S: MarkupSanitizer> FileChecker<E, S> {
    pub fn with_sanitizer(site: E, sanitizer: S) -> Self {
        Self { site, sanitizer }
    }

    pub fn site(&self) -> &E {
        &self.site
    }

    /// Check a file in the upload directory, a site-relative directory, or at
    /// a full path carried by the filename.
    ///
    /// Returns `CheckResult::Exists` when the query has no format, otherwise
    /// the rendered (or fallback) text, which is also written to `out` when
    /// the query asks for echo.
    pub fn check_file(&self, query: &FileQuery, out: &mut dyn Write) -> CheckResult {
        let location = if query.filename.is_empty() {
            None
        } else {
            self.locate(query)
        };
        self.render(location, query, out)
    }

    /// Same contract as `check_file`, rooted at the plugins directory.
    ///
    /// `Directory::Explicit` names a sub-directory of the plugins root;
    /// `Directory::FullPathEmbedded` means the filename is already
    /// plugin-relative (e.g. `akismet/akismet.php`).
    pub fn check_plugin_file(&self, query: &FileQuery, out: &mut dyn Write) -> CheckResult {
        let location = if query.filename.is_empty() {
            None
        } else {
            let root = self.site.plugins_dir();
            let relative = match &query.dir {
                Directory::Explicit(sub) => format!("{}/{}", sub, query.filename),
                Directory::Default | Directory::FullPathEmbedded => query.filename.clone(),
            };
            Some(PathNormalizer::join(&root, &relative))
        };
        self.render(location, query, out)
    }

    /// Same contract as `check_file`, resolved through the theme locator
    /// (active theme first, then the parent theme).
    pub fn check_theme_file(&self, query: &FileQuery, out: &mut dyn Write) -> CheckResult {
        let location = if query.filename.is_empty() {
            None
        } else {
            let relative = match &query.dir {
                Directory::Explicit(sub) => format!("{}/{}", sub, query.filename),
                Directory::Default | Directory::FullPathEmbedded => query.filename.clone(),
            };
            self.site
                .locate_template(&PathNormalizer::normalize(&relative))
                .map(|path| PathNormalizer::normalize(&path.to_string_lossy()))
        };
        self.render(location, query, out)
    }

    /// Full path for the core variant, or `None` when the base directory
    /// cannot be resolved
    fn locate(&self, query: &FileQuery) -> Option<String> {
        match &query.dir {
            Directory::Default => match self.site.upload_dir() {
                Ok(dir) => Some(PathNormalizer::join(&dir, &query.filename)),
                Err(e) => {
                    debug!(error = %e, "upload directory lookup failed; treating file as missing");
                    None
                }
            },
            Directory::FullPathEmbedded => Some(PathNormalizer::normalize(&query.filename)),
            Directory::Explicit(dir) => {
                let full = format!("{}/{}", dir, query.filename);
                if self.is_rooted(dir) {
                    Some(PathNormalizer::normalize(&full))
                } else {
                    Some(PathNormalizer::join(self.site.abspath(), &full))
                }
            }
        }
    }

    /// An explicit directory is used as-is when it already starts with the
    /// site root, or when it is absolute and the site root is not.
    fn is_rooted(&self, dir: &str) -> bool {
        let dir = Path::new(dir);
        let root = self.site.abspath();
        if root.is_absolute() {
            dir.starts_with(root)
        } else {
            dir.is_absolute()
        }
    }

    fn render(&self, location: Option<String>, query: &FileQuery, out: &mut dyn Write) -> CheckResult {
        let file = location.map(|path| ResolvedFile::locate(&path));
        let exists = file.as_ref().is_some_and(ResolvedFile::exists);
        debug!(
            filename = %query.filename,
            path = file.as_ref().map(|f| f.full_path.as_str()).unwrap_or(""),
            exists,
            "file check"
        );

        let Some(format) = query.format_str() else {
            return CheckResult::Exists(exists);
        };

        let text = match file.filter(ResolvedFile::exists) {
            Some(file) => substitute(format, &file, &self.url_for(&file)),
            None => query.fallback_str().to_string(),
        };
        let text = self.sanitizer.sanitize(&text);

        if query.echo && !text.is_empty() {
            if let Err(e) = out.write_all(text.as_bytes()).and_then(|()| out.flush()) {
                warn!(error = %e, "failed to echo rendered output");
            }
        }

        CheckResult::Text(text)
    }

    /// Site URL + directory relative to the site root + file name
    fn url_for(&self, file: &ResolvedFile) -> String {
        let base = self.site.site_url().trim_end_matches('/');
        let relative = PathNormalizer::relative_to(&file.directory, self.site.abspath());
        if relative.is_empty() {
            format!("{}/{}", base, file.basename)
        } else {
            format!("{}/{}/{}", base, relative, file.basename)
        }
    }
}
