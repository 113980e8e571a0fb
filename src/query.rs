use std::fmt;

/// Where to look for the file named in a query
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Directory {
    /// The site's upload directory (plugins root / theme root for the wrappers)
    #[default]
    Default,
    /// The filename already carries its directory
    FullPathEmbedded,
    /// A directory relative to the site root (or to the plugins/theme root)
    Explicit(String),
}

impl Directory {
    /// `Explicit("")` collapses to `Default`
    pub fn explicit(path: impl Into<String>) -> Self {
        let path = path.into();
        if path.is_empty() {
            Directory::Default
        } else {
            Directory::Explicit(path)
        }
    }
}

/// One existence check request.
///
/// Built per call and never retained by the checker.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileQuery {
    pub filename: String,
    pub dir: Directory,
    pub format: Option<String>,
    pub echo: bool,
    pub fallback: Option<String>,
}

impl FileQuery {
    /// Query for `filename` in the default directory, echoing when formatted
    pub fn new(filename: impl Into<String>) -> Self {
        Self {
            filename: filename.into(),
            dir: Directory::Default,
            format: None,
            echo: true,
            fallback: None,
        }
    }

    /// Text to render when the file exists; empty means "boolean only"
    pub fn format(mut self, format: impl Into<String>) -> Self {
        self.format = Some(format.into()).filter(|f| !f.is_empty());
        self
    }

    pub fn echo(mut self, echo: bool) -> Self {
        self.echo = echo;
        self
    }

    pub fn dir(mut self, dir: Directory) -> Self {
        self.dir = match dir {
            Directory::Explicit(path) => Directory::explicit(path),
            other => other,
        };
        self
    }

    /// Text to render when the file is missing
    pub fn fallback(mut self, fallback: impl Into<String>) -> Self {
        self.fallback = Some(fallback.into()).filter(|f| !f.is_empty());
        self
    }

    pub(crate) fn format_str(&self) -> Option<&str> {
        self.format.as_deref()
    }

    pub(crate) fn fallback_str(&self) -> &str {
        self.fallback.as_deref().unwrap_or("")
    }
}

/// Outcome of a check: a bare flag when no format was given, text otherwise
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CheckResult {
    Exists(bool),
    Text(String),
}

impl CheckResult {
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            CheckResult::Exists(exists) => Some(*exists),
            CheckResult::Text(_) => None,
        }
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            CheckResult::Exists(_) => None,
            CheckResult::Text(text) => Some(text),
        }
    }
}

impl fmt::Display for CheckResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CheckResult::Exists(exists) => write!(f, "{}", exists),
            CheckResult::Text(text) => f.write_str(text),
        }
    }
}
