use thiserror::Error;

/// Failures reported by the site collaborators
#[derive(Error, Debug)]
pub enum SiteError {
    #[error("Upload directory unavailable: {0}")]
    UploadDirUnavailable(String),
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config file {path}: {source}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid config: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Invalid site URL: {0}")]
    InvalidSiteUrl(String),
}
