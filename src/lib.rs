// Public API exports
pub mod config;
pub mod error;
pub mod logging;
pub mod placeholder;
pub mod query;
pub mod resolver;
pub mod security;
pub mod site;

// Re-export main types for convenience
pub use config::SiteConfig;
pub use error::{ConfigError, SiteError};
pub use placeholder::{Placeholder, human_size};
pub use query::{CheckResult, Directory, FileQuery};
pub use resolver::{FileChecker, ResolvedFile};
pub use security::{AllowListSanitizer, MarkupSanitizer, PathNormalizer};
pub use site::{SiteEnvironment, StaticSite};
