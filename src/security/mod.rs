mod markup;
mod path;

#[cfg(test)]
mod path_tests;

pub use markup::{AllowListSanitizer, MarkupSanitizer, ALLOWED_TAGS};
pub use path::PathNormalizer;
