use crate::security::PathNormalizer;
use std::fs;
use std::path::Path;

/// A file location derived from one query, with its size when it exists
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedFile {
    /// `directory + "/" + basename`, normalized
    pub full_path: String,
    /// Parent directory
    pub directory: String,
    /// File name including extension
    pub basename: String,
    /// Extension without the dot, empty if none
    pub extension: String,
    /// Size in bytes; `None` if nothing exists at `full_path`
    pub size_bytes: Option<u64>,
}

impl ResolvedFile {
    /// Split `full_path` and read its metadata once.
    ///
    /// A failed metadata read means the file does not exist.
    pub fn locate(full_path: &str) -> Self {
        let (directory, basename) = PathNormalizer::split(full_path);
        let full_path = if directory.is_empty() {
            basename.clone()
        } else {
            PathNormalizer::normalize(&format!("{}/{}", directory, basename))
        };

        let extension = Path::new(&basename)
            .extension()
            .and_then(|e| e.to_str())
            .unwrap_or("")
            .to_string();

        let size_bytes = fs::metadata(&full_path).ok().map(|meta| meta.len());

        Self {
            full_path,
            directory,
            basename,
            extension,
            size_bytes,
        }
    }

    pub fn exists(&self) -> bool {
        self.size_bytes.is_some()
    }
}
