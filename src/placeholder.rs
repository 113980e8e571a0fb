use crate::resolver::ResolvedFile;

/// Percent-tags recognized in a format string
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Placeholder {
    FileDirectory,
    FileExtension,
    FileName,
    FilePath,
    FileSize,
    FileSizeBytes,
    FileUrl,
}

impl Placeholder {
    pub const ALL: [Placeholder; 7] = [
        Placeholder::FileDirectory,
        Placeholder::FileExtension,
        Placeholder::FileName,
        Placeholder::FilePath,
        Placeholder::FileSize,
        Placeholder::FileSizeBytes,
        Placeholder::FileUrl,
    ];

    /// Literal token as it appears in a format string
    pub fn token(self) -> &'static str {
        match self {
            Placeholder::FileDirectory => "%file_directory%",
            Placeholder::FileExtension => "%file_extension%",
            Placeholder::FileName => "%file_name%",
            Placeholder::FilePath => "%file_path%",
            Placeholder::FileSize => "%file_size%",
            Placeholder::FileSizeBytes => "%file_size_bytes%",
            Placeholder::FileUrl => "%file_url%",
        }
    }

    fn value(self, file: &ResolvedFile, url: &str) -> String {
        let bytes = file.size_bytes.unwrap_or(0);
        match self {
            Placeholder::FileDirectory => file.directory.clone(),
            Placeholder::FileExtension => file.extension.clone(),
            Placeholder::FileName => file.basename.clone(),
            Placeholder::FilePath => file.full_path.clone(),
            Placeholder::FileSize => human_size(bytes),
            Placeholder::FileSizeBytes => bytes.to_string(),
            Placeholder::FileUrl => url.to_string(),
        }
    }
}

/// Replace every recognized token in `format` with values describing `file`.
///
/// Plain text replacement, one pass per token.
pub fn substitute(format: &str, file: &ResolvedFile, url: &str) -> String {
    Placeholder::ALL
        .iter()
        .fold(format.to_string(), |text, placeholder| {
            if text.contains(placeholder.token()) {
                text.replace(placeholder.token(), &placeholder.value(file, url))
            } else {
                text
            }
        })
}

const UNITS: [(&str, u64); 5] = [
    ("TB", 1 << 40),
    ("GB", 1 << 30),
    ("MB", 1 << 20),
    ("KB", 1 << 10),
    ("B", 1),
];

/// Format a byte count with binary units, two decimals, and `.00` dropped.
///
/// An empty file has no displayable size and renders as an empty string.
pub fn human_size(bytes: u64) -> String {
    if bytes == 0 {
        return String::new();
    }
    for (unit, magnitude) in UNITS {
        if bytes >= magnitude && magnitude > 1 {
            let scaled = format!("{:.2}", bytes as f64 / magnitude as f64);
            let scaled = scaled.strip_suffix(".00").unwrap_or(&scaled);
            return format!("{} {}", scaled, unit);
        }
    }
    format!("{} B", bytes)
}
