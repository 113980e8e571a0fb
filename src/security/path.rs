use std::path::{Component, Path, PathBuf};

pub struct PathNormalizer;

impl PathNormalizer {
    /// Normalize a path into a forward-slash string:
    /// - Repeated separators collapse (`a//b` -> `a/b`)
    /// - Current directory markers (`./`) are dropped
    /// - A leading root is preserved
    ///
    /// Parent markers (`..`) are kept as-is; nothing here touches the filesystem.
    pub fn normalize(raw_path: &str) -> String {
        let path = Path::new(raw_path);
        let mut absolute = false;
        let mut components = Vec::new();

        for component in path.components() {
            match component {
                Component::Prefix(prefix) => {
                    components.push(prefix.as_os_str().to_string_lossy().into_owned());
                }
                Component::RootDir => absolute = true,
                Component::CurDir => continue,
                Component::ParentDir => components.push("..".to_string()),
                Component::Normal(part) => components.push(part.to_string_lossy().into_owned()),
            }
        }

        let joined = components.join("/");
        if absolute {
            format!("/{}", joined)
        } else {
            joined
        }
    }

    /// Concatenate `relative` onto `base` the way a site-root relative
    /// directory is appended, ignoring a leading slash on `relative`.
    pub fn join(base: &Path, relative: &str) -> String {
        let base = base.to_string_lossy();
        if relative.is_empty() {
            return Self::normalize(&base);
        }
        Self::normalize(&format!("{}/{}", base, relative))
    }

    /// Split a full path into `(directory, basename)`.
    ///
    /// The directory is empty when the path has no parent component.
    pub fn split(full_path: &str) -> (String, String) {
        let normalized = Self::normalize(full_path);
        match normalized.rsplit_once('/') {
            Some(("", name)) => ("/".to_string(), name.to_string()),
            Some((dir, name)) => (dir.to_string(), name.to_string()),
            None => (String::new(), normalized),
        }
    }

    /// Strip `root` from the front of `path`, returning the remainder without
    /// surrounding slashes. Paths outside `root` are returned normalized but
    /// otherwise unchanged.
    pub fn relative_to(path: &str, root: &Path) -> String {
        let path = PathBuf::from(Self::normalize(path));
        match path.strip_prefix(root) {
            Ok(rest) => Self::normalize(&rest.to_string_lossy()),
            Err(_) => path
                .to_string_lossy()
                .trim_start_matches('/')
                .to_string(),
        }
    }
}
