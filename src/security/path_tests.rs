#[cfg(test)]
mod tests {
    use crate::security::PathNormalizer;
    use std::path::Path;

    #[test]
    fn test_normalize_simple_path() {
        assert_eq!(PathNormalizer::normalize("wp-content/uploads"), "wp-content/uploads");
    }

    #[test]
    fn test_normalize_collapses_double_slashes() {
        assert_eq!(
            PathNormalizer::normalize("/var/www//wp-content///uploads/"),
            "/var/www/wp-content/uploads"
        );
    }

    #[test]
    fn test_normalize_drops_current_dir_markers() {
        assert_eq!(PathNormalizer::normalize("./docs/./guide.pdf"), "docs/guide.pdf");
    }

    #[test]
    fn test_normalize_keeps_parent_markers() {
        assert_eq!(PathNormalizer::normalize("a/../b"), "a/../b");
    }

    #[test]
    fn test_normalize_root_only() {
        assert_eq!(PathNormalizer::normalize("/"), "/");
    }

    #[test]
    fn test_join_relative_directory() {
        let joined = PathNormalizer::join(Path::new("/var/www/"), "wp-content/uploads");
        assert_eq!(joined, "/var/www/wp-content/uploads");
    }

    #[test]
    fn test_join_ignores_leading_slash_on_relative() {
        let joined = PathNormalizer::join(Path::new("/var/www"), "/files/");
        assert_eq!(joined, "/var/www/files");
    }

    #[test]
    fn test_join_empty_relative() {
        let joined = PathNormalizer::join(Path::new("/var/www/"), "");
        assert_eq!(joined, "/var/www");
    }

    #[test]
    fn test_split_full_path() {
        let (dir, name) = PathNormalizer::split("/var/www/files/report.pdf");
        assert_eq!(dir, "/var/www/files");
        assert_eq!(name, "report.pdf");
    }

    #[test]
    fn test_split_file_at_root() {
        let (dir, name) = PathNormalizer::split("/report.pdf");
        assert_eq!(dir, "/");
        assert_eq!(name, "report.pdf");
    }

    #[test]
    fn test_split_bare_filename() {
        let (dir, name) = PathNormalizer::split("report.pdf");
        assert_eq!(dir, "");
        assert_eq!(name, "report.pdf");
    }

    #[test]
    fn test_relative_to_strips_root() {
        let rel = PathNormalizer::relative_to("/var/www/wp-content/uploads", Path::new("/var/www/"));
        assert_eq!(rel, "wp-content/uploads");
    }

    #[test]
    fn test_relative_to_root_itself() {
        let rel = PathNormalizer::relative_to("/var/www", Path::new("/var/www"));
        assert_eq!(rel, "");
    }

    #[test]
    fn test_relative_to_outside_root() {
        let rel = PathNormalizer::relative_to("/srv/media/", Path::new("/var/www"));
        assert_eq!(rel, "srv/media");
    }
}
