use std::path::{Path, PathBuf};

use crate::core::constants::files;
use crate::core::error::Result;

/// Recursively collect every documentation file below `dir`.
///
/// All standard filters of the walker are disabled: hidden entries and
/// ignore-file rules do not hide anything. Symbolic links are not followed
/// and are never returned. Entries are yielded in file name order.
pub fn find_doc_files(dir: &Path) -> Result<Vec<PathBuf>> {
    let mut builder = ignore::WalkBuilder::new(dir);
    builder
        .standard_filters(false)
        .follow_links(false)
        .sort_by_file_name(|a, b| a.cmp(b));

    let mut result_paths = Vec::new();
    for entry in builder.build() {
        let entry = entry?;

        let is_regular_file = entry.file_type().is_some_and(|ft| ft.is_file());
        if is_regular_file && is_doc_file(entry.path()) {
            result_paths.push(entry.into_path());
        }
    }

    Ok(result_paths)
}

/// Whether the file name ends in one of the documentation suffixes.
pub fn is_doc_file(path: &Path) -> bool {
    path.file_name()
        .map(|name| {
            let name = name.to_string_lossy();
            files::DOC_EXTENSIONS
                .iter()
                .any(|suffix| name.ends_with(suffix))
        })
        .unwrap_or(false)
}

#[cfg(test)]
mod tests {
    #![allow(non_snake_case)]

    use super::*;
    use std::fs;
    use tempfile::TempDir;

    type TestResult = std::result::Result<(), Box<dyn std::error::Error>>;

    fn create_test_structure() -> std::result::Result<TempDir, Box<dyn std::error::Error>> {
        let temp_dir = tempfile::tempdir()?;
        let base = temp_dir.path();

        fs::create_dir_all(base.join("guides/nested"))?;
        fs::create_dir_all(base.join(".hidden"))?;
        fs::create_dir_all(base.join("tmp"))?;

        fs::write(base.join("Home.md"), "# Home")?;
        fs::write(base.join("page.mdx"), "<Page />")?;
        fs::write(base.join("notes.markdown"), "notes")?;
        fs::write(base.join("file.txt"), "plain text")?;
        fs::write(base.join("UPPER.MD"), "wrong case")?;
        fs::write(base.join("no_extension"), "nothing")?;
        fs::write(base.join("guides/setup.md"), "setup")?;
        fs::write(base.join("guides/nested/deep.md"), "deep")?;
        fs::write(base.join(".hidden/secret.md"), "hidden")?;

        // Ignore rules must not hide anything
        fs::write(base.join(".gitignore"), "tmp/\n")?;
        fs::write(base.join("tmp/ignored.md"), "still processed")?;

        Ok(temp_dir)
    }

    fn file_names(paths: &[PathBuf]) -> Vec<String> {
        paths
            .iter()
            .map(|p| p.file_name().unwrap().to_string_lossy().to_string())
            .collect()
    }

    #[test]
    fn test_find_doc_files__recognized_extensions() -> TestResult {
        let temp_dir = create_test_structure()?;

        let result = find_doc_files(temp_dir.path())?;
        let names = file_names(&result);

        assert!(names.contains(&"Home.md".to_string()));
        assert!(names.contains(&"page.mdx".to_string()));
        assert!(names.contains(&"notes.markdown".to_string()));
        assert!(!names.contains(&"file.txt".to_string()));
        assert!(!names.contains(&"no_extension".to_string()));
        Ok(())
    }

    #[test]
    fn test_find_doc_files__case_sensitive() -> TestResult {
        let temp_dir = create_test_structure()?;

        let names = file_names(&find_doc_files(temp_dir.path())?);

        assert!(!names.contains(&"UPPER.MD".to_string()));
        Ok(())
    }

    #[test]
    fn test_find_doc_files__recurses_without_filters() -> TestResult {
        let temp_dir = create_test_structure()?;

        let result = find_doc_files(temp_dir.path())?;
        let names = file_names(&result);

        assert!(names.contains(&"setup.md".to_string()));
        assert!(names.contains(&"deep.md".to_string()));
        assert!(names.contains(&"secret.md".to_string()));
        assert!(names.contains(&"ignored.md".to_string()));
        assert_eq!(result.len(), 7);
        Ok(())
    }

    #[test]
    fn test_find_doc_files__paths_are_under_root() -> TestResult {
        let temp_dir = create_test_structure()?;

        for path in find_doc_files(temp_dir.path())? {
            assert!(path.starts_with(temp_dir.path()));
            assert!(path.is_file());
        }
        Ok(())
    }

    #[test]
    fn test_find_doc_files__skips_directories_with_doc_names() -> TestResult {
        let temp_dir = tempfile::tempdir()?;
        fs::create_dir_all(temp_dir.path().join("folder.md"))?;
        fs::write(temp_dir.path().join("folder.md/inner.md"), "inner")?;

        let result = find_doc_files(temp_dir.path())?;

        assert_eq!(result, vec![temp_dir.path().join("folder.md/inner.md")]);
        Ok(())
    }

    #[test]
    fn test_find_doc_files__empty_directory() -> TestResult {
        let temp_dir = tempfile::tempdir()?;

        assert!(find_doc_files(temp_dir.path())?.is_empty());
        Ok(())
    }

    #[test]
    fn test_find_doc_files__missing_directory_fails() {
        let result = find_doc_files(Path::new("/definitely/nonexistent/wiki/12345"));

        assert!(result.is_err());
        assert!(
            result
                .unwrap_err()
                .to_string()
                .contains("File walking error")
        );
    }

    #[cfg(unix)]
    #[test]
    fn test_find_doc_files__symlinks_not_followed() -> TestResult {
        let temp_dir = tempfile::tempdir()?;
        let outside = tempfile::tempdir()?;
        fs::write(outside.path().join("outside.md"), "outside")?;
        fs::write(temp_dir.path().join("real.md"), "real")?;
        std::os::unix::fs::symlink(outside.path(), temp_dir.path().join("linked"))?;
        std::os::unix::fs::symlink(
            temp_dir.path().join("real.md"),
            temp_dir.path().join("alias.md"),
        )?;

        let names = file_names(&find_doc_files(temp_dir.path())?);

        assert_eq!(names, vec!["real.md".to_string()]);
        Ok(())
    }

    #[test]
    fn test_is_doc_file() {
        assert!(is_doc_file(Path::new("a.md")));
        assert!(is_doc_file(Path::new("dir/a.mdx")));
        assert!(is_doc_file(Path::new("a.markdown")));
        assert!(is_doc_file(Path::new(".md")));
        assert!(!is_doc_file(Path::new("a.MD")));
        assert!(!is_doc_file(Path::new("a.md.bak")));
        assert!(!is_doc_file(Path::new("a.txt")));
        assert!(!is_doc_file(Path::new("")));
    }
}
