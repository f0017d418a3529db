//! Recursive extension-filtered directory scanning

use std::collections::HashSet;
use std::path::PathBuf;
use walkdir::WalkDir;

use crate::reporting::scan_reporter::ScanReporter;

/// Split a file name at its last `.` into base name and extension; the
/// extension is empty when the name contains no dot. The scanner's extension
/// filter and the matcher's base-name lookup both go through this split, so
/// the two views of a name always agree.
pub fn split_extension(file_name: &str) -> (&str, &str) {
    match file_name.rfind('.') {
        Some(dot) => (&file_name[..dot], &file_name[dot + 1..]),
        None => (file_name, ""),
    }
}

/// The extension of a file name: the substring after the last `.`, or the
/// empty string if the name contains no dot
pub fn file_extension(file_name: &str) -> &str {
    split_extension(file_name).1
}

/// Collect every non-directory path under the given directories whose
/// extension is in `extensions`
///
/// # Arguments
/// * `directories` - Roots to walk, in order; non-existent ones are skipped
/// * `extensions` - Allowed extensions, no leading dot, compared case-sensitively
/// * `reporter` - Receives walk failures; a failing directory contributes
///   nothing further, the remaining directories are still scanned
///
/// # Returns
/// Deduplicated set of matching paths from all directories
pub fn scan_directories(
    directories: &[PathBuf],
    extensions: &HashSet<String>,
    reporter: &dyn ScanReporter,
) -> HashSet<PathBuf> {
    let mut found = HashSet::new();

    for directory in directories {
        if !directory.exists() {
            continue;
        }
        for entry in WalkDir::new(directory).follow_links(false) {
            match entry {
                Ok(entry) => {
                    if entry.file_type().is_dir() {
                        continue;
                    }
                    let name = entry.file_name().to_string_lossy();
                    if extensions.contains(file_extension(&name)) {
                        found.insert(entry.path().to_path_buf());
                    }
                }
                Err(err) => {
                    reporter.on_directory_error(directory, &err);
                    break;
                }
            }
        }
    }

    found
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reporting::scan_reporter::SilentReporter;
    use std::fs::{self, File};
    use tempfile::TempDir;

    fn ext_set(extensions: &[&str]) -> HashSet<String> {
        extensions.iter().map(|e| e.to_string()).collect()
    }

    #[test]
    fn test_split_extension() {
        assert_eq!(split_extension("paper.pdf"), ("paper", "pdf"));
        assert_eq!(split_extension("archive.tar.gz"), ("archive.tar", "gz"));
        assert_eq!(split_extension("README"), ("README", ""));
        assert_eq!(split_extension("trailing."), ("trailing", ""));
        assert_eq!(split_extension(".bashrc"), ("", "bashrc"));
    }

    #[test]
    fn test_file_extension() {
        assert_eq!(file_extension("paper.pdf"), "pdf");
        assert_eq!(file_extension("archive.tar.gz"), "gz");
        assert_eq!(file_extension("README"), "");
        assert_eq!(file_extension("trailing."), "");
        assert_eq!(file_extension(".bashrc"), "bashrc");
    }

    #[test]
    fn test_scan_is_recursive() {
        let temp_dir = TempDir::new().unwrap();
        let subdir = temp_dir.path().join("a").join("b");
        fs::create_dir_all(&subdir).unwrap();

        File::create(temp_dir.path().join("top.pdf")).unwrap();
        File::create(subdir.join("deep.pdf")).unwrap();
        File::create(subdir.join("notes.txt")).unwrap();

        let found = scan_directories(
            &[temp_dir.path().to_path_buf()],
            &ext_set(&["pdf"]),
            &SilentReporter,
        );
        assert_eq!(found.len(), 2);
        assert!(found.contains(&temp_dir.path().join("top.pdf")));
        assert!(found.contains(&subdir.join("deep.pdf")));
    }

    #[test]
    fn test_extension_filter_is_case_sensitive() {
        let temp_dir = TempDir::new().unwrap();
        File::create(temp_dir.path().join("paper.PDF")).unwrap();
        File::create(temp_dir.path().join("paper.pdf")).unwrap();

        let found = scan_directories(
            &[temp_dir.path().to_path_buf()],
            &ext_set(&["pdf"]),
            &SilentReporter,
        );
        assert_eq!(found.len(), 1);
        assert!(found.contains(&temp_dir.path().join("paper.pdf")));
    }

    #[test]
    fn test_missing_directory_is_skipped() {
        let found = scan_directories(
            &[PathBuf::from("/does/not/exist")],
            &ext_set(&["pdf"]),
            &SilentReporter,
        );
        assert!(found.is_empty());
    }

    #[test]
    fn test_duplicate_directories_deduplicate() {
        let temp_dir = TempDir::new().unwrap();
        File::create(temp_dir.path().join("once.pdf")).unwrap();

        let root = temp_dir.path().to_path_buf();
        let found = scan_directories(&[root.clone(), root], &ext_set(&["pdf"]), &SilentReporter);
        assert_eq!(found.len(), 1);
    }

    #[test]
    fn test_extensionless_files_match_empty_extension() {
        let temp_dir = TempDir::new().unwrap();
        File::create(temp_dir.path().join("README")).unwrap();
        File::create(temp_dir.path().join("paper.pdf")).unwrap();

        let found = scan_directories(
            &[temp_dir.path().to_path_buf()],
            &ext_set(&[""]),
            &SilentReporter,
        );
        assert_eq!(found.len(), 1);
        assert!(found.contains(&temp_dir.path().join("README")));
    }
}
