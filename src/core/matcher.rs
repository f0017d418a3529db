//! Citation-key based file association
//!
//! Each candidate file is assigned to at most one entry: first entry whose key
//! equals the file's base name, otherwise (unless exact-only) first entry
//! whose key is a prefix of the base name ending at a non-key character. The
//! exact pass runs over ALL entries before any prefix match is considered, so
//! a short exact key always beats a longer entry's prefix claim.

use std::collections::{HashMap, HashSet};
use std::path::PathBuf;

use crate::core::citekey::legal_key_chars;
use crate::core::entry::BibEntry;
use crate::reporting::scan_reporter::ScanReporter;
use crate::scanner::file_scanner::{scan_directories, split_extension};

/// A file name with its extension suffix removed
pub fn base_name(file_name: &str) -> &str {
    split_extension(file_name).0
}

/// Whether `key` claims `base_name` as a prefix match
///
/// True when `base_name` starts with `key` and the character right after the
/// key, if any, is not in `key_chars`. A legal-key continuation ("JabRefExtra"
/// for key "JabRef") indicates a different, longer key and is rejected;
/// separators like "JabRef-notes" are accepted.
pub fn matches_prefix(base_name: &str, key: &str, key_chars: &HashSet<char>) -> bool {
    if !base_name.starts_with(key) {
        return false;
    }
    match base_name[key.len()..].chars().next() {
        None => true,
        Some(boundary) => !key_chars.contains(&boundary),
    }
}

fn usable_key(entry: &BibEntry) -> Option<&str> {
    entry
        .citation_key()
        .filter(|key| !key.trim().is_empty())
}

/// Assign each candidate file to at most one entry
///
/// Entries with no matching file are absent from the returned map. Candidates
/// are processed in sorted order, so paths within an entry come back sorted
/// and repeated calls over the same inputs yield the same mapping.
///
/// # Arguments
/// * `entries` - Entries in priority order; first match wins within a pass
/// * `candidates` - Deduplicated files, typically from `scan_directories`
/// * `exact_key_only` - Disables the prefix pass entirely
/// * `key_chars` - Characters legal inside a generated citation key, used by
///   the boundary rule
pub fn associate_files<'a>(
    entries: &'a [BibEntry],
    candidates: &HashSet<PathBuf>,
    exact_key_only: bool,
    key_chars: &HashSet<char>,
) -> HashMap<&'a BibEntry, Vec<PathBuf>> {
    let mut result: HashMap<&BibEntry, Vec<PathBuf>> = HashMap::new();

    let mut files: Vec<&PathBuf> = candidates.iter().collect();
    files.sort();

    for file in files {
        let name = match file.file_name() {
            Some(name) => name.to_string_lossy(),
            None => continue,
        };
        let stem = base_name(&name);

        let exact = entries
            .iter()
            .find(|entry| usable_key(entry) == Some(stem));

        let matched = exact.or_else(|| {
            if exact_key_only {
                return None;
            }
            entries.iter().find(|entry| {
                usable_key(entry)
                    .map(|key| matches_prefix(stem, key, key_chars))
                    .unwrap_or(false)
            })
        });

        if let Some(entry) = matched {
            result.entry(entry).or_default().push(file.clone());
        }
    }

    result
}

/// Scan the given directories and associate the discovered files with entries
///
/// Convenience wrapper over `scan_directories` + `associate_files` using the
/// default legal key character set. Every call performs a fresh walk.
pub fn find_associated_files<'a>(
    entries: &'a [BibEntry],
    directories: &[PathBuf],
    extensions: &HashSet<String>,
    exact_key_only: bool,
    reporter: &dyn ScanReporter,
) -> HashMap<&'a BibEntry, Vec<PathBuf>> {
    let candidates = scan_directories(directories, extensions, reporter);
    associate_files(entries, &candidates, exact_key_only, legal_key_chars())
}
