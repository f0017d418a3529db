//! Reporting hooks for directory scan failures
//!
//! A failed walk of one directory never fails the whole scan; the failure is
//! handed to a reporter and the scan moves on to the next directory.

use std::path::{Path, PathBuf};
use std::sync::Mutex;

/// Receives scan failures as they happen
pub trait ScanReporter {
    /// Called once per directory whose walk failed; the directory contributes
    /// nothing further to the scan after this call
    fn on_directory_error(&self, directory: &Path, cause: &walkdir::Error);
}

/// Reports scan failures to stderr
pub struct StderrReporter;

impl ScanReporter for StderrReporter {
    fn on_directory_error(&self, directory: &Path, cause: &walkdir::Error) {
        eprintln!("Error scanning {:?}: {}", directory, cause);
    }
}

/// Swallows scan failures; partial results come back quietly
pub struct SilentReporter;

impl ScanReporter for SilentReporter {
    fn on_directory_error(&self, _directory: &Path, _cause: &walkdir::Error) {}
}

/// Accumulates scan failures for inspection after the call
///
/// The result mapping itself carries no complete-vs-partial flag; callers that
/// need one pass this reporter and check `errors()` afterwards.
#[derive(Default)]
pub struct CollectingReporter {
    errors: Mutex<Vec<(PathBuf, String)>>,
}

impl CollectingReporter {
    pub fn new() -> Self {
        Self::default()
    }

    /// The (directory, cause) pairs recorded so far
    pub fn errors(&self) -> Vec<(PathBuf, String)> {
        self.errors.lock().unwrap().clone()
    }

    pub fn is_empty(&self) -> bool {
        self.errors.lock().unwrap().is_empty()
    }
}

impl ScanReporter for CollectingReporter {
    fn on_directory_error(&self, directory: &Path, cause: &walkdir::Error) {
        self.errors
            .lock()
            .unwrap()
            .push((directory.to_path_buf(), cause.to_string()));
    }
}
