//! Citation-key based file finder
//!
//! Associates bibliography entries with files on disk by comparing file base
//! names against each entry's citation key, recursively under a set of
//! directories.

pub mod core;
pub mod reporting;
pub mod scanner;

pub use crate::core::matcher;
pub use crate::scanner::file_scanner;

/// Re-export commonly used types
pub mod prelude {
    pub use crate::core::citekey::{legal_key_chars, LEGAL_KEY_CHARS};
    pub use crate::core::entry::BibEntry;
    pub use crate::core::matcher::{
        associate_files, base_name, find_associated_files, matches_prefix,
    };
    pub use crate::reporting::scan_reporter::{
        CollectingReporter, ScanReporter, SilentReporter, StderrReporter,
    };
    pub use crate::scanner::file_scanner::{file_extension, scan_directories, split_extension};
}
