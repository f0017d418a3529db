//! Scan diagnostics reporting

pub mod scan_reporter;

pub use scan_reporter::{CollectingReporter, ScanReporter, SilentReporter, StderrReporter};
