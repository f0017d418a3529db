//! File scanning and collection functionality

pub mod file_scanner;

pub use file_scanner::{file_extension, scan_directories, split_extension};
