//! Entry model and key-matching logic

pub mod citekey;
pub mod entry;
pub mod matcher;

pub use citekey::{legal_key_chars, LEGAL_KEY_CHARS};
pub use entry::BibEntry;
pub use matcher::{associate_files, find_associated_files};
