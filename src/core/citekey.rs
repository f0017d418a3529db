//! Legal citation-key character set
//!
//! Generated citation keys are built from ASCII letters, digits, and the
//! key-pattern special characters `_` and `:`. The matcher uses this set for
//! its boundary-character rule: a file name that continues a key with one of
//! these characters most likely belongs to a different, longer key.

use std::collections::HashSet;

/// Characters permitted inside a generated citation key
pub const LEGAL_KEY_CHARS: &str =
    "abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789_:";

lazy_static::lazy_static! {
    static ref LEGAL_KEY_CHAR_SET: HashSet<char> = LEGAL_KEY_CHARS.chars().collect();
}

/// The legal key characters as a set, built once
pub fn legal_key_chars() -> &'static HashSet<char> {
    &LEGAL_KEY_CHAR_SET
}
