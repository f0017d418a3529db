//! Bibliography entry handle

use serde::{Deserialize, Serialize};

/// A bibliography entry as seen by the file finder: an identifier plus an
/// optional citation key. The finder only ever reads the key; everything else
/// about an entry lives elsewhere.
///
/// Two entries compare equal when both fields are equal, which is what the
/// result map keys on. Identifiers are expected to be unique per input list.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct BibEntry {
    id: String,
    citation_key: Option<String>,
}

impl BibEntry {
    /// Create an entry without a citation key
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            citation_key: None,
        }
    }

    /// Create an entry with a citation key
    pub fn with_citation_key(id: impl Into<String>, key: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            citation_key: Some(key.into()),
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    /// The citation key as stored; may be blank even when present
    pub fn citation_key(&self) -> Option<&str> {
        self.citation_key.as_deref()
    }

    pub fn set_citation_key(&mut self, key: Option<String>) {
        self.citation_key = key;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_citation_key_accessor() {
        let mut entry = BibEntry::new("e1");
        assert_eq!(entry.citation_key(), None);

        entry.set_citation_key(Some("Smith2020".to_string()));
        assert_eq!(entry.citation_key(), Some("Smith2020"));

        let other = BibEntry::with_citation_key("e2", "Smith2020");
        assert_eq!(other.citation_key(), Some("Smith2020"));
        assert_ne!(entry, other);
    }
}
