//! Platform-transparent document identity.

use serde::{Deserialize, Serialize};

/// The canonical identity of a document across research sources.
///
/// An identifier prefers a persistent identifier (a DOI) over source-local
/// identifiers over the document title. Two documents carrying the same
/// identifier value are treated as the same publication by the default
/// deduplication key of a document set.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DocumentId {
    value: String,

    #[serde(default)]
    is_doi: bool,
}

impl DocumentId {
    /// Identifier backed by a DOI
    pub fn doi(value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            is_doi: true,
        }
    }

    /// Identifier backed by a source-local id (for example a Scopus EID)
    pub fn secondary(value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            is_doi: false,
        }
    }

    /// Title-text identifier, the last resort when no better id is known
    pub fn title(value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            is_doi: false,
        }
    }

    /// The identifier value
    pub fn value(&self) -> &str {
        &self.value
    }

    /// Whether the value is a persistent identifier
    pub fn is_doi(&self) -> bool {
        self.is_doi
    }
}

impl std::fmt::Display for DocumentId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.is_doi {
            write!(f, "doi:{}", self.value)
        } else {
            write!(f, "{}", self.value)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_constructors() {
        let id = DocumentId::doi("10.1234/test");
        assert_eq!(id.value(), "10.1234/test");
        assert!(id.is_doi());

        let id = DocumentId::secondary("2-s2.0-85000000000");
        assert_eq!(id.value(), "2-s2.0-85000000000");
        assert!(!id.is_doi());

        let id = DocumentId::title("A Paper With No Identifiers");
        assert_eq!(id.value(), "A Paper With No Identifiers");
        assert!(!id.is_doi());
    }

    #[test]
    fn test_display() {
        assert_eq!(DocumentId::doi("10.1234/test").to_string(), "doi:10.1234/test");
        assert_eq!(DocumentId::title("Some Title").to_string(), "Some Title");
    }

    #[test]
    fn test_deserialize_defaults_is_doi() {
        let id: DocumentId = serde_json::from_value(serde_json::json!({
            "value": "2-s2.0-85000000000"
        }))
        .unwrap();
        assert!(!id.is_doi());
    }
}
