//! Scopus citation-database records.

use serde::{Deserialize, Serialize};

use crate::models::DocumentId;
use crate::sources::ResolveError;

/// Abstract record as returned by the Scopus citation database.
///
/// Scopus reports an empty string rather than omitting the field for
/// records that have no DOI or EID assigned.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ScopusAbstract {
    /// Digital Object Identifier
    pub doi: Option<String>,

    /// Scopus electronic identifier
    pub eid: Option<String>,

    /// Title of the record
    pub title: Option<String>,
}

/// Resolve the identifier of a Scopus abstract.
///
/// Falls back DOI → EID → title. Empty strings count as absent.
pub fn document_id(record: &ScopusAbstract) -> Result<DocumentId, ResolveError> {
    if let Some(doi) = non_empty(record.doi.as_deref()) {
        return Ok(DocumentId::doi(doi));
    }

    if let Some(eid) = non_empty(record.eid.as_deref()) {
        tracing::debug!("Scopus record has no DOI, using EID {}", eid);
        return Ok(DocumentId::secondary(eid));
    }

    match non_empty(record.title.as_deref()) {
        Some(title) => {
            tracing::debug!("Scopus record has no DOI or EID, falling back to title");
            Ok(DocumentId::title(title))
        }
        None => Err(ResolveError::MissingTitle),
    }
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_doi_preferred() {
        let record = ScopusAbstract {
            doi: Some("10.1/xyz".to_string()),
            eid: Some("E123".to_string()),
            title: Some("T".to_string()),
        };

        let id = document_id(&record).unwrap();
        assert_eq!(id.value(), "10.1/xyz");
        assert!(id.is_doi());
    }

    #[test]
    fn test_empty_doi_falls_back_to_eid() {
        let record = ScopusAbstract {
            doi: Some(String::new()),
            eid: Some("E123".to_string()),
            title: Some("T".to_string()),
        };

        let id = document_id(&record).unwrap();
        assert_eq!(id.value(), "E123");
        assert!(!id.is_doi());
    }

    #[test]
    fn test_title_is_last_resort() {
        let record = ScopusAbstract {
            doi: None,
            eid: Some(String::new()),
            title: Some("Only a Title".to_string()),
        };

        let id = document_id(&record).unwrap();
        assert_eq!(id.value(), "Only a Title");
        assert!(!id.is_doi());
    }

    #[test]
    fn test_no_identifying_field_at_all() {
        let record = ScopusAbstract::default();
        assert_eq!(document_id(&record), Err(ResolveError::MissingTitle));
    }

    #[test]
    fn test_parse_payload() {
        let record: ScopusAbstract = serde_json::from_str(
            r#"{ "doi": "10.1016/j.future.2020.01.001", "eid": "2-s2.0-85000000000", "title": "T", "coverDate": "2020-03-01" }"#,
        )
        .unwrap();

        let id = document_id(&record).unwrap();
        assert_eq!(id.value(), "10.1016/j.future.2020.01.001");
    }
}
