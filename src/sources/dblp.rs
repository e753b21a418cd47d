//! DBLP bibliography-service records.

use serde::{Deserialize, Serialize};

use crate::models::DocumentId;
use crate::sources::ResolveError;

/// One hit from the DBLP publication search API
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DblpResult {
    /// The publication metadata payload
    pub info: DblpInfo,
}

/// The nested `info` object of a DBLP hit
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DblpInfo {
    /// Digital Object Identifier; absent for many older records
    pub doi: Option<String>,

    /// Title of the publication
    pub title: Option<String>,
}

/// Resolve the identifier of a DBLP result.
///
/// The DOI lives under the nested `info` key and is frequently absent from
/// DBLP records; absence is ordinary and falls back to the title.
pub fn document_id(record: &DblpResult) -> Result<DocumentId, ResolveError> {
    if let Some(doi) = record.info.doi.as_deref() {
        return Ok(DocumentId::doi(doi));
    }

    match record.info.title.as_deref() {
        Some(title) => {
            tracing::debug!("DBLP record has no DOI, falling back to title");
            Ok(DocumentId::title(title))
        }
        None => Err(ResolveError::MissingTitle),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_doi_preferred() {
        let record = DblpResult {
            info: DblpInfo {
                doi: Some("10.1145/3297858.3304076".to_string()),
                title: Some("T".to_string()),
            },
        };

        let id = document_id(&record).unwrap();
        assert_eq!(id.value(), "10.1145/3297858.3304076");
        assert!(id.is_doi());
    }

    #[test]
    fn test_missing_doi_falls_back_to_title() {
        let record = DblpResult {
            info: DblpInfo {
                doi: None,
                title: Some("An Untracked Workshop Paper".to_string()),
            },
        };

        let id = document_id(&record).unwrap();
        assert_eq!(id.value(), "An Untracked Workshop Paper");
        assert!(!id.is_doi());
    }

    #[test]
    fn test_missing_everything() {
        let record = DblpResult::default();
        assert_eq!(document_id(&record), Err(ResolveError::MissingTitle));
    }

    #[test]
    fn test_parse_payload() {
        // The search API wraps publication metadata in an `info` object and
        // carries plenty of fields this crate does not model
        let record: DblpResult = serde_json::from_str(
            r#"{ "info": { "title": "Paper", "venue": "SIGMOD", "year": "2019" }, "@score": "5" }"#,
        )
        .unwrap();

        let id = document_id(&record).unwrap();
        assert_eq!(id.value(), "Paper");
        assert!(!id.is_doi());
    }
}
