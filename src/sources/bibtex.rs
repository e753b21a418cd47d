//! BibTeX reference-manager export entries.

use serde::{Deserialize, Serialize};

use crate::models::DocumentId;
use crate::sources::ResolveError;

/// URL prefixes some reference managers prepend to the DOI field
const DOI_URL_PREFIXES: [&str; 2] = ["http://doi.org/", "http://doi.ieeecomputersociety.org/"];

/// One entry from a BibTeX export
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BibtexEntry {
    /// Digital Object Identifier, possibly as a resolver URL
    pub doi: Option<String>,

    /// Title of the entry
    pub title: Option<String>,
}

/// Resolve the identifier of a BibTeX entry.
///
/// Reference managers commonly export the DOI field as a resolver URL;
/// known URL prefixes are stripped so the identifier matches the bare DOI
/// the other sources report.
pub fn document_id(entry: &BibtexEntry) -> Result<DocumentId, ResolveError> {
    if let Some(doi) = entry.doi.as_deref() {
        return Ok(DocumentId::doi(strip_url_prefix(doi)));
    }

    match entry.title.as_deref() {
        Some(title) => {
            tracing::debug!("BibTeX entry has no DOI field, falling back to title");
            Ok(DocumentId::title(title))
        }
        None => Err(ResolveError::MissingTitle),
    }
}

fn strip_url_prefix(doi: &str) -> &str {
    for prefix in DOI_URL_PREFIXES {
        if let Some(stripped) = doi.strip_prefix(prefix) {
            return stripped;
        }
    }
    doi
}
