//! Core data models for academic documents and document collections.

mod collection;
mod document;
mod id;

pub use collection::DocumentSet;
pub use document::{
    Affiliation, AffiliationBuilder, Author, AuthorBuilder, Document, DocumentBuilder,
};
pub use id::DocumentId;

use thiserror::Error;

/// Errors raised while constructing a record from a map of named fields.
///
/// These always indicate a caller bug: the ingestion adapter handed the
/// record a field it does not define, or left out a required one.
#[derive(Debug, Error)]
pub enum ModelError {
    /// The supplied value was not a JSON object
    #[error("expected a map of named fields, got {0}")]
    ExpectedObject(&'static str),

    /// A field name no record field matches
    #[error("got an unexpected field `{0}`")]
    UnexpectedField(String),

    /// A required field was absent or null
    #[error("missing required field `{0}`")]
    MissingField(&'static str),

    /// A field was present but its value failed to deserialize
    #[error("invalid value for field `{field}`: {source}")]
    InvalidValue {
        field: &'static str,
        source: serde_json::Error,
    },
}
