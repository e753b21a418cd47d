//! Raw record shapes for the supported research sources.
//!
//! Each source module declares the shape an ingestion adapter parses the
//! source's payload into, plus a `document_id` function that resolves the
//! shape to a [`DocumentId`](crate::models::DocumentId) following that
//! source's identifier fallback chain. Which resolver runs is decided by
//! the adapter that owns the payload, never by inspecting the record at
//! runtime.
//!
//! # Adding a New Source
//!
//! To add support for a new source:
//!
//! 1. Create a new module declaring the raw record shape. Derive serde
//!    `Deserialize` so adapters can parse service payloads straight into it.
//! 2. Implement `document_id` for the shape, preferring a DOI over
//!    source-local identifiers over the title.
//! 3. Re-export the shape from this module.
//!
//! The existing sources stay untouched.

pub mod bibtex;
pub mod dblp;
pub mod scopus;

pub use bibtex::BibtexEntry;
pub use dblp::{DblpInfo, DblpResult};
pub use scopus::ScopusAbstract;

use thiserror::Error;

/// Errors that can occur while resolving a document identifier
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ResolveError {
    /// The record carries no identifying field at all: no DOI, no
    /// secondary identifier, and no title to fall back to.
    #[error("record has no identifier and no title to fall back to")]
    MissingTitle,
}
