//! # Research Corpus
//!
//! Collection types for academic paper metadata gathered from multiple
//! research sources.
//!
//! ## Architecture
//!
//! The library is organized into several modules:
//!
//! - [`models`]: Core data structures (Document, Author, DocumentSet, etc.)
//! - [`sources`]: Raw record shapes for the supported research sources and
//!   identifier resolution for each
//! - [`utils`]: Fuzzy duplicate detection and other utilities
//!
//! ## Example
//!
//! ```rust
//! use research_corpus::{DocumentBuilder, DocumentId, DocumentSet};
//!
//! let doc = DocumentBuilder::new(DocumentId::doi("10.1234/example"), "An Example Paper")
//!     .year(2023)
//!     .build();
//!
//! let set: DocumentSet = vec![doc].into();
//! assert_eq!(set.len(), 1);
//! ```

pub mod models;
pub mod sources;
pub mod utils;

// Re-export commonly used types
pub use models::{
    Affiliation, Author, Document, DocumentBuilder, DocumentId, DocumentSet, ModelError,
};
pub use sources::ResolveError;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
