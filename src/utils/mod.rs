//! Utility modules supporting document collections.
//!
//! - [`find_duplicates`]: locate likely duplicate documents using DOI
//!   matching and title similarity
//! - [`normalize_title`]: strip punctuation and collapse whitespace for
//!   title comparison
//! - [`title_key`]: title-equivalence key for the set algebra

mod dedup;

pub use dedup::{find_duplicates, normalize_title, title_key};
