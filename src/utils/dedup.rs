//! Fuzzy duplicate detection for documents across sources.

use std::collections::HashSet;
use strsim::jaro_winkler;

use crate::models::{Document, DocumentSet};

/// Minimum Jaro-Winkler title similarity for two documents to count as
/// duplicates when their identifiers cannot settle it
const TITLE_SIMILARITY_THRESHOLD: f64 = 0.95;

/// Title-equivalence key for the set algebra.
///
/// Hand this to
/// [`filter_duplicates_by`](DocumentSet::filter_duplicates_by) or
/// [`union_by`](DocumentSet::union_by) to deduplicate on normalized titles
/// instead of identifier values.
pub fn title_key(doc: &Document) -> String {
    normalize_title(&doc.title().to_lowercase())
}

/// Normalize a title for comparison
pub fn normalize_title(title: &str) -> String {
    title
        .chars()
        .filter(|c| c.is_alphanumeric() || c.is_whitespace())
        .collect::<String>()
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
}

/// Find likely duplicate documents within a set.
///
/// Returns groups of document indices that are duplicates of each other.
/// Unlike the exact-key dedup of [`DocumentSet`], this also catches records
/// whose titles differ in punctuation or spelling between sources.
pub fn find_duplicates(set: &DocumentSet) -> Vec<Vec<usize>> {
    let mut groups: Vec<Vec<usize>> = Vec::new();
    let mut processed: HashSet<usize> = HashSet::new();

    for i in 0..set.len() {
        if processed.contains(&i) {
            continue;
        }

        let mut group = vec![i];

        for j in (i + 1)..set.len() {
            if processed.contains(&j) {
                continue;
            }

            if are_duplicates(&set[i], &set[j]) {
                group.push(j);
                processed.insert(j);
            }
        }

        if group.len() > 1 {
            tracing::debug!("found duplicate group of {} documents", group.len());
            groups.push(group);
        }

        processed.insert(i);
    }

    groups
}

/// Check if two documents are likely duplicates
fn are_duplicates(a: &Document, b: &Document) -> bool {
    // Matching DOIs settle it outright
    if a.id().is_doi()
        && b.id().is_doi()
        && a.id().value().eq_ignore_ascii_case(b.id().value())
    {
        return true;
    }

    let title_a = a.title().trim().to_lowercase();
    let title_b = b.title().trim().to_lowercase();

    // High title similarity, backed by overlapping author names
    if jaro_winkler(&title_a, &title_b) >= TITLE_SIMILARITY_THRESHOLD && authors_match(a, b) {
        return true;
    }

    // Exact title match after cleaning
    normalize_title(&title_a) == normalize_title(&title_b) && authors_match(a, b)
}

/// Check if author names approximately match
fn authors_match(a: &Document, b: &Document) -> bool {
    let names_a: HashSet<String> = a
        .author_names()
        .iter()
        .map(|s| s.trim().to_lowercase())
        .collect();
    let names_b: HashSet<String> = b
        .author_names()
        .iter()
        .map(|s| s.trim().to_lowercase())
        .collect();

    // If one side has no author info, we cannot compare; assume a match
    if names_a.is_empty() || names_b.is_empty() {
        return true;
    }

    names_a.intersection(&names_b).count() > 0
}
