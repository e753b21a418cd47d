//! Ordered collections of documents with set-like operations.

use std::collections::HashSet;
use std::hash::Hash;
use std::ops::Index;
use std::slice::SliceIndex;
use std::sync::Arc;

use crate::models::Document;

/// Ordered collection of documents retrieved from search queries.
///
/// Documents are shared by reference: filtering or splitting a set never
/// copies the underlying records, so the same document may be aliased into
/// any number of sets. All operations are read-only and return a new set;
/// insertion order is preserved throughout.
///
/// Equivalence for [`filter_duplicates`](DocumentSet::filter_duplicates),
/// [`union`](DocumentSet::union), and [`difference`](DocumentSet::difference)
/// defaults to the document's identifier value and can be replaced with any
/// key function through the `_by` variants.
#[derive(Debug, Clone, Default)]
pub struct DocumentSet {
    docs: Vec<Arc<Document>>,
}

/// Default equivalence key: the identifier value
fn id_key(doc: &Document) -> String {
    doc.id().value().to_string()
}

impl DocumentSet {
    /// Create an empty set
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of documents in the set
    pub fn len(&self) -> usize {
        self.docs.len()
    }

    /// Whether the set contains no documents
    pub fn is_empty(&self) -> bool {
        self.docs.is_empty()
    }

    /// The document at `index`, or `None` when out of range
    pub fn get(&self, index: usize) -> Option<&Arc<Document>> {
        self.docs.get(index)
    }

    /// Iterate over the documents in collection order.
    ///
    /// The iterator borrows the set, so iterating twice yields the same
    /// sequence both times.
    pub fn iter(&self) -> std::slice::Iter<'_, Arc<Document>> {
        self.docs.iter()
    }

    /// The documents as a slice
    pub fn as_slice(&self) -> &[Arc<Document>] {
        &self.docs
    }

    /// Returns a new set containing, in order, exactly the documents for
    /// which the predicate holds.
    pub fn filter(&self, mut predicate: impl FnMut(&Document) -> bool) -> Self {
        Self {
            docs: self
                .docs
                .iter()
                .filter(|doc| predicate(doc))
                .cloned()
                .collect(),
        }
    }

    /// Remove duplicate documents, keeping the first occurrence of each
    /// identifier value. Relative order of the survivors is preserved.
    pub fn filter_duplicates(&self) -> Self {
        self.filter_duplicates_by(id_key)
    }

    /// Remove duplicate documents under a caller-supplied equivalence key.
    ///
    /// Scans in order; a document survives only if its key has not been
    /// seen earlier in the scan.
    pub fn filter_duplicates_by<K, F>(&self, mut key: F) -> Self
    where
        K: Hash + Eq,
        F: FnMut(&Document) -> K,
    {
        let mut seen = HashSet::new();
        let docs = self
            .docs
            .iter()
            .filter(|doc| seen.insert(key(doc)))
            .cloned()
            .collect();
        Self { docs }
    }

    /// Union of this set and another, with duplicates removed.
    ///
    /// Equivalent to concatenating `self` and `other` and applying
    /// [`filter_duplicates`](Self::filter_duplicates): every document of
    /// `self` survives, and documents of `other` survive only when their
    /// key has not appeared before.
    pub fn union(&self, other: &DocumentSet) -> Self {
        self.union_by(other, id_key)
    }

    /// Union under a caller-supplied equivalence key
    pub fn union_by<K, F>(&self, other: &DocumentSet, key: F) -> Self
    where
        K: Hash + Eq,
        F: FnMut(&Document) -> K,
    {
        let mut docs = Vec::with_capacity(self.docs.len() + other.docs.len());
        docs.extend(self.docs.iter().cloned());
        docs.extend(other.docs.iter().cloned());
        Self { docs }.filter_duplicates_by(key)
    }

    /// Documents of this set whose key does not occur in `other`.
    ///
    /// A pure membership filter: duplicates within `self` are kept.
    pub fn difference(&self, other: &DocumentSet) -> Self {
        self.difference_by(other, id_key)
    }

    /// Difference under a caller-supplied equivalence key
    pub fn difference_by<K, F>(&self, other: &DocumentSet, mut key: F) -> Self
    where
        K: Hash + Eq,
        F: FnMut(&Document) -> K,
    {
        let other_keys: HashSet<K> = other.docs.iter().map(|doc| key(doc)).collect();
        let docs = self
            .docs
            .iter()
            .filter(|doc| !other_keys.contains(&key(doc)))
            .cloned()
            .collect();
        Self { docs }
    }
}

impl<I: SliceIndex<[Arc<Document>]>> Index<I> for DocumentSet {
    type Output = I::Output;

    fn index(&self, index: I) -> &Self::Output {
        &self.docs[index]
    }
}

impl From<Vec<Arc<Document>>> for DocumentSet {
    fn from(docs: Vec<Arc<Document>>) -> Self {
        Self { docs }
    }
}

impl From<Vec<Document>> for DocumentSet {
    fn from(docs: Vec<Document>) -> Self {
        docs.into_iter().collect()
    }
}

impl FromIterator<Arc<Document>> for DocumentSet {
    fn from_iter<T: IntoIterator<Item = Arc<Document>>>(iter: T) -> Self {
        Self {
            docs: iter.into_iter().collect(),
        }
    }
}

impl FromIterator<Document> for DocumentSet {
    fn from_iter<T: IntoIterator<Item = Document>>(iter: T) -> Self {
        Self {
            docs: iter.into_iter().map(Arc::new).collect(),
        }
    }
}

impl<'a> IntoIterator for &'a DocumentSet {
    type Item = &'a Arc<Document>;
    type IntoIter = std::slice::Iter<'a, Arc<Document>>;

    fn into_iter(self) -> Self::IntoIter {
        self.docs.iter()
    }
}

impl IntoIterator for DocumentSet {
    type Item = Arc<Document>;
    type IntoIter = std::vec::IntoIter<Arc<Document>>;

    fn into_iter(self) -> Self::IntoIter {
        self.docs.into_iter()
    }
}
