//! Document, author, and affiliation records.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::models::{DocumentId, ModelError};

/// Metadata of one academic document.
///
/// Only the identifier and title are mandatory. Every other field is
/// `None` when the source did not provide it, which is distinct from a
/// provided-but-empty value. Records are immutable once built; construct
/// them through [`DocumentBuilder`] or [`Document::from_value`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Document {
    /// The platform-transparent identifier
    id: DocumentId,

    /// Title of the document
    title: String,

    /// Authors, or `None` if unavailable
    authors: Option<Vec<Author>>,

    /// Author-specified keywords, or `None` if unavailable
    keywords: Option<Vec<String>>,

    /// Abstract text, or `None` if unavailable
    r#abstract: Option<String>,

    /// Titles of referenced papers, or `None` if unavailable
    references: Option<Vec<String>>,

    /// Year of publication
    year: Option<i32>,

    /// Name of the venue or outlet the document appeared in
    source: Option<String>,

    /// Kind of venue (for example "Conference Proceedings")
    source_type: Option<String>,

    /// Number of received citations
    citation_count: Option<u32>,

    /// Language of the document
    language: Option<String>,

    /// Name of the publisher
    publisher: Option<String>,

    /// The raw source record these fields were extracted from, kept for
    /// provenance and debugging
    raw: Option<Value>,
}

impl Document {
    /// Build a document from a map of named fields.
    ///
    /// This is the ingestion-facing constructor: adapters that hold a
    /// source payload as JSON hand it over as-is. A field name the record
    /// does not define, or a missing `id`/`title`, fails with a
    /// [`ModelError`] naming the field.
    pub fn from_value(value: Value) -> Result<Self, ModelError> {
        let mut fields = into_fields(value)?;

        let doc = Document {
            id: require(&mut fields, "id")?,
            title: require(&mut fields, "title")?,
            authors: take(&mut fields, "authors")?,
            keywords: take(&mut fields, "keywords")?,
            r#abstract: take(&mut fields, "abstract")?,
            references: take(&mut fields, "references")?,
            year: take(&mut fields, "year")?,
            source: take(&mut fields, "source")?,
            source_type: take(&mut fields, "source_type")?,
            citation_count: take(&mut fields, "citation_count")?,
            language: take(&mut fields, "language")?,
            publisher: take(&mut fields, "publisher")?,
            raw: take(&mut fields, "raw")?,
        };

        reject_unexpected(fields)?;
        Ok(doc)
    }

    /// The document's identifier
    pub fn id(&self) -> &DocumentId {
        &self.id
    }

    /// Title of the document
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Authors, or `None` if unavailable
    pub fn authors(&self) -> Option<&[Author]> {
        self.authors.as_deref()
    }

    /// Author-specified keywords, or `None` if unavailable
    pub fn keywords(&self) -> Option<&[String]> {
        self.keywords.as_deref()
    }

    /// Abstract text, or `None` if unavailable
    pub fn abstract_text(&self) -> Option<&str> {
        self.r#abstract.as_deref()
    }

    /// Whether abstract text is available
    pub fn has_abstract(&self) -> bool {
        self.r#abstract.is_some()
    }

    /// Titles of referenced papers, or `None` if unavailable
    pub fn references(&self) -> Option<&[String]> {
        self.references.as_deref()
    }

    /// Year of publication, or `None` if unavailable
    pub fn year(&self) -> Option<i32> {
        self.year
    }

    /// Name of the venue or outlet, or `None` if unavailable
    pub fn source(&self) -> Option<&str> {
        self.source.as_deref()
    }

    /// Kind of venue, or `None` if unavailable
    pub fn source_type(&self) -> Option<&str> {
        self.source_type.as_deref()
    }

    /// Number of received citations, or `None` if unavailable
    pub fn citation_count(&self) -> Option<u32> {
        self.citation_count
    }

    /// Language of the document, or `None` if unavailable
    pub fn language(&self) -> Option<&str> {
        self.language.as_deref()
    }

    /// Name of the publisher, or `None` if unavailable
    pub fn publisher(&self) -> Option<&str> {
        self.publisher.as_deref()
    }

    /// The raw source record, or `None` if it was not kept
    pub fn raw(&self) -> Option<&Value> {
        self.raw.as_ref()
    }

    /// Returns the author names as a vector, empty when authors are unavailable
    pub fn author_names(&self) -> Vec<&str> {
        self.authors
            .as_deref()
            .map(|authors| authors.iter().map(|a| a.name()).collect())
            .unwrap_or_default()
    }
}

impl std::fmt::Display for Document {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.year {
            Some(year) => write!(f, "{} ({})", self.title, year),
            None => write!(f, "{}", self.title),
        }
    }
}

/// Builder for constructing [`Document`] records
#[derive(Debug, Clone)]
pub struct DocumentBuilder {
    doc: Document,
}

impl DocumentBuilder {
    /// Create a new builder with the required fields
    pub fn new(id: DocumentId, title: impl Into<String>) -> Self {
        Self {
            doc: Document {
                id,
                title: title.into(),
                authors: None,
                keywords: None,
                r#abstract: None,
                references: None,
                year: None,
                source: None,
                source_type: None,
                citation_count: None,
                language: None,
                publisher: None,
                raw: None,
            },
        }
    }

    /// Set authors
    pub fn authors(mut self, authors: Vec<Author>) -> Self {
        self.doc.authors = Some(authors);
        self
    }

    /// Set keywords
    pub fn keywords(mut self, keywords: Vec<String>) -> Self {
        self.doc.keywords = Some(keywords);
        self
    }

    /// Set abstract
    pub fn abstract_text(mut self, abstract_text: impl Into<String>) -> Self {
        self.doc.r#abstract = Some(abstract_text.into());
        self
    }

    /// Set titles of referenced papers
    pub fn references(mut self, references: Vec<String>) -> Self {
        self.doc.references = Some(references);
        self
    }

    /// Set publication year
    pub fn year(mut self, year: i32) -> Self {
        self.doc.year = Some(year);
        self
    }

    /// Set venue name
    pub fn source(mut self, source: impl Into<String>) -> Self {
        self.doc.source = Some(source.into());
        self
    }

    /// Set venue kind
    pub fn source_type(mut self, source_type: impl Into<String>) -> Self {
        self.doc.source_type = Some(source_type.into());
        self
    }

    /// Set citation count
    pub fn citation_count(mut self, count: u32) -> Self {
        self.doc.citation_count = Some(count);
        self
    }

    /// Set language
    pub fn language(mut self, language: impl Into<String>) -> Self {
        self.doc.language = Some(language.into());
        self
    }

    /// Set publisher
    pub fn publisher(mut self, publisher: impl Into<String>) -> Self {
        self.doc.publisher = Some(publisher.into());
        self
    }

    /// Attach the raw source record for provenance
    pub fn raw(mut self, raw: Value) -> Self {
        self.doc.raw = Some(raw);
        self
    }

    /// Build the Document
    pub fn build(self) -> Document {
        self.doc
    }
}

/// Author of a [`Document`]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Author {
    /// Name and surname of the author
    name: String,

    /// ORCID of the author, or `None` if unavailable
    orcid: Option<String>,

    /// Affiliations of the author, or `None` if unavailable
    affiliations: Option<Vec<Affiliation>>,
}

impl Author {
    /// Build an author from a map of named fields, rejecting unknown names
    pub fn from_value(value: Value) -> Result<Self, ModelError> {
        let mut fields = into_fields(value)?;

        let author = Author {
            name: require(&mut fields, "name")?,
            orcid: take(&mut fields, "orcid")?,
            affiliations: take(&mut fields, "affiliations")?,
        };

        reject_unexpected(fields)?;
        Ok(author)
    }

    /// Name and surname of the author
    pub fn name(&self) -> &str {
        &self.name
    }

    /// ORCID of the author, or `None` if unavailable
    pub fn orcid(&self) -> Option<&str> {
        self.orcid.as_deref()
    }

    /// Affiliations of the author, or `None` if unavailable
    pub fn affiliations(&self) -> Option<&[Affiliation]> {
        self.affiliations.as_deref()
    }
}

/// Builder for constructing [`Author`] records
#[derive(Debug, Clone)]
pub struct AuthorBuilder {
    author: Author,
}

impl AuthorBuilder {
    /// Create a new builder with the author's name
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            author: Author {
                name: name.into(),
                orcid: None,
                affiliations: None,
            },
        }
    }

    /// Set the ORCID
    pub fn orcid(mut self, orcid: impl Into<String>) -> Self {
        self.author.orcid = Some(orcid.into());
        self
    }

    /// Set affiliations
    pub fn affiliations(mut self, affiliations: Vec<Affiliation>) -> Self {
        self.author.affiliations = Some(affiliations);
        self
    }

    /// Build the Author
    pub fn build(self) -> Author {
        self.author
    }
}

/// Affiliation of an [`Author`]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Affiliation {
    /// Name of the institution
    name: String,

    /// City of the institution, or `None` if unavailable
    city: Option<String>,

    /// Country of the institution, or `None` if unavailable
    country: Option<String>,
}

impl Affiliation {
    /// Build an affiliation from a map of named fields, rejecting unknown names
    pub fn from_value(value: Value) -> Result<Self, ModelError> {
        let mut fields = into_fields(value)?;

        let affiliation = Affiliation {
            name: require(&mut fields, "name")?,
            city: take(&mut fields, "city")?,
            country: take(&mut fields, "country")?,
        };

        reject_unexpected(fields)?;
        Ok(affiliation)
    }

    /// Name of the institution
    pub fn name(&self) -> &str {
        &self.name
    }

    /// City of the institution, or `None` if unavailable
    pub fn city(&self) -> Option<&str> {
        self.city.as_deref()
    }

    /// Country of the institution, or `None` if unavailable
    pub fn country(&self) -> Option<&str> {
        self.country.as_deref()
    }
}

/// Builder for constructing [`Affiliation`] records
#[derive(Debug, Clone)]
pub struct AffiliationBuilder {
    affiliation: Affiliation,
}

impl AffiliationBuilder {
    /// Create a new builder with the institution's name
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            affiliation: Affiliation {
                name: name.into(),
                city: None,
                country: None,
            },
        }
    }

    /// Set the city
    pub fn city(mut self, city: impl Into<String>) -> Self {
        self.affiliation.city = Some(city.into());
        self
    }

    /// Set the country
    pub fn country(mut self, country: impl Into<String>) -> Self {
        self.affiliation.country = Some(country.into());
        self
    }

    /// Build the Affiliation
    pub fn build(self) -> Affiliation {
        self.affiliation
    }
}

// ========== Field-map helpers ==========

fn into_fields(value: Value) -> Result<Map<String, Value>, ModelError> {
    match value {
        Value::Object(map) => Ok(map),
        other => Err(ModelError::ExpectedObject(json_type(&other))),
    }
}

fn json_type(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

/// Remove an optional field from the map. An absent key and an explicit
/// null both mean "unavailable".
fn take<T: DeserializeOwned>(
    fields: &mut Map<String, Value>,
    name: &'static str,
) -> Result<Option<T>, ModelError> {
    match fields.remove(name) {
        None | Some(Value::Null) => Ok(None),
        Some(value) => serde_json::from_value(value)
            .map(Some)
            .map_err(|source| ModelError::InvalidValue {
                field: name,
                source,
            }),
    }
}

fn require<T: DeserializeOwned>(
    fields: &mut Map<String, Value>,
    name: &'static str,
) -> Result<T, ModelError> {
    take(fields, name)?.ok_or(ModelError::MissingField(name))
}

fn reject_unexpected(fields: Map<String, Value>) -> Result<(), ModelError> {
    match fields.into_iter().next() {
        Some((name, _)) => Err(ModelError::UnexpectedField(name)),
        None => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_document_builder() {
        let doc = DocumentBuilder::new(DocumentId::doi("10.1234/test.1234"), "Test Paper")
            .authors(vec![
                AuthorBuilder::new("John Doe").build(),
                AuthorBuilder::new("Jane Smith").orcid("0000-0002-1825-0097").build(),
            ])
            .abstract_text("This is a test abstract.")
            .year(2023)
            .citation_count(42)
            .build();

        assert_eq!(doc.id().value(), "10.1234/test.1234");
        assert_eq!(doc.title(), "Test Paper");
        assert_eq!(doc.author_names(), vec!["John Doe", "Jane Smith"]);
        assert_eq!(doc.abstract_text(), Some("This is a test abstract."));
        assert!(doc.has_abstract());
        assert_eq!(doc.year(), Some(2023));
        assert_eq!(doc.citation_count(), Some(42));
        assert_eq!(doc.keywords(), None);
        assert_eq!(doc.publisher(), None);
    }

    #[test]
    fn test_document_from_value() {
        let doc = Document::from_value(json!({
            "id": { "value": "10.1234/test", "is_doi": true },
            "title": "Test Paper",
            "authors": [{ "name": "John Doe", "orcid": null, "affiliations": null }],
            "year": 2021,
            "keywords": ["testing", "parsing"],
        }))
        .unwrap();

        assert_eq!(doc.id().value(), "10.1234/test");
        assert!(doc.id().is_doi());
        assert_eq!(doc.author_names(), vec!["John Doe"]);
        assert_eq!(doc.year(), Some(2021));
        assert_eq!(doc.keywords().unwrap().len(), 2);
        assert_eq!(doc.source(), None);
    }

    #[test]
    fn test_document_from_value_unexpected_field() {
        let err = Document::from_value(json!({
            "id": { "value": "10.1234/test", "is_doi": true },
            "title": "T",
            "bogus": 1,
        }))
        .unwrap_err();

        assert!(err.to_string().contains("bogus"));
        match err {
            ModelError::UnexpectedField(name) => assert_eq!(name, "bogus"),
            other => panic!("expected UnexpectedField, got {other:?}"),
        }
    }

    #[test]
    fn test_document_from_value_missing_title() {
        let err = Document::from_value(json!({
            "id": { "value": "10.1234/test" },
        }))
        .unwrap_err();

        match err {
            ModelError::MissingField(name) => assert_eq!(name, "title"),
            other => panic!("expected MissingField, got {other:?}"),
        }
    }

    #[test]
    fn test_document_from_value_null_is_unavailable() {
        let doc = Document::from_value(json!({
            "id": { "value": "E123" },
            "title": "T",
            "abstract": null,
        }))
        .unwrap();

        assert_eq!(doc.abstract_text(), None);
        assert!(!doc.has_abstract());
    }

    #[test]
    fn test_document_from_value_not_an_object() {
        let err = Document::from_value(json!("just a string")).unwrap_err();
        assert!(matches!(err, ModelError::ExpectedObject("a string")));
    }

    #[test]
    fn test_author_from_value_unexpected_field() {
        let err = Author::from_value(json!({
            "name": "John Doe",
            "email": "john@example.com",
        }))
        .unwrap_err();

        assert!(matches!(err, ModelError::UnexpectedField(name) if name == "email"));
    }

    #[test]
    fn test_affiliation_from_value() {
        let affiliation = Affiliation::from_value(json!({
            "name": "University of Amsterdam",
            "city": "Amsterdam",
            "country": "Netherlands",
        }))
        .unwrap();

        assert_eq!(affiliation.name(), "University of Amsterdam");
        assert_eq!(affiliation.city(), Some("Amsterdam"));

        let err = Affiliation::from_value(json!({ "city": "Amsterdam" })).unwrap_err();
        assert!(matches!(err, ModelError::MissingField("name")));
    }

    #[test]
    fn test_display() {
        let with_year = DocumentBuilder::new(DocumentId::title("Some Title"), "Some Title")
            .year(2019)
            .build();
        assert_eq!(with_year.to_string(), "Some Title (2019)");

        let without_year =
            DocumentBuilder::new(DocumentId::title("Some Title"), "Some Title").build();
        assert_eq!(without_year.to_string(), "Some Title");
    }

    #[test]
    fn test_serde_round_trip() {
        let doc = DocumentBuilder::new(DocumentId::doi("10.1234/test"), "Test Paper")
            .keywords(vec!["hpc".to_string()])
            .raw(json!({ "eid": "E123" }))
            .build();

        let value = serde_json::to_value(&doc).unwrap();
        let back: Document = serde_json::from_value(value).unwrap();
        assert_eq!(back, doc);
    }
}
