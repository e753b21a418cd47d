//! Basic usage example for the Research Corpus library.
//!
//! This example demonstrates how to ingest records from different research
//! sources and combine the results with the set operations.

use research_corpus::models::{AuthorBuilder, DocumentBuilder, DocumentSet};
use research_corpus::sources::{self, BibtexEntry, DblpResult, ScopusAbstract};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Raw records as three different source adapters would hand them over
    let scopus: ScopusAbstract = serde_json::from_str(
        r#"{ "doi": "10.1145/3297858.3304076", "eid": "2-s2.0-85063000000", "title": "A Shared Paper" }"#,
    )?;
    let dblp: DblpResult = serde_json::from_str(
        r#"{ "info": { "doi": "10.1145/3297858.3304076", "title": "A Shared Paper" } }"#,
    )?;
    let bibtex: BibtexEntry = serde_json::from_str(
        r#"{ "doi": "http://doi.org/10.1016/j.future.2020.01.001", "title": "Another Paper" }"#,
    )?;

    // Resolve identifiers and build documents
    let from_scopus = DocumentBuilder::new(sources::scopus::document_id(&scopus)?, "A Shared Paper")
        .authors(vec![AuthorBuilder::new("Jane Smith").build()])
        .year(2019)
        .build();
    let from_dblp =
        DocumentBuilder::new(sources::dblp::document_id(&dblp)?, "A Shared Paper").build();
    let from_bibtex = DocumentBuilder::new(sources::bibtex::document_id(&bibtex)?, "Another Paper")
        .year(2020)
        .build();

    let query_a: DocumentSet = vec![from_scopus].into();
    let query_b: DocumentSet = vec![from_dblp, from_bibtex].into();

    // Union removes the cross-source duplicate by DOI
    let combined = query_a.union(&query_b);

    println!("Query A: {} documents", query_a.len());
    println!("Query B: {} documents", query_b.len());
    println!("Combined (duplicates removed): {} documents\n", combined.len());

    for (i, doc) in combined.iter().enumerate() {
        println!("{}. {}", i + 1, doc);
        println!("   ID: {}", doc.id());
        if !doc.author_names().is_empty() {
            println!("   Authors: {}", doc.author_names().join("; "));
        }
    }

    // Only documents unique to query B
    let only_b = query_b.difference(&query_a);
    println!("\nDocuments only in query B: {}", only_b.len());

    Ok(())
}
