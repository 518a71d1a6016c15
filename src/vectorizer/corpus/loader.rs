//! Flat-file corpus parsing.
//!
//! Documents are delimited by a line whose first character is a form feed.
//! The line right after a separator is the document identifier, taken verbatim
//! whatever it contains. Every later non-blank line up to the next separator
//! is document text.

use std::path::Path;

use tracing::debug;

use crate::vectorizer::lexicon::{read_source, LoadStatus};

/// First character of a document separator line
pub const SEPARATOR: char = '\u{0C}';

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Document {
    pub id: String,
    /// text lines joined, each followed by a single space
    pub text: String,
}

impl Document {
    pub fn new<I: Into<String>, T: Into<String>>(id: I, text: T) -> Self {
        Self {
            id: id.into(),
            text: text.into(),
        }
    }
}

/// Parse a corpus held in memory.
///
/// A document is emitted only when it has a non-empty identifier. Text buffered
/// while no identifier is held carries over into the next identified document,
/// so lines before the first separator end up at the front of the first
/// document's text.
pub fn parse_documents(input: &str) -> Vec<Document> {
    let mut documents = Vec::new();
    let mut lines = input.lines();
    let mut buffer = String::new();
    let mut doc_id = String::new();

    while let Some(line) = lines.next() {
        if line.is_empty() {
            continue;
        }
        if line.starts_with(SEPARATOR) {
            if !doc_id.is_empty() {
                documents.push(Document::new(doc_id.as_str(), std::mem::take(&mut buffer)));
            }
            doc_id = lines.next().unwrap_or_default().to_string();
        } else {
            buffer.push_str(line);
            buffer.push(' ');
        }
    }
    if !doc_id.is_empty() {
        documents.push(Document::new(doc_id, buffer));
    }
    documents
}

/// Load and parse a corpus file.
/// An unreadable file yields no documents and `LoadStatus::Missing`.
pub fn load_documents<P: AsRef<Path>>(path: P) -> (Vec<Document>, LoadStatus) {
    let path = path.as_ref();
    let (text, status) = read_source(path);
    let documents = parse_documents(&text);
    debug!(path = %path.display(), documents = documents.len(), "corpus loaded");
    (documents, status)
}
