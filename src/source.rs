//! Upstream contract with the text-extraction engine.
//!
//! The extraction engine is a black box as far as this crate is concerned: it
//! produces a full text stream and a flat attribute map. [`SourceDocument`] is
//! the trait an extraction engine (or an adapter around one) implements;
//! [`ExtractedDocument`] is a ready-made in-memory implementation suitable for
//! engines that hand over already-materialized results.

use std::collections::HashMap;
use std::io;

use serde::{Deserialize, Serialize};

/// Attribute key for the document's last-modification date.
pub const ATTR_MODIFICATION_DATE: &str = "mod_date";
/// Attribute key for the document's creation date.
pub const ATTR_CREATION_DATE: &str = "creation_date";
/// Attribute key for the document's author.
pub const ATTR_AUTHOR: &str = "author";
/// Attribute key for the document's title.
pub const ATTR_TITLE: &str = "title";
/// Attribute key for the document's subject.
pub const ATTR_SUBJECT: &str = "subject";
/// Attribute key for the document's keyword list.
pub const ATTR_KEYWORDS: &str = "keywords";
/// Attribute key for the application that created the original document.
pub const ATTR_CREATOR: &str = "creator";
/// Attribute key for the software that produced the extracted form.
pub const ATTR_PRODUCER: &str = "producer";

/// A value attached to a source-document attribute.
///
/// Only text and numeric values propagate into index fields. `Null` and
/// `Binary` values are discarded with a diagnostic during the build.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum AttributeValue {
    /// Explicit null value.
    Null,
    /// Text value.
    Text(String),
    /// Integer value.
    Integer(i64),
    /// Floating point value.
    Float(f64),
    /// Raw byte data. Not representable as an index field.
    Binary(Vec<u8>),
}

impl AttributeValue {
    /// Convert to text if this is a text value.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            AttributeValue::Text(s) => Some(s),
            _ => None,
        }
    }

    /// Convert to numeric string representation.
    pub fn as_numeric(&self) -> Option<String> {
        match self {
            AttributeValue::Integer(i) => Some(i.to_string()),
            AttributeValue::Float(f) => Some(f.to_string()),
            _ => None,
        }
    }

    /// Check whether this is an explicit null.
    pub fn is_null(&self) -> bool {
        matches!(self, AttributeValue::Null)
    }
}

impl From<&str> for AttributeValue {
    fn from(value: &str) -> Self {
        AttributeValue::Text(value.to_string())
    }
}

impl From<String> for AttributeValue {
    fn from(value: String) -> Self {
        AttributeValue::Text(value)
    }
}

impl From<i64> for AttributeValue {
    fn from(value: i64) -> Self {
        AttributeValue::Integer(value)
    }
}

impl From<f64> for AttributeValue {
    fn from(value: f64) -> Self {
        AttributeValue::Float(value)
    }
}

/// An extracted document as produced by the upstream extraction engine.
///
/// `read_text` may perform I/O (the engine may stream text lazily), so it
/// returns `io::Result`; a read failure fails the whole build call.
pub trait SourceDocument {
    /// A human-readable name for the document, used in diagnostics.
    fn name(&self) -> &str;

    /// The full extracted text as a single string.
    fn read_text(&self) -> io::Result<String>;

    /// The extracted attribute map. Iteration order is not significant.
    fn attributes(&self) -> &HashMap<String, AttributeValue>;
}

/// An in-memory source document holding already-extracted content.
#[derive(Debug, Clone, Default)]
pub struct ExtractedDocument {
    name: String,
    text: String,
    attributes: HashMap<String, AttributeValue>,
}

impl ExtractedDocument {
    /// Create a new extracted document with the given name and body text.
    pub fn new<N: Into<String>, T: Into<String>>(name: N, text: T) -> Self {
        ExtractedDocument {
            name: name.into(),
            text: text.into(),
            attributes: HashMap::new(),
        }
    }

    /// Add an attribute, replacing any previous value for the same key.
    pub fn set_attribute<K, V>(&mut self, key: K, value: V)
    where
        K: Into<String>,
        V: Into<AttributeValue>,
    {
        self.attributes.insert(key.into(), value.into());
    }

    /// Builder-style variant of [`set_attribute`](Self::set_attribute).
    pub fn with_attribute<K, V>(mut self, key: K, value: V) -> Self
    where
        K: Into<String>,
        V: Into<AttributeValue>,
    {
        self.set_attribute(key, value);
        self
    }
}

impl SourceDocument for ExtractedDocument {
    fn name(&self) -> &str {
        &self.name
    }

    fn read_text(&self) -> io::Result<String> {
        Ok(self.text.clone())
    }

    fn attributes(&self) -> &HashMap<String, AttributeValue> {
        &self.attributes
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_attribute_value_conversions() {
        assert_eq!(
            AttributeValue::Text("hello".to_string()).as_text(),
            Some("hello")
        );
        assert_eq!(
            AttributeValue::Integer(42).as_numeric(),
            Some("42".to_string())
        );
        assert_eq!(
            AttributeValue::Float(1.5).as_numeric(),
            Some("1.5".to_string())
        );
        assert!(AttributeValue::Null.is_null());
        assert_eq!(AttributeValue::Binary(vec![0x00]).as_text(), None);
    }

    #[test]
    fn test_attribute_value_from() {
        assert_eq!(
            AttributeValue::from("a"),
            AttributeValue::Text("a".to_string())
        );
        assert_eq!(AttributeValue::from(5i64), AttributeValue::Integer(5));
        assert_eq!(AttributeValue::from(2.5f64), AttributeValue::Float(2.5));
    }

    #[test]
    fn test_extracted_document() {
        let doc = ExtractedDocument::new("report.pdf", "body text")
            .with_attribute(ATTR_AUTHOR, "Ada")
            .with_attribute("pages", 5i64);

        assert_eq!(doc.name(), "report.pdf");
        assert_eq!(doc.read_text().unwrap(), "body text");
        assert_eq!(doc.attributes().len(), 2);
        assert_eq!(
            doc.attributes().get(ATTR_AUTHOR),
            Some(&AttributeValue::Text("Ada".to_string()))
        );
    }

    #[test]
    fn test_set_attribute_overwrites() {
        let mut doc = ExtractedDocument::new("a", "");
        doc.set_attribute("k", "v1");
        doc.set_attribute("k", "v2");
        assert_eq!(
            doc.attributes().get("k"),
            Some(&AttributeValue::Text("v2".to_string()))
        );
    }
}
