//! Configuration controlling how extracted documents become index documents.
//!
//! An [`IndexDocConfig`] decides the name of the body-text field, how source
//! attributes map to field names, whether unmapped attributes are copied, and
//! the store/index/tokenize treatment applied to body text and metadata
//! fields.
//!
//! Configurations are plain data: they are read-only during a build call and
//! may be mutated freely between calls. No validation is performed on field
//! names; empty names or names colliding with the body-text field are the
//! caller's responsibility.

use std::collections::{HashMap, HashSet};

use serde::{Deserialize, Serialize};

use crate::source::{ATTR_CREATION_DATE, ATTR_MODIFICATION_DATE};

/// The default name assigned to the field containing the main body of text
/// extracted from a source document: `"text"`.
pub const DEFAULT_BODY_TEXT_FIELD_NAME: &str = "text";

/// Store/index/tokenize treatment applied to one class of fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldSettings {
    /// Whether the original field value is retained for retrieval.
    pub store: bool,
    /// Whether the field is made searchable.
    pub index: bool,
    /// Whether the value is split into discrete terms or kept atomic.
    pub tokenize: bool,
}

impl FieldSettings {
    /// Create a new settings triple.
    pub fn new(store: bool, index: bool, tokenize: bool) -> Self {
        FieldSettings {
            store,
            index,
            tokenize,
        }
    }
}

/// Configuration for building index documents from extracted content.
///
/// Defaults:
/// - all source attributes are copied to the resulting index document,
/// - the main text content is tokenized and indexed, but not stored,
/// - metadata attributes are tokenized, stored, and indexed,
/// - the modification-date and creation-date attributes are treated as
///   date-valued and normalized to a sortable timestamp form.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IndexDocConfig {
    body_text_field_name: String,
    metadata_field_mapping: HashMap<String, String>,
    copy_all_attributes: bool,
    body_text_settings: FieldSettings,
    metadata_settings: FieldSettings,
    date_attributes: HashSet<String>,
}

impl IndexDocConfig {
    /// Create a new config object with all defaults.
    pub fn new() -> Self {
        Self::with_body_text_field_name(DEFAULT_BODY_TEXT_FIELD_NAME)
    }

    /// Create a new config object retaining all defaults except the name
    /// assigned to the field holding the main text content.
    pub fn with_body_text_field_name<S: Into<String>>(name: S) -> Self {
        IndexDocConfig {
            body_text_field_name: name.into(),
            metadata_field_mapping: HashMap::new(),
            copy_all_attributes: true,
            body_text_settings: FieldSettings::new(false, true, true),
            metadata_settings: FieldSettings::new(true, true, true),
            date_attributes: [ATTR_MODIFICATION_DATE, ATTR_CREATION_DATE]
                .iter()
                .map(|s| s.to_string())
                .collect(),
        }
    }

    /// Get the name assigned to fields containing body text content.
    pub fn body_text_field_name(&self) -> &str {
        &self.body_text_field_name
    }

    /// Set the name assigned to fields containing body text content.
    pub fn set_body_text_field_name<S: Into<String>>(&mut self, name: S) {
        self.body_text_field_name = name.into();
    }

    /// Get the field name an attribute is explicitly mapped to, if any.
    pub fn metadata_field_mapping_for(&self, attribute: &str) -> Option<&str> {
        self.metadata_field_mapping.get(attribute).map(|s| s.as_str())
    }

    /// Get a copy of the full attribute-to-field-name mapping.
    ///
    /// Returns a clone so callers cannot mutate internal state through the
    /// accessor.
    pub fn metadata_field_mapping(&self) -> HashMap<String, String> {
        self.metadata_field_mapping.clone()
    }

    /// Map an attribute key to a field name, overwriting any previous entry.
    pub fn set_metadata_field_mapping<K, V>(&mut self, attribute: K, field_name: V)
    where
        K: Into<String>,
        V: Into<String>,
    {
        self.metadata_field_mapping
            .insert(attribute.into(), field_name.into());
    }

    /// Whether attributes without an explicit mapping are copied to the
    /// output document under their own names.
    pub fn copy_all_attributes(&self) -> bool {
        self.copy_all_attributes
    }

    /// Set whether unmapped attributes are copied through.
    pub fn set_copy_all_attributes(&mut self, copy: bool) {
        self.copy_all_attributes = copy;
    }

    /// Get the settings applied to the body-text field.
    pub fn body_text_settings(&self) -> FieldSettings {
        self.body_text_settings
    }

    /// Set the store/index/tokenize treatment for the body-text field.
    pub fn set_body_text_settings(&mut self, store: bool, index: bool, tokenize: bool) {
        self.body_text_settings = FieldSettings::new(store, index, tokenize);
    }

    /// Get the settings applied to metadata fields.
    pub fn metadata_settings(&self) -> FieldSettings {
        self.metadata_settings
    }

    /// Set the store/index/tokenize treatment for metadata fields.
    pub fn set_metadata_settings(&mut self, store: bool, index: bool, tokenize: bool) {
        self.metadata_settings = FieldSettings::new(store, index, tokenize);
    }

    /// Whether an attribute key is treated as date-valued.
    pub fn is_date_attribute(&self, attribute: &str) -> bool {
        self.date_attributes.contains(attribute)
    }

    /// Add an attribute key to the set treated as date-valued.
    pub fn add_date_attribute<S: Into<String>>(&mut self, attribute: S) {
        self.date_attributes.insert(attribute.into());
    }

    /// Remove an attribute key from the date-valued set.
    pub fn remove_date_attribute(&mut self, attribute: &str) {
        self.date_attributes.remove(attribute);
    }

    /// Get a copy of the set of attribute keys treated as date-valued.
    pub fn date_attributes(&self) -> HashSet<String> {
        self.date_attributes.clone()
    }
}

impl Default for IndexDocConfig {
    fn default() -> Self {
        Self::new()
    }
}
