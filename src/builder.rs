//! End-to-end conversion of an extracted document into an index document.
//!
//! [`build_document`] pulls the body text and attribute map from a
//! [`SourceDocument`], applies an [`IndexDocConfig`], and hands one field at a
//! time to the process-wide bound [`VersionAdapter`]. Conversion is
//! best-effort per attribute: a null value, an unsupported value type, or an
//! unparseable date string never fails the build; each such anomaly is
//! recorded as a [`Diagnostic`] (and logged) while the rest of the document's
//! fields are still produced. Only a missing backend binding or an upstream
//! read failure fails the call.
//!
//! [`VersionAdapter`]: crate::backend::VersionAdapter

use log::{debug, warn};
use serde::{Deserialize, Serialize};

use crate::backend::field::IndexDocument;
use crate::backend::select;
use crate::config::IndexDocConfig;
use crate::datetime;
use crate::error::Result;
use crate::source::{AttributeValue, SourceDocument};

/// Why an attribute produced no field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SkipReason {
    /// The attribute value was null.
    NullValue,
    /// The attribute value was neither text nor numeric.
    UnsupportedType,
    /// No explicit mapping existed and attribute copying is disabled.
    Unmapped,
}

/// A non-fatal anomaly observed while building one document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Diagnostic {
    /// An attribute was skipped; no field was emitted for it.
    Skipped {
        /// The attribute key.
        attribute: String,
        /// Why it was skipped.
        reason: SkipReason,
    },
    /// A date-valued attribute could not be parsed; the raw string was used
    /// as the field value.
    DateFallback {
        /// The attribute key.
        attribute: String,
        /// The unparseable input, which became the field value.
        raw: String,
    },
}

/// The output document together with the per-attribute diagnostics gathered
/// while building it.
#[derive(Debug, Clone)]
pub struct TracedBuild {
    /// The built index document.
    pub document: IndexDocument,
    /// Anomalies observed during the build, in attribute-iteration order.
    pub diagnostics: Vec<Diagnostic>,
}

/// Build an index document from an extracted document under the given
/// configuration.
///
/// Fails only with `BackendNotFound` (no adapter bound, see
/// [`backend::initialize`](crate::backend::initialize)) or an I/O error from
/// the upstream text source.
pub fn build_document(
    source: &dyn SourceDocument,
    config: &IndexDocConfig,
) -> Result<IndexDocument> {
    Ok(build_document_traced(source, config)?.document)
}

/// Like [`build_document`], but also returns the diagnostics for attributes
/// that were skipped or fell back to raw date strings.
pub fn build_document_traced(
    source: &dyn SourceDocument,
    config: &IndexDocConfig,
) -> Result<TracedBuild> {
    let adapter = select::bound_adapter()?;

    let text = source.read_text()?;
    let mut document = IndexDocument::new();
    let mut diagnostics = Vec::new();

    let body = config.body_text_settings();
    adapter.add_field(
        &mut document,
        config.body_text_field_name(),
        &text,
        body.store,
        body.index,
        body.tokenize,
    );

    let metadata = config.metadata_settings();
    for (key, value) in source.attributes() {
        let field_name = match config.metadata_field_mapping_for(key) {
            Some(name) => name,
            None if config.copy_all_attributes() => key.as_str(),
            None => {
                diagnostics.push(Diagnostic::Skipped {
                    attribute: key.clone(),
                    reason: SkipReason::Unmapped,
                });
                continue;
            }
        };

        let value_str = match value {
            AttributeValue::Null => {
                debug!(
                    "Null attribute value found for key [{}] ({})",
                    key,
                    source.name()
                );
                diagnostics.push(Diagnostic::Skipped {
                    attribute: key.clone(),
                    reason: SkipReason::NullValue,
                });
                continue;
            }
            AttributeValue::Text(s) if config.is_date_attribute(key) => {
                match datetime::parse_date(s) {
                    Some(timestamp) => datetime::to_sortable_string(timestamp),
                    None => {
                        warn!(
                            "Date attribute [{}] could not be parsed, using raw value [{}] ({})",
                            key,
                            s,
                            source.name()
                        );
                        diagnostics.push(Diagnostic::DateFallback {
                            attribute: key.clone(),
                            raw: s.clone(),
                        });
                        s.clone()
                    }
                }
            }
            AttributeValue::Text(s) => s.clone(),
            AttributeValue::Integer(i) => i.to_string(),
            AttributeValue::Float(f) => f.to_string(),
            AttributeValue::Binary(_) => {
                debug!(
                    "Unsupported attribute value type for key [{}] ({})",
                    key,
                    source.name()
                );
                diagnostics.push(Diagnostic::Skipped {
                    attribute: key.clone(),
                    reason: SkipReason::UnsupportedType,
                });
                continue;
            }
        };

        adapter.add_field(
            &mut document,
            field_name,
            &value_str,
            metadata.store,
            metadata.index,
            metadata.tokenize,
        );
    }

    Ok(TracedBuild {
        document,
        diagnostics,
    })
}
