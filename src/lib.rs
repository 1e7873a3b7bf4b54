//! # docbridge
//!
//! A version-adaptive bridge from extracted document text and attributes to
//! full-text index fields.
//!
//! ## Features
//!
//! - Configurable mapping from source attributes to named index fields
//! - Independent store/index/tokenize treatment per field class
//! - One-shot runtime detection of the linked index-library generation
//! - Four field-construction backends with equivalent observable semantics
//! - Best-effort attribute conversion with inspectable diagnostics
//!
//! ## Usage
//!
//! Detect the index library once at startup, then build documents:
//!
//! ```
//! use docbridge::backend::{self, SymbolSet};
//! use docbridge::backend::runtime::SYMBOL_FIELD_TYPE;
//! use docbridge::builder::build_document;
//! use docbridge::config::IndexDocConfig;
//! use docbridge::source::ExtractedDocument;
//!
//! backend::initialize(&SymbolSet::from_symbols([SYMBOL_FIELD_TYPE]));
//!
//! let mut config = IndexDocConfig::new();
//! config.set_metadata_field_mapping("author", "writer");
//!
//! let source = ExtractedDocument::new("report.pdf", "the extracted text")
//!     .with_attribute("author", "Ada");
//! let document = build_document(&source, &config).unwrap();
//! assert_eq!(document.get("writer").unwrap().value(), "Ada");
//! ```

pub mod backend;
pub mod builder;
pub mod config;
pub mod datetime;
pub mod error;
pub mod source;

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
