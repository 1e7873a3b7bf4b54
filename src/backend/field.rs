//! Generation-native field shapes and the output-document sink.
//!
//! Each supported generation of the index library constructs fields through a
//! different API shape. [`NativeField`] carries one variant per generation so
//! a field deposited by any adapter preserves exactly the construction call
//! that generation would have made. The accessor methods normalize the four
//! shapes back to common store/index/tokenize semantics; equivalence of those
//! observables across generations is the contract every adapter must satisfy.

use serde::{Deserialize, Serialize};

/// Whether a field's value is stored, in the enum-based generations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum StoreFlag {
    /// The value is retained and retrievable.
    Yes,
    /// The value is discarded after indexing.
    No,
}

/// Indexing treatment in the current enum-based generation (gen 3).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum IndexOption {
    /// Indexed after analysis; the value is split into terms.
    Analyzed,
    /// Indexed as a single atomic term.
    NotAnalyzed,
    /// Not indexed at all.
    No,
}

/// Indexing treatment in the older enum-based generation (gen 2), which
/// predates the analyzed/not-analyzed naming.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LegacyIndexOption {
    /// Indexed after tokenization.
    Tokenized,
    /// Indexed as a single atomic term.
    UnTokenized,
    /// Not indexed at all.
    No,
}

/// Field treatment descriptor in the typed-field generation (gen 4).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldOptions {
    /// Whether the value is stored.
    pub stored: bool,
    /// Whether the field is indexed.
    pub indexed: bool,
    /// Whether the value is tokenized. Meaningless unless indexed.
    pub tokenized: bool,
}

/// A field as constructed by one specific index-library generation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum NativeField {
    /// Gen 4: a value paired with a typed field descriptor.
    Typed {
        name: String,
        value: String,
        options: FieldOptions,
    },
    /// Gen 3: store and index expressed as enum constants.
    Enumerated {
        name: String,
        value: String,
        store: StoreFlag,
        index: IndexOption,
    },
    /// Gen 2: same intent as gen 3 under the older enumeration names.
    LegacyEnumerated {
        name: String,
        value: String,
        store: StoreFlag,
        index: LegacyIndexOption,
    },
    /// Gen 1: three independent boolean flags on a flat constructor.
    Flags {
        name: String,
        value: String,
        store: bool,
        index: bool,
        tokenize: bool,
    },
}

impl NativeField {
    /// The field name.
    pub fn name(&self) -> &str {
        match self {
            NativeField::Typed { name, .. }
            | NativeField::Enumerated { name, .. }
            | NativeField::LegacyEnumerated { name, .. }
            | NativeField::Flags { name, .. } => name,
        }
    }

    /// The field value.
    pub fn value(&self) -> &str {
        match self {
            NativeField::Typed { value, .. }
            | NativeField::Enumerated { value, .. }
            | NativeField::LegacyEnumerated { value, .. }
            | NativeField::Flags { value, .. } => value,
        }
    }

    /// Whether the field's value is retained for retrieval.
    pub fn is_stored(&self) -> bool {
        match self {
            NativeField::Typed { options, .. } => options.stored,
            NativeField::Enumerated { store, .. }
            | NativeField::LegacyEnumerated { store, .. } => *store == StoreFlag::Yes,
            NativeField::Flags { store, .. } => *store,
        }
    }

    /// Whether the field is searchable.
    pub fn is_indexed(&self) -> bool {
        match self {
            NativeField::Typed { options, .. } => options.indexed,
            NativeField::Enumerated { index, .. } => *index != IndexOption::No,
            NativeField::LegacyEnumerated { index, .. } => *index != LegacyIndexOption::No,
            NativeField::Flags { index, .. } => *index,
        }
    }

    /// Whether the field's value is split into discrete terms. Always false
    /// for unindexed fields.
    pub fn is_tokenized(&self) -> bool {
        match self {
            NativeField::Typed { options, .. } => options.indexed && options.tokenized,
            NativeField::Enumerated { index, .. } => *index == IndexOption::Analyzed,
            NativeField::LegacyEnumerated { index, .. } => {
                *index == LegacyIndexOption::Tokenized
            }
            NativeField::Flags {
                index, tokenize, ..
            } => *index && *tokenize,
        }
    }
}

/// The output-document sink: an ordered collection of native fields.
///
/// One sink is owned exclusively by one in-flight build call. Duplicate field
/// names are allowed, as the index library permits multi-valued fields.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct IndexDocument {
    fields: Vec<NativeField>,
}

impl IndexDocument {
    /// Create a new empty output document.
    pub fn new() -> Self {
        IndexDocument { fields: Vec::new() }
    }

    /// Deposit one constructed field.
    pub fn add_field(&mut self, field: NativeField) {
        self.fields.push(field);
    }

    /// All fields, in the order they were deposited.
    pub fn fields(&self) -> &[NativeField] {
        &self.fields
    }

    /// The first field with the given name, if any.
    pub fn get(&self, name: &str) -> Option<&NativeField> {
        self.fields.iter().find(|f| f.name() == name)
    }

    /// The number of fields.
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Check if the document has no fields.
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}
