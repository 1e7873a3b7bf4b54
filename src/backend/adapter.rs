//! Version adapters: one field-construction strategy per supported
//! index-library generation.
//!
//! Every adapter translates the same uniform `(name, value, store, index,
//! tokenize)` tuple into its generation's native construction call. The
//! adapters are intentionally small; the whole point is that for equal inputs
//! all four deposit fields with equivalent observable store/index/tokenize
//! behavior, so callers never need to know which generation is bound.

use crate::backend::field::{
    FieldOptions, IndexDocument, IndexOption, LegacyIndexOption, NativeField, StoreFlag,
};

/// Uniform field-construction capability over one index-library generation.
pub trait VersionAdapter: Send + Sync + std::fmt::Debug {
    /// Construct one field in this generation's native API and deposit it
    /// into the output document.
    fn add_field(
        &self,
        doc: &mut IndexDocument,
        name: &str,
        value: &str,
        store: bool,
        index: bool,
        tokenize: bool,
    );

    /// The generation number this adapter targets.
    fn generation(&self) -> u32;
}

/// Gen 4 adapter, targeting the typed-field API.
#[derive(Debug, Default)]
pub struct TypedFieldAdapter;

impl VersionAdapter for TypedFieldAdapter {
    fn add_field(
        &self,
        doc: &mut IndexDocument,
        name: &str,
        value: &str,
        store: bool,
        index: bool,
        tokenize: bool,
    ) {
        doc.add_field(NativeField::Typed {
            name: name.to_string(),
            value: value.to_string(),
            options: FieldOptions {
                stored: store,
                indexed: index,
                tokenized: index && tokenize,
            },
        });
    }

    fn generation(&self) -> u32 {
        4
    }
}

/// Gen 3 adapter, targeting the analyzed/not-analyzed enum API.
#[derive(Debug, Default)]
pub struct AnalyzedEnumAdapter;

impl VersionAdapter for AnalyzedEnumAdapter {
    fn add_field(
        &self,
        doc: &mut IndexDocument,
        name: &str,
        value: &str,
        store: bool,
        index: bool,
        tokenize: bool,
    ) {
        let index = if index {
            if tokenize {
                IndexOption::Analyzed
            } else {
                IndexOption::NotAnalyzed
            }
        } else {
            IndexOption::No
        };
        doc.add_field(NativeField::Enumerated {
            name: name.to_string(),
            value: value.to_string(),
            store: if store { StoreFlag::Yes } else { StoreFlag::No },
            index,
        });
    }

    fn generation(&self) -> u32 {
        3
    }
}

/// Gen 2 adapter, targeting the enum API that predates the
/// analyzed/not-analyzed naming.
#[derive(Debug, Default)]
pub struct LegacyEnumAdapter;

impl VersionAdapter for LegacyEnumAdapter {
    fn add_field(
        &self,
        doc: &mut IndexDocument,
        name: &str,
        value: &str,
        store: bool,
        index: bool,
        tokenize: bool,
    ) {
        let index = if index {
            if tokenize {
                LegacyIndexOption::Tokenized
            } else {
                LegacyIndexOption::UnTokenized
            }
        } else {
            LegacyIndexOption::No
        };
        doc.add_field(NativeField::LegacyEnumerated {
            name: name.to_string(),
            value: value.to_string(),
            store: if store { StoreFlag::Yes } else { StoreFlag::No },
            index,
        });
    }

    fn generation(&self) -> u32 {
        2
    }
}

/// Gen 1 adapter, targeting the flat boolean-flag constructor.
#[derive(Debug, Default)]
pub struct BooleanFlagAdapter;

impl VersionAdapter for BooleanFlagAdapter {
    fn add_field(
        &self,
        doc: &mut IndexDocument,
        name: &str,
        value: &str,
        store: bool,
        index: bool,
        tokenize: bool,
    ) {
        doc.add_field(NativeField::Flags {
            name: name.to_string(),
            value: value.to_string(),
            store,
            index,
            tokenize,
        });
    }

    fn generation(&self) -> u32 {
        1
    }
}
