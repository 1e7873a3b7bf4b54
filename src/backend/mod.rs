//! Index-library backend: native field shapes, runtime probing, version
//! adapters, and the one-shot adapter selection.

pub mod adapter;
pub mod field;
pub mod runtime;
pub mod select;

pub use adapter::{
    AnalyzedEnumAdapter, BooleanFlagAdapter, LegacyEnumAdapter, TypedFieldAdapter, VersionAdapter,
};
pub use field::{
    FieldOptions, IndexDocument, IndexOption, LegacyIndexOption, NativeField, StoreFlag,
};
pub use runtime::{IndexRuntime, SymbolSet};
pub use select::{AdapterBinding, bound_adapter, initialize};
