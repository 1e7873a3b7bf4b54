//! Runtime capability probing for the linked index library.
//!
//! The crate never links against a specific index-library generation at
//! compile time. Instead the embedder describes the library actually present
//! at runtime through an [`IndexRuntime`], and the selector resolves marker
//! symbols against it to recognize the generation. A marker symbol is a type
//! or constant known to exist in exactly one generation onward, so probing
//! newest-first recognizes the most expressive API available.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

/// Marker symbol introduced by the gen 4 typed-field API.
pub const SYMBOL_FIELD_TYPE: &str = "document.FieldType";
/// Marker symbol introduced by the gen 3 enum API.
pub const SYMBOL_INDEX_ANALYZED: &str = "document.Field.Index.ANALYZED";
/// Marker symbol introduced by the gen 2 field abstraction.
pub const SYMBOL_FIELDABLE: &str = "document.Fieldable";
/// Marker symbol present since the gen 1 API.
pub const SYMBOL_FIELD_STORE: &str = "document.Field.Store";

/// A view of the index library present in the current process.
pub trait IndexRuntime: Send + Sync {
    /// Whether the named symbol can be resolved against the linked library.
    ///
    /// Implementations must answer `false` rather than fail: a resolution
    /// error during probing means "this generation is absent".
    fn resolve_symbol(&self, symbol: &str) -> bool;
}

/// An index runtime described by an explicit set of exported symbols.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SymbolSet {
    symbols: HashSet<String>,
}

impl SymbolSet {
    /// Create an empty symbol set (no index library present).
    pub fn new() -> Self {
        SymbolSet {
            symbols: HashSet::new(),
        }
    }

    /// Create a symbol set from a list of exported symbol names.
    pub fn from_symbols<I, S>(symbols: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        SymbolSet {
            symbols: symbols.into_iter().map(Into::into).collect(),
        }
    }

    /// Add one exported symbol.
    pub fn insert<S: Into<String>>(&mut self, symbol: S) {
        self.symbols.insert(symbol.into());
    }
}

impl IndexRuntime for SymbolSet {
    fn resolve_symbol(&self, symbol: &str) -> bool {
        self.symbols.contains(symbol)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_symbol_set_resolves_nothing() {
        let runtime = SymbolSet::new();
        assert!(!runtime.resolve_symbol(SYMBOL_FIELD_TYPE));
        assert!(!runtime.resolve_symbol(SYMBOL_FIELD_STORE));
    }

    #[test]
    fn test_symbol_set_resolution() {
        let runtime = SymbolSet::from_symbols([SYMBOL_FIELDABLE, SYMBOL_FIELD_STORE]);
        assert!(runtime.resolve_symbol(SYMBOL_FIELDABLE));
        assert!(runtime.resolve_symbol(SYMBOL_FIELD_STORE));
        assert!(!runtime.resolve_symbol(SYMBOL_FIELD_TYPE));
        assert!(!runtime.resolve_symbol(SYMBOL_INDEX_ANALYZED));
    }
}
