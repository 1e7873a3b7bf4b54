//! One-shot backend detection and the process-wide adapter binding.
//!
//! Detection probes the supported generations in strict newest-first order so
//! that ambiguous symbol availability (forward-compatible shims that also
//! export older markers) always resolves to the most expressive generation. A
//! failed probe falls through to the next older generation; probe failures
//! never propagate. The result is bound exactly once: the gate is a
//! [`OnceLock`], so concurrent first calls cannot double-bind or expose a
//! partially-initialized binding, and the decision is never reevaluated for
//! the remainder of the process lifetime.

use std::sync::OnceLock;

use log::{error, info};

use crate::backend::adapter::{
    AnalyzedEnumAdapter, BooleanFlagAdapter, LegacyEnumAdapter, TypedFieldAdapter, VersionAdapter,
};
use crate::backend::runtime::{
    IndexRuntime, SYMBOL_FIELDABLE, SYMBOL_FIELD_STORE, SYMBOL_FIELD_TYPE, SYMBOL_INDEX_ANALYZED,
};
use crate::error::{DocBridgeError, Result};

static TYPED_FIELD: TypedFieldAdapter = TypedFieldAdapter;
static ANALYZED_ENUM: AnalyzedEnumAdapter = AnalyzedEnumAdapter;
static LEGACY_ENUM: LegacyEnumAdapter = LegacyEnumAdapter;
static BOOLEAN_FLAG: BooleanFlagAdapter = BooleanFlagAdapter;

/// Probe candidates, newest generation first.
fn candidates() -> [(&'static str, &'static dyn VersionAdapter); 4] {
    [
        (SYMBOL_FIELD_TYPE, &TYPED_FIELD),
        (SYMBOL_INDEX_ANALYZED, &ANALYZED_ENUM),
        (SYMBOL_FIELDABLE, &LEGACY_ENUM),
        (SYMBOL_FIELD_STORE, &BOOLEAN_FLAG),
    ]
}

fn detect(runtime: &dyn IndexRuntime) -> Option<&'static dyn VersionAdapter> {
    for (symbol, adapter) in candidates() {
        if runtime.resolve_symbol(symbol) {
            info!(
                "Recognized index-library generation {} (marker symbol {}).",
                adapter.generation(),
                symbol
            );
            return Some(adapter);
        }
    }
    error!("Could not recognize any index-library generation; document builds will fail.");
    None
}

/// An exactly-once adapter binding.
///
/// The process-wide binding behind [`initialize`] and [`bound_adapter`] is one
/// instance of this type; independent instances can be created where an
/// isolated binding is needed (one embedded engine per runtime, tests).
#[derive(Debug, Default)]
pub struct AdapterBinding {
    slot: OnceLock<Option<&'static dyn VersionAdapter>>,
}

impl AdapterBinding {
    /// Create a new, not-yet-initialized binding.
    pub const fn new() -> Self {
        AdapterBinding {
            slot: OnceLock::new(),
        }
    }

    /// Run detection against the given runtime, unless a detection outcome is
    /// already bound. Returns the generation of the bound adapter, or `None`
    /// if no generation was (or previously could be) recognized.
    ///
    /// The first call wins; later calls return the existing outcome without
    /// re-probing, even if detection found nothing.
    pub fn initialize(&self, runtime: &dyn IndexRuntime) -> Option<u32> {
        self.slot
            .get_or_init(|| detect(runtime))
            .map(|adapter| adapter.generation())
    }

    /// The bound adapter, or `BackendNotFound` when detection never ran or
    /// recognized nothing.
    pub fn adapter(&self) -> Result<&'static dyn VersionAdapter> {
        match self.slot.get() {
            Some(Some(adapter)) => Ok(*adapter),
            Some(None) => Err(DocBridgeError::backend_not_found(
                "no supported index-library generation was recognized at startup",
            )),
            None => Err(DocBridgeError::backend_not_found(
                "backend detection has not run; call backend::initialize first",
            )),
        }
    }

    /// Whether detection has run, regardless of outcome.
    pub fn is_initialized(&self) -> bool {
        self.slot.get().is_some()
    }
}

static PROCESS_BINDING: AdapterBinding = AdapterBinding::new();

/// Run backend detection for the process-wide binding. Idempotent; only the
/// first call probes.
pub fn initialize(runtime: &dyn IndexRuntime) -> Option<u32> {
    PROCESS_BINDING.initialize(runtime)
}

/// The process-wide bound adapter.
pub fn bound_adapter() -> Result<&'static dyn VersionAdapter> {
    PROCESS_BINDING.adapter()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backend::runtime::SymbolSet;

    #[test]
    fn test_newest_generation_wins() {
        // A runtime exporting every marker resolves to gen 4.
        let runtime = SymbolSet::from_symbols([
            SYMBOL_FIELD_TYPE,
            SYMBOL_INDEX_ANALYZED,
            SYMBOL_FIELDABLE,
            SYMBOL_FIELD_STORE,
        ]);
        let binding = AdapterBinding::new();
        assert_eq!(binding.initialize(&runtime), Some(4));
        assert_eq!(binding.adapter().unwrap().generation(), 4);
    }

    #[test]
    fn test_fallthrough_to_older_generations() {
        let runtime = SymbolSet::from_symbols([SYMBOL_INDEX_ANALYZED, SYMBOL_FIELD_STORE]);
        let binding = AdapterBinding::new();
        assert_eq!(binding.initialize(&runtime), Some(3));

        let runtime = SymbolSet::from_symbols([SYMBOL_FIELDABLE, SYMBOL_FIELD_STORE]);
        let binding = AdapterBinding::new();
        assert_eq!(binding.initialize(&runtime), Some(2));

        let runtime = SymbolSet::from_symbols([SYMBOL_FIELD_STORE]);
        let binding = AdapterBinding::new();
        assert_eq!(binding.initialize(&runtime), Some(1));
    }

    #[test]
    fn test_total_probe_failure() {
        let binding = AdapterBinding::new();
        assert_eq!(binding.initialize(&SymbolSet::new()), None);
        assert!(binding.is_initialized());
        match binding.adapter() {
            Err(DocBridgeError::BackendNotFound(_)) => {}
            other => panic!("expected BackendNotFound, got {other:?}"),
        }
    }

    #[test]
    fn test_binding_is_set_exactly_once() {
        let binding = AdapterBinding::new();
        let gen1_runtime = SymbolSet::from_symbols([SYMBOL_FIELD_STORE]);
        assert_eq!(binding.initialize(&gen1_runtime), Some(1));

        // A later call with a richer runtime must not rebind.
        let gen4_runtime = SymbolSet::from_symbols([SYMBOL_FIELD_TYPE]);
        assert_eq!(binding.initialize(&gen4_runtime), Some(1));
        assert_eq!(binding.adapter().unwrap().generation(), 1);
    }

    #[test]
    fn test_concurrent_first_calls_bind_exactly_once() {
        let binding = AdapterBinding::new();
        let runtimes = [
            SymbolSet::from_symbols([SYMBOL_FIELD_TYPE]),
            SymbolSet::from_symbols([SYMBOL_INDEX_ANALYZED]),
            SymbolSet::from_symbols([SYMBOL_FIELDABLE]),
            SymbolSet::from_symbols([SYMBOL_FIELD_STORE]),
        ];

        let binding_ref = &binding;
        let outcomes: Vec<Option<u32>> = std::thread::scope(|s| {
            let handles: Vec<_> = runtimes
                .iter()
                .map(|runtime| s.spawn(move || binding_ref.initialize(runtime)))
                .collect();
            handles.into_iter().map(|h| h.join().unwrap()).collect()
        });

        // Whichever racer won, every call observed the same single binding.
        let bound = binding.adapter().unwrap().generation();
        for outcome in outcomes {
            assert_eq!(outcome, Some(bound));
        }
    }

    #[test]
    fn test_failed_detection_is_not_retried() {
        let binding = AdapterBinding::new();
        assert_eq!(binding.initialize(&SymbolSet::new()), None);

        let runtime = SymbolSet::from_symbols([SYMBOL_FIELD_TYPE]);
        assert_eq!(binding.initialize(&runtime), None);
        assert!(binding.adapter().is_err());
    }

    #[test]
    fn test_uninitialized_binding_reports_backend_not_found() {
        let binding = AdapterBinding::new();
        assert!(!binding.is_initialized());
        match binding.adapter() {
            Err(DocBridgeError::BackendNotFound(_)) => {}
            other => panic!("expected BackendNotFound, got {other:?}"),
        }
    }
}
