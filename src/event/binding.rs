//! Binding table: ordered symbolic-name → callback registrations.
//!
//! Bindings are collected while the window is being built and applied to the
//! live handle exactly once, in registration order, right after launch.

use std::sync::Arc;

use tracing::debug;

use crate::runtime::{BindError, Callback, UiHandle};

// ---------------------------------------------------------------------------
// Binding
// ---------------------------------------------------------------------------

/// A symbolic name the page can call, paired with a host callback.
#[derive(Clone)]
pub struct Binding {
    name: String,
    callback: Callback,
}

impl Binding {
    pub fn new(name: impl Into<String>, callback: Callback) -> Self {
        Self {
            name: name.into(),
            callback,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn callback(&self) -> &Callback {
        &self.callback
    }
}

impl std::fmt::Debug for Binding {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Binding")
            .field("name", &self.name)
            .field("callback", &"<fn>")
            .finish()
    }
}

// ---------------------------------------------------------------------------
// BindingTable
// ---------------------------------------------------------------------------

/// Ordered list of bindings. Never deduplicated: a repeated name is kept so
/// that validation can report it.
#[derive(Debug, Clone, Default)]
pub struct BindingTable {
    bindings: Vec<Binding>,
}

impl BindingTable {
    /// Create an empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a closure under `name`.
    pub fn bind(&mut self, name: impl Into<String>, callback: impl Fn() + Send + Sync + 'static) {
        self.bind_callback(name, Arc::new(callback));
    }

    /// Register an already shared callback under `name`.
    pub fn bind_callback(&mut self, name: impl Into<String>, callback: Callback) {
        self.bindings.push(Binding::new(name, callback));
    }

    /// Whether a binding with this name exists.
    pub fn contains(&self, name: &str) -> bool {
        self.bindings.iter().any(|b| b.name == name)
    }

    /// Binding names in registration order.
    pub fn names(&self) -> Vec<&str> {
        self.bindings.iter().map(Binding::name).collect()
    }

    /// Names registered more than once, each reported once, in first-seen order.
    pub fn duplicate_names(&self) -> Vec<&str> {
        let mut duplicates: Vec<&str> = Vec::new();
        for (i, binding) in self.bindings.iter().enumerate() {
            let repeated = self.bindings[..i].iter().any(|b| b.name == binding.name);
            if repeated && !duplicates.contains(&binding.name()) {
                duplicates.push(binding.name());
            }
        }
        duplicates
    }

    /// Iterate bindings in registration order.
    pub fn iter(&self) -> std::slice::Iter<'_, Binding> {
        self.bindings.iter()
    }

    /// Number of registered bindings.
    pub fn len(&self) -> usize {
        self.bindings.len()
    }

    /// Whether the table has no bindings.
    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }

    /// Apply every binding to `ui`, in registration order.
    ///
    /// Stops at the first rejection. Bindings applied before it stay applied.
    pub fn apply(&self, ui: &dyn UiHandle) -> Result<(), BindError> {
        for binding in &self.bindings {
            ui.bind(&binding.name, Arc::clone(&binding.callback))?;
            debug!(name = %binding.name, "binding applied");
        }
        Ok(())
    }
}

// ===========================================================================
// Tests
// ===========================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::RecordingRenderer;
    use std::sync::atomic::{AtomicUsize, Ordering};

    // ── Construction ─────────────────────────────────────────────────

    #[test]
    fn new_table_is_empty() {
        let table = BindingTable::new();
        assert!(table.is_empty());
        assert_eq!(table.len(), 0);
    }

    #[test]
    fn bind_keeps_registration_order() {
        let mut table = BindingTable::new();
        table.bind("C1", || {});
        table.bind("C2", || {});
        table.bind("C3", || {});
        assert_eq!(table.names(), vec!["C1", "C2", "C3"]);
        assert!(table.contains("C2"));
        assert!(!table.contains("C4"));
    }

    #[test]
    fn duplicates_are_kept_and_reported() {
        let mut table = BindingTable::new();
        table.bind("a", || {});
        table.bind("b", || {});
        table.bind("a", || {});
        table.bind("a", || {});
        assert_eq!(table.len(), 4);
        assert_eq!(table.duplicate_names(), vec!["a"]);
    }

    #[test]
    fn binding_debug_hides_callback() {
        let binding = Binding::new("x", Arc::new(|| {}));
        assert_eq!(format!("{binding:?}"), r#"Binding { name: "x", callback: "<fn>" }"#);
    }

    // ── Apply ────────────────────────────────────────────────────────

    #[test]
    fn apply_in_registration_order() {
        let renderer = RecordingRenderer::new();
        let ui = renderer.launch_blank();
        let mut table = BindingTable::new();
        table.bind("C1", || {});
        table.bind("C2", || {});
        table.bind("C3", || {});
        table.apply(ui.as_ref()).unwrap();
        assert_eq!(renderer.recorder().bound_names(), vec!["C1", "C2", "C3"]);
    }

    #[test]
    fn apply_stops_at_rejection_and_keeps_earlier() {
        let renderer = RecordingRenderer::new().rejecting("C2");
        let ui = renderer.launch_blank();
        let mut table = BindingTable::new();
        table.bind("C1", || {});
        table.bind("C2", || {});
        table.bind("C3", || {});
        let err = table.apply(ui.as_ref()).unwrap_err();
        assert_eq!(err.name, "C2");
        assert_eq!(renderer.recorder().bound_names(), vec!["C1"]);
    }

    #[test]
    fn applied_callback_is_invocable() {
        let renderer = RecordingRenderer::new();
        let ui = renderer.launch_blank();
        let hits = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&hits);
        let mut table = BindingTable::new();
        table.bind("hit", move || {
            counter.fetch_add(1, Ordering::SeqCst);
        });
        table.apply(ui.as_ref()).unwrap();
        assert!(renderer.recorder().invoke("hit"));
        assert_eq!(hits.load(Ordering::SeqCst), 1);
    }
}
