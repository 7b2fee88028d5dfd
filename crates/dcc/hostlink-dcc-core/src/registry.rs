//! Capability registry: process-wide mapping from a symbolic key to the
//! object providing that capability.
//!
//! The registry is deliberately untyped at the storage layer: entries are
//! `Arc<dyn Any + Send + Sync>` and callers downcast through
//! [`CapabilityRegistry::resolve_as`]. Entries may be held strongly or
//! weakly; a weak entry whose target has been dropped degenerates to absent
//! on the next lookup rather than erroring.
//!
//! No internal locking: access is single-threaded cooperative, driven by the
//! host application's interpreter thread. Callers that mutate from several
//! threads must synchronize externally.

use hashbrown::HashMap;
use std::any::Any;
use std::sync::{Arc, Weak};

/// Well-known registry keys populated at startup.
pub mod keys {
    /// The active DCC provider consulted by the dispatcher.
    pub const DCC: &str = "Dcc";
    /// Host shelf integration.
    pub const SHELF: &str = "Shelf";
    /// Host menu integration.
    pub const MENU: &str = "Menu";
    /// Callback catalogue exposed to tools.
    pub const CALLBACKS: &str = "callbacks";
}

type CapabilityObject = dyn Any + Send + Sync;

#[derive(Clone)]
enum Entry {
    Strong(Arc<CapabilityObject>),
    Weak(Weak<CapabilityObject>),
}

impl Entry {
    fn resolve(&self) -> Option<Arc<CapabilityObject>> {
        match self {
            Entry::Strong(arc) => Some(arc.clone()),
            // A dead weak entry degenerates to absent.
            Entry::Weak(weak) => weak.upgrade(),
        }
    }
}

/// Mutable key -> capability mapping with last-writer-wins registration.
#[derive(Default)]
pub struct CapabilityRegistry {
    entries: HashMap<String, Entry>,
}

impl CapabilityRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or replace the capability stored under `key`. Last writer
    /// wins; no uniqueness or type checking is applied.
    pub fn register<T: Any + Send + Sync>(&mut self, key: impl Into<String>, value: T) {
        self.register_arc(key, Arc::new(value));
    }

    /// Register an already-shared capability object.
    pub fn register_arc(&mut self, key: impl Into<String>, value: Arc<CapabilityObject>) {
        self.entries.insert(key.into(), Entry::Strong(value));
    }

    /// Register without keeping the capability alive: the entry resolves only
    /// while the caller's own `Arc` does.
    pub fn register_weak<T: Any + Send + Sync>(&mut self, key: impl Into<String>, value: &Arc<T>) {
        let strong: Arc<CapabilityObject> = value.clone();
        let weak: Weak<CapabilityObject> = Arc::downgrade(&strong);
        self.entries.insert(key.into(), Entry::Weak(weak));
    }

    /// Pure lookup. Unknown keys and dead weak entries return `None`,
    /// never an error.
    pub fn resolve(&self, key: &str) -> Option<Arc<CapabilityObject>> {
        self.entries.get(key).and_then(Entry::resolve)
    }

    /// Typed lookup; `None` when the key is absent or holds a different type.
    pub fn resolve_as<T: Any + Send + Sync>(&self, key: &str) -> Option<Arc<T>> {
        self.resolve(key).and_then(|arc| arc.downcast::<T>().ok())
    }

    /// Remove the mapping if present; no-op otherwise.
    pub fn unregister(&mut self, key: &str) {
        self.entries.remove(key);
    }

    /// Whether `key` currently resolves (dead weak entries count as absent).
    pub fn contains(&self, key: &str) -> bool {
        self.resolve(key).is_some()
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(|k| k.as_str())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_key_is_absent() {
        let registry = CapabilityRegistry::new();
        assert!(registry.resolve("missing").is_none());
        assert!(!registry.contains("missing"));
    }

    #[test]
    fn register_then_resolve_is_identity_preserving() {
        let mut registry = CapabilityRegistry::new();
        let shelf: Arc<dyn Any + Send + Sync> = Arc::new(String::from("animation-shelf"));
        registry.register_arc(keys::SHELF, shelf.clone());

        let resolved = registry.resolve(keys::SHELF).expect("entry missing");
        assert!(Arc::ptr_eq(&resolved, &shelf));
    }

    #[test]
    fn reregistration_is_last_write_wins() {
        let mut registry = CapabilityRegistry::new();
        registry.register(keys::MENU, String::from("first"));
        registry.register(keys::MENU, String::from("second"));

        let resolved = registry.resolve_as::<String>(keys::MENU).unwrap();
        assert_eq!(resolved.as_str(), "second");
    }

    #[test]
    fn resolve_as_rejects_wrong_type() {
        let mut registry = CapabilityRegistry::new();
        registry.register("count", 3_u32);
        assert!(registry.resolve_as::<String>("count").is_none());
        assert_eq!(*registry.resolve_as::<u32>("count").unwrap(), 3);
    }

    #[test]
    fn unregister_is_noop_when_absent() {
        let mut registry = CapabilityRegistry::new();
        registry.unregister("never-there");
        registry.register("tool", String::from("renamer"));
        registry.unregister("tool");
        assert!(registry.resolve("tool").is_none());
    }

    #[test]
    fn weak_entry_degenerates_to_absent_after_drop() {
        let mut registry = CapabilityRegistry::new();
        let provider = Arc::new(String::from("short-lived"));
        registry.register_weak("client", &provider);

        assert!(registry.contains("client"));
        drop(provider);
        assert!(registry.resolve("client").is_none());
        // Unregistering the dead entry afterwards is still a no-op.
        registry.unregister("client");
    }
}
