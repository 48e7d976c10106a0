//! Key-value preference store contract and the in-memory store
//!
//! A store answers typed reads with a caller-supplied default when the key
//! is missing, and accepts writes in batches through an [`Editor`].

use log::{debug, warn};
use parking_lot::Mutex;
use serde::Serialize;
use std::collections::HashMap;

/// A single stored preference value
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum PrefValue {
    Bool(bool),
    Long(i64),
    String(String),
}

impl PrefValue {
    fn type_name(&self) -> &'static str {
        match self {
            PrefValue::Bool(_) => "bool",
            PrefValue::Long(_) => "long",
            PrefValue::String(_) => "string",
        }
    }
}

/// Host-provided key-value preference storage
pub trait PreferenceStore {
    /// Returns the stored value, or `None` if the key was never written
    fn get(&self, key: &str) -> Option<PrefValue>;

    /// Writes every edit; later entries win over earlier ones for the same key
    fn commit(&self, edits: Vec<(String, PrefValue)>);

    fn get_bool(&self, key: &str, default: bool) -> bool {
        match self.get(key) {
            Some(PrefValue::Bool(value)) => value,
            other => fallback(key, other, "bool", default),
        }
    }

    fn get_long(&self, key: &str, default: i64) -> i64 {
        match self.get(key) {
            Some(PrefValue::Long(value)) => value,
            other => fallback(key, other, "long", default),
        }
    }

    fn get_string(&self, key: &str, default: &str) -> String {
        match self.get(key) {
            Some(PrefValue::String(value)) => value,
            other => fallback(key, other, "string", default.to_string()),
        }
    }

    /// Start a batch of writes, committed by [`Editor::apply`]
    fn edit(&self) -> Editor<'_, Self>
    where
        Self: Sized,
    {
        Editor::new(self)
    }
}

fn fallback<T>(key: &str, found: Option<PrefValue>, wanted: &str, default: T) -> T {
    if let Some(value) = found {
        warn!(
            "Preference '{}' holds a {} but a {} was requested; using default",
            key,
            value.type_name(),
            wanted
        );
    }
    default
}

/// Pending writes against a store
///
/// Nothing reaches the store until [`apply`](Editor::apply); dropping the
/// editor discards the batch.
#[must_use = "edits are discarded unless apply() is called"]
pub struct Editor<'a, S: PreferenceStore> {
    store: &'a S,
    edits: Vec<(String, PrefValue)>,
}

impl<'a, S: PreferenceStore> Editor<'a, S> {
    pub fn new(store: &'a S) -> Self {
        Self {
            store,
            edits: Vec::new(),
        }
    }

    pub fn put_bool(mut self, key: &str, value: bool) -> Self {
        self.edits.push((key.to_string(), PrefValue::Bool(value)));
        self
    }

    pub fn put_long(mut self, key: &str, value: i64) -> Self {
        self.edits.push((key.to_string(), PrefValue::Long(value)));
        self
    }

    pub fn put_string(mut self, key: &str, value: &str) -> Self {
        self.edits
            .push((key.to_string(), PrefValue::String(value.to_string())));
        self
    }

    /// Commit the batch to the store
    pub fn apply(self) {
        debug!("Applying {} preference edit(s)", self.edits.len());
        self.store.commit(self.edits);
    }
}

/// In-process preference store
#[derive(Debug, Default)]
pub struct MemoryStore {
    values: Mutex<HashMap<String, PrefValue>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.values.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.lock().is_empty()
    }
}

impl PreferenceStore for MemoryStore {
    fn get(&self, key: &str) -> Option<PrefValue> {
        self.values.lock().get(key).cloned()
    }

    fn commit(&self, edits: Vec<(String, PrefValue)>) {
        let mut values = self.values.lock();
        values.extend(edits);
    }
}
