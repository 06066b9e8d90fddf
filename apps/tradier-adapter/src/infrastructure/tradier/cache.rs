//! Last-response cache, one slot per operation.

use std::collections::{BTreeMap, HashMap};
use std::sync::Arc;

use parking_lot::RwLock;
use serde_json::Value;

use crate::domain::raw_data::RawDataKey;

/// Last successfully decoded response for each operation.
///
/// Cloning yields another handle onto the same slots. Writes overwrite;
/// there is no history and no eviction.
#[derive(Debug, Clone, Default)]
pub struct RawResponseCache {
    slots: Arc<RwLock<HashMap<RawDataKey, Value>>>,
}

impl RawResponseCache {
    /// Create an empty cache.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the slot for `key`.
    pub fn store(&self, key: RawDataKey, document: Value) {
        self.slots.write().insert(key, document);
    }

    /// Copy of the slot for `key`.
    #[must_use]
    pub fn get(&self, key: RawDataKey) -> Option<Value> {
        self.slots.read().get(&key).cloned()
    }

    /// Returns true if `key` has been written.
    #[must_use]
    pub fn contains(&self, key: RawDataKey) -> bool {
        self.slots.read().contains_key(&key)
    }

    /// Number of populated slots.
    #[must_use]
    pub fn len(&self) -> usize {
        self.slots.read().len()
    }

    /// Returns true if nothing has been cached yet.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.slots.read().is_empty()
    }

    /// Every populated slot keyed by its dump name.
    #[must_use]
    pub fn snapshot(&self) -> BTreeMap<String, Value> {
        self.slots
            .read()
            .iter()
            .map(|(key, value)| (key.as_str().to_string(), value.clone()))
            .collect()
    }

    /// The snapshot as a single JSON object.
    #[must_use]
    pub fn to_json(&self) -> Value {
        Value::Object(self.snapshot().into_iter().collect())
    }
}
