use std::collections::BTreeMap;

use serde_json::Value;

use super::{KvRead, KvWrite};

/// Ordered in-memory store. Used by tests and the replay binary.
#[derive(Debug, Default, Clone)]
pub struct MemoryStore {
    entries: BTreeMap<String, Value>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &Value)> {
        self.entries.iter()
    }
}

impl KvRead for MemoryStore {
    fn get_or<'a>(&'a self, key: &str, default: &'a Value) -> &'a Value {
        self.entries.get(key).unwrap_or(default)
    }

    fn exists(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }
}

impl KvWrite for MemoryStore {
    fn put(&mut self, key: String, value: Value) {
        self.entries.insert(key, value);
    }

    fn remove(&mut self, key: &str) -> Option<Value> {
        self.entries.remove(key)
    }
}
