//! Host store model.
//!
//! The guard only needs to read the store; hosts own writes. `GuardedStore`
//! is the reference host that fires the guard hooks around every write.

pub mod guarded;
pub mod memory;

use std::ptr;

use serde_json::Value;

pub use guarded::GuardedStore;
pub use memory::MemoryStore;

/// Read side of a host key/value store.
pub trait KvRead {
    /// Stored value for `key`, or `default` when the key is absent.
    fn get_or<'a>(&'a self, key: &str, default: &'a Value) -> &'a Value;

    /// Whether `key` was created.
    ///
    /// Stores with a native lookup should override this. The fallback passes a
    /// fresh local sentinel and compares addresses, so a stored value equal to
    /// the sentinel still counts as present.
    fn exists(&self, key: &str) -> bool {
        let sentinel = Value::Null;
        !ptr::eq(self.get_or(key, &sentinel), &sentinel)
    }
}

/// Write side of a host key/value store. Never called by the guard itself.
pub trait KvWrite {
    fn put(&mut self, key: String, value: Value);
    fn remove(&mut self, key: &str) -> Option<Value>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    /// Store that only offers `get_or`, so `exists` uses the sentinel path.
    struct LookupOnly(HashMap<String, Value>);

    impl KvRead for LookupOnly {
        fn get_or<'a>(&'a self, key: &str, default: &'a Value) -> &'a Value {
            self.0.get(key).unwrap_or(default)
        }
    }

    #[test]
    fn sentinel_detects_absence() {
        let s = LookupOnly(HashMap::new());
        assert!(!s.exists("nope"));
    }

    #[test]
    fn stored_null_is_not_mistaken_for_sentinel() {
        let mut m = HashMap::new();
        m.insert("k".to_string(), Value::Null);
        let s = LookupOnly(m);
        assert!(s.exists("k"));
        assert!(!s.exists("other"));
    }
}
