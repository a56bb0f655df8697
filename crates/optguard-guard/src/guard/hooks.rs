//! Lifecycle hooks a host store fires around writes.

use serde_json::Value;

use optguard_core::error::Result;

use super::{Guard, Overrides};
use crate::store::KvRead;

/// Fired before a new entry is inserted. An error rejects the write.
pub trait BeforeCreate: Send + Sync {
    fn before_create(&self, key: &str, value: &Value, store: &dyn KvRead) -> Result<()>;
}

/// Fired before an entry is overwritten. The host commits the returned value.
pub trait BeforeUpdate: Send + Sync {
    fn before_update(&self, key: &str, value: Value, store: &dyn KvRead) -> Result<Value>;
}

impl BeforeCreate for Guard {
    fn before_create(&self, key: &str, value: &Value, _store: &dyn KvRead) -> Result<()> {
        self.on_before_create(key, value, &Overrides::default())
    }
}

impl BeforeUpdate for Guard {
    fn before_update(&self, key: &str, value: Value, store: &dyn KvRead) -> Result<Value> {
        self.on_before_update(key, value, store, &Overrides::default())
    }
}
