//! Host dispatcher that fires guard hooks around writes.

use std::sync::Arc;

use serde_json::Value;

use optguard_core::error::Result;

use super::{KvRead, KvWrite};
use crate::guard::{BeforeCreate, BeforeUpdate, Guard};

static ABSENT: Value = Value::Null;

/// Wraps a store and runs registered hooks before each create/update.
/// A hook error rejects the write; nothing is committed.
pub struct GuardedStore<S> {
    inner: S,
    create_hooks: Vec<Arc<dyn BeforeCreate>>,
    update_hooks: Vec<Arc<dyn BeforeUpdate>>,
}

impl<S> GuardedStore<S>
where
    S: KvRead + KvWrite,
{
    pub fn new(inner: S) -> Self {
        Self {
            inner,
            create_hooks: Vec::new(),
            update_hooks: Vec::new(),
        }
    }

    pub fn register_before_create(&mut self, hook: Arc<dyn BeforeCreate>) {
        self.create_hooks.push(hook);
    }

    pub fn register_before_update(&mut self, hook: Arc<dyn BeforeUpdate>) {
        self.update_hooks.push(hook);
    }

    /// Subscribe a guard to both lifecycle events.
    pub fn register_guard(&mut self, guard: Arc<Guard>) {
        self.create_hooks.push(guard.clone());
        self.update_hooks.push(guard);
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        if !self.inner.exists(key) {
            return None;
        }
        Some(self.inner.get_or(key, &ABSENT))
    }

    pub fn exists(&self, key: &str) -> bool {
        self.inner.exists(key)
    }

    /// Insert a new entry. `Ok(false)` if the key already exists.
    pub fn create(&mut self, key: &str, value: Value) -> Result<bool> {
        if self.inner.exists(key) {
            tracing::debug!(key, "create skipped, key exists");
            return Ok(false);
        }

        for hook in &self.create_hooks {
            hook.before_create(key, &value, &self.inner)?;
        }

        self.inner.put(key.to_string(), value);
        tracing::debug!(key, "created");
        Ok(true)
    }

    /// Overwrite an entry with whatever the update hooks hand back.
    ///
    /// Absent keys fall through to `create`. `Ok(false)` if nothing changed.
    pub fn update(&mut self, key: &str, value: Value) -> Result<bool> {
        let mut value = value;
        for hook in &self.update_hooks {
            value = hook.before_update(key, value, &self.inner)?;
        }

        if !self.inner.exists(key) {
            return self.create(key, value);
        }
        if self.inner.get_or(key, &ABSENT) == &value {
            tracing::debug!(key, "update skipped, value unchanged");
            return Ok(false);
        }

        self.inner.put(key.to_string(), value);
        tracing::debug!(key, "updated");
        Ok(true)
    }

    /// Remove an entry. Deletes are not guarded.
    pub fn delete(&mut self, key: &str) -> Option<Value> {
        self.inner.remove(key)
    }

    pub fn inner(&self) -> &S {
        &self.inner
    }

    pub fn into_inner(self) -> S {
        self.inner
    }
}
