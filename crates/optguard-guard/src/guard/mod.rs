//! Size/existence guard.
//!
//! Checks pending values against the effective byte limit and makes sure
//! updates only target keys that were created first. Violations go through a
//! single funnel (`Guard::handle_error`) that either aborts (strict) or logs a
//! warning and lets the write continue.

pub mod hooks;

use std::fmt;
use std::sync::Arc;

use serde::Serialize;

use optguard_core::codec::serialized_size;
use optguard_core::error::{OptGuardError, Result};

use crate::config::schema::{GuardConfig, DEFAULT_MAX_VALUE_SIZE};
use crate::store::KvRead;

pub use hooks::{BeforeCreate, BeforeUpdate};

/// Registered extension point for the size limit. Receives the startup default.
pub type SizeFilter = Arc<dyn Fn(usize) -> usize + Send + Sync>;
/// Registered extension point for strict mode. Receives the startup default.
pub type StrictFilter = Arc<dyn Fn(bool) -> bool + Send + Sync>;

/// Startup scalars. Immutable once the guard is built.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GuardSettings {
    /// Largest accepted canonical value size, in bytes.
    pub max_value_size: usize,
    /// Abort on violation instead of warning.
    pub strict: bool,
}

impl Default for GuardSettings {
    fn default() -> Self {
        Self {
            max_value_size: DEFAULT_MAX_VALUE_SIZE,
            strict: false,
        }
    }
}

/// Per-call overrides. They win over filters and defaults for one check only.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Overrides {
    pub max_value_size: Option<usize>,
    pub strict: Option<bool>,
}

impl Overrides {
    pub fn max_value_size(mut self, bytes: usize) -> Self {
        self.max_value_size = Some(bytes);
        self
    }

    pub fn strict(mut self, strict: bool) -> Self {
        self.strict = Some(strict);
        self
    }
}

pub struct Guard {
    settings: GuardSettings,
    size_filter: Option<SizeFilter>,
    strict_filter: Option<StrictFilter>,
}

impl fmt::Debug for Guard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Guard")
            .field("settings", &self.settings)
            .field("size_filter", &self.size_filter.is_some())
            .field("strict_filter", &self.strict_filter.is_some())
            .finish()
    }
}

impl Guard {
    pub fn new(settings: GuardSettings) -> Self {
        Self {
            settings,
            size_filter: None,
            strict_filter: None,
        }
    }

    pub fn from_config(cfg: &GuardConfig) -> Self {
        Self::new(cfg.settings())
    }

    pub fn with_size_filter<F>(mut self, f: F) -> Self
    where
        F: Fn(usize) -> usize + Send + Sync + 'static,
    {
        self.size_filter = Some(Arc::new(f));
        self
    }

    pub fn with_strict_filter<F>(mut self, f: F) -> Self
    where
        F: Fn(bool) -> bool + Send + Sync + 'static,
    {
        self.strict_filter = Some(Arc::new(f));
        self
    }

    pub fn settings(&self) -> GuardSettings {
        self.settings
    }

    pub fn effective_max_value_size(&self, ov: &Overrides) -> usize {
        if let Some(bytes) = ov.max_value_size {
            return bytes;
        }
        match &self.size_filter {
            Some(f) => f(self.settings.max_value_size),
            None => self.settings.max_value_size,
        }
    }

    pub fn effective_strict(&self, ov: &Overrides) -> bool {
        if let Some(strict) = ov.strict {
            return strict;
        }
        match &self.strict_filter {
            Some(f) => f(self.settings.strict),
            None => self.settings.strict,
        }
    }

    /// Report `SizeLimitExceeded` if the canonical encoding of `value` is over the limit.
    pub fn check_size<T>(&self, key: &str, value: &T, ov: &Overrides) -> Result<()>
    where
        T: Serialize + ?Sized,
    {
        let limit = self.effective_max_value_size(ov);
        let size = match serialized_size(value) {
            Ok(size) => size,
            // unmeasurable values cannot be checked; report and move on
            Err(e) => return self.handle_error(e, ov),
        };

        tracing::trace!(key, size, limit, "size check");
        if size > limit {
            return self.handle_error(
                OptGuardError::SizeLimitExceeded { key: key.to_string(), size, limit },
                ov,
            );
        }
        Ok(())
    }

    pub fn on_before_create<T>(&self, key: &str, value: &T, ov: &Overrides) -> Result<()>
    where
        T: Serialize + ?Sized,
    {
        self.check_size(key, value, ov)
    }

    /// Size and existence checks for an overwrite. Returns `value` untouched.
    pub fn on_before_update<T, S>(&self, key: &str, value: T, store: &S, ov: &Overrides) -> Result<T>
    where
        T: Serialize,
        S: KvRead + ?Sized,
    {
        self.check_size(key, &value, ov)?;
        if !store.exists(key) {
            self.handle_error(OptGuardError::MissingPriorCreate { key: key.to_string() }, ov)?;
        }
        Ok(value)
    }

    /// Error funnel: strict mode returns the error, lenient mode logs it.
    pub fn handle_error(&self, err: OptGuardError, ov: &Overrides) -> Result<()> {
        if self.effective_strict(ov) {
            return Err(err);
        }
        tracing::warn!(code = err.code().as_str(), "{err}");
        Ok(())
    }
}
