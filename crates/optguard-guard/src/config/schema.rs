use serde::Deserialize;
use optguard_core::error::{OptGuardError, Result};

use super::{ENV_DEBUG, ENV_MAX_VALUE_SIZE};
use crate::guard::GuardSettings;

/// 1 MiB, the bucket size of common external object caches.
pub const DEFAULT_MAX_VALUE_SIZE: usize = 1 << 20;

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct GuardConfig {
    pub version: u32,

    /// Default strict mode derives from this flag.
    #[serde(default)]
    pub debug: bool,

    #[serde(default)]
    pub guard: GuardSection,
}

impl Default for GuardConfig {
    fn default() -> Self {
        Self {
            version: 1,
            debug: false,
            guard: GuardSection::default(),
        }
    }
}

impl GuardConfig {
    pub fn validate(&self) -> Result<()> {
        if self.version != 1 {
            return Err(OptGuardError::BadConfig(format!(
                "unsupported config version {}",
                self.version
            )));
        }

        self.guard.validate()?;

        Ok(())
    }

    /// Apply `OPTGUARD_*` overrides from the process environment.
    pub fn apply_env(&mut self) -> Result<()> {
        self.apply_env_from(|name| std::env::var(name).ok())
    }

    /// Apply overrides from an arbitrary lookup (tests pass a map here).
    pub fn apply_env_from<F>(&mut self, lookup: F) -> Result<()>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(raw) = lookup(ENV_MAX_VALUE_SIZE) {
            let bytes: usize = raw.trim().parse().map_err(|_| {
                OptGuardError::BadConfig(format!("{ENV_MAX_VALUE_SIZE} must be a byte count, got {raw:?}"))
            })?;
            self.guard.max_value_size = bytes;
        }
        if let Some(raw) = lookup(ENV_DEBUG) {
            self.debug = parse_flag(&raw).ok_or_else(|| {
                OptGuardError::BadConfig(format!("{ENV_DEBUG} must be a boolean flag, got {raw:?}"))
            })?;
        }
        self.validate()
    }

    /// Resolve the startup scalars handed to the guard.
    pub fn settings(&self) -> GuardSettings {
        GuardSettings {
            max_value_size: self.guard.max_value_size,
            strict: self.guard.strict.unwrap_or(self.debug),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct GuardSection {
    #[serde(default = "default_max_value_size")]
    pub max_value_size: usize,

    /// Explicit strict mode; `None` falls back to `debug`.
    #[serde(default)]
    pub strict: Option<bool>,
}

impl Default for GuardSection {
    fn default() -> Self {
        Self {
            max_value_size: default_max_value_size(),
            strict: None,
        }
    }
}

impl GuardSection {
    pub fn validate(&self) -> Result<()> {
        if self.max_value_size == 0 {
            return Err(OptGuardError::BadConfig(
                "guard.max_value_size must be greater than 0".into(),
            ));
        }
        Ok(())
    }
}

fn default_max_value_size() -> usize {
    DEFAULT_MAX_VALUE_SIZE
}

fn parse_flag(raw: &str) -> Option<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" | "" => Some(false),
        _ => None,
    }
}
