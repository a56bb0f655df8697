//! Guard config loader (strict parsing).

pub mod schema;

use std::fs;

use optguard_core::error::{OptGuardError, Result};

pub use schema::{GuardConfig, GuardSection};

/// Environment variable overriding `guard.max_value_size` (bytes).
pub const ENV_MAX_VALUE_SIZE: &str = "OPTGUARD_MAX_VALUE_SIZE";
/// Environment variable overriding the `debug` flag.
pub const ENV_DEBUG: &str = "OPTGUARD_DEBUG";

pub fn load_from_file(path: &str) -> Result<GuardConfig> {
    let s = fs::read_to_string(path)
        .map_err(|e| OptGuardError::Internal(format!("read config failed: {e}")))?;
    load_from_str(&s)
}

pub fn load_from_str(s: &str) -> Result<GuardConfig> {
    let cfg: GuardConfig = serde_yaml::from_str(s)
        .map_err(|e| OptGuardError::BadConfig(format!("invalid yaml: {e}")))?;
    cfg.validate()?;
    Ok(cfg)
}
