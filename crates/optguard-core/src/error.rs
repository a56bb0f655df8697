//! Shared error type across optguard crates.

use thiserror::Error;

/// Machine-readable error codes (stable API).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCode {
    /// Serialized value is larger than the effective limit.
    SizeLimitExceeded,
    /// Update on a key that was never created.
    MissingPriorCreate,
    /// Value could not be serialized.
    Serialize,
    /// Invalid configuration.
    BadConfig,
    /// Internal error.
    Internal,
}

impl ErrorCode {
    /// String representation used in logs and CLI output.
    pub fn as_str(self) -> &'static str {
        match self {
            ErrorCode::SizeLimitExceeded => "SIZE_LIMIT_EXCEEDED",
            ErrorCode::MissingPriorCreate => "MISSING_PRIOR_CREATE",
            ErrorCode::Serialize => "SERIALIZE",
            ErrorCode::BadConfig => "BAD_CONFIG",
            ErrorCode::Internal => "INTERNAL",
        }
    }
}

/// Shared result type.
pub type Result<T> = std::result::Result<T, OptGuardError>;

/// Unified error type used by core and guard.
#[derive(Debug, Error)]
pub enum OptGuardError {
    #[error("attempted to set key '{key}' which is too big ({size} bytes); there is a {limit} byte limit")]
    SizeLimitExceeded { key: String, size: usize, limit: usize },
    #[error("key '{key}' does not exist; it must be created before it can be updated")]
    MissingPriorCreate { key: String },
    #[error("serialize: {0}")]
    Serialize(String),
    #[error("bad config: {0}")]
    BadConfig(String),
    #[error("internal: {0}")]
    Internal(String),
}

impl OptGuardError {
    /// Map error to its stable code.
    pub fn code(&self) -> ErrorCode {
        match self {
            OptGuardError::SizeLimitExceeded { .. } => ErrorCode::SizeLimitExceeded,
            OptGuardError::MissingPriorCreate { .. } => ErrorCode::MissingPriorCreate,
            OptGuardError::Serialize(_) => ErrorCode::Serialize,
            OptGuardError::BadConfig(_) => ErrorCode::BadConfig,
            OptGuardError::Internal(_) => ErrorCode::Internal,
        }
    }

    /// True for the two policy violations the guard reports.
    pub fn is_violation(&self) -> bool {
        matches!(
            self,
            OptGuardError::SizeLimitExceeded { .. } | OptGuardError::MissingPriorCreate { .. }
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn size_message_carries_key_size_and_limit() {
        let e = OptGuardError::SizeLimitExceeded { key: "k".into(), size: 11, limit: 10 };
        let msg = e.to_string();
        assert!(msg.contains("'k'"));
        assert!(msg.contains("11 bytes"));
        assert!(msg.contains("10 byte limit"));
        assert_eq!(e.code().as_str(), "SIZE_LIMIT_EXCEEDED");
        assert!(e.is_violation());
    }

    #[test]
    fn config_errors_are_not_violations() {
        let e = OptGuardError::BadConfig("version".into());
        assert_eq!(e.code(), ErrorCode::BadConfig);
        assert!(!e.is_violation());
    }
}
