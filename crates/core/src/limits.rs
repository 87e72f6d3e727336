//! Size limits for registry and deployment inputs
//!
//! Limits are enforced before any state changes, so an oversized input
//! never leaves a partial registration or clone behind. Violations surface as
//! `Error::LimitExceeded`.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Input size limits
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Limits {
    /// Maximum contract type name length in bytes (default: 256)
    pub max_type_name_bytes: usize,

    /// Maximum version id length in bytes (default: 64)
    pub max_version_id_bytes: usize,

    /// Maximum initialization payload length in bytes (default: 64KB)
    pub max_payload_bytes: usize,
}

impl Default for Limits {
    fn default() -> Self {
        Limits {
            max_type_name_bytes: 256,
            max_version_id_bytes: 64,
            max_payload_bytes: 64 * 1024,
        }
    }
}

impl Limits {
    /// Create limits with small values for testing
    pub fn with_small_limits() -> Self {
        Limits {
            max_type_name_bytes: 16,
            max_version_id_bytes: 8,
            max_payload_bytes: 64,
        }
    }

    /// Validate a contract type name length
    pub fn validate_type_name(&self, type_name: &str) -> Result<(), LimitError> {
        if type_name.len() > self.max_type_name_bytes {
            return Err(LimitError::TypeNameTooLong {
                actual: type_name.len(),
                max: self.max_type_name_bytes,
            });
        }
        Ok(())
    }

    /// Validate a version id length
    pub fn validate_version_id(&self, id: &str) -> Result<(), LimitError> {
        if id.len() > self.max_version_id_bytes {
            return Err(LimitError::VersionIdTooLong {
                actual: id.len(),
                max: self.max_version_id_bytes,
            });
        }
        Ok(())
    }

    /// Validate an initialization payload length
    pub fn validate_payload(&self, payload: &[u8]) -> Result<(), LimitError> {
        if payload.len() > self.max_payload_bytes {
            return Err(LimitError::PayloadTooLarge {
                actual: payload.len(),
                max: self.max_payload_bytes,
            });
        }
        Ok(())
    }
}

/// Limit violation
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LimitError {
    /// Type name exceeds `max_type_name_bytes`
    #[error("type name too long: {actual} bytes (max {max})")]
    TypeNameTooLong {
        /// Actual length
        actual: usize,
        /// Configured maximum
        max: usize,
    },

    /// Version id exceeds `max_version_id_bytes`
    #[error("version id too long: {actual} bytes (max {max})")]
    VersionIdTooLong {
        /// Actual length
        actual: usize,
        /// Configured maximum
        max: usize,
    },

    /// Payload exceeds `max_payload_bytes`
    #[error("initialization payload too large: {actual} bytes (max {max})")]
    PayloadTooLarge {
        /// Actual length
        actual: usize,
        /// Configured maximum
        max: usize,
    },
}

impl LimitError {
    /// Stable reason code
    pub fn reason_code(&self) -> &'static str {
        match self {
            LimitError::TypeNameTooLong { .. } => "type_name_too_long",
            LimitError::VersionIdTooLong { .. } => "version_id_too_long",
            LimitError::PayloadTooLarge { .. } => "payload_too_large",
        }
    }
}
