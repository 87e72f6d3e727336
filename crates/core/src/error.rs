//! Error types for proxyforge
//!
//! Every failure is terminal for the operation that raised it: nothing is
//! retried internally and no partial state survives the failing call.
//! We use `thiserror` for automatic `Display` and `Error` trait implementations.

use crate::limits::LimitError;
use crate::types::Address;
use std::fmt;
use thiserror::Error;

/// Result type alias for proxyforge operations
pub type Result<T> = std::result::Result<T, Error>;

/// Why a contract type could not be resolved to a version
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InvalidReason {
    /// The type name was never registered
    NotCreated,
    /// The type is registered but carries no versions
    NoVersions,
    /// The requested version index is past the end of the version list
    IndexOutOfBounds {
        /// Requested index
        index: usize,
        /// Number of versions present
        len: usize,
    },
}

impl fmt::Display for InvalidReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InvalidReason::NotCreated => write!(f, "not created"),
            InvalidReason::NoVersions => write!(f, "no versions"),
            InvalidReason::IndexOutOfBounds { index, len } => {
                write!(f, "version index {} out of bounds (len {})", index, len)
            }
        }
    }
}

/// Error types for registry and factory operations
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// Type is unregistered, has no versions, or the index is out of bounds
    #[error("invalid deployable contract '{type_name}': {reason}")]
    InvalidDeployableContract {
        /// Type name that failed to resolve
        type_name: String,
        /// Which rule rejected it
        reason: InvalidReason,
    },

    /// Attempted to register a type name that already exists
    #[error("contract type '{type_name}' already created")]
    ContractAlreadyCreated {
        /// Type name that was already registered
        type_name: String,
    },

    /// The initialization call against a fresh instance did not succeed
    #[error("initialization of {instance} failed: {reason}")]
    InitializationFailed {
        /// Address the instance was (tentatively) created at
        instance: Address,
        /// Revert reason reported by the implementation
        reason: String,
    },

    /// A deterministic clone targeted an address that is already occupied
    #[error("deployment collision: {address} is already occupied")]
    DeploymentCollision {
        /// The occupied address
        address: Address,
    },

    /// The clone primitive was given an address without implementation code
    #[error("no implementation code at {address}")]
    MissingImplementation {
        /// Address that was expected to carry implementation code
        address: Address,
    },

    /// Caller is not the operator
    #[error("caller {caller} is not the operator ({operator})")]
    Unauthorized {
        /// Identity that attempted the operation
        caller: Address,
        /// Current operator
        operator: Address,
    },

    /// A plain call against an address reverted
    #[error("call to {target} failed: {reason}")]
    CallFailed {
        /// Call target
        target: Address,
        /// Revert reason
        reason: String,
    },

    /// An input exceeded a configured limit
    #[error("limit exceeded: {0}")]
    LimitExceeded(#[from] LimitError),

    /// Configuration could not be read or parsed
    #[error("configuration error: {message}")]
    Config {
        /// Human-readable description
        message: String,
    },
}

impl Error {
    /// Create an `InvalidDeployableContract` error
    pub fn invalid_deployable(type_name: impl Into<String>, reason: InvalidReason) -> Self {
        Error::InvalidDeployableContract {
            type_name: type_name.into(),
            reason,
        }
    }

    /// Create a `Config` error
    pub fn config(message: impl Into<String>) -> Self {
        Error::Config {
            message: message.into(),
        }
    }

    /// Stable machine-readable code for this error
    pub fn error_code(&self) -> &'static str {
        match self {
            Error::InvalidDeployableContract { .. } => "InvalidDeployableContract",
            Error::ContractAlreadyCreated { .. } => "ContractAlreadyCreated",
            Error::InitializationFailed { .. } => "InitializationFailed",
            Error::DeploymentCollision { .. } => "DeploymentCollision",
            Error::MissingImplementation { .. } => "MissingImplementation",
            Error::Unauthorized { .. } => "Unauthorized",
            Error::CallFailed { .. } => "CallFailed",
            Error::LimitExceeded(_) => "LimitExceeded",
            Error::Config { .. } => "Config",
        }
    }

    /// Check if this is a deterministic-address collision
    pub fn is_collision(&self) -> bool {
        matches!(self, Error::DeploymentCollision { .. })
    }

    /// Check if this is an access-control rejection
    pub fn is_unauthorized(&self) -> bool {
        matches!(self, Error::Unauthorized { .. })
    }
}

/// Failure reported by an implementation's call handler
///
/// The host rolls back every effect the reverting call made.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("execution reverted: {reason}")]
pub struct Revert {
    /// Reason given by the implementation
    pub reason: String,
}

impl Revert {
    /// Create a revert with a reason
    pub fn new(reason: impl Into<String>) -> Self {
        Revert {
            reason: reason.into(),
        }
    }
}
