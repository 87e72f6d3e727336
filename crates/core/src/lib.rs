//! Core types and traits for proxyforge
//!
//! This crate defines the foundational types used throughout the system:
//! - Address, TypeKey, Salt: identities and digests
//! - ContractVersion, DeployableContract: registry entries
//! - Event, ContractDeployed: emitted records
//! - Error: error taxonomy shared by every crate
//! - Limits: input size limits
//! - Traits: collaborator seams (clone primitive, calls, events, savepoints)

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod deployable;
pub mod error;
pub mod event;
pub mod hashing;
pub mod limits;
pub mod traits;
pub mod types;

// Re-export commonly used types and traits
pub use deployable::{ContractVersion, DeployableContract};
pub use error::{Error, InvalidReason, Result, Revert};
pub use event::{ContractDeployed, Event};
pub use limits::{LimitError, Limits};
pub use traits::{
    AddressPredictor, Atomic, CallContext, CallFrame, ClonePrimitive, DeployContext, EventSink,
    Implementation, Savepoint,
};
pub use types::{Address, HexParseError, Salt, TypeKey, VersionSelector};
