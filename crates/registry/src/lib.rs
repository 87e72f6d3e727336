//! Versioned contract-type registry
//!
//! Maps human-readable contract type names to ordered, append-only lists of
//! implementation versions. Registration and version appends are gated on a
//! single operator; lookups are public and return owned snapshots.
//!
//! ## Invariants
//!
//! - A type is created at most once; re-registration fails with
//!   `ContractAlreadyCreated`
//! - Versions are only ever appended; index `i` never changes meaning
//! - Enumeration follows registration order
//! - Unknown type names resolve to the zero value on plain lookup, but fail
//!   with `InvalidDeployableContract` when resolved for deployment

#![warn(missing_docs)]
#![warn(clippy::all)]

mod registry;

pub use registry::VersionRegistry;
