//! In-memory platform for proxyforge
//!
//! This crate provides the collaborators the registry and factories rely on:
//! - Clone primitive: sequential and deterministic proxy creation, address prediction
//! - Calls: dispatch into implementation code against a clone's own storage
//! - Event log: append-only, observable after commit
//! - Transactions: all-or-nothing units of work with nested savepoints
//!
//! Transactions follow the closure pattern: commit on `Ok`, discard on `Err`.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod context;
pub mod host;
mod journal;
pub mod state;

pub use context::TransactionContext;
pub use host::Host;
pub use state::CodeInfo;
