//! Collaborator traits
//!
//! The registry and factories never touch platform state directly. They go
//! through these seams, which the host crate implements for its transaction
//! context:
//!
//! - `AddressPredictor` / `ClonePrimitive`: clone creation and address prediction
//! - `CallContext`: invoker identity and calls into instances
//! - `EventSink`: append-only record output
//! - `Atomic`: savepoints for discarding an operation's own partial effects
//!
//! `Implementation` and `CallFrame` are the other direction: the code a clone
//! delegates to, and the view of the clone's storage it runs against.

use crate::error::{Result, Revert};
use crate::event::Event;
use crate::hashing;
use crate::types::{Address, Salt};

/// Pure deterministic-address computation
pub trait AddressPredictor {
    /// Address `clone_deterministic(deployer, implementation, salt)` would use
    fn predict_deterministic_address(
        &self,
        deployer: Address,
        implementation: Address,
        salt: Salt,
    ) -> Address {
        hashing::deterministic_address(&deployer, &implementation, &salt)
    }
}

/// Proxy-cloning primitive
pub trait ClonePrimitive: AddressPredictor {
    /// Create a clone at a fresh address
    ///
    /// # Errors
    ///
    /// `MissingImplementation` if `implementation` carries no implementation code.
    fn clone_contract(&mut self, deployer: Address, implementation: Address) -> Result<Address>;

    /// Create a clone at the address derived from (deployer, implementation, salt)
    ///
    /// # Errors
    ///
    /// - `DeploymentCollision` if that address is already occupied
    /// - `MissingImplementation` if `implementation` carries no implementation code
    fn clone_deterministic(
        &mut self,
        deployer: Address,
        implementation: Address,
        salt: Salt,
    ) -> Result<Address>;
}

/// Invoker identity and outbound calls
pub trait CallContext {
    /// Identity of whoever invoked the current operation
    fn caller(&self) -> Address;

    /// Invoke `payload` against `target` as a single call made by `from`
    ///
    /// A reverting call leaves no effects behind.
    fn call(
        &mut self,
        from: Address,
        target: Address,
        payload: &[u8],
    ) -> std::result::Result<Vec<u8>, Revert>;
}

/// Append-only record sink
pub trait EventSink {
    /// Record an event
    fn emit(&mut self, event: Event);
}

/// Position in a unit of work's effect log
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Savepoint(usize);

impl Savepoint {
    /// Create a savepoint at `position`
    pub const fn new(position: usize) -> Self {
        Savepoint(position)
    }

    /// Number of effects staged before this savepoint
    pub const fn position(&self) -> usize {
        self.0
    }
}

/// Nested rollback inside a unit of work
pub trait Atomic {
    /// Mark the current position
    fn savepoint(&self) -> Savepoint;

    /// Discard every effect staged after `savepoint`
    fn rollback_to(&mut self, savepoint: Savepoint);
}

/// Everything a factory needs to deploy
pub trait DeployContext: ClonePrimitive + CallContext + EventSink + Atomic {}

impl<T: ClonePrimitive + CallContext + EventSink + Atomic + ?Sized> DeployContext for T {}

/// Code that clone instances delegate to
///
/// Calls execute against the *instance's* storage, never the
/// implementation's own.
pub trait Implementation: Send + Sync {
    /// Short name used in logs
    fn name(&self) -> &str;

    /// Handle one call
    fn call(&self, frame: &mut dyn CallFrame, input: &[u8]) -> std::result::Result<Vec<u8>, Revert>;
}

/// Execution view handed to an `Implementation`
pub trait CallFrame {
    /// Address whose storage this call operates on
    fn this(&self) -> Address;

    /// Identity that made the call
    fn sender(&self) -> Address;

    /// Read a storage slot
    fn storage_get(&self, key: &[u8]) -> Option<Vec<u8>>;

    /// Write a storage slot
    fn storage_set(&mut self, key: &[u8], value: Vec<u8>);
}
