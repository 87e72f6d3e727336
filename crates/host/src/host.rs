//! Host: committed state plus the transaction API
//!
//! ## Transaction API
//!
//! `host.transaction(caller, |ctx| { ... })` is the atomicity boundary:
//! - the closure stages effects in a `TransactionContext`
//! - `Ok` commits every staged effect, in order
//! - `Err` discards all of them
//!
//! Transactions are serialized: the write lock is held from begin to commit.
//! Reading from the same `Host` inside a transaction closure deadlocks; use
//! the context's own read methods instead.

use crate::context::TransactionContext;
use crate::state::{Code, CodeInfo, WorldState};
use parking_lot::RwLock;
use proxyforge_core::{Address, AddressPredictor, CallContext, Error, Event, Implementation, Result};
use std::sync::Arc;
use tracing::debug;

/// In-memory platform holding code, instance storage and the event log
#[derive(Debug, Default)]
pub struct Host {
    state: RwLock<WorldState>,
}

impl Host {
    /// Create an empty host
    pub fn new() -> Self {
        Self::default()
    }

    /// Execute `f` as one atomic unit of work on behalf of `caller`
    ///
    /// # Returns
    /// * `Ok(T)` - closure result; all staged effects are committed
    /// * `Err` - closure error; nothing is committed
    pub fn transaction<F, T>(&self, caller: Address, f: F) -> Result<T>
    where
        F: FnOnce(&mut TransactionContext<'_>) -> Result<T>,
    {
        let mut state = self.state.write();

        let (result, effects) = {
            let mut ctx = TransactionContext::new(caller, &state);
            let result = f(&mut ctx);
            (result, ctx.into_effects())
        };

        match result {
            Ok(value) => {
                let staged = effects.len();
                state.apply(effects);
                debug!(
                    target: "proxyforge::host",
                    %caller,
                    effects = staged,
                    "Transaction committed"
                );
                Ok(value)
            }
            Err(e) => {
                debug!(
                    target: "proxyforge::host",
                    %caller,
                    discarded = effects.len(),
                    error = %e,
                    "Transaction aborted"
                );
                Err(e)
            }
        }
    }

    /// Install implementation code in its own transaction
    pub fn deploy_implementation(
        &self,
        deployer: Address,
        logic: Arc<dyn Implementation>,
    ) -> Result<Address> {
        self.transaction(deployer, |ctx| ctx.deploy_implementation(deployer, logic))
    }

    /// Call `target` in its own transaction
    ///
    /// # Errors
    ///
    /// `CallFailed` if the call reverts.
    pub fn call(&self, caller: Address, target: Address, payload: &[u8]) -> Result<Vec<u8>> {
        self.transaction(caller, |ctx| {
            ctx.call(caller, target, payload)
                .map_err(|revert| Error::CallFailed {
                    target,
                    reason: revert.reason,
                })
        })
    }

    // ========================================================================
    // Committed-state reads
    // ========================================================================

    /// Description of the code at `address`, if any
    pub fn code_at(&self, address: Address) -> Option<CodeInfo> {
        self.state.read().code(&address).map(Code::info)
    }

    /// Whether `address` carries code
    pub fn has_code(&self, address: Address) -> bool {
        self.state.read().code(&address).is_some()
    }

    /// Implementation a clone delegates to (`None` for non-clones)
    pub fn implementation_of(&self, address: Address) -> Option<Address> {
        match self.state.read().code(&address) {
            Some(Code::Proxy { implementation }) => Some(*implementation),
            _ => None,
        }
    }

    /// Committed storage slot of `address`
    pub fn storage_at(&self, address: Address, key: &[u8]) -> Option<Vec<u8>> {
        self.state.read().storage(&address, key).cloned()
    }

    /// Creation nonce of `address`
    pub fn nonce_of(&self, address: Address) -> u64 {
        self.state.read().nonce(&address)
    }

    /// Full event log
    pub fn events(&self) -> Vec<Event> {
        self.state.read().events.clone()
    }

    /// Events from position `from` onward
    pub fn events_since(&self, from: usize) -> Vec<Event> {
        let state = self.state.read();
        state.events.get(from..).map(<[Event]>::to_vec).unwrap_or_default()
    }

    /// Number of events in the log
    pub fn event_count(&self) -> usize {
        self.state.read().events.len()
    }
}

impl AddressPredictor for Host {}
