//! Transaction context
//!
//! A `TransactionContext` is the unit of work handed to the closure passed to
//! `Host::transaction`. It reads committed state through a shared reference
//! and stages every change in its journal. Nothing it does is visible outside
//! the transaction until the host commits the journal.
//!
//! The context implements the collaborator traits from `proxyforge-core`
//! (`ClonePrimitive`, `CallContext`, `EventSink`, `Atomic`), so factories run
//! against it directly.

use crate::journal::{Effect, Journal};
use crate::state::{Code, CodeInfo, WorldState};
use proxyforge_core::hashing::{deterministic_address, sequential_address};
use proxyforge_core::{
    Address, AddressPredictor, Atomic, CallContext, CallFrame, ClonePrimitive, Error, Event,
    EventSink, Implementation, Result, Revert, Salt, Savepoint,
};
use std::sync::Arc;
use tracing::debug;

/// Staged view of the world for one transaction
pub struct TransactionContext<'a> {
    caller: Address,
    state: &'a WorldState,
    journal: Journal,
}

impl<'a> TransactionContext<'a> {
    pub(crate) fn new(caller: Address, state: &'a WorldState) -> Self {
        TransactionContext {
            caller,
            state,
            journal: Journal::default(),
        }
    }

    pub(crate) fn into_effects(self) -> Vec<Effect> {
        self.journal.into_effects()
    }

    // ========================================================================
    // Reads (see staged effects)
    // ========================================================================

    /// Description of the code at `address`, if any
    pub fn code_at(&self, address: Address) -> Option<CodeInfo> {
        self.lookup_code(&address).map(Code::info)
    }

    /// Whether `address` carries code
    pub fn has_code(&self, address: Address) -> bool {
        self.lookup_code(&address).is_some()
    }

    /// Storage slot of `address`
    pub fn storage_at(&self, address: Address, key: &[u8]) -> Option<Vec<u8>> {
        self.journal
            .storage(&address, key)
            .or_else(|| self.state.storage(&address, key))
            .cloned()
    }

    /// Creation nonce of `address`
    pub fn nonce_of(&self, address: Address) -> u64 {
        self.journal
            .nonce(&address)
            .unwrap_or_else(|| self.state.nonce(&address))
    }

    /// Events staged so far in this transaction
    pub fn pending_events(&self) -> Vec<Event> {
        self.journal.events().cloned().collect()
    }

    /// Number of effects staged so far
    pub fn pending_effects(&self) -> usize {
        self.journal.len()
    }

    // ========================================================================
    // Writes
    // ========================================================================

    /// Install implementation code at the next sequential address of `deployer`
    pub fn deploy_implementation(
        &mut self,
        deployer: Address,
        logic: Arc<dyn Implementation>,
    ) -> Result<Address> {
        let address = self.allocate_sequential(deployer)?;
        debug!(
            target: "proxyforge::host",
            %address,
            name = logic.name(),
            "Implementation installed"
        );
        self.journal.push(Effect::CreateAccount {
            address,
            code: Code::Implementation(logic),
        });
        Ok(address)
    }

    // ========================================================================
    // Internals
    // ========================================================================

    fn lookup_code(&self, address: &Address) -> Option<&Code> {
        self.journal
            .code(address)
            .or_else(|| self.state.code(address))
    }

    fn ensure_implementation(&self, implementation: &Address) -> Result<()> {
        match self.lookup_code(implementation) {
            Some(Code::Implementation(_)) => Ok(()),
            _ => Err(Error::MissingImplementation {
                address: *implementation,
            }),
        }
    }

    /// Reserve the next sequential address of `deployer` and bump its nonce
    fn allocate_sequential(&mut self, deployer: Address) -> Result<Address> {
        let nonce = self.nonce_of(deployer);
        let address = sequential_address(&deployer, nonce);
        if self.has_code(address) {
            return Err(Error::DeploymentCollision { address });
        }
        self.journal.push(Effect::SetNonce {
            address: deployer,
            nonce: nonce + 1,
        });
        Ok(address)
    }

    fn resolve_logic(
        &self,
        target: &Address,
    ) -> std::result::Result<Arc<dyn Implementation>, Revert> {
        match self.lookup_code(target) {
            Some(Code::Implementation(logic)) => Ok(Arc::clone(logic)),
            Some(Code::Proxy { implementation }) => match self.lookup_code(implementation) {
                Some(Code::Implementation(logic)) => Ok(Arc::clone(logic)),
                _ => Err(Revert::new(format!(
                    "{} delegates to {} which has no implementation code",
                    target, implementation
                ))),
            },
            None => Err(Revert::new(format!("no code at {}", target))),
        }
    }
}

impl AddressPredictor for TransactionContext<'_> {}

impl ClonePrimitive for TransactionContext<'_> {
    fn clone_contract(&mut self, deployer: Address, implementation: Address) -> Result<Address> {
        self.ensure_implementation(&implementation)?;
        let address = self.allocate_sequential(deployer)?;
        self.journal.push(Effect::CreateAccount {
            address,
            code: Code::Proxy { implementation },
        });
        debug!(target: "proxyforge::host", %address, %implementation, "Clone created");
        Ok(address)
    }

    fn clone_deterministic(
        &mut self,
        deployer: Address,
        implementation: Address,
        salt: Salt,
    ) -> Result<Address> {
        self.ensure_implementation(&implementation)?;
        let address = deterministic_address(&deployer, &implementation, &salt);
        if self.has_code(address) {
            return Err(Error::DeploymentCollision { address });
        }
        self.journal.push(Effect::CreateAccount {
            address,
            code: Code::Proxy { implementation },
        });
        debug!(
            target: "proxyforge::host",
            %address,
            %implementation,
            %salt,
            "Deterministic clone created"
        );
        Ok(address)
    }
}

impl CallContext for TransactionContext<'_> {
    fn caller(&self) -> Address {
        self.caller
    }

    fn call(
        &mut self,
        from: Address,
        target: Address,
        payload: &[u8],
    ) -> std::result::Result<Vec<u8>, Revert> {
        let logic = self.resolve_logic(&target)?;
        let savepoint = self.journal.savepoint();

        let mut frame = Frame {
            ctx: self,
            this: target,
            sender: from,
        };
        let result = logic.call(&mut frame, payload);

        if let Err(revert) = &result {
            debug!(target: "proxyforge::host", %target, reason = %revert.reason, "Call reverted");
            self.journal.rollback_to(savepoint);
        }
        result
    }
}

impl EventSink for TransactionContext<'_> {
    fn emit(&mut self, event: Event) {
        self.journal.push(Effect::Emit(event));
    }
}

impl Atomic for TransactionContext<'_> {
    fn savepoint(&self) -> Savepoint {
        self.journal.savepoint()
    }

    fn rollback_to(&mut self, savepoint: Savepoint) {
        self.journal.rollback_to(savepoint);
    }
}

/// Call frame bound to the storage of `this`
struct Frame<'c, 'a> {
    ctx: &'c mut TransactionContext<'a>,
    this: Address,
    sender: Address,
}

impl CallFrame for Frame<'_, '_> {
    fn this(&self) -> Address {
        self.this
    }

    fn sender(&self) -> Address {
        self.sender
    }

    fn storage_get(&self, key: &[u8]) -> Option<Vec<u8>> {
        self.ctx.storage_at(self.this, key)
    }

    fn storage_set(&mut self, key: &[u8], value: Vec<u8>) {
        self.ctx.journal.push(Effect::StorageWrite {
            address: self.this,
            key: key.to_vec(),
            value,
        });
    }
}
