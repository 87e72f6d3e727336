//! Committed world state
//!
//! Only `Host` mutates this, and only by applying a committed journal.

use crate::journal::Effect;
use proxyforge_core::{Address, Event, Implementation};
use std::collections::{BTreeMap, HashMap};
use std::fmt;
use std::sync::Arc;

/// Code attached to an address
#[derive(Clone)]
pub enum Code {
    /// Implementation logic, executed directly
    Implementation(Arc<dyn Implementation>),
    /// Minimal proxy delegating every call to `implementation`
    Proxy {
        /// Address carrying the implementation code
        implementation: Address,
    },
}

impl Code {
    /// Public description of this code
    pub fn info(&self) -> CodeInfo {
        match self {
            Code::Implementation(logic) => CodeInfo::Implementation {
                name: logic.name().to_string(),
            },
            Code::Proxy { implementation } => CodeInfo::Proxy {
                implementation: *implementation,
            },
        }
    }
}

impl fmt::Debug for Code {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(&self.info(), f)
    }
}

/// Read-only description of the code at an address
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CodeInfo {
    /// Implementation code
    Implementation {
        /// `Implementation::name`
        name: String,
    },
    /// Clone instance
    Proxy {
        /// Implementation the clone delegates to
        implementation: Address,
    },
}

/// An address that carries code
#[derive(Debug, Clone)]
pub(crate) struct Account {
    pub(crate) code: Code,
    pub(crate) storage: BTreeMap<Vec<u8>, Vec<u8>>,
}

/// Everything committed so far
#[derive(Debug, Default)]
pub(crate) struct WorldState {
    pub(crate) accounts: HashMap<Address, Account>,
    pub(crate) nonces: HashMap<Address, u64>,
    pub(crate) events: Vec<Event>,
}

impl WorldState {
    pub(crate) fn code(&self, address: &Address) -> Option<&Code> {
        self.accounts.get(address).map(|a| &a.code)
    }

    pub(crate) fn storage(&self, address: &Address, key: &[u8]) -> Option<&Vec<u8>> {
        self.accounts.get(address).and_then(|a| a.storage.get(key))
    }

    pub(crate) fn nonce(&self, address: &Address) -> u64 {
        self.nonces.get(address).copied().unwrap_or(0)
    }

    /// Apply committed effects in order
    pub(crate) fn apply(&mut self, effects: Vec<Effect>) {
        for effect in effects {
            match effect {
                Effect::CreateAccount { address, code } => {
                    self.accounts.insert(
                        address,
                        Account {
                            code,
                            storage: BTreeMap::new(),
                        },
                    );
                }
                Effect::StorageWrite {
                    address,
                    key,
                    value,
                } => {
                    if let Some(account) = self.accounts.get_mut(&address) {
                        account.storage.insert(key, value);
                    }
                }
                Effect::SetNonce { address, nonce } => {
                    self.nonces.insert(address, nonce);
                }
                Effect::Emit(event) => self.events.push(event),
            }
        }
    }
}
