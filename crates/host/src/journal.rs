//! Staged effects of an open transaction
//!
//! Effects are appended in execution order. Reads consult the journal
//! newest-first before falling back to committed state, so a transaction
//! always sees its own writes. Rolling back to a savepoint truncates the
//! journal; committing hands the whole journal to `WorldState::apply`.

use crate::state::Code;
use proxyforge_core::{Address, Event, Savepoint};

/// One staged state change
#[derive(Debug, Clone)]
pub(crate) enum Effect {
    CreateAccount {
        address: Address,
        code: Code,
    },
    StorageWrite {
        address: Address,
        key: Vec<u8>,
        value: Vec<u8>,
    },
    SetNonce {
        address: Address,
        nonce: u64,
    },
    Emit(Event),
}

#[derive(Debug, Default)]
pub(crate) struct Journal {
    effects: Vec<Effect>,
}

impl Journal {
    pub(crate) fn push(&mut self, effect: Effect) {
        self.effects.push(effect);
    }

    pub(crate) fn len(&self) -> usize {
        self.effects.len()
    }

    pub(crate) fn savepoint(&self) -> Savepoint {
        Savepoint::new(self.effects.len())
    }

    pub(crate) fn rollback_to(&mut self, savepoint: Savepoint) {
        self.effects.truncate(savepoint.position());
    }

    pub(crate) fn into_effects(self) -> Vec<Effect> {
        self.effects
    }

    /// Code created at `address` in this transaction
    pub(crate) fn code(&self, address: &Address) -> Option<&Code> {
        self.effects.iter().rev().find_map(|effect| match effect {
            Effect::CreateAccount { address: a, code } if a == address => Some(code),
            _ => None,
        })
    }

    /// Latest staged value of a storage slot
    pub(crate) fn storage(&self, address: &Address, key: &[u8]) -> Option<&Vec<u8>> {
        self.effects.iter().rev().find_map(|effect| match effect {
            Effect::StorageWrite {
                address: a,
                key: k,
                value,
            } if a == address && k.as_slice() == key => Some(value),
            _ => None,
        })
    }

    /// Latest staged nonce of `address`
    pub(crate) fn nonce(&self, address: &Address) -> Option<u64> {
        self.effects.iter().rev().find_map(|effect| match effect {
            Effect::SetNonce { address: a, nonce } if a == address => Some(*nonce),
            _ => None,
        })
    }

    pub(crate) fn events(&self) -> impl Iterator<Item = &Event> {
        self.effects.iter().filter_map(|effect| match effect {
            Effect::Emit(event) => Some(event),
            _ => None,
        })
    }
}
