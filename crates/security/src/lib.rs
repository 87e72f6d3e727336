//! Access control for proxyforge.
//!
//! This crate provides [`OperatorGuard`], the single-operator gate placed in
//! front of every registry mutation. Exactly one operator exists at a time
//! and only the current operator can hand the role to someone else.
//!
//! ```ignore
//! use proxyforge_security::OperatorGuard;
//!
//! let mut guard = OperatorGuard::new(operator);
//! guard.ensure_operator(caller)?;
//! ```

#![warn(missing_docs)]

use proxyforge_core::{Address, Error, Event, Result};
use serde::{Deserialize, Serialize};

/// Single-operator capability check.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct OperatorGuard {
    operator: Address,
}

impl OperatorGuard {
    /// Create a guard with `operator` as the initial operator.
    pub fn new(operator: Address) -> Self {
        OperatorGuard { operator }
    }

    /// The current operator.
    pub fn operator(&self) -> Address {
        self.operator
    }

    /// Check whether `caller` is the current operator.
    pub fn is_operator(&self, caller: Address) -> bool {
        caller == self.operator
    }

    /// Fail with `Unauthorized` unless `caller` is the current operator.
    pub fn ensure_operator(&self, caller: Address) -> Result<()> {
        if self.is_operator(caller) {
            Ok(())
        } else {
            Err(Error::Unauthorized {
                caller,
                operator: self.operator,
            })
        }
    }

    /// Hand the operator role to `new_operator`.
    ///
    /// Only the current operator may do this. Returns the
    /// `OperatorTransferred` event describing the change.
    pub fn transfer_operator(&mut self, caller: Address, new_operator: Address) -> Result<Event> {
        self.ensure_operator(caller)?;
        let previous = self.operator;
        self.operator = new_operator;
        Ok(Event::OperatorTransferred {
            previous,
            new: new_operator,
        })
    }
}
