//! Registry entry types
//!
//! A `DeployableContract` is a named, append-only list of `ContractVersion`s.
//! Indices into `versions` are stable: nothing is ever removed, reordered or
//! compacted, so "latest" simply means the highest index at lookup time.

use crate::types::Address;
use serde::{Deserialize, Serialize};

/// One implementation version of a contract type
///
/// Immutable once appended. `id` is a human-readable label and is not
/// required to be unique within a type.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ContractVersion {
    /// Human-readable version label
    pub id: String,
    /// Address of the implementation code instances delegate to
    pub implementation: Address,
}

impl ContractVersion {
    /// Create a version
    pub fn new(id: impl Into<String>, implementation: Address) -> Self {
        ContractVersion {
            id: id.into(),
            implementation,
        }
    }
}

/// A registered contract type and its versions
///
/// `Default` is the zero value returned for unknown type names:
/// `created = false`, empty name, no versions.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct DeployableContract {
    /// Whether the type has been registered
    pub created: bool,
    /// Human-readable type name
    pub type_name: String,
    /// Versions in append order
    pub versions: Vec<ContractVersion>,
}

impl DeployableContract {
    /// Number of versions
    #[inline]
    pub fn version_count(&self) -> usize {
        self.versions.len()
    }

    /// Version at `index`, if present
    pub fn version(&self, index: usize) -> Option<&ContractVersion> {
        self.versions.get(index)
    }

    /// Version with the highest index
    pub fn latest_version(&self) -> Option<&ContractVersion> {
        self.versions.last()
    }

    /// Index of the latest version
    pub fn latest_index(&self) -> Option<usize> {
        self.versions.len().checked_sub(1)
    }
}
