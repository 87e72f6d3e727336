//! Emitted records
//!
//! Events are appended to the host's event log when the enclosing
//! transaction commits. They are meant for off-system indexers and are never
//! read back by the registry or the factories.

use crate::types::Address;
use serde::{Deserialize, Serialize};

/// Record of a successful clone + initialize
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContractDeployed {
    /// Identity that invoked the deploy
    pub deployer: Address,
    /// Address of the new instance
    pub instance: Address,
    /// Implementation the instance delegates to
    pub implementation: Address,
    /// Contract type name (empty for untyped deployments)
    pub type_name: String,
    /// Version id (empty for untyped deployments)
    pub version_id: String,
}

/// Any record the system emits
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum Event {
    /// An instance was created and initialized
    ContractDeployed(ContractDeployed),

    /// A new contract type was registered with its first version
    DeployableContractAdded {
        /// Registered type name
        type_name: String,
        /// Id of version 0
        version_id: String,
        /// Implementation of version 0
        implementation: Address,
    },

    /// A version was appended to an existing type
    ContractVersionAdded {
        /// Type name
        type_name: String,
        /// Index the version landed at
        version_index: usize,
        /// Version id
        version_id: String,
        /// Version implementation
        implementation: Address,
    },

    /// The registry operator changed
    OperatorTransferred {
        /// Operator before the transfer
        previous: Address,
        /// Operator after the transfer
        new: Address,
    },
}

impl Event {
    /// Short name of the event kind
    pub fn kind(&self) -> &'static str {
        match self {
            Event::ContractDeployed(_) => "contract_deployed",
            Event::DeployableContractAdded { .. } => "deployable_contract_added",
            Event::ContractVersionAdded { .. } => "contract_version_added",
            Event::OperatorTransferred { .. } => "operator_transferred",
        }
    }

    /// The deployment record, if this is one
    pub fn as_deployment(&self) -> Option<&ContractDeployed> {
        match self {
            Event::ContractDeployed(record) => Some(record),
            _ => None,
        }
    }

    /// Render as a single JSON object
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }
}

impl From<ContractDeployed> for Event {
    fn from(record: ContractDeployed) -> Self {
        Event::ContractDeployed(record)
    }
}
