//! VersionRegistry: type name → ordered versions
//!
//! Storage is a hash map keyed by `TypeKey` plus a separate list of keys in
//! registration order, since map iteration order is unspecified.
//!
//! Every mutation checks the operator first, then validates, and only then
//! writes. A failed mutation therefore leaves the registry untouched.

use proxyforge_core::{
    Address, ContractVersion, DeployableContract, Error, Event, InvalidReason, Limits, Result,
    TypeKey, VersionSelector,
};
use proxyforge_security::OperatorGuard;
use std::collections::HashMap;
use tracing::{debug, info};

/// Registry of deployable contract types
#[derive(Debug, Clone)]
pub struct VersionRegistry {
    guard: OperatorGuard,
    limits: Limits,
    contracts: HashMap<TypeKey, DeployableContract>,
    /// Keys in registration order
    order: Vec<TypeKey>,
}

impl VersionRegistry {
    /// Create an empty registry operated by `operator`
    pub fn new(operator: Address) -> Self {
        Self::with_limits(operator, Limits::default())
    }

    /// Create an empty registry with custom input limits
    pub fn with_limits(operator: Address, limits: Limits) -> Self {
        VersionRegistry {
            guard: OperatorGuard::new(operator),
            limits,
            contracts: HashMap::new(),
            order: Vec::new(),
        }
    }

    // ========================================================================
    // Access control
    // ========================================================================

    /// Current operator
    pub fn operator(&self) -> Address {
        self.guard.operator()
    }

    /// Hand the operator role to `new_operator` (operator-only)
    pub fn transfer_operator(&mut self, caller: Address, new_operator: Address) -> Result<Event> {
        let event = self.guard.transfer_operator(caller, new_operator)?;
        info!(
            target: "proxyforge::registry",
            previous = %caller,
            new = %new_operator,
            "Operator transferred"
        );
        Ok(event)
    }

    /// Input limits applied by this registry
    pub fn limits(&self) -> &Limits {
        &self.limits
    }

    // ========================================================================
    // Mutations (operator-only)
    // ========================================================================

    /// Register `type_name` with `version` as its first version (index 0)
    ///
    /// # Errors
    ///
    /// - `Unauthorized` if `caller` is not the operator
    /// - `LimitExceeded` if the name or version id is too long
    /// - `ContractAlreadyCreated` if the type was registered before
    pub fn add_deployable_contract(
        &mut self,
        caller: Address,
        type_name: &str,
        version: ContractVersion,
    ) -> Result<Event> {
        self.guard.ensure_operator(caller)?;
        self.limits.validate_type_name(type_name)?;
        self.limits.validate_version_id(&version.id)?;

        let key = TypeKey::of(type_name);
        if self.is_created_key(&key) {
            return Err(Error::ContractAlreadyCreated {
                type_name: type_name.to_string(),
            });
        }

        let event = Event::DeployableContractAdded {
            type_name: type_name.to_string(),
            version_id: version.id.clone(),
            implementation: version.implementation,
        };

        info!(
            target: "proxyforge::registry",
            type_name,
            version_id = %version.id,
            implementation = %version.implementation,
            "Deployable contract added"
        );

        self.contracts.insert(
            key,
            DeployableContract {
                created: true,
                type_name: type_name.to_string(),
                versions: vec![version],
            },
        );
        self.order.push(key);

        Ok(event)
    }

    /// Append `version` to an existing type
    ///
    /// Duplicate ids and duplicate implementations are accepted; each append
    /// gets its own index.
    ///
    /// # Errors
    ///
    /// - `Unauthorized` if `caller` is not the operator
    /// - `LimitExceeded` if the version id is too long
    /// - `InvalidDeployableContract` if the type was never created
    pub fn add_contract_version(
        &mut self,
        caller: Address,
        type_name: &str,
        version: ContractVersion,
    ) -> Result<Event> {
        self.guard.ensure_operator(caller)?;
        self.limits.validate_version_id(&version.id)?;

        let entry = match self.contracts.get_mut(&TypeKey::of(type_name)) {
            Some(entry) if entry.created => entry,
            _ => return Err(Error::invalid_deployable(type_name, InvalidReason::NotCreated)),
        };

        let version_index = entry.versions.len();
        let event = Event::ContractVersionAdded {
            type_name: type_name.to_string(),
            version_index,
            version_id: version.id.clone(),
            implementation: version.implementation,
        };

        info!(
            target: "proxyforge::registry",
            type_name,
            version_index,
            version_id = %version.id,
            implementation = %version.implementation,
            "Contract version added"
        );

        entry.versions.push(version);
        Ok(event)
    }

    // ========================================================================
    // Lookups (public)
    // ========================================================================

    /// All registered types in registration order
    pub fn deployable_contracts(&self) -> Vec<DeployableContract> {
        self.order
            .iter()
            .filter_map(|key| self.contracts.get(key))
            .cloned()
            .collect()
    }

    /// Snapshot of one type, or the zero value if it was never registered
    pub fn deployable_contract(&self, type_name: &str) -> DeployableContract {
        self.contracts
            .get(&TypeKey::of(type_name))
            .cloned()
            .unwrap_or_default()
    }

    /// Whether `type_name` has been registered
    pub fn is_created(&self, type_name: &str) -> bool {
        self.is_created_key(&TypeKey::of(type_name))
    }

    /// Number of registered types
    pub fn len(&self) -> usize {
        self.order.len()
    }

    /// Whether no type has been registered
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Latest version of `type_name`
    pub fn latest_version(&self, type_name: &str) -> Result<ContractVersion> {
        self.resolve(type_name, VersionSelector::Latest)
    }

    /// Resolve a type name and selector to a concrete version
    ///
    /// # Errors
    ///
    /// `InvalidDeployableContract` if the type was never created, has no
    /// versions, or the index is out of bounds.
    pub fn resolve(&self, type_name: &str, selector: VersionSelector) -> Result<ContractVersion> {
        let entry = match self.contracts.get(&TypeKey::of(type_name)) {
            Some(entry) if entry.created => entry,
            _ => return Err(Error::invalid_deployable(type_name, InvalidReason::NotCreated)),
        };

        let len = entry.versions.len();
        if len == 0 {
            return Err(Error::invalid_deployable(type_name, InvalidReason::NoVersions));
        }

        let index = match selector {
            VersionSelector::Latest => len - 1,
            VersionSelector::Index(index) if index < len => index,
            VersionSelector::Index(index) => {
                return Err(Error::invalid_deployable(
                    type_name,
                    InvalidReason::IndexOutOfBounds { index, len },
                ))
            }
        };

        debug!(target: "proxyforge::registry", type_name, %selector, index, "Version resolved");
        Ok(entry.versions[index].clone())
    }

    fn is_created_key(&self, key: &TypeKey) -> bool {
        self.contracts.get(key).map(|c| c.created).unwrap_or(false)
    }
}
