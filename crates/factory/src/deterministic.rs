//! DeterministicFactory: registry-backed clone deployment at predictable addresses
//!
//! ## Deploy sequence
//!
//! ```text
//! 1. Resolve the type and version (InvalidDeployableContract on failure)
//! 2. salt = SHA-256(caller ‖ payload)
//! 3. Deterministic clone of the version's implementation
//!    (DeploymentCollision if the address is occupied)
//! 4. Call the payload against the new instance
//!    (InitializationFailed if it reverts)
//! 5. Emit ContractDeployed, return the instance address
//! ```
//!
//! Steps 3-5 run inside a savepoint. Any failure rolls back to it before the
//! error is returned, so a failed initialization never leaves a clone behind,
//! even if the surrounding transaction goes on to commit.
//!
//! The same caller deploying the same payload against the same version
//! always targets the same address, so the second attempt collides. Callers
//! wanting several instances vary the payload or use `SimpleFactory`.

use crate::config::FactoryConfig;
use proxyforge_core::{
    Address, AddressPredictor, CallContext, ContractDeployed, ContractVersion, DeployContext,
    Error, Event, EventSink, Result, Salt, VersionSelector,
};
use proxyforge_registry::VersionRegistry;
use tracing::{info, warn};

/// Factory deploying initialized clones of registered contract types
#[derive(Debug, Clone)]
pub struct DeterministicFactory {
    address: Address,
    registry: VersionRegistry,
}

impl DeterministicFactory {
    /// Create a factory living at `address` with an empty registry
    pub fn new(address: Address, operator: Address) -> Self {
        DeterministicFactory {
            address,
            registry: VersionRegistry::new(operator),
        }
    }

    /// Create a factory from configuration
    pub fn from_config(address: Address, config: &FactoryConfig) -> Self {
        DeterministicFactory {
            address,
            registry: VersionRegistry::with_limits(config.operator, config.limits.clone()),
        }
    }

    /// Address the factory deploys from
    pub fn address(&self) -> Address {
        self.address
    }

    /// The backing registry
    pub fn registry(&self) -> &VersionRegistry {
        &self.registry
    }

    /// The backing registry, for operator mutations
    pub fn registry_mut(&mut self) -> &mut VersionRegistry {
        &mut self.registry
    }

    // ========================================================================
    // Administration (operator-only, recorded)
    // ========================================================================

    /// Register `type_name` as `ctx.caller()` and emit `DeployableContractAdded`
    ///
    /// The registry is not part of the host's journal. Make this the last
    /// fallible step of its transaction so the entry and its event commit
    /// together.
    pub fn add_deployable_contract<C>(
        &mut self,
        ctx: &mut C,
        type_name: &str,
        version: ContractVersion,
    ) -> Result<()>
    where
        C: CallContext + EventSink + ?Sized,
    {
        let event = self.registry.add_deployable_contract(ctx.caller(), type_name, version)?;
        ctx.emit(event);
        Ok(())
    }

    /// Append a version as `ctx.caller()` and emit `ContractVersionAdded`
    pub fn add_contract_version<C>(
        &mut self,
        ctx: &mut C,
        type_name: &str,
        version: ContractVersion,
    ) -> Result<()>
    where
        C: CallContext + EventSink + ?Sized,
    {
        let event = self.registry.add_contract_version(ctx.caller(), type_name, version)?;
        ctx.emit(event);
        Ok(())
    }

    /// Hand the operator role over as `ctx.caller()` and emit `OperatorTransferred`
    pub fn transfer_operator<C>(&mut self, ctx: &mut C, new_operator: Address) -> Result<()>
    where
        C: CallContext + EventSink + ?Sized,
    {
        let event = self.registry.transfer_operator(ctx.caller(), new_operator)?;
        ctx.emit(event);
        Ok(())
    }

    // ========================================================================
    // Deploy
    // ========================================================================

    /// Deploy the latest version of `type_name`
    pub fn deploy_latest<C>(&self, ctx: &mut C, type_name: &str, payload: &[u8]) -> Result<Address>
    where
        C: DeployContext + ?Sized,
    {
        self.deploy(ctx, type_name, payload, VersionSelector::Latest)
    }

    /// Deploy the version at `version_index` of `type_name`
    pub fn deploy_version<C>(
        &self,
        ctx: &mut C,
        type_name: &str,
        payload: &[u8],
        version_index: usize,
    ) -> Result<Address>
    where
        C: DeployContext + ?Sized,
    {
        self.deploy(ctx, type_name, payload, VersionSelector::Index(version_index))
    }

    /// Deploy the selected version of `type_name`
    ///
    /// # Errors
    ///
    /// - `LimitExceeded` if the payload is too large
    /// - `InvalidDeployableContract` if the type or version does not resolve
    /// - `DeploymentCollision` if this caller already deployed this payload
    ///   against this implementation
    /// - `MissingImplementation` if the version's implementation has no code
    /// - `InitializationFailed` if the payload call reverts
    pub fn deploy<C>(
        &self,
        ctx: &mut C,
        type_name: &str,
        payload: &[u8],
        selector: VersionSelector,
    ) -> Result<Address>
    where
        C: DeployContext + ?Sized,
    {
        self.registry.limits().validate_payload(payload)?;
        let version = self.registry.resolve(type_name, selector)?;
        let caller = ctx.caller();
        let salt = Salt::derive(&caller, payload);

        let savepoint = ctx.savepoint();
        match self.clone_and_initialize(ctx, &version, salt, payload) {
            Ok(instance) => {
                ctx.emit(Event::ContractDeployed(ContractDeployed {
                    deployer: caller,
                    instance,
                    implementation: version.implementation,
                    type_name: type_name.to_string(),
                    version_id: version.id.clone(),
                }));
                info!(
                    target: "proxyforge::factory",
                    type_name,
                    version_id = %version.id,
                    %instance,
                    deployer = %caller,
                    "Contract deployed"
                );
                Ok(instance)
            }
            Err(e) => {
                ctx.rollback_to(savepoint);
                warn!(
                    target: "proxyforge::factory",
                    type_name,
                    %selector,
                    deployer = %caller,
                    error = %e,
                    "Deployment failed"
                );
                Err(e)
            }
        }
    }

    fn clone_and_initialize<C>(
        &self,
        ctx: &mut C,
        version: &ContractVersion,
        salt: Salt,
        payload: &[u8],
    ) -> Result<Address>
    where
        C: DeployContext + ?Sized,
    {
        let instance = ctx.clone_deterministic(self.address, version.implementation, salt)?;
        ctx.call(self.address, instance, payload)
            .map_err(|revert| Error::InitializationFailed {
                instance,
                reason: revert.reason,
            })?;
        Ok(instance)
    }

    // ========================================================================
    // Prediction
    // ========================================================================

    /// Address `deploy_latest` would return for `caller` and `payload`
    ///
    /// Pure: validates like `deploy_latest` but changes nothing. Does not
    /// check whether the address is already occupied.
    pub fn predict_deployed_address<P>(
        &self,
        predictor: &P,
        caller: Address,
        type_name: &str,
        payload: &[u8],
    ) -> Result<Address>
    where
        P: AddressPredictor + ?Sized,
    {
        self.predict(predictor, caller, type_name, payload, VersionSelector::Latest)
    }

    /// Address `deploy_version` would return for `caller` and `payload`
    pub fn predict_deployed_address_for_version<P>(
        &self,
        predictor: &P,
        caller: Address,
        type_name: &str,
        payload: &[u8],
        version_index: usize,
    ) -> Result<Address>
    where
        P: AddressPredictor + ?Sized,
    {
        self.predict(
            predictor,
            caller,
            type_name,
            payload,
            VersionSelector::Index(version_index),
        )
    }

    /// Address `deploy` would return for `caller`, `payload` and `selector`
    pub fn predict<P>(
        &self,
        predictor: &P,
        caller: Address,
        type_name: &str,
        payload: &[u8],
        selector: VersionSelector,
    ) -> Result<Address>
    where
        P: AddressPredictor + ?Sized,
    {
        self.registry.limits().validate_payload(payload)?;
        let version = self.registry.resolve(type_name, selector)?;
        let salt = Salt::derive(&caller, payload);
        Ok(predictor.predict_deterministic_address(self.address, version.implementation, salt))
    }
}
