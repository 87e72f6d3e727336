//! SimpleFactory: untyped clone + initialize
//!
//! Clones any caller-supplied implementation at a fresh address and runs the
//! initialization payload against it. No registry, no access control, no
//! address prediction. Failure handling matches `DeterministicFactory`: the
//! clone only survives if initialization succeeds.

use proxyforge_core::{Address, ContractDeployed, DeployContext, Error, Event, Limits, Result};
use tracing::{info, warn};

/// Factory for non-deterministic clones of arbitrary implementations
#[derive(Debug, Clone)]
pub struct SimpleFactory {
    address: Address,
    limits: Limits,
}

impl SimpleFactory {
    /// Create a factory living at `address`
    pub fn new(address: Address) -> Self {
        Self::with_limits(address, Limits::default())
    }

    /// Create a factory with custom input limits
    pub fn with_limits(address: Address, limits: Limits) -> Self {
        SimpleFactory { address, limits }
    }

    /// Address the factory deploys from
    pub fn address(&self) -> Address {
        self.address
    }

    /// Clone `implementation` and initialize it with `payload`
    ///
    /// # Errors
    ///
    /// - `LimitExceeded` if the payload is too large
    /// - `MissingImplementation` if `implementation` has no code
    /// - `InitializationFailed` if the payload call reverts
    pub fn deploy<C>(&self, ctx: &mut C, implementation: Address, payload: &[u8]) -> Result<Address>
    where
        C: DeployContext + ?Sized,
    {
        self.limits.validate_payload(payload)?;
        let caller = ctx.caller();

        let savepoint = ctx.savepoint();
        let outcome = ctx
            .clone_contract(self.address, implementation)
            .and_then(|instance| {
                ctx.call(self.address, instance, payload)
                    .map(|_| instance)
                    .map_err(|revert| Error::InitializationFailed {
                        instance,
                        reason: revert.reason,
                    })
            });

        match outcome {
            Ok(instance) => {
                ctx.emit(Event::ContractDeployed(ContractDeployed {
                    deployer: caller,
                    instance,
                    implementation,
                    type_name: String::new(),
                    version_id: String::new(),
                }));
                info!(
                    target: "proxyforge::factory",
                    %implementation,
                    %instance,
                    deployer = %caller,
                    "Clone deployed"
                );
                Ok(instance)
            }
            Err(e) => {
                ctx.rollback_to(savepoint);
                warn!(
                    target: "proxyforge::factory",
                    %implementation,
                    deployer = %caller,
                    error = %e,
                    "Clone deployment failed"
                );
                Err(e)
            }
        }
    }
}
