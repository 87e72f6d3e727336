//! Proxyforge - versioned contract-type registry and clone factories
//!
//! Operators register named contract types, each with an append-only list
//! of implementation versions. Anyone can then deploy an initialized clone
//! of a registered type at an address derived from their own identity and
//! the initialization payload, and can predict that address in advance.
//!
//! # Quick Start
//!
//! ```ignore
//! use proxyforge::{Address, ContractVersion, DeterministicFactory, Host};
//!
//! let host = Host::new();
//! let implementation = host.deploy_implementation(publisher, logic)?;
//!
//! let mut factory = DeterministicFactory::new(Address::from_label("factory"), operator);
//! factory
//!     .registry_mut()
//!     .add_deployable_contract(operator, "ERC721", ContractVersion::new("1", implementation))?;
//!
//! let predicted = factory.predict_deployed_address(&host, caller, "ERC721", &payload)?;
//! let instance = host.transaction(caller, |ctx| factory.deploy_latest(ctx, "ERC721", &payload))?;
//! assert_eq!(instance, predicted);
//! ```
//!
//! # Architecture
//!
//! - `proxyforge-core`: identifiers, records, errors and the platform traits
//! - `proxyforge-security`: single-operator access control
//! - `proxyforge-registry`: the version registry
//! - `proxyforge-host`: in-memory platform with atomic transactions
//! - `proxyforge-factory`: deterministic and simple clone factories

pub use proxyforge_core::*;
pub use proxyforge_factory::{DeterministicFactory, FactoryConfig, SimpleFactory, CONFIG_FILE_NAME};
pub use proxyforge_host::{CodeInfo, Host, TransactionContext};
pub use proxyforge_registry::VersionRegistry;
pub use proxyforge_security::OperatorGuard;
