//! Registry administration scenarios
//!
//! Registration, version appends, enumeration and operator access control.

use crate::common::*;
use proxyforge::{
    Address, ContractVersion, DeployableContract, DeterministicFactory, Error, Event, Host,
    InvalidReason, VersionRegistry,
};

// ============================================================================
// Registration
// ============================================================================

#[test]
fn register_then_read_back() {
    let host = Host::new();
    let impl_a = install_token(&host);
    let mut registry = VersionRegistry::new(operator());

    let event = registry
        .add_deployable_contract(operator(), "ERC721", ContractVersion::new("1", impl_a))
        .unwrap();

    assert_eq!(
        event,
        Event::DeployableContractAdded {
            type_name: "ERC721".to_string(),
            version_id: "1".to_string(),
            implementation: impl_a,
        }
    );
    assert_eq!(
        registry.deployable_contract("ERC721"),
        DeployableContract {
            created: true,
            type_name: "ERC721".to_string(),
            versions: vec![ContractVersion::new("1", impl_a)],
        }
    );
}

#[test]
fn append_then_enumerate() {
    let host = Host::new();
    let (factory, impl_a, impl_b) = erc721_factory(&host);
    let registry = factory.registry();

    let all = registry.deployable_contracts();
    assert_eq!(all.len(), 1);
    assert_eq!(
        all[0].versions,
        vec![
            ContractVersion::new("1", impl_a),
            ContractVersion::new("2", impl_b)
        ]
    );
    assert_eq!(registry.latest_version("ERC721").unwrap().implementation, impl_b);
}

#[test]
fn append_to_unregistered_type_changes_nothing() {
    let host = Host::new();
    let (mut factory, _, impl_b) = erc721_factory(&host);
    let before = factory.registry().deployable_contracts();

    let err = factory
        .registry_mut()
        .add_contract_version(operator(), "Unregistered", ContractVersion::new("1", impl_b))
        .unwrap_err();

    assert_eq!(
        err,
        Error::invalid_deployable("Unregistered", InvalidReason::NotCreated)
    );
    assert_eq!(factory.registry().deployable_contracts(), before);
    assert!(!factory.registry().deployable_contract("Unregistered").created);
}

#[test]
fn unknown_type_reads_as_zero_value() {
    let registry = VersionRegistry::new(operator());
    assert_eq!(registry.deployable_contract("Nope"), DeployableContract::default());
    assert!(registry.deployable_contracts().is_empty());
}

// ============================================================================
// Access control
// ============================================================================

#[test]
fn non_operator_cannot_register() {
    let host = Host::new();
    let impl_a = install_token(&host);
    let mut registry = VersionRegistry::new(operator());

    let err = registry
        .add_deployable_contract(caller(), "ERC721", ContractVersion::new("1", impl_a))
        .unwrap_err();

    assert!(err.is_unauthorized());
    assert_eq!(registry.deployable_contracts().len(), 0);
}

#[test]
fn operator_handover() {
    let host = Host::new();
    let impl_a = install_token(&host);
    let successor = Address::from_label("successor");
    let mut registry = VersionRegistry::new(operator());

    registry.transfer_operator(operator(), successor).unwrap();

    assert!(registry
        .add_deployable_contract(operator(), "ERC721", ContractVersion::new("1", impl_a))
        .unwrap_err()
        .is_unauthorized());
    registry
        .add_deployable_contract(successor, "ERC721", ContractVersion::new("1", impl_a))
        .unwrap();
    assert_eq!(registry.operator(), successor);
}

// ============================================================================
// Event log
// ============================================================================

#[test]
fn administration_and_deployment_share_one_event_log() {
    let host = Host::new();
    let impl_a = install_token(&host);
    let impl_b = install_token(&host);
    let mut factory = DeterministicFactory::new(factory_address(), operator());

    host.transaction(operator(), |ctx| {
        factory.add_deployable_contract(ctx, "ERC721", ContractVersion::new("1", impl_a))
    })
    .unwrap();
    host.transaction(operator(), |ctx| {
        factory.add_contract_version(ctx, "ERC721", ContractVersion::new("2", impl_b))
    })
    .unwrap();
    host.transaction(caller(), |ctx| factory.deploy_latest(ctx, "ERC721", b"payload"))
        .unwrap();

    let kinds: Vec<&str> = host.events().iter().map(Event::kind).collect();
    assert_eq!(
        kinds,
        vec![
            "deployable_contract_added",
            "contract_version_added",
            "contract_deployed"
        ]
    );
}
