//! Deployment scenarios
//!
//! Version selection, address prediction, collisions and failed
//! initialization, through both factories.

use crate::common::*;
use proxyforge::{Address, Error, Event, Host, SimpleFactory};

// ============================================================================
// DeterministicFactory
// ============================================================================

#[test]
fn latest_and_indexed_deploys_pick_their_versions() {
    let host = Host::new();
    let (factory, impl_a, impl_b) = erc721_factory(&host);

    let latest = host
        .transaction(caller(), |ctx| factory.deploy_latest(ctx, "ERC721", b"payload"))
        .unwrap();
    let first = host
        .transaction(caller(), |ctx| factory.deploy_version(ctx, "ERC721", b"payload", 0))
        .unwrap();

    assert_eq!(host.implementation_of(latest), Some(impl_b));
    assert_eq!(host.implementation_of(first), Some(impl_a));
}

#[test]
fn predicted_address_collision_and_fresh_payload() {
    let host = Host::new();
    let (factory, _, _) = erc721_factory(&host);
    let payload = b"P";

    let predicted = factory
        .predict_deployed_address_for_version(&host, caller(), "ERC721", payload, 0)
        .unwrap();
    let instance = host
        .transaction(caller(), |ctx| factory.deploy_version(ctx, "ERC721", payload, 0))
        .unwrap();
    assert_eq!(instance, predicted);
    assert_eq!(host.storage_at(instance, b"payload"), Some(payload.to_vec()));

    let err = host
        .transaction(caller(), |ctx| factory.deploy_version(ctx, "ERC721", payload, 0))
        .unwrap_err();
    assert_eq!(err, Error::DeploymentCollision { address: instance });

    let other = host
        .transaction(caller(), |ctx| factory.deploy_version(ctx, "ERC721", b"P-prime", 0))
        .unwrap();
    assert_ne!(other, instance);

    let deployments: Vec<_> = host
        .events()
        .iter()
        .filter_map(Event::as_deployment)
        .map(|record| record.instance)
        .collect();
    assert_eq!(deployments, vec![instance, other]);
}

#[test]
fn failed_initializer_leaves_no_instance() {
    let host = Host::new();
    let (factory, _, _) = erc721_factory(&host);
    let payload = b"fail";
    let predicted = factory
        .predict_deployed_address(&host, caller(), "ERC721", payload)
        .unwrap();

    let err = host
        .transaction(caller(), |ctx| factory.deploy_latest(ctx, "ERC721", payload))
        .unwrap_err();

    assert_eq!(
        err,
        Error::InitializationFailed {
            instance: predicted,
            reason: "initializer rejected payload".to_string(),
        }
    );
    assert!(!host.has_code(predicted));
    assert!(host.events().is_empty());
}

#[test]
fn several_deploys_in_one_transaction_commit_together() {
    let host = Host::new();
    let (factory, _, _) = erc721_factory(&host);

    let err = host
        .transaction(caller(), |ctx| {
            factory.deploy_latest(ctx, "ERC721", b"one")?;
            factory.deploy_latest(ctx, "ERC721", b"two")?;
            factory.deploy_latest(ctx, "ERC721", b"one")
        })
        .unwrap_err();

    assert!(err.is_collision());
    assert_eq!(host.event_count(), 0);
}

#[test]
fn deployment_records_serialize_to_json() {
    let host = Host::new();
    let (factory, _, impl_b) = erc721_factory(&host);

    let instance = host
        .transaction(caller(), |ctx| factory.deploy_latest(ctx, "ERC721", b"payload"))
        .unwrap();

    let json: serde_json::Value =
        serde_json::from_str(&host.events()[0].to_json().unwrap()).unwrap();
    assert_eq!(json["event"], "contract_deployed");
    assert_eq!(json["instance"], instance.to_string());
    assert_eq!(json["implementation"], impl_b.to_string());
    assert_eq!(json["type_name"], "ERC721");
    assert_eq!(json["version_id"], "2");
}

// ============================================================================
// SimpleFactory
// ============================================================================

#[test]
fn simple_factory_clones_unregistered_implementations() {
    let host = Host::new();
    let implementation = install_token(&host);
    let factory = SimpleFactory::new(Address::from_label("simple-factory"));

    let first = host
        .transaction(caller(), |ctx| factory.deploy(ctx, implementation, b"payload"))
        .unwrap();
    let second = host
        .transaction(caller(), |ctx| factory.deploy(ctx, implementation, b"payload"))
        .unwrap();

    assert_ne!(first, second);
    assert_eq!(host.storage_at(second, b"payload"), Some(b"payload".to_vec()));

    let err = host
        .transaction(caller(), |ctx| factory.deploy(ctx, implementation, b"fail"))
        .unwrap_err();
    assert_eq!(err.error_code(), "InitializationFailed");
    assert_eq!(host.event_count(), 2);
}
