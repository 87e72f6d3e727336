//! Deployment properties over random callers and payloads
//!
//! - the instance lands where prediction said it would
//! - repeating the exact deploy collides and records nothing new

use crate::common::*;
use proptest::prelude::*;
use proxyforge::{Address, Error, Host};

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn prop_deploy_matches_prediction_and_repeat_collides(
        caller in any::<[u8; 20]>().prop_map(Address::new),
        payload in proptest::collection::vec(any::<u8>(), 0..256)
            .prop_filter("initializer rejects fail*", |p| !p.starts_with(b"fail")),
        version in proptest::option::of(0usize..2),
    ) {
        let host = Host::new();
        let (factory, _, _) = erc721_factory(&host);

        let predicted = match version {
            Some(index) => factory
                .predict_deployed_address_for_version(&host, caller, "ERC721", &payload, index),
            None => factory.predict_deployed_address(&host, caller, "ERC721", &payload),
        }
        .unwrap();

        let deploy = |host: &Host| {
            host.transaction(caller, |ctx| match version {
                Some(index) => factory.deploy_version(ctx, "ERC721", &payload, index),
                None => factory.deploy_latest(ctx, "ERC721", &payload),
            })
        };

        let instance = deploy(&host).unwrap();
        prop_assert_eq!(instance, predicted);
        prop_assert_eq!(host.event_count(), 1);

        prop_assert_eq!(deploy(&host), Err(Error::DeploymentCollision { address: instance }));
        prop_assert_eq!(host.event_count(), 1);
    }
}
