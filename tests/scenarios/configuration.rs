//! Configuration scenarios
//!
//! Loading `proxyforge.toml` and building a factory from it.

use crate::common::*;
use proxyforge::{ContractVersion, DeterministicFactory, FactoryConfig, Host, CONFIG_FILE_NAME};
use tempfile::TempDir;

#[test]
fn default_file_must_be_edited_before_use() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join(CONFIG_FILE_NAME);

    FactoryConfig::write_default_if_missing(&path).unwrap();

    let err = FactoryConfig::from_file(&path).unwrap_err();
    assert_eq!(err.error_code(), "Config");
}

#[test]
fn factory_from_config_enforces_limits_and_operator() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join(CONFIG_FILE_NAME);
    std::fs::write(
        &path,
        format!(
            "operator = \"{}\"\n\n[limits]\nmax_version_id_bytes = 4\nmax_payload_bytes = 8\n",
            operator()
        ),
    )
    .unwrap();

    let config = FactoryConfig::from_file(&path).unwrap();
    let host = Host::new();
    let implementation = install_token(&host);
    let mut factory = DeterministicFactory::from_config(factory_address(), &config);

    let err = factory
        .registry_mut()
        .add_deployable_contract(
            operator(),
            "ERC721",
            ContractVersion::new("v1.0.0", implementation),
        )
        .unwrap_err();
    assert_eq!(err.error_code(), "LimitExceeded");

    factory
        .registry_mut()
        .add_deployable_contract(operator(), "ERC721", ContractVersion::new("v1", implementation))
        .unwrap();

    let err = host
        .transaction(caller(), |ctx| factory.deploy_latest(ctx, "ERC721", b"a long payload"))
        .unwrap_err();
    assert_eq!(err.error_code(), "LimitExceeded");

    host.transaction(caller(), |ctx| factory.deploy_latest(ctx, "ERC721", b"short"))
        .unwrap();
}

#[test]
fn config_survives_a_write_and_reload() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join(CONFIG_FILE_NAME);
    let config = FactoryConfig::new(operator());

    config.write_to_file(&path).unwrap();

    assert_eq!(FactoryConfig::from_file(&path).unwrap(), config);
}
