//! Common test utilities for scenario tests

#![allow(dead_code)]

use proxyforge::{
    Address, CallFrame, ContractVersion, DeterministicFactory, Host, Implementation, Revert,
};
use std::sync::Arc;

/// Contract whose initializer stores the payload once
///
/// Payloads starting with `fail` revert after writing storage.
pub struct Token;

impl Implementation for Token {
    fn name(&self) -> &str {
        "token"
    }

    fn call(&self, frame: &mut dyn CallFrame, input: &[u8]) -> Result<Vec<u8>, Revert> {
        if frame.storage_get(b"initialized").is_some() {
            return Err(Revert::new("already initialized"));
        }
        frame.storage_set(b"initialized", vec![1]);
        frame.storage_set(b"payload", input.to_vec());
        if input.starts_with(b"fail") {
            return Err(Revert::new("initializer rejected payload"));
        }
        Ok(Vec::new())
    }
}

pub fn operator() -> Address {
    Address::from_label("operator")
}

pub fn caller() -> Address {
    Address::from_label("caller")
}

pub fn factory_address() -> Address {
    Address::from_label("deterministic-factory")
}

/// Install a fresh `Token` implementation
pub fn install_token(host: &Host) -> Address {
    host.deploy_implementation(Address::from_label("publisher"), Arc::new(Token))
        .unwrap()
}

/// Factory with "ERC721" registered as version "1" → A and "2" → B
pub fn erc721_factory(host: &Host) -> (DeterministicFactory, Address, Address) {
    let impl_a = install_token(host);
    let impl_b = install_token(host);
    let mut factory = DeterministicFactory::new(factory_address(), operator());
    factory
        .registry_mut()
        .add_deployable_contract(operator(), "ERC721", ContractVersion::new("1", impl_a))
        .unwrap();
    factory
        .registry_mut()
        .add_contract_version(operator(), "ERC721", ContractVersion::new("2", impl_b))
        .unwrap();
    (factory, impl_a, impl_b)
}
