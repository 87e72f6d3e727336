//! Shared fixtures for factory tests

#![allow(dead_code)]

use proxyforge_core::{Address, CallFrame, ContractVersion, Implementation, Revert};
use proxyforge_factory::DeterministicFactory;
use proxyforge_host::Host;
use std::sync::Arc;

/// Initializer-guarded test contract
///
/// Payloads are UTF-8 commands:
/// - `init:<name>` stores `name` once; a second init reverts
/// - `init-then-fail:<name>` writes storage and then reverts
/// - `name` returns the stored name
pub struct Initializable {
    label: String,
}

impl Initializable {
    pub fn new(label: &str) -> Self {
        Initializable {
            label: label.to_string(),
        }
    }
}

impl Implementation for Initializable {
    fn name(&self) -> &str {
        &self.label
    }

    fn call(&self, frame: &mut dyn CallFrame, input: &[u8]) -> Result<Vec<u8>, Revert> {
        let command = std::str::from_utf8(input).map_err(|_| Revert::new("payload is not utf-8"))?;

        if let Some(name) = command.strip_prefix("init:") {
            if frame.storage_get(b"initialized").is_some() {
                return Err(Revert::new("already initialized"));
            }
            let sender = frame.sender();
            frame.storage_set(b"initialized", vec![1]);
            frame.storage_set(b"name", name.as_bytes().to_vec());
            frame.storage_set(b"initializer", sender.as_bytes().to_vec());
            frame.storage_set(b"implementation", self.label.as_bytes().to_vec());
            return Ok(Vec::new());
        }

        if let Some(name) = command.strip_prefix("init-then-fail:") {
            frame.storage_set(b"initialized", vec![1]);
            frame.storage_set(b"name", name.as_bytes().to_vec());
            return Err(Revert::new("initializer failed"));
        }

        if command == "name" {
            return frame
                .storage_get(b"name")
                .ok_or_else(|| Revert::new("not initialized"));
        }

        Err(Revert::new(format!("unknown command '{}'", command)))
    }
}

pub fn operator() -> Address {
    Address::from_label("operator")
}

pub fn alice() -> Address {
    Address::from_label("alice")
}

pub fn bob() -> Address {
    Address::from_label("bob")
}

/// Host with two implementations and a factory that registers "ERC721"
/// as version "1" → A and version "2" → B
pub struct Fixture {
    pub host: Host,
    pub factory: DeterministicFactory,
    pub impl_a: Address,
    pub impl_b: Address,
}

pub fn fixture() -> Fixture {
    let host = Host::new();
    let publisher = Address::from_label("publisher");
    let impl_a = host
        .deploy_implementation(publisher, Arc::new(Initializable::new("A")))
        .unwrap();
    let impl_b = host
        .deploy_implementation(publisher, Arc::new(Initializable::new("B")))
        .unwrap();

    let mut factory = DeterministicFactory::new(Address::from_label("factory"), operator());
    factory
        .registry_mut()
        .add_deployable_contract(operator(), "ERC721", ContractVersion::new("1", impl_a))
        .unwrap();
    factory
        .registry_mut()
        .add_contract_version(operator(), "ERC721", ContractVersion::new("2", impl_b))
        .unwrap();

    Fixture {
        host,
        factory,
        impl_a,
        impl_b,
    }
}
