//! Hashing and address derivation
//!
//! Both creation schemes reduce a SHA-256 digest to its low 20 bytes:
//!
//! ```text
//! deterministic: last20(SHA-256(0xff ‖ deployer ‖ salt ‖ implementation))
//! sequential:    last20(SHA-256(0xfe ‖ deployer ‖ nonce as u64 big-endian))
//! ```
//!
//! The distinct domain prefixes keep the two address spaces apart.

use crate::types::{Address, Salt};
use sha2::{Digest, Sha256};

const DETERMINISTIC_PREFIX: u8 = 0xff;
const SEQUENTIAL_PREFIX: u8 = 0xfe;

/// SHA-256 over the concatenation of `parts`
pub fn sha256(parts: &[&[u8]]) -> [u8; 32] {
    let mut hasher = Sha256::new();
    for part in parts {
        hasher.update(part);
    }
    hasher.finalize().into()
}

/// Address a deterministic clone of `implementation` lands at
///
/// Pure function of its inputs: the same deployer, implementation and salt
/// always yield the same address.
pub fn deterministic_address(deployer: &Address, implementation: &Address, salt: &Salt) -> Address {
    let digest = sha256(&[
        &[DETERMINISTIC_PREFIX],
        deployer.as_bytes(),
        salt.as_bytes(),
        implementation.as_bytes(),
    ]);
    Address::from_digest(&digest)
}

/// Address of the `nonce`-th non-deterministic creation by `deployer`
pub fn sequential_address(deployer: &Address, nonce: u64) -> Address {
    let digest = sha256(&[
        &[SEQUENTIAL_PREFIX],
        deployer.as_bytes(),
        &nonce.to_be_bytes(),
    ]);
    Address::from_digest(&digest)
}
