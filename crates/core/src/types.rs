//! Identity and digest types
//!
//! - `Address`: 20-byte identity for callers, operators, implementations,
//!   factories and deployed instances
//! - `TypeKey`: registry key derived from a human-readable type name
//! - `Salt`: deterministic-deployment salt derived from (caller, payload)
//! - `VersionSelector`: which version of a type a deploy resolves to
//!
//! All identities render as `0x`-prefixed lowercase hex and serialize as that
//! string, so records emitted for indexers stay human-readable.

use crate::hashing::sha256;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Error returned when parsing a hex identity fails
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum HexParseError {
    /// Input had the wrong number of hex digits
    #[error("expected {expected} hex digits, got {actual}")]
    InvalidLength {
        /// Required digit count
        expected: usize,
        /// Digit count found
        actual: usize,
    },

    /// Input contained a non-hex character
    #[error("invalid hex character '{0}'")]
    InvalidCharacter(char),
}

fn encode_hex(bytes: &[u8]) -> String {
    let mut out = String::with_capacity(bytes.len() * 2);
    for byte in bytes {
        out.push_str(&format!("{:02x}", byte));
    }
    out
}

fn decode_hex<const N: usize>(input: &str) -> Result<[u8; N], HexParseError> {
    let digits = input
        .strip_prefix("0x")
        .or_else(|| input.strip_prefix("0X"))
        .unwrap_or(input);
    if digits.len() != N * 2 {
        return Err(HexParseError::InvalidLength {
            expected: N * 2,
            actual: digits.len(),
        });
    }

    let mut out = [0u8; N];
    let chars: Vec<char> = digits.chars().collect();
    for (i, pair) in chars.chunks(2).enumerate() {
        let hi = pair[0]
            .to_digit(16)
            .ok_or(HexParseError::InvalidCharacter(pair[0]))?;
        let lo = pair[1]
            .to_digit(16)
            .ok_or(HexParseError::InvalidCharacter(pair[1]))?;
        out[i] = ((hi << 4) | lo) as u8;
    }
    Ok(out)
}

// ============================================================================
// Address
// ============================================================================

/// 20-byte identity
///
/// Callers, the registry operator, implementation code, factories and clone
/// instances are all addressed the same way.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct Address([u8; 20]);

impl Address {
    /// Length of an address in bytes
    pub const LEN: usize = 20;

    /// The all-zero address
    pub const ZERO: Address = Address([0u8; 20]);

    /// Create an address from raw bytes
    pub const fn new(bytes: [u8; 20]) -> Self {
        Address(bytes)
    }

    /// Derive a stable address from a label
    ///
    /// Takes the last 20 bytes of SHA-256(label). Handy for naming well-known
    /// identities (operators, factories) without managing key material.
    pub fn from_label(label: &str) -> Self {
        Self::from_digest(&sha256(&[label.as_bytes()]))
    }

    /// Take the low 20 bytes of a 32-byte digest
    pub(crate) fn from_digest(digest: &[u8; 32]) -> Self {
        let mut bytes = [0u8; 20];
        bytes.copy_from_slice(&digest[12..]);
        Address(bytes)
    }

    /// Raw bytes
    #[inline]
    pub const fn as_bytes(&self) -> &[u8; 20] {
        &self.0
    }

    /// Check whether this is the zero address
    #[inline]
    pub fn is_zero(&self) -> bool {
        self.0 == [0u8; 20]
    }
}

impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "0x{}", encode_hex(&self.0))
    }
}

impl fmt::Debug for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Address({})", self)
    }
}

impl FromStr for Address {
    type Err = HexParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        decode_hex::<20>(s).map(Address)
    }
}

impl From<[u8; 20]> for Address {
    fn from(bytes: [u8; 20]) -> Self {
        Address(bytes)
    }
}

impl Serialize for Address {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Address {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

// ============================================================================
// TypeKey
// ============================================================================

/// Registry key for a contract type
///
/// SHA-256 of the UTF-8 type name. Two names map to the same key only if
/// they are byte-identical.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TypeKey([u8; 32]);

impl TypeKey {
    /// Compute the key for a type name
    pub fn of(type_name: &str) -> Self {
        TypeKey(sha256(&[type_name.as_bytes()]))
    }

    /// Raw digest bytes
    #[inline]
    pub const fn as_bytes(&self) -> &[u8; 32] {
        &self.0
    }
}

impl fmt::Display for TypeKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "0x{}", encode_hex(&self.0))
    }
}

impl fmt::Debug for TypeKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "TypeKey({})", self)
    }
}

// ============================================================================
// Salt
// ============================================================================

/// Deterministic-deployment salt
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Salt([u8; 32]);

impl Salt {
    /// Wrap raw salt bytes
    pub const fn new(bytes: [u8; 32]) -> Self {
        Salt(bytes)
    }

    /// Derive the salt for a deployment: SHA-256(caller ‖ payload)
    ///
    /// Identical (caller, payload) pairs always produce the same salt, which
    /// is what makes a repeated deploy collide on the same address.
    pub fn derive(caller: &Address, payload: &[u8]) -> Self {
        Salt(sha256(&[caller.as_bytes(), payload]))
    }

    /// Raw salt bytes
    #[inline]
    pub const fn as_bytes(&self) -> &[u8; 32] {
        &self.0
    }
}

impl fmt::Display for Salt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "0x{}", encode_hex(&self.0))
    }
}

impl fmt::Debug for Salt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Salt({})", self)
    }
}

impl FromStr for Salt {
    type Err = HexParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        decode_hex::<32>(s).map(Salt)
    }
}

// ============================================================================
// VersionSelector
// ============================================================================

/// Which version of a contract type to resolve
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum VersionSelector {
    /// Highest index present at lookup time
    #[default]
    Latest,
    /// A specific index into the version list
    Index(usize),
}

impl fmt::Display for VersionSelector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            VersionSelector::Latest => write!(f, "latest"),
            VersionSelector::Index(i) => write!(f, "#{}", i),
        }
    }
}
