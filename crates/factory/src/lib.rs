//! Clone factories for proxyforge
//!
//! - [`DeterministicFactory`]: resolves a registered contract type to a
//!   version, clones it at an address derived from (caller, payload), and
//!   initializes it
//! - [`SimpleFactory`]: clones any implementation at a fresh address and
//!   initializes it
//!
//! Both run against any [`DeployContext`](proxyforge_core::DeployContext),
//! typically a host transaction:
//!
//! ```ignore
//! let instance = host.transaction(caller, |ctx| {
//!     factory.deploy_latest(ctx, "ERC721", &payload)
//! })?;
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod config;
mod deterministic;
mod simple;

pub use config::{FactoryConfig, CONFIG_FILE_NAME};
pub use deterministic::DeterministicFactory;
pub use simple::SimpleFactory;
