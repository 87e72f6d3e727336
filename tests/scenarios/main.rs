//! End-to-end scenarios
//!
//! Drives the public `proxyforge` facade the way an integrator would:
//! - registry administration by the operator
//! - deployments from ordinary callers against a host
//! - configuration loaded from `proxyforge.toml`
//! - prediction and collision properties over random inputs

mod common;

mod configuration;
mod deployment;
mod properties;
mod registry_administration;
