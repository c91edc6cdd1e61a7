#![doc = include_str!("../README.md")]
#![deny(
    clippy::nursery,
    clippy::pedantic,
    warnings,
    missing_docs,
    unused_crate_dependencies
)]

// Only pulled in to enable `alloc` for cosmwasm-crypto
use ed25519_zebra as _;

pub mod context;
pub mod contract;
pub mod error;
pub mod instantiate;
pub mod msg;
pub mod query;
pub mod state;
pub mod sudo;

#[cfg(test)]
pub mod test;

pub use error::ContractError;
