#![doc = include_str!("../README.md")]
#![deny(
    clippy::nursery,
    clippy::pedantic,
    warnings,
    missing_docs,
    unused_crate_dependencies
)]

#[cfg(test)]
use serde_json as _;

/// Return early with the given error if the condition does not hold.
macro_rules! ensure {
    ($cond:expr, $err:expr) => {
        if !$cond {
            return Err($err);
        }
    };
}

pub mod client_message;
pub mod client_state;
pub mod commitment;
pub mod consensus_state;
pub mod counterparty;
pub mod delay;
pub mod error;
pub mod genesis;
pub mod header;
pub mod height;
pub mod host;
pub mod membership;
pub mod misbehaviour;
pub mod packet;
pub mod path;
pub mod proposal;
pub mod proto;
pub mod store;
pub mod update;
pub mod upgrade;

#[cfg(any(test, feature = "test-utils"))]
pub mod test_utils;

/// The client type reported by every mock client type.
pub const CLIENT_TYPE: &str = "mock-client";
