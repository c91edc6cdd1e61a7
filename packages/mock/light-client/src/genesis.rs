//! Genesis export.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::client_state::ClientState;

/// A raw store entry exported with the client at genesis
#[derive(Serialize, Deserialize, JsonSchema, PartialEq, Eq, Clone, Debug)]
pub struct GenesisMetadata {
    /// The store key
    pub key: Vec<u8>,
    /// The stored value
    pub value: Vec<u8>,
}

/// The mock client exports no metadata besides its client and consensus states.
#[must_use]
pub const fn export_metadata(_client_state: &ClientState) -> Vec<GenesisMetadata> {
    Vec::new()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exports_nothing() {
        assert!(export_metadata(&ClientState::default()).is_empty());
    }
}
