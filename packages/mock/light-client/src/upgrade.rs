//! Client upgrades, which the mock client does not support.

use ibc_proto::google::protobuf::Any;

use crate::{client_state::ClientState, error::MockClientError};

/// The inputs of an upgrade: the new states and their proofs on the counterparty
#[derive(PartialEq, Clone, Debug, Default)]
pub struct UpgradeRequest {
    /// The upgraded client state
    pub upgrade_client_state: Any,
    /// The upgraded consensus state
    pub upgrade_consensus_state: Any,
    /// Proof of the upgraded client state
    pub proof_upgrade_client: Vec<u8>,
    /// Proof of the upgraded consensus state
    pub proof_upgrade_consensus_state: Vec<u8>,
}

/// Always fails: a mock client cannot be upgraded.
/// # Errors
/// Always returns [`MockClientError::InvalidUpgradeClient`].
pub const fn verify_upgrade_and_update_state(
    _client_state: &ClientState,
    _upgrade: &UpgradeRequest,
) -> Result<(), MockClientError> {
    Err(MockClientError::InvalidUpgradeClient)
}
