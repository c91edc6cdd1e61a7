//! The messages that are passed between the contract and the ibc-go module
#![allow(clippy::module_name_repetitions)]

use cosmwasm_schema::{cw_serde, QueryResponses};
use cosmwasm_std::Binary;
use mock_light_client::{
    client_message::ClientMessage, commitment::MerklePath as MockMerklePath, height::Height,
    proto::decode_any,
};

use crate::ContractError;

/// The message to instantiate the contract
#[cw_serde]
pub struct InstantiateMsg {
    /// The client state, a protobuf `Any` of the mock client state
    pub client_state: Binary,
    /// The consensus state, a protobuf `Any` of the mock consensus state
    pub consensus_state: Binary,
    /// The checksum of this wasm code
    pub checksum: Binary,
}

/// The sudo messages called by `ibc-go`
#[cw_serde]
pub enum SudoMsg {
    /// The message to update the client state
    UpdateState(UpdateStateMsg),
    /// The message to update the client state on misbehaviour
    UpdateStateOnMisbehaviour(UpdateStateOnMisbehaviourMsg),
    /// The message to verify an upgrade and update the client state
    VerifyUpgradeAndUpdateState(VerifyUpgradeAndUpdateStateMsg),
    /// The message to verify membership
    VerifyMembership(VerifyMembershipMsg),
    /// The message to verify non-membership
    VerifyNonMembership(VerifyNonMembershipMsg),
    /// The message to migrate the client store
    MigrateClientStore(MigrateClientStoreMsg),
}

/// The query messages called by `ibc-go`
#[cw_serde]
#[derive(QueryResponses)]
pub enum QueryMsg {
    /// The message to verify the client message
    #[returns[()]]
    VerifyClientMessage(VerifyClientMessageMsg),

    /// The message to check for misbehaviour
    #[returns[CheckForMisbehaviourResult]]
    CheckForMisbehaviour(CheckForMisbehaviourMsg),

    /// The message to get the timestamp at height
    #[returns[TimestampAtHeightResult]]
    TimestampAtHeight(TimestampAtHeightMsg),

    /// The message to get the status
    #[returns[StatusResult]]
    Status(StatusMsg),

    /// The message to export the genesis metadata
    #[returns[ExportMetadataResult]]
    ExportMetadata(ExportMetadataMsg),
}

/// The message to migrate the contract
#[cw_serde]
pub struct MigrateMsg {}

/// Update state message
#[cw_serde]
pub struct UpdateStateMsg {
    /// The client message
    pub client_message: Binary,
}

/// Update state on misbehaviour message
#[cw_serde]
pub struct UpdateStateOnMisbehaviourMsg {
    /// The client message
    pub client_message: Binary,
}

/// Verify upgrade and update state message
#[cw_serde]
pub struct VerifyUpgradeAndUpdateStateMsg {
    /// The upgraded client state
    pub upgrade_client_state: Binary,
    /// The upgraded consensus state
    pub upgrade_consensus_state: Binary,
    /// The proof of the upgraded client state
    pub proof_upgrade_client: Binary,
    /// The proof of the upgraded consensus state
    pub proof_upgrade_consensus_state: Binary,
}

/// The merkle path
#[cw_serde]
pub struct MerklePath {
    /// The key path
    pub key_path: Vec<Binary>,
}

impl From<MerklePath> for MockMerklePath {
    fn from(path: MerklePath) -> Self {
        Self {
            key_path: path.key_path.into_iter().map(Into::into).collect(),
        }
    }
}

/// Verify membership message
#[cw_serde]
pub struct VerifyMembershipMsg {
    /// The proof height
    pub height: Height,
    /// The delay time period
    pub delay_time_period: u64,
    /// The delay block period
    pub delay_block_period: u64,
    /// The proof bytes
    pub proof: Binary,
    /// The path to the value
    pub merkle_path: MerklePath,
    /// The value to verify against the proof
    pub value: Binary,
}

/// Verify non-membership message
#[cw_serde]
pub struct VerifyNonMembershipMsg {
    /// The proof height
    pub height: Height,
    /// The delay time period
    pub delay_time_period: u64,
    /// The delay block period
    pub delay_block_period: u64,
    /// The proof bytes
    pub proof: Binary,
    /// The path to the empty value
    pub merkle_path: MerklePath,
}

/// Migrate client store message
#[cw_serde]
pub struct MigrateClientStoreMsg {}

/// The message to verify the client message
#[cw_serde]
pub struct VerifyClientMessageMsg {
    /// The client message to verify
    pub client_message: Binary,
}

/// The message to check for misbehaviour
#[cw_serde]
pub struct CheckForMisbehaviourMsg {
    /// The client message to check
    pub client_message: Binary,
}

/// The message to get the timestamp at height
#[cw_serde]
pub struct TimestampAtHeightMsg {
    /// The height to get the timestamp at
    pub height: Height,
}

/// The status query message
#[cw_serde]
pub struct StatusMsg {}

/// The export metadata query message
#[cw_serde]
pub struct ExportMetadataMsg {}

/// The result of updating the client state
#[cw_serde]
pub struct UpdateStateResult {
    /// The updated client state heights
    pub heights: Vec<Height>,
}

/// The response to the status query
#[cw_serde]
pub struct StatusResult {
    /// The status of the client
    pub status: String,
}

/// The response to the check for misbehaviour query
#[cw_serde]
pub struct CheckForMisbehaviourResult {
    /// Whether the client has found misbehaviour
    pub found_misbehaviour: bool,
}

/// The response to the timestamp at height query
#[cw_serde]
pub struct TimestampAtHeightResult {
    /// The timestamp at the height (in nanoseconds)
    pub timestamp: u64,
}

/// A genesis metadata entry
#[cw_serde]
pub struct GenesisMetadata {
    /// The store key
    pub key: Binary,
    /// The stored value
    pub value: Binary,
}

/// The response to the export metadata query
#[cw_serde]
pub struct ExportMetadataResult {
    /// The metadata to export at genesis
    pub genesis_metadata: Vec<GenesisMetadata>,
}

/// Decodes a client message from its protobuf `Any` encoding.
/// # Errors
/// Returns an error if the bytes are not an `Any` of a mock header or misbehaviour.
pub fn decode_client_message(client_message: &Binary) -> Result<ClientMessage, ContractError> {
    decode_any(client_message)
        .and_then(|any| ClientMessage::try_from(&any))
        .map_err(ContractError::DeserializeClientMessageFailed)
}
