//! Test helpers for mock light client contract tests

use cosmwasm_std::testing::{
    message_info, mock_dependencies, mock_env, MockApi, MockQuerier, MockStorage,
};
use cosmwasm_std::{coins, Binary, DepsMut, Empty, OwnedDeps};
use ibc_proto::google::protobuf::Any;
use mock_light_client::{
    client_message::ClientMessage, client_state::ClientState, commitment::CommitmentMode,
    consensus_state::ConsensusState, header::Header, height::Height,
};
use prost::Message;

use crate::{contract::instantiate, msg::InstantiateMsg};

/// Checksum used for every test client
pub const CHECKSUM: &[u8] = b"mock_checksum";

/// Mock dependencies for testing
#[must_use]
pub fn mk_deps() -> OwnedDeps<MockStorage, MockApi, MockQuerier, Empty> {
    mock_dependencies()
}

/// Protobuf encoding of the `Any` of a client state
#[must_use]
pub fn client_state_bz(client_state: &ClientState) -> Binary {
    Any::from(client_state).encode_to_vec().into()
}

/// Protobuf encoding of the `Any` of a consensus state
#[must_use]
pub fn consensus_state_bz(consensus_state: &ConsensusState) -> Binary {
    Any::from(consensus_state).encode_to_vec().into()
}

/// Protobuf encoding of the `Any` of a header
#[must_use]
pub fn header_bz(revision_height: u64, timestamp: u64) -> Binary {
    let header = ClientMessage::Header(Header::new(Height::new(0, revision_height), timestamp));
    Any::from(&header).encode_to_vec().into()
}

/// Instantiates a client at `latest_height` with a consensus state at `timestamp`
/// # Panics
/// Panics if instantiation fails
pub fn instantiate_client(
    deps: DepsMut,
    latest_height: Height,
    timestamp: u64,
    commitment_mode: CommitmentMode,
) -> ClientState {
    let creator = MockApi::default().addr_make("creator");
    let info = message_info(&creator, &coins(1, "uatom"));
    let client_state = ClientState::new(latest_height, commitment_mode);

    let msg = InstantiateMsg {
        client_state: client_state_bz(&client_state),
        consensus_state: consensus_state_bz(&ConsensusState::new(timestamp)),
        checksum: CHECKSUM.into(),
    };
    instantiate(deps, mock_env(), info, msg).unwrap();

    client_state
}
