//! Verification of counterparty IBC objects: client and consensus states,
//! connection and channel ends.
//!
//! Each object is protobuf-encoded, stored under its ICS-24 path below the
//! counterparty's commitment prefix and checked like any other membership
//! claim, so the client's [`CommitmentMode`](crate::commitment::CommitmentMode) applies.

use ibc_proto::{
    google::protobuf::Any,
    ibc::core::{channel::v1::Channel, connection::v1::ConnectionEnd},
};
use prost::Message;

use crate::{
    client_state::ClientState,
    commitment::{MerklePath, MerklePrefix},
    error::MockClientError,
    height::Height,
    host::HostContext,
    membership::{verify_membership, ProofRequest},
    path,
    store::ClientStoreReader,
};

fn prefixed(prefix: Option<&MerklePrefix>, path: String) -> MerklePath {
    MerklePath {
        key_path: vec![
            prefix.map(|p| p.key_prefix.clone()).unwrap_or_default(),
            path.into_bytes(),
        ],
    }
}

/// Verifies the client state stored by the counterparty for `client_id`.
/// # Errors
/// Returns an error if a proof precondition fails or the proof does not match.
pub fn verify_client_state<C>(
    ctx: &C,
    client_state: &ClientState,
    request: &ProofRequest<'_>,
    prefix: Option<&MerklePrefix>,
    client_id: &str,
    counterparty_client_state: &Any,
) -> Result<(), MockClientError>
where
    C: ClientStoreReader + HostContext,
{
    verify_membership(
        ctx,
        client_state,
        request,
        &prefixed(prefix, path::client_state_path(client_id)),
        &counterparty_client_state.encode_to_vec(),
    )
}

/// Verifies the consensus state the counterparty stored for `client_id` at `consensus_height`.
/// # Errors
/// Returns an error if a proof precondition fails or the proof does not match.
pub fn verify_client_consensus_state<C>(
    ctx: &C,
    client_state: &ClientState,
    request: &ProofRequest<'_>,
    prefix: Option<&MerklePrefix>,
    client_id: &str,
    consensus_height: Height,
    consensus_state: &Any,
) -> Result<(), MockClientError>
where
    C: ClientStoreReader + HostContext,
{
    verify_membership(
        ctx,
        client_state,
        request,
        &prefixed(prefix, path::consensus_state_path(client_id, consensus_height)),
        &consensus_state.encode_to_vec(),
    )
}

/// Verifies the counterparty's connection end for `connection_id`.
/// # Errors
/// Returns an error if a proof precondition fails or the proof does not match.
pub fn verify_connection_state<C>(
    ctx: &C,
    client_state: &ClientState,
    request: &ProofRequest<'_>,
    prefix: Option<&MerklePrefix>,
    connection_id: &str,
    connection_end: &ConnectionEnd,
) -> Result<(), MockClientError>
where
    C: ClientStoreReader + HostContext,
{
    verify_membership(
        ctx,
        client_state,
        request,
        &prefixed(prefix, path::connection_path(connection_id)),
        &connection_end.encode_to_vec(),
    )
}

/// Verifies the counterparty's channel end for `port_id`/`channel_id`.
/// # Errors
/// Returns an error if a proof precondition fails or the proof does not match.
pub fn verify_channel_state<C>(
    ctx: &C,
    client_state: &ClientState,
    request: &ProofRequest<'_>,
    prefix: Option<&MerklePrefix>,
    port_id: &str,
    channel_id: &str,
    channel: &Channel,
) -> Result<(), MockClientError>
where
    C: ClientStoreReader + HostContext,
{
    verify_membership(
        ctx,
        client_state,
        request,
        &prefixed(prefix, path::channel_path(port_id, channel_id)),
        &channel.encode_to_vec(),
    )
}
