//! This module contains the query message handlers

use cosmwasm_std::{to_json_binary, Binary, Deps, Env};
use mock_light_client::{client_state, genesis, misbehaviour, update};

use crate::{
    context::QueryContext,
    msg::{
        decode_client_message, CheckForMisbehaviourMsg, CheckForMisbehaviourResult,
        ExportMetadataResult, GenesisMetadata, StatusResult, TimestampAtHeightMsg,
        TimestampAtHeightResult, VerifyClientMessageMsg,
    },
    state::get_client_state,
    ContractError,
};

fn stored_client_state(deps: Deps) -> Result<client_state::ClientState, ContractError> {
    get_client_state(deps.storage)?.ok_or(ContractError::ClientStateNotFound)
}

/// Verifies the client message (header) that will be used for updating the state of the light client
/// # Errors
/// Returns an error if the client message is invalid
/// # Returns
/// An empty response
#[allow(clippy::needless_pass_by_value)]
pub fn verify_client_message(
    deps: Deps,
    verify_client_message_msg: VerifyClientMessageMsg,
) -> Result<Binary, ContractError> {
    let client_state = stored_client_state(deps)?;
    let client_message = decode_client_message(&verify_client_message_msg.client_message)?;

    update::verify_client_message(&client_state, &client_message)
        .map_err(ContractError::VerifyClientMessageFailed)?;

    Ok(Binary::default())
}

/// Checks for misbehaviour, which the mock client never finds
/// # Errors
/// Returns an error if the client message cannot be decoded
#[allow(clippy::needless_pass_by_value)]
pub fn check_for_misbehaviour(
    check_for_misbehaviour_msg: CheckForMisbehaviourMsg,
) -> Result<Binary, ContractError> {
    let client_message = decode_client_message(&check_for_misbehaviour_msg.client_message)?;

    Ok(to_json_binary(&CheckForMisbehaviourResult {
        found_misbehaviour: misbehaviour::check_for_misbehaviour(&client_message),
    })?)
}

/// Gets the consensus timestamp at a given height
/// # Errors
/// Returns an error if the consensus state is not found
/// # Returns
/// The timestamp at the given height, in nanoseconds
#[allow(clippy::needless_pass_by_value)]
pub fn timestamp_at_height(
    deps: Deps,
    env: &Env,
    timestamp_at_height_msg: TimestampAtHeightMsg,
) -> Result<Binary, ContractError> {
    let ctx = QueryContext::new(deps.storage, env);
    let timestamp = client_state::timestamp_at_height(&ctx, timestamp_at_height_msg.height)
        .map_err(ContractError::TimestampAtHeightFailed)?;

    Ok(to_json_binary(&TimestampAtHeightResult { timestamp })?)
}

/// Gets the status of the light client
/// # Returns
/// The current status of the client
/// # Errors
/// Errors if the client state can't be deserialized.
pub fn status(deps: Deps) -> Result<Binary, ContractError> {
    let client_state = stored_client_state(deps)?;

    Ok(to_json_binary(&StatusResult {
        status: client_state.status().to_string(),
    })?)
}

/// Exports the genesis metadata of the light client
/// # Errors
/// Errors if the client state can't be deserialized.
pub fn export_metadata(deps: Deps) -> Result<Binary, ContractError> {
    let client_state = stored_client_state(deps)?;

    let genesis_metadata = genesis::export_metadata(&client_state)
        .into_iter()
        .map(|metadata| GenesisMetadata {
            key: metadata.key.into(),
            value: metadata.value.into(),
        })
        .collect();

    Ok(to_json_binary(&ExportMetadataResult { genesis_metadata })?)
}
