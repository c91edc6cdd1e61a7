//! This module contains the instantiate helper functions

use cosmwasm_std::{Env, Storage};
use mock_light_client::{client_state::ClientState, proto::decode_any, update};

use crate::{context::SudoContext, msg::InstantiateMsg, ContractError};

/// Initializes the client state and initial consensus state
/// # Errors
/// Will return an error if the client state or consensus state cannot be deserialized,
/// or if the consensus state is not a valid mock consensus state.
#[allow(clippy::needless_pass_by_value)]
pub fn client(storage: &mut dyn Storage, env: &Env, msg: InstantiateMsg) -> Result<(), ContractError> {
    let client_state = decode_any(&msg.client_state)
        .and_then(|any| ClientState::try_from(&any))
        .map_err(ContractError::DeserializeClientStateFailed)?;
    client_state
        .validate()
        .map_err(ContractError::InstantiateFailed)?;

    let consensus_state_any =
        decode_any(&msg.consensus_state).map_err(ContractError::InstantiateFailed)?;

    let mut ctx = SudoContext::with_checksum(storage, env, msg.checksum.to_vec());
    update::initialize(&mut ctx, &client_state, &consensus_state_any)
        .map_err(ContractError::InstantiateFailed)
}
