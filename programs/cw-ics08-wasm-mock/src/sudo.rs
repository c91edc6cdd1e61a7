//! This module contains the sudo message handlers

use cosmwasm_std::{to_json_binary, Binary, Deps, DepsMut, Env};
use mock_light_client::{
    client_state::ClientState,
    delay::DelayPeriod,
    membership::{self, ProofRequest},
    misbehaviour, proposal,
    proto::decode_any,
    update,
    upgrade::{self, UpgradeRequest},
};

use crate::{
    context::{QueryContext, SudoContext},
    msg::{
        decode_client_message, MigrateClientStoreMsg, UpdateStateMsg,
        UpdateStateOnMisbehaviourMsg, UpdateStateResult, VerifyMembershipMsg,
        VerifyNonMembershipMsg, VerifyUpgradeAndUpdateStateMsg,
    },
    state::{get_client_state, get_client_state_with_prefix, SUBJECT_PREFIX, SUBSTITUTE_PREFIX},
    ContractError,
};

fn client_state(deps: Deps) -> Result<ClientState, ContractError> {
    get_client_state(deps.storage)?.ok_or(ContractError::ClientStateNotFound)
}

/// Verify the membership of a value at a given height
/// # Errors
/// Returns an error if the membership proof verification fails
/// # Returns
/// An empty response
#[allow(clippy::needless_pass_by_value)]
pub fn verify_membership(
    deps: Deps,
    env: &Env,
    verify_membership_msg: VerifyMembershipMsg,
) -> Result<Binary, ContractError> {
    let client_state = client_state(deps)?;
    let ctx = QueryContext::new(deps.storage, env);

    let request = ProofRequest::new(verify_membership_msg.height, &verify_membership_msg.proof)
        .with_delay(DelayPeriod::new(
            verify_membership_msg.delay_time_period,
            verify_membership_msg.delay_block_period,
        ));

    membership::verify_membership(
        &ctx,
        &client_state,
        &request,
        &verify_membership_msg.merkle_path.into(),
        &verify_membership_msg.value,
    )
    .map_err(ContractError::VerifyMembershipFailed)?;

    Ok(Binary::default())
}

/// Verify the non-membership (absence) of a value at a given height
/// # Errors
/// Returns an error if the non-membership proof verification fails
/// # Returns
/// An empty response
#[allow(clippy::needless_pass_by_value)]
pub fn verify_non_membership(
    deps: Deps,
    env: &Env,
    verify_non_membership_msg: VerifyNonMembershipMsg,
) -> Result<Binary, ContractError> {
    let client_state = client_state(deps)?;
    let ctx = QueryContext::new(deps.storage, env);

    let request = ProofRequest::new(
        verify_non_membership_msg.height,
        &verify_non_membership_msg.proof,
    )
    .with_delay(DelayPeriod::new(
        verify_non_membership_msg.delay_time_period,
        verify_non_membership_msg.delay_block_period,
    ));

    membership::verify_non_membership(
        &ctx,
        &client_state,
        &request,
        &verify_non_membership_msg.merkle_path.into(),
    )
    .map_err(ContractError::VerifyNonMembershipFailed)?;

    Ok(Binary::default())
}

/// Update the state of the light client
/// # Errors
/// Returns an error if deserialization fails, the header is on another revision
/// or the light client update logic fails
/// # Returns
/// The updated consensus heights
#[allow(clippy::needless_pass_by_value)]
pub fn update_state(
    deps: DepsMut,
    env: &Env,
    update_state_msg: UpdateStateMsg,
) -> Result<Binary, ContractError> {
    let client_message = decode_client_message(&update_state_msg.client_message)?;
    let client_state = client_state(deps.as_ref())?;

    let mut ctx = SudoContext::new(deps.storage, env)?;
    let heights = update::update_state(&mut ctx, &client_state, &client_message)
        .map_err(ContractError::UpdateStateFailed)?;

    Ok(to_json_binary(&UpdateStateResult { heights })?)
}

/// Update the state of the light client on misbehaviour
/// # Errors
/// Returns an error if the client message cannot be decoded
/// # Panics
/// Panics on any valid client message, since the client never reports misbehaviour
#[allow(clippy::needless_pass_by_value)]
pub fn update_state_on_misbehaviour(
    _deps: DepsMut,
    msg: UpdateStateOnMisbehaviourMsg,
) -> Result<Binary, ContractError> {
    let client_message = decode_client_message(&msg.client_message)?;
    misbehaviour::update_state_on_misbehaviour(&client_message)
}

/// Verify an upgrade of the light client, which is not supported
/// # Errors
/// Always returns an error, since the mock client cannot be upgraded
#[allow(clippy::needless_pass_by_value)]
pub fn verify_upgrade_and_update_state(
    deps: DepsMut,
    msg: VerifyUpgradeAndUpdateStateMsg,
) -> Result<Binary, ContractError> {
    let client_state = client_state(deps.as_ref())?;
    let upgrade = UpgradeRequest {
        upgrade_client_state: decode_any(&msg.upgrade_client_state)
            .map_err(ContractError::VerifyUpgradeFailed)?,
        upgrade_consensus_state: decode_any(&msg.upgrade_consensus_state)
            .map_err(ContractError::VerifyUpgradeFailed)?,
        proof_upgrade_client: msg.proof_upgrade_client.to_vec(),
        proof_upgrade_consensus_state: msg.proof_upgrade_consensus_state.to_vec(),
    };

    upgrade::verify_upgrade_and_update_state(&client_state, &upgrade)
        .map_err(ContractError::VerifyUpgradeFailed)?;

    Ok(Binary::default())
}

/// Replace the subject client with the substitute, which is not supported
/// # Errors
/// Always returns an error, since the mock client cannot be substituted
#[allow(clippy::needless_pass_by_value)]
pub fn migrate_client_store(
    deps: DepsMut,
    _msg: MigrateClientStoreMsg,
) -> Result<Binary, ContractError> {
    let subject = get_client_state_with_prefix(deps.storage, SUBJECT_PREFIX)?
        .ok_or(ContractError::ClientStateNotFound)?;
    let substitute = get_client_state_with_prefix(deps.storage, SUBSTITUTE_PREFIX)?
        .ok_or(ContractError::ClientStateNotFound)?;

    proposal::check_substitute_and_update_state(&subject, &substitute)
        .map_err(ContractError::MigrateClientStoreFailed)?;

    Ok(Binary::default())
}
