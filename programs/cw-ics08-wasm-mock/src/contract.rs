//! This module contains the `CosmWasm` entrypoints for the 08-wasm smart contract

use cosmwasm_std::{entry_point, Binary, Deps, DepsMut, Env, MessageInfo, Response};

use crate::msg::{InstantiateMsg, MigrateMsg, QueryMsg, SudoMsg};
use crate::{instantiate, query};
use crate::{sudo, ContractError};

/// The version of the contracts state.
/// It is used to determine if the state needs to be migrated in the migrate entry point.
const STATE_VERSION: &str = env!("CARGO_PKG_VERSION");
const CONTRACT_NAME: &str = env!("CARGO_PKG_NAME");

/// The instantiate entry point for the CosmWasm contract.
/// # Errors
/// Will return an error if the client state or consensus state cannot be deserialized.
#[entry_point]
#[allow(clippy::needless_pass_by_value)]
pub fn instantiate(
    deps: DepsMut,
    env: Env,
    _info: MessageInfo,
    msg: InstantiateMsg,
) -> Result<Response, ContractError> {
    cw2::set_contract_version(deps.storage, CONTRACT_NAME, STATE_VERSION)?;

    instantiate::client(deps.storage, &env, msg)?;

    Ok(Response::default())
}

/// The sudo entry point for the CosmWasm contract.
/// It routes the message to the appropriate handler.
/// # Errors
/// Will return an error if the handler returns an error.
/// # Panics
/// Panics on `UpdateStateOnMisbehaviour`, since the client never reports misbehaviour.
#[entry_point]
#[allow(clippy::needless_pass_by_value)]
pub fn sudo(deps: DepsMut, env: Env, msg: SudoMsg) -> Result<Response, ContractError> {
    let result = match msg {
        SudoMsg::UpdateState(update_state_msg) => {
            sudo::update_state(deps, &env, update_state_msg)?
        }
        SudoMsg::UpdateStateOnMisbehaviour(misbehaviour_msg) => {
            sudo::update_state_on_misbehaviour(deps, misbehaviour_msg)?
        }
        SudoMsg::VerifyUpgradeAndUpdateState(upgrade_msg) => {
            sudo::verify_upgrade_and_update_state(deps, upgrade_msg)?
        }
        SudoMsg::VerifyMembership(verify_membership_msg) => {
            sudo::verify_membership(deps.as_ref(), &env, verify_membership_msg)?
        }
        SudoMsg::VerifyNonMembership(verify_non_membership_msg) => {
            sudo::verify_non_membership(deps.as_ref(), &env, verify_non_membership_msg)?
        }
        SudoMsg::MigrateClientStore(migrate_client_store_msg) => {
            sudo::migrate_client_store(deps, migrate_client_store_msg)?
        }
    };

    Ok(Response::default().set_data(result))
}

/// The query entry point for the CosmWasm contract.
/// It routes the message to the appropriate handler.
/// # Errors
/// Will return an error if the handler returns an error.
#[entry_point]
#[allow(clippy::needless_pass_by_value)]
pub fn query(deps: Deps, env: Env, msg: QueryMsg) -> Result<Binary, ContractError> {
    match msg {
        QueryMsg::VerifyClientMessage(verify_client_message_msg) => {
            query::verify_client_message(deps, verify_client_message_msg)
        }
        QueryMsg::CheckForMisbehaviour(check_for_misbehaviour_msg) => {
            query::check_for_misbehaviour(check_for_misbehaviour_msg)
        }
        QueryMsg::TimestampAtHeight(timestamp_at_height_msg) => {
            query::timestamp_at_height(deps, &env, timestamp_at_height_msg)
        }
        QueryMsg::Status(_) => query::status(deps),
        QueryMsg::ExportMetadata(_) => query::export_metadata(deps),
    }
}

/// The migrate entry point for the CosmWasm contract.
/// The client store layout has not changed between versions, so only the
/// contract version is bumped.
/// # Errors
/// Will return an error if the contract version cannot be stored.
#[entry_point]
#[allow(clippy::needless_pass_by_value)]
pub fn migrate(deps: DepsMut, _env: Env, _msg: MigrateMsg) -> Result<Response, ContractError> {
    cw2::set_contract_version(deps.storage, CONTRACT_NAME, STATE_VERSION)?;

    Ok(Response::default())
}
