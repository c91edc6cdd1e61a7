//! State management for the mock light client

use cosmwasm_std::Storage;
use ibc_proto::{
    google::protobuf::Any,
    ibc::lightclients::wasm::v1::{
        ClientState as WasmClientState, ConsensusState as WasmConsensusState,
    },
};
use mock_light_client::{
    client_state::ClientState, consensus_state::ConsensusState, error::MockClientError,
    height::Height, proto::decode_any,
};
use prost::Message;

/// The store key used by `ibc-go` to store the client state
pub const HOST_CLIENT_STATE_KEY: &str = "clientState";
/// The store key used by `ibc-go` to store the consensus states
pub const HOST_CONSENSUS_STATES_KEY: &str = "consensusStates";
/// The store key used by `ibc-go` to store sorted keys of consensusStates
pub const HOST_ITERATE_CONSENSUS_STATES_KEY: &str = "iterateConsensusStates";
/// The key prefix of the subject client during `MigrateClientStore`
pub const SUBJECT_PREFIX: &str = "subject/";
/// The key prefix of the substitute client during `MigrateClientStore`
pub const SUBSTITUTE_PREFIX: &str = "substitute/";

/// The key used to store the consensus states by height
#[must_use]
pub fn consensus_db_key(height: Height) -> String {
    format!("{HOST_CONSENSUS_STATES_KEY}/{height}")
}

/// The key used to store the processed time of the consensus state at height
#[must_use]
pub fn processed_time_key(height: Height) -> String {
    format!("{}/processedTime", consensus_db_key(height))
}

/// The key used to store the processed height of the consensus state at height
#[must_use]
pub fn processed_height_key(height: Height) -> String {
    format!("{}/processedHeight", consensus_db_key(height))
}

/// The key used to iterate over the consensus states in height order
#[must_use]
pub fn iteration_db_key(height: Height) -> Vec<u8> {
    let mut key = format!("{HOST_ITERATE_CONSENSUS_STATES_KEY}/")
        .as_bytes()
        .to_vec();
    key.extend(height.to_be_bytes());
    key
}

/// Get the Wasm client state stored under `prefix`
/// # Errors
/// Returns an error if the client state cannot be decoded
pub fn get_wasm_client_state_with_prefix(
    storage: &dyn Storage,
    prefix: &str,
) -> Result<Option<WasmClientState>, MockClientError> {
    let Some(wasm_client_state_any_bz) =
        storage.get(format!("{prefix}{HOST_CLIENT_STATE_KEY}").as_bytes())
    else {
        return Ok(None);
    };
    let wasm_client_state_any = decode_any(&wasm_client_state_any_bz)?;

    Ok(Some(WasmClientState::decode(
        wasm_client_state_any.value.as_slice(),
    )?))
}

/// Get the Wasm client state
/// # Errors
/// Returns an error if the client state cannot be decoded
pub fn get_wasm_client_state(
    storage: &dyn Storage,
) -> Result<Option<WasmClientState>, MockClientError> {
    get_wasm_client_state_with_prefix(storage, "")
}

/// Get the mock client state stored under `prefix`
/// # Errors
/// Returns an error if the client state cannot be decoded
pub fn get_client_state_with_prefix(
    storage: &dyn Storage,
    prefix: &str,
) -> Result<Option<ClientState>, MockClientError> {
    get_wasm_client_state_with_prefix(storage, prefix)?
        .map(|wasm_client_state| ClientState::try_from(&decode_any(&wasm_client_state.data)?))
        .transpose()
}

/// Get the mock client state
/// # Errors
/// Returns an error if the client state cannot be decoded
pub fn get_client_state(storage: &dyn Storage) -> Result<Option<ClientState>, MockClientError> {
    get_client_state_with_prefix(storage, "")
}

/// Get the mock consensus state at a given height
/// # Errors
/// Returns an error if the consensus state cannot be decoded
pub fn get_consensus_state(
    storage: &dyn Storage,
    height: Height,
) -> Result<Option<ConsensusState>, MockClientError> {
    let Some(wasm_consensus_state_any_bz) = storage.get(consensus_db_key(height).as_bytes())
    else {
        return Ok(None);
    };
    let wasm_consensus_state_any = decode_any(&wasm_consensus_state_any_bz)?;
    let wasm_consensus_state =
        WasmConsensusState::decode(wasm_consensus_state_any.value.as_slice())?;

    Ok(Some(ConsensusState::try_from(&decode_any(
        &wasm_consensus_state.data,
    )?)?))
}

/// Get the processed time of the consensus state at a given height
/// # Errors
/// Returns an error if the stored value is not a big-endian `u64`
pub fn get_processed_time(
    storage: &dyn Storage,
    height: Height,
) -> Result<Option<u64>, MockClientError> {
    storage
        .get(processed_time_key(height).as_bytes())
        .map(|bz| {
            <[u8; 8]>::try_from(bz.as_slice())
                .map(u64::from_be_bytes)
                .map_err(|_| MockClientError::InvalidStoredValue {
                    reason: format!("processed time at {height} is {} bytes long", bz.len()),
                })
        })
        .transpose()
}

/// Get the processed height of the consensus state at a given height
/// # Errors
/// Returns an error if the stored value is not a height string
pub fn get_processed_height(
    storage: &dyn Storage,
    height: Height,
) -> Result<Option<Height>, MockClientError> {
    storage
        .get(processed_height_key(height).as_bytes())
        .map(|bz| {
            String::from_utf8(bz)
                .map_err(|e| MockClientError::InvalidStoredValue {
                    reason: format!("processed height at {height}: {e}"),
                })?
                .parse::<Height>()
        })
        .transpose()
}

/// Store the client state, wrapped in a Wasm client state carrying `checksum`
#[allow(clippy::module_name_repetitions)]
pub fn store_client_state(storage: &mut dyn Storage, client_state: &ClientState, checksum: &[u8]) {
    let wasm_client_state = WasmClientState {
        data: Any::from(client_state).encode_to_vec(),
        checksum: checksum.to_vec(),
        latest_height: Some(client_state.latest_height.into()),
    };
    let wasm_client_state_any = wrap_wasm(&wasm_client_state);
    storage.set(
        HOST_CLIENT_STATE_KEY.as_bytes(),
        wasm_client_state_any.encode_to_vec().as_slice(),
    );
}

/// Store the consensus state and its iteration key
pub fn store_consensus_state(
    storage: &mut dyn Storage,
    height: Height,
    consensus_state: &ConsensusState,
) {
    let consensus_key = consensus_db_key(height);
    let wasm_consensus_state = WasmConsensusState {
        data: Any::from(consensus_state).encode_to_vec(),
    };
    let wasm_consensus_state_any = wrap_wasm(&wasm_consensus_state);
    storage.set(
        consensus_key.as_bytes(),
        wasm_consensus_state_any.encode_to_vec().as_slice(),
    );

    storage.set(&iteration_db_key(height), consensus_key.as_bytes());
}

/// Store the processed time of the consensus state at height
pub fn store_processed_time(storage: &mut dyn Storage, height: Height, time: u64) {
    storage.set(
        processed_time_key(height).as_bytes(),
        &time.to_be_bytes(),
    );
}

/// Store the processed height of the consensus state at height
pub fn store_processed_height(storage: &mut dyn Storage, height: Height, processed_height: Height) {
    storage.set(
        processed_height_key(height).as_bytes(),
        processed_height.to_string().as_bytes(),
    );
}

fn wrap_wasm<M: prost::Name>(msg: &M) -> Any {
    Any {
        type_url: M::type_url(),
        value: msg.encode_to_vec(),
    }
}

#[cfg(test)]
mod tests {
    use cosmwasm_std::testing::MockStorage;

    use super::*;

    #[test]
    fn key_layout() {
        let height = Height::new(0, 5);
        assert_eq!("consensusStates/0-5", consensus_db_key(height));
        assert_eq!("consensusStates/0-5/processedTime", processed_time_key(height));
        assert_eq!(
            "consensusStates/0-5/processedHeight",
            processed_height_key(height)
        );

        let mut expected = b"iterateConsensusStates/".to_vec();
        expected.extend([0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 5]);
        assert_eq!(expected, iteration_db_key(height));
    }

    #[test]
    fn absent_values_are_none() {
        let storage = MockStorage::new();
        let height = Height::new(0, 1);

        assert_eq!(Ok(None), get_client_state(&storage));
        assert_eq!(Ok(None), get_consensus_state(&storage, height));
        assert_eq!(Ok(None), get_processed_time(&storage, height));
        assert_eq!(Ok(None), get_processed_height(&storage, height));
    }

    #[test]
    fn processed_metadata_encoding() {
        let mut storage = MockStorage::new();
        let height = Height::new(0, 5);

        store_processed_time(&mut storage, height, 1000);
        store_processed_height(&mut storage, height, Height::new(14002, 12345));

        assert_eq!(
            Some(1000u64.to_be_bytes().to_vec()),
            storage.get(processed_time_key(height).as_bytes())
        );
        assert_eq!(
            Some(b"14002-12345".to_vec()),
            storage.get(processed_height_key(height).as_bytes())
        );
        assert_eq!(Ok(Some(1000)), get_processed_time(&storage, height));
        assert_eq!(
            Ok(Some(Height::new(14002, 12345))),
            get_processed_height(&storage, height)
        );
    }

    #[test]
    fn corrupted_processed_time() {
        let mut storage = MockStorage::new();
        let height = Height::new(0, 5);
        storage.set(processed_time_key(height).as_bytes(), &[1, 2, 3]);

        assert!(matches!(
            get_processed_time(&storage, height),
            Err(MockClientError::InvalidStoredValue { .. })
        ));
    }
}
