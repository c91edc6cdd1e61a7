//! The contract's implementation of the light client's store and host traits.

use cosmwasm_std::{Env, Storage};
use mock_light_client::{
    client_state::ClientState,
    consensus_state::ConsensusState,
    error::MockClientError,
    height::{parse_chain_id_revision, Height},
    host::HostContext,
    store::{ClientStore, ClientStoreReader},
};

use crate::{state, ContractError};

fn host_timestamp(env: &Env) -> u64 {
    env.block.time.nanos()
}

fn host_height(env: &Env) -> Height {
    Height::new(parse_chain_id_revision(&env.block.chain_id), env.block.height)
}

/// Read-only access for queries and proof verification
pub struct QueryContext<'a> {
    storage: &'a dyn Storage,
    env: &'a Env,
}

impl<'a> QueryContext<'a> {
    /// Creates a new [`QueryContext`].
    #[must_use]
    pub const fn new(storage: &'a dyn Storage, env: &'a Env) -> Self {
        Self { storage, env }
    }
}

impl ClientStoreReader for QueryContext<'_> {
    fn client_state(&self) -> Result<Option<ClientState>, MockClientError> {
        state::get_client_state(self.storage)
    }

    fn consensus_state(&self, height: Height) -> Result<Option<ConsensusState>, MockClientError> {
        state::get_consensus_state(self.storage, height)
    }

    fn processed_time(&self, height: Height) -> Result<Option<u64>, MockClientError> {
        state::get_processed_time(self.storage, height)
    }

    fn processed_height(&self, height: Height) -> Result<Option<Height>, MockClientError> {
        state::get_processed_height(self.storage, height)
    }
}

impl HostContext for QueryContext<'_> {
    fn host_timestamp(&self) -> u64 {
        host_timestamp(self.env)
    }

    fn host_height(&self) -> Height {
        host_height(self.env)
    }
}

/// Read-write access for state transitions
pub struct SudoContext<'a> {
    storage: &'a mut dyn Storage,
    env: &'a Env,
    checksum: Vec<u8>,
}

impl<'a> SudoContext<'a> {
    /// Creates a [`SudoContext`] for an existing client, keeping its code checksum.
    /// # Errors
    /// Returns an error if there is no client state.
    pub fn new(storage: &'a mut dyn Storage, env: &'a Env) -> Result<Self, ContractError> {
        let checksum = state::get_wasm_client_state(storage)?
            .ok_or(ContractError::ClientStateNotFound)?
            .checksum;

        Ok(Self::with_checksum(storage, env, checksum))
    }

    /// Creates a [`SudoContext`] for a client that is not stored yet.
    #[must_use]
    pub fn with_checksum(storage: &'a mut dyn Storage, env: &'a Env, checksum: Vec<u8>) -> Self {
        Self {
            storage,
            env,
            checksum,
        }
    }
}

impl ClientStoreReader for SudoContext<'_> {
    fn client_state(&self) -> Result<Option<ClientState>, MockClientError> {
        state::get_client_state(self.storage)
    }

    fn consensus_state(&self, height: Height) -> Result<Option<ConsensusState>, MockClientError> {
        state::get_consensus_state(self.storage, height)
    }

    fn processed_time(&self, height: Height) -> Result<Option<u64>, MockClientError> {
        state::get_processed_time(self.storage, height)
    }

    fn processed_height(&self, height: Height) -> Result<Option<Height>, MockClientError> {
        state::get_processed_height(self.storage, height)
    }
}

impl ClientStore for SudoContext<'_> {
    fn set_client_state(&mut self, client_state: &ClientState) -> Result<(), MockClientError> {
        state::store_client_state(self.storage, client_state, &self.checksum);
        Ok(())
    }

    fn set_consensus_state(
        &mut self,
        height: Height,
        consensus_state: &ConsensusState,
    ) -> Result<(), MockClientError> {
        state::store_consensus_state(self.storage, height, consensus_state);
        Ok(())
    }

    fn set_processed_time(&mut self, height: Height, time: u64) -> Result<(), MockClientError> {
        state::store_processed_time(self.storage, height, time);
        Ok(())
    }

    fn set_processed_height(
        &mut self,
        height: Height,
        processed_height: Height,
    ) -> Result<(), MockClientError> {
        state::store_processed_height(self.storage, height, processed_height);
        Ok(())
    }
}

impl HostContext for SudoContext<'_> {
    fn host_timestamp(&self) -> u64 {
        host_timestamp(self.env)
    }

    fn host_height(&self) -> Height {
        host_height(self.env)
    }
}
