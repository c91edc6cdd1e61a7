//! Storage interface of the mock client.
//!
//! The engine never sees keys or encodings: it reads and writes typed values
//! through [`ClientStoreReader`] and [`ClientStore`], and the host decides how
//! they are laid out.

use crate::{
    client_state::ClientState, consensus_state::ConsensusState, error::MockClientError,
    height::Height,
};

/// The host's own time and height when a consensus state was stored
#[derive(PartialEq, Eq, Clone, Copy, Debug, Default)]
pub struct ProcessedMetadata {
    /// Host block time in nanoseconds
    pub processed_time: u64,
    /// Host block height
    pub processed_height: Height,
}

/// Everything a single update persists
#[derive(PartialEq, Eq, Clone, Debug)]
pub struct StateUpdate {
    /// The new client state, if it changed
    pub client_state: Option<ClientState>,
    /// Height of the new consensus state
    pub height: Height,
    /// The new consensus state
    pub consensus_state: ConsensusState,
    /// When the host stored it
    pub processed: ProcessedMetadata,
}

/// Read access to the client store.
///
/// Absence is reported as `Ok(None)`; an error means the stored bytes are corrupt.
pub trait ClientStoreReader {
    /// The client state.
    /// # Errors
    /// Returns an error if the stored client state cannot be decoded.
    fn client_state(&self) -> Result<Option<ClientState>, MockClientError>;

    /// The consensus state at `height`.
    /// # Errors
    /// Returns an error if the stored consensus state cannot be decoded.
    fn consensus_state(&self, height: Height) -> Result<Option<ConsensusState>, MockClientError>;

    /// The host time at which the consensus state at `height` was stored.
    /// # Errors
    /// Returns an error if the stored value cannot be decoded.
    fn processed_time(&self, height: Height) -> Result<Option<u64>, MockClientError>;

    /// The host height at which the consensus state at `height` was stored.
    /// # Errors
    /// Returns an error if the stored value cannot be decoded.
    fn processed_height(&self, height: Height) -> Result<Option<Height>, MockClientError>;
}

/// Write access to the client store.
pub trait ClientStore: ClientStoreReader {
    /// Stores the client state.
    /// # Errors
    /// Returns an error if the client state cannot be encoded.
    fn set_client_state(&mut self, client_state: &ClientState) -> Result<(), MockClientError>;

    /// Stores the consensus state at `height`.
    /// # Errors
    /// Returns an error if the consensus state cannot be encoded.
    fn set_consensus_state(
        &mut self,
        height: Height,
        consensus_state: &ConsensusState,
    ) -> Result<(), MockClientError>;

    /// Stores the processed time of the consensus state at `height`.
    /// # Errors
    /// Returns an error if the value cannot be encoded.
    fn set_processed_time(&mut self, height: Height, time: u64) -> Result<(), MockClientError>;

    /// Stores the processed height of the consensus state at `height`.
    /// # Errors
    /// Returns an error if the value cannot be encoded.
    fn set_processed_height(
        &mut self,
        height: Height,
        processed_height: Height,
    ) -> Result<(), MockClientError>;

    /// Persists an update as a unit.
    ///
    /// The default writes through the individual setters. Implementations whose
    /// setters can fail halfway must override it and encode before writing.
    /// # Errors
    /// Returns an error if any value cannot be encoded.
    fn store_update(&mut self, update: &StateUpdate) -> Result<(), MockClientError> {
        if let Some(client_state) = &update.client_state {
            self.set_client_state(client_state)?;
        }
        self.set_consensus_state(update.height, &update.consensus_state)?;
        self.set_processed_time(update.height, update.processed.processed_time)?;
        self.set_processed_height(update.height, update.processed.processed_height)
    }
}
