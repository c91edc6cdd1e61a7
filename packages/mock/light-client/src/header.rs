//! This module defines [`Header`].

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::{
    consensus_state::ConsensusState, error::MockClientError, height::Height, CLIENT_TYPE,
};

/// The update message: "the counterparty was at `height` with block time `timestamp`"
#[derive(Serialize, Deserialize, JsonSchema, PartialEq, Eq, Clone, Copy, Debug, Default)]
pub struct Header {
    /// The height being attested
    pub height: Height,
    /// Counterparty block time at `height`, in nanoseconds
    pub timestamp: u64,
}

impl Header {
    /// Creates a new [`Header`].
    #[must_use]
    pub const fn new(height: Height, timestamp: u64) -> Self {
        Self { height, timestamp }
    }

    /// The client type tag.
    #[must_use]
    pub const fn client_type(&self) -> &'static str {
        CLIENT_TYPE
    }

    /// Headers carry no signatures, so every header is well-formed.
    /// # Errors
    /// Never returns an error.
    pub const fn validate_basic(&self) -> Result<(), MockClientError> {
        Ok(())
    }

    /// The consensus state this header installs.
    #[must_use]
    pub const fn consensus_state(&self) -> ConsensusState {
        ConsensusState::new(self.timestamp)
    }
}
