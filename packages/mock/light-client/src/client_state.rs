//! This module defines [`ClientState`] and the client [`Status`].

use std::fmt;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::{
    commitment::CommitmentMode, error::MockClientError, height::Height,
    store::ClientStoreReader, CLIENT_TYPE,
};

/// The state the host keeps about the counterparty chain
#[derive(Serialize, Deserialize, JsonSchema, PartialEq, Eq, Clone, Copy, Debug, Default)]
pub struct ClientState {
    /// The highest height the client has been updated to
    pub latest_height: Height,
    /// How proofs are checked against values
    #[serde(default)]
    pub commitment_mode: CommitmentMode,
}

impl ClientState {
    /// Creates a new [`ClientState`].
    #[must_use]
    pub const fn new(latest_height: Height, commitment_mode: CommitmentMode) -> Self {
        Self {
            latest_height,
            commitment_mode,
        }
    }

    /// The client type tag.
    #[must_use]
    pub const fn client_type(&self) -> &'static str {
        CLIENT_TYPE
    }

    /// The mock client never freezes or expires.
    #[must_use]
    pub const fn status(&self) -> Status {
        Status::Active
    }

    /// Any client state is well-formed.
    /// # Errors
    /// Never returns an error.
    pub const fn validate(&self) -> Result<(), MockClientError> {
        Ok(())
    }

    /// Returns a copy with every client-chosen field reset, as used for upgrades.
    #[must_use]
    pub const fn zero_custom_fields(&self) -> Self {
        Self {
            latest_height: self.latest_height,
            commitment_mode: CommitmentMode::Structured,
        }
    }
}

/// The client status types
#[derive(Serialize, Deserialize, JsonSchema, PartialEq, Eq, Clone, Copy, Debug)]
pub enum Status {
    /// The client is active
    Active,
    /// The client is frozen
    Frozen,
    /// The client is expired
    Expired,
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Active => write!(f, "Active"),
            Self::Frozen => write!(f, "Frozen"),
            Self::Expired => write!(f, "Expired"),
        }
    }
}

/// Returns the timestamp (in nanoseconds) of the consensus state at `height`.
/// # Errors
/// Returns [`MockClientError::ConsensusStateNotFound`] if there is no consensus state at `height`.
pub fn timestamp_at_height<C: ClientStoreReader>(
    ctx: &C,
    height: Height,
) -> Result<u64, MockClientError> {
    ctx.consensus_state(height)?
        .map(|consensus_state| consensus_state.timestamp)
        .ok_or(MockClientError::ConsensusStateNotFound(height))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{consensus_state::ConsensusState, test_utils::MockContext};

    #[test]
    fn always_active_and_valid() {
        let client_state = ClientState::new(Height::new(0, 5), CommitmentMode::DirectValue);
        assert_eq!(Status::Active, client_state.status());
        assert_eq!("Active", client_state.status().to_string());
        assert_eq!(Ok(()), client_state.validate());
        assert_eq!("mock-client", client_state.client_type());
    }

    #[test]
    fn zero_custom_fields_keeps_height() {
        let client_state = ClientState::new(Height::new(3, 7), CommitmentMode::DirectValue);
        assert_eq!(
            ClientState::new(Height::new(3, 7), CommitmentMode::Structured),
            client_state.zero_custom_fields()
        );
    }

    #[test]
    fn timestamp_lookup() {
        let mut ctx = MockContext::default();
        ctx.consensus_states
            .insert(Height::new(0, 5), ConsensusState::new(2000));

        assert_eq!(Ok(2000), timestamp_at_height(&ctx, Height::new(0, 5)));
        assert_eq!(
            Err(MockClientError::ConsensusStateNotFound(Height::new(0, 6))),
            timestamp_at_height(&ctx, Height::new(0, 6))
        );
    }

    #[test]
    fn json_defaults_commitment_mode() {
        let client_state: ClientState = serde_json::from_str(
            r#"{"latest_height":{"revision_number":0,"revision_height":9}}"#,
        )
        .unwrap();
        assert_eq!(CommitmentMode::Structured, client_state.commitment_mode);
        assert_eq!(Height::new(0, 9), client_state.latest_height);
    }
}
