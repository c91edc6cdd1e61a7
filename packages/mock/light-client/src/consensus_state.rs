//! This module defines [`ConsensusState`].

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::{error::MockClientError, CLIENT_TYPE};

/// The counterparty's state at a single height
#[derive(Serialize, Deserialize, JsonSchema, PartialEq, Eq, Clone, Copy, Debug, Default)]
pub struct ConsensusState {
    /// Counterparty block time in nanoseconds
    pub timestamp: u64,
}

impl ConsensusState {
    /// Creates a new [`ConsensusState`].
    #[must_use]
    pub const fn new(timestamp: u64) -> Self {
        Self { timestamp }
    }

    /// The client type tag.
    #[must_use]
    pub const fn client_type(&self) -> &'static str {
        CLIENT_TYPE
    }

    /// Checks the consensus state is usable.
    /// # Errors
    /// Returns [`MockClientError::InvalidConsensus`] if the timestamp is zero.
    pub fn validate_basic(&self) -> Result<(), MockClientError> {
        ensure!(
            self.timestamp != 0,
            MockClientError::InvalidConsensus {
                reason: "timestamp cannot be 0".to_string(),
            }
        );

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_zero_timestamp() {
        assert_eq!(Ok(()), ConsensusState::new(1).validate_basic());
        assert!(matches!(
            ConsensusState::new(0).validate_basic(),
            Err(MockClientError::InvalidConsensus { reason }) if reason.contains("cannot be 0")
        ));
    }
}
