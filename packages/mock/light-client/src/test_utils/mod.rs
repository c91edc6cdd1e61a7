//! Test utilities for the mock light client

#[cfg(any(test, feature = "test-utils"))]
pub use fixtures::*;

#[allow(missing_docs, clippy::missing_panics_doc)]
#[cfg(any(test, feature = "test-utils"))]
mod fixtures {
    use std::collections::BTreeMap;

    use crate::{
        client_state::ClientState,
        commitment::{CommitmentMode, MerklePath, MerklePrefix},
        consensus_state::ConsensusState,
        error::MockClientError,
        height::Height,
        host::HostContext,
        store::{ClientStore, ClientStoreReader, ProcessedMetadata},
    };

    pub const DEFAULT_PREFIX: &[u8] = b"ibc";

    /// In-memory store and host clock.
    #[derive(Clone, Debug, Default)]
    pub struct MockContext {
        pub client_state: Option<ClientState>,
        pub consensus_states: BTreeMap<Height, ConsensusState>,
        pub processed: BTreeMap<Height, ProcessedMetadata>,
        pub host_timestamp: u64,
        pub host_height: Height,
    }

    impl MockContext {
        #[must_use]
        pub fn with_host(host_timestamp: u64, host_height: Height) -> Self {
            Self {
                host_timestamp,
                host_height,
                ..Self::default()
            }
        }

        /// Stores a consensus state with its processed metadata, bypassing the update logic.
        pub fn insert_consensus_state(
            &mut self,
            height: Height,
            consensus_state: ConsensusState,
            processed: ProcessedMetadata,
        ) {
            self.consensus_states.insert(height, consensus_state);
            self.processed.insert(height, processed);
        }
    }

    impl ClientStoreReader for MockContext {
        fn client_state(&self) -> Result<Option<ClientState>, MockClientError> {
            Ok(self.client_state)
        }

        fn consensus_state(
            &self,
            height: Height,
        ) -> Result<Option<ConsensusState>, MockClientError> {
            Ok(self.consensus_states.get(&height).copied())
        }

        fn processed_time(&self, height: Height) -> Result<Option<u64>, MockClientError> {
            Ok(self.processed.get(&height).map(|p| p.processed_time))
        }

        fn processed_height(&self, height: Height) -> Result<Option<Height>, MockClientError> {
            Ok(self.processed.get(&height).map(|p| p.processed_height))
        }
    }

    impl ClientStore for MockContext {
        fn set_client_state(&mut self, client_state: &ClientState) -> Result<(), MockClientError> {
            self.client_state = Some(*client_state);
            Ok(())
        }

        fn set_consensus_state(
            &mut self,
            height: Height,
            consensus_state: &ConsensusState,
        ) -> Result<(), MockClientError> {
            self.consensus_states.insert(height, *consensus_state);
            Ok(())
        }

        fn set_processed_time(&mut self, height: Height, time: u64) -> Result<(), MockClientError> {
            self.processed.entry(height).or_default().processed_time = time;
            Ok(())
        }

        fn set_processed_height(
            &mut self,
            height: Height,
            processed_height: Height,
        ) -> Result<(), MockClientError> {
            self.processed.entry(height).or_default().processed_height = processed_height;
            Ok(())
        }
    }

    impl HostContext for MockContext {
        fn host_timestamp(&self) -> u64 {
            self.host_timestamp
        }

        fn host_height(&self) -> Height {
            self.host_height
        }
    }

    /// A context with a client at `latest_height` and a consensus state at that height.
    #[must_use]
    pub fn initialized_context(
        latest_height: Height,
        timestamp: u64,
        commitment_mode: CommitmentMode,
    ) -> (MockContext, ClientState) {
        let client_state = ClientState::new(latest_height, commitment_mode);
        let mut ctx = MockContext::with_host(timestamp, Height::new(0, 100));
        ctx.client_state = Some(client_state);
        ctx.insert_consensus_state(
            latest_height,
            ConsensusState::new(timestamp),
            ProcessedMetadata {
                processed_time: timestamp,
                processed_height: Height::new(0, 100),
            },
        );
        (ctx, client_state)
    }

    #[must_use]
    pub fn default_prefix() -> MerklePrefix {
        MerklePrefix::new(DEFAULT_PREFIX)
    }

    #[must_use]
    pub fn ibc_path(path: &str) -> MerklePath {
        MerklePath::new(&default_prefix(), path)
    }
}
