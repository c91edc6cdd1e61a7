//! The host chain's view of itself.

use crate::{height::Height, store::ProcessedMetadata};

/// Current time and height of the chain running the client
pub trait HostContext {
    /// Current block time in nanoseconds.
    fn host_timestamp(&self) -> u64;

    /// Current block height.
    fn host_height(&self) -> Height;

    /// Metadata to record for a consensus state stored now.
    fn processed_metadata(&self) -> ProcessedMetadata {
        ProcessedMetadata {
            processed_time: self.host_timestamp(),
            processed_height: self.host_height(),
        }
    }
}
