//! Defines the [`ContractError`] type.

use cosmwasm_std::StdError;
use mock_light_client::error::MockClientError;
use thiserror::Error;

/// Error types that can be returned by contract operations
#[derive(Error, Debug)]
#[allow(clippy::module_name_repetitions)]
pub enum ContractError {
    /// Standard `CosmWasm` error
    #[error("{0}")]
    Std(#[from] StdError),

    /// Reading or decoding the client store failed
    #[error("client store error: {0}")]
    Store(#[from] MockClientError),

    /// Deserializing client state failed
    #[error("deserializing client state failed: {0}")]
    DeserializeClientStateFailed(#[source] MockClientError),

    /// Deserializing client message failed
    #[error("deserializing client message failed: {0}")]
    DeserializeClientMessageFailed(#[source] MockClientError),

    /// Instantiating the client failed
    #[error("instantiate failed: {0}")]
    InstantiateFailed(#[source] MockClientError),

    /// Verify membership failed
    #[error("verify membership failed: {0}")]
    VerifyMembershipFailed(#[source] MockClientError),

    /// Verify non-membership failed
    #[error("verify non-membership failed: {0}")]
    VerifyNonMembershipFailed(#[source] MockClientError),

    /// Verify client message failed
    #[error("verify client message failed: {0}")]
    VerifyClientMessageFailed(#[source] MockClientError),

    /// Update state failed
    #[error("update state failed: {0}")]
    UpdateStateFailed(#[source] MockClientError),

    /// Verify upgrade failed
    #[error("verify upgrade and update state failed: {0}")]
    VerifyUpgradeFailed(#[source] MockClientError),

    /// Migrate client store failed
    #[error("migrate client store failed: {0}")]
    MigrateClientStoreFailed(#[source] MockClientError),

    /// Timestamp at height failed
    #[error("timestamp at height failed: {0}")]
    TimestampAtHeightFailed(#[source] MockClientError),

    /// Client state not found
    #[error("client state not found")]
    ClientStateNotFound,
}
