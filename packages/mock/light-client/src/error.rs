//! This module defines [`MockClientError`].

use crate::height::Height;

/// Error types for mock light client operations
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[allow(clippy::module_name_repetitions)]
pub enum MockClientError {
    /// The proof height is unusable: wrong revision or ahead of the client
    #[error("invalid height: {reason}")]
    InvalidHeight {
        /// Reason for error
        reason: String,
    },

    /// The commitment prefix is missing or empty
    #[error("invalid commitment prefix: {reason}")]
    InvalidPrefix {
        /// Reason for error
        reason: String,
    },

    /// The merkle path does not have the expected number of segments
    #[error("invalid path length, expected {expected} but found {found}")]
    InvalidPathLength {
        /// Expected length
        expected: usize,
        /// Found length
        found: usize,
    },

    /// The proof is empty, non-empty where emptiness is required, or does not match
    #[error("invalid mock proof: {reason}")]
    InvalidProof {
        /// Reason for error
        reason: String,
    },

    /// No consensus state is stored at the height
    #[error(
        "consensus state not found at height {0}, please ensure the proof was constructed \
        against a height that exists on the client"
    )]
    ConsensusStateNotFound(Height),

    /// The processed time of a consensus state is missing
    #[error("processed time not found for height: {0}")]
    ProcessedTimeNotFound(Height),

    /// The processed height of a consensus state is missing
    #[error("processed height not found for height: {0}")]
    ProcessedHeightNotFound(Height),

    /// The delay period attached to the proof has not elapsed yet
    #[error("packet-specified delay period has not been reached: {reason}")]
    DelayPeriodNotPassed {
        /// Reason for error
        reason: String,
    },

    /// The consensus state is not a valid mock consensus state
    #[error("invalid consensus state: {reason}")]
    InvalidConsensus {
        /// Reason for error
        reason: String,
    },

    /// The client message or client state is not of the mock client type
    #[error("invalid client type: {reason}")]
    InvalidClientType {
        /// Reason for error
        reason: String,
    },

    /// The header revision differs from the client's latest revision
    #[error(
        "header height revision {header_revision} does not match latest header revision \
        {latest_revision}"
    )]
    InvalidHeaderHeight {
        /// Revision number of the header
        header_revision: u64,
        /// Revision number of the client's latest height
        latest_revision: u64,
    },

    /// Upgrades are not supported by the mock client
    #[error("invalid client upgrade: cannot upgrade mock client")]
    InvalidUpgradeClient,

    /// Substitution is not supported by the mock client
    #[error("invalid subject client substitute: cannot substitute mock client")]
    InvalidSubstitute,

    /// Protobuf decoding failed
    #[error("decoding failed: {0}")]
    Decode(#[from] prost::DecodeError),

    /// A required protobuf field is absent
    #[error("missing field `{0}`")]
    MissingField(&'static str),

    /// Unknown commitment mode discriminant
    #[error("unknown commitment mode {0}")]
    InvalidCommitmentMode(i32),

    /// A stored value does not have the expected encoding
    #[error("invalid stored value: {reason}")]
    InvalidStoredValue {
        /// Reason for error
        reason: String,
    },

    /// A stored height string could not be parsed
    #[error("invalid height string `{0}`, expected `{{revision}}-{{height}}`")]
    InvalidHeightString(String),
}
