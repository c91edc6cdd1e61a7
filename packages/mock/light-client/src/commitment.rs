//! This module defines the hash commitment that stands in for membership proofs.
//!
//! A "proof" for the mock client is a value any party can compute; see
//! [`CommitmentMode`] for the two supported layouts.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

use crate::{error::MockClientError, height::Height};

/// Number of segments of a structured merkle path: prefix and path.
pub const MERKLE_PATH_SEGMENTS: usize = 2;

/// The algorithm used to compute the expected proof for a value.
#[derive(
    Serialize, Deserialize, JsonSchema, PartialEq, Eq, Clone, Copy, Debug, Default, Hash,
)]
#[serde(rename_all = "snake_case")]
pub enum CommitmentMode {
    /// `sha256(be128(height) || sha256(prefix) || sha256(path) || sha256(value))`
    #[default]
    Structured,
    /// `sha256(value)`, the path and height are not committed to
    DirectValue,
}

impl CommitmentMode {
    /// Computes the expected proof for `value` stored under `path` at `height`.
    /// # Errors
    /// Returns an error if the path is not a two-segment structured path.
    pub fn commit(
        self,
        height: Height,
        path: &MerklePath,
        value: &[u8],
    ) -> Result<[u8; 32], MockClientError> {
        match self {
            Self::Structured => {
                let (prefix, path) = path.split()?;
                Ok(structured_commitment(height, prefix, path, value))
            }
            Self::DirectValue => Ok(sha256(value)),
        }
    }
}

impl From<CommitmentMode> for i32 {
    fn from(mode: CommitmentMode) -> Self {
        match mode {
            CommitmentMode::Structured => 0,
            CommitmentMode::DirectValue => 1,
        }
    }
}

impl TryFrom<i32> for CommitmentMode {
    type Error = MockClientError;

    fn try_from(value: i32) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(Self::Structured),
            1 => Ok(Self::DirectValue),
            other => Err(MockClientError::InvalidCommitmentMode(other)),
        }
    }
}

/// The key prefix under which the counterparty stores its IBC state.
#[derive(Serialize, Deserialize, JsonSchema, PartialEq, Eq, Clone, Debug, Default)]
pub struct MerklePrefix {
    /// The raw prefix bytes, e.g. `ibc`
    pub key_prefix: Vec<u8>,
}

impl MerklePrefix {
    /// Creates a new [`MerklePrefix`].
    #[must_use]
    pub fn new(key_prefix: impl Into<Vec<u8>>) -> Self {
        Self {
            key_prefix: key_prefix.into(),
        }
    }

    /// Returns the prefix bytes.
    #[must_use]
    pub fn as_bytes(&self) -> &[u8] {
        &self.key_prefix
    }
}

/// A path under a [`MerklePrefix`]: segment 0 is the prefix, segment 1 the ICS-24 path.
#[derive(Serialize, Deserialize, JsonSchema, PartialEq, Eq, Clone, Debug, Default)]
pub struct MerklePath {
    /// The path segments
    pub key_path: Vec<Vec<u8>>,
}

impl MerklePath {
    /// Builds the two-segment path for `path` under `prefix`.
    #[must_use]
    pub fn new(prefix: &MerklePrefix, path: impl Into<Vec<u8>>) -> Self {
        Self {
            key_path: vec![prefix.key_prefix.clone(), path.into()],
        }
    }

    /// Returns the prefix segment, if present and non-empty.
    #[must_use]
    pub fn prefix(&self) -> Option<&[u8]> {
        self.key_path
            .first()
            .map(Vec::as_slice)
            .filter(|prefix| !prefix.is_empty())
    }

    /// Splits the path into its prefix and path segments.
    /// # Errors
    /// Returns an error if the path does not have exactly two segments.
    pub fn split(&self) -> Result<(&[u8], &[u8]), MockClientError> {
        match self.key_path.as_slice() {
            [prefix, path] => Ok((prefix.as_slice(), path.as_slice())),
            other => Err(MockClientError::InvalidPathLength {
                expected: MERKLE_PATH_SEGMENTS,
                found: other.len(),
            }),
        }
    }
}

/// SHA-256 of `data`.
#[must_use]
pub fn sha256(data: &[u8]) -> [u8; 32] {
    Sha256::digest(data).into()
}

/// Computes the structured commitment over a height, prefix, path and value.
#[must_use]
pub fn structured_commitment(height: Height, prefix: &[u8], path: &[u8], value: &[u8]) -> [u8; 32] {
    let mut hasher = Sha256::new();
    hasher.update(height.to_be_bytes());
    hasher.update(sha256(prefix));
    hasher.update(sha256(path));
    hasher.update(sha256(value));
    hasher.finalize().into()
}

/// The acknowledgement commitment used by ibc-go: `sha256(acknowledgement)`.
#[must_use]
pub fn commit_acknowledgement(acknowledgement: &[u8]) -> [u8; 32] {
    sha256(acknowledgement)
}

/// Compares a proof against the expected commitment.
/// # Errors
/// Returns [`MockClientError::InvalidProof`] reporting both values if they differ.
pub fn verify_commitment(expected: &[u8], proof: &[u8]) -> Result<(), MockClientError> {
    ensure!(
        expected == proof,
        MockClientError::InvalidProof {
            reason: format!(
                "expected the proof '{}', actually got '{}'",
                hex::encode_upper(expected),
                hex::encode_upper(proof)
            ),
        }
    );

    Ok(())
}
