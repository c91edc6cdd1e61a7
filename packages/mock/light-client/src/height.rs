//! This module defines [`Height`].

use std::{fmt, str::FromStr};

use ibc_proto::ibc::core::client::v1::Height as RawHeight;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::error::MockClientError;

/// A point in a chain's history.
///
/// Heights are ordered by revision number first and revision height second, so
/// the derived [`Ord`] is the IBC height order.
#[derive(
    Serialize, Deserialize, JsonSchema, PartialEq, Eq, PartialOrd, Ord, Hash, Clone, Copy, Debug, Default,
)]
pub struct Height {
    /// The revision (chain epoch) the height belongs to
    #[serde(default)]
    pub revision_number: u64,
    /// The block height within the revision
    #[serde(default)]
    pub revision_height: u64,
}

impl Height {
    /// Creates a new [`Height`].
    #[must_use]
    pub const fn new(revision_number: u64, revision_height: u64) -> Self {
        Self {
            revision_number,
            revision_height,
        }
    }

    /// Returns the height `delta` blocks later within the same revision.
    /// Saturates at `u64::MAX`.
    #[must_use]
    pub const fn add_blocks(self, delta: u64) -> Self {
        Self {
            revision_number: self.revision_number,
            revision_height: self.revision_height.saturating_add(delta),
        }
    }

    /// Big-endian encoding of both components, revision number first.
    #[must_use]
    pub fn to_be_bytes(&self) -> [u8; 16] {
        let mut bytes = [0u8; 16];
        bytes[..8].copy_from_slice(&self.revision_number.to_be_bytes());
        bytes[8..].copy_from_slice(&self.revision_height.to_be_bytes());
        bytes
    }
}

impl fmt::Display for Height {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.revision_number, self.revision_height)
    }
}

impl FromStr for Height {
    type Err = MockClientError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || MockClientError::InvalidHeightString(s.to_string());

        let (revision_number, revision_height) = s.split_once('-').ok_or_else(invalid)?;
        Ok(Self {
            revision_number: revision_number.parse().map_err(|_| invalid())?,
            revision_height: revision_height.parse().map_err(|_| invalid())?,
        })
    }
}

impl From<RawHeight> for Height {
    fn from(raw: RawHeight) -> Self {
        Self::new(raw.revision_number, raw.revision_height)
    }
}

impl From<Height> for RawHeight {
    fn from(height: Height) -> Self {
        Self {
            revision_number: height.revision_number,
            revision_height: height.revision_height,
        }
    }
}

/// Extracts the revision number from a chain id of the form `{identifier}-{revision}`.
///
/// Chain ids that do not follow the format (no dash, empty identifier, a
/// revision with a leading zero or that is not a number) are on revision 0.
/// So are revisions that overflow a `u64`, as in ibc-go's lenient parse.
#[must_use]
pub fn parse_chain_id_revision(chain_id: &str) -> u64 {
    let Some((identifier, revision)) = chain_id.rsplit_once('-') else {
        return 0;
    };

    if identifier.is_empty() || identifier.ends_with('-') || revision.starts_with('0') {
        return 0;
    }
    if !revision.bytes().all(|b| b.is_ascii_digit()) {
        return 0;
    }

    revision.parse().unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::{parse_chain_id_revision, Height};

    #[test]
    fn orders_by_revision_then_height() {
        assert!(Height::new(0, 10) < Height::new(1, 1));
        assert!(Height::new(1, 2) > Height::new(1, 1));
        assert_eq!(Height::new(3, 3), Height::new(3, 3));
        assert!(Height::new(0, 5) >= Height::new(0, 5));
    }

    #[test]
    fn display_and_parse() {
        let height = Height::new(4, 1234);
        assert_eq!("4-1234", height.to_string());
        assert_eq!(height, "4-1234".parse().unwrap());

        assert!("4".parse::<Height>().is_err());
        assert!("a-1".parse::<Height>().is_err());
        assert!("1-".parse::<Height>().is_err());
    }

    #[test]
    fn big_endian_layout() {
        let bytes = Height::new(1, 2).to_be_bytes();
        assert_eq!(
            [0, 0, 0, 0, 0, 0, 0, 1, 0, 0, 0, 0, 0, 0, 0, 2],
            bytes
        );
    }

    #[test]
    fn add_blocks_saturates() {
        assert_eq!(Height::new(2, 15), Height::new(2, 10).add_blocks(5));
        assert_eq!(
            Height::new(0, u64::MAX),
            Height::new(0, u64::MAX - 1).add_blocks(10)
        );
    }

    #[test]
    fn chain_id_revision() {
        assert_eq!(14002, parse_chain_id_revision("cosmos-testnet-14002"));
        assert_eq!(1, parse_chain_id_revision("simd-1"));
        assert_eq!(0, parse_chain_id_revision("simd"));
        assert_eq!(0, parse_chain_id_revision("simd-01"));
        assert_eq!(0, parse_chain_id_revision("-1"));
        assert_eq!(0, parse_chain_id_revision("simd--1"));
        assert_eq!(0, parse_chain_id_revision("simd-x"));
        assert_eq!(0, parse_chain_id_revision("simd-184467440737095516160"));
    }
}
