//! This module defines [`Misbehaviour`] and the (absent) misbehaviour handling.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::{client_message::ClientMessage, header::Header, CLIENT_TYPE};

/// Two conflicting headers for the same client.
///
/// Recognised on the wire, but never produced or accepted by the mock client.
#[derive(Serialize, Deserialize, JsonSchema, PartialEq, Eq, Clone, Debug, Default)]
pub struct Misbehaviour {
    /// The client the headers were submitted to
    pub client_id: String,
    /// The first header
    pub header_1: Header,
    /// The second header
    pub header_2: Header,
}

impl Misbehaviour {
    /// The client type tag.
    #[must_use]
    pub const fn client_type(&self) -> &'static str {
        CLIENT_TYPE
    }
}

/// The mock client never detects misbehaviour.
#[must_use]
pub const fn check_for_misbehaviour(_client_message: &ClientMessage) -> bool {
    false
}

/// Freezing is not supported.
/// # Panics
/// Always panics: [`check_for_misbehaviour`] never reports misbehaviour, so the
/// host must not call this.
pub fn update_state_on_misbehaviour(_client_message: &ClientMessage) -> ! {
    panic!("misbehaviour is unexpected")
}
