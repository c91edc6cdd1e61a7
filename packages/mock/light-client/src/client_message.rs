//! This module defines [`ClientMessage`].

use crate::{header::Header, misbehaviour::Misbehaviour};

/// A message submitted to the client by a relayer
#[derive(PartialEq, Eq, Clone, Debug)]
pub enum ClientMessage {
    /// Advances the client
    Header(Header),
    /// Reports conflicting headers
    Misbehaviour(Misbehaviour),
}

impl ClientMessage {
    /// The client type tag.
    #[must_use]
    pub const fn client_type(&self) -> &'static str {
        match self {
            Self::Header(header) => header.client_type(),
            Self::Misbehaviour(misbehaviour) => misbehaviour.client_type(),
        }
    }
}

impl From<Header> for ClientMessage {
    fn from(header: Header) -> Self {
        Self::Header(header)
    }
}

impl From<Misbehaviour> for ClientMessage {
    fn from(misbehaviour: Misbehaviour) -> Self {
        Self::Misbehaviour(misbehaviour)
    }
}
