//! Protobuf wire types of the mock client and their [`Any`] envelopes.
//!
//! The messages live in the `ibc.lightclients.mock.v1` package, so an `Any`
//! carrying a mock client state has the type url
//! `/ibc.lightclients.mock.v1.ClientState`.

use ibc_proto::{google::protobuf::Any, ibc::core::client::v1::Height as RawHeight};
use prost::{Message, Name};

use crate::{
    client_message::ClientMessage, client_state::ClientState, commitment::CommitmentMode,
    consensus_state::ConsensusState, error::MockClientError, header::Header,
    misbehaviour::Misbehaviour,
};

/// The protobuf package of the mock client types
pub const PROTO_PACKAGE: &str = "ibc.lightclients.mock.v1";
/// Type url of [`RawClientState`]
pub const CLIENT_STATE_TYPE_URL: &str = "/ibc.lightclients.mock.v1.ClientState";
/// Type url of [`RawConsensusState`]
pub const CONSENSUS_STATE_TYPE_URL: &str = "/ibc.lightclients.mock.v1.ConsensusState";
/// Type url of [`RawHeader`]
pub const HEADER_TYPE_URL: &str = "/ibc.lightclients.mock.v1.Header";
/// Type url of [`RawMisbehaviour`]
pub const MISBEHAVIOUR_TYPE_URL: &str = "/ibc.lightclients.mock.v1.Misbehaviour";

/// Wire form of [`ClientState`]
#[derive(Clone, PartialEq, Message)]
pub struct RawClientState {
    /// Latest height of the client
    #[prost(message, optional, tag = "1")]
    pub latest_height: Option<RawHeight>,
    /// [`CommitmentMode`] discriminant
    #[prost(int32, tag = "2")]
    pub commitment_mode: i32,
}

/// Wire form of [`ConsensusState`]
#[derive(Clone, PartialEq, Message)]
pub struct RawConsensusState {
    /// Block time in nanoseconds
    #[prost(uint64, tag = "1")]
    pub timestamp: u64,
}

/// Wire form of [`Header`]
#[derive(Clone, PartialEq, Message)]
pub struct RawHeader {
    /// The attested height
    #[prost(message, optional, tag = "1")]
    pub height: Option<RawHeight>,
    /// Block time in nanoseconds
    #[prost(uint64, tag = "2")]
    pub timestamp: u64,
}

/// Wire form of [`Misbehaviour`]
#[derive(Clone, PartialEq, Message)]
pub struct RawMisbehaviour {
    /// The client the headers were submitted to
    #[prost(string, tag = "1")]
    pub client_id: String,
    /// The first header
    #[prost(message, optional, tag = "2")]
    pub header_1: Option<RawHeader>,
    /// The second header
    #[prost(message, optional, tag = "3")]
    pub header_2: Option<RawHeader>,
}

impl Name for RawClientState {
    const NAME: &'static str = "ClientState";
    const PACKAGE: &'static str = PROTO_PACKAGE;
}

impl Name for RawConsensusState {
    const NAME: &'static str = "ConsensusState";
    const PACKAGE: &'static str = PROTO_PACKAGE;
}

impl Name for RawHeader {
    const NAME: &'static str = "Header";
    const PACKAGE: &'static str = PROTO_PACKAGE;
}

impl Name for RawMisbehaviour {
    const NAME: &'static str = "Misbehaviour";
    const PACKAGE: &'static str = PROTO_PACKAGE;
}

impl From<ClientState> for RawClientState {
    fn from(client_state: ClientState) -> Self {
        Self {
            latest_height: Some(client_state.latest_height.into()),
            commitment_mode: client_state.commitment_mode.into(),
        }
    }
}

impl TryFrom<RawClientState> for ClientState {
    type Error = MockClientError;

    fn try_from(raw: RawClientState) -> Result<Self, Self::Error> {
        Ok(Self {
            latest_height: raw
                .latest_height
                .ok_or(MockClientError::MissingField("latest_height"))?
                .into(),
            commitment_mode: CommitmentMode::try_from(raw.commitment_mode)?,
        })
    }
}

impl From<ConsensusState> for RawConsensusState {
    fn from(consensus_state: ConsensusState) -> Self {
        Self {
            timestamp: consensus_state.timestamp,
        }
    }
}

impl From<RawConsensusState> for ConsensusState {
    fn from(raw: RawConsensusState) -> Self {
        Self::new(raw.timestamp)
    }
}

impl From<Header> for RawHeader {
    fn from(header: Header) -> Self {
        Self {
            height: Some(header.height.into()),
            timestamp: header.timestamp,
        }
    }
}

impl TryFrom<RawHeader> for Header {
    type Error = MockClientError;

    fn try_from(raw: RawHeader) -> Result<Self, Self::Error> {
        Ok(Self {
            height: raw.height.ok_or(MockClientError::MissingField("height"))?.into(),
            timestamp: raw.timestamp,
        })
    }
}

impl From<Misbehaviour> for RawMisbehaviour {
    fn from(misbehaviour: Misbehaviour) -> Self {
        Self {
            client_id: misbehaviour.client_id,
            header_1: Some(misbehaviour.header_1.into()),
            header_2: Some(misbehaviour.header_2.into()),
        }
    }
}

impl TryFrom<RawMisbehaviour> for Misbehaviour {
    type Error = MockClientError;

    fn try_from(raw: RawMisbehaviour) -> Result<Self, Self::Error> {
        Ok(Self {
            client_id: raw.client_id,
            header_1: raw
                .header_1
                .ok_or(MockClientError::MissingField("header_1"))?
                .try_into()?,
            header_2: raw
                .header_2
                .ok_or(MockClientError::MissingField("header_2"))?
                .try_into()?,
        })
    }
}

fn wrap_any<M: Name>(msg: &M) -> Any {
    Any {
        type_url: M::type_url(),
        value: msg.encode_to_vec(),
    }
}

fn unwrap_any<M: Name + Default>(any: &Any) -> Result<M, MockClientError> {
    Ok(M::decode(any.value.as_slice())?)
}

fn ensure_client_type(any: &Any, expected: &str) -> Result<(), MockClientError> {
    ensure!(
        any.type_url == expected,
        MockClientError::InvalidClientType {
            reason: format!("expected {expected}, got {}", any.type_url),
        }
    );
    Ok(())
}

impl From<&ClientState> for Any {
    fn from(client_state: &ClientState) -> Self {
        wrap_any(&RawClientState::from(*client_state))
    }
}

impl TryFrom<&Any> for ClientState {
    type Error = MockClientError;

    fn try_from(any: &Any) -> Result<Self, Self::Error> {
        ensure_client_type(any, CLIENT_STATE_TYPE_URL)?;
        unwrap_any::<RawClientState>(any)?.try_into()
    }
}

impl From<&ConsensusState> for Any {
    fn from(consensus_state: &ConsensusState) -> Self {
        wrap_any(&RawConsensusState::from(*consensus_state))
    }
}

impl TryFrom<&Any> for ConsensusState {
    type Error = MockClientError;

    fn try_from(any: &Any) -> Result<Self, Self::Error> {
        ensure!(
            any.type_url == CONSENSUS_STATE_TYPE_URL,
            MockClientError::InvalidConsensus {
                reason: format!(
                    "expected {CONSENSUS_STATE_TYPE_URL}, got {}",
                    any.type_url
                ),
            }
        );
        Ok(unwrap_any::<RawConsensusState>(any)?.into())
    }
}

impl From<&Header> for Any {
    fn from(header: &Header) -> Self {
        wrap_any(&RawHeader::from(*header))
    }
}

impl TryFrom<&Any> for Header {
    type Error = MockClientError;

    fn try_from(any: &Any) -> Result<Self, Self::Error> {
        ensure_client_type(any, HEADER_TYPE_URL)?;
        unwrap_any::<RawHeader>(any)?.try_into()
    }
}

impl From<&Misbehaviour> for Any {
    fn from(misbehaviour: &Misbehaviour) -> Self {
        wrap_any(&RawMisbehaviour::from(misbehaviour.clone()))
    }
}

impl TryFrom<&Any> for Misbehaviour {
    type Error = MockClientError;

    fn try_from(any: &Any) -> Result<Self, Self::Error> {
        ensure_client_type(any, MISBEHAVIOUR_TYPE_URL)?;
        unwrap_any::<RawMisbehaviour>(any)?.try_into()
    }
}

impl From<&ClientMessage> for Any {
    fn from(client_message: &ClientMessage) -> Self {
        match client_message {
            ClientMessage::Header(header) => header.into(),
            ClientMessage::Misbehaviour(misbehaviour) => misbehaviour.into(),
        }
    }
}

impl TryFrom<&Any> for ClientMessage {
    type Error = MockClientError;

    fn try_from(any: &Any) -> Result<Self, Self::Error> {
        match any.type_url.as_str() {
            HEADER_TYPE_URL => Ok(Self::Header(any.try_into()?)),
            MISBEHAVIOUR_TYPE_URL => Ok(Self::Misbehaviour(any.try_into()?)),
            other => Err(MockClientError::InvalidClientType {
                reason: format!("unsupported client message type {other}"),
            }),
        }
    }
}

/// Decodes the protobuf encoding of an [`Any`].
/// # Errors
/// Returns an error if `bytes` is not a valid `Any`.
pub fn decode_any(bytes: &[u8]) -> Result<Any, MockClientError> {
    Ok(Any::decode(bytes)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::height::Height;

    #[test]
    fn type_urls_match_names() {
        assert_eq!(CLIENT_STATE_TYPE_URL, RawClientState::type_url());
        assert_eq!(CONSENSUS_STATE_TYPE_URL, RawConsensusState::type_url());
        assert_eq!(HEADER_TYPE_URL, RawHeader::type_url());
        assert_eq!(MISBEHAVIOUR_TYPE_URL, RawMisbehaviour::type_url());
    }

    #[test]
    fn client_state_round_trip_keeps_mode() {
        let client_state = ClientState::new(Height::new(0, 42), CommitmentMode::DirectValue);
        let any = Any::from(&client_state);
        let bytes = any.encode_to_vec();

        let decoded = ClientState::try_from(&decode_any(&bytes).unwrap()).unwrap();
        assert_eq!(client_state, decoded);
    }

    #[test]
    fn rejects_foreign_type_urls() {
        let any = Any::from(&ConsensusState::new(5));
        assert!(matches!(
            ClientState::try_from(&any),
            Err(MockClientError::InvalidClientType { .. })
        ));

        let any = Any::from(&Header::new(Height::new(0, 1), 5));
        assert!(matches!(
            ConsensusState::try_from(&any),
            Err(MockClientError::InvalidConsensus { .. })
        ));
    }

    #[test]
    fn missing_height_is_reported() {
        let any = wrap_any(&RawHeader {
            height: None,
            timestamp: 1,
        });
        assert_eq!(
            Err(MockClientError::MissingField("height")),
            Header::try_from(&any)
        );
    }

    #[test]
    fn client_message_dispatches_on_type_url() {
        let header = Header::new(Height::new(0, 3), 30);
        let misbehaviour = Misbehaviour {
            client_id: "08-wasm-1".to_string(),
            header_1: header,
            header_2: Header::new(Height::new(0, 3), 31),
        };

        assert_eq!(
            Ok(ClientMessage::Header(header)),
            ClientMessage::try_from(&Any::from(&header))
        );
        assert_eq!(
            Ok(ClientMessage::Misbehaviour(misbehaviour.clone())),
            ClientMessage::try_from(&Any::from(&misbehaviour))
        );

        let foreign = Any {
            type_url: "/ibc.lightclients.tendermint.v1.Header".to_string(),
            value: vec![],
        };
        assert!(matches!(
            ClientMessage::try_from(&foreign),
            Err(MockClientError::InvalidClientType { .. })
        ));
    }
}
