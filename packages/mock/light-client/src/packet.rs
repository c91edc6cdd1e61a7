//! Packet-level verifications.
//!
//! These do not go through the commitment mode: the proof is compared
//! directly with the packet commitment, the acknowledgement commitment or
//! the hash of the packet key.

use std::fmt;

use crate::{
    client_state::ClientState,
    commitment::{commit_acknowledgement, sha256, verify_commitment, MerklePrefix},
    error::MockClientError,
    host::HostContext,
    membership::{verify_proof_preconditions, ProofRequest},
    store::ClientStoreReader,
};

/// Identifies a packet on the counterparty
#[derive(PartialEq, Eq, Clone, Copy, Debug)]
pub struct PacketKey<'a> {
    /// The port the packet was sent on
    pub port_id: &'a str,
    /// The channel the packet was sent on
    pub channel_id: &'a str,
    /// The packet sequence
    pub sequence: u64,
}

impl<'a> PacketKey<'a> {
    /// Creates a new [`PacketKey`].
    #[must_use]
    pub const fn new(port_id: &'a str, channel_id: &'a str, sequence: u64) -> Self {
        Self {
            port_id,
            channel_id,
            sequence,
        }
    }
}

impl fmt::Display for PacketKey<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}/{}", self.port_id, self.channel_id, self.sequence)
    }
}

fn check<C>(
    ctx: &C,
    client_state: &ClientState,
    request: &ProofRequest<'_>,
    prefix: Option<&MerklePrefix>,
    expected: &[u8],
) -> Result<(), MockClientError>
where
    C: ClientStoreReader + HostContext,
{
    verify_proof_preconditions(
        ctx,
        client_state,
        request,
        prefix.map(MerklePrefix::as_bytes),
        true,
    )?;
    verify_commitment(expected, request.proof)
}

/// Verifies the counterparty stored `commitment` for the packet; the proof is the commitment itself.
///
/// The packet key is not committed to: any proof equal to `commitment` passes.
/// # Errors
/// Returns an error if a proof precondition fails or the proof does not match.
pub fn verify_packet_commitment<C>(
    ctx: &C,
    client_state: &ClientState,
    request: &ProofRequest<'_>,
    prefix: Option<&MerklePrefix>,
    _packet: &PacketKey<'_>,
    commitment: &[u8],
) -> Result<(), MockClientError>
where
    C: ClientStoreReader + HostContext,
{
    check(ctx, client_state, request, prefix, commitment)
}

/// Verifies the counterparty acknowledged the packet; the proof is `sha256(acknowledgement)`.
///
/// As with [`verify_packet_commitment`], the packet key is not part of the proof.
/// # Errors
/// Returns an error if a proof precondition fails or the proof does not match.
pub fn verify_packet_acknowledgement<C>(
    ctx: &C,
    client_state: &ClientState,
    request: &ProofRequest<'_>,
    prefix: Option<&MerklePrefix>,
    _packet: &PacketKey<'_>,
    acknowledgement: &[u8],
) -> Result<(), MockClientError>
where
    C: ClientStoreReader + HostContext,
{
    check(
        ctx,
        client_state,
        request,
        prefix,
        &commit_acknowledgement(acknowledgement),
    )
}

/// Verifies the counterparty has no receipt for the packet; the proof is `sha256("{port}/{channel}/{sequence}")`.
/// # Errors
/// Returns an error if a proof precondition fails or the proof does not match.
pub fn verify_packet_receipt_absence<C>(
    ctx: &C,
    client_state: &ClientState,
    request: &ProofRequest<'_>,
    prefix: Option<&MerklePrefix>,
    packet: &PacketKey<'_>,
) -> Result<(), MockClientError>
where
    C: ClientStoreReader + HostContext,
{
    check(
        ctx,
        client_state,
        request,
        prefix,
        &sha256(packet.to_string().as_bytes()),
    )
}

/// Verifies the counterparty's next receive sequence; `next` carries it as its sequence and the
/// proof is `sha256("{port}/{channel}/{sequence}")`.
/// # Errors
/// Returns an error if a proof precondition fails or the proof does not match.
pub fn verify_next_sequence_recv<C>(
    ctx: &C,
    client_state: &ClientState,
    request: &ProofRequest<'_>,
    prefix: Option<&MerklePrefix>,
    next: &PacketKey<'_>,
) -> Result<(), MockClientError>
where
    C: ClientStoreReader + HostContext,
{
    check(
        ctx,
        client_state,
        request,
        prefix,
        &sha256(next.to_string().as_bytes()),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        commitment::CommitmentMode,
        height::Height,
        test_utils::{default_prefix, initialized_context},
    };

    const HEIGHT: Height = Height::new(0, 5);
    const PACKET: PacketKey<'static> = PacketKey::new("transfer", "channel-0", 1);

    #[test]
    fn key_format() {
        assert_eq!("transfer/channel-0/1", PACKET.to_string());
    }

    #[test]
    fn commitment_is_the_proof() {
        let (ctx, client_state) = initialized_context(HEIGHT, 2000, CommitmentMode::Structured);
        let commitment = [7u8; 32];

        verify_packet_commitment(
            &ctx,
            &client_state,
            &ProofRequest::new(HEIGHT, &commitment),
            Some(&default_prefix()),
            &PACKET,
            &commitment,
        )
        .unwrap();

        assert!(matches!(
            verify_packet_commitment(
                &ctx,
                &client_state,
                &ProofRequest::new(HEIGHT, &[8u8; 32]),
                Some(&default_prefix()),
                &PACKET,
                &commitment,
            ),
            Err(MockClientError::InvalidProof { .. })
        ));
    }

    #[test]
    fn acknowledgement_is_hashed() {
        let (ctx, client_state) = initialized_context(HEIGHT, 2000, CommitmentMode::Structured);
        let ack = br#"{"result":"AQ=="}"#;
        let proof = sha256(ack);

        verify_packet_acknowledgement(
            &ctx,
            &client_state,
            &ProofRequest::new(HEIGHT, &proof),
            Some(&default_prefix()),
            &PACKET,
            ack,
        )
        .unwrap();
    }

    #[test]
    fn commitment_and_ack_ignore_packet_key() {
        let (ctx, client_state) = initialized_context(HEIGHT, 2000, CommitmentMode::Structured);
        let other = PacketKey::new("oracle", "channel-9", 42);
        let commitment = [7u8; 32];
        let ack = b"ack";

        for packet in [PACKET, other] {
            verify_packet_commitment(
                &ctx,
                &client_state,
                &ProofRequest::new(HEIGHT, &commitment),
                Some(&default_prefix()),
                &packet,
                &commitment,
            )
            .unwrap();
            verify_packet_acknowledgement(
                &ctx,
                &client_state,
                &ProofRequest::new(HEIGHT, &sha256(ack)),
                Some(&default_prefix()),
                &packet,
                ack,
            )
            .unwrap();
        }
    }

    #[test]
    fn receipt_absence_and_next_sequence() {
        let (ctx, client_state) = initialized_context(HEIGHT, 2000, CommitmentMode::DirectValue);
        let proof = sha256(b"transfer/channel-0/1");

        verify_packet_receipt_absence(
            &ctx,
            &client_state,
            &ProofRequest::new(HEIGHT, &proof),
            Some(&default_prefix()),
            &PACKET,
        )
        .unwrap();

        let next = PacketKey::new("transfer", "channel-0", 2);
        assert!(verify_next_sequence_recv(
            &ctx,
            &client_state,
            &ProofRequest::new(HEIGHT, &proof),
            Some(&default_prefix()),
            &next,
        )
        .is_err());
        verify_next_sequence_recv(
            &ctx,
            &client_state,
            &ProofRequest::new(HEIGHT, &sha256(b"transfer/channel-0/2")),
            Some(&default_prefix()),
            &next,
        )
        .unwrap();
    }

    #[test]
    fn preconditions_apply() {
        let (ctx, client_state) = initialized_context(HEIGHT, 2000, CommitmentMode::Structured);

        assert!(matches!(
            verify_packet_commitment(
                &ctx,
                &client_state,
                &ProofRequest::new(HEIGHT, &[]),
                Some(&default_prefix()),
                &PACKET,
                &[],
            ),
            Err(MockClientError::InvalidProof { reason }) if reason == "proof cannot be empty"
        ));
        assert!(matches!(
            verify_packet_receipt_absence(
                &ctx,
                &client_state,
                &ProofRequest::new(HEIGHT, &[1]),
                Some(&MerklePrefix::default()),
                &PACKET,
            ),
            Err(MockClientError::InvalidPrefix { .. })
        ));
    }
}
