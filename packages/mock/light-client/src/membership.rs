//! Membership and non-membership proof verification.
//!
//! Every verification runs the same precondition pipeline first
//! ([`verify_proof_preconditions`]) and then compares the proof with the
//! commitment the client recomputes for the claimed value.

use crate::{
    client_state::ClientState,
    commitment::{verify_commitment, MerklePath},
    delay::{verify_delay_period_passed, DelayPeriod},
    error::MockClientError,
    height::Height,
    host::HostContext,
    store::ClientStoreReader,
};

/// The part of every verification call that identifies the proof
#[derive(PartialEq, Eq, Clone, Copy, Debug)]
pub struct ProofRequest<'a> {
    /// Counterparty height the proof was made against
    pub height: Height,
    /// Delay the consensus state must have aged by
    pub delay: DelayPeriod,
    /// The proof bytes
    pub proof: &'a [u8],
}

impl<'a> ProofRequest<'a> {
    /// Creates a [`ProofRequest`] without a delay period.
    #[must_use]
    pub const fn new(height: Height, proof: &'a [u8]) -> Self {
        Self {
            height,
            delay: DelayPeriod::new(0, 0),
            proof,
        }
    }

    /// Sets the delay period.
    #[must_use]
    pub const fn with_delay(self, delay: DelayPeriod) -> Self {
        Self { delay, ..self }
    }
}

/// Checks everything a proof must satisfy before its content is looked at:
/// 1. the proof height is on revision 0,
/// 2. a non-empty commitment prefix is given,
/// 3. the proof is non-empty if `proof_required`,
/// 4. the client has been updated to at least the proof height,
/// 5. a consensus state exists at the proof height,
/// 6. the delay period has passed.
/// # Errors
/// Returns the error of the first check that fails.
pub fn verify_proof_preconditions<C>(
    ctx: &C,
    client_state: &ClientState,
    request: &ProofRequest<'_>,
    prefix: Option<&[u8]>,
    proof_required: bool,
) -> Result<(), MockClientError>
where
    C: ClientStoreReader + HostContext,
{
    let height = request.height;

    ensure!(
        height.revision_number == 0,
        MockClientError::InvalidHeight {
            reason: format!("revision number must be 0, got {height}"),
        }
    );
    ensure!(
        prefix.is_some_and(|prefix| !prefix.is_empty()),
        MockClientError::InvalidPrefix {
            reason: "prefix cannot be empty".to_string(),
        }
    );
    ensure!(
        !proof_required || !request.proof.is_empty(),
        MockClientError::InvalidProof {
            reason: "proof cannot be empty".to_string(),
        }
    );
    ensure!(
        client_state.latest_height >= height,
        MockClientError::InvalidHeight {
            reason: format!(
                "client state height < proof height ({} < {height}), please ensure the client \
                has been updated",
                client_state.latest_height
            ),
        }
    );
    ensure!(
        ctx.consensus_state(height)?.is_some(),
        MockClientError::ConsensusStateNotFound(height)
    );

    verify_delay_period_passed(ctx, height, request.delay)
}

/// Verifies that `value` is stored under `path` at the proof height.
/// # Errors
/// Returns an error if a precondition fails, the path is malformed for the
/// client's commitment mode or the proof does not match.
pub fn verify_membership<C>(
    ctx: &C,
    client_state: &ClientState,
    request: &ProofRequest<'_>,
    path: &MerklePath,
    value: &[u8],
) -> Result<(), MockClientError>
where
    C: ClientStoreReader + HostContext,
{
    verify_proof_preconditions(ctx, client_state, request, path.prefix(), true)?;

    let expected = client_state
        .commitment_mode
        .commit(request.height, path, value)?;

    verify_commitment(&expected, request.proof)
}

/// Verifies that nothing is stored under `path` at the proof height.
///
/// Absence is proven by the empty proof.
/// # Errors
/// Returns an error if a precondition fails or the proof is not empty.
pub fn verify_non_membership<C>(
    ctx: &C,
    client_state: &ClientState,
    request: &ProofRequest<'_>,
    path: &MerklePath,
) -> Result<(), MockClientError>
where
    C: ClientStoreReader + HostContext,
{
    verify_proof_preconditions(ctx, client_state, request, path.prefix(), false)?;

    ensure!(
        request.proof.is_empty(),
        MockClientError::InvalidProof {
            reason: format!(
                "expected the empty proof, actually got '{}'",
                hex::encode_upper(request.proof)
            ),
        }
    );

    Ok(())
}
