//! This module implements the delay-period gate applied before a proof is accepted.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::{error::MockClientError, height::Height, host::HostContext, store::ClientStoreReader};

/// How long a consensus state must have been known before proofs against it are accepted
#[derive(Serialize, Deserialize, JsonSchema, PartialEq, Eq, Clone, Copy, Debug, Default)]
pub struct DelayPeriod {
    /// Minimum host time elapsed, in nanoseconds
    pub time: u64,
    /// Minimum host blocks elapsed
    pub blocks: u64,
}

impl DelayPeriod {
    /// Creates a new [`DelayPeriod`].
    #[must_use]
    pub const fn new(time: u64, blocks: u64) -> Self {
        Self { time, blocks }
    }
}

/// Checks that `delay` has elapsed on the host since the consensus state at
/// `proof_height` was stored. Both bounds are inclusive and a zero period is
/// not checked at all.
/// # Errors
/// Returns an error if the processed metadata is missing or a period has not passed.
pub fn verify_delay_period_passed<C>(
    ctx: &C,
    proof_height: Height,
    delay: DelayPeriod,
) -> Result<(), MockClientError>
where
    C: ClientStoreReader + HostContext,
{
    if delay.time != 0 {
        let processed_time = ctx
            .processed_time(proof_height)?
            .ok_or(MockClientError::ProcessedTimeNotFound(proof_height))?;
        let valid_after = processed_time.saturating_add(delay.time);
        let current = ctx.host_timestamp();

        if current < valid_after {
            tracing::debug!(
                %proof_height,
                current,
                valid_after,
                "rejecting proof: delay time period not passed"
            );
            return Err(MockClientError::DelayPeriodNotPassed {
                reason: format!(
                    "cannot verify packet until time: {valid_after}, current time: {current}"
                ),
            });
        }
    }

    if delay.blocks != 0 {
        let processed_height = ctx
            .processed_height(proof_height)?
            .ok_or(MockClientError::ProcessedHeightNotFound(proof_height))?;
        let valid_after = processed_height.add_blocks(delay.blocks);
        let current = ctx.host_height();

        if current < valid_after {
            tracing::debug!(
                %proof_height,
                %current,
                %valid_after,
                "rejecting proof: delay block period not passed"
            );
            return Err(MockClientError::DelayPeriodNotPassed {
                reason: format!(
                    "cannot verify packet until height: {valid_after}, current height: {current}"
                ),
            });
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;
    use crate::{
        consensus_state::ConsensusState, store::ProcessedMetadata, test_utils::MockContext,
    };

    const PROOF_HEIGHT: Height = Height::new(0, 5);

    fn context(host_timestamp: u64, host_height: Height) -> MockContext {
        let mut ctx = MockContext::with_host(host_timestamp, host_height);
        ctx.insert_consensus_state(
            PROOF_HEIGHT,
            ConsensusState::new(1),
            ProcessedMetadata {
                processed_time: 1000,
                processed_height: Height::new(0, 10),
            },
        );
        ctx
    }

    #[rstest]
    #[case::before(1099, false)]
    #[case::exactly_at(1100, true)]
    #[case::after(1101, true)]
    fn time_boundary_is_inclusive(#[case] host_timestamp: u64, #[case] passes: bool) {
        let ctx = context(host_timestamp, Height::new(0, 10));
        let result = verify_delay_period_passed(&ctx, PROOF_HEIGHT, DelayPeriod::new(100, 0));
        assert_eq!(passes, result.is_ok(), "{result:?}");
    }

    #[rstest]
    #[case::before(Height::new(0, 12), false)]
    #[case::exactly_at(Height::new(0, 13), true)]
    #[case::after(Height::new(0, 14), true)]
    #[case::later_revision(Height::new(1, 0), true)]
    fn block_boundary_is_inclusive(#[case] host_height: Height, #[case] passes: bool) {
        let ctx = context(0, host_height);
        let result = verify_delay_period_passed(&ctx, PROOF_HEIGHT, DelayPeriod::new(0, 3));
        assert_eq!(passes, result.is_ok(), "{result:?}");
    }

    #[test]
    fn zero_delay_needs_no_metadata() {
        let ctx = MockContext::default();
        verify_delay_period_passed(&ctx, PROOF_HEIGHT, DelayPeriod::default()).unwrap();
    }

    #[test]
    fn missing_metadata() {
        let ctx = MockContext::with_host(u64::MAX, Height::new(0, u64::MAX));
        assert_eq!(
            Err(MockClientError::ProcessedTimeNotFound(PROOF_HEIGHT)),
            verify_delay_period_passed(&ctx, PROOF_HEIGHT, DelayPeriod::new(1, 0))
        );
        assert_eq!(
            Err(MockClientError::ProcessedHeightNotFound(PROOF_HEIGHT)),
            verify_delay_period_passed(&ctx, PROOF_HEIGHT, DelayPeriod::new(0, 1))
        );
    }

    #[test]
    fn saturates_instead_of_overflowing() {
        let ctx = context(u64::MAX, Height::new(0, u64::MAX));
        verify_delay_period_passed(&ctx, PROOF_HEIGHT, DelayPeriod::new(u64::MAX, u64::MAX))
            .unwrap();
    }

    #[test]
    fn rejection_reports_bounds() {
        let ctx = context(1050, Height::new(0, 10));
        let err = verify_delay_period_passed(&ctx, PROOF_HEIGHT, DelayPeriod::new(100, 0))
            .unwrap_err();
        assert!(err.to_string().contains("1100"));
        assert!(err.to_string().contains("1050"));
    }
}
