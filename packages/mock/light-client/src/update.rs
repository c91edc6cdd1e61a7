//! Mock light client initialization and update logic

use ibc_proto::google::protobuf::Any;

use crate::{
    client_message::ClientMessage, client_state::ClientState, consensus_state::ConsensusState,
    error::MockClientError, header::Header, height::Height, host::HostContext,
    store::{ClientStore, StateUpdate},
};

/// Stores the initial client state and consensus state.
///
/// The consensus state is stored at the client's latest height and stamped
/// with the host's current time and height.
/// # Errors
/// Returns [`MockClientError::InvalidConsensus`] if `consensus_state` is not a
/// valid mock consensus state, or an error if the store rejects the write.
pub fn initialize<C>(
    ctx: &mut C,
    client_state: &ClientState,
    consensus_state: &Any,
) -> Result<(), MockClientError>
where
    C: ClientStore + HostContext,
{
    let consensus_state = ConsensusState::try_from(consensus_state)?;
    consensus_state.validate_basic()?;

    let update = StateUpdate {
        client_state: Some(*client_state),
        height: client_state.latest_height,
        consensus_state,
        processed: ctx.processed_metadata(),
    };
    ctx.store_update(&update)?;

    tracing::info!(
        latest_height = %client_state.latest_height,
        timestamp = consensus_state.timestamp,
        "mock client initialized"
    );

    Ok(())
}

/// Checks that `client_message` can be applied with [`update_state`].
/// # Errors
/// Returns [`MockClientError::InvalidClientType`] for anything but a header,
/// or the error of [`verify_header`].
pub fn verify_client_message(
    client_state: &ClientState,
    client_message: &ClientMessage,
) -> Result<(), MockClientError> {
    match client_message {
        ClientMessage::Header(header) => verify_header(client_state, header),
        ClientMessage::Misbehaviour(_) => Err(MockClientError::InvalidClientType {
            reason: "expected a mock header, got misbehaviour".to_string(),
        }),
    }
}

/// Headers may only move the client within its current revision.
/// # Errors
/// Returns [`MockClientError::InvalidHeaderHeight`] if the header revision
/// differs from the latest height's revision.
pub fn verify_header(client_state: &ClientState, header: &Header) -> Result<(), MockClientError> {
    header.validate_basic()?;

    ensure!(
        header.height.revision_number == client_state.latest_height.revision_number,
        MockClientError::InvalidHeaderHeight {
            header_revision: header.height.revision_number,
            latest_revision: client_state.latest_height.revision_number,
        }
    );

    Ok(())
}

/// Computes the state a header produces.
/// Returns (`new_height`, `new_consensus_state`, `optional_new_client_state`);
/// the client state is only returned if the header moves the latest height forward.
#[must_use]
pub fn update_consensus_state(
    current_client_state: ClientState,
    header: &Header,
) -> (Height, ConsensusState, Option<ClientState>) {
    let height_has_progressed = header.height > current_client_state.latest_height;
    let new_client_state = height_has_progressed.then_some(ClientState {
        latest_height: header.height,
        ..current_client_state
    });

    (header.height, header.consensus_state(), new_client_state)
}

/// Applies a verified header.
///
/// The header must pass [`verify_header`]. A header for a height that
/// already has a consensus state is a no-op. Otherwise the consensus state and its processed metadata are stored and
/// the client advances if the header is above its latest height.
/// # Errors
/// Returns [`MockClientError::InvalidClientType`] for anything but a header,
/// [`MockClientError::InvalidHeaderHeight`] for a header on another revision,
/// or an error if the store fails.
/// # Returns
/// The updated consensus height
pub fn update_state<C>(
    ctx: &mut C,
    client_state: &ClientState,
    client_message: &ClientMessage,
) -> Result<Vec<Height>, MockClientError>
where
    C: ClientStore + HostContext,
{
    let ClientMessage::Header(header) = client_message else {
        return Err(MockClientError::InvalidClientType {
            reason: "expected a mock header, got misbehaviour".to_string(),
        });
    };
    verify_header(client_state, header)?;

    if ctx.consensus_state(header.height)?.is_some() {
        tracing::debug!(height = %header.height, "duplicate header, skipping update");
        return Ok(vec![header.height]);
    }

    let (height, consensus_state, new_client_state) =
        update_consensus_state(*client_state, header);

    let update = StateUpdate {
        client_state: new_client_state,
        height,
        consensus_state,
        processed: ctx.processed_metadata(),
    };
    ctx.store_update(&update)?;

    if let Some(new_client_state) = new_client_state {
        tracing::info!(
            from = %client_state.latest_height,
            to = %new_client_state.latest_height,
            "mock client advanced"
        );
    }

    Ok(vec![height])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        commitment::CommitmentMode,
        misbehaviour::Misbehaviour,
        store::{ClientStoreReader, ProcessedMetadata},
        test_utils::{initialized_context, MockContext},
    };

    const HOST_HEIGHT: Height = Height::new(0, 100);

    fn header(revision_height: u64, timestamp: u64) -> ClientMessage {
        ClientMessage::Header(Header::new(Height::new(0, revision_height), timestamp))
    }

    #[test]
    fn initialize_stores_everything() {
        let mut ctx = MockContext::with_host(777, Height::new(0, 42));
        let client_state = ClientState::new(Height::new(0, 5), CommitmentMode::Structured);

        initialize(&mut ctx, &client_state, &Any::from(&ConsensusState::new(2000))).unwrap();

        assert_eq!(Some(client_state), ctx.client_state().unwrap());
        assert_eq!(
            Some(ConsensusState::new(2000)),
            ctx.consensus_state(Height::new(0, 5)).unwrap()
        );
        assert_eq!(Some(777), ctx.processed_time(Height::new(0, 5)).unwrap());
        assert_eq!(
            Some(Height::new(0, 42)),
            ctx.processed_height(Height::new(0, 5)).unwrap()
        );
    }

    #[test]
    fn initialize_rejects_bad_consensus_state() {
        let mut ctx = MockContext::default();
        let client_state = ClientState::new(Height::new(0, 5), CommitmentMode::Structured);

        let wrong_type = Any::from(&Header::new(Height::new(0, 5), 1));
        assert!(matches!(
            initialize(&mut ctx, &client_state, &wrong_type),
            Err(MockClientError::InvalidConsensus { .. })
        ));

        let zero = Any::from(&ConsensusState::new(0));
        assert!(matches!(
            initialize(&mut ctx, &client_state, &zero),
            Err(MockClientError::InvalidConsensus { .. })
        ));
        assert_eq!(None, ctx.client_state);
    }

    #[test]
    fn verify_header_revision() {
        let client_state = ClientState::new(Height::new(0, 5), CommitmentMode::Structured);

        verify_client_message(&client_state, &header(1, 1)).unwrap();
        assert_eq!(
            Err(MockClientError::InvalidHeaderHeight {
                header_revision: 1,
                latest_revision: 0
            }),
            verify_client_message(
                &client_state,
                &ClientMessage::Header(Header::new(Height::new(1, 6), 1))
            )
        );
        assert!(matches!(
            verify_client_message(
                &client_state,
                &ClientMessage::Misbehaviour(Misbehaviour::default())
            ),
            Err(MockClientError::InvalidClientType { .. })
        ));
    }

    #[test]
    fn advances_latest_height() {
        let (mut ctx, client_state) =
            initialized_context(Height::new(0, 5), 2000, CommitmentMode::Structured);
        ctx.host_timestamp = 5000;

        let heights = update_state(&mut ctx, &client_state, &header(8, 3000)).unwrap();

        assert_eq!(vec![Height::new(0, 8)], heights);
        assert_eq!(Height::new(0, 8), ctx.client_state.unwrap().latest_height);
        assert_eq!(
            Some(ConsensusState::new(3000)),
            ctx.consensus_state(Height::new(0, 8)).unwrap()
        );
        assert_eq!(
            Some(&ProcessedMetadata {
                processed_time: 5000,
                processed_height: HOST_HEIGHT,
            }),
            ctx.processed.get(&Height::new(0, 8))
        );
    }

    #[test]
    fn past_height_fills_gap_without_moving_back() {
        let (mut ctx, client_state) =
            initialized_context(Height::new(0, 10), 2000, CommitmentMode::Structured);

        let heights = update_state(&mut ctx, &client_state, &header(7, 1500)).unwrap();

        assert_eq!(vec![Height::new(0, 7)], heights);
        assert_eq!(Height::new(0, 10), ctx.client_state.unwrap().latest_height);
        assert_eq!(
            Some(ConsensusState::new(1500)),
            ctx.consensus_state(Height::new(0, 7)).unwrap()
        );
    }

    #[test]
    fn duplicate_update_is_noop() {
        let (mut ctx, client_state) =
            initialized_context(Height::new(0, 5), 2000, CommitmentMode::Structured);
        let before = ctx.clone();
        ctx.host_timestamp = 9999;

        let heights = update_state(&mut ctx, &client_state, &header(5, 4242)).unwrap();

        assert_eq!(vec![Height::new(0, 5)], heights);
        assert_eq!(before.consensus_states, ctx.consensus_states);
        assert_eq!(before.processed, ctx.processed);
        assert_eq!(before.client_state, ctx.client_state);
    }

    #[test]
    fn rejects_header_on_other_revision() {
        let (mut ctx, client_state) =
            initialized_context(Height::new(0, 5), 2000, CommitmentMode::Structured);
        let before = ctx.clone();

        assert_eq!(
            Err(MockClientError::InvalidHeaderHeight {
                header_revision: 1,
                latest_revision: 0
            }),
            update_state(
                &mut ctx,
                &client_state,
                &ClientMessage::Header(Header::new(Height::new(1, 1), 3000))
            )
        );
        assert_eq!(before.client_state, ctx.client_state);
        assert_eq!(before.consensus_states, ctx.consensus_states);
        assert_eq!(before.processed, ctx.processed);
    }

    #[test]
    fn rejects_misbehaviour_message() {
        let (mut ctx, client_state) =
            initialized_context(Height::new(0, 5), 2000, CommitmentMode::Structured);

        assert!(matches!(
            update_state(
                &mut ctx,
                &client_state,
                &ClientMessage::Misbehaviour(Misbehaviour::default())
            ),
            Err(MockClientError::InvalidClientType { .. })
        ));
    }

    #[test]
    fn update_consensus_state_only_returns_progressed_client() {
        let client_state = ClientState::new(Height::new(0, 5), CommitmentMode::DirectValue);

        let (_, _, progressed) =
            update_consensus_state(client_state, &Header::new(Height::new(0, 6), 1));
        assert_eq!(
            Some(ClientState::new(Height::new(0, 6), CommitmentMode::DirectValue)),
            progressed
        );

        let (_, _, same) = update_consensus_state(client_state, &Header::new(Height::new(0, 5), 1));
        assert_eq!(None, same);
    }
}
