//! Client recovery by substitution, which the mock client does not support.

use crate::{client_state::ClientState, error::MockClientError};

/// Always fails: a mock client cannot be replaced by a substitute.
/// # Errors
/// Always returns [`MockClientError::InvalidSubstitute`].
pub const fn check_substitute_and_update_state(
    _subject: &ClientState,
    _substitute: &ClientState,
) -> Result<(), MockClientError> {
    Err(MockClientError::InvalidSubstitute)
}
