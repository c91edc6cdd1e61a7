//! ICS-24 host paths of the objects the counterparty verifications commit to.

use crate::height::Height;

/// `clients/{client_id}/clientState`
#[must_use]
pub fn client_state_path(client_id: &str) -> String {
    format!("clients/{client_id}/clientState")
}

/// `clients/{client_id}/consensusStates/{revision}-{height}`
#[must_use]
pub fn consensus_state_path(client_id: &str, height: Height) -> String {
    format!("clients/{client_id}/consensusStates/{height}")
}

/// `connections/{connection_id}`
#[must_use]
pub fn connection_path(connection_id: &str) -> String {
    format!("connections/{connection_id}")
}

/// `channelEnds/ports/{port_id}/channels/{channel_id}`
#[must_use]
pub fn channel_path(port_id: &str, channel_id: &str) -> String {
    format!("channelEnds/ports/{port_id}/channels/{channel_id}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn paths() {
        assert_eq!("clients/07-tendermint-0/clientState", client_state_path("07-tendermint-0"));
        assert_eq!(
            "clients/07-tendermint-0/consensusStates/1-10",
            consensus_state_path("07-tendermint-0", Height::new(1, 10))
        );
        assert_eq!("connections/connection-3", connection_path("connection-3"));
        assert_eq!(
            "channelEnds/ports/transfer/channels/channel-0",
            channel_path("transfer", "channel-0")
        );
    }
}
