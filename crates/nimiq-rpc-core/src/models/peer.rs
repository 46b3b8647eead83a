//! Peer data models

use super::Hash;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum PeerAddressState {
    New,
    Established,
    Tried,
    Failed,
    Banned,
}

impl TryFrom<u8> for PeerAddressState {
    type Error = String;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            1 => Ok(PeerAddressState::New),
            2 => Ok(PeerAddressState::Established),
            3 => Ok(PeerAddressState::Tried),
            4 => Ok(PeerAddressState::Failed),
            5 => Ok(PeerAddressState::Banned),
            other => Err(format!("unknown peer address state {other}")),
        }
    }
}

impl From<PeerAddressState> for u8 {
    fn from(value: PeerAddressState) -> Self {
        match value {
            PeerAddressState::New => 1,
            PeerAddressState::Established => 2,
            PeerAddressState::Tried => 3,
            PeerAddressState::Failed => 4,
            PeerAddressState::Banned => 5,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum PeerConnectionState {
    New,
    Connecting,
    Connected,
    Negotiating,
    Established,
    Closed,
}

impl TryFrom<u8> for PeerConnectionState {
    type Error = String;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            1 => Ok(PeerConnectionState::New),
            2 => Ok(PeerConnectionState::Connecting),
            3 => Ok(PeerConnectionState::Connected),
            4 => Ok(PeerConnectionState::Negotiating),
            5 => Ok(PeerConnectionState::Established),
            6 => Ok(PeerConnectionState::Closed),
            other => Err(format!("unknown peer connection state {other}")),
        }
    }
}

impl From<PeerConnectionState> for u8 {
    fn from(value: PeerConnectionState) -> Self {
        match value {
            PeerConnectionState::New => 1,
            PeerConnectionState::Connecting => 2,
            PeerConnectionState::Connected => 3,
            PeerConnectionState::Negotiating => 4,
            PeerConnectionState::Established => 5,
            PeerConnectionState::Closed => 6,
        }
    }
}

/// Commands accepted by `peerState` to change a peer's state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PeerStateCommand {
    Connect,
    Disconnect,
    Ban,
    Unban,
}

impl PeerStateCommand {
    pub fn as_str(&self) -> &'static str {
        match self {
            PeerStateCommand::Connect => "connect",
            PeerStateCommand::Disconnect => "disconnect",
            PeerStateCommand::Ban => "ban",
            PeerStateCommand::Unban => "unban",
        }
    }
}

/// Peer known to the node.
///
/// Only `id`, `address` and `addressState` are always present; the rest is
/// reported for connected peers.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Peer {
    pub id: String,
    pub address: String,
    pub address_state: PeerAddressState,
    pub connection_state: Option<PeerConnectionState>,
    pub version: Option<u32>,
    pub time_offset: Option<i64>,
    pub head_hash: Option<Hash>,
    pub latency: Option<u32>,
    pub rx: Option<u64>,
    pub tx: Option<u64>,
}

impl Peer {
    pub fn is_connected(&self) -> bool {
        matches!(
            self.connection_state,
            Some(PeerConnectionState::Connected) | Some(PeerConnectionState::Established)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_connected_peer() {
        let peer: Peer = serde_json::from_value(json!({
            "id": "b99034c552e9c0fd34eb95c1cdf17f5e",
            "address": "wss://seed1.nimiq-testnet.com:8080/b99034c552e9c0fd34eb95c1cdf17f5e",
            "addressState": 2,
            "connectionState": 5,
            "version": 2,
            "timeOffset": -186,
            "headHash": "e3ecd2ed7d9197c8ab4ec5e2b8e2bd9b51bc25fce5f7bd92fcce81fbba74e01b",
            "latency": 500,
            "rx": 3440,
            "tx": 2696
        }))
        .unwrap();

        assert_eq!(peer.address_state, PeerAddressState::Established);
        assert_eq!(peer.connection_state, Some(PeerConnectionState::Established));
        assert_eq!(peer.time_offset, Some(-186));
        assert!(peer.is_connected());
    }

    #[test]
    fn test_failed_peer_has_only_address_fields() {
        let peer: Peer = serde_json::from_value(json!({
            "id": "e37dca72802c972d45b37735e9595cf0",
            "address": "wss://seed4.nimiq-testnet.com:8080/e37dca72802c972d45b37735e9595cf0",
            "addressState": 4
        }))
        .unwrap();

        assert_eq!(peer.address_state, PeerAddressState::Failed);
        assert!(peer.connection_state.is_none());
        assert!(!peer.is_connected());
    }

    #[test]
    fn test_unknown_states_are_rejected() {
        assert!(serde_json::from_value::<PeerAddressState>(json!(0)).is_err());
        assert!(serde_json::from_value::<PeerConnectionState>(json!(7)).is_err());
    }

    #[test]
    fn test_peer_state_command_wire_form() {
        assert_eq!(serde_json::to_value(PeerStateCommand::Unban).unwrap(), json!("unban"));
        assert_eq!(PeerStateCommand::Ban.as_str(), "ban");
    }
}
