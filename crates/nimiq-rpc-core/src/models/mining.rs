//! Mining data models

use serde::{Deserialize, Serialize};

/// Work returned by `getWork`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct WorkInstructions {
    pub data: String,
    pub suffix: String,
    pub target: u64,
    pub algorithm: String,
}

/// Connection state to the mining pool.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum PoolConnectionState {
    Connected,
    Connecting,
    Closed,
}

impl TryFrom<u8> for PoolConnectionState {
    type Error = String;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(PoolConnectionState::Connected),
            1 => Ok(PoolConnectionState::Connecting),
            2 => Ok(PoolConnectionState::Closed),
            other => Err(format!("unknown pool connection state {other}")),
        }
    }
}

impl From<PoolConnectionState> for u8 {
    fn from(value: PoolConnectionState) -> Self {
        match value {
            PoolConnectionState::Connected => 0,
            PoolConnectionState::Connecting => 1,
            PoolConnectionState::Closed => 2,
        }
    }
}

/// Argument of `pool`: a pool connection string (`host:port`) or a flag to
/// enable or disable pool mining.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PoolSetting {
    Address(String),
    Enabled(bool),
}

impl From<&str> for PoolSetting {
    fn from(address: &str) -> Self {
        PoolSetting::Address(address.to_string())
    }
}

impl From<bool> for PoolSetting {
    fn from(enabled: bool) -> Self {
        PoolSetting::Enabled(enabled)
    }
}
