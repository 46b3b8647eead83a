//! Node state: consensus, synchronization and logging

use super::decode::{into_de_error, probe};
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// Consensus state reported by `consensus`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ConsensusState {
    Connecting,
    Syncing,
    Established,
}

impl ConsensusState {
    pub fn as_str(&self) -> &'static str {
        match self {
            ConsensusState::Connecting => "connecting",
            ConsensusState::Syncing => "syncing",
            ConsensusState::Established => "established",
        }
    }
}

/// Minimum level for the node's log output, set through `log`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Trace,
    Verbose,
    Debug,
    Info,
    Warn,
    Error,
    Assert,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct SyncStatus {
    pub starting_block: u32,
    pub current_block: u32,
    pub highest_block: u32,
}

impl SyncStatus {
    /// Blocks left until the node reaches the highest known block
    pub fn remaining(&self) -> u32 {
        self.highest_block.saturating_sub(self.current_block)
    }
}

/// Result of `syncing`: a progress object while syncing, otherwise `false`.
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
#[serde(untagged)]
pub enum SyncStatusOrBool {
    Status(SyncStatus),
    Syncing(bool),
}

impl<'de> Deserialize<'de> for SyncStatusOrBool {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = Value::deserialize(deserializer)?;
        probe(&value)
            .map(SyncStatusOrBool::Status)
            .or_else(|_| probe(&value).map(SyncStatusOrBool::Syncing))
            .map_err(into_de_error)
    }
}

impl SyncStatusOrBool {
    pub fn is_syncing(&self) -> bool {
        match self {
            SyncStatusOrBool::Status(_) => true,
            SyncStatusOrBool::Syncing(syncing) => *syncing,
        }
    }

    pub fn status(&self) -> Option<&SyncStatus> {
        match self {
            SyncStatusOrBool::Status(status) => Some(status),
            SyncStatusOrBool::Syncing(_) => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_not_syncing() {
        let result: SyncStatusOrBool = serde_json::from_value(json!(false)).unwrap();
        assert_eq!(result, SyncStatusOrBool::Syncing(false));
        assert!(!result.is_syncing());
        assert!(result.status().is_none());
    }

    #[test]
    fn test_sync_progress() {
        let result: SyncStatusOrBool = serde_json::from_value(json!({
            "startingBlock": 1,
            "currentBlock": 12345,
            "highestBlock": 23456
        }))
        .unwrap();

        let status = result.status().unwrap();
        assert_eq!(status.starting_block, 1);
        assert_eq!(status.current_block, 12345);
        assert_eq!(status.highest_block, 23456);
        assert_eq!(status.remaining(), 11111);
        assert!(result.is_syncing());
    }

    #[test]
    fn test_incomplete_progress_is_rejected() {
        let result =
            serde_json::from_value::<SyncStatusOrBool>(json!({"startingBlock": 1, "currentBlock": 2}));
        assert!(result.is_err());
    }

    #[test]
    fn test_consensus_state() {
        let state: ConsensusState = serde_json::from_value(json!("established")).unwrap();
        assert_eq!(state, ConsensusState::Established);
        assert!(serde_json::from_value::<ConsensusState>(json!("lost")).is_err());
    }

    #[test]
    fn test_log_level_wire_form() {
        assert_eq!(serde_json::to_value(LogLevel::Verbose).unwrap(), json!("verbose"));
        assert_eq!(serde_json::to_value(LogLevel::Assert).unwrap(), json!("assert"));
    }
}
