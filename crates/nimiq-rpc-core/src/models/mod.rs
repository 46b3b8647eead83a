//! Typed results of the node's RPC methods

pub mod account;
pub mod block;
mod decode;
pub mod mempool;
pub mod mining;
pub mod node;
pub mod peer;
pub mod transaction;

#[cfg(test)]
pub(crate) mod fixtures;

pub use account::{Account, AccountType, Htlc, RawAccount, VestingContract, Wallet};
pub use block::{Block, BlockTemplate, BlockTemplateBody, BlockTemplateHeader, BlockTransactions};
pub use mempool::{MempoolInfo, MEMPOOL_BUCKETS};
pub use mining::{PoolConnectionState, PoolSetting, WorkInstructions};
pub use node::{ConsensusState, LogLevel, SyncStatus, SyncStatusOrBool};
pub use peer::{Peer, PeerAddressState, PeerConnectionState, PeerStateCommand};
pub use transaction::{HashOrTransaction, OutgoingTransaction, Transaction, TransactionReceipt};

use chrono::{DateTime, Utc};

/// Nimiq address, either hex or in user-friendly `NQ..` form
pub type Address = String;

/// Hex-encoded hash
pub type Hash = String;

/// Convert a unix timestamp in seconds reported by the node
pub(crate) fn unix_time(secs: u64) -> Option<DateTime<Utc>> {
    i64::try_from(secs)
        .ok()
        .and_then(|secs| DateTime::from_timestamp(secs, 0))
}
