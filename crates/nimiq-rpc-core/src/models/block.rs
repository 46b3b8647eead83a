//! Block data models

use super::decode::{into_de_error, probe};
use super::transaction::Transaction;
use super::{unix_time, Address, Hash};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// Block as returned by `getBlockByHash` / `getBlockByNumber`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Block {
    pub number: u32,
    pub hash: Hash,
    pub pow: Hash,
    pub parent_hash: Hash,
    pub nonce: u64,
    pub body_hash: Hash,
    pub accounts_hash: Hash,
    pub difficulty: String,
    pub timestamp: u64,
    pub confirmations: u32,
    pub miner: String,
    pub miner_address: Address,
    pub extra_data: String,
    pub size: u32,
    pub transactions: BlockTransactions,
}

impl Block {
    pub fn time(&self) -> Option<DateTime<Utc>> {
        unix_time(self.timestamp)
    }
}

/// Transactions of a block, either in full or as hashes depending on the
/// `fullTransactions` flag of the request.
///
/// Decoding tries a list of full transactions first, so an empty list is
/// reported as `Full`.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
#[serde(untagged)]
pub enum BlockTransactions {
    Full(Vec<Transaction>),
    Hashes(Vec<Hash>),
}

impl<'de> Deserialize<'de> for BlockTransactions {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = Value::deserialize(deserializer)?;
        probe(&value)
            .map(BlockTransactions::Full)
            .or_else(|_| probe(&value).map(BlockTransactions::Hashes))
            .map_err(into_de_error)
    }
}

impl BlockTransactions {
    pub fn len(&self) -> usize {
        match self {
            BlockTransactions::Full(txs) => txs.len(),
            BlockTransactions::Hashes(hashes) => hashes.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Hashes of all transactions, whichever form was returned
    pub fn hashes(&self) -> Vec<&str> {
        match self {
            BlockTransactions::Full(txs) => txs.iter().map(|tx| tx.hash.as_str()).collect(),
            BlockTransactions::Hashes(hashes) => hashes.iter().map(String::as_str).collect(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct BlockTemplateHeader {
    pub version: u16,
    pub prev_hash: Hash,
    pub interlink_hash: Hash,
    pub accounts_hash: Hash,
    pub n_bits: u32,
    pub height: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct BlockTemplateBody {
    pub hash: Hash,
    pub miner_addr: String,
    pub extra_data: String,
    pub transactions: Vec<String>,
    pub pruned_accounts: Vec<String>,
    pub merkle_hashes: Vec<Hash>,
}

/// Template for building the next block when mining.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct BlockTemplate {
    pub header: BlockTemplateHeader,
    pub interlink: String,
    pub body: BlockTemplateBody,
    pub target: u64,
}
