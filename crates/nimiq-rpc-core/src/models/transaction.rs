//! Transaction data models

use super::account::AccountType;
use super::decode::{into_de_error, probe};
use super::{unix_time, Address, Hash};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// Transaction as returned by the node.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Transaction {
    pub hash: Hash,
    pub block_hash: Option<Hash>,
    pub block_number: Option<u32>,
    pub timestamp: Option<u64>,
    #[serde(default)]
    pub confirmations: u32,
    pub transaction_index: Option<u32>,
    pub from: String,
    pub from_address: Address,
    pub to: String,
    pub to_address: Address,
    pub value: u64,
    pub fee: u64,
    pub data: Option<String>,
    pub flags: u8,
}

impl Transaction {
    /// Time of the containing block, if the transaction is mined
    pub fn time(&self) -> Option<DateTime<Utc>> {
        self.timestamp.and_then(unix_time)
    }

    /// Check if the transaction is included in a block
    pub fn is_mined(&self) -> bool {
        self.block_hash.is_some()
    }
}

/// Receipt of a mined transaction.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct TransactionReceipt {
    pub transaction_hash: Hash,
    pub transaction_index: u32,
    pub block_hash: Hash,
    pub block_number: u32,
    pub confirmations: u32,
    pub timestamp: u64,
}

impl TransactionReceipt {
    pub fn time(&self) -> Option<DateTime<Utc>> {
        unix_time(self.timestamp)
    }
}

/// Transaction to be created or sent by the node.
///
/// Absent optional fields are left out of the request object.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct OutgoingTransaction {
    pub from: Address,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub from_type: Option<AccountType>,
    pub to: Address,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub to_type: Option<AccountType>,
    pub value: u64,
    pub fee: u64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<String>,
}

impl OutgoingTransaction {
    /// Create a transaction between two basic accounts
    pub fn new(from: impl Into<Address>, to: impl Into<Address>, value: u64, fee: u64) -> Self {
        Self {
            from: from.into(),
            from_type: Some(AccountType::Basic),
            to: to.into(),
            to_type: Some(AccountType::Basic),
            value,
            fee,
            data: None,
        }
    }

    /// Attach hex-encoded extra data
    pub fn with_data(mut self, data: impl Into<String>) -> Self {
        self.data = Some(data.into());
        self
    }
}

/// A transaction given either in full or by its hash.
///
/// Decoding tries the full transaction object first and falls back to a
/// bare hash string.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
#[serde(untagged)]
pub enum HashOrTransaction {
    Transaction(Box<Transaction>),
    Hash(Hash),
}

impl<'de> Deserialize<'de> for HashOrTransaction {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = Value::deserialize(deserializer)?;
        probe(&value)
            .map(|tx| HashOrTransaction::Transaction(Box::new(tx)))
            .or_else(|_| probe(&value).map(HashOrTransaction::Hash))
            .map_err(into_de_error)
    }
}

impl HashOrTransaction {
    /// Transaction hash, whichever form was returned
    pub fn hash(&self) -> &str {
        match self {
            HashOrTransaction::Transaction(tx) => &tx.hash,
            HashOrTransaction::Hash(hash) => hash,
        }
    }

    pub fn as_transaction(&self) -> Option<&Transaction> {
        match self {
            HashOrTransaction::Transaction(tx) => Some(tx.as_ref()),
            HashOrTransaction::Hash(_) => None,
        }
    }
}
