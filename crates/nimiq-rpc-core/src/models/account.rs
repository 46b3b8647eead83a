//! Account data models

use super::decode::{into_de_error, probe};
use super::Address;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// Type of a Nimiq account, encoded on the wire as an integer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum AccountType {
    Basic,
    Vesting,
    Htlc,
}

impl TryFrom<u8> for AccountType {
    type Error = String;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(AccountType::Basic),
            1 => Ok(AccountType::Vesting),
            2 => Ok(AccountType::Htlc),
            other => Err(format!("unknown account type {other}")),
        }
    }
}

impl From<AccountType> for u8 {
    fn from(value: AccountType) -> Self {
        match value {
            AccountType::Basic => 0,
            AccountType::Vesting => 1,
            AccountType::Htlc => 2,
        }
    }
}

impl AccountType {
    pub fn as_str(&self) -> &'static str {
        match self {
            AccountType::Basic => "basic",
            AccountType::Vesting => "vesting",
            AccountType::Htlc => "htlc",
        }
    }
}

/// Plain account as returned by the node.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Account {
    pub id: String,
    pub address: Address,
    pub balance: u64,
    #[serde(rename = "type")]
    pub account_type: AccountType,
}

/// Vesting contract account.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct VestingContract {
    pub id: String,
    pub address: Address,
    pub balance: u64,
    #[serde(rename = "type")]
    pub account_type: AccountType,
    pub owner: String,
    pub owner_address: Address,
    pub vesting_start: u32,
    pub vesting_step_blocks: u32,
    pub vesting_step_amount: u64,
    pub vesting_total_amount: u64,
}

/// Hashed time-locked contract account.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Htlc {
    pub id: String,
    pub address: Address,
    pub balance: u64,
    #[serde(rename = "type")]
    pub account_type: AccountType,
    pub sender: String,
    pub sender_address: Address,
    pub recipient: String,
    pub recipient_address: Address,
    pub hash_root: String,
    pub hash_algorithm: u8,
    pub hash_count: u32,
    pub timeout: u32,
    pub total_amount: u64,
}

/// Any account returned by the node.
///
/// The wire format has no discriminator usable before decoding, so the
/// variant is chosen by shape: HTLC first, then vesting, then a plain
/// account. The order matters because the plain account's fields are a
/// subset of both contract shapes.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
#[serde(untagged)]
pub enum RawAccount {
    Htlc(Htlc),
    Vesting(VestingContract),
    Account(Account),
}

impl<'de> Deserialize<'de> for RawAccount {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = Value::deserialize(deserializer)?;
        probe(&value)
            .map(RawAccount::Htlc)
            .or_else(|_| probe(&value).map(RawAccount::Vesting))
            .or_else(|_| probe(&value).map(RawAccount::Account))
            .map_err(into_de_error)
    }
}

impl RawAccount {
    pub fn id(&self) -> &str {
        match self {
            RawAccount::Htlc(a) => &a.id,
            RawAccount::Vesting(a) => &a.id,
            RawAccount::Account(a) => &a.id,
        }
    }

    pub fn address(&self) -> &str {
        match self {
            RawAccount::Htlc(a) => &a.address,
            RawAccount::Vesting(a) => &a.address,
            RawAccount::Account(a) => &a.address,
        }
    }

    /// Balance in Luna
    pub fn balance(&self) -> u64 {
        match self {
            RawAccount::Htlc(a) => a.balance,
            RawAccount::Vesting(a) => a.balance,
            RawAccount::Account(a) => a.balance,
        }
    }

    /// Account type as reported by the node
    pub fn account_type(&self) -> AccountType {
        match self {
            RawAccount::Htlc(a) => a.account_type,
            RawAccount::Vesting(a) => a.account_type,
            RawAccount::Account(a) => a.account_type,
        }
    }
}

/// Account created by `createAccount`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Wallet {
    pub id: String,
    pub address: Address,
    pub public_key: String,
    pub private_key: Option<String>,
}
