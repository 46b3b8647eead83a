//! Typed wrappers for every RPC method of the node

use crate::client::NimiqClient;
use crate::error::Result;
use nimiq_rpc_core::models::{
    Block, BlockTemplate, ConsensusState, Hash, HashOrTransaction, LogLevel, MempoolInfo,
    OutgoingTransaction, Peer, PeerStateCommand, PoolConnectionState, PoolSetting, RawAccount,
    SyncStatusOrBool, Transaction, TransactionReceipt, Wallet, WorkInstructions,
};
use serde::Serialize;
use serde_json::{json, Value};

/// Number of transactions `getTransactionsByAddress` returns unless told otherwise
pub const DEFAULT_TRANSACTION_LIMIT: u16 = 1000;

/// Parameters for methods that read a value when called without argument and
/// set it otherwise: an absent value leaves the parameter list empty.
fn optional_param<T: Serialize>(value: Option<T>) -> Vec<Value> {
    value.map(|v| json!(v)).into_iter().collect()
}

/// `[address, extraData]` when a miner address override is given, else `[]`
fn mining_params(address: Option<&str>, extra_data: &str) -> Vec<Value> {
    match address {
        Some(address) => vec![json!(address), json!(extra_data)],
        None => Vec::new(),
    }
}

impl NimiqClient {
    // Accounts

    /// Accounts owned by the node
    pub async fn accounts(&self) -> Result<Vec<RawAccount>> {
        self.call("accounts", vec![]).await
    }

    /// Create a new account and store its private key in the node
    pub async fn create_account(&self) -> Result<Wallet> {
        self.call("createAccount", vec![]).await
    }

    /// Details of the account at `address`. Unknown addresses yield an empty
    /// basic account.
    pub async fn get_account(&self, address: &str) -> Result<RawAccount> {
        self.call("getAccount", vec![json!(address)]).await
    }

    /// Balance at `address` in Luna
    pub async fn get_balance(&self, address: &str) -> Result<u64> {
        self.call("getBalance", vec![json!(address)]).await
    }

    // Blocks

    /// Height of the most recent block
    pub async fn block_number(&self) -> Result<u32> {
        self.call("blockNumber", vec![]).await
    }

    pub async fn get_block_by_hash(
        &self,
        hash: &str,
        full_transactions: bool,
    ) -> Result<Option<Block>> {
        self.call("getBlockByHash", vec![json!(hash), json!(full_transactions)])
            .await
    }

    pub async fn get_block_by_number(
        &self,
        height: u32,
        full_transactions: bool,
    ) -> Result<Option<Block>> {
        self.call(
            "getBlockByNumber",
            vec![json!(height), json!(full_transactions)],
        )
        .await
    }

    pub async fn get_block_transaction_count_by_hash(&self, hash: &str) -> Result<Option<u32>> {
        self.call("getBlockTransactionCountByHash", vec![json!(hash)])
            .await
    }

    pub async fn get_block_transaction_count_by_number(
        &self,
        height: u32,
    ) -> Result<Option<u32>> {
        self.call("getBlockTransactionCountByNumber", vec![json!(height)])
            .await
    }

    /// Submit a hex-encoded full block (header, interlink and body). Work from
    /// `get_work` needs its suffix appended.
    pub async fn submit_block(&self, block: &str) -> Result<()> {
        self.call::<Option<Value>>("submitBlock", vec![json!(block)])
            .await
            .map(|_| ())
    }

    // Transactions

    /// Create and sign a transaction without sending it
    pub async fn create_raw_transaction(&self, transaction: &OutgoingTransaction) -> Result<String> {
        self.call("createRawTransaction", vec![json!(transaction)])
            .await
    }

    /// Decode a hex-encoded signed transaction
    pub async fn get_raw_transaction_info(&self, transaction: &str) -> Result<Transaction> {
        self.call("getRawTransactionInfo", vec![json!(transaction)])
            .await
    }

    pub async fn get_transaction_by_block_hash_and_index(
        &self,
        hash: &str,
        index: u32,
    ) -> Result<Option<Transaction>> {
        self.call(
            "getTransactionByBlockHashAndIndex",
            vec![json!(hash), json!(index)],
        )
        .await
    }

    pub async fn get_transaction_by_block_number_and_index(
        &self,
        height: u32,
        index: u32,
    ) -> Result<Option<Transaction>> {
        self.call(
            "getTransactionByBlockNumberAndIndex",
            vec![json!(height), json!(index)],
        )
        .await
    }

    pub async fn get_transaction_by_hash(&self, hash: &str) -> Result<Option<Transaction>> {
        self.call("getTransactionByHash", vec![json!(hash)]).await
    }

    pub async fn get_transaction_receipt(&self, hash: &str) -> Result<Option<TransactionReceipt>> {
        self.call("getTransactionReceipt", vec![json!(hash)]).await
    }

    /// Latest transactions sent by or to `address`, at most `limit` of them
    /// (see [`DEFAULT_TRANSACTION_LIMIT`])
    pub async fn get_transactions_by_address(
        &self,
        address: &str,
        limit: u16,
    ) -> Result<Vec<Transaction>> {
        self.call(
            "getTransactionsByAddress",
            vec![json!(address), json!(limit)],
        )
        .await
    }

    /// Send a hex-encoded signed transaction, returning its hash
    pub async fn send_raw_transaction(&self, transaction: &str) -> Result<Hash> {
        self.call("sendRawTransaction", vec![json!(transaction)])
            .await
    }

    /// Create, sign and send a transaction, returning its hash
    pub async fn send_transaction(&self, transaction: &OutgoingTransaction) -> Result<Hash> {
        self.call("sendTransaction", vec![json!(transaction)]).await
    }

    // Mempool

    pub async fn mempool(&self) -> Result<MempoolInfo> {
        self.call("mempool", vec![]).await
    }

    /// Pending transactions, in full or as hashes
    pub async fn mempool_content(&self, full_transactions: bool) -> Result<Vec<HashOrTransaction>> {
        self.call("mempoolContent", vec![json!(full_transactions)])
            .await
    }

    /// Get the minimum fee per byte, or set it when `fee` is given
    pub async fn min_fee_per_byte(&self, fee: Option<u64>) -> Result<u64> {
        self.call("minFeePerByte", optional_param(fee)).await
    }

    // Mining

    /// Get the mining state, or start/stop mining when `state` is given
    pub async fn mining(&self, state: Option<bool>) -> Result<bool> {
        self.call("mining", optional_param(state)).await
    }

    /// Hashes per second the node is mining with
    pub async fn hashrate(&self) -> Result<f64> {
        self.call("hashrate", vec![]).await
    }

    /// Get the number of miner threads, or set it when `threads` is given
    pub async fn miner_threads(&self, threads: Option<u32>) -> Result<u32> {
        self.call("minerThreads", optional_param(threads)).await
    }

    pub async fn miner_address(&self) -> Result<String> {
        self.call("minerAddress", vec![]).await
    }

    /// Get the mining pool, or connect/disconnect when `setting` is given.
    /// Returns `None` when pool mining is disabled.
    pub async fn pool(&self, setting: Option<PoolSetting>) -> Result<Option<String>> {
        self.call("pool", optional_param(setting)).await
    }

    pub async fn pool_connection_state(&self) -> Result<PoolConnectionState> {
        self.call("poolConnectionState", vec![]).await
    }

    /// Confirmed mining pool balance in Luna
    pub async fn pool_confirmed_balance(&self) -> Result<u64> {
        self.call("poolConfirmedBalance", vec![]).await
    }

    /// Template for the next block. `address` and `extra_data` override the
    /// values configured on the node or received from the pool.
    pub async fn get_block_template(
        &self,
        address: Option<&str>,
        extra_data: &str,
    ) -> Result<BlockTemplate> {
        self.call("getBlockTemplate", mining_params(address, extra_data))
            .await
    }

    /// Instructions to mine the next block, with the same overrides as
    /// [`get_block_template`](Self::get_block_template)
    pub async fn get_work(
        &self,
        address: Option<&str>,
        extra_data: &str,
    ) -> Result<WorkInstructions> {
        self.call("getWork", mining_params(address, extra_data)).await
    }

    // Network

    pub async fn consensus(&self) -> Result<ConsensusState> {
        self.call("consensus", vec![]).await
    }

    pub async fn peer_count(&self) -> Result<u32> {
        self.call("peerCount", vec![]).await
    }

    pub async fn peer_list(&self) -> Result<Vec<Peer>> {
        self.call("peerList", vec![]).await
    }

    /// State of the peer at `address`, after applying `command` if given
    pub async fn peer_state(
        &self,
        address: &str,
        command: Option<PeerStateCommand>,
    ) -> Result<Peer> {
        let mut params = vec![json!(address)];
        params.extend(optional_param(command));
        self.call("peerState", params).await
    }

    /// Sync progress, or `false` when the node is not syncing
    pub async fn syncing(&self) -> Result<SyncStatusOrBool> {
        self.call("syncing", vec![]).await
    }

    // Node

    /// Get a constant (`Class.CONSTANT`), or override it when `value` is given
    pub async fn constant(&self, constant: &str, value: Option<i64>) -> Result<i64> {
        let mut params = vec![json!(constant)];
        params.extend(optional_param(value));
        self.call("constant", params).await
    }

    /// Reset a constant to its default value
    pub async fn reset_constant(&self, constant: &str) -> Result<i64> {
        self.call("constant", vec![json!(constant), json!("reset")])
            .await
    }

    /// Set the node's log level for `tag`, or globally when `tag` is `"*"`
    pub async fn log(&self, tag: &str, level: LogLevel) -> Result<bool> {
        self.call("log", vec![json!(tag), json!(level)]).await
    }
}
