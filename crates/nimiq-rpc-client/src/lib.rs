//! Nimiq RPC Client Library
//!
//! Provides a typed client for a Nimiq node's JSON-RPC interface over HTTP.

pub mod api;
pub mod auth;
pub mod client;
pub mod error;
pub mod protocol;
pub mod transport;

pub use api::DEFAULT_TRANSACTION_LIMIT;
pub use auth::Credentials;
pub use client::NimiqClient;
pub use error::{Error, Result};
pub use nimiq_rpc_core::models;
pub use nimiq_rpc_core::ClientConfig;
pub use protocol::{Request, RequestId, Response, ResponseError};
pub use transport::{Endpoint, HttpTransport, Transport, TransportError};
