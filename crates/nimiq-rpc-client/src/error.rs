//! Error types for the RPC client

use crate::transport::TransportError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    /// The request never produced a response body.
    #[error("Transport error: {0}")]
    Transport(#[from] TransportError),

    /// The response body did not match the envelope or the expected result.
    #[error("Wrong format: {0}")]
    Format(#[from] serde_json::Error),

    /// The node answered with a JSON-RPC error object.
    #[error("{message} (Code: {code})")]
    Method { code: i64, message: String },

    #[error("Configuration error: {0}")]
    Config(#[from] nimiq_rpc_core::Error),

    #[error("Invalid URL: {0}")]
    Url(#[from] url::ParseError),
}

impl Error {
    /// Check if the node itself reported the error
    pub fn is_method(&self) -> bool {
        matches!(self, Error::Method { .. })
    }

    /// JSON-RPC error code reported by the node
    pub fn method_code(&self) -> Option<i64> {
        match self {
            Error::Method { code, .. } => Some(*code),
            _ => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
