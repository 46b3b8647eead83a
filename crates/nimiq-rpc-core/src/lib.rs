//! Nimiq RPC Core
//!
//! Typed models for the results of a Nimiq node's JSON-RPC interface, the
//! structural decoding rules for its polymorphic results, and the client
//! configuration.

pub mod config;
pub mod error;
pub mod models;

pub use config::ClientConfig;
pub use error::{Error, Result};
