//! Error types for the btmesh command-line tool.

use btmesh_core::{CodecError, ValidationError};
use btmesh_crypto::CryptoError;

/// Errors that can occur while loading configuration or building a report.
#[derive(Debug, thiserror::Error)]
pub enum ToolError {
    #[error("configuration error: {0}")]
    Config(String),
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("codec error: {0}")]
    Codec(#[from] CodecError),
    #[error("validation error: {0}")]
    Validation(#[from] ValidationError),
    #[error("crypto error: {0}")]
    Crypto(#[from] CryptoError),
    #[error("invalid argument: {0}")]
    Argument(String),
}
