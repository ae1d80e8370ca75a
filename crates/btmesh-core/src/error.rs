//! Error types for the btmesh-core crate.
//!
//! Callers tell three failure styles apart. Classification predicates return
//! `false` or `None`. Range validators return [`ValidationError`]. Codec
//! operations return [`CodecError`]. Decrypt failures live in
//! [`btmesh_crypto::CryptoError`].

/// Errors from byte, hex, integer and opcode conversions.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CodecError {
    #[error("invalid encoding: {0}")]
    InvalidEncoding(String),

    #[error("invalid length: expected {expected}, got {actual}")]
    InvalidLength { expected: usize, actual: usize },

    #[error("value 0x{value:x} does not fit in {bits} bits")]
    ValueOutOfRange { value: u32, bits: u8 },
}

/// Raised by validators that assert a value is in range rather than
/// reporting `false`.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
}

impl ValidationError {
    pub(crate) fn invalid(reason: impl Into<String>) -> Self {
        ValidationError::InvalidArgument(reason.into())
    }
}

/// Errors from OOB authentication value generation.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum OobError {
    #[error("action {0} does not take an authentication value")]
    UnsupportedAction(&'static str),

    #[error("invalid numeric authentication input: {0}")]
    InvalidNumber(String),

    #[error("alphanumeric authentication input must be 1-16 ASCII characters, got {0:?}")]
    InvalidAlphanumeric(String),

    #[error("authentication input size must be 1-8, got {0}")]
    InvalidSize(u8),
}
