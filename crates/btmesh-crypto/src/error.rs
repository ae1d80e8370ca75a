use core::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CryptoError {
    InvalidKeyLength { expected: usize, actual: usize },
    InvalidLength { reason: &'static str },
    InvalidMicSize(usize),
    /// A CCM tag or beacon authentication value did not verify.
    AuthenticationFailure,
}

impl fmt::Display for CryptoError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CryptoError::InvalidKeyLength { expected, actual } => {
                write!(f, "invalid key length: expected {expected}, got {actual}")
            }
            CryptoError::InvalidLength { reason } => write!(f, "invalid length: {reason}"),
            CryptoError::InvalidMicSize(size) => write!(f, "unsupported MIC size: {size}"),
            CryptoError::AuthenticationFailure => write!(f, "authentication failed"),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for CryptoError {}
