//! Range validators for protocol fields.
//!
//! These follow the validate-or-reject convention: a valid value yields
//! `Ok(true)` and an invalid one a [`ValidationError`]. They never return
//! `Ok(false)`. [`is_valid_key_index`] is the exception and is a plain
//! predicate.

use crate::constants::{MAX_KEY_INDEX, MAX_SEQUENCE_NUMBER, MAX_TTL};
use crate::error::ValidationError;

/// # Errors
///
/// Rejects values wider than 24 bits.
pub fn is_valid_sequence_number(sequence_number: u32) -> Result<bool, ValidationError> {
    if sequence_number <= MAX_SEQUENCE_NUMBER {
        Ok(true)
    } else {
        Err(ValidationError::invalid(format!(
            "sequence number 0x{sequence_number:X} exceeds 24 bits"
        )))
    }
}

/// IV indices are read from wider fields in configuration, so this takes
/// `u64`.
///
/// # Errors
///
/// Rejects values wider than 32 bits.
pub fn is_valid_iv_index(iv_index: u64) -> Result<bool, ValidationError> {
    if iv_index <= u64::from(u32::MAX) {
        Ok(true)
    } else {
        Err(ValidationError::invalid(format!(
            "IV index 0x{iv_index:X} exceeds 32 bits"
        )))
    }
}

/// Valid TTLs are `0x00` and `0x02..=0x7F`.
///
/// # Errors
///
/// Rejects `0x01` and anything above `0x7F`.
pub fn is_valid_ttl(ttl: u8) -> Result<bool, ValidationError> {
    if ttl == 0x00 || (0x02..=MAX_TTL).contains(&ttl) {
        Ok(true)
    } else {
        Err(ValidationError::invalid(format!("TTL 0x{ttl:02X} is prohibited")))
    }
}

/// Returns `true` when `value` does NOT fit in 12 bits.
///
/// The result is inverted relative to the name: callers reject an index when
/// this returns `true`.
pub fn is_valid_key_index(value: u32) -> bool {
    value != (value & u32::from(MAX_KEY_INDEX))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sequence_number() {
        assert_eq!(is_valid_sequence_number(0), Ok(true));
        assert_eq!(is_valid_sequence_number(0xFF_FFFF), Ok(true));
        assert!(is_valid_sequence_number(0x100_0000).is_err());
    }

    #[test]
    fn test_iv_index() {
        assert_eq!(is_valid_iv_index(0), Ok(true));
        assert_eq!(is_valid_iv_index(0xFFFF_FFFF), Ok(true));
        assert!(is_valid_iv_index(0x1_0000_0000).is_err());
    }

    #[test]
    fn test_ttl() {
        assert_eq!(is_valid_ttl(0x00), Ok(true));
        assert!(is_valid_ttl(0x01).is_err());
        assert_eq!(is_valid_ttl(0x02), Ok(true));
        assert_eq!(is_valid_ttl(0x7F), Ok(true));
        assert!(is_valid_ttl(0x80).is_err());
        assert!(is_valid_ttl(0xFF).is_err());
    }

    #[test]
    fn test_key_index_polarity() {
        assert!(!is_valid_key_index(0x000));
        assert!(!is_valid_key_index(0xFFF));
        assert!(is_valid_key_index(0x1000));
        assert!(is_valid_key_index(0xFFFF_FFFF));
    }

    #[test]
    fn test_error_message() {
        let err = is_valid_ttl(0x01).unwrap_err();
        assert_eq!(err.to_string(), "invalid argument: TTL 0x01 is prohibited");
    }
}
