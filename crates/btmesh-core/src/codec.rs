//! Conversions between byte buffers, hex strings and unsigned integers.
//!
//! Mesh PDUs carry addresses, sequence numbers and IV indices big-endian.
//! [`unsigned_bytes_to_int`] is the one little-endian helper; it takes its
//! bytes as a `(low, high)` pair and must not be used for PDU address fields,
//! which go through [`address_bytes_to_int`].

use uuid::Uuid;

use crate::error::CodecError;

/// Uppercase hex of `length` bytes of `bytes` starting at `start`.
///
/// Returns an empty string when `bytes` or `length` is empty or when the
/// requested range falls outside `bytes`.
pub fn bytes_to_hex(bytes: &[u8], start: usize, length: usize, add_0x_prefix: bool) -> String {
    if bytes.is_empty() || length == 0 {
        return String::new();
    }
    let Some(end) = start.checked_add(length) else {
        return String::new();
    };
    if end > bytes.len() {
        return String::new();
    }

    let hex = hex::encode_upper(&bytes[start..end]);
    if add_0x_prefix { format!("0x{hex}") } else { hex }
}

/// Uppercase hex of the whole buffer.
pub fn bytes_to_hex_all(bytes: &[u8], add_0x_prefix: bool) -> String {
    bytes_to_hex(bytes, 0, bytes.len(), add_0x_prefix)
}

/// Parse an even-length hex string (either case, no prefix) into bytes.
///
/// # Errors
///
/// Returns [`CodecError::InvalidEncoding`] for odd-length input or any
/// non-hex character.
pub fn to_byte_array(hex_string: &str) -> Result<Vec<u8>, CodecError> {
    hex::decode(hex_string).map_err(|e| CodecError::InvalidEncoding(e.to_string()))
}

/// Parse a hex string that must decode to exactly `N` bytes.
pub fn to_byte_array_exact<const N: usize>(hex_string: &str) -> Result<[u8; N], CodecError> {
    let bytes = to_byte_array(hex_string)?;
    let len = bytes.len();
    bytes
        .try_into()
        .map_err(|_| CodecError::InvalidLength {
            expected: N,
            actual: len,
        })
}

pub fn unsigned_byte_to_int(b: u8) -> u32 {
    u32::from(b)
}

/// Little-endian pair decode: `b0 + b1 * 256`.
pub fn unsigned_bytes_to_int(b0: u8, b1: u8) -> u16 {
    u16::from(b0) | (u16::from(b1) << 8)
}

/// Big-endian 2-byte wire form of a mesh address.
pub fn address_int_to_bytes(address: u16) -> [u8; 2] {
    address.to_be_bytes()
}

/// Inverse of [`address_int_to_bytes`].
pub fn address_bytes_to_int(bytes: [u8; 2]) -> u16 {
    u16::from_be_bytes(bytes)
}

/// Decode a big-endian 24-bit value such as a sequence number.
///
/// # Errors
///
/// Returns [`CodecError::InvalidLength`] unless `bytes` is exactly 3 bytes.
pub fn convert_24_bits_to_int(bytes: &[u8]) -> Result<u32, CodecError> {
    match bytes {
        [b0, b1, b2] => Ok((u32::from(*b0) << 16) | (u32::from(*b1) << 8) | u32::from(*b2)),
        _ => Err(CodecError::InvalidLength {
            expected: 3,
            actual: bytes.len(),
        }),
    }
}

/// Big-endian 3-byte form of a sequence number.
///
/// # Errors
///
/// Returns [`CodecError::ValueOutOfRange`] if `sequence_number` exceeds 24 bits.
pub fn sequence_number_bytes(sequence_number: u32) -> Result<[u8; 3], CodecError> {
    if sequence_number > 0xFF_FFFF {
        return Err(CodecError::ValueOutOfRange {
            value: sequence_number,
            bits: 24,
        });
    }
    let [_, b0, b1, b2] = sequence_number.to_be_bytes();
    Ok([b0, b1, b2])
}

/// Big-endian 4-byte form of an IV index.
pub fn iv_index_bytes(iv_index: u32) -> [u8; 4] {
    iv_index.to_be_bytes()
}

/// Interpret 16 bytes as a UUID (device UUID or label UUID).
pub fn uuid_from_bytes(bytes: &[u8]) -> Result<Uuid, CodecError> {
    Uuid::from_slice(bytes).map_err(|_| CodecError::InvalidLength {
        expected: 16,
        actual: bytes.len(),
    })
}

pub fn uuid_to_bytes(uuid: &Uuid) -> [u8; 16] {
    *uuid.as_bytes()
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(256))]

        #[test]
        fn hex_roundtrip(bytes in proptest::collection::vec(any::<u8>(), 0..128)) {
            let hex = bytes_to_hex_all(&bytes, false);
            prop_assert_eq!(to_byte_array(&hex).unwrap(), bytes);
        }

        #[test]
        fn address_roundtrip(address in any::<u16>()) {
            prop_assert_eq!(address_bytes_to_int(address_int_to_bytes(address)), address);
        }

        #[test]
        fn sequence_number_roundtrip(seq in 0u32..=0xFF_FFFF) {
            let bytes = sequence_number_bytes(seq).unwrap();
            prop_assert_eq!(convert_24_bits_to_int(&bytes).unwrap(), seq);
        }
    }
}
