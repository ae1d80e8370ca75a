//! Access-layer opcode encoding.
//!
//! The opcode length is carried in the two most significant bits of the
//! first octet:
//! ```text
//! 0b0xxxxxxx                      1 octet,  opcode 0x00..=0x7F
//! 0b10xxxxxx xxxxxxxx             2 octets, opcode 0x80..=0x3FFF
//! 0b11xxxxxx xxxxxxxx xxxxxxxx    3 octets, opcode 0x4000..=0x3FFFFF
//! ```
//! Vendor opcodes are 3 octets: the 6-bit opcode with `0xC0` set, followed
//! by the company identifier little-endian.

use crate::error::CodecError;

const MAX_ONE_OCTET: u32 = 0x7F;
const MAX_TWO_OCTETS: u32 = 0x3FFF;
const MAX_THREE_OCTETS: u32 = 0x3F_FFFF;

/// Encode `opcode` into its 1, 2 or 3 octet wire form.
///
/// # Errors
///
/// Returns [`CodecError::ValueOutOfRange`] for opcodes wider than 22 bits.
pub fn encode_opcode(opcode: u32) -> Result<Vec<u8>, CodecError> {
    if opcode <= MAX_ONE_OCTET {
        Ok(vec![opcode as u8])
    } else if opcode <= MAX_TWO_OCTETS {
        Ok(vec![0x80 | ((opcode >> 8) as u8 & 0x3F), opcode as u8])
    } else if opcode <= MAX_THREE_OCTETS {
        Ok(vec![
            0xC0 | ((opcode >> 16) as u8 & 0x3F),
            (opcode >> 8) as u8,
            opcode as u8,
        ])
    } else {
        Err(CodecError::ValueOutOfRange {
            value: opcode,
            bits: 22,
        })
    }
}

/// Opcode length implied by the first octet.
pub fn opcode_length(first_octet: u8) -> usize {
    match first_octet {
        0x00..=0x7F => 1,
        0x80..=0xBF => 2,
        0xC0..=0xFF => 3,
    }
}

/// Decode the opcode at the start of `bytes`.
///
/// Returns the opcode and the number of octets it occupied.
///
/// # Errors
///
/// Returns [`CodecError::InvalidLength`] if `bytes` is shorter than the length
/// announced by its first octet.
pub fn decode_opcode(bytes: &[u8]) -> Result<(u32, usize), CodecError> {
    let Some(&first) = bytes.first() else {
        return Err(CodecError::InvalidLength {
            expected: 1,
            actual: 0,
        });
    };
    let length = opcode_length(first);
    if bytes.len() < length {
        return Err(CodecError::InvalidLength {
            expected: length,
            actual: bytes.len(),
        });
    }

    let opcode = match length {
        1 => u32::from(first),
        2 => (u32::from(first & 0x3F) << 8) | u32::from(bytes[1]),
        _ => (u32::from(first & 0x3F) << 16) | (u32::from(bytes[1]) << 8) | u32::from(bytes[2]),
    };
    Ok((opcode, length))
}

/// Encode a vendor model opcode.
pub fn vendor_opcode(opcode: u8, company_id: u16) -> [u8; 3] {
    let [cid_low, cid_high] = company_id.to_le_bytes();
    [opcode | 0xC0, cid_low, cid_high]
}

/// Split a 3-octet vendor opcode into its 6-bit opcode and company identifier.
pub fn decode_vendor_opcode(bytes: &[u8]) -> Result<(u8, u16), CodecError> {
    match bytes {
        [op, cid_low, cid_high, ..] if op & 0xC0 == 0xC0 => {
            Ok((op & 0x3F, u16::from_le_bytes([*cid_low, *cid_high])))
        }
        [op, ..] if op & 0xC0 != 0xC0 => Err(CodecError::InvalidEncoding(format!(
            "0x{op:02X} is not a vendor opcode"
        ))),
        _ => Err(CodecError::InvalidLength {
            expected: 3,
            actual: bytes.len(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_opcode_vectors() {
        let vectors = btmesh_test_vectors::addresses::load();
        for v in &vectors.opcode_vectors {
            let expected = hex::decode(&v.encoded).expect("invalid hex encoding");
            let encoded = encode_opcode(v.opcode as u32).unwrap();
            assert_eq!(encoded, expected, "encode mismatch for: {}", v.description);

            let (opcode, length) = decode_opcode(&encoded).unwrap();
            assert_eq!(opcode as u64, v.opcode, "decode mismatch for: {}", v.description);
            assert_eq!(length, expected.len());
        }
    }

    #[test]
    fn test_opcode_length_boundaries() {
        assert_eq!(encode_opcode(0x7F).unwrap().len(), 1);
        assert_eq!(encode_opcode(0x80).unwrap().len(), 2);
        assert_eq!(encode_opcode(0x4000).unwrap().len(), 3);
        assert_eq!(opcode_length(0x7F), 1);
        assert_eq!(opcode_length(0x80), 2);
        assert_eq!(opcode_length(0xBF), 2);
        assert_eq!(opcode_length(0xC0), 3);
    }

    #[test]
    fn test_opcode_out_of_range() {
        assert_eq!(
            encode_opcode(0x40_0000),
            Err(CodecError::ValueOutOfRange {
                value: 0x40_0000,
                bits: 22
            })
        );
    }

    #[test]
    fn test_decode_opcode_truncated() {
        assert!(decode_opcode(&[]).is_err());
        assert_eq!(
            decode_opcode(&[0x82]),
            Err(CodecError::InvalidLength {
                expected: 2,
                actual: 1
            })
        );
        assert!(decode_opcode(&[0xC1, 0x59]).is_err());
    }

    #[test]
    fn test_decode_opcode_ignores_trailing_parameters() {
        assert_eq!(decode_opcode(&[0x82, 0x01, 0xAA, 0xBB]).unwrap(), (0x0201, 2));
    }

    #[test]
    fn test_vendor_opcode_company_id_is_little_endian() {
        assert_eq!(vendor_opcode(0x01, 0x0059), [0xC1, 0x59, 0x00]);
        assert_eq!(vendor_opcode(0x3F, 0x1234), [0xFF, 0x34, 0x12]);
        assert_eq!(decode_vendor_opcode(&[0xC1, 0x59, 0x00]).unwrap(), (0x01, 0x0059));
    }

    #[test]
    fn test_decode_vendor_opcode_errors() {
        assert!(matches!(
            decode_vendor_opcode(&[0x82, 0x01, 0x00]),
            Err(CodecError::InvalidEncoding(_))
        ));
        assert!(matches!(
            decode_vendor_opcode(&[0xC1, 0x59]),
            Err(CodecError::InvalidLength { .. })
        ));
    }
}

#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(256))]

        #[test]
        fn opcode_roundtrip(opcode in 0u32..=MAX_THREE_OCTETS) {
            let encoded = encode_opcode(opcode).unwrap();
            prop_assert_eq!(encoded.len(), opcode_length(encoded[0]));
            prop_assert_eq!(decode_opcode(&encoded).unwrap(), (opcode, encoded.len()));
        }
    }
}
