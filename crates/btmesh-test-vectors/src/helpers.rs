//! Shared hex-decoding test helpers.
//!
//! Enable the `helpers` feature to use them.

/// Decode a hex string into a `Vec<u8>`.
pub fn hex_to_bytes(hex: &str) -> Vec<u8> {
    hex::decode(hex).expect("invalid hex")
}

/// Decode a hex string into a `[u8; 8]`.
pub fn hex_to_8(hex: &str) -> [u8; 8] {
    let bytes = hex::decode(hex).expect("invalid hex");
    bytes.try_into().expect("must be 8 bytes")
}

/// Decode a hex string into a `[u8; 13]` (a mesh nonce).
pub fn hex_to_13(hex: &str) -> [u8; 13] {
    let bytes = hex::decode(hex).expect("invalid hex");
    bytes.try_into().expect("must be 13 bytes")
}

/// Decode a hex string into a `[u8; 16]`.
pub fn hex_to_16(hex: &str) -> [u8; 16] {
    let bytes = hex::decode(hex).expect("invalid hex");
    bytes.try_into().expect("must be 16 bytes")
}

/// Decode a 4-digit hex string into a 16-bit mesh address.
pub fn hex_to_address(hex: &str) -> u16 {
    u16::from_str_radix(hex, 16).expect("invalid hex address")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hex_to_bytes_works() {
        assert_eq!(hex_to_bytes("deadbeef"), vec![0xDE, 0xAD, 0xBE, 0xEF]);
        assert_eq!(hex_to_bytes(""), Vec::<u8>::new());
    }

    #[test]
    fn hex_to_16_works() {
        let arr = hex_to_16("00112233445566778899aabbccddeeff");
        assert_eq!(arr[0], 0x00);
        assert_eq!(arr[15], 0xFF);
    }

    #[test]
    fn hex_to_13_works() {
        let arr = hex_to_13("00000003020100a0a1a2a3a4a5");
        assert_eq!(arr[3], 0x03);
        assert_eq!(arr[12], 0xA5);
    }

    #[test]
    fn hex_to_address_works() {
        assert_eq!(hex_to_address("b529"), 0xB529);
        assert_eq!(hex_to_address("0001"), 0x0001);
    }
}
