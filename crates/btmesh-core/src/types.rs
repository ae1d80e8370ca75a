//! Newtype wrappers for protocol byte-array fields.

use std::fmt;

use crate::error::CodecError;

/// A 16-bit mesh address in its 2-byte big-endian wire form.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
#[must_use]
pub struct AddressArray([u8; 2]);

impl AddressArray {
    pub const fn new(bytes: [u8; 2]) -> Self {
        Self(bytes)
    }

    pub const fn from_address(address: u16) -> Self {
        Self(address.to_be_bytes())
    }

    pub const fn address(&self) -> u16 {
        u16::from_be_bytes(self.0)
    }

    pub const fn as_bytes(&self) -> &[u8; 2] {
        &self.0
    }
}

impl From<u16> for AddressArray {
    fn from(address: u16) -> Self {
        Self::from_address(address)
    }
}

impl AsRef<[u8]> for AddressArray {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl TryFrom<&[u8]> for AddressArray {
    type Error = CodecError;

    fn try_from(bytes: &[u8]) -> Result<Self, Self::Error> {
        let arr: [u8; 2] = bytes.try_into().map_err(|_| CodecError::InvalidLength {
            expected: 2,
            actual: bytes.len(),
        })?;
        Ok(Self(arr))
    }
}

impl fmt::Display for AddressArray {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02X}{:02X}", self.0[0], self.0[1])
    }
}

impl fmt::Debug for AddressArray {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "AddressArray(0x{:02X}{:02X})", self.0[0], self.0[1])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_address_array_is_big_endian() {
        let a = AddressArray::from_address(0x1234);
        assert_eq!(a.as_bytes(), &[0x12, 0x34]);
        assert_eq!(a.address(), 0x1234);
        assert_eq!(AddressArray::new([0x12, 0x34]), a);
    }

    #[test]
    fn test_address_array_try_from_slice() {
        let a = AddressArray::try_from(&[0xC0, 0x01][..]).unwrap();
        assert_eq!(a.address(), 0xC001);
        assert_eq!(
            AddressArray::try_from(&[0x01][..]),
            Err(CodecError::InvalidLength {
                expected: 2,
                actual: 1
            })
        );
        assert!(AddressArray::try_from(&[0x01, 0x02, 0x03][..]).is_err());
    }

    #[test]
    fn test_address_array_display() {
        assert_eq!(AddressArray::from_address(0x0a0b).to_string(), "0A0B");
        assert_eq!(
            format!("{:?}", AddressArray::from_address(0xFFFF)),
            "AddressArray(0xFFFF)"
        );
    }
}
