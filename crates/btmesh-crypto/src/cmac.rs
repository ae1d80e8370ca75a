//! AES-CMAC message authentication (RFC 4493) and the mesh salt function.
//!
//! Every mesh key derivation is a chain of AES-CMAC invocations. The salt
//! generation function `s1(M)` is AES-CMAC keyed with sixteen zero bytes.

use aes::Aes128;
use cmac::{Cmac, Mac};

type AesCmac = Cmac<Aes128>;

/// The all-zero key used by the salt generation function.
const ZERO_KEY: [u8; 16] = [0u8; 16];

/// Compute AES-CMAC of `data` under the 128-bit `key`.
#[must_use]
pub fn calculate_cmac(data: &[u8], key: &[u8; 16]) -> [u8; 16] {
    let mut mac =
        <AesCmac as Mac>::new_from_slice(key).expect("AES-CMAC accepts 16-byte keys");
    mac.update(data);
    mac.finalize().into_bytes().into()
}

/// Compute AES-CMAC of `data` under a key given as a slice.
///
/// # Errors
///
/// Returns [`CryptoError::InvalidKeyLength`](crate::CryptoError::InvalidKeyLength)
/// if `key` is not 16 bytes.
pub fn calculate_cmac_with_slice(data: &[u8], key: &[u8]) -> Result<[u8; 16], crate::CryptoError> {
    let key: &[u8; 16] = key
        .try_into()
        .map_err(|_| crate::CryptoError::InvalidKeyLength {
            expected: 16,
            actual: key.len(),
        })?;
    Ok(calculate_cmac(data, key))
}

/// Verify that the leading `tag.len()` bytes of the AES-CMAC of `data` under
/// `key` match `tag`.
///
/// Truncated tags are how mesh authenticates beacons (first 8 bytes). The
/// comparison is constant time.
///
/// # Errors
///
/// Returns [`CryptoError::AuthenticationFailure`](crate::CryptoError::AuthenticationFailure)
/// on mismatch or when `tag` is empty or longer than 16 bytes.
pub fn verify_cmac_truncated(
    data: &[u8],
    key: &[u8; 16],
    tag: &[u8],
) -> Result<(), crate::CryptoError> {
    let mut mac =
        <AesCmac as Mac>::new_from_slice(key).expect("AES-CMAC accepts 16-byte keys");
    mac.update(data);
    mac.verify_truncated_left(tag)
        .map_err(|_| crate::CryptoError::AuthenticationFailure)
}

/// Salt generation function `s1`: AES-CMAC of `data` under the zero key.
#[must_use]
pub fn calculate_salt(data: &[u8]) -> [u8; 16] {
    calculate_cmac(data, &ZERO_KEY)
}
