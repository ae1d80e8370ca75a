//! Mesh key derivation functions k1 through k4.
//!
//! All four functions are AES-CMAC chains keyed by a salt produced with
//! [`calculate_salt`]:
//!
//! ```text
//! k1(N, SALT, P) = CMAC(CMAC(SALT, N), P)
//! k2(N, P)       = (NID, EncryptionKey, PrivacyKey)   T = CMAC(s1("smk2"), N)
//!     T1 = CMAC(T, P || 0x01)         NID = T1[15] & 0x7F
//!     T2 = CMAC(T, T1 || P || 0x02)   EncryptionKey
//!     T3 = CMAC(T, T2 || P || 0x03)   PrivacyKey
//! k3(N)          = CMAC(CMAC(s1("smk3"), N), "id64" || 0x01)[8..16]
//! k4(N)          = CMAC(CMAC(s1("smk4"), N), "id6" || 0x01)[15] & 0x3F
//! ```
//!
//! The IdentityKey and BeaconKey of a subnet are k1 outputs with the fixed
//! salts `s1("nkik")` and `s1("nkbk")` and `P = "id128" || 0x01`.

use alloc::vec::Vec;
use core::fmt;

use crate::CryptoError;
use crate::cmac::{calculate_cmac, calculate_salt};

const SMK2: &[u8] = b"smk2";
const SMK3: &[u8] = b"smk3";
const SMK4: &[u8] = b"smk4";
const NKIK: &[u8] = b"nkik";
const NKBK: &[u8] = b"nkbk";

/// `"id128" || 0x01`
const ID128: &[u8] = b"id128\x01";
/// `"id64" || 0x01`
const ID64: &[u8] = b"id64\x01";
/// `"id6" || 0x01`
const ID6: &[u8] = b"id6\x01";

/// Key material produced by k2: the 7-bit NID and the network encryption and
/// privacy keys of a subnet.
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct K2Output {
    nid: u8,
    encryption_key: [u8; 16],
    privacy_key: [u8; 16],
}

impl K2Output {
    /// The NID, always in `0x00..=0x7F`.
    pub fn nid(&self) -> u8 {
        self.nid
    }

    pub fn encryption_key(&self) -> &[u8; 16] {
        &self.encryption_key
    }

    pub fn privacy_key(&self) -> &[u8; 16] {
        &self.privacy_key
    }
}

impl fmt::Debug for K2Output {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "K2Output(nid=0x{:02x}, ..)", self.nid)
    }
}

/// k1: derive a 128-bit key from `n`, `salt` and `p`.
#[must_use]
pub fn calculate_k1(n: &[u8], salt: &[u8; 16], p: &[u8]) -> [u8; 16] {
    let t = calculate_cmac(n, salt);
    calculate_cmac(p, &t)
}

/// k2: derive the NID, EncryptionKey and PrivacyKey from a NetKey `n`.
///
/// `p` is `0x00` for master security credentials and the friendship
/// parameters for friendship credentials.
#[must_use]
pub fn calculate_k2(n: &[u8; 16], p: &[u8]) -> K2Output {
    let salt = calculate_salt(SMK2);
    let t = calculate_cmac(n, &salt);

    let mut input = Vec::with_capacity(16 + p.len() + 1);
    input.extend_from_slice(p);
    input.push(0x01);
    let t1 = calculate_cmac(&input, &t);

    input.clear();
    input.extend_from_slice(&t1);
    input.extend_from_slice(p);
    input.push(0x02);
    let t2 = calculate_cmac(&input, &t);

    input.clear();
    input.extend_from_slice(&t2);
    input.extend_from_slice(p);
    input.push(0x03);
    let t3 = calculate_cmac(&input, &t);

    K2Output {
        nid: t1[15] & 0x7F,
        encryption_key: t2,
        privacy_key: t3,
    }
}

/// k3: derive the 64-bit Network ID from a NetKey `n`.
#[must_use]
pub fn calculate_k3(n: &[u8; 16]) -> [u8; 8] {
    let salt = calculate_salt(SMK3);
    let t = calculate_cmac(n, &salt);
    let result = calculate_cmac(ID64, &t);

    let mut out = [0u8; 8];
    out.copy_from_slice(&result[8..]);
    out
}

/// k4: derive the 6-bit AID from an AppKey `n`.
///
/// # Errors
///
/// Returns [`CryptoError::InvalidKeyLength`] if `n` is not exactly 16 bytes.
pub fn calculate_k4(n: &[u8]) -> Result<u8, CryptoError> {
    if n.len() != 16 {
        return Err(CryptoError::InvalidKeyLength {
            expected: 16,
            actual: n.len(),
        });
    }
    let salt = calculate_salt(SMK4);
    let t = calculate_cmac(n, &salt);
    let result = calculate_cmac(ID6, &t);
    Ok(result[15] & 0x3F)
}

/// Derive the IdentityKey used for node identity advertising.
#[must_use]
pub fn calculate_identity_key(net_key: &[u8; 16]) -> [u8; 16] {
    calculate_k1(net_key, &calculate_salt(NKIK), ID128)
}

/// Derive the BeaconKey used to authenticate secure network beacons.
#[must_use]
pub fn calculate_beacon_key(net_key: &[u8; 16]) -> [u8; 16] {
    calculate_k1(net_key, &calculate_salt(NKBK), ID128)
}

/// Network ID of a subnet; an alias for [`calculate_k3`].
#[must_use]
pub fn calculate_network_id(net_key: &[u8; 16]) -> [u8; 8] {
    calculate_k3(net_key)
}

/// Application key identifier; k4 over a 16-byte AppKey.
#[must_use]
pub fn calculate_aid(app_key: &[u8; 16]) -> u8 {
    let salt = calculate_salt(SMK4);
    let t = calculate_cmac(app_key, &salt);
    calculate_cmac(ID6, &t)[15] & 0x3F
}
