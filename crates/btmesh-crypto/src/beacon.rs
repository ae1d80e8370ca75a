//! Secure network beacon construction and authentication.
//!
//! Wire layout (22 bytes):
//! ```text
//! [0]       beacon type (0x01)
//! [1]       flags (bit 0 key refresh, bit 1 IV update)
//! [2..10]   network ID
//! [10..14]  IV index, big-endian
//! [14..22]  authentication value: CMAC(BeaconKey, flags || network ID || IV index)[0..8]
//! ```

use core::fmt;

use crate::CryptoError;
use crate::cmac::{calculate_cmac, verify_cmac_truncated};
use crate::kdf::calculate_beacon_key;

pub const SECURE_NETWORK_BEACON_TYPE: u8 = 0x01;
pub const SECURE_NETWORK_BEACON_LENGTH: usize = 22;

/// Key refresh phase 2 is in progress.
pub const FLAG_KEY_REFRESH: u8 = 0x01;
/// IV update procedure is in progress.
pub const FLAG_IV_UPDATE: u8 = 0x02;

const FLAGS_OFFSET: usize = 1;
const NETWORK_ID_OFFSET: usize = 2;
const IV_INDEX_OFFSET: usize = 10;
const AUTH_OFFSET: usize = 14;
const AUTH_LENGTH: usize = 8;

/// Compute the full 16-byte beacon authentication CMAC for a NetKey.
#[must_use]
pub fn calculate_auth_value_secure_net_beacon(
    net_key: &[u8; 16],
    flags: u8,
    network_id: &[u8; 8],
    iv_index: u32,
) -> [u8; 16] {
    let beacon_key = calculate_beacon_key(net_key);
    calculate_cmac(&auth_message(flags, network_id, iv_index), &beacon_key)
}

/// Build a secure network beacon (type `0x01`) for a NetKey.
#[must_use]
pub fn create_secure_network_beacon(
    net_key: &[u8; 16],
    flags: u8,
    network_id: &[u8; 8],
    iv_index: u32,
) -> SecureNetworkBeacon {
    calculate_secure_network_beacon(
        net_key,
        SECURE_NETWORK_BEACON_TYPE,
        flags,
        network_id,
        iv_index,
    )
}

/// Build a beacon with an arbitrary beacon type byte.
///
/// The authentication value does not cover the type byte, so this yields the
/// same authentication value as [`create_secure_network_beacon`].
#[must_use]
pub fn calculate_secure_network_beacon(
    net_key: &[u8; 16],
    beacon_type: u8,
    flags: u8,
    network_id: &[u8; 8],
    iv_index: u32,
) -> SecureNetworkBeacon {
    let auth = calculate_auth_value_secure_net_beacon(net_key, flags, network_id, iv_index);

    let mut bytes = [0u8; SECURE_NETWORK_BEACON_LENGTH];
    bytes[0] = beacon_type;
    bytes[FLAGS_OFFSET] = flags;
    bytes[NETWORK_ID_OFFSET..IV_INDEX_OFFSET].copy_from_slice(network_id);
    bytes[IV_INDEX_OFFSET..AUTH_OFFSET].copy_from_slice(&iv_index.to_be_bytes());
    bytes[AUTH_OFFSET..].copy_from_slice(&auth[..AUTH_LENGTH]);
    SecureNetworkBeacon(bytes)
}

fn auth_message(flags: u8, network_id: &[u8; 8], iv_index: u32) -> [u8; 13] {
    let mut message = [0u8; 13];
    message[0] = flags;
    message[1..9].copy_from_slice(network_id);
    message[9..].copy_from_slice(&iv_index.to_be_bytes());
    message
}

/// A 22-byte secure network beacon.
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct SecureNetworkBeacon([u8; SECURE_NETWORK_BEACON_LENGTH]);

impl SecureNetworkBeacon {
    /// Wrap received beacon bytes.
    ///
    /// Only the length is checked here; use [`Self::authenticate`] to verify
    /// the beacon against a NetKey.
    ///
    /// # Errors
    ///
    /// Returns [`CryptoError::InvalidLength`] unless `bytes` is 22 bytes long.
    pub fn parse(bytes: &[u8]) -> Result<Self, CryptoError> {
        let arr: [u8; SECURE_NETWORK_BEACON_LENGTH] =
            bytes.try_into().map_err(|_| CryptoError::InvalidLength {
                reason: "secure network beacon must be 22 bytes",
            })?;
        Ok(Self(arr))
    }

    pub fn beacon_type(&self) -> u8 {
        self.0[0]
    }

    pub fn flags(&self) -> u8 {
        self.0[FLAGS_OFFSET]
    }

    pub fn is_key_refresh_active(&self) -> bool {
        self.flags() & FLAG_KEY_REFRESH != 0
    }

    pub fn is_iv_update_active(&self) -> bool {
        self.flags() & FLAG_IV_UPDATE != 0
    }

    pub fn network_id(&self) -> [u8; 8] {
        let mut id = [0u8; 8];
        id.copy_from_slice(&self.0[NETWORK_ID_OFFSET..IV_INDEX_OFFSET]);
        id
    }

    pub fn iv_index(&self) -> u32 {
        let mut iv = [0u8; 4];
        iv.copy_from_slice(&self.0[IV_INDEX_OFFSET..AUTH_OFFSET]);
        u32::from_be_bytes(iv)
    }

    pub fn authentication_value(&self) -> [u8; AUTH_LENGTH] {
        let mut auth = [0u8; AUTH_LENGTH];
        auth.copy_from_slice(&self.0[AUTH_OFFSET..]);
        auth
    }

    /// Check the authentication value against the BeaconKey of `net_key`.
    ///
    /// # Errors
    ///
    /// Returns [`CryptoError::AuthenticationFailure`] if the beacon was not
    /// produced with `net_key` or has been modified.
    pub fn authenticate(&self, net_key: &[u8; 16]) -> Result<(), CryptoError> {
        let beacon_key = calculate_beacon_key(net_key);
        let message = auth_message(self.flags(), &self.network_id(), self.iv_index());
        verify_cmac_truncated(&message, &beacon_key, &self.0[AUTH_OFFSET..])
    }

    pub fn as_bytes(&self) -> &[u8; SECURE_NETWORK_BEACON_LENGTH] {
        &self.0
    }
}

impl AsRef<[u8]> for SecureNetworkBeacon {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl fmt::Debug for SecureNetworkBeacon {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "SecureNetworkBeacon(type=0x{:02x}, flags=0x{:02x}, iv_index=0x{:08x})",
            self.beacon_type(),
            self.flags(),
            self.iv_index()
        )
    }
}
