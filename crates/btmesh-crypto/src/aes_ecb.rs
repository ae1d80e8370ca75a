//! Single-block AES-128 encryption.
//!
//! This is the security function `e` of the Mesh Profile: one AES-128
//! block encrypted under a 128-bit key, with no chaining or padding.

use aes::Aes128;
use aes::cipher::generic_array::GenericArray;
use aes::cipher::{BlockEncrypt, KeyInit};

/// Encrypt a single 16-byte `block` with AES-128 under `key`.
#[must_use]
pub fn aes128_ecb_encrypt(key: &[u8; 16], block: &[u8; 16]) -> [u8; 16] {
    let cipher = Aes128::new(GenericArray::from_slice(key));
    let mut out = GenericArray::clone_from_slice(block);
    cipher.encrypt_block(&mut out);
    out.into()
}
