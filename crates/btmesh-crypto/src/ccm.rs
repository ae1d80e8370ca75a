//! AES-CCM authenticated encryption with mesh nonces.
//!
//! Mesh uses AES-128 in CCM mode with a 13-byte nonce for network, transport
//! and provisioning PDUs. The MIC is appended to the ciphertext, so the output
//! of [`encrypt_ccm`] is `data.len() + mic_size` bytes. The network layer uses
//! a 32-bit MIC for access messages and a 64-bit MIC for control messages; the
//! upper transport layer picks its MIC size from the `SZMIC` bit.

use alloc::vec::Vec;

use aes::Aes128;
use ccm::aead::consts::{U4, U6, U8, U10, U12, U13, U14, U16};
use ccm::aead::generic_array::{ArrayLength, GenericArray};
use ccm::aead::{AeadInPlace, KeyInit};
use ccm::{Ccm, TagSize};

use crate::{CryptoError, NONCE_LENGTH};

/// MIC size for access messages and unsegmented control messages with `SZMIC = 0`.
pub const MIC_SIZE_32: usize = 4;

/// MIC size for control messages and segmented access messages with `SZMIC = 1`.
pub const MIC_SIZE_64: usize = 8;

/// Encrypt `data` with AES-CCM and append a `mic_size`-byte MIC.
///
/// `additional_data` is authenticated but not encrypted; it is used for
/// virtual-address label UUIDs at the upper transport layer.
///
/// # Errors
///
/// Returns [`CryptoError::InvalidMicSize`] if `mic_size` is not one of 4, 6, 8,
/// 10, 12, 14 or 16, and [`CryptoError::InvalidLength`] if `data` exceeds the
/// CCM length limit for a 13-byte nonce.
pub fn encrypt_ccm(
    data: &[u8],
    key: &[u8; 16],
    nonce: &[u8; NONCE_LENGTH],
    additional_data: Option<&[u8]>,
    mic_size: usize,
) -> Result<Vec<u8>, CryptoError> {
    let aad = additional_data.unwrap_or(&[]);
    match mic_size {
        4 => seal::<U4>(data, key, nonce, aad),
        6 => seal::<U6>(data, key, nonce, aad),
        8 => seal::<U8>(data, key, nonce, aad),
        10 => seal::<U10>(data, key, nonce, aad),
        12 => seal::<U12>(data, key, nonce, aad),
        14 => seal::<U14>(data, key, nonce, aad),
        16 => seal::<U16>(data, key, nonce, aad),
        other => Err(CryptoError::InvalidMicSize(other)),
    }
}

/// Verify and decrypt `data` (ciphertext followed by a `mic_size`-byte MIC).
///
/// # Errors
///
/// Returns [`CryptoError::AuthenticationFailure`] if the MIC does not verify,
/// which is the expected outcome for PDUs encrypted under a different key.
/// Returns [`CryptoError::InvalidMicSize`] for unsupported MIC sizes and
/// [`CryptoError::InvalidLength`] if `data` is shorter than the MIC.
pub fn decrypt_ccm(
    data: &[u8],
    key: &[u8; 16],
    nonce: &[u8; NONCE_LENGTH],
    additional_data: Option<&[u8]>,
    mic_size: usize,
) -> Result<Vec<u8>, CryptoError> {
    let aad = additional_data.unwrap_or(&[]);
    match mic_size {
        4 => open::<U4>(data, key, nonce, aad, mic_size),
        6 => open::<U6>(data, key, nonce, aad, mic_size),
        8 => open::<U8>(data, key, nonce, aad, mic_size),
        10 => open::<U10>(data, key, nonce, aad, mic_size),
        12 => open::<U12>(data, key, nonce, aad, mic_size),
        14 => open::<U14>(data, key, nonce, aad, mic_size),
        16 => open::<U16>(data, key, nonce, aad, mic_size),
        other => Err(CryptoError::InvalidMicSize(other)),
    }
}

/// NetMIC length for the network PDU `CTL` bit.
pub fn net_mic_length(ctl: u8) -> usize {
    if ctl == 0 { MIC_SIZE_32 } else { MIC_SIZE_64 }
}

/// TransMIC length for the lower transport `ASZMIC` bit.
pub fn trans_mic_length(aszmic: u8) -> usize {
    if aszmic == 0 { MIC_SIZE_32 } else { MIC_SIZE_64 }
}

fn seal<M>(
    data: &[u8],
    key: &[u8; 16],
    nonce: &[u8; NONCE_LENGTH],
    aad: &[u8],
) -> Result<Vec<u8>, CryptoError>
where
    M: ArrayLength<u8> + TagSize,
{
    let cipher = Ccm::<Aes128, M, U13>::new(GenericArray::from_slice(key));
    let mut buffer = Vec::with_capacity(data.len() + 16);
    buffer.extend_from_slice(data);
    let tag = cipher
        .encrypt_in_place_detached(GenericArray::from_slice(nonce), aad, &mut buffer)
        .map_err(|_| CryptoError::InvalidLength {
            reason: "payload exceeds CCM length limit",
        })?;
    buffer.extend_from_slice(&tag);
    Ok(buffer)
}

fn open<M>(
    data: &[u8],
    key: &[u8; 16],
    nonce: &[u8; NONCE_LENGTH],
    aad: &[u8],
    mic_size: usize,
) -> Result<Vec<u8>, CryptoError>
where
    M: ArrayLength<u8> + TagSize,
{
    if data.len() < mic_size {
        return Err(CryptoError::InvalidLength {
            reason: "ciphertext shorter than MIC",
        });
    }
    let (ciphertext, tag) = data.split_at(data.len() - mic_size);

    let cipher = Ccm::<Aes128, M, U13>::new(GenericArray::from_slice(key));
    let mut buffer = ciphertext.to_vec();
    cipher
        .decrypt_in_place_detached(
            GenericArray::from_slice(nonce),
            aad,
            &mut buffer,
            GenericArray::from_slice(tag),
        )
        .map_err(|_| CryptoError::AuthenticationFailure)?;
    Ok(buffer)
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(128))]

        #[test]
        fn ccm_roundtrip(
            key in any::<[u8; 16]>(),
            nonce in any::<[u8; 13]>(),
            plaintext in proptest::collection::vec(any::<u8>(), 0..256),
            mic_size in prop_oneof![Just(4usize), Just(8usize)],
        ) {
            let ct = encrypt_ccm(&plaintext, &key, &nonce, None, mic_size).unwrap();
            let recovered = decrypt_ccm(&ct, &key, &nonce, None, mic_size).unwrap();
            prop_assert_eq!(recovered, plaintext);
        }

        #[test]
        fn ccm_tamper_detected(
            key in any::<[u8; 16]>(),
            nonce in any::<[u8; 13]>(),
            plaintext in proptest::collection::vec(any::<u8>(), 1..128),
            mic_size in prop_oneof![Just(4usize), Just(8usize)],
            index in any::<prop::sample::Index>(),
            flip in 1u8..=255,
        ) {
            let mut ct = encrypt_ccm(&plaintext, &key, &nonce, None, mic_size).unwrap();
            let i = index.index(ct.len());
            ct[i] ^= flip;
            prop_assert_eq!(
                decrypt_ccm(&ct, &key, &nonce, None, mic_size),
                Err(CryptoError::AuthenticationFailure)
            );
        }
    }
}
