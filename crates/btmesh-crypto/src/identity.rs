//! Node identity hash for proxy advertising.
//!
//! A node advertising with node identity publishes
//! `Hash = e(IdentityKey, Padding || Random || Address) mod 2^64`, where
//! `Padding` is six zero bytes. A proxy client matches it against every
//! provisioned node it knows about.

use crate::aes_ecb::aes128_ecb_encrypt;

const PADDING_LENGTH: usize = 6;

/// Compute the 8-byte node identity hash.
///
/// `src` is the node's primary unicast address, big-endian.
#[must_use]
pub fn calculate_hash(identity_key: &[u8; 16], random: &[u8; 8], src: &[u8; 2]) -> [u8; 8] {
    let mut block = [0u8; 16];
    block[PADDING_LENGTH..PADDING_LENGTH + 8].copy_from_slice(random);
    block[PADDING_LENGTH + 8..].copy_from_slice(src);

    let encrypted = aes128_ecb_encrypt(identity_key, &block);
    let mut hash = [0u8; 8];
    hash.copy_from_slice(&encrypted[8..]);
    hash
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hash_is_low_half_of_encrypted_block() {
        let identity_key = [0x84u8; 16];
        let random = [0x34, 0xAE, 0x60, 0x8F, 0xBB, 0xC1, 0xF2, 0xC6];
        let src = [0x12, 0x01];

        let mut block = [0u8; 16];
        block[6..14].copy_from_slice(&random);
        block[14..].copy_from_slice(&src);
        let expected = aes128_ecb_encrypt(&identity_key, &block);

        assert_eq!(calculate_hash(&identity_key, &random, &src), expected[8..]);
    }

    #[test]
    fn test_hash_known_answer() {
        // Mesh Profile sample data, node identity.
        let identity_key: [u8; 16] = hex::decode("84396c435ac48560b5965385253e210c")
            .unwrap()
            .try_into()
            .unwrap();
        let random: [u8; 8] = hex::decode("34ae608fbbc1f2c6").unwrap().try_into().unwrap();
        let hash = calculate_hash(&identity_key, &random, &[0x12, 0x01]);
        assert_eq!(hex::encode(hash), "00861765aefcc57b");
    }

    #[test]
    fn test_hash_depends_on_address() {
        let key = [0x01u8; 16];
        let random = [0x02u8; 8];
        assert_ne!(
            calculate_hash(&key, &random, &[0x00, 0x01]),
            calculate_hash(&key, &random, &[0x00, 0x02])
        );
    }
}
