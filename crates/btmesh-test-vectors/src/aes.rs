//! Test vector types for aes.json
//!
//! AES-128 single block, AES-CMAC (RFC 4493) and AES-CCM (RFC 3610) vectors.

use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct EcbVector {
    pub description: String,
    pub key: String,
    pub plaintext: String,
    pub ciphertext: String,
}

#[derive(Debug, Deserialize)]
pub struct CmacVector {
    pub description: String,
    pub key: String,
    pub message: String,
    pub mac: String,
}

#[derive(Debug, Deserialize)]
pub struct CcmVector {
    pub description: String,
    pub key: String,
    pub nonce: String,
    pub additional_data: String,
    pub plaintext: String,
    pub mic_size: u64,
    pub ciphertext: String,
}

#[derive(Debug, Deserialize)]
pub struct AesVectors {
    pub description: String,
    pub source: String,
    pub ecb_vectors: Vec<EcbVector>,
    pub cmac_vectors: Vec<CmacVector>,
    pub ccm_vectors: Vec<CcmVector>,
}

pub fn load() -> AesVectors {
    let json = include_str!("../../../.test-vectors/aes.json");
    serde_json::from_str(json).expect("Failed to deserialize aes.json")
}
