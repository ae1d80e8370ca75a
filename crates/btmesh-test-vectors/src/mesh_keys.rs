//! Test vector types for mesh_keys.json
//!
//! Salt generation, k1-k4 derivation and per-key derived material.

use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct SaltVector {
    pub description: String,
    pub input_ascii: String,
    pub salt: String,
}

#[derive(Debug, Deserialize)]
pub struct K1Vector {
    pub description: String,
    pub n: String,
    pub salt: String,
    pub p: String,
    pub t: String,
}

#[derive(Debug, Deserialize)]
pub struct K2Vector {
    pub description: String,
    pub n: String,
    pub p: String,
    pub nid: u64,
    pub encryption_key: String,
    pub privacy_key: String,
}

#[derive(Debug, Deserialize)]
pub struct K3Vector {
    pub description: String,
    pub n: String,
    pub result: String,
}

#[derive(Debug, Deserialize)]
pub struct K4Vector {
    pub description: String,
    pub n: String,
    pub result: u64,
}

#[derive(Debug, Deserialize)]
pub struct NetworkKeyVector {
    pub description: String,
    pub net_key: String,
    pub nid: u64,
    pub encryption_key: String,
    pub privacy_key: String,
    pub network_id: String,
    pub identity_key: String,
    pub beacon_key: String,
}

#[derive(Debug, Deserialize)]
pub struct AppKeyVector {
    pub description: String,
    pub app_key: String,
    pub aid: u64,
}

#[derive(Debug, Deserialize)]
pub struct MeshKeysVectors {
    pub description: String,
    pub source: String,
    pub salt_vectors: Vec<SaltVector>,
    pub k1_vectors: Vec<K1Vector>,
    pub k2_vectors: Vec<K2Vector>,
    pub k3_vectors: Vec<K3Vector>,
    pub k4_vectors: Vec<K4Vector>,
    pub network_keys: Vec<NetworkKeyVector>,
    pub app_keys: Vec<AppKeyVector>,
}

pub fn load() -> MeshKeysVectors {
    let json = include_str!("../../../.test-vectors/mesh_keys.json");
    serde_json::from_str(json).expect("Failed to deserialize mesh_keys.json")
}
