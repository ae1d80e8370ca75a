//! Test vector types for addresses.json
//!
//! Virtual address derivation, address classification and access-layer
//! opcode encodings.

use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct VirtualAddressVector {
    pub description: String,
    pub label_uuid: String,
    pub address: String,
}

#[derive(Debug, Deserialize)]
pub struct ClassificationVector {
    pub address: String,
    /// One of `unassigned`, `unicast`, `virtual`, `group`, `rfu`,
    /// `all_proxies`, `all_friends`, `all_relays`, `all_nodes`.
    pub address_type: String,
}

#[derive(Debug, Deserialize)]
pub struct OpcodeVector {
    pub description: String,
    pub opcode: u64,
    pub encoded: String,
}

#[derive(Debug, Deserialize)]
pub struct AddressesVectors {
    pub description: String,
    pub source: String,
    pub virtual_addresses: Vec<VirtualAddressVector>,
    pub classification_vectors: Vec<ClassificationVector>,
    pub opcode_vectors: Vec<OpcodeVector>,
}

pub fn load() -> AddressesVectors {
    let json = include_str!("../../../.test-vectors/addresses.json");
    serde_json::from_str(json).expect("Failed to deserialize addresses.json")
}
