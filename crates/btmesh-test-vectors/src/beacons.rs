//! Test vector types for beacons.json

use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct SecureNetworkBeaconVector {
    pub description: String,
    pub net_key: String,
    pub flags: u64,
    pub network_id: String,
    pub iv_index: u64,
    pub authentication_value: String,
    pub beacon: String,
}

#[derive(Debug, Deserialize)]
pub struct BeaconsVectors {
    pub description: String,
    pub source: String,
    pub secure_network_beacons: Vec<SecureNetworkBeaconVector>,
}

pub fn load() -> BeaconsVectors {
    let json = include_str!("../../../.test-vectors/beacons.json");
    serde_json::from_str(json).expect("Failed to deserialize beacons.json")
}
