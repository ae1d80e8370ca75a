//! Test vector loading infrastructure for btmesh.
//!
//! This crate provides serde-deserializable structs for the JSON test vector
//! files under `.test-vectors/` used to validate the mesh security primitives
//! and address handling against published reference data.
//!
//! Each module corresponds to a single JSON file and provides:
//! - Typed structs matching the JSON schema
//! - A `load()` function that deserializes the embedded JSON via `include_str!`
//!
//! # Usage
//!
//! ```rust
//! let vectors = btmesh_test_vectors::aes::load();
//! for v in &vectors.cmac_vectors {
//!     let message = hex::decode(&v.message).unwrap();
//!     // ... test AES-CMAC against v.mac
//! }
//! ```

#[cfg(feature = "helpers")]
pub mod helpers;

pub mod addresses;
pub mod aes;
pub mod beacons;
pub mod mesh_keys;

pub use addresses::AddressesVectors;
pub use aes::AesVectors;
pub use beacons::BeaconsVectors;
pub use mesh_keys::MeshKeysVectors;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserialize_aes() {
        let v = aes::load();
        assert!(!v.ecb_vectors.is_empty());
        assert!(!v.cmac_vectors.is_empty());
        assert!(!v.ccm_vectors.is_empty());
    }

    #[test]
    fn deserialize_mesh_keys() {
        let v = mesh_keys::load();
        assert!(!v.salt_vectors.is_empty());
        assert!(!v.k1_vectors.is_empty());
        assert!(!v.k2_vectors.is_empty());
        assert!(!v.k3_vectors.is_empty());
        assert!(!v.k4_vectors.is_empty());
        assert!(!v.network_keys.is_empty());
        assert!(!v.app_keys.is_empty());
    }

    #[test]
    fn deserialize_beacons() {
        let v = beacons::load();
        assert!(!v.secure_network_beacons.is_empty());
    }

    #[test]
    fn deserialize_addresses() {
        let v = addresses::load();
        assert!(!v.virtual_addresses.is_empty());
        assert!(!v.classification_vectors.is_empty());
        assert!(!v.opcode_vectors.is_empty());
    }
}
