//! Addressing, codecs and node configuration helpers for Bluetooth Mesh.
//!
//! This crate sits on top of [`btmesh_crypto`] and provides the mesh address
//! classifier and virtual address derivation, hex/integer/opcode codecs,
//! proxy filter state, provisioning OOB descriptors and heartbeat helpers.

pub mod address;
pub mod codec;
pub mod constants;
pub mod error;
pub mod heartbeat;
pub mod oob;
pub mod opcode;
pub mod proxy_filter;
pub mod types;
pub mod validation;

pub use address::AddressType;
pub use error::{CodecError, OobError, ValidationError};
pub use heartbeat::{Heartbeat, HeartbeatFeatures, HeartbeatPublication, HeartbeatSubscription};
pub use oob::{
    AlgorithmType, AuthInput, AuthenticationOobMethod, InputOobAction, OutputOobAction,
    StaticOobType,
};
pub use proxy_filter::{ProxyFilter, ProxyFilterType};
pub use types::AddressArray;
