//! Security primitives for Bluetooth Mesh.
//!
//! This crate provides the cryptographic building blocks used by the mesh
//! network and provisioning layers: AES-CMAC and the salt/k1-k4 derivation
//! functions built on it, AES-CCM authenticated encryption with configurable
//! MIC sizes, secure network beacon construction and authentication, and the
//! node identity hash.
//!
//! All functions operate on byte arrays and are free of side effects, apart
//! from the random key generators which draw from a caller-supplied RNG.

#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;

pub mod aes_ecb;
pub mod beacon;
pub mod ccm;
pub mod cmac;
pub mod error;
pub mod identity;
pub mod kdf;
pub mod random;

pub use beacon::SecureNetworkBeacon;
pub use error::CryptoError;
pub use kdf::K2Output;

/// Size in bytes of every AES-128 key and CMAC output used by mesh.
pub const KEY_LENGTH: usize = 16;

/// Size in bytes of a mesh network, application or device nonce.
pub const NONCE_LENGTH: usize = 13;
