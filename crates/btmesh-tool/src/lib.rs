//! Command-line inspection of Bluetooth Mesh network material.
//!
//! This crate loads a TOML description of a subnet and prints the values a
//! provisioner or node derives from it: subnet keys, AIDs, secure network
//! beacons, virtual addresses, address classifications and opcode encodings.

pub mod config;
pub mod error;
pub mod logging;
pub mod report;

pub use config::ToolConfig;
pub use error::ToolError;
