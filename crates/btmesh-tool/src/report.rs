//! Human-readable reports derived from network material.
//!
//! Each report is a plain value with a `Display` impl so the binary can print
//! it and tests can inspect the fields directly.

use std::fmt;

use uuid::Uuid;

use btmesh_core::address::{
    generate_virtual_address, get_address_type, get_label_uuid, is_address_in_range,
    is_valid_heartbeat_publication_destination, is_valid_proxy_filter_address,
    is_valid_subscription_address,
};
use btmesh_core::codec::{bytes_to_hex_all, to_byte_array};
use btmesh_core::opcode::{decode_opcode, encode_opcode};
use btmesh_core::AddressType;
use btmesh_crypto::SecureNetworkBeacon;
use btmesh_crypto::beacon::create_secure_network_beacon;
use btmesh_crypto::kdf::{
    calculate_aid, calculate_beacon_key, calculate_identity_key, calculate_k2,
    calculate_network_id,
};

use crate::config::{AppKeyEntry, NetworkSection};
use crate::error::ToolError;

/// Parse a `0x`-prefixed hex or plain decimal number.
pub fn parse_number(s: &str) -> Result<u32, ToolError> {
    let parsed = match s.strip_prefix("0x").or_else(|| s.strip_prefix("0X")) {
        Some(hex) => u32::from_str_radix(hex, 16),
        None => s.parse(),
    };
    parsed.map_err(|e| ToolError::Argument(format!("{s:?}: {e}")))
}

/// Key material derived from a NetKey.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubnetReport {
    pub nid: u8,
    pub encryption_key: [u8; 16],
    pub privacy_key: [u8; 16],
    pub network_id: [u8; 8],
    pub identity_key: [u8; 16],
    pub beacon_key: [u8; 16],
}

impl SubnetReport {
    pub fn derive(net_key: &[u8; 16]) -> Self {
        let k2 = calculate_k2(net_key, &[0x00]);
        let report = Self {
            nid: k2.nid(),
            encryption_key: *k2.encryption_key(),
            privacy_key: *k2.privacy_key(),
            network_id: calculate_network_id(net_key),
            identity_key: calculate_identity_key(net_key),
            beacon_key: calculate_beacon_key(net_key),
        };
        tracing::debug!(nid = report.nid, "report: derived subnet keys");
        report
    }
}

impl fmt::Display for SubnetReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "NID:            0x{:02X}", self.nid)?;
        writeln!(f, "EncryptionKey:  {}", bytes_to_hex_all(&self.encryption_key, false))?;
        writeln!(f, "PrivacyKey:     {}", bytes_to_hex_all(&self.privacy_key, false))?;
        writeln!(f, "NetworkID:      {}", bytes_to_hex_all(&self.network_id, false))?;
        writeln!(f, "IdentityKey:    {}", bytes_to_hex_all(&self.identity_key, false))?;
        write!(f, "BeaconKey:      {}", bytes_to_hex_all(&self.beacon_key, false))
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppKeyReport {
    pub index: u16,
    pub aid: u8,
}

impl AppKeyReport {
    pub fn derive(entry: &AppKeyEntry) -> Result<Self, ToolError> {
        let key = entry.key()?;
        Ok(Self {
            index: entry.index()?,
            aid: calculate_aid(&key),
        })
    }
}

impl fmt::Display for AppKeyReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "AppKey 0x{:03X}:   AID 0x{:02X}", self.index, self.aid)
    }
}

/// Build the secure network beacon for the configured subnet.
///
/// The network ID override, if configured, replaces the K3-derived one.
pub fn build_beacon(
    network: &NetworkSection,
    flags: Option<u8>,
    iv_index: Option<u32>,
) -> Result<SecureNetworkBeacon, ToolError> {
    let net_key = network.net_key()?;
    let network_id = match network.network_id()? {
        Some(id) => id,
        None => calculate_network_id(&net_key),
    };
    let iv_index = match iv_index {
        Some(iv) => iv,
        None => network.iv_index()?,
    };
    let flags = flags.unwrap_or(network.flags);

    let beacon = create_secure_network_beacon(&net_key, flags, &network_id, iv_index);
    beacon.authenticate(&net_key)?;
    tracing::info!(flags, iv_index, "report: built secure network beacon");
    Ok(beacon)
}

pub fn describe_beacon(beacon: &SecureNetworkBeacon) -> String {
    format!(
        "Beacon:         {}\n\
         NetworkID:      {}\n\
         IV index:       0x{:08X}\n\
         Key refresh:    {}\n\
         IV update:      {}\n\
         Auth:           {}",
        bytes_to_hex_all(beacon.as_bytes(), false),
        bytes_to_hex_all(&beacon.network_id(), false),
        beacon.iv_index(),
        beacon.is_key_refresh_active(),
        beacon.is_iv_update_active(),
        bytes_to_hex_all(&beacon.authentication_value(), false),
    )
}

/// A label UUID and its virtual address.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VirtualReport {
    pub label: Uuid,
    pub address: u16,
}

pub fn virtual_addresses(labels: &[Uuid]) -> Vec<VirtualReport> {
    labels
        .iter()
        .map(|label| VirtualReport {
            label: *label,
            address: generate_virtual_address(label),
        })
        .collect()
}

/// Look up which configured label produced `address`.
pub fn resolve_virtual_address(labels: &[Uuid], address: u16) -> Option<Uuid> {
    let label = get_label_uuid(labels, address);
    tracing::debug!(address, found = label.is_some(), "report: virtual address lookup");
    label
}

impl fmt::Display for VirtualReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "0x{:04X}  {}", self.address, self.label)
    }
}

/// Where an address may be used.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClassifyReport {
    pub address: u32,
    pub address_type: Option<AddressType>,
    /// `None` when the subscription validator rejects the address outright.
    pub subscription: Option<bool>,
    pub proxy_filter: bool,
    pub heartbeat_publication: bool,
}

pub fn classify(address: u32) -> ClassifyReport {
    ClassifyReport {
        address,
        address_type: get_address_type(address),
        subscription: is_valid_subscription_address(address).ok(),
        proxy_filter: is_valid_proxy_filter_address(address),
        heartbeat_publication: is_valid_heartbeat_publication_destination(address),
    }
}

impl fmt::Display for ClassifyReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let address_type = match self.address_type {
            Some(t) => t.to_string(),
            None if is_address_in_range(self.address) => "rfu".to_string(),
            None => "out of range".to_string(),
        };
        let subscription = match self.subscription {
            Some(true) => "yes",
            Some(false) => "no",
            None => "rejected",
        };
        writeln!(f, "Address:        0x{:04X}", self.address)?;
        writeln!(f, "Type:           {address_type}")?;
        writeln!(f, "Subscription:   {subscription}")?;
        writeln!(f, "Proxy filter:   {}", self.proxy_filter)?;
        write!(f, "Heartbeat dst:  {}", self.heartbeat_publication)
    }
}

/// Encode an opcode, or decode one given as hex.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OpcodeReport {
    pub opcode: u32,
    pub encoded: Vec<u8>,
}

pub fn encode_opcode_report(opcode: u32) -> Result<OpcodeReport, ToolError> {
    let encoded = encode_opcode(opcode)?;
    Ok(OpcodeReport { opcode, encoded })
}

pub fn decode_opcode_report(hex: &str) -> Result<OpcodeReport, ToolError> {
    let bytes = to_byte_array(hex)?;
    let (opcode, length) = decode_opcode(&bytes)?;
    Ok(OpcodeReport {
        opcode,
        encoded: bytes[..length].to_vec(),
    })
}

impl fmt::Display for OpcodeReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Opcode 0x{:X} -> {} ({} octet{})",
            self.opcode,
            bytes_to_hex_all(&self.encoded, false),
            self.encoded.len(),
            if self.encoded.len() == 1 { "" } else { "s" }
        )
    }
}
