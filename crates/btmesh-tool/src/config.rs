//! TOML configuration describing a mesh network's key material.
//!
//! ```toml
//! [logging]
//! level = "debug"
//!
//! [network]
//! net_key = "7dd7364cd842ad18c17c2b820c84c3d6"
//! iv_index = 0x12345678
//! flags = 0
//!
//! [[app_keys]]
//! key = "63964771734fbd76e3b40519d1d94a48"
//! index = 0x456
//!
//! [[labels]]
//! uuid = "0073e7e4-d8b9-440f-af84-15df4c56c0e1"
//! ```

use std::path::Path;

use serde::Deserialize;
use uuid::Uuid;

use btmesh_core::codec::to_byte_array_exact;
use btmesh_core::validation::{is_valid_iv_index, is_valid_key_index};

use crate::error::ToolError;

/// Top-level tool configuration loaded from a TOML file.
#[derive(Debug, Default, Deserialize)]
pub struct ToolConfig {
    #[serde(default)]
    pub logging: LoggingSection,
    pub network: Option<NetworkSection>,
    #[serde(default)]
    pub app_keys: Vec<AppKeyEntry>,
    #[serde(default)]
    pub labels: Vec<LabelEntry>,
}

impl ToolConfig {
    /// Load configuration from a TOML file.
    pub fn load(path: &Path) -> Result<Self, ToolError> {
        let content = std::fs::read_to_string(path)?;
        Self::parse(&content)
    }

    /// Parse configuration from a TOML string.
    pub fn parse(s: &str) -> Result<Self, ToolError> {
        toml::from_str(s).map_err(|e| ToolError::Config(format!("failed to parse config: {e}")))
    }

    /// The `[network]` section, which subnet commands require.
    pub fn require_network(&self) -> Result<&NetworkSection, ToolError> {
        self.network
            .as_ref()
            .ok_or_else(|| ToolError::Config("missing [network] section".into()))
    }

    /// All configured label UUIDs, in file order.
    pub fn label_uuids(&self) -> Result<Vec<Uuid>, ToolError> {
        self.labels.iter().map(LabelEntry::uuid).collect()
    }
}

/// The `[logging]` section.
#[derive(Debug, Deserialize)]
pub struct LoggingSection {
    #[serde(default = "default_log_level")]
    pub level: String,
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for LoggingSection {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

/// The `[network]` section.
#[derive(Debug, Deserialize)]
pub struct NetworkSection {
    /// NetKey as 32 hex digits.
    pub net_key: String,
    #[serde(default)]
    pub iv_index: u64,
    #[serde(default)]
    pub flags: u8,
    /// Overrides the network ID normally derived from the NetKey.
    pub network_id: Option<String>,
}

impl NetworkSection {
    pub fn net_key(&self) -> Result<[u8; 16], ToolError> {
        to_byte_array_exact(&self.net_key)
            .map_err(|e| ToolError::Config(format!("net_key: {e}")))
    }

    pub fn iv_index(&self) -> Result<u32, ToolError> {
        is_valid_iv_index(self.iv_index)?;
        u32::try_from(self.iv_index)
            .map_err(|_| ToolError::Config(format!("iv_index {} exceeds 32 bits", self.iv_index)))
    }

    pub fn network_id(&self) -> Result<Option<[u8; 8]>, ToolError> {
        self.network_id
            .as_deref()
            .map(|id| {
                to_byte_array_exact(id).map_err(|e| ToolError::Config(format!("network_id: {e}")))
            })
            .transpose()
    }
}

/// A `[[app_keys]]` entry.
#[derive(Debug, Clone, Deserialize)]
pub struct AppKeyEntry {
    /// AppKey as 32 hex digits.
    pub key: String,
    #[serde(default)]
    pub index: u16,
}

impl AppKeyEntry {
    pub fn key(&self) -> Result<[u8; 16], ToolError> {
        to_byte_array_exact(&self.key).map_err(|e| ToolError::Config(format!("app key: {e}")))
    }

    pub fn index(&self) -> Result<u16, ToolError> {
        if is_valid_key_index(u32::from(self.index)) {
            return Err(ToolError::Config(format!(
                "app key index 0x{:X} exceeds 12 bits",
                self.index
            )));
        }
        Ok(self.index)
    }
}

/// A `[[labels]]` entry naming a virtual address label UUID.
#[derive(Debug, Clone, Deserialize)]
pub struct LabelEntry {
    pub uuid: String,
}

impl LabelEntry {
    pub fn uuid(&self) -> Result<Uuid, ToolError> {
        Uuid::parse_str(&self.uuid)
            .map_err(|e| ToolError::Config(format!("label uuid {:?}: {e}", self.uuid)))
    }
}
