//! Mesh address ranges and fixed group addresses.

pub const UNASSIGNED_ADDRESS: u16 = 0x0000;

pub const START_UNICAST_ADDRESS: u16 = 0x0001;
pub const END_UNICAST_ADDRESS: u16 = 0x7FFF;

pub const START_VIRTUAL_ADDRESS: u16 = 0x8000;
pub const END_VIRTUAL_ADDRESS: u16 = 0xBFFF;

pub const START_GROUP_ADDRESS: u16 = 0xC000;
pub const END_GROUP_ADDRESS: u16 = 0xFEFF;

/// Reserved for future use; not a valid destination of any kind.
pub const START_RFU_ADDRESS: u16 = 0xFF00;
pub const END_RFU_ADDRESS: u16 = 0xFFFB;

pub const ALL_PROXIES_ADDRESS: u16 = 0xFFFC;
pub const ALL_FRIENDS_ADDRESS: u16 = 0xFFFD;
pub const ALL_RELAYS_ADDRESS: u16 = 0xFFFE;
pub const ALL_NODES_ADDRESS: u16 = 0xFFFF;

/// Largest value representable by the 16-bit address field.
pub const MAX_ADDRESS: u32 = 0xFFFF;

/// Largest 24-bit sequence number.
pub const MAX_SEQUENCE_NUMBER: u32 = 0xFF_FFFF;

/// Largest 12-bit NetKey or AppKey index.
pub const MAX_KEY_INDEX: u16 = 0x0FFF;

/// Largest TTL value; `0x01` is prohibited.
pub const MAX_TTL: u8 = 0x7F;
