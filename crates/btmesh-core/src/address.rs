//! Mesh address classification and virtual address derivation.
//!
//! Addresses are 16 bits wide and partitioned by range:
//!
//! | Range             | Category            |
//! |-------------------|---------------------|
//! | `0x0000`          | unassigned          |
//! | `0x0001..=0x7FFF` | unicast             |
//! | `0x8000..=0xBFFF` | virtual             |
//! | `0xC000..=0xFEFF` | group               |
//! | `0xFF00..=0xFFFB` | reserved (RFU)      |
//! | `0xFFFC..=0xFFFF` | fixed group         |
//!
//! Predicates take `u32` so that values read from wider fields can be checked
//! without truncation; anything above `0xFFFF` is out of range and matches no
//! category.
//!
//! Most predicates return `false` for a non-matching address. The
//! subscription and heartbeat subscription validators instead return
//! [`ValidationError`] for categories that are illegal in that position.

use std::fmt;

use btmesh_crypto::cmac::{calculate_cmac, calculate_salt};
use uuid::Uuid;

use crate::constants::*;
use crate::error::ValidationError;

/// Category of an in-range, non-reserved mesh address.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AddressType {
    Unassigned,
    Unicast,
    Virtual,
    Group,
    AllProxies,
    AllFriends,
    AllRelays,
    AllNodes,
}

impl AddressType {
    /// The fixed address for the unassigned and fixed-group variants.
    ///
    /// Range categories have no single value and return `None`.
    pub fn value(self) -> Option<u16> {
        match self {
            AddressType::Unassigned => Some(UNASSIGNED_ADDRESS),
            AddressType::AllProxies => Some(ALL_PROXIES_ADDRESS),
            AddressType::AllFriends => Some(ALL_FRIENDS_ADDRESS),
            AddressType::AllRelays => Some(ALL_RELAYS_ADDRESS),
            AddressType::AllNodes => Some(ALL_NODES_ADDRESS),
            AddressType::Unicast | AddressType::Virtual | AddressType::Group => None,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            AddressType::Unassigned => "unassigned",
            AddressType::Unicast => "unicast",
            AddressType::Virtual => "virtual",
            AddressType::Group => "group",
            AddressType::AllProxies => "all_proxies",
            AddressType::AllFriends => "all_friends",
            AddressType::AllRelays => "all_relays",
            AddressType::AllNodes => "all_nodes",
        }
    }
}

impl fmt::Display for AddressType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

pub fn is_address_in_range(address: u32) -> bool {
    address <= MAX_ADDRESS
}

pub fn is_valid_unassigned_address(address: u32) -> bool {
    address == u32::from(UNASSIGNED_ADDRESS)
}

pub fn is_valid_unicast_address(address: u32) -> bool {
    (u32::from(START_UNICAST_ADDRESS)..=u32::from(END_UNICAST_ADDRESS)).contains(&address)
}

pub fn is_valid_virtual_address(address: u32) -> bool {
    (u32::from(START_VIRTUAL_ADDRESS)..=u32::from(END_VIRTUAL_ADDRESS)).contains(&address)
}

/// True for `0xC000..=0xFEFF`. Excludes the RFU range and every fixed group
/// address, including all-nodes.
pub fn is_valid_group_address(address: u32) -> bool {
    (u32::from(START_GROUP_ADDRESS)..=u32::from(END_GROUP_ADDRESS)).contains(&address)
}

pub fn is_valid_fixed_group_address(address: u32) -> bool {
    (u32::from(ALL_PROXIES_ADDRESS)..=u32::from(ALL_NODES_ADDRESS)).contains(&address)
}

pub fn is_rfu_address(address: u32) -> bool {
    (u32::from(START_RFU_ADDRESS)..=u32::from(END_RFU_ADDRESS)).contains(&address)
}

/// Check an address used as a model subscription target.
///
/// Returns `Ok(true)` for group addresses and the all-proxies, all-friends and
/// all-relays addresses, `Ok(false)` for RFU or out-of-range values.
///
/// # Errors
///
/// Unassigned, unicast, virtual and all-nodes addresses are rejected with
/// [`ValidationError::InvalidArgument`].
pub fn is_valid_subscription_address(address: u32) -> Result<bool, ValidationError> {
    if is_valid_unassigned_address(address)
        || is_valid_unicast_address(address)
        || is_valid_virtual_address(address)
        || address == u32::from(ALL_NODES_ADDRESS)
    {
        return Err(ValidationError::invalid(format!(
            "0x{address:04X} cannot be used as a subscription address"
        )));
    }
    Ok(is_valid_group_address(address) || is_valid_fixed_group_address(address))
}

/// Addresses a proxy client may place in its filter: unicast, virtual, group
/// and fixed group.
pub fn is_valid_proxy_filter_address(address: u32) -> bool {
    is_valid_unicast_address(address)
        || is_valid_virtual_address(address)
        || ((u32::from(START_GROUP_ADDRESS)..=MAX_ADDRESS).contains(&address)
            && !is_rfu_address(address))
}

/// Classify `address`. Returns `None` for RFU and out-of-range values.
pub fn get_address_type(address: u32) -> Option<AddressType> {
    if !is_address_in_range(address) {
        return None;
    }
    let address_type = match address as u16 {
        UNASSIGNED_ADDRESS => AddressType::Unassigned,
        START_UNICAST_ADDRESS..=END_UNICAST_ADDRESS => AddressType::Unicast,
        START_VIRTUAL_ADDRESS..=END_VIRTUAL_ADDRESS => AddressType::Virtual,
        START_GROUP_ADDRESS..=END_GROUP_ADDRESS => AddressType::Group,
        START_RFU_ADDRESS..=END_RFU_ADDRESS => return None,
        ALL_PROXIES_ADDRESS => AddressType::AllProxies,
        ALL_FRIENDS_ADDRESS => AddressType::AllFriends,
        ALL_RELAYS_ADDRESS => AddressType::AllRelays,
        ALL_NODES_ADDRESS => AddressType::AllNodes,
    };
    Some(address_type)
}

/// Derive the virtual address for a label UUID.
///
/// The hash is the low 14 bits of `AES-CMAC(s1("vtad"), label_uuid)`, tagged
/// with the virtual address prefix `0b10`.
pub fn generate_virtual_address(label_uuid: &Uuid) -> u16 {
    let salt = calculate_salt(b"vtad");
    let digest = calculate_cmac(label_uuid.as_bytes(), &salt);
    let hash = u32::from_be_bytes([digest[12], digest[13], digest[14], digest[15]]);
    0x8000 | (hash & 0x3FFF) as u16
}

/// Find the label UUID among `candidates` that hashes to `address`.
///
/// Hashes can collide, so the first match in `candidates` order wins.
pub fn get_label_uuid(candidates: &[Uuid], address: u16) -> Option<Uuid> {
    candidates
        .iter()
        .find(|uuid| generate_virtual_address(uuid) == address)
        .copied()
}

/// Heartbeat publications may target unassigned, unicast, group or fixed
/// group addresses.
pub fn is_valid_heartbeat_publication_destination(address: u32) -> bool {
    is_valid_unassigned_address(address)
        || is_valid_unicast_address(address)
        || is_valid_group_address(address)
        || is_valid_fixed_group_address(address)
}

/// # Errors
///
/// Anything other than an unassigned or unicast address is rejected.
pub fn is_valid_heartbeat_subscription_source(address: u32) -> Result<bool, ValidationError> {
    if is_valid_unassigned_address(address) || is_valid_unicast_address(address) {
        Ok(true)
    } else {
        Err(ValidationError::invalid(format!(
            "heartbeat subscription source must be unassigned or unicast, got 0x{address:04X}"
        )))
    }
}

/// # Errors
///
/// Anything other than an unassigned, unicast or group address is rejected.
pub fn is_valid_heartbeat_subscription_destination(address: u32) -> Result<bool, ValidationError> {
    if is_valid_unassigned_address(address)
        || is_valid_unicast_address(address)
        || is_valid_group_address(address)
    {
        Ok(true)
    } else {
        Err(ValidationError::invalid(format!(
            "heartbeat subscription destination must be unassigned, unicast or group, \
             got 0x{address:04X}"
        )))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use btmesh_test_vectors::helpers::hex_to_address;

    #[test]
    fn test_classification_vectors() {
        let vectors = btmesh_test_vectors::addresses::load();
        for v in &vectors.classification_vectors {
            let address = u32::from(hex_to_address(&v.address));
            let actual = get_address_type(address).map(AddressType::name);
            let expected = (v.address_type != "rfu").then_some(v.address_type.as_str());
            assert_eq!(actual, expected, "classification mismatch for {}", v.address);
        }
    }

    #[test]
    fn test_virtual_address_vectors() {
        let vectors = btmesh_test_vectors::addresses::load();
        for v in &vectors.virtual_addresses {
            let uuid = Uuid::parse_str(&v.label_uuid).unwrap();
            assert_eq!(
                generate_virtual_address(&uuid),
                hex_to_address(&v.address),
                "virtual address mismatch for: {}",
                v.description
            );
        }
    }

    #[test]
    fn test_get_label_uuid() {
        let vectors = btmesh_test_vectors::addresses::load();
        let uuids: Vec<Uuid> = vectors
            .virtual_addresses
            .iter()
            .map(|v| Uuid::parse_str(&v.label_uuid).unwrap())
            .collect();

        for (uuid, v) in uuids.iter().zip(&vectors.virtual_addresses) {
            assert_eq!(get_label_uuid(&uuids, hex_to_address(&v.address)), Some(*uuid));
        }
        assert_eq!(get_label_uuid(&uuids, 0x8000), None);
        assert_eq!(get_label_uuid(&[], 0xB529), None);
    }

    #[test]
    fn test_partition_is_exhaustive_with_rfu_gap() {
        let mut rfu = 0;
        for address in 0..=MAX_ADDRESS {
            let categories = [
                is_valid_unassigned_address(address),
                is_valid_unicast_address(address),
                is_valid_virtual_address(address),
                is_valid_group_address(address),
                is_valid_fixed_group_address(address),
            ];
            let matches = categories.iter().filter(|&&c| c).count();
            if matches == 0 {
                assert!(is_rfu_address(address), "0x{address:04X} unclassified");
                rfu += 1;
            } else {
                assert_eq!(matches, 1, "0x{address:04X} in several categories");
            }
        }
        assert_eq!(rfu, 252);
    }

    #[test]
    fn test_out_of_range() {
        assert!(is_address_in_range(0xFFFF));
        assert!(!is_address_in_range(0x1_0000));
        assert!(!is_valid_unicast_address(0x1_0001));
        assert!(!is_valid_fixed_group_address(0x1_FFFF));
        assert_eq!(get_address_type(0x1_0000), None);
    }

    #[test]
    fn test_group_excludes_all_nodes() {
        assert!(is_valid_group_address(0xC000));
        assert!(is_valid_group_address(0xFEFF));
        assert!(!is_valid_group_address(0xFF00));
        assert!(!is_valid_group_address(0xFFFF));
        assert!(is_valid_fixed_group_address(0xFFFF));
    }

    #[test]
    fn test_subscription_address_throw_split() {
        for address in [0x0000, 0x0001, 0x7FFF, 0x8000, 0xBFFF, 0xFFFF] {
            assert!(
                is_valid_subscription_address(address).is_err(),
                "0x{address:04X} should be rejected"
            );
        }
        assert_eq!(is_valid_subscription_address(0xC000), Ok(true));
        assert_eq!(is_valid_subscription_address(0xFFFC), Ok(true));
        assert_eq!(is_valid_subscription_address(0xFFFE), Ok(true));
        assert_eq!(is_valid_subscription_address(0xFF00), Ok(false));
        assert_eq!(is_valid_subscription_address(0x1_0000), Ok(false));
    }

    #[test]
    fn test_proxy_filter_address() {
        assert!(is_valid_proxy_filter_address(0x0001));
        assert!(is_valid_proxy_filter_address(0x8000));
        assert!(is_valid_proxy_filter_address(0xC000));
        assert!(is_valid_proxy_filter_address(0xFFFF));
        assert!(!is_valid_proxy_filter_address(0x0000));
        assert!(!is_valid_proxy_filter_address(0xFF00));
        assert!(!is_valid_proxy_filter_address(0xFFFB));
    }

    #[test]
    fn test_heartbeat_address_validators() {
        assert!(is_valid_heartbeat_publication_destination(0x0000));
        assert!(is_valid_heartbeat_publication_destination(0xC001));
        assert!(is_valid_heartbeat_publication_destination(0xFFFF));
        assert!(!is_valid_heartbeat_publication_destination(0x8001));
        assert!(!is_valid_heartbeat_publication_destination(0xFF10));

        assert_eq!(is_valid_heartbeat_subscription_source(0x0000), Ok(true));
        assert_eq!(is_valid_heartbeat_subscription_source(0x0042), Ok(true));
        assert!(is_valid_heartbeat_subscription_source(0xC000).is_err());

        assert_eq!(is_valid_heartbeat_subscription_destination(0xC000), Ok(true));
        assert!(is_valid_heartbeat_subscription_destination(0x8000).is_err());
        assert!(is_valid_heartbeat_subscription_destination(0xFFFF).is_err());

        let err = is_valid_heartbeat_subscription_destination(0x8000).unwrap_err();
        assert_eq!(
            err.to_string(),
            "invalid argument: heartbeat subscription destination must be unassigned, \
             unicast or group, got 0x8000"
        );
    }

    #[test]
    fn test_address_type_value() {
        assert_eq!(AddressType::AllProxies.value(), Some(0xFFFC));
        assert_eq!(AddressType::AllNodes.value(), Some(0xFFFF));
        assert_eq!(AddressType::Unassigned.value(), Some(0x0000));
        assert_eq!(AddressType::Group.value(), None);
        assert_eq!(AddressType::AllRelays.to_string(), "all_relays");
    }
}

#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(256))]

        #[test]
        fn virtual_address_is_stable_and_in_range(bytes in any::<[u8; 16]>()) {
            let uuid = Uuid::from_bytes(bytes);
            let address = generate_virtual_address(&uuid);
            prop_assert!(is_valid_virtual_address(u32::from(address)));
            prop_assert_eq!(address, generate_virtual_address(&uuid));
            prop_assert_eq!(get_address_type(u32::from(address)), Some(AddressType::Virtual));
        }
    }
}
