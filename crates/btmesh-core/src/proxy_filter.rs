//! Proxy filter state for a single proxy connection.
//!
//! A proxy server keeps one filter per connected proxy client. The filter
//! type is fixed at construction; a Set Filter Type message replaces the
//! whole filter with a fresh, empty one.
//!
//! `ProxyFilter` has no internal locking. It must be owned by the task that
//! handles its connection, or wrapped in a lock by the caller.

use std::fmt;

use crate::address::{is_valid_subscription_address, is_valid_unicast_address};
use crate::types::AddressArray;

/// Filter semantics carried in the Set Filter Type proxy configuration message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum ProxyFilterType {
    InclusionList = 0x00,
    ExclusionList = 0x01,
}

impl ProxyFilterType {
    pub fn from_u8(value: u8) -> Option<Self> {
        match value {
            0x00 => Some(ProxyFilterType::InclusionList),
            0x01 => Some(ProxyFilterType::ExclusionList),
            _ => None,
        }
    }

    pub fn value(self) -> u8 {
        self as u8
    }
}

impl fmt::Display for ProxyFilterType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProxyFilterType::InclusionList => f.write_str("inclusion list"),
            ProxyFilterType::ExclusionList => f.write_str("exclusion list"),
        }
    }
}

/// Ordered, duplicate-free list of filter addresses.
///
/// Insertion order is kept because Add Addresses messages are batched to fit
/// the proxy PDU and sent in that order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProxyFilter {
    filter_type: ProxyFilterType,
    addresses: Vec<AddressArray>,
}

impl ProxyFilter {
    pub fn new(filter_type: ProxyFilterType) -> Self {
        Self {
            filter_type,
            addresses: Vec::new(),
        }
    }

    pub fn filter_type(&self) -> ProxyFilterType {
        self.filter_type
    }

    pub fn addresses(&self) -> &[AddressArray] {
        &self.addresses
    }

    pub fn len(&self) -> usize {
        self.addresses.len()
    }

    pub fn is_empty(&self) -> bool {
        self.addresses.is_empty()
    }

    /// Append `address` unless an equal entry is already present.
    pub fn add_address(&mut self, address: AddressArray) {
        if self.addresses.contains(&address) {
            tracing::trace!(%address, "proxy filter: duplicate address ignored");
            return;
        }
        self.addresses.push(address);
        tracing::debug!(
            %address,
            filter_type = %self.filter_type,
            len = self.addresses.len(),
            "proxy filter: address added"
        );
    }

    pub fn add_addresses<I>(&mut self, addresses: I)
    where
        I: IntoIterator<Item = AddressArray>,
    {
        for address in addresses {
            self.add_address(address);
        }
    }

    /// Remove the entry equal to `address`, if any. Returns whether an
    /// entry was removed.
    pub fn remove_address(&mut self, address: &AddressArray) -> bool {
        let Some(pos) = self.addresses.iter().position(|a| a == address) else {
            return false;
        };
        let removed = self.addresses.remove(pos);
        tracing::debug!(
            address = %removed,
            len = self.addresses.len(),
            "proxy filter: address removed"
        );
        true
    }

    /// Membership test on a raw 2-byte address.
    ///
    /// Only unicast and subscription (group) addresses are looked up. Virtual
    /// addresses and malformed input always report `false`, even when an equal
    /// entry was added.
    pub fn contains(&self, address: &[u8]) -> bool {
        let Ok(address) = AddressArray::try_from(address) else {
            return false;
        };
        let value = u32::from(address.address());
        let is_filterable = is_valid_unicast_address(value)
            || matches!(is_valid_subscription_address(value), Ok(true));
        if is_filterable {
            self.addresses.contains(&address)
        } else {
            false
        }
    }
}
