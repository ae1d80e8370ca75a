//! End-to-end scenarios across the codec, address, crypto and filter layers.

use btmesh_core::address::{generate_virtual_address, get_address_type, get_label_uuid};
use btmesh_core::codec::{
    address_bytes_to_int, address_int_to_bytes, bytes_to_hex_all, to_byte_array,
};
use btmesh_core::opcode::{decode_opcode, encode_opcode, vendor_opcode};
use btmesh_core::{AddressArray, AddressType, ProxyFilter, ProxyFilterType};
use btmesh_crypto::beacon::{SecureNetworkBeacon, create_secure_network_beacon};
use btmesh_crypto::kdf::{calculate_k2, calculate_network_id};
use btmesh_test_vectors::helpers::{hex_to_16, hex_to_8};
use btmesh_test_vectors::{beacons, mesh_keys};
use uuid::Uuid;

#[test]
fn beacon_from_zero_inputs() {
    let beacon = create_secure_network_beacon(&[0u8; 16], 0x00, &[0u8; 8], 0);
    let bytes = beacon.as_bytes();
    assert_eq!(bytes.len(), 22);
    assert_eq!(bytes[0], 0x01);
    assert_eq!(&bytes[2..10], &[0u8; 8]);
}

#[test]
fn beacon_vectors_through_hex_codec() {
    let vectors = beacons::load();
    for v in &vectors.secure_network_beacons {
        let net_key = hex_to_16(&v.net_key);
        let network_id = hex_to_8(&v.network_id);
        let beacon =
            create_secure_network_beacon(&net_key, v.flags as u8, &network_id, v.iv_index as u32);
        assert_eq!(
            bytes_to_hex_all(beacon.as_bytes(), false),
            v.beacon.to_uppercase(),
            "beacon mismatch for: {}",
            v.description
        );

        let received = to_byte_array(&v.beacon).unwrap();
        let parsed = SecureNetworkBeacon::parse(&received).unwrap();
        assert!(parsed.authenticate(&net_key).is_ok());
    }
}

#[test]
fn network_id_matches_derived_subnet_material() {
    let vectors = mesh_keys::load();
    for v in &vectors.network_keys {
        let net_key = hex_to_16(&v.net_key);
        let k2 = calculate_k2(&net_key, &[0x00]);
        assert_eq!(u64::from(k2.nid()), v.nid);
        let network_id = calculate_network_id(&net_key);
        assert_eq!(bytes_to_hex_all(&network_id, false), v.network_id.to_uppercase());
    }
}

#[test]
fn proxy_filter_dedup() {
    let mut filter = ProxyFilter::new(ProxyFilterType::InclusionList);
    filter.add_address(AddressArray::new([0x12, 0x34]));
    filter.add_address(AddressArray::new([0x12, 0x34]));
    assert_eq!(filter.addresses().len(), 1);
    assert!(filter.contains(&[0x12, 0x34]));
}

#[test]
fn proxy_filter_reset_is_a_new_filter() {
    let mut filter = ProxyFilter::new(ProxyFilterType::InclusionList);
    filter.add_address(AddressArray::from_address(0x0005));

    let filter_type = ProxyFilterType::from_u8(0x01).unwrap();
    let filter = if filter.filter_type() == filter_type {
        filter
    } else {
        ProxyFilter::new(filter_type)
    };
    assert_eq!(filter.filter_type(), ProxyFilterType::ExclusionList);
    assert!(filter.is_empty());
}

#[test]
fn virtual_address_resolves_to_label() {
    let labels = [
        Uuid::parse_str("0073e7e4-d8b9-440f-af84-15df4c56c0e1").unwrap(),
        Uuid::parse_str("f4a002c7-fb1e-4ca0-a469-a021de0db875").unwrap(),
    ];
    let address = generate_virtual_address(&labels[1]);
    assert_eq!(address, 0x9736);
    assert_eq!(get_address_type(u32::from(address)), Some(AddressType::Virtual));

    let wire = address_int_to_bytes(address);
    assert_eq!(wire, [0x97, 0x36]);
    assert_eq!(get_label_uuid(&labels, address_bytes_to_int(wire)), Some(labels[1]));
}

#[test]
fn opcode_length_boundary() {
    for (opcode, len) in [(0x7Fu32, 1usize), (0x80, 2), (0x4000, 3)] {
        let encoded = encode_opcode(opcode).unwrap();
        assert_eq!(encoded.len(), len);
        assert_eq!(decode_opcode(&encoded).unwrap(), (opcode, len));
    }
}

#[test]
fn vendor_opcode_decodes_as_three_octets() {
    let encoded = vendor_opcode(0x01, 0x0059);
    let (_, len) = decode_opcode(&encoded).unwrap();
    assert_eq!(len, 3);
}
