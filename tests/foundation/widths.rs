//! Integration tests for identifier widths
//!
//! Tests capacities, native integer conversions, and use as a map key.

use std::collections::{BTreeSet, HashMap};

use swarm_foundation::layout::{FULL_WIDTH_WORDS, MAX_COMPONENTS};
use swarm_foundation::{Eid, Eid64, Eid128, ErrorKind, PackedId};

#[test]
fn capacities() {
    assert_eq!(Eid::CAPACITY, MAX_COMPONENTS);
    assert_eq!(Eid128::CAPACITY, 5);
    assert_eq!(Eid64::CAPACITY, 1);
    assert_eq!(PackedId::<4>::CAPACITY, 13);
    assert_eq!(Eid::new(0).capacity(), 255);
    assert_eq!(FULL_WIDTH_WORDS, 65);
}

#[test]
fn eid128_boundary() {
    let id = Eid128::encode(1, &[10, 20, 30, 40, 50]).unwrap();
    assert_eq!(id.decode().components, vec![10, 20, 30, 40, 50]);

    let err = id.pack_additional(&[60]).unwrap_err();
    assert!(matches!(
        err.kind,
        ErrorKind::TooManyComponents {
            requested: 6,
            capacity: 5
        }
    ));
}

#[test]
fn eid64_boundary() {
    let id = Eid64::new(1).pack_additional(&[7]).unwrap();
    assert!(id.has_component(7));
    assert!(id.pack_additional(&[8]).is_err());
    assert!(id.remove_component(7).pack_additional(&[8]).is_ok());
}

#[test]
fn u128_roundtrip_through_native_key() {
    let id = Eid128::encode(99, &[1, 2, 3]).unwrap();
    let key: u128 = id.into();
    let back = Eid128::from(key);
    assert_eq!(back, id);
    assert_eq!(back.decode().into_parts(), (99, 3, vec![1, 2, 3]));
}

#[test]
fn u128_low_bits_are_index() {
    let id = Eid128::encode(0xDEAD_BEEF, &[0xFFFF]).unwrap();
    let raw = u128::from(id);
    assert_eq!(raw & 0xFFFF_FFFF, 0xDEAD_BEEF);
    assert_eq!((raw >> 32) & 0xFF, 1);
    assert_eq!((raw >> 40) & 0xFFFF, 0xFFFF);
}

#[test]
fn words_roundtrip() {
    let id = Eid::encode(3, &[1, 2]).unwrap();
    assert_eq!(Eid::from_words(*id.as_words()), id);
}

#[test]
fn usable_as_hash_map_key() {
    let mut table: HashMap<Eid, &str> = HashMap::new();
    let a = Eid::encode(0, &[1]).unwrap();
    let b = Eid::encode(0, &[2]).unwrap();
    table.insert(a, "a");
    table.insert(b, "b");
    assert_eq!(table[&a], "a");
    assert_eq!(table[&b], "b");
    assert_eq!(table.get(&Eid::encode(0, &[1]).unwrap()), Some(&"a"));
}

#[test]
fn usable_as_ordered_key() {
    let ids: BTreeSet<Eid128> = (0..10).map(Eid128::new).collect();
    assert_eq!(ids.len(), 10);
    assert_eq!(ids.iter().next().map(Eid128::index), Some(0));
}

#[test]
fn widths_decode_identically() {
    let components = [11, 22, 33];
    let wide = Eid::encode(5, &components).unwrap();
    let narrow = Eid128::encode(5, &components).unwrap();
    assert_eq!(wide.decode(), narrow.decode());
    assert_eq!(format!("{wide:?}"), format!("{narrow:?}"));
}
