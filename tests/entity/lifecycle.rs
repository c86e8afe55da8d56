//! Integration tests for identifier lifecycles
//!
//! Drives identifiers the way an ECS runtime does: mint, attach, query, detach.

use std::collections::HashMap;

use proptest::prelude::*;
use swarm_entity::EntityCounter;
use swarm_foundation::{ComponentId, Eid, Eid128};

const POSITION: ComponentId = 5;
const VELOCITY: ComponentId = 6;
const SPRITE: ComponentId = 9;

// =============================================================================
// Scenarios
// =============================================================================

#[test]
fn attach_query_detach_single_component() {
    let mut counter = EntityCounter::new();

    let id0: Eid = counter.generate().unwrap();
    assert_eq!(id0.index(), 0);
    assert_eq!(id0.count(), 0);

    let id1 = id0.pack_additional(&[POSITION]).unwrap();
    assert_eq!(id1.decode().into_parts(), (0, 1, vec![POSITION]));
    assert!(id1.has_component(POSITION));

    let id2 = id1.remove_component(POSITION);
    assert_eq!(id2.decode().into_parts(), (0, 0, vec![]));
}

#[test]
fn query_absent_component() {
    let mut counter = EntityCounter::new();
    let id0: Eid = counter.generate().unwrap();
    let id1 = id0.pack_additional(&[POSITION]).unwrap();

    assert!(!id1.has_component(SPRITE));
    assert_eq!(id1.get_component(SPRITE), None);
}

#[test]
fn runtime_filters_by_component() {
    let mut counter = EntityCounter::new();
    let mut entities: Vec<Eid128> = Vec::new();

    for i in 0..10 {
        let id: Eid128 = counter.generate().unwrap();
        let id = if i % 2 == 0 {
            id.pack_additional(&[POSITION, VELOCITY]).unwrap()
        } else {
            id.pack_additional(&[POSITION]).unwrap()
        };
        entities.push(id);
    }

    let moving: Vec<u32> = entities
        .iter()
        .filter(|id| id.has_component(VELOCITY))
        .map(Eid128::index)
        .collect();
    assert_eq!(moving, vec![0, 2, 4, 6, 8]);
}

#[test]
fn runtime_replaces_stored_key() {
    let mut counter = EntityCounter::new();
    let mut names: HashMap<u128, &str> = HashMap::new();

    let id: Eid128 = counter.generate().unwrap();
    names.insert(id.into(), "player");

    // Attaching a component changes the key, so the runtime re-inserts
    let updated = id.pack_additional(&[SPRITE]).unwrap();
    let name = names.remove(&u128::from(id)).unwrap();
    names.insert(updated.into(), name);

    assert_eq!(names.get(&u128::from(updated)), Some(&"player"));
    assert!(!names.contains_key(&u128::from(id)));
}

// =============================================================================
// Properties
// =============================================================================

#[derive(Debug, Clone)]
enum Op {
    Attach(ComponentId),
    Detach(ComponentId),
}

fn op() -> impl Strategy<Value = Op> {
    prop_oneof![
        (0u16..8).prop_map(Op::Attach),
        (0u16..8).prop_map(Op::Detach),
    ]
}

proptest! {
    #[test]
    fn random_edits_match_model(ops in prop::collection::vec(op(), 0..200)) {
        let mut counter = EntityCounter::new();
        let _: Eid = counter.generate().unwrap();
        let mut id: Eid = counter.generate().unwrap();
        let mut model: Vec<ComponentId> = Vec::new();

        for op in ops {
            match op {
                Op::Attach(c) => {
                    if model.len() < Eid::CAPACITY {
                        id = id.pack_additional(&[c]).unwrap();
                        model.push(c);
                    } else {
                        prop_assert!(id.pack_additional(&[c]).is_err());
                    }
                }
                Op::Detach(c) => {
                    let before = id;
                    id = id.remove_component(c);
                    match model.iter().position(|m| *m == c) {
                        Some(at) => {
                            model.remove(at);
                        }
                        None => prop_assert_eq!(id, before),
                    }
                }
            }

            let decoded = id.decode();
            prop_assert_eq!(decoded.index, 1);
            prop_assert_eq!(usize::from(decoded.count), model.len());
            prop_assert_eq!(&decoded.components, &model);
        }
    }
}
