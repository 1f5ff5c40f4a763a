//! Unit validation of the core synthesis rule, adapted around the engine's
//! public contract: irreflexivity, symmetry, the diamond unit, and
//! memoization.

use distinction_core::{Engine, EngineError};
use distinction_data::DistinctionId;

#[test]
fn test_irreflexivity_is_a_fixed_point() {
    let mut engine = Engine::new();
    let d1 = engine.d1().id.clone();
    let before_distinctions = engine.distinction_count();
    let before_relations = engine.relation_count();

    let result = engine.synthesize(&d1, &d1).unwrap();

    assert_eq!(result.id, d1);
    assert_eq!(engine.distinction_count(), before_distinctions);
    assert_eq!(engine.relation_count(), before_relations);
}

#[test]
fn test_symmetry_across_independent_universes() {
    let mut first = Engine::new();
    let c_ab = {
        let d0 = first.d0().id.clone();
        let d1 = first.d1().id.clone();
        first.synthesize(&d0, &d1).unwrap()
    };

    let mut second = Engine::new();
    let c_ba = {
        let d0 = second.d0().id.clone();
        let d1 = second.d1().id.clone();
        second.synthesize(&d1, &d0).unwrap()
    };

    assert_eq!(c_ab.id, c_ba.id);
    assert_eq!(c_ab, c_ba);
    assert_eq!(first.fingerprint(), second.fingerprint());
}

#[test]
fn test_synthesis_creates_diamond_unit() {
    let mut engine = Engine::new();
    let d0 = engine.d0().id.clone();
    let d1 = engine.d1().id.clone();
    assert_eq!(engine.distinction_count(), 2);
    assert_eq!(engine.relation_count(), 0);

    let c = engine.synthesize(&d0, &d1).unwrap();

    assert_eq!(engine.distinction_count(), 3);
    assert!(engine.contains(&c.id));
    assert!(engine.has_relation(&d0, &c.id));
    assert!(engine.has_relation(&d1, &c.id));
    assert_eq!(engine.relation_count(), 2);
}

#[test]
fn test_memoization_returns_existing_distinction() {
    let mut engine = Engine::new();
    let d0 = engine.d0().id.clone();
    let d1 = engine.d1().id.clone();

    let c1 = engine.synthesize(&d0, &d1).unwrap();
    let distinctions_after_first = engine.distinction_count();
    let relations_after_first = engine.relation_count();

    let c2 = engine.synthesize(&d0, &d1).unwrap();

    assert_eq!(c1, c2);
    assert_eq!(engine.distinction_count(), distinctions_after_first);
    assert_eq!(engine.relation_count(), relations_after_first);
}

#[test]
fn test_snapshot_reflects_current_state() {
    let mut engine = Engine::new();
    let d0 = engine.d0().id.clone();
    let d1 = engine.d1().id.clone();
    let c = engine.synthesize(&d0, &d1).unwrap();

    let snapshot = engine.snapshot();
    assert_eq!(snapshot.distinction_count(), 3);
    assert_eq!(snapshot.relation_count(), 2);
    assert!(snapshot.contains(&c.id));
    assert!(snapshot.is_closed());
}

#[test]
fn test_unregistered_operand_fails_loudly() {
    let mut engine = Engine::new();
    let d0 = engine.d0().id.clone();
    let ghost = DistinctionId::new("deadbeef");

    let err = engine.synthesize(&ghost, &d0).unwrap_err();
    assert_eq!(err, EngineError::UnknownDistinction(ghost));
    assert_eq!(engine.distinction_count(), 2);
    assert_eq!(engine.relation_count(), 0);
}
