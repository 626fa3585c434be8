//! Tests for deterministic RNG
//!
//! CRITICAL: Determinism is sacred. Same seed MUST produce same sequence.

use walk_simulator_core_rs::RngManager;

#[test]
fn test_rng_new_with_seed() {
    let rng = RngManager::new(12345);
    assert_eq!(rng.get_state(), 12345);
}

#[test]
fn test_rng_zero_seed_normalized() {
    let rng = RngManager::new(0);
    assert_eq!(rng.get_state(), 1);
}

#[test]
fn test_rng_next_deterministic() {
    let mut rng1 = RngManager::new(12345);
    let mut rng2 = RngManager::new(12345);

    // Same seed should produce same sequence
    for _ in 0..100 {
        assert_eq!(rng1.next(), rng2.next(), "RNG not deterministic!");
    }
}

#[test]
fn test_rng_different_seeds_different_sequences() {
    let mut rng1 = RngManager::new(12345);
    let mut rng2 = RngManager::new(54321);

    assert_ne!(
        rng1.next(),
        rng2.next(),
        "Different seeds should produce different values"
    );
}

#[test]
fn test_rng_next_golden_values() {
    // Pinned output of xorshift64* for the canonical seed. These values
    // define the generator; if they change, every walk table changes.
    let mut rng = RngManager::new(123);
    assert_eq!(rng.next(), 6263409555191053425);
    assert_eq!(rng.next(), 2639717259894160666);
    assert_eq!(rng.next(), 7864733624088036230);
    assert_eq!(rng.next(), 11820342614398382418);
}

#[test]
fn test_rng_range() {
    let mut rng = RngManager::new(12345);

    for _ in 0..100 {
        let val = rng.range(0, 100);
        assert!(val >= 0 && val < 100, "Value {} out of range [0, 100)", val);
    }
}

#[test]
fn test_rng_range_single_value() {
    let mut rng = RngManager::new(12345);

    // Range [5, 6) should always return 5
    assert_eq!(rng.range(5, 6), 5);
}

#[test]
fn test_roll_die_bounds_and_golden_sequence() {
    let mut rng = RngManager::new(123);
    let rolls: Vec<i64> = (0..12).map(|_| rng.roll_die()).collect();

    assert!(rolls.iter().all(|r| (1..=6).contains(r)));
    assert_eq!(rolls, vec![4, 5, 3, 1, 2, 5, 6, 6, 5, 5, 2, 1]);
}

#[test]
fn test_rng_state_advances() {
    let mut rng = RngManager::new(12345);
    let initial_state = rng.get_state();

    rng.next();
    assert_ne!(initial_state, rng.get_state(), "RNG state should advance");
}

#[test]
fn test_rng_replay_from_state() {
    let mut rng1 = RngManager::new(12345);

    for _ in 0..10 {
        rng1.next();
    }

    let checkpoint_state = rng1.get_state();

    let val1_a = rng1.next();
    let val1_b = rng1.next();

    // Create new RNG from checkpoint
    let mut rng2 = RngManager::new(checkpoint_state);

    assert_eq!(val1_a, rng2.next());
    assert_eq!(val1_b, rng2.next());
}

#[test]
fn test_rng_long_sequence_determinism() {
    let mut rng1 = RngManager::new(42);
    let mut rng2 = RngManager::new(42);

    for i in 0..1000 {
        let val1 = rng1.next();
        let val2 = rng2.next();
        assert_eq!(
            val1, val2,
            "Determinism broken at iteration {}: {} != {}",
            i, val1, val2
        );
    }
}

#[test]
fn test_rng_produces_diverse_values() {
    let mut rng = RngManager::new(12345);
    let mut values = Vec::new();

    for _ in 0..100 {
        values.push(rng.next());
    }

    let unique_count = values
        .iter()
        .collect::<std::collections::HashSet<_>>()
        .len();
    assert!(
        unique_count > 90,
        "RNG not diverse enough: only {} unique values out of 100",
        unique_count
    );
}

#[test]
fn test_rng_serde_round_trip_preserves_sequence() {
    let mut rng = RngManager::new(555);
    rng.next();
    rng.next();

    let json = serde_json::to_string(&rng).unwrap();
    let mut restored: RngManager = serde_json::from_str(&json).unwrap();

    for _ in 0..50 {
        assert_eq!(rng.next(), restored.next());
    }
}
