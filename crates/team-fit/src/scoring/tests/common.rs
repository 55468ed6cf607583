use crate::scoring::{AttributeVector, Person, ScoringConfig, ScoringEngine, ZeroGapPolicy};

pub(super) const TOLERANCE: f64 = 1e-9;

pub(super) fn person(name: &str, raw: [f64; 4]) -> Person {
    let [intelligence, strength, endurance, spicy_food_tolerance] = raw;
    Person::new(
        name,
        AttributeVector::new(intelligence, strength, endurance, spicy_food_tolerance),
    )
}

pub(super) fn default_engine() -> ScoringEngine {
    ScoringEngine::new(ScoringConfig::default()).expect("default config is valid")
}

pub(super) fn lenient_engine() -> ScoringEngine {
    ScoringEngine::new(ScoringConfig {
        zero_gap_policy: ZeroGapPolicy::TreatAsZero,
        ..ScoringConfig::default()
    })
    .expect("lenient config is valid")
}

pub(super) fn mixed_team() -> Vec<Person> {
    vec![
        person("Eddie", [7.0, 1.0, 5.0, 3.0]),
        person("Will", [9.0, 4.0, 1.0, 6.0]),
        person("Mike", [3.0, 2.0, 9.0, 4.0]),
    ]
}

pub(super) fn applicants() -> Vec<Person> {
    vec![
        person("John", [4.0, 5.0, 2.0, 1.0]),
        person("Jane", [7.0, 4.0, 3.0, 8.0]),
        person("Joe", [1.0, 1.0, 1.0, 1.0]),
    ]
}

pub(super) fn assert_close(actual: f64, expected: f64) {
    assert!(
        (actual - expected).abs() < TOLERANCE,
        "expected {expected}, got {actual}"
    );
}
