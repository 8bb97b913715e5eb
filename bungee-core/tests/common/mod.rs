//! Shared fixtures for integration tests
//!
//! Reference jumps with hand-checked expectations, plus helpers for
//! float comparison.

#![allow(dead_code)]

/// A named jump with the values a user would type
#[derive(Debug, Clone, Copy)]
pub struct Scenario {
    pub name: &'static str,
    pub mass: &'static str,
    pub start_height: &'static str,
    pub jumper_height: &'static str,
    pub unstretched_length: &'static str,
}

/// Classroom reference jump from the form placeholders
pub const REFERENCE: Scenario = Scenario {
    name: "reference",
    mass: "70",
    start_height: "50",
    jumper_height: "1.7",
    unstretched_length: "0.35",
};

/// Zero mass with every other field valid
pub const ZERO_MASS: Scenario = Scenario {
    name: "zero_mass",
    mass: "0",
    ..REFERENCE
};

/// Platform lower than the target ending height
pub const BELOW_ENDING_HEIGHT: Scenario = Scenario {
    name: "below_ending_height",
    start_height: "0.1",
    ..REFERENCE
};

/// Light jumper on a short drop, positive cord extension
pub const DOLL_DROP: Scenario = Scenario {
    name: "doll_drop",
    mass: "0.05",
    start_height: "2",
    jumper_height: "0.29",
    unstretched_length: "0.2",
};

/// Every scenario that should produce a result
pub const VALID: &[Scenario] = &[REFERENCE, DOLL_DROP];

pub fn assert_close(actual: f64, expected: f64, tol: f64, what: &str) {
    assert!(
        (actual - expected).abs() <= tol,
        "{what}: expected {expected}, got {actual} (tol {tol})"
    );
}
