#![allow(dead_code)]

// tests/common/mod.rs

// Logging is auto-installed for every test binary that includes this module
#[ctor::ctor]
fn init_logging() {
    party_test_support::test_logging::init();
}

// Proptest prelude: shared configuration for integration tests.
//
// Env knobs:
// - PROPTEST_CASES: number of cases per property (e.g. 32, 800, 5000).
//
// Generate valid inputs by construction, not by filtering.
pub fn proptest_prelude_config() -> proptest::prelude::ProptestConfig {
    let base = proptest::prelude::ProptestConfig::default();

    // Project default of 16 cases; each case drives a full session
    let cases: u32 = std::env::var("PROPTEST_CASES")
        .ok()
        .and_then(|s| s.parse::<u32>().ok())
        .unwrap_or(16)
        .max(1);

    proptest::prelude::ProptestConfig {
        // Disable persistence to silence regression-file warnings in integration tests
        failure_persistence: None,
        cases,
        ..base
    }
}
