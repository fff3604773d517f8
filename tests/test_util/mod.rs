//! Shared test utilities for integration tests.
//!
//! These helpers mirror a subset of `shuntcalc::test_util` without requiring
//! the `test-support` feature, so integration tests compile against the
//! published library.

#![expect(
    dead_code,
    reason = "helpers are reused across multiple tests so some may be unused"
)]

use shuntcalc::{ErrorKind, EvalError};

/// Assert that `actual` succeeded with a value within `1e-9` of `expected`.
///
/// # Panics
/// Panics if `actual` is an error or the values differ.
#[track_caller]
#[expect(clippy::float_arithmetic, reason = "tolerance comparison")]
pub fn assert_close(actual: Result<f64, EvalError>, expected: f64) {
    let value = actual.unwrap_or_else(|e| panic!("expected {expected}, got error: {e}"));
    assert!(
        (value - expected).abs() < 1e-9,
        "expected {expected}, got {value}"
    );
}

/// Assert that `actual` failed with the given [`ErrorKind`].
///
/// # Panics
/// Panics if `actual` succeeded or failed with another kind.
#[track_caller]
pub fn assert_kind(actual: Result<f64, EvalError>, expected: ErrorKind) {
    match actual {
        Err(e) => assert_eq!(e.kind(), expected, "got {e}"),
        Ok(value) => panic!("expected {expected:?}, got {value}"),
    }
}
