//! Assertion helpers for evaluation results.

use crate::{ErrorKind, EvalError, SyntaxError};

/// Assert that `actual` succeeded with a value within `1e-9` of `expected`.
///
/// Infinities must match exactly.
///
/// # Panics
/// Panics if `actual` is an error or the values differ.
#[track_caller]
#[expect(clippy::float_arithmetic, reason = "tolerance comparison")]
pub fn assert_close(actual: Result<f64, EvalError>, expected: f64) {
    let value = actual.unwrap_or_else(|e| panic!("expected {expected}, got error: {e}"));
    if expected.is_infinite() {
        assert_eq!(value, expected);
        return;
    }
    assert!(
        (value - expected).abs() < 1e-9,
        "expected {expected}, got {value}"
    );
}

/// Assert that `actual` failed with [`ErrorKind::InvalidExpression`].
///
/// # Panics
/// Panics if `actual` succeeded or failed with another kind.
#[track_caller]
pub fn assert_invalid(actual: Result<f64, EvalError>) {
    match actual {
        Err(e) => assert_eq!(e.kind(), ErrorKind::InvalidExpression, "got {e}"),
        Ok(value) => panic!("expected invalid expression, got {value}"),
    }
}

/// Assert that `actual` failed with exactly `expected`.
///
/// # Panics
/// Panics if `actual` succeeded or failed with a different error.
#[track_caller]
pub fn assert_syntax_error(actual: Result<f64, EvalError>, expected: &SyntaxError) {
    match actual {
        Err(EvalError::Syntax(e)) => assert_eq!(&e, expected),
        other => panic!("expected syntax error {expected}, got {other:?}"),
    }
}
