//! Helpers for building postfix sequences and asserting over evaluation
//! results in tests.

mod assertions;
mod tokens;

pub use assertions::{assert_close, assert_invalid, assert_syntax_error};
pub use tokens::{num, op, postfix};
