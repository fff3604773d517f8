//! Constructors for [`PostfixToken`] values.

use crate::{Operator, Postfix, PostfixToken};

/// Construct a numeric [`PostfixToken`].
///
/// # Examples
///
/// ```rust,no_run
/// # #[cfg(feature = "test-support")]
/// # {
/// use shuntcalc::{PostfixToken, test_util::num};
/// assert_eq!(num(2.0), PostfixToken::Number(2.0));
/// # }
/// ```
#[must_use]
pub fn num(value: f64) -> PostfixToken {
    PostfixToken::Number(value)
}

/// Construct an operator [`PostfixToken`] from its symbol.
///
/// # Panics
/// Panics if `symbol` is not one of `+ - * / ^`.
#[must_use]
#[track_caller]
pub fn op(symbol: char) -> PostfixToken {
    let operator =
        Operator::from_symbol(symbol).unwrap_or_else(|| panic!("not an operator: {symbol:?}"));
    PostfixToken::Operator(operator)
}

/// Parse a postfix string, panicking on malformed input.
///
/// # Panics
/// Panics if `src` contains a token that is neither a number nor an operator.
#[must_use]
#[track_caller]
pub fn postfix(src: &str) -> Postfix {
    src.parse()
        .unwrap_or_else(|e| panic!("invalid postfix {src:?}: {e}"))
}
