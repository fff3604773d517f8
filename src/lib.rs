//! Library crate for shuntcalc.
//!
//! Evaluates arithmetic expressions over `+ - * / ^` and parentheses by
//! converting them to postfix order with the shunting-yard algorithm and
//! reducing the result over an operand stack.

#![forbid(unsafe_code)]

pub mod config;
pub mod engine;
pub mod error;
pub mod evaluator;
pub mod format;
pub mod operator;
pub mod postfix;
pub mod tokenizer;

// Only expose test utilities to tests and opt-in consumers.
#[cfg(any(test, feature = "test-support"))]
#[doc(hidden)]
pub mod test_util;

pub use config::{EvalConfig, SyntaxMode};
pub use engine::{Engine, evaluate};
pub use error::{ErrorKind, EvalError, InvalidReason, SyntaxError};
pub use evaluator::eval_postfix;
pub use format::format_number;
pub use operator::{Associativity, Operator, precedence};
pub use postfix::{Postfix, PostfixToken, to_postfix};
pub use tokenizer::{Span, Token, tokenize};
