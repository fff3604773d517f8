//! Error types returned by the evaluation pipeline.
//!
//! Conversion never fails in permissive mode, so every error originates either
//! in the evaluator ([`EvalError::InvalidExpression`]) or in a syntax check
//! ([`EvalError::Syntax`]) performed by strict mode and by the postfix string
//! parser.

use thiserror::Error;

use crate::operator::Operator;
use crate::tokenizer::Span;

/// Coarse classification of an [`EvalError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    InvalidExpression,
    SyntaxError,
}

/// Why a postfix sequence could not be reduced to a single value.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InvalidReason {
    /// An operator was reached with fewer than two operands on the stack.
    #[error("operator '{operator}' is missing an operand")]
    MissingOperand { operator: Operator },
    /// The expression contained no operands at all.
    #[error("expression is empty")]
    Empty,
    /// More than one value remained once every token was consumed.
    #[error("{count} operands left without an operator")]
    LeftoverOperands { count: usize },
}

/// Syntax problems rejected outside permissive mode.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SyntaxError {
    #[error("unexpected character '{ch}' at {span:?}")]
    UnexpectedCharacter { ch: char, span: Span },
    #[error("unmatched ')' at {span:?}")]
    UnmatchedCloseParen { span: Span },
    #[error("unclosed '(' at {span:?}")]
    UnclosedParen { span: Span },
    #[error("unknown postfix token '{token}'")]
    UnknownToken { token: String },
}

/// Failure to evaluate an expression.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EvalError {
    #[error("invalid expression: {0}")]
    InvalidExpression(#[from] InvalidReason),
    #[error("syntax error: {0}")]
    Syntax(#[from] SyntaxError),
}

impl EvalError {
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::InvalidExpression(_) => ErrorKind::InvalidExpression,
            Self::Syntax(_) => ErrorKind::SyntaxError,
        }
    }
}
