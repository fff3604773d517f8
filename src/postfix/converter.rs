//! Shunting-yard conversion from infix tokens to a [`Postfix`] sequence.
//!
//! The converter never fails. Unknown characters are skipped, an unmatched
//! `)` is a no-op and an unclosed `(` is discarded when the stack is drained.
//! Each of these is logged so permissive input does not disappear silently.

use log::{debug, warn};

use super::{Postfix, PostfixToken};
use crate::operator::Operator;
use crate::tokenizer::{Span, Token, tokenize};

/// Entries on the operator stack.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Pending {
    Open,
    Operator(Operator),
    /// Unary minus over a power, emitted as `0 x -`. Binds looser than `^`
    /// and tighter than every other operator.
    Negate,
}

impl Pending {
    const fn emitted(self) -> Option<Operator> {
        match self {
            Self::Open => None,
            Self::Operator(op) => Some(op),
            Self::Negate => Some(Operator::Sub),
        }
    }
}

/// How a `+` or `-` in operand position is handled.
enum Sign<'a> {
    /// Folded into the literal; the remaining tokens follow it.
    Literal(f64, &'a [(Token, Span)]),
    /// The literal is the base of a power, so negation waits for `^`.
    Negate,
    /// A `+` before a power base has no effect.
    Ignore,
}

/// Convert an infix expression to postfix order.
///
/// # Examples
///
/// ```rust
/// use shuntcalc::to_postfix;
///
/// assert_eq!(to_postfix("3+4*2").to_string(), "3 4 2 * +");
/// assert_eq!(to_postfix("2^3^2").to_string(), "2 3 ^ 2 ^");
/// ```
#[must_use]
pub fn to_postfix(expr: &str) -> Postfix {
    let postfix = convert(&tokenize(expr));
    debug!("converted {expr:?} to postfix {postfix}");
    postfix
}

/// Run the shunting-yard algorithm over already tokenised input.
pub(crate) fn convert(tokens: &[(Token, Span)]) -> Postfix {
    let mut output = Postfix::default();
    let mut stack: Vec<Pending> = Vec::new();
    // True at the start, after `(` and after an operator.
    let mut expect_operand = true;
    let mut rest = tokens;

    while let [(token, span), tail @ ..] = rest {
        rest = tail;
        match *token {
            Token::Number(value) => {
                output.push(PostfixToken::Number(value));
                expect_operand = false;
            }
            Token::LeftParen => {
                stack.push(Pending::Open);
                expect_operand = true;
            }
            Token::RightParen => {
                close_group(&mut stack, &mut output, span);
                expect_operand = false;
            }
            Token::Operator(op) => {
                if expect_operand {
                    match unary_sign(op, tail) {
                        Some(Sign::Literal(value, after)) => {
                            output.push(PostfixToken::Number(value));
                            rest = after;
                            expect_operand = false;
                            continue;
                        }
                        Some(Sign::Negate) => {
                            output.push(PostfixToken::Number(0.0));
                            stack.push(Pending::Negate);
                            continue;
                        }
                        Some(Sign::Ignore) => continue,
                        None => {}
                    }
                }
                push_operator(&mut stack, &mut output, op);
                expect_operand = true;
            }
            Token::Unknown(ch) => warn!("ignoring unexpected character {ch:?} at {span:?}"),
        }
    }

    while let Some(pending) = stack.pop() {
        let Some(op) = pending.emitted() else {
            warn!("dropping unclosed '('");
            continue;
        };
        output.push(PostfixToken::Operator(op));
    }
    output
}

fn push_operator(stack: &mut Vec<Pending>, output: &mut Postfix, op: Operator) {
    while let Some(&top) = stack.last() {
        let pops = match top {
            Pending::Open => false,
            Pending::Operator(stacked) => op.yields_to(stacked),
            Pending::Negate => op.precedence() < Operator::Pow.precedence(),
        };
        let Some(emitted) = top.emitted() else {
            break;
        };
        if !pops {
            break;
        }
        stack.pop();
        output.push(PostfixToken::Operator(emitted));
    }
    stack.push(Pending::Operator(op));
}

fn close_group(stack: &mut Vec<Pending>, output: &mut Postfix, span: &Span) {
    while let Some(pending) = stack.pop() {
        let Some(op) = pending.emitted() else {
            return;
        };
        output.push(PostfixToken::Operator(op));
    }
    warn!("ignoring unmatched ')' at {span:?}");
}

/// Classify a `+` or `-` found where an operand is expected.
///
/// Returns `None` unless `op` is `+` or `-` and the next token is a number.
/// The sign folds into the literal except when the literal is the base of a
/// power, so that `-2^2` is `-(2^2)`.
#[expect(clippy::float_arithmetic, reason = "negating a literal")]
fn unary_sign(op: Operator, tail: &[(Token, Span)]) -> Option<Sign<'_>> {
    let negate = match op {
        Operator::Sub => true,
        Operator::Add => false,
        _ => return None,
    };
    let [(Token::Number(value), _), after @ ..] = tail else {
        return None;
    };
    if matches!(after.first(), Some((Token::Operator(Operator::Pow), _))) {
        return Some(if negate { Sign::Negate } else { Sign::Ignore });
    }
    Some(Sign::Literal(if negate { -*value } else { *value }, after))
}
