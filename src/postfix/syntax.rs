//! Strict-mode validation of infix tokens.
//!
//! Permissive conversion tolerates stray characters and unbalanced
//! parentheses. Strict mode runs this pass first and reports the first such
//! problem instead.

use crate::error::SyntaxError;
use crate::tokenizer::{Span, Token};

/// Reject unknown characters and unbalanced parentheses.
///
/// # Errors
/// Returns the first [`SyntaxError`] found in source order. An unclosed `(`
/// is only known once the scan ends, so it is reported last and points at the
/// innermost open parenthesis.
pub(crate) fn check_syntax(tokens: &[(Token, Span)]) -> Result<(), SyntaxError> {
    let mut open: Vec<&Span> = Vec::new();
    for (token, span) in tokens {
        match token {
            Token::Unknown(ch) => {
                return Err(SyntaxError::UnexpectedCharacter {
                    ch: *ch,
                    span: span.clone(),
                });
            }
            Token::LeftParen => open.push(span),
            Token::RightParen => {
                if open.pop().is_none() {
                    return Err(SyntaxError::UnmatchedCloseParen { span: span.clone() });
                }
            }
            Token::Number(_) | Token::Operator(_) => {}
        }
    }
    open.pop().map_or(Ok(()), |span| {
        Err(SyntaxError::UnclosedParen { span: span.clone() })
    })
}
