//! Lexical analysis for arithmetic expressions.
//!
//! This module exposes [`tokenize`], which converts raw expression text into a
//! sequence of `(Token, Span)` pairs. It uses the `logos` crate to recognise
//! numbers, operators and parentheses so the converter never has to classify
//! characters itself. Whitespace only separates tokens and is not returned.

use logos::Logos;

use crate::operator::Operator;

/// Byte range for a token within the source.
pub type Span = std::ops::Range<usize>;

#[derive(Logos, Debug, Clone, Copy, PartialEq)]
enum Lexeme {
    #[regex(r"[ \t\r\n]+")]
    Whitespace,
    #[regex(r"[0-9]+(?:\.[0-9]*)?|\.[0-9]+", |lex| lex.slice().parse::<f64>().ok())]
    Number(f64),
    #[token("(")]
    LParen,
    #[token(")")]
    RParen,
    #[token("+")]
    Plus,
    #[token("-")]
    Minus,
    #[token("*")]
    Star,
    #[token("/")]
    Slash,
    #[token("^")]
    Caret,
}

/// A significant token of an infix expression.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Token {
    Number(f64),
    Operator(Operator),
    LeftParen,
    RightParen,
    /// A character outside the accepted vocabulary, such as `%` or a lone `.`.
    Unknown(char),
}

/// Tokenise `src`, dropping whitespace.
///
/// Unrecognised input never aborts the scan; it is reported as
/// [`Token::Unknown`] so callers can decide whether to skip or reject it.
///
/// # Examples
///
/// ```rust
/// use shuntcalc::{Operator, Token, tokenize};
///
/// let tokens = tokenize("1.5 * (2)");
/// let kinds: Vec<Token> = tokens.into_iter().map(|(t, _)| t).collect();
/// assert_eq!(
///     kinds,
///     vec![
///         Token::Number(1.5),
///         Token::Operator(Operator::Mul),
///         Token::LeftParen,
///         Token::Number(2.0),
///         Token::RightParen,
///     ]
/// );
/// ```
#[must_use]
pub fn tokenize(src: &str) -> Vec<(Token, Span)> {
    let mut lexer = Lexeme::lexer(src);
    let mut out = Vec::with_capacity(src.len());
    while let Some(result) = lexer.next() {
        let span = lexer.span();
        let Ok(lexeme) = result else {
            let ch = src
                .get(span.clone())
                .and_then(|text| text.chars().next())
                .unwrap_or(char::REPLACEMENT_CHARACTER);
            out.push((Token::Unknown(ch), span));
            continue;
        };
        let token = match lexeme {
            Lexeme::Whitespace => continue,
            Lexeme::Number(value) => Token::Number(value),
            Lexeme::LParen => Token::LeftParen,
            Lexeme::RParen => Token::RightParen,
            Lexeme::Plus => Token::Operator(Operator::Add),
            Lexeme::Minus => Token::Operator(Operator::Sub),
            Lexeme::Star => Token::Operator(Operator::Mul),
            Lexeme::Slash => Token::Operator(Operator::Div),
            Lexeme::Caret => Token::Operator(Operator::Pow),
        };
        out.push((token, span));
    }
    out
}
