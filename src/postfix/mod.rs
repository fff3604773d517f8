//! Postfix (reverse Polish) token sequences.
//!
//! A [`Postfix`] is what the shunting-yard converter produces and what the
//! evaluator consumes. It renders as a single-space-delimited string and can
//! be parsed back from one, so sequences can be logged, stored or typed by
//! hand without sharing any formatting conventions with the infix side.

use std::fmt;
use std::str::FromStr;

use crate::error::SyntaxError;
use crate::operator::Operator;

mod converter;
mod syntax;

pub use converter::to_postfix;
pub(crate) use converter::convert;
pub(crate) use syntax::check_syntax;


/// A single element of a postfix sequence.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PostfixToken {
    Number(f64),
    Operator(Operator),
}

/// An ordered sequence of operands and operators in postfix order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Postfix(Vec<PostfixToken>);

impl Postfix {
    #[must_use]
    pub fn new(tokens: Vec<PostfixToken>) -> Self {
        Self(tokens)
    }

    #[must_use]
    pub fn tokens(&self) -> &[PostfixToken] {
        &self.0
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub(crate) fn push(&mut self, token: PostfixToken) {
        self.0.push(token);
    }
}

impl FromIterator<PostfixToken> for Postfix {
    fn from_iter<T: IntoIterator<Item = PostfixToken>>(iter: T) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl<'a> IntoIterator for &'a Postfix {
    type Item = &'a PostfixToken;
    type IntoIter = std::slice::Iter<'a, PostfixToken>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl fmt::Display for PostfixToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(value) => write!(f, "{value}"),
            Self::Operator(op) => write!(f, "{op}"),
        }
    }
}

impl fmt::Display for Postfix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut tokens = self.0.iter();
        if let Some(first) = tokens.next() {
            write!(f, "{first}")?;
        }
        for token in tokens {
            write!(f, " {token}")?;
        }
        Ok(())
    }
}

impl FromStr for PostfixToken {
    type Err = SyntaxError;

    /// Parse one whitespace-free postfix token.
    ///
    /// A lone operator symbol is an operator. Anything else must be a number
    /// with an optional sign, so `-` is subtraction while `-4` is negative
    /// four. `inf` and `NaN`, as written by `Display`, are accepted too.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.chars();
        if let (Some(symbol), None) = (chars.next(), chars.next()) {
            if let Some(op) = Operator::from_symbol(symbol) {
                return Ok(Self::Operator(op));
            }
        }
        let unknown = || SyntaxError::UnknownToken {
            token: s.to_string(),
        };
        let unsigned = s.strip_prefix(['+', '-']).unwrap_or(s);
        let non_finite = matches!(unsigned, "inf" | "NaN");
        if !non_finite && !unsigned.starts_with(|c: char| c.is_ascii_digit() || c == '.') {
            return Err(unknown());
        }
        s.parse::<f64>().map(Self::Number).map_err(|_| unknown())
    }
}

impl FromStr for Postfix {
    type Err = SyntaxError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.split_whitespace().map(str::parse).collect()
    }
}
