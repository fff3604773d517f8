//! Binary operators and their precedence table.
//!
//! This module centralizes the operator set recognised by the engine. The
//! converter consults [`precedence`] when deciding whether to pop the
//! operator stack, and the evaluator calls [`Operator::apply`] once both
//! operands are available.

use std::fmt;

use phf::phf_map;

/// An arithmetic binary operator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operator {
    Add,
    Sub,
    Mul,
    Div,
    Pow,
}

/// Tie-breaking rule for operators of equal precedence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Associativity {
    Left,
}

/// Maps operator symbols to their [`Operator`] variant.
static OPERATORS: phf::Map<char, Operator> = phf_map! {
    '+' => Operator::Add,
    '-' => Operator::Sub,
    '*' => Operator::Mul,
    '/' => Operator::Div,
    '^' => Operator::Pow,
};

/// Rank of `op` when resolving operator precedence.
///
/// Returns `1` for `+`/`-`, `2` for `*`/`/`, `3` for `^` and `0` for any
/// other character, including parentheses and digits. A rank of `0` never
/// causes the converter to pop the operator stack.
///
/// # Examples
///
/// ```rust
/// use shuntcalc::precedence;
///
/// assert_eq!(precedence('*'), 2);
/// assert_eq!(precedence('('), 0);
/// ```
#[must_use]
pub fn precedence(op: char) -> u8 {
    Operator::from_symbol(op).map_or(0, Operator::precedence)
}

impl Operator {
    /// Look up the operator written as `symbol`.
    #[must_use]
    pub fn from_symbol(symbol: char) -> Option<Self> {
        OPERATORS.get(&symbol).copied()
    }

    #[must_use]
    pub const fn symbol(self) -> char {
        match self {
            Self::Add => '+',
            Self::Sub => '-',
            Self::Mul => '*',
            Self::Div => '/',
            Self::Pow => '^',
        }
    }

    #[must_use]
    pub const fn precedence(self) -> u8 {
        match self {
            Self::Add | Self::Sub => 1,
            Self::Mul | Self::Div => 2,
            Self::Pow => 3,
        }
    }

    /// Every operator groups left to right, `^` included, so `2^3^2` is
    /// `(2^3)^2`.
    #[must_use]
    pub const fn associativity(self) -> Associativity {
        Associativity::Left
    }

    /// Whether an operator already on the stack must be emitted before
    /// `self` is pushed.
    #[must_use]
    pub(crate) const fn yields_to(self, stacked: Self) -> bool {
        match self.associativity() {
            Associativity::Left => stacked.precedence() >= self.precedence(),
        }
    }

    /// Apply the operator to `a` and `b`, with `a` the earlier operand.
    ///
    /// Division by zero and invalid powers follow IEEE-754 and produce
    /// infinities or NaN rather than failing.
    #[must_use]
    #[expect(clippy::float_arithmetic, reason = "operators are defined over f64")]
    pub fn apply(self, a: f64, b: f64) -> f64 {
        match self {
            Self::Add => a + b,
            Self::Sub => a - b,
            Self::Mul => a * b,
            Self::Div => a / b,
            Self::Pow => a.powf(b),
        }
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}
