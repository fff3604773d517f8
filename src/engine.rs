//! Entry points composing tokenisation, conversion and evaluation.

use log::debug;

use crate::config::EvalConfig;
use crate::error::EvalError;
use crate::evaluator::eval_postfix;
use crate::postfix::{Postfix, check_syntax, convert};
use crate::tokenizer::tokenize;

/// Evaluates infix expressions under a fixed [`EvalConfig`].
///
/// The engine holds no state between calls; every evaluation allocates its
/// own stacks, so a single engine may be shared freely across threads.
#[derive(Debug, Clone, Copy, Default)]
pub struct Engine {
    config: EvalConfig,
}

impl Engine {
    #[must_use]
    pub const fn new(config: EvalConfig) -> Self {
        Self { config }
    }

    #[must_use]
    pub const fn config(&self) -> EvalConfig {
        self.config
    }

    /// Convert `expr` to postfix order.
    ///
    /// # Errors
    /// In strict mode, returns [`EvalError::Syntax`] for unknown characters
    /// or unbalanced parentheses. Permissive conversion never fails.
    pub fn to_postfix(&self, expr: &str) -> Result<Postfix, EvalError> {
        let tokens = tokenize(expr);
        if self.config.is_strict() {
            check_syntax(&tokens)?;
        }
        let postfix = convert(&tokens);
        debug!("converted {expr:?} to postfix {postfix}");
        Ok(postfix)
    }

    /// Evaluate `expr` to a single number.
    ///
    /// # Errors
    /// Returns [`EvalError::InvalidExpression`] for operator/operand
    /// mismatches (including empty input) and, in strict mode,
    /// [`EvalError::Syntax`] for malformed input.
    pub fn evaluate(&self, expr: &str) -> Result<f64, EvalError> {
        let postfix = self.to_postfix(expr)?;
        eval_postfix(&postfix)
    }
}

/// Evaluate `expression` with the default, permissive configuration.
///
/// # Errors
/// Returns [`EvalError::InvalidExpression`] when the expression does not
/// reduce to exactly one value.
///
/// # Examples
///
/// ```rust
/// use shuntcalc::evaluate;
///
/// assert_eq!(evaluate("(1+2)*3"), Ok(9.0));
/// assert!(evaluate("3+").is_err());
/// ```
pub fn evaluate(expression: &str) -> Result<f64, EvalError> {
    Engine::default().evaluate(expression)
}
