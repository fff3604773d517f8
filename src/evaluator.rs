//! Postfix evaluation over an operand stack.

use crate::error::{EvalError, InvalidReason};
use crate::postfix::{Postfix, PostfixToken};

/// Reduce a postfix sequence to a single value.
///
/// Operands are pushed in order. Each operator pops `b` and then `a` and
/// pushes `a op b`. Non-finite results are values, not errors: `5 0 /`
/// evaluates to positive infinity.
///
/// # Errors
/// Returns [`EvalError::InvalidExpression`] when an operator finds fewer than
/// two operands, or when the sequence does not leave exactly one value.
///
/// # Examples
///
/// ```rust
/// use shuntcalc::{Postfix, eval_postfix};
///
/// let postfix: Postfix = "3 4 2 * +".parse().unwrap_or_default();
/// assert_eq!(eval_postfix(&postfix), Ok(11.0));
/// ```
pub fn eval_postfix(postfix: &Postfix) -> Result<f64, EvalError> {
    let mut stack: Vec<f64> = Vec::with_capacity(postfix.len());
    for token in postfix {
        match *token {
            PostfixToken::Number(value) => stack.push(value),
            PostfixToken::Operator(operator) => {
                let (Some(b), Some(a)) = (stack.pop(), stack.pop()) else {
                    return Err(InvalidReason::MissingOperand { operator }.into());
                };
                stack.push(operator.apply(a, b));
            }
        }
    }
    match stack.as_slice() {
        [value] => Ok(*value),
        [] => Err(InvalidReason::Empty.into()),
        rest => Err(InvalidReason::LeftoverOperands { count: rest.len() }.into()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ErrorKind;
    use crate::operator::Operator;
    use crate::test_util::{num, op};
    use rstest::rstest;

    #[rstest]
    #[case(vec![num(3.0), num(4.0), op('+')], 7.0)]
    #[case(vec![num(9.0), num(4.0), op('-')], 5.0)]
    #[case(vec![num(6.0), num(4.0), op('/')], 1.5)]
    #[case(vec![num(2.0), num(10.0), op('^')], 1024.0)]
    #[case(vec![num(-2.5)], -2.5)]
    fn reduces_to_single_value(#[case] tokens: Vec<PostfixToken>, #[case] expected: f64) {
        assert_eq!(eval_postfix(&Postfix::new(tokens)), Ok(expected));
    }

    #[rstest]
    fn earlier_operand_is_left_hand_side() {
        let postfix = Postfix::new(vec![num(1.0), num(4.0), op('/')]);
        assert_eq!(eval_postfix(&postfix), Ok(0.25));
    }

    #[rstest]
    fn operator_without_operands_reports_the_operator() {
        let postfix = Postfix::new(vec![num(3.0), op('+')]);
        assert_eq!(
            eval_postfix(&postfix),
            Err(EvalError::InvalidExpression(InvalidReason::MissingOperand {
                operator: Operator::Add
            }))
        );
    }

    #[rstest]
    fn empty_sequence_is_invalid() {
        let err = eval_postfix(&Postfix::default()).err();
        assert_eq!(err, Some(EvalError::InvalidExpression(InvalidReason::Empty)));
    }

    #[rstest]
    fn leftover_operands_are_invalid() {
        let postfix = Postfix::new(vec![num(1.0), num(2.0), num(3.0), op('*')]);
        let err = eval_postfix(&postfix).err();
        assert_eq!(err.as_ref().map(EvalError::kind), Some(ErrorKind::InvalidExpression));
        assert_eq!(
            err,
            Some(EvalError::InvalidExpression(InvalidReason::LeftoverOperands { count: 2 }))
        );
    }

    #[rstest]
    fn zero_over_zero_is_nan_not_error() {
        let postfix = Postfix::new(vec![num(0.0), num(0.0), op('/')]);
        assert!(eval_postfix(&postfix).is_ok_and(f64::is_nan));
    }
}
