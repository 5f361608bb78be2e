use log::debug;

use crate::equation::errors::EvalError;
use crate::equation::token::{Operator, Token};

impl Operator {
    /// Applies the operator as `a OP b`, where `a` was pushed before `b`.
    ///
    /// # Errors
    ///
    /// Rejects applications that can never help reach a target:
    /// - subtraction with a zero or negative result
    /// - multiplication where either operand is 1
    /// - division by zero, by 1, of 1, by itself, or leaving a remainder
    ///
    /// and reports [`EvalError::Overflow`] if the result does not fit in an `i64`.
    pub fn apply(self, a: i64, b: i64) -> Result<i64, EvalError> {
        match self {
            Operator::Add => a.checked_add(b).ok_or(EvalError::Overflow),
            Operator::Sub => match a.checked_sub(b) {
                Some(diff) if diff > 0 => Ok(diff),
                Some(_) => Err(EvalError::NonPositiveResult),
                None => Err(EvalError::Overflow),
            },
            Operator::Mul => {
                if a == 1 || b == 1 {
                    Err(EvalError::TrivialMultiply)
                } else {
                    a.checked_mul(b).ok_or(EvalError::Overflow)
                }
            }
            Operator::Div => {
                if b == 0 || a == b || a == 1 || b == 1 {
                    return Err(EvalError::InvalidDivision);
                }
                match a.checked_rem(b) {
                    Some(0) => a.checked_div(b).ok_or(EvalError::Overflow),
                    Some(_) => Err(EvalError::InvalidDivision),
                    None => Err(EvalError::Overflow),
                }
            }
        }
    }
}

/// Pushes a number or reduces the top two stack entries with an operator.
///
/// On error the stack is left untouched.
pub(crate) fn apply_token(stack: &mut Vec<i64>, token: Token) -> Result<(), EvalError> {
    match token {
        Token::Number(n) => {
            stack.push(n);
            Ok(())
        }
        Token::Op(op) => {
            let len = stack.len();
            if len < 2 {
                return Err(EvalError::InsufficientOperands);
            }
            let (a, b) = (stack[len - 2], stack[len - 1]);
            let value = op.apply(a, b)?;
            stack.truncate(len - 2);
            stack.push(value);
            Ok(())
        }
    }
}

/// Whether appending `next` keeps every prefix with more numbers than operators.
///
/// The whole extended sequence is rescanned, so a sequence that was already
/// operator-starved is rejected no matter what is appended.
pub fn is_valid_extension(equation: &[Token], next: Token) -> bool {
    let mut numbers = 0usize;
    let mut operators = 0usize;

    for token in equation.iter().chain(std::iter::once(&next)) {
        if token.is_number() {
            numbers += 1;
        } else {
            operators += 1;
            if operators >= numbers {
                return false;
            }
        }
    }

    true
}

/// A postfix sequence is complete when it reduces to exactly one value.
pub fn is_complete(equation: &[Token]) -> bool {
    let numbers = equation.iter().filter(|t| t.is_number()).count();
    numbers >= 1 && numbers == equation.len() - numbers + 1
}

/// Evaluates a complete postfix sequence with an operand stack.
///
/// # Errors
///
/// - [`EvalError::InsufficientOperands`] if an operator appears with fewer than two operands
/// - the pruning error of the first operator application that is rejected
/// - [`EvalError::Incomplete`] if the stack does not end with exactly one value
pub fn evaluate(equation: &[Token]) -> Result<i64, EvalError> {
    let mut stack = Vec::with_capacity(equation.len());

    for &token in equation {
        if let Err(e) = apply_token(&mut stack, token) {
            debug!("Evaluation stopped at {}: {}", token, e);
            return Err(e);
        }
    }

    match stack.as_slice() {
        [value] => Ok(*value),
        other => Err(EvalError::Incomplete {
            remaining: other.len(),
        }),
    }
}

#[cfg(test)]
mod tests_inner_helpers {
    use super::apply_token;
    use crate::equation::{EvalError, Operator, Token};

    #[test]
    fn test_apply_token_reduces_top_two() {
        let mut stack = vec![9, 8, 2];
        assert!(apply_token(&mut stack, Token::Op(Operator::Div)).is_ok());
        assert_eq!(stack, vec![9, 4]);
    }

    #[test]
    fn test_apply_token_leaves_stack_on_error() {
        let mut stack = vec![6, 4];
        let result = apply_token(&mut stack, Token::Op(Operator::Div));
        assert_eq!(result, Err(EvalError::InvalidDivision));
        assert_eq!(stack, vec![6, 4]);
    }

    #[test]
    fn test_apply_token_needs_two_operands() {
        let mut stack = vec![3];
        let result = apply_token(&mut stack, Token::Op(Operator::Add));
        assert_eq!(result, Err(EvalError::InsufficientOperands));
        assert_eq!(stack, vec![3]);
    }
}
