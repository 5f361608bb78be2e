use std::fmt;

use crate::equation::errors::EvalError;
use crate::equation::token::{Equation, Operator, Token};

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Token::Number(n) => write!(f, "{}", n),
            Token::Op(op) => write!(f, "{}", op),
        }
    }
}

/// Postfix form, tokens separated by single spaces.
impl fmt::Display for Equation {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for (i, token) in self.tokens().iter().enumerate() {
            if i > 0 {
                write!(f, " ")?;
            }
            write!(f, "{}", token)?;
        }
        Ok(())
    }
}

impl Equation {
    /// Renders the equation as a fully parenthesised infix string.
    ///
    /// Operands keep the order they were pushed in, matching evaluation:
    /// `3 4 -` renders as `(3-4)`, never `(4-3)`.
    ///
    /// # Errors
    ///
    /// Returns [`EvalError::InsufficientOperands`] if an operator lacks operands and
    /// [`EvalError::Incomplete`] if the equation does not reduce to a single term.
    pub fn to_infix(&self) -> Result<String, EvalError> {
        let mut stack: Vec<String> = Vec::with_capacity(self.len());

        for token in self.tokens() {
            match token {
                Token::Number(n) => stack.push(n.to_string()),
                Token::Op(op) => {
                    let (Some(b), Some(a)) = (stack.pop(), stack.pop()) else {
                        return Err(EvalError::InsufficientOperands);
                    };
                    stack.push(format!("({}{}{})", a, op, b));
                }
            }
        }

        match stack.len() {
            1 => stack.pop().ok_or(EvalError::Incomplete { remaining: 0 }),
            remaining => Err(EvalError::Incomplete { remaining }),
        }
    }
}
