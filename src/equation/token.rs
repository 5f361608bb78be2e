use std::str::FromStr;

use crate::equation::errors::{EvalError, ParseTokenError};

/// One of the four arithmetic operators of the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operator {
    Add,
    Sub,
    Mul,
    Div,
}

impl Operator {
    /// All operators, in the order children are generated.
    pub const ALL: [Operator; 4] = [Operator::Add, Operator::Sub, Operator::Mul, Operator::Div];

    pub fn symbol(self) -> char {
        match self {
            Operator::Add => '+',
            Operator::Sub => '-',
            Operator::Mul => '*',
            Operator::Div => '/',
        }
    }

    pub fn from_symbol(symbol: char) -> Option<Self> {
        match symbol {
            '+' => Some(Operator::Add),
            '-' | '−' => Some(Operator::Sub),
            '*' | 'x' | '×' => Some(Operator::Mul),
            '/' | '÷' => Some(Operator::Div),
            _ => None,
        }
    }
}

/// A single postfix token.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Token {
    Number(i64),
    Op(Operator),
}

impl Token {
    pub fn is_number(self) -> bool {
        matches!(self, Token::Number(_))
    }
}

impl From<Operator> for Token {
    fn from(op: Operator) -> Self {
        Token::Op(op)
    }
}

impl FromStr for Token {
    type Err = ParseTokenError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if let Ok(n) = trimmed.parse::<i64>() {
            return Ok(Token::Number(n));
        }

        let mut chars = trimmed.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) => Operator::from_symbol(c)
                .map(Token::Op)
                .ok_or_else(|| ParseTokenError(s.to_string())),
            _ => Err(ParseTokenError(s.to_string())),
        }
    }
}

/// An immutable postfix token sequence.
///
/// Extending an equation always produces a fresh sequence, so siblings
/// derived from the same parent never observe each other's tokens.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct Equation {
    tokens: Vec<Token>,
}

impl Equation {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns a copy of this equation with `token` appended.
    #[must_use]
    pub fn extended(&self, token: Token) -> Self {
        let mut tokens = Vec::with_capacity(self.tokens.len() + 1);
        tokens.extend_from_slice(&self.tokens);
        tokens.push(token);
        Self { tokens }
    }

    pub fn tokens(&self) -> &[Token] {
        &self.tokens
    }

    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    pub fn is_complete(&self) -> bool {
        super::is_complete(&self.tokens)
    }

    /// # Errors
    ///
    /// Returns the first pruning rule violated while evaluating, or
    /// [`EvalError::Incomplete`] if the sequence does not reduce to one value.
    pub fn evaluate(&self) -> Result<i64, EvalError> {
        super::evaluate(&self.tokens)
    }

    /// Postfix tokens rendered one string per token.
    pub fn to_strings(&self) -> Vec<String> {
        self.tokens.iter().map(ToString::to_string).collect()
    }

    /// Builds an equation from whitespace-separated postfix tokens, e.g. `"3 4 + 2 *"`.
    ///
    /// # Errors
    ///
    /// Returns an error naming the first piece that is neither an integer nor an operator.
    pub fn parse_postfix(input: &str) -> Result<Self, ParseTokenError> {
        Self::from_strs(input.split_whitespace())
    }

    /// # Errors
    ///
    /// Returns an error naming the first piece that is neither an integer nor an operator.
    pub fn from_strs<'a, I>(pieces: I) -> Result<Self, ParseTokenError>
    where
        I: IntoIterator<Item = &'a str>,
    {
        let tokens = pieces
            .into_iter()
            .map(str::parse)
            .collect::<Result<Vec<Token>, _>>()?;
        Ok(Self { tokens })
    }
}

impl From<Vec<Token>> for Equation {
    fn from(tokens: Vec<Token>) -> Self {
        Self { tokens }
    }
}
