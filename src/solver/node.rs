use log::{debug, trace};

use crate::equation::{Equation, Operator, Token, apply_token, is_valid_extension};

/// One search state: a postfix equation and the numbers it has not used yet.
///
/// Each node carries the operand stack of its equation so that operator
/// children are checked against the pruning rules as soon as they are formed.
/// Nodes are never mutated after construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Node {
    equation: Equation,
    remaining: Vec<i64>,
    stack: Vec<i64>,
}

/// Identity of a node's future: two nodes with the same key have identical subtrees.
pub(crate) type NodeKey = (Vec<i64>, Vec<i64>);

impl Node {
    /// The synthetic root: empty equation, every source number available.
    pub fn root(numbers: &[i64]) -> Self {
        Self {
            equation: Equation::new(),
            remaining: numbers.to_vec(),
            stack: Vec::new(),
        }
    }

    pub fn equation(&self) -> &Equation {
        &self.equation
    }

    pub fn remaining(&self) -> &[i64] {
        &self.remaining
    }

    pub fn is_complete(&self) -> bool {
        self.stack.len() == 1
    }

    /// The value of the equation, available only once it is complete.
    pub fn result(&self) -> Option<i64> {
        match self.stack.as_slice() {
            [value] => Some(*value),
            _ => None,
        }
    }

    pub fn is_leaf(&self) -> bool {
        self.remaining.is_empty() && self.stack.len() < 2
    }

    pub(crate) fn key(&self) -> NodeKey {
        let mut remaining = self.remaining.clone();
        remaining.sort_unstable();
        (self.stack.clone(), remaining)
    }

    /// Every legal one-token extension of this node.
    ///
    /// Number children come first, one per remaining number in order, followed
    /// by operator children in `+ - * /` order. Operator children whose
    /// application breaks a pruning rule are dropped.
    pub fn children(&self) -> Vec<Node> {
        let mut children = Vec::with_capacity(self.remaining.len() + Operator::ALL.len());

        for (i, &n) in self.remaining.iter().enumerate() {
            let mut remaining = self.remaining.clone();
            remaining.remove(i);
            let mut stack = self.stack.clone();
            stack.push(n);
            children.push(Node {
                equation: self.equation.extended(Token::Number(n)),
                remaining,
                stack,
            });
        }

        for op in Operator::ALL {
            let token = Token::Op(op);
            if !is_valid_extension(self.equation.tokens(), token) {
                continue;
            }

            let mut stack = self.stack.clone();
            if let Err(e) = apply_token(&mut stack, token) {
                trace!("Pruned '{} {}': {}", self.equation, op, e);
                continue;
            }

            children.push(Node {
                equation: self.equation.extended(token),
                remaining: self.remaining.clone(),
                stack,
            });
        }

        debug!(
            "Expanded '{}' into {} children",
            self.equation,
            children.len()
        );
        children
    }
}
