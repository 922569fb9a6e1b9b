//! Two-stack arithmetic evaluator
//!
//! This module implements the arithmetic engine: a single left-to-right scan over
//! a purely numeric expression with an explicit operand stack and operator stack.
//! Both stacks live in a bump arena so a reused engine does not touch the global
//! allocator once its stacks have grown.

use bumpalo::Bump;
use bumpalo::collections::Vec as BumpVec;

use crate::Real;
use crate::config::Associativity;
use crate::error::{ExprError, Result, StackKind};
use crate::eval::stack_ops::{BinaryOp, StackSymbol, char_to_stack_op, is_binary_operator};

/// Initial capacity for stacks (tuned for typical expressions)
const INITIAL_OP_CAPACITY: usize = 16;
const INITIAL_VALUE_CAPACITY: usize = 16;

/// Evaluate `expression` with the default associativity in a throwaway arena.
pub fn eval_iterative(expression: &str) -> Result<Real> {
    let arena = Bump::new();
    EvalEngine::new_in(&arena, Associativity::default()).eval(expression)
}

/// Reusable evaluation engine; the stacks are cleared but keep their capacity.
pub struct EvalEngine<'arena> {
    /// Pending operators and open parentheses
    op_stack: BumpVec<'arena, StackSymbol>,
    /// Operands and intermediate results
    value_stack: BumpVec<'arena, Real>,
    associativity: Associativity,
}

impl<'arena> EvalEngine<'arena> {
    /// Create an engine whose stacks are allocated in `arena`.
    pub fn new_in(arena: &'arena Bump, associativity: Associativity) -> Self {
        Self {
            op_stack: BumpVec::with_capacity_in(INITIAL_OP_CAPACITY, arena),
            value_stack: BumpVec::with_capacity_in(INITIAL_VALUE_CAPACITY, arena),
            associativity,
        }
    }

    pub fn associativity(&self) -> Associativity {
        self.associativity
    }

    /// Evaluate a fully numeric expression.
    ///
    /// The input must already be normalized: no whitespace and no variables.
    pub fn eval(&mut self, expression: &str) -> Result<Real> {
        self.op_stack.clear();
        self.value_stack.clear();

        let mut chars = expression.char_indices().peekable();
        while let Some((start, c)) = chars.next() {
            match c {
                '(' => self.op_stack.push(StackSymbol::Open),
                ')' => self.close_group()?,
                c if is_binary_operator(c) => self.push_operator(char_to_stack_op(c)?)?,
                c if is_literal_char(c) => {
                    let mut end = start + c.len_utf8();
                    while let Some(&(i, next)) = chars.peek() {
                        if !is_literal_char(next) {
                            break;
                        }
                        end = i + next.len_utf8();
                        chars.next();
                    }
                    let value: Real = expression[start..end].parse()?;
                    self.value_stack.push(value);
                }
                other => return Err(ExprError::InvalidOperator(other)),
            }
        }

        while let Some(symbol) = self.op_stack.pop() {
            self.reduce(symbol)?;
        }

        // Anything left beneath the top is ignored.
        self.pop_value()
    }

    /// Pop and apply operators until the matching open parenthesis is consumed.
    fn close_group(&mut self) -> Result<()> {
        loop {
            match self.op_stack.pop() {
                Some(StackSymbol::Open) => return Ok(()),
                Some(symbol) => self.reduce(symbol)?,
                None => return Err(ExprError::StackUnderflow(StackKind::Operator)),
            }
        }
    }

    fn push_operator(&mut self, incoming: BinaryOp) -> Result<()> {
        while let Some(&top) = self.op_stack.last() {
            if !self.reduces_before(top, incoming) {
                break;
            }
            self.op_stack.pop();
            self.reduce(top)?;
        }
        self.op_stack.push(StackSymbol::Binary(incoming));
        Ok(())
    }

    /// Whether the pending `top` must be applied before `incoming` is pushed.
    fn reduces_before(&self, top: StackSymbol, incoming: BinaryOp) -> bool {
        let StackSymbol::Binary(top) = top else {
            return false;
        };
        match self.associativity {
            Associativity::Stack => top.precedence() > incoming.precedence(),
            Associativity::Left => top.precedence() >= incoming.precedence(),
        }
    }

    /// Apply `symbol` to the top two operands and push the result.
    fn reduce(&mut self, symbol: StackSymbol) -> Result<()> {
        let right = self.pop_value()?;
        let left = self.pop_value()?;
        let result = symbol.operation()?.apply(left, right)?;
        self.value_stack.push(result);
        Ok(())
    }

    fn pop_value(&mut self) -> Result<Real> {
        self.value_stack
            .pop()
            .ok_or(ExprError::StackUnderflow(StackKind::Operand))
    }
}

fn is_literal_char(c: char) -> bool {
    c.is_ascii_digit() || c == '.'
}
