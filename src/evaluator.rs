//! Walks a bound tree and computes its runtime value.
//!
//! By the time an expression reaches the evaluator it is fully typed, so
//! evaluation is a pure fold over the tree: no names, no environment, no
//! token text. Operands evaluate left before right — an observable contract
//! should the language ever grow side-effecting operands — and the logical
//! operators evaluate both sides before combining, deliberately without
//! short-circuiting.

use anyhow::anyhow;

use crate::{
	binder::{BinaryOperatorKind::*, BoundExpression, UnaryOperatorKind::*},
	error::evaluator::EvalError,
	value::Value::{self, *},
};

/// An evaluator for one bound expression
pub(crate) struct Evaluator {
	root: BoundExpression,
}

impl Evaluator {
	pub fn new(root: BoundExpression) -> Self { Self { root } }

	/// Evaluate the whole expression to a single value.
	pub fn evaluate(&self) -> Result<Value, EvalError> { self.evaluate_expression(&self.root) }

	fn evaluate_expression(&self, expression: &BoundExpression) -> Result<Value, EvalError> {
		Ok(match expression {
			BoundExpression::Literal(value) => *value,
			BoundExpression::Unary { operator, operand } => {
				let value = self.evaluate_expression(operand)?;
				match (operator, value) {
					(Identity, Int(n)) => Int(n),
					(Negation, Int(n)) => Int(-n),
					(LogicalNegation, Bool(b)) => Bool(!b),
					(operator, value) => {
						return Err(anyhow!("unary operator {operator:?} applied to {value}").into());
					}
				}
			}
			BoundExpression::Binary { left, operator, right } => {
				let left = self.evaluate_expression(left)?;
				let right = self.evaluate_expression(right)?;
				match (operator, left, right) {
					(Addition, Int(l), Int(r)) => Int(l + r),
					(Subtraction, Int(l), Int(r)) => Int(l - r),
					(Multiplication, Int(l), Int(r)) => Int(l * r),
					(Division, Int(_), Int(0)) => return Err(EvalError::DivisionByZero),
					(Division, Int(l), Int(r)) => Int(l / r),
					(LogicalAnd, Bool(l), Bool(r)) => Bool(l && r),
					(LogicalOr, Bool(l), Bool(r)) => Bool(l || r),
					(operator, left, right) => {
						return Err(anyhow!("binary operator {operator:?} applied to {left} and {right}").into());
					}
				}
			}
		})
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::{binder::Binder, parser::SyntaxTree};

	/// Run an input through the whole pipeline, asserting it is clean of
	/// diagnostics, and return the evaluation result.
	fn eval(input: &str) -> Result<Value, EvalError> {
		let tree = SyntaxTree::parse(input);
		assert!(tree.diagnostics.is_empty(), "unexpected parse diagnostics for {input:?}");
		let mut binder = Binder::new();
		let bound = binder.bind(&tree.root);
		assert!(binder.into_diagnostics().is_empty(), "unexpected bind diagnostics for {input:?}");
		Evaluator::new(bound).evaluate()
	}

	#[test]
	fn evaluate_arithmetic() {
		assert_eq!(eval("1 + 2 * 3").unwrap(), Int(7));
		assert_eq!(eval("(1 + 2) * 3").unwrap(), Int(9));
		assert_eq!(eval("10 - 3 - 2").unwrap(), Int(5));
		assert_eq!(eval("12 / 4").unwrap(), Int(3));
		assert_eq!(eval("7 / 2").unwrap(), Int(3));
	}

	#[test]
	fn evaluate_unary() {
		assert_eq!(eval("-5").unwrap(), Int(-5));
		assert_eq!(eval("+5").unwrap(), Int(5));
		assert_eq!(eval("-1 + 2").unwrap(), Int(1));
		assert_eq!(eval("--3").unwrap(), Int(3));
	}

	#[test]
	fn evaluate_booleans() {
		assert_eq!(eval("true && false").unwrap(), Bool(false));
		assert_eq!(eval("true || false").unwrap(), Bool(true));
		assert_eq!(eval("!false").unwrap(), Bool(true));
		assert_eq!(eval("!true && false").unwrap(), Bool(false));
		assert_eq!(eval("true || true && false").unwrap(), Bool(true));
	}

	#[test]
	fn evaluate_division_by_zero() {
		assert!(matches!(eval("1 / 0"), Err(EvalError::DivisionByZero)));
		assert!(matches!(eval("1 / (2 - 2)"), Err(EvalError::DivisionByZero)));
	}

	#[test]
	fn logical_operators_evaluate_both_operands() {
		// Both operands of a logical operator are evaluated before the
		// result is combined; a failing right operand is never skipped.
		let left = Box::new(BoundExpression::Literal(Bool(false)));
		let divide = BoundExpression::Binary {
			left:     Box::new(BoundExpression::Literal(Int(1))),
			operator: Division,
			right:    Box::new(BoundExpression::Literal(Int(0))),
		};
		let and = BoundExpression::Binary { left, operator: LogicalAnd, right: Box::new(divide) };
		assert!(matches!(Evaluator::new(and).evaluate(), Err(EvalError::DivisionByZero)));
	}
}
