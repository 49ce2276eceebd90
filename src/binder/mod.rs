//! Type checking and operator resolution.
//!
//! The binder walks the untyped syntax tree bottom-up and produces a
//! [`BoundExpression`]: operands are bound first, then the operator token is
//! resolved against their static types into a semantic operator kind. The
//! token text plays no further role after this point.
//!
//! Binding never aborts. When an operator is not defined for its operand
//! types, the binder reports one diagnostic and returns the already-bound
//! operand (the left one for binary operators) unchanged. Outer expressions
//! then keep binding against that operand's type, which surfaces further
//! genuine errors without cascading spurious ones.

mod bound;

pub(crate) use bound::*;

use crate::{
	error::{binder::BindError, Diagnostic},
	lexer::TokenKind,
	parser::Expression,
	value::{Type, Value},
};

/// A binder for one syntax tree
pub(crate) struct Binder {
	diagnostics: Vec<Diagnostic>,
}

impl Binder {
	pub fn new() -> Self { Self { diagnostics: Vec::new() } }

	pub fn bind(&mut self, expression: &Expression<'_>) -> BoundExpression {
		match expression {
			Expression::Literal { value, .. } => {
				// The parser supplies a value for every literal it builds;
				// a synthesized placeholder falls back to zero.
				BoundExpression::Literal(value.unwrap_or(Value::Int(0)))
			}
			Expression::Unary { operator, operand } => {
				let operand = self.bind(operand);
				match bind_unary_operator(operator.kind, operand.r#type()) {
					Some(kind) => BoundExpression::Unary { operator: kind, operand: Box::new(operand) },
					None => {
						self.report(BindError::UndefinedUnaryOperator {
							operator: operator.text.to_string(),
							operand:  operand.r#type(),
						});
						operand
					}
				}
			}
			Expression::Binary { left, operator, right } => {
				let left = self.bind(left);
				let right = self.bind(right);
				match bind_binary_operator(operator.kind, left.r#type(), right.r#type()) {
					Some(kind) => {
						BoundExpression::Binary { left: Box::new(left), operator: kind, right: Box::new(right) }
					}
					None => {
						self.report(BindError::UndefinedBinaryOperator {
							operator: operator.text.to_string(),
							left:     left.r#type(),
							right:    right.r#type(),
						});
						left
					}
				}
			}
			Expression::Parenthesized { expression, .. } => self.bind(expression),
		}
	}

	fn report(&mut self, error: BindError) { self.diagnostics.push(error.into()); }

	pub fn into_diagnostics(self) -> Vec<Diagnostic> { self.diagnostics }
}

/// Resolve a unary operator token against its operand type. `None` means
/// the operator is not defined for that type.
fn bind_unary_operator(kind: TokenKind, operand: Type) -> Option<UnaryOperatorKind> {
	match (kind, operand) {
		(TokenKind::Plus, Type::Int) => Some(UnaryOperatorKind::Identity),
		(TokenKind::Minus, Type::Int) => Some(UnaryOperatorKind::Negation),
		(TokenKind::Bang, Type::Bool) => Some(UnaryOperatorKind::LogicalNegation),
		_ => None,
	}
}

/// Resolve a binary operator token against its operand types. The four
/// arithmetic operators share the integer/integer check, the two logical
/// operators the boolean/boolean one.
fn bind_binary_operator(kind: TokenKind, left: Type, right: Type) -> Option<BinaryOperatorKind> {
	match (kind, left, right) {
		(TokenKind::Plus, Type::Int, Type::Int) => Some(BinaryOperatorKind::Addition),
		(TokenKind::Minus, Type::Int, Type::Int) => Some(BinaryOperatorKind::Subtraction),
		(TokenKind::Star, Type::Int, Type::Int) => Some(BinaryOperatorKind::Multiplication),
		(TokenKind::Slash, Type::Int, Type::Int) => Some(BinaryOperatorKind::Division),
		(TokenKind::AmpersandAmpersand, Type::Bool, Type::Bool) => Some(BinaryOperatorKind::LogicalAnd),
		(TokenKind::PipePipe, Type::Bool, Type::Bool) => Some(BinaryOperatorKind::LogicalOr),
		_ => None,
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::parser::SyntaxTree;

	fn bind(input: &str) -> (BoundExpression, Vec<Diagnostic>) {
		let tree = SyntaxTree::parse(input);
		assert!(tree.diagnostics.is_empty(), "unexpected parse diagnostics for {input:?}");
		let mut binder = Binder::new();
		let bound = binder.bind(&tree.root);
		(bound, binder.into_diagnostics())
	}

	#[test]
	fn bind_literals() {
		let (bound, diagnostics) = bind("42");
		assert!(diagnostics.is_empty());
		assert!(matches!(bound, BoundExpression::Literal(Value::Int(42))));

		let (bound, _) = bind("true");
		assert_eq!(bound.r#type(), Type::Bool);
	}

	#[test]
	fn bind_operators() {
		let (bound, diagnostics) = bind("1 + 2 * 3");
		assert!(diagnostics.is_empty());
		assert_eq!(bound.r#type(), Type::Int);
		assert!(matches!(bound, BoundExpression::Binary { operator: BinaryOperatorKind::Addition, .. }));

		let (bound, diagnostics) = bind("!true && false");
		assert!(diagnostics.is_empty());
		assert_eq!(bound.r#type(), Type::Bool);
	}

	#[test]
	fn bind_parenthesized_is_transparent() {
		let (bound, diagnostics) = bind("(1 + 2) * 3");
		assert!(diagnostics.is_empty());
		assert!(matches!(bound, BoundExpression::Binary { operator: BinaryOperatorKind::Multiplication, .. }));
	}

	#[test]
	fn bind_type_mismatch_reports_operator_and_types() {
		let (bound, diagnostics) = bind("1 + true");
		assert_eq!(diagnostics.len(), 1);
		let message = diagnostics[0].to_string();
		assert_eq!(message, "Binary operator '+' is not defined for types int and bool");

		// Recovery: the left operand comes back unchanged.
		assert!(matches!(bound, BoundExpression::Literal(Value::Int(1))));
	}

	#[test]
	fn bind_unary_type_mismatch() {
		let (bound, diagnostics) = bind("!1");
		assert_eq!(diagnostics.len(), 1);
		assert_eq!(diagnostics[0].to_string(), "Unary operator '!' is not defined for type int");
		assert!(matches!(bound, BoundExpression::Literal(Value::Int(1))));
	}

	#[test]
	fn bind_recovery_does_not_cascade() {
		// The inner mismatch is reported once; the outer `-` then sees the
		// recovered int operand and binds cleanly.
		let (bound, diagnostics) = bind("-(1 + true)");
		assert_eq!(diagnostics.len(), 1);
		assert!(matches!(bound, BoundExpression::Unary { operator: UnaryOperatorKind::Negation, .. }));
	}

	#[test]
	fn bind_placeholder_literal_defaults_to_zero() {
		let tree = SyntaxTree::parse("1 +");
		let mut binder = Binder::new();
		let bound = binder.bind(&tree.root);
		assert!(binder.into_diagnostics().is_empty());
		assert_eq!(bound.r#type(), Type::Int);
	}
}
