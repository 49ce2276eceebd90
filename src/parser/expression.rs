//! Untyped syntax tree nodes.
//!
//! An `Expression` is a strict tree: every node owns its children and its
//! operator tokens exclusively, and the kind of a node is the variant it was
//! built as. The tree stays untyped — `1 + true` parses fine here and is
//! only rejected later by the binder.
//!
//! [`Expression::children`] enumerates a node's direct children (tokens and
//! sub-expressions alike) in source order, so a renderer can walk the whole
//! tree without matching on concrete variants.

use Expression::*;

use crate::{lexer::Token, value::Value};

/// Expression AST nodes
#[derive(Debug)]
pub(crate) enum Expression<'a> {
	/// A literal with its token and, when known, its precomputed value.
	Literal { token: Token<'a>, value: Option<Value> },
	Unary { operator: Token<'a>, operand: Box<Expression<'a>> },
	Binary { left: Box<Expression<'a>>, operator: Token<'a>, right: Box<Expression<'a>> },
	Parenthesized { open: Token<'a>, expression: Box<Expression<'a>>, close: Token<'a> },
}

/// A direct child of a syntax node: either a leaf token or a nested
/// expression, in source order.
#[derive(Debug, Clone, Copy)]
pub(crate) enum Child<'a, 'e> {
	Token(&'e Token<'a>),
	Node(&'e Expression<'a>),
}

impl<'a> Expression<'a> {
	/// A literal whose value is whatever the token carries (numbers).
	pub fn literal(token: Token<'a>) -> Box<Self> { Box::new(Literal { value: token.value, token }) }

	/// A literal whose value the parser computed itself (boolean keywords).
	pub fn literal_with_value(token: Token<'a>, value: Value) -> Box<Self> {
		Box::new(Literal { token, value: Some(value) })
	}

	pub fn unary(operator: Token<'a>, operand: Box<Self>) -> Box<Self> { Box::new(Unary { operator, operand }) }

	pub fn binary(left: Box<Self>, operator: Token<'a>, right: Box<Self>) -> Box<Self> {
		Box::new(Binary { left, operator, right })
	}

	pub fn parenthesized(open: Token<'a>, expression: Box<Self>, close: Token<'a>) -> Box<Self> {
		Box::new(Parenthesized { open, expression, close })
	}

	/// The display name of this node's variant.
	pub fn kind_name(&self) -> &'static str {
		match self {
			Literal { .. } => "LiteralExpression",
			Unary { .. } => "UnaryExpression",
			Binary { .. } => "BinaryExpression",
			Parenthesized { .. } => "ParenthesizedExpression",
		}
	}

	/// Direct children in source order, tokens included.
	pub fn children(&self) -> Vec<Child<'a, '_>> {
		match self {
			Literal { token, .. } => vec![Child::Token(token)],
			Unary { operator, operand } => vec![Child::Token(operator), Child::Node(operand)],
			Binary { left, operator, right } => {
				vec![Child::Node(left), Child::Token(operator), Child::Node(right)]
			}
			Parenthesized { open, expression, close } => {
				vec![Child::Token(open), Child::Node(expression), Child::Token(close)]
			}
		}
	}
}

impl std::fmt::Display for Expression<'_> {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		match self {
			Literal { token, value } => match value {
				Some(value) => write!(f, "{value}"),
				None => write!(f, "{}", token.text),
			},
			Unary { operator, operand } => write!(f, "({} {operand})", operator.text),
			Binary { left, operator, right } => write!(f, "({} {left} {right})", operator.text),
			Parenthesized { expression, .. } => write!(f, "(group {expression})"),
		}
	}
}
