use crate::value::Type;

/// Binding diagnostics: an operator was applied to operands whose static
/// types it is not defined for. The offending operator is named by its
/// source text, the operands by their types.
#[derive(thiserror::Error, Debug)]
pub enum BindError {
	#[error("Unary operator '{operator}' is not defined for type {operand}")]
	UndefinedUnaryOperator { operator: String, operand: Type },
	#[error("Binary operator '{operator}' is not defined for types {left} and {right}")]
	UndefinedBinaryOperator { operator: String, left: Type, right: Type },
}
