/// Errors that can occur while evaluating a bound expression.
///
/// These are fatal for the current line, not diagnostics: they terminate the
/// evaluation and are reported by the caller, never appended to the
/// diagnostic list.
#[derive(thiserror::Error, Debug)]
pub enum EvalError {
	/// Integer division with a zero divisor. Not statically detectable, and
	/// the language has no expression that could recover from it.
	#[error("Division by zero")]
	DivisionByZero,
	/// A bound node whose operand values contradict its resolved operator
	/// kind. Unreachable given a correct binder.
	#[error("InternalError: {0}")]
	InternalError(#[from] anyhow::Error),
}
