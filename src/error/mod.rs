pub mod binder;
pub mod evaluator;
pub mod lexer;
pub mod parser;

use self::{binder::BindError, evaluator::EvalError, lexer::LexError, parser::ParseError};

/// XevError is the top-level error type for the expression evaluator.
#[derive(thiserror::Error, Debug)]
pub enum XevError {
	/// Internal pipeline error, should never happen
	#[error("InternalError: {0}")]
	InternalError(#[from] anyhow::Error),
	/// At least one diagnostic was reported; the messages themselves have
	/// already been surfaced in detection order
	#[error("Generated {0} diagnostics")]
	Diagnostics(usize),
	/// Runtime errors encountered during evaluation
	#[error("Runtime error: {0}")]
	Runtime(#[from] EvalError),
}

/// A recoverable error found in the input, accumulated in detection order
/// (lexer first, then parser, then binder) and rendered as one fully
/// formatted sentence per entry.
#[derive(thiserror::Error, Debug)]
pub enum Diagnostic {
	#[error(transparent)]
	Lex(#[from] LexError),
	#[error(transparent)]
	Parse(#[from] ParseError),
	#[error(transparent)]
	Bind(#[from] BindError),
}
