/// A lexing diagnostic with the byte offset it was detected at.
#[derive(thiserror::Error, Debug)]
#[error("position {position}: {type}")]
pub struct LexError {
	/// The byte offset in the input line where the error occurred.
	position: usize,
	/// The type of lexing error.
	r#type:   LexErrorType,
}

impl LexError {
	pub fn new(position: usize, r#type: LexErrorType) -> Self { Self { position, r#type } }
}

/// Types of lexing errors.
#[derive(Debug)]
pub enum LexErrorType {
	/// A digit run that does not fit a 32-bit integer.
	InvalidNumber(String),
	/// A character with no token kind, or a lone `&`/`|`.
	UnrecognizedToken(char),
}

impl std::fmt::Display for LexErrorType {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		use LexErrorType::*;
		match self {
			InvalidNumber(text) => {
				write!(f, "Number '{text}' is not a valid 32-bit integer")
			}
			UnrecognizedToken(c) => {
				write!(f, "Unrecognized token '{c}'")
			}
		}
	}
}
