//! Turns a line of source text into a flat stream of tokens.
//!
//! The lexer is a cursor over the characters of one input line. Each call to
//! [`Lexer::next_token`] consumes the longest run of characters that forms a
//! single token and returns it; after the end of the input every call
//! returns the zero-length end-of-input token, so the caller can drive the
//! lexer with a simple loop and stop at the first `Eof` it sees.
//!
//! Errors never abort lexing. A digit run that overflows a 32-bit integer
//! still yields a number token, an unknown character yields a `Bad` token,
//! and in both cases a diagnostic is recorded while the cursor keeps moving
//! forward. Forward progress on every call is what guarantees termination.

mod token;

use std::{iter::Peekable, str::CharIndices};

use TokenKind::*;
pub(crate) use token::*;

use crate::{
	error::{lexer::{LexError, LexErrorType}, Diagnostic},
	value::Value,
};

/// A lexer for one line of source text
pub(crate) struct Lexer<'a> {
	/// User input source line
	source:      &'a str,
	/// User input source line iterator
	chars:       Peekable<CharIndices<'a>>,
	/// Byte offset one past the last consumed character
	position:    usize,
	/// Lexing diagnostics, appended in detection order
	diagnostics: Vec<Diagnostic>,
}

impl<'a> Lexer<'a> {
	pub fn new(source: &'a str) -> Self {
		let chars = source.char_indices().peekable();

		Self { source, chars, position: 0, diagnostics: Vec::new() }
	}

	/// Scan the next token. Never fails: malformed input degrades to a
	/// token plus a recorded diagnostic.
	pub fn next_token(&mut self) -> Token<'a> {
		let Some(c) = self.peek() else {
			return Token::new(Eof, self.source.len(), "", None);
		};
		let start = self.position;

		if c.is_ascii_digit() {
			return self.number(start);
		}
		if c.is_whitespace() {
			while self.peek().is_some_and(|c| c.is_whitespace()) {
				self.advance();
			}
			return self.token(Whitespace, start, None);
		}
		if c.is_alphabetic() {
			while self.peek().is_some_and(|c| c.is_alphabetic()) {
				self.advance();
			}
			let kind = TokenKind::keyword_or_identifier(&self.source[start..self.position]);
			return self.token(kind, start, None);
		}

		self.advance();
		#[rustfmt::skip]
		let kind = match c {
			'+' => Plus,
			'-' => Minus,
			'*' => Star,
			'/' => Slash,
			'(' => OpenParen,
			')' => CloseParen,
			'!' => Bang,
			'&' => if self.match_next('&') { AmpersandAmpersand } else { self.bad(start, '&') },
			'|' => if self.match_next('|') { PipePipe } else { self.bad(start, '|') },
			c => self.bad(start, c),
		};

		self.token(kind, start, None)
	}

	/// Scan a number literal: the maximal run of digits. A run that does not
	/// fit in an `i32` reports a diagnostic and degrades to the value zero.
	fn number(&mut self, start: usize) -> Token<'a> {
		while self.peek().is_some_and(|c| c.is_ascii_digit()) {
			self.advance();
		}
		let text = &self.source[start..self.position];
		let value = text.parse().unwrap_or_else(|_| {
			self.report(start, LexErrorType::InvalidNumber(text.to_string()));
			0
		});
		Token::new(Number, start, text, Some(Value::Int(value)))
	}

	/// Report an unrecognized character. The cursor has already moved past
	/// it, so lexing resumes at the next character.
	fn bad(&mut self, start: usize, c: char) -> TokenKind {
		self.report(start, LexErrorType::UnrecognizedToken(c));
		Bad
	}

	fn report(&mut self, position: usize, r#type: LexErrorType) {
		self.diagnostics.push(LexError::new(position, r#type).into());
	}

	fn token(&self, kind: TokenKind, start: usize, value: Option<Value>) -> Token<'a> {
		Token::new(kind, start, &self.source[start..self.position], value)
	}

	/// Match the next character if it is the expected one
	fn match_next(&mut self, expected: char) -> bool {
		matches!(self.peek(), Some(c) if c == expected && { self.advance(); true })
	}

	/// Advance to the next character
	fn advance(&mut self) -> Option<char> {
		let (i, c) = self.chars.next()?;
		self.position = i + c.len_utf8();
		Some(c)
	}

	/// Peek the current character
	fn peek(&mut self) -> Option<char> { self.chars.peek().map(|&(_, c)| c) }

	pub fn into_diagnostics(self) -> Vec<Diagnostic> { self.diagnostics }
}
