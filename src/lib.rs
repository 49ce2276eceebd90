//! # How one line of text becomes a typed value
//!
//! User's input: `(1 + 2) * 3`

//! ## Lexing
//!
//! The lexer walks the characters and groups them into tokens: numbers
//! `123`, punctuation `(`, `&&`, keywords `true`. Whitespace runs become
//! tokens too, so the lexer loses nothing; they are filtered out just before
//! parsing. A character the lexer cannot place becomes a `Bad` token plus a
//! diagnostic, and lexing simply continues on the next character.

//! ## Parsing
//!
//! The parser builds an untyped syntax tree out of the tokens using
//! recursive descent with precedence climbing — one function carrying the
//! minimum precedence it admits, instead of one function per grammar level.
//!
//! ``` markdown
//! * (Binary)
//! ├── group (Parenthesized)
//! │   └── + (Binary)
//! │       ├── 1 (Literal)
//! │       └── 2 (Literal)
//! └── 3 (Literal)
//! ```
//!
//! The parser also never gives up: a missing token is synthesized with a
//! diagnostic so that one typo still yields a tree and every further error
//! in the same line.

//! ## Binding
//!
//! The binder is the static-analysis pass. It walks the syntax tree,
//! resolves every operator token against the static types of its already
//! bound operands (`+` on two ints is `Addition`; `&&` on two bools is
//! `LogicalAnd`), and produces a typed bound tree. `1 + true` dies here
//! with a diagnostic, not at runtime.

//! ## Evaluating
//!
//! The evaluator folds the bound tree into a single value. If anything up
//! to binding reported a diagnostic, evaluation is skipped entirely; the
//! evaluator itself can only fail on division by zero.

pub mod cli;

mod binder;
mod error;
mod evaluator;
mod lexer;
mod parser;
mod value;
mod xev;

pub use error::{binder::BindError, evaluator::EvalError, lexer::LexError, parser::ParseError, Diagnostic, XevError};
pub use value::{Type, Value};
pub use xev::Xev;
