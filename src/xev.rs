//! The read loop and the glue between the pipeline stages.
//!
//! One line of input flows strictly left to right: lexer, parser, binder,
//! evaluator. Every stage is constructed fresh per line, so no state leaks
//! between inputs; the only thing that persists across lines is the REPL's
//! parse-tree toggle, which lives out here with the rest of the I/O.
//!
//! If any stage reported a diagnostic, evaluation does not run at all —
//! diagnostics are printed in detection order and the line is done. Runtime
//! errors (division by zero) are a separate class: they come out of the
//! evaluator as errors, not diagnostics.

use std::{fs::read_to_string, io::Write, path::Path};

use anyhow::Context;

use crate::{
	binder::Binder,
	error::XevError,
	evaluator::Evaluator,
	parser::{Child, Expression, SyntaxTree},
};

/// Xev is the main struct for the expression evaluator.
#[derive(Default)]
pub struct Xev {
	/// While set, the REPL prints the parse tree of every line.
	show_tree: bool,
}

impl Xev {
	/// Create a new Xev instance.
	pub fn new() -> Self { Self::default() }

	/// Evaluate a script file, one expression per line. Blank lines are
	/// skipped; the first line with diagnostics or a runtime error stops
	/// the run.
	pub fn run_file<P: AsRef<Path>>(&self, path: P) -> Result<(), XevError> {
		let source = read_to_string(path).context("Failed open source file")?;
		for line in source.lines() {
			let line = line.trim();
			if line.is_empty() {
				continue;
			}
			self.run(line)?;
		}
		Ok(())
	}

	/// Run the REPL prompt.
	pub fn run_prompt(&mut self) {
		let mut input = String::new();
		let stdin = std::io::stdin();
		loop {
			input.clear();
			print!("> ");
			if let Err(e) = std::io::stdout().flush() {
				eprintln!("Failed flush: {e}");
			}
			match stdin.read_line(&mut input) {
				Ok(0) => {
					println!("\nExited xev repl");
					break;
				}
				Ok(_) => {}
				Err(e) => {
					eprintln!("Failed read line: {e}");
					continue;
				}
			}
			let line = input.trim();
			if line.is_empty() {
				continue;
			}
			if line == "#showtree" {
				self.show_tree = !self.show_tree;
				println!("{}", if self.show_tree { "Showing parse trees." } else { "Not showing parse trees." });
				continue;
			}
			if let Err(e) = self.run(line) {
				eprintln!("Failed run prompt: {e}");
			}
		}
	}
}

impl Xev {
	/// Run one line through the pipeline, printing diagnostics or the value.
	fn run(&self, line: &str) -> Result<(), XevError> {
		let tree = SyntaxTree::parse(line);
		if self.show_tree {
			print!("{}", render_tree(&tree.root));
		}

		let mut binder = Binder::new();
		let bound = binder.bind(&tree.root);

		let mut diagnostics = tree.diagnostics;
		diagnostics.extend(binder.into_diagnostics());
		if !diagnostics.is_empty() {
			for diagnostic in &diagnostics {
				eprintln!("{diagnostic}");
			}
			return Err(XevError::Diagnostics(diagnostics.len()));
		}

		let value = Evaluator::new(bound).evaluate()?;
		println!("{value}");
		Ok(())
	}
}

/// Render a syntax tree with box-drawing markers, one node or token per
/// line. Walks the uniform child enumeration, so it needs to know nothing
/// about concrete node shapes.
fn render_tree(root: &Expression<'_>) -> String {
	let mut out = String::new();
	render_child(&mut out, Child::Node(root), "", true);
	out
}

fn render_child(out: &mut String, child: Child<'_, '_>, indent: &str, is_last: bool) {
	out.push_str(indent);
	out.push_str(if is_last { "└──" } else { "├──" });
	match child {
		Child::Token(token) => {
			out.push_str(&format!("{:?}", token.kind));
			if let Some(value) = token.value {
				out.push_str(&format!(" {value}"));
			}
			out.push('\n');
		}
		Child::Node(node) => {
			out.push_str(node.kind_name());
			out.push('\n');
			let children = node.children();
			let last = children.len().saturating_sub(1);
			let indent = format!("{indent}{}", if is_last { "    " } else { "│   " });
			for (i, child) in children.into_iter().enumerate() {
				render_child(out, child, &indent, i == last);
			}
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn diagnostics_suppress_evaluation() {
		let xev = Xev::new();
		for input in ["1 +", "(1", "1 + true", "@", "99999999999"] {
			match xev.run(input) {
				Err(XevError::Diagnostics(count)) => assert!(count >= 1),
				other => panic!("expected diagnostics for {input:?}, got {other:?}"),
			}
		}
	}

	#[test]
	fn type_mismatch_is_a_single_diagnostic() {
		assert!(matches!(Xev::new().run("1 + true"), Err(XevError::Diagnostics(1))));
	}

	#[test]
	fn runtime_errors_are_not_diagnostics() {
		assert!(matches!(Xev::new().run("1 / 0"), Err(XevError::Runtime(_))));
	}

	#[test]
	fn valid_lines_run_clean() {
		let xev = Xev::new();
		for input in ["1 + 2 * 3", "(1 + 2) * 3", "!true && false", "-1 + 2"] {
			assert!(xev.run(input).is_ok(), "expected {input:?} to run clean");
		}
	}

	#[test]
	fn render_tree_markers() {
		let tree = SyntaxTree::parse("1 + 2");
		let expected = [
			"└──BinaryExpression",
			"    ├──LiteralExpression",
			"    │   └──Number 1",
			"    ├──Plus",
			"    └──LiteralExpression",
			"        └──Number 2",
			"",
		]
		.join("\n");
		assert_eq!(render_tree(&tree.root), expected);
	}
}
