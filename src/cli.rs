use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "xev", after_long_help = "A single-line typed expression evaluator.")]
pub struct Cli {
	#[command(subcommand)]
	pub mode: Mode,
}

#[derive(Subcommand, Debug)]
pub enum Mode {
	/// Evaluate a script file, one expression per line
	File { path: PathBuf },
	/// Interactive prompt
	Repl,
}
