use clap::Parser;
use xev::cli::*;

fn main() {
	let mut xev = xev::Xev::new();

	match Cli::parse().mode {
		Mode::File { path } => {
			if let Err(e) = xev.run_file(&path) {
				eprintln!("Failed run file: {e}");
			}
		}
		Mode::Repl => xev.run_prompt(),
	}
}
