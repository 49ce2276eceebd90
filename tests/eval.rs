#[cfg(test)]
mod tests {
	use std::path::PathBuf;

	use xev::{Xev, XevError};

	fn script(name: &str) -> PathBuf { PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests").join(name) }

	#[test]
	fn run_script_file() {
		let xev = Xev::new();
		assert!(xev.run_file(script("smoke.xev")).is_ok());
	}

	#[test]
	fn run_file_stops_at_the_first_bad_line() {
		let xev = Xev::new();
		let result = xev.run_file(script("type_error.xev"));
		assert!(matches!(result, Err(XevError::Diagnostics(1))));
	}

	#[test]
	fn run_file_missing_file() {
		let xev = Xev::new();
		assert!(matches!(xev.run_file(script("no_such_file.xev")), Err(XevError::InternalError(_))));
	}
}
