use std::path::PathBuf;
use std::process::{Command, Output};
use std::sync::OnceLock;

use enumview_testkit::{fixture_arg, target_dir};

static ENUMVIEW: OnceLock<PathBuf> = OnceLock::new();

/// Run the binary with `args`, capturing its output.
pub(crate) fn run_enumview(args: &[&str]) -> Output {
	Command::new(enumview()).args(args).output().expect("enumview runs")
}

/// Run `command` against a snapshot fixture with trailing `extra` flags.
pub(crate) fn run_on_fixture(command: &str, fixture: &str, extra: &[&str]) -> Output {
	let path = fixture_arg(fixture);
	let mut args = vec![command, path.as_str()];
	args.extend_from_slice(extra);
	run_enumview(&args)
}

/// Run the binary and parse its stdout as one JSON document.
pub(crate) fn run_enumview_json(args: &[&str]) -> serde_json::Value {
	let output = run_enumview(args);
	assert!(output.status.success(), "enumview {args:?} exited with {}: {}", output.status, String::from_utf8_lossy(&output.stderr));
	serde_json::from_slice(&output.stdout).expect("stdout is one json document")
}

/// `show --json` tree of one variable in a fixture.
pub(crate) fn show_json(fixture: &str, var: &str, extra: &[&str]) -> serde_json::Value {
	let path = fixture_arg(fixture);
	let mut args = vec!["show", path.as_str(), "--var", var, "--json"];
	args.extend_from_slice(extra);
	let mut json = run_enumview_json(&args);
	json["values"][0].take()
}

fn enumview() -> &'static PathBuf {
	ENUMVIEW.get_or_init(|| {
		if let Some(path) = std::env::var_os("CARGO_BIN_EXE_enumview") {
			return PathBuf::from(path);
		}

		let status = Command::new("cargo")
			.current_dir(env!("CARGO_MANIFEST_DIR"))
			.args(["build", "--quiet", "--package", "enumview_cli", "--bin", "enumview"])
			.status()
			.expect("cargo build runs");
		assert!(status.success(), "building the enumview binary failed");

		target_dir().join("debug").join(format!("enumview{}", std::env::consts::EXE_SUFFIX))
	})
}
