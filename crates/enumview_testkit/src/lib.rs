//! Fixture and build-directory helpers shared by the enumview crates' tests.

use std::path::{Path, PathBuf};

/// Workspace root, two levels above any member crate.
pub fn workspace_root() -> PathBuf {
	let root = Path::new(env!("CARGO_MANIFEST_DIR")).join("../..");
	root.canonicalize().unwrap_or(root)
}

/// Snapshot fixture under `<workspace>/fixtures`.
pub fn fixture_path(name: &str) -> PathBuf {
	workspace_root().join("fixtures").join(name)
}

/// Snapshot fixture path as a command-line argument.
pub fn fixture_arg(name: &str) -> String {
	fixture_path(name).to_string_lossy().into_owned()
}

/// Cargo target directory, honouring `CARGO_TARGET_DIR`.
pub fn target_dir() -> PathBuf {
	std::env::var_os("CARGO_TARGET_DIR").map_or_else(|| workspace_root().join("target"), PathBuf::from)
}

/// Snapshot fixture parsed as raw JSON, for comparing against decoded images.
pub fn fixture_json(name: &str) -> serde_json::Value {
	let path = fixture_path(name);
	let text = std::fs::read_to_string(&path).unwrap_or_else(|err| panic!("snapshot {} is readable: {err}", path.display()));
	serde_json::from_str(&text).unwrap_or_else(|err| panic!("snapshot {} is valid json: {err}", path.display()))
}
