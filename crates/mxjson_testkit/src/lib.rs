//! Shared test helpers for workspace crates.

use std::path::{Path, PathBuf};

/// Two-element vector whose decimal forms need full `f64` precision.
pub const SAMPLE_VECTOR: [f64; 2] = [0.0000000000045, 320.2519111111193];

/// Wire form of [`SAMPLE_VECTOR`].
pub const SAMPLE_VECTOR_TEXT: &str = r#"["0.0000000000045","320.2519111111193"]"#;

/// 2x2 matrix whose decimal forms need full `f64` precision.
pub const SAMPLE_MATRIX: [[f64; 2]; 2] = [[0.0000000000045, 320.2519111111193], [4.634254238956, 83.5793259741265]];

/// Wire form of [`SAMPLE_MATRIX`].
pub const SAMPLE_MATRIX_TEXT: &str = r#"[["0.0000000000045","320.2519111111193"],["4.634254238956","83.5793259741265"]]"#;

/// Resolve the workspace root path.
pub fn workspace_root() -> PathBuf {
	let manifest_dir = Path::new(env!("CARGO_MANIFEST_DIR"));
	manifest_dir
		.join("..")
		.join("..")
		.canonicalize()
		.unwrap_or_else(|_| manifest_dir.join("..").join(".."))
}

/// Resolve a fixture path under `<workspace>/fixtures`.
pub fn fixture_path(name: &str) -> PathBuf {
	workspace_root().join("fixtures").join(name)
}

/// Read a fixture file as UTF-8 text.
pub fn fixture_text(name: &str) -> String {
	let path = fixture_path(name);
	std::fs::read_to_string(&path).unwrap_or_else(|err| panic!("fixture {} unreadable: {err}", path.display()))
}

/// Read and parse a fixture file as JSON.
pub fn fixture_json(name: &str) -> serde_json::Value {
	serde_json::from_str(&fixture_text(name)).unwrap_or_else(|err| panic!("fixture {name} is not valid json: {err}"))
}
