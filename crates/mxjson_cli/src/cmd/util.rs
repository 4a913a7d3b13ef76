use std::path::{Path, PathBuf};

use mxjson::codec::CodecError;
use serde_json::Value;
use thiserror::Error;
use tracing_subscriber::EnvFilter;

/// CLI result type.
pub type Result<T> = std::result::Result<T, CliError>;

/// Errors surfaced by CLI commands.
#[derive(Debug, Error)]
pub enum CliError {
	/// Input could not be read.
	#[error("read {}: {source}", path.display())]
	Read {
		/// Input path (`-` for stdin).
		path: PathBuf,
		/// Underlying IO failure.
		source: std::io::Error,
	},
	/// Input text is not valid JSON, or output could not be rendered.
	#[error("json: {0}")]
	Json(#[from] serde_json::Error),
	/// Codec rejected the document.
	#[error(transparent)]
	Codec(#[from] CodecError),
}

/// Container shape selected on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum Kind {
	/// Matrix when the first non-null element is an array, vector otherwise.
	Auto,
	/// Flat array of numbers.
	Vector,
	/// Array of row arrays.
	Matrix,
}

/// Concrete container shape a document is decoded as.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Shape {
	Vector,
	Matrix,
}

/// Resolve `kind` against the document about to be decoded.
pub(crate) fn resolve_kind(kind: Kind, document: &Value) -> Shape {
	match kind {
		Kind::Vector => Shape::Vector,
		Kind::Matrix => Shape::Matrix,
		Kind::Auto => {
			let first = document.as_array().and_then(|items| items.iter().find(|item| !item.is_null()));
			if first.is_some_and(Value::is_array) { Shape::Matrix } else { Shape::Vector }
		}
	}
}

/// Read the whole input from `path`, or stdin when `path` is absent or `-`.
pub(crate) fn read_input(path: Option<&Path>) -> Result<String> {
	match path {
		Some(path) if path != Path::new("-") => std::fs::read_to_string(path).map_err(|source| CliError::Read {
			path: path.to_path_buf(),
			source,
		}),
		_ => std::io::read_to_string(std::io::stdin()).map_err(|source| CliError::Read {
			path: PathBuf::from("-"),
			source,
		}),
	}
}

/// Parse input text as a JSON document.
pub(crate) fn parse_document(text: &str) -> Result<Value> {
	Ok(serde_json::from_str(text)?)
}

/// Print a serializable payload as pretty JSON.
pub(crate) fn emit_json<T: serde::Serialize>(payload: &T) -> Result<()> {
	println!("{}", serde_json::to_string_pretty(payload)?);
	Ok(())
}

/// Install the stderr log subscriber.
pub(crate) fn init_tracing(verbose: bool) {
	let default = if verbose { "debug" } else { "warn" };
	let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
	let _ = tracing_subscriber::fmt()
		.with_env_filter(env_filter)
		.with_writer(std::io::stderr)
		.with_target(false)
		.try_init();
}
