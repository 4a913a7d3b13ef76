use std::path::PathBuf;

use mxjson::codec::{matrix_from_document, matrix_to_document, matrix_to_keyed_document, vector_from_document, vector_to_document, vector_to_keyed_document};

use crate::cmd::util::{Kind, Result, Shape, parse_document, read_input, resolve_kind};

#[derive(clap::Args)]
pub struct Args {
	/// Input file; `-` or omitted reads stdin.
	pub input: Option<PathBuf>,
	#[arg(long, value_enum, default_value_t = Kind::Auto)]
	pub kind: Kind,
	/// Wrap the output as `{KEY: [...]}`.
	#[arg(long)]
	pub key: Option<String>,
}

/// Re-encode numbers or numeric strings into the string-element wire format.
pub fn run(args: Args) -> Result<()> {
	let Args { input, kind, key } = args;

	let document = parse_document(&read_input(input.as_deref())?)?;
	let encoded = match resolve_kind(kind, &document) {
		Shape::Matrix => {
			let matrix = matrix_from_document(&document)?;
			match key.as_deref() {
				Some(key) => matrix_to_keyed_document(key, &matrix)?,
				None => matrix_to_document(&matrix)?,
			}
		}
		Shape::Vector => {
			let vector = vector_from_document(&document)?;
			match key.as_deref() {
				Some(key) => vector_to_keyed_document(key, &vector)?,
				None => vector_to_document(&vector)?,
			}
		}
	};

	println!("{}", serde_json::to_string(&encoded)?);
	Ok(())
}
