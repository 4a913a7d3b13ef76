use std::path::PathBuf;

use mxjson::codec::{DecodeOptions, RaggedRows, keyed_array, matrix_from_document_with, vector_from_document_with};
use tracing::debug;

use crate::cmd::util::{Kind, Result, Shape, emit_json, parse_document, read_input, resolve_kind};

#[derive(clap::Args)]
pub struct Args {
	/// Input file; `-` or omitted reads stdin.
	pub input: Option<PathBuf>,
	#[arg(long, value_enum, default_value_t = Kind::Auto)]
	pub kind: Kind,
	/// Decode the array stored under this key of an object document.
	#[arg(long)]
	pub key: Option<String>,
	/// Fail on matrix rows whose width differs from the first row.
	#[arg(long = "strict-rows")]
	pub strict_rows: bool,
	#[arg(long = "max-elements")]
	pub max_elements: Option<usize>,
	#[arg(long)]
	pub json: bool,
}

/// Decode a vector or matrix and print it.
pub fn run(args: Args) -> Result<()> {
	let Args {
		input,
		kind,
		key,
		strict_rows,
		max_elements,
		json,
	} = args;

	let document = parse_document(&read_input(input.as_deref())?)?;
	let target = match key.as_deref() {
		Some(key) => keyed_array(&document, key)?,
		None => &document,
	};

	let mut options = DecodeOptions::default();
	if strict_rows {
		options.ragged_rows = RaggedRows::Reject;
	}
	if let Some(max_elements) = max_elements {
		options.max_elements = max_elements;
	}

	let shape = resolve_kind(kind, target);
	debug!(?shape, key = key.as_deref(), ?options, "decoding document");

	match shape {
		Shape::Matrix => {
			let matrix = matrix_from_document_with(target, &options)?;
			if json {
				let values = (0..matrix.rows()).filter_map(|row| matrix.row(row)).map(<[f64]>::to_vec).collect();
				return emit_json(&DecodeJson {
					kind: "matrix",
					shape: vec![matrix.rows(), matrix.columns()],
					values: ValuesJson::Matrix(values),
				});
			}
			print!("{matrix}");
		}
		Shape::Vector => {
			let vector = vector_from_document_with(target, &options)?;
			if json {
				return emit_json(&DecodeJson {
					kind: "vector",
					shape: vec![vector.capacity()],
					values: ValuesJson::Vector(vector.as_slice().to_vec()),
				});
			}
			println!("{vector}");
		}
	}

	Ok(())
}

#[derive(serde::Serialize)]
#[serde(untagged)]
enum ValuesJson {
	Vector(Vec<f64>),
	Matrix(Vec<Vec<f64>>),
}

#[derive(serde::Serialize)]
struct DecodeJson {
	kind: &'static str,
	shape: Vec<usize>,
	values: ValuesJson,
}
