use serde_json::Value;
use tracing::{debug, trace};

use crate::codec::document::{array_items, check_element_limit, element_node, element_value, keyed, keyed_array, non_null, reserve_array};
use crate::codec::{CodecError, DecodeOptions, Matrix, RaggedRows, Result};

/// Encode `matrix` as compact JSON text such as `[["1","2"],["3","4"]]`.
pub fn serialize_matrix(matrix: &Matrix) -> Result<String> {
	let document = matrix_to_document(matrix)?;
	Ok(serde_json::to_string(&document)?)
}

/// Build the nested JSON array form of `matrix`: one array per row, numeric strings in column order.
pub fn matrix_to_document(matrix: &Matrix) -> Result<Value> {
	let mut rows = reserve_array(matrix.rows())?;
	for row in matrix.as_slice().chunks(matrix.columns()) {
		let mut cells = reserve_array(matrix.columns())?;
		cells.extend(row.iter().copied().map(element_node));
		rows.push(Value::Array(cells));
	}
	Ok(Value::Array(rows))
}

/// Build `{key: [[...], ...]}` for embedding `matrix` as one field of a larger document.
pub fn matrix_to_keyed_document(key: &str, matrix: &Matrix) -> Result<Value> {
	Ok(keyed(key, matrix_to_document(matrix)?))
}

/// Decode JSON text into a matrix using default options.
pub fn deserialize_matrix(text: &str) -> Result<Matrix> {
	deserialize_matrix_with(text, &DecodeOptions::default())
}

/// Decode JSON text into a matrix.
pub fn deserialize_matrix_with(text: &str, options: &DecodeOptions) -> Result<Matrix> {
	let document: Value = serde_json::from_str(text)?;
	matrix_from_document_with(&document, options)
}

/// Build a matrix from a nested array document using default options.
pub fn matrix_from_document(document: &Value) -> Result<Matrix> {
	matrix_from_document_with(document, &DecodeOptions::default())
}

/// Build a matrix from a nested array document.
///
/// Null rows and null cells are skipped. The row count is the number of non-null rows; the column
/// count is the number of non-null cells in the first non-null row. Rows of a different width are
/// handled according to [`DecodeOptions::ragged_rows`].
pub fn matrix_from_document_with(document: &Value, options: &DecodeOptions) -> Result<Matrix> {
	let row_items = array_items(document)?;

	let mut rows = 0_usize;
	let mut columns = None;
	for row in non_null(row_items) {
		let cells = array_items(row)?;
		if columns.is_none() {
			columns = Some(non_null(cells).count());
		}
		rows += 1;
	}
	if rows == 0 {
		return Err(CodecError::Empty { what: "matrix rows" });
	}
	let columns = columns.unwrap_or_default();
	if columns == 0 {
		return Err(CodecError::Empty { what: "matrix columns" });
	}
	if rows < row_items.len() {
		trace!(skipped = row_items.len() - rows, "skipping null matrix rows");
	}

	let count = rows.checked_mul(columns).ok_or(CodecError::TooManyElements {
		count: usize::MAX,
		max: options.max_elements,
	})?;
	check_element_limit(count, options)?;

	let mut matrix = Matrix::new(rows, columns)?;
	for (row_index, row) in non_null(row_items).enumerate() {
		let cells = array_items(row)?;
		let width = non_null(cells).count();
		if width != columns {
			match options.ragged_rows {
				RaggedRows::Reject => {
					return Err(CodecError::RaggedRow {
						row: row_index,
						expected: columns,
						got: width,
					});
				}
				RaggedRows::Truncate => debug!(row = row_index, expected = columns, got = width, "truncating ragged matrix row"),
			}
		}

		for (column_index, cell) in non_null(cells).take(columns).enumerate() {
			matrix.set(row_index, column_index, element_value(cell)?)?;
		}
	}

	debug!(rows, columns, "decoded matrix");
	Ok(matrix)
}

/// Decode the nested array stored under `key` in an object document.
pub fn fetch_matrix(key: &str, document: &Value) -> Result<Matrix> {
	matrix_from_document(keyed_array(document, key)?)
}

/// Decode the nested array under `key` and copy it into `destination`.
///
/// `destination` is left untouched on any failure, including a shape mismatch.
pub fn fetch_matrix_into(destination: &mut Matrix, key: &str, document: &Value) -> Result<()> {
	let source = fetch_matrix(key, document)?;
	destination.copy_from(&source)
}
