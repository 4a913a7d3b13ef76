use thiserror::Error;

/// Crate-local result type.
pub type Result<T> = std::result::Result<T, CodecError>;

/// Errors produced while building, encoding, decoding, or copying containers.
#[derive(Debug, Error)]
pub enum CodecError {
	/// Input text is not valid JSON.
	#[error("json: {0}")]
	Json(#[from] serde_json::Error),
	/// Document node has the wrong JSON type for its position.
	#[error("malformed document: expected {expected}, got {got}")]
	MalformedDocument {
		/// Expected JSON node kind.
		expected: &'static str,
		/// Actual JSON node kind.
		got: &'static str,
	},
	/// Array was empty or held only null entries.
	#[error("empty {what}: no non-null entries")]
	Empty {
		/// Which dimension came up empty.
		what: &'static str,
	},
	/// Object document has no entry under the requested key.
	#[error("key not found: {key}")]
	KeyNotFound {
		/// Requested key.
		key: String,
	},
	/// String element could not be read as a decimal number.
	#[error("invalid number: {value:?}")]
	InvalidNumber {
		/// Offending element text.
		value: String,
	},
	/// Non-null element is neither a numeric string nor a JSON number.
	#[error("invalid element: expected numeric string, got {got}")]
	InvalidElement {
		/// Actual JSON node kind.
		got: &'static str,
	},
	/// Matrix row length differs from the first row under strict decoding.
	#[error("ragged matrix row {row}: expected {expected} columns, got {got}")]
	RaggedRow {
		/// Zero-based index among non-null rows.
		row: usize,
		/// Column count taken from the first row.
		expected: usize,
		/// Non-null cell count of this row.
		got: usize,
	},
	/// Container shape with a zero dimension was requested.
	#[error("container shape must be non-zero (rows={rows}, columns={columns})")]
	ZeroShape {
		/// Requested rows (1 for vectors).
		rows: usize,
		/// Requested columns or capacity.
		columns: usize,
	},
	/// Decoded shape exceeded the configured element ceiling.
	#[error("too many elements: count={count}, max={max}")]
	TooManyElements {
		/// Requested element count.
		count: usize,
		/// Maximum permitted element count.
		max: usize,
	},
	/// Buffer for a container or document could not be allocated.
	#[error("allocation failed for {elements} elements")]
	Allocation {
		/// Requested element count.
		elements: usize,
	},
	/// Element index outside the container bounds.
	#[error("index {index} out of range for length {len}")]
	IndexOutOfRange {
		/// Flattened element index.
		index: usize,
		/// Total element count.
		len: usize,
	},
	/// Copy between containers of different shape.
	#[error("shape mismatch: expected {expected:?}, got {got:?}")]
	ShapeMismatch {
		/// Destination shape as `(rows, columns)`.
		expected: (usize, usize),
		/// Source shape as `(rows, columns)`.
		got: (usize, usize),
	},
}
