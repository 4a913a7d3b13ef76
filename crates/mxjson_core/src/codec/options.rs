/// Handling for matrix rows whose non-null cell count differs from the first row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RaggedRows {
	/// Keep the first row's column count: drop extra cells, leave missing cells at `0.0`.
	#[default]
	Truncate,
	/// Fail with [`CodecError::RaggedRow`](crate::codec::CodecError::RaggedRow).
	Reject,
}

/// Knobs controlling document-to-container decoding.
#[derive(Debug, Clone, Copy)]
pub struct DecodeOptions {
	/// Matrix row-length policy.
	pub ragged_rows: RaggedRows,
	/// Maximum total element count a decoded container may hold.
	pub max_elements: usize,
}

impl Default for DecodeOptions {
	fn default() -> Self {
		Self {
			ragged_rows: RaggedRows::Truncate,
			max_elements: 1 << 24,
		}
	}
}

impl DecodeOptions {
	/// Preset that rejects ragged matrix rows.
	pub fn strict() -> Self {
		Self {
			ragged_rows: RaggedRows::Reject,
			..Self::default()
		}
	}
}
