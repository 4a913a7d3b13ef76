mod document;
mod error;
mod matrix;
mod number;
mod options;
mod value;
mod vector;

/// Keyed array lookup inside object documents.
pub use document::keyed_array;
/// Error and result aliases.
pub use error::{CodecError, Result};
/// Matrix codec entry points.
pub use matrix::{
	deserialize_matrix, deserialize_matrix_with, fetch_matrix, fetch_matrix_into, matrix_from_document, matrix_from_document_with, matrix_to_document,
	matrix_to_keyed_document, serialize_matrix,
};
/// Exact number <-> decimal text conversion.
pub use number::{format_number, parse_number};
/// Decode configuration.
pub use options::{DecodeOptions, RaggedRows};
/// Fixed-shape numeric containers.
pub use value::{Matrix, Vector};
/// Vector codec entry points.
pub use vector::{
	deserialize_vector, deserialize_vector_with, fetch_vector, fetch_vector_into, serialize_vector, vector_from_document, vector_from_document_with,
	vector_to_document, vector_to_keyed_document,
};
