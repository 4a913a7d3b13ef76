use serde_json::Value;
use tracing::{debug, trace};

use crate::codec::document::{array_items, check_element_limit, element_node, element_value, keyed, keyed_array, non_null, reserve_array};
use crate::codec::{CodecError, DecodeOptions, Result, Vector};

/// Encode `vector` as compact JSON text such as `["1.5","2.5"]`.
pub fn serialize_vector(vector: &Vector) -> Result<String> {
	let document = vector_to_document(vector)?;
	Ok(serde_json::to_string(&document)?)
}

/// Build the JSON array form of `vector`: one numeric string per element, in index order.
pub fn vector_to_document(vector: &Vector) -> Result<Value> {
	let mut items = reserve_array(vector.capacity())?;
	items.extend(vector.as_slice().iter().copied().map(element_node));
	Ok(Value::Array(items))
}

/// Build `{key: [...]}` for embedding `vector` as one field of a larger document.
pub fn vector_to_keyed_document(key: &str, vector: &Vector) -> Result<Value> {
	Ok(keyed(key, vector_to_document(vector)?))
}

/// Decode JSON text into a vector using default options.
pub fn deserialize_vector(text: &str) -> Result<Vector> {
	deserialize_vector_with(text, &DecodeOptions::default())
}

/// Decode JSON text into a vector.
pub fn deserialize_vector_with(text: &str, options: &DecodeOptions) -> Result<Vector> {
	let document: Value = serde_json::from_str(text)?;
	vector_from_document_with(&document, options)
}

/// Build a vector from an array document using default options.
pub fn vector_from_document(document: &Value) -> Result<Vector> {
	vector_from_document_with(document, &DecodeOptions::default())
}

/// Build a vector from an array document.
///
/// Null entries are skipped: the capacity is the number of non-null entries, and values are packed
/// in document order. An empty or all-null array is [`CodecError::Empty`].
pub fn vector_from_document_with(document: &Value, options: &DecodeOptions) -> Result<Vector> {
	let items = array_items(document)?;

	let capacity = non_null(items).count();
	if capacity == 0 {
		return Err(CodecError::Empty { what: "vector" });
	}
	if capacity < items.len() {
		trace!(skipped = items.len() - capacity, "skipping null vector entries");
	}
	check_element_limit(capacity, options)?;

	let mut vector = Vector::new(capacity)?;
	for (index, item) in non_null(items).enumerate() {
		vector.set(index, element_value(item)?)?;
	}

	debug!(capacity, "decoded vector");
	Ok(vector)
}

/// Decode the array stored under `key` in an object document.
pub fn fetch_vector(key: &str, document: &Value) -> Result<Vector> {
	vector_from_document(keyed_array(document, key)?)
}

/// Decode the array under `key` and copy it into `destination`.
///
/// `destination` is left untouched on any failure, including a capacity mismatch.
pub fn fetch_vector_into(destination: &mut Vector, key: &str, document: &Value) -> Result<()> {
	let source = fetch_vector(key, document)?;
	destination.copy_from(&source)
}

#[cfg(test)]
mod tests;
