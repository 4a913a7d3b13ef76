//! Helpers over `serde_json::Value` shared by the vector and matrix codecs.

use serde_json::{Map, Value};

use crate::codec::{CodecError, DecodeOptions, Result, format_number, parse_number};

/// Stable lowercase label for a JSON node kind.
pub(crate) fn node_kind(value: &Value) -> &'static str {
	match value {
		Value::Null => "null",
		Value::Bool(_) => "bool",
		Value::Number(_) => "number",
		Value::String(_) => "string",
		Value::Array(_) => "array",
		Value::Object(_) => "object",
	}
}

/// Borrow the children of an array node.
pub(crate) fn array_items(value: &Value) -> Result<&[Value]> {
	match value {
		Value::Array(items) => Ok(items),
		other => Err(CodecError::MalformedDocument {
			expected: "array",
			got: node_kind(other),
		}),
	}
}

/// Children that are not JSON `null`, in document order.
pub(crate) fn non_null(items: &[Value]) -> impl Iterator<Item = &Value> {
	items.iter().filter(|item| !item.is_null())
}

/// Read one element node as a number.
pub(crate) fn element_value(value: &Value) -> Result<f64> {
	match value {
		Value::String(text) => parse_number(text),
		Value::Number(number) => number.as_f64().ok_or_else(|| CodecError::InvalidNumber { value: number.to_string() }),
		other => Err(CodecError::InvalidElement { got: node_kind(other) }),
	}
}

/// Build the string node for one element.
pub(crate) fn element_node(value: f64) -> Value {
	Value::String(format_number(value))
}

/// Empty child list with room for exactly `len` nodes.
pub(crate) fn reserve_array(len: usize) -> Result<Vec<Value>> {
	let mut items = Vec::new();
	items.try_reserve_exact(len).map_err(|_| CodecError::Allocation { elements: len })?;
	Ok(items)
}

/// Wrap `value` in a single-key object `{key: value}`.
pub(crate) fn keyed(key: &str, value: Value) -> Value {
	let mut object = Map::new();
	object.insert(key.to_owned(), value);
	Value::Object(object)
}

/// Fail when a decoded shape would exceed the configured element ceiling.
pub(crate) fn check_element_limit(count: usize, options: &DecodeOptions) -> Result<()> {
	if count > options.max_elements {
		return Err(CodecError::TooManyElements {
			count,
			max: options.max_elements,
		});
	}
	Ok(())
}

/// Look up the array stored under `key` in an object document.
///
/// A missing key, or a parent that is not an object, is [`CodecError::KeyNotFound`].
/// A key holding anything other than an array is [`CodecError::MalformedDocument`].
pub fn keyed_array<'a>(document: &'a Value, key: &str) -> Result<&'a Value> {
	let entry = document
		.as_object()
		.and_then(|object| object.get(key))
		.ok_or_else(|| CodecError::KeyNotFound { key: key.to_owned() })?;
	if !entry.is_array() {
		return Err(CodecError::MalformedDocument {
			expected: "array",
			got: node_kind(entry),
		});
	}
	Ok(entry)
}
