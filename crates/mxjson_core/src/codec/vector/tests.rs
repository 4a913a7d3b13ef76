use mxjson_testkit::{SAMPLE_VECTOR, SAMPLE_VECTOR_TEXT};
use serde_json::{Value, json};

use crate::codec::{
	CodecError, DecodeOptions, Vector, deserialize_vector, deserialize_vector_with, fetch_vector, fetch_vector_into, serialize_vector, vector_from_document,
	vector_to_document, vector_to_keyed_document,
};

fn sample_vector() -> Vector {
	Vector::from_slice(&SAMPLE_VECTOR).expect("sample vector builds")
}

#[test]
fn serializes_as_array_of_strings() {
	let text = serialize_vector(&sample_vector()).expect("vector serializes");
	assert_eq!(text, SAMPLE_VECTOR_TEXT);
}

#[test]
fn deserializes_sample_exactly() {
	let vector = deserialize_vector(SAMPLE_VECTOR_TEXT).expect("sample text decodes");
	assert_eq!(vector.capacity(), 2);
	for (decoded, expected) in vector.as_slice().iter().zip(SAMPLE_VECTOR) {
		assert_eq!(decoded.to_bits(), expected.to_bits());
	}
}

#[test]
fn encoded_text_decodes_to_same_document() {
	let vector = sample_vector();
	let document = vector_to_document(&vector).expect("document builds");
	let text = serialize_vector(&vector).expect("vector serializes");
	let reparsed: Value = serde_json::from_str(&text).expect("output is valid json");
	assert_eq!(reparsed, document);
}

#[test]
fn null_entries_are_skipped_and_packed() {
	let vector = deserialize_vector(r#"[null, "1.5", null, "2.5"]"#).expect("null-tolerant decode");
	assert_eq!(vector.as_slice(), &[1.5, 2.5]);
}

#[test]
fn native_numbers_are_accepted() {
	let vector = deserialize_vector("[1.5, \"2.5\", 3]").expect("mixed elements decode");
	assert_eq!(vector.as_slice(), &[1.5, 2.5, 3.0]);
}

#[test]
fn native_numbers_keep_full_precision() {
	let literals = ["1.0715660391465826e-75", "-9.6439157120605518e-234", "0.30000000000000004", "320.2519111111193"];
	let vector = deserialize_vector(&format!("[{}]", literals.join(","))).expect("native numbers decode");
	for (decoded, literal) in vector.as_slice().iter().zip(literals) {
		let expected = literal.parse::<f64>().expect("literal parses");
		assert_eq!(decoded.to_bits(), expected.to_bits(), "native number {literal} lost precision");
	}
}

#[test]
fn empty_and_all_null_arrays_fail() {
	for text in ["[]", "[null,null]"] {
		let err = deserialize_vector(text).expect_err("empty input should fail");
		assert!(matches!(err, CodecError::Empty { what: "vector" }), "unexpected error for {text}: {err}");
	}
}

#[test]
fn object_document_is_malformed() {
	let err = deserialize_vector("{}").expect_err("object should fail");
	assert!(matches!(err, CodecError::MalformedDocument { expected: "array", got: "object" }));
}

#[test]
fn invalid_text_is_json_error() {
	let err = deserialize_vector("[\"1.5\"").expect_err("truncated text should fail");
	assert!(matches!(err, CodecError::Json(_)));
}

#[test]
fn bad_elements_fail_without_partial_output() {
	let err = deserialize_vector(r#"["1.5", "abc"]"#).expect_err("non-numeric string should fail");
	assert!(matches!(err, CodecError::InvalidNumber { ref value } if value == "abc"));

	let err = deserialize_vector(r#"["1.5", ["2.5"]]"#).expect_err("nested array should fail");
	assert!(matches!(err, CodecError::InvalidElement { got: "array" }));
}

#[test]
fn element_limit_is_enforced() {
	let options = DecodeOptions {
		max_elements: 2,
		..DecodeOptions::default()
	};
	let err = deserialize_vector_with(r#"["1","2","3"]"#, &options).expect_err("limit should fail");
	assert!(matches!(err, CodecError::TooManyElements { count: 3, max: 2 }));
	deserialize_vector_with(r#"["1",null,"3"]"#, &options).expect("nulls do not count toward the limit");
}

#[test]
fn keyed_document_wraps_array() {
	let vector = Vector::from_slice(&[1.5, 2.5]).expect("vector builds");
	let document = vector_to_keyed_document("weights", &vector).expect("fragment builds");
	assert_eq!(document, json!({"weights": ["1.5", "2.5"]}));
	assert_eq!(fetch_vector("weights", &document).expect("fragment fetches"), vector);
}

#[test]
fn fetch_reads_keyed_field() {
	let document = json!({"v": ["1.0", "2.0"], "other": 5});
	let vector = fetch_vector("v", &document).expect("keyed vector decodes");
	assert_eq!(vector.as_slice(), &[1.0, 2.0]);

	let err = fetch_vector("missing", &document).expect_err("missing key should fail");
	assert!(matches!(err, CodecError::KeyNotFound { ref key } if key == "missing"));

	let err = fetch_vector("other", &document).expect_err("scalar field should fail");
	assert!(matches!(err, CodecError::MalformedDocument { .. }));
}

#[test]
fn fetch_into_replaces_contents_in_place() {
	let document = json!({"v": ["1.0", "2.0"], "other": 5});
	let mut destination = Vector::from_slice(&[9.0, 9.0]).expect("destination builds");

	fetch_vector_into(&mut destination, "v", &document).expect("fetch into succeeds");
	assert_eq!(destination.as_slice(), &[1.0, 2.0]);

	let mut untouched = Vector::from_slice(&[9.0, 9.0]).expect("destination builds");
	let err = fetch_vector_into(&mut untouched, "missing", &document).expect_err("missing key should fail");
	assert!(matches!(err, CodecError::KeyNotFound { .. }));
	assert_eq!(untouched.as_slice(), &[9.0, 9.0]);
}

#[test]
fn fetch_into_rejects_capacity_mismatch() {
	let document = json!({"v": ["1.0", "2.0"]});
	let mut destination = Vector::from_slice(&[9.0, 9.0, 9.0]).expect("destination builds");
	let err = fetch_vector_into(&mut destination, "v", &document).expect_err("capacity mismatch should fail");
	assert!(matches!(err, CodecError::ShapeMismatch { expected: (1, 3), got: (1, 2) }));
	assert_eq!(destination.as_slice(), &[9.0, 9.0, 9.0]);
}

#[test]
fn document_is_borrowed_not_consumed() {
	let document = json!(["4", null, "5"]);
	let first = vector_from_document(&document).expect("first decode");
	let second = vector_from_document(&document).expect("document still usable");
	assert_eq!(first, second);
}
