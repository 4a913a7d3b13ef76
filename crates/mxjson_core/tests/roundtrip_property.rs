#![allow(missing_docs)]

use mxjson::codec::{Matrix, Vector, deserialize_matrix, deserialize_vector, serialize_matrix, serialize_vector};
use proptest::prelude::*;

fn finite() -> impl Strategy<Value = f64> {
	prop_oneof![
		any::<f64>().prop_filter("finite", |value| value.is_finite()),
		-1.0e6..1.0e6_f64,
		-1.0e-12..1.0e-12_f64,
	]
}

proptest! {
	#![proptest_config(ProptestConfig::with_cases(200))]

	#[test]
	fn vector_roundtrip_is_bit_exact(values in proptest::collection::vec(finite(), 1..24)) {
		let vector = Vector::from_slice(&values).expect("vector builds");
		let text = serialize_vector(&vector).expect("vector serializes");
		let back = deserialize_vector(&text).expect("serialized vector decodes");
		prop_assert_eq!(back.capacity(), values.len());
		for (decoded, original) in back.as_slice().iter().zip(&values) {
			prop_assert_eq!(decoded.to_bits(), original.to_bits());
		}
	}

	#[test]
	fn matrix_roundtrip_is_bit_exact(rows in 1..6_usize, columns in 1..6_usize, seed in proptest::collection::vec(finite(), 36)) {
		let cells: Vec<Vec<f64>> = (0..rows).map(|row| seed[row * columns..(row + 1) * columns].to_vec()).collect();
		let matrix = Matrix::from_rows(&cells).expect("matrix builds");
		let text = serialize_matrix(&matrix).expect("matrix serializes");
		let back = deserialize_matrix(&text).expect("serialized matrix decodes");
		prop_assert_eq!(back.shape(), (rows, columns));
		for (decoded, original) in back.as_slice().iter().zip(matrix.as_slice()) {
			prop_assert_eq!(decoded.to_bits(), original.to_bits());
		}
	}
}
