use crate::codec::{CodecError, Result};

/// Render `value` as the shortest decimal text that parses back to the same bits.
///
/// The output never uses exponent notation, so `4.5e-12` renders as `0.0000000000045`.
/// Non-finite values render as `NaN`, `inf`, and `-inf`, which [`parse_number`] accepts.
pub fn format_number(value: f64) -> String {
	format!("{value}")
}

/// Parse decimal text into the nearest `f64`, rounding correctly.
pub fn parse_number(text: &str) -> Result<f64> {
	text.trim().parse::<f64>().map_err(|_| CodecError::InvalidNumber { value: text.to_owned() })
}
