//! Precision-preserving JSON codec for fixed-shape numeric vectors and matrices.

/// Containers, codecs, numeric-string conversion, and decode options.
pub mod codec;
