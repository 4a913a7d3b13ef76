use std::fmt;

use crate::codec::{CodecError, Result, format_number};

/// Fixed-capacity vector of `f64` values.
#[derive(Debug, Clone, PartialEq)]
pub struct Vector {
	values: Box<[f64]>,
}

impl Vector {
	/// Create a zero-filled vector holding `capacity` elements.
	pub fn new(capacity: usize) -> Result<Self> {
		if capacity == 0 {
			return Err(CodecError::ZeroShape { rows: 1, columns: 0 });
		}
		Ok(Self { values: zeroed(capacity)? })
	}

	/// Create a vector holding a copy of `values`.
	pub fn from_slice(values: &[f64]) -> Result<Self> {
		let mut out = Self::new(values.len())?;
		out.values.copy_from_slice(values);
		Ok(out)
	}

	/// Number of elements.
	pub fn capacity(&self) -> usize {
		self.values.len()
	}

	/// Element at `index`, if in range.
	pub fn get(&self, index: usize) -> Option<f64> {
		self.values.get(index).copied()
	}

	/// Overwrite the element at `index`.
	pub fn set(&mut self, index: usize, value: f64) -> Result<()> {
		let len = self.values.len();
		let slot = self.values.get_mut(index).ok_or(CodecError::IndexOutOfRange { index, len })?;
		*slot = value;
		Ok(())
	}

	/// Borrow all elements in index order.
	pub fn as_slice(&self) -> &[f64] {
		&self.values
	}

	/// Copy every element of `source` into `self`; capacities must match.
	pub fn copy_from(&mut self, source: &Vector) -> Result<()> {
		if source.capacity() != self.capacity() {
			return Err(CodecError::ShapeMismatch {
				expected: (1, self.capacity()),
				got: (1, source.capacity()),
			});
		}
		self.values.copy_from_slice(&source.values);
		Ok(())
	}
}

impl fmt::Display for Vector {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "Vector({}) ", self.capacity())?;
		write_row(f, &self.values)
	}
}

/// Fixed-shape row-major matrix of `f64` values.
#[derive(Debug, Clone, PartialEq)]
pub struct Matrix {
	rows: usize,
	columns: usize,
	values: Box<[f64]>,
}

impl Matrix {
	/// Create a zero-filled `rows x columns` matrix.
	pub fn new(rows: usize, columns: usize) -> Result<Self> {
		if rows == 0 || columns == 0 {
			return Err(CodecError::ZeroShape { rows, columns });
		}
		let len = rows.checked_mul(columns).ok_or(CodecError::Allocation { elements: usize::MAX })?;
		Ok(Self {
			rows,
			columns,
			values: zeroed(len)?,
		})
	}

	/// Create a matrix from equally sized rows.
	pub fn from_rows<R: AsRef<[f64]>>(rows: &[R]) -> Result<Self> {
		let columns = rows.first().map_or(0, |row| row.as_ref().len());
		let mut out = Self::new(rows.len(), columns)?;
		for (index, row) in rows.iter().enumerate() {
			let row = row.as_ref();
			if row.len() != columns {
				return Err(CodecError::ShapeMismatch {
					expected: (rows.len(), columns),
					got: (rows.len(), row.len()),
				});
			}
			out.values[index * columns..(index + 1) * columns].copy_from_slice(row);
		}
		Ok(out)
	}

	/// Number of rows.
	pub fn rows(&self) -> usize {
		self.rows
	}

	/// Number of columns.
	pub fn columns(&self) -> usize {
		self.columns
	}

	/// Shape as `(rows, columns)`.
	pub fn shape(&self) -> (usize, usize) {
		(self.rows, self.columns)
	}

	/// Element at `(row, column)`, if in range.
	pub fn get(&self, row: usize, column: usize) -> Option<f64> {
		if row >= self.rows || column >= self.columns {
			return None;
		}
		self.values.get(row * self.columns + column).copied()
	}

	/// Overwrite the element at `(row, column)`.
	pub fn set(&mut self, row: usize, column: usize, value: f64) -> Result<()> {
		if row >= self.rows || column >= self.columns {
			return Err(CodecError::IndexOutOfRange {
				index: row.saturating_mul(self.columns).saturating_add(column),
				len: self.values.len(),
			});
		}
		self.values[row * self.columns + column] = value;
		Ok(())
	}

	/// Borrow one row, if in range.
	pub fn row(&self, row: usize) -> Option<&[f64]> {
		if row >= self.rows {
			return None;
		}
		Some(&self.values[row * self.columns..(row + 1) * self.columns])
	}

	/// Borrow all elements in row-major order.
	pub fn as_slice(&self) -> &[f64] {
		&self.values
	}

	/// Copy every element of `source` into `self`; shapes must match.
	pub fn copy_from(&mut self, source: &Matrix) -> Result<()> {
		if source.shape() != self.shape() {
			return Err(CodecError::ShapeMismatch {
				expected: self.shape(),
				got: source.shape(),
			});
		}
		self.values.copy_from_slice(&source.values);
		Ok(())
	}
}

impl fmt::Display for Matrix {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		writeln!(f, "Matrix({} x {})", self.rows, self.columns)?;
		for row in self.values.chunks(self.columns) {
			f.write_str("  ")?;
			write_row(f, row)?;
			writeln!(f)?;
		}
		Ok(())
	}
}

fn write_row(f: &mut fmt::Formatter<'_>, values: &[f64]) -> fmt::Result {
	f.write_str("[")?;
	for (index, value) in values.iter().enumerate() {
		if index > 0 {
			f.write_str(", ")?;
		}
		f.write_str(&format_number(*value))?;
	}
	f.write_str("]")
}

fn zeroed(len: usize) -> Result<Box<[f64]>> {
	let mut values = Vec::new();
	values.try_reserve_exact(len).map_err(|_| CodecError::Allocation { elements: len })?;
	values.resize(len, 0.0);
	Ok(values.into_boxed_slice())
}
