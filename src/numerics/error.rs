// src/numerics/error.rs
// Error type shared by every matrix operation.

/// Errors that can occur during matrix construction, access and arithmetic.
///
/// Every failure is immediate and local: the operation that returns one of
/// these produced no partial result.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum MatrixError {
    /// Operand shapes are incompatible for the requested operation.
    #[error(
        "Size mismatch in {operation}: left operand is {left_rows}x{left_columns}, \
         right operand is {right_rows}x{right_columns}"
    )]
    SizeMismatch {
        operation: &'static str,
        left_rows: usize,
        left_columns: usize,
        right_rows: usize,
        right_columns: usize,
    },

    /// Source data is smaller than the matrix being built from it.
    #[error("Insufficient data: expected at least {expected} elements, got {actual}")]
    InsufficientData { expected: usize, actual: usize },

    /// `x` is the column, `y` is the row.
    #[error("Index ({x}, {y}) is out of range for a matrix with {columns} columns and {rows} rows")]
    IndexOutOfRange {
        x: usize,
        y: usize,
        columns: usize,
        rows: usize,
    },

    /// `rows * columns` does not fit in `usize`.
    #[error("Matrix dimensions {rows}x{columns} overflow the addressable element count")]
    DimensionOverflow { rows: usize, columns: usize },

    #[error("Matrix is singular (determinant {determinant}) and cannot be inverted")]
    Singular { determinant: f64 },

    #[error("Argument `{name}` is out of range ({value}): {reason}")]
    ArgumentOutOfRange {
        name: &'static str,
        value: f64,
        reason: &'static str,
    },
}

impl MatrixError {
    pub(crate) fn size_mismatch(
        operation: &'static str,
        left: (usize, usize),
        right: (usize, usize),
    ) -> Self {
        tracing::debug!(operation, ?left, ?right, "rejected matrix operation on incompatible shapes");
        MatrixError::SizeMismatch {
            operation,
            left_rows: left.0,
            left_columns: left.1,
            right_rows: right.0,
            right_columns: right.1,
        }
    }

    /// Number of elements in a `rows x columns` matrix.
    pub(crate) fn element_count(rows: usize, columns: usize) -> Result<usize> {
        rows.checked_mul(columns).ok_or_else(|| {
            tracing::debug!(rows, columns, "rejected matrix dimensions");
            MatrixError::DimensionOverflow { rows, columns }
        })
    }

    pub(crate) fn out_of_range(x: usize, y: usize, columns: usize, rows: usize) -> Self {
        MatrixError::IndexOutOfRange { x, y, columns, rows }
    }
}

/// Result alias used across the crate.
pub type Result<T, E = MatrixError> = std::result::Result<T, E>;
