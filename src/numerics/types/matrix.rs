// src/numerics/types/matrix.rs
// Variable-size matrix of f64 values.

use core::fmt;
use core::ops::{Add, Index, IndexMut, Mul, Sub};
use serde::{Deserialize, Serialize};

use crate::numerics::error::{MatrixError, Result};
use crate::numerics::types::capability::{self, MatrixLike};

/// Dense matrix whose shape is chosen at runtime.
///
/// Storage is row-major and always holds exactly `row_size * column_size`
/// values. The shape never changes after construction; cells are mutable
/// through [`Matrix::set`] or `IndexMut`.
///
/// Indexing follows the crate-wide `(x, y)` convention: `x` is the column,
/// `y` is the row.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(try_from = "MatrixRepr", into = "MatrixRepr")]
pub struct Matrix {
    row_size: usize,
    column_size: usize,
    data: Vec<f64>,
}

#[derive(Serialize, Deserialize)]
struct MatrixRepr {
    rows: usize,
    columns: usize,
    data: Vec<f64>,
}

impl TryFrom<MatrixRepr> for Matrix {
    type Error = MatrixError;

    fn try_from(repr: MatrixRepr) -> Result<Self> {
        Matrix::new(repr.rows, repr.columns, &repr.data)
    }
}

impl From<Matrix> for MatrixRepr {
    fn from(matrix: Matrix) -> Self {
        MatrixRepr {
            rows: matrix.row_size,
            columns: matrix.column_size,
            data: matrix.data,
        }
    }
}

impl Matrix {
    /// Build a `rows x columns` matrix from row-major `data`.
    ///
    /// Fails with [`MatrixError::InsufficientData`] when `data` holds fewer
    /// than `rows * columns` values, and with
    /// [`MatrixError::DimensionOverflow`] when that product does not fit in
    /// `usize`. Trailing extra values are ignored.
    ///
    /// # Examples
    /// ```
    /// use glmatrix::Matrix;
    ///
    /// let m = Matrix::new(2, 3, &[1.0, 2.0, 3.0, 4.0, 5.0, 6.0]).unwrap();
    /// // (x, y) = (column, row)
    /// assert_eq!(m[(2, 0)], 3.0);
    /// assert_eq!(m[(0, 1)], 4.0);
    /// ```
    pub fn new(rows: usize, columns: usize, data: &[f64]) -> Result<Self> {
        let expected = MatrixError::element_count(rows, columns)?;
        if data.len() < expected {
            return Err(MatrixError::InsufficientData {
                expected,
                actual: data.len(),
            });
        }
        Ok(Self::from_parts(rows, columns, data[..expected].to_vec()))
    }

    /// Caller guarantees `data.len() == rows * columns`.
    pub(crate) fn from_parts(rows: usize, columns: usize, data: Vec<f64>) -> Self {
        debug_assert_eq!(Some(data.len()), rows.checked_mul(columns));
        Self {
            row_size: rows,
            column_size: columns,
            data,
        }
    }

    /// # Panics
    ///
    /// When `rows * columns` overflows `usize`.
    pub fn zeros(rows: usize, columns: usize) -> Self {
        match MatrixError::element_count(rows, columns) {
            Ok(len) => Self::from_parts(rows, columns, vec![0.0; len]),
            Err(err) => panic!("{}", err),
        }
    }

    pub fn identity(size: usize) -> Self {
        let mut m = Self::zeros(size, size);
        for i in 0..size {
            m.data[i * size + i] = 1.0;
        }
        m
    }

    /// Adopt a 2D array whose **first dimension is the column**:
    /// `grid[x][y]` becomes element `(x, y)`. The column count is
    /// `grid.len()` and the row count is the length of the first column.
    ///
    /// Empty or ragged input fails with [`MatrixError::InsufficientData`].
    pub fn from_columns<S: AsRef<[f64]>>(grid: &[S]) -> Result<Self> {
        let columns = grid.len();
        let rows = grid.first().map(|c| c.as_ref().len()).unwrap_or(0);
        if columns == 0 || rows == 0 {
            return Err(MatrixError::InsufficientData { expected: 1, actual: 0 });
        }

        let mut data = vec![0.0; MatrixError::element_count(rows, columns)?];
        for (x, column) in grid.iter().enumerate() {
            let column = column.as_ref();
            if column.len() < rows {
                return Err(MatrixError::InsufficientData {
                    expected: rows,
                    actual: column.len(),
                });
            }
            for (y, value) in column.iter().take(rows).enumerate() {
                data[y * columns + x] = *value;
            }
        }
        Ok(Self::from_parts(rows, columns, data))
    }

    /// Build from a list of rows; every row must be at least as long as the
    /// first one.
    pub fn from_rows<S: AsRef<[f64]>>(grid: &[S]) -> Result<Self> {
        let rows = grid.len();
        let columns = grid.first().map(|r| r.as_ref().len()).unwrap_or(0);
        if rows == 0 || columns == 0 {
            return Err(MatrixError::InsufficientData { expected: 1, actual: 0 });
        }

        let mut data = Vec::with_capacity(MatrixError::element_count(rows, columns)?);
        for row in grid {
            let row = row.as_ref();
            if row.len() < columns {
                return Err(MatrixError::InsufficientData {
                    expected: columns,
                    actual: row.len(),
                });
            }
            data.extend_from_slice(&row[..columns]);
        }
        Ok(Self::from_parts(rows, columns, data))
    }

    /// Copy any matrix into a dynamic one.
    pub fn from_matrix<M: MatrixLike + ?Sized>(source: &M) -> Self {
        let (rows, columns) = source.shape();
        let mut data = Vec::with_capacity(rows.checked_mul(columns).unwrap_or(0));
        for y in 0..rows {
            for x in 0..columns {
                data.push(source.element(x, y));
            }
        }
        Self::from_parts(rows, columns, data)
    }

    pub fn row_size(&self) -> usize {
        self.row_size
    }

    pub fn column_size(&self) -> usize {
        self.column_size
    }

    fn offset(&self, x: usize, y: usize) -> Result<usize> {
        if x >= self.column_size || y >= self.row_size {
            return Err(MatrixError::out_of_range(x, y, self.column_size, self.row_size));
        }
        Ok(y * self.column_size + x)
    }

    /// Element in column `x`, row `y`.
    pub fn get(&self, x: usize, y: usize) -> Result<f64> {
        self.offset(x, y).map(|i| self.data[i])
    }

    pub fn set(&mut self, x: usize, y: usize, value: f64) -> Result<()> {
        let i = self.offset(x, y)?;
        self.data[i] = value;
        Ok(())
    }

    pub fn row(&self, y: usize) -> Result<Vec<f64>> {
        if y >= self.row_size {
            return Err(MatrixError::out_of_range(0, y, self.column_size, self.row_size));
        }
        let start = y * self.column_size;
        Ok(self.data[start..start + self.column_size].to_vec())
    }

    pub fn column(&self, x: usize) -> Result<Vec<f64>> {
        if x >= self.column_size {
            return Err(MatrixError::out_of_range(x, 0, self.column_size, self.row_size));
        }
        Ok((0..self.row_size).map(|y| self.data[y * self.column_size + x]).collect())
    }

    /// Row-major view of the backing storage.
    pub fn as_slice(&self) -> &[f64] {
        &self.data
    }

    /// Element-wise sum; shapes must match exactly.
    pub fn add<M: MatrixLike + ?Sized>(&self, other: &M) -> Result<Matrix> {
        capability::add(self, other)
    }

    /// Element-wise difference; shapes must match exactly.
    pub fn subtract<M: MatrixLike + ?Sized>(&self, other: &M) -> Result<Matrix> {
        capability::subtract(self, other)
    }

    /// Matrix product `self * other`; requires
    /// `other.row_size() == self.column_size()`.
    pub fn multiply<M: MatrixLike + ?Sized>(&self, other: &M) -> Result<Matrix> {
        capability::multiply(self, other)
    }

    pub fn scale(&self, scalar: f64) -> Matrix {
        Self::from_parts(
            self.row_size,
            self.column_size,
            self.data.iter().map(|v| v * scalar).collect(),
        )
    }

    pub fn transpose(&self) -> Matrix {
        let mut data = Vec::with_capacity(self.data.len());
        for x in 0..self.column_size {
            for y in 0..self.row_size {
                data.push(self.data[y * self.column_size + x]);
            }
        }
        Self::from_parts(self.column_size, self.row_size, data)
    }

    pub fn approx_eq<M: MatrixLike + ?Sized>(&self, other: &M, epsilon: f64) -> bool {
        capability::approx_equals(self, other, epsilon)
    }
}

impl MatrixLike for Matrix {
    fn row_size(&self) -> usize {
        self.row_size
    }

    fn column_size(&self) -> usize {
        self.column_size
    }

    fn element(&self, x: usize, y: usize) -> f64 {
        self.data[y * self.column_size + x]
    }
}

impl PartialEq for Matrix {
    fn eq(&self, other: &Self) -> bool {
        capability::equals(self, other)
    }
}

impl Index<(usize, usize)> for Matrix {
    type Output = f64;

    fn index(&self, (x, y): (usize, usize)) -> &f64 {
        match self.offset(x, y) {
            Ok(i) => &self.data[i],
            Err(err) => panic!("{}", err),
        }
    }
}

impl IndexMut<(usize, usize)> for Matrix {
    fn index_mut(&mut self, (x, y): (usize, usize)) -> &mut f64 {
        match self.offset(x, y) {
            Ok(i) => &mut self.data[i],
            Err(err) => panic!("{}", err),
        }
    }
}

impl<'a, M: MatrixLike> Add<&'a M> for &Matrix {
    type Output = Result<Matrix>;

    fn add(self, other: &'a M) -> Result<Matrix> {
        capability::add(self, other)
    }
}

impl<'a, M: MatrixLike> Sub<&'a M> for &Matrix {
    type Output = Result<Matrix>;

    fn sub(self, other: &'a M) -> Result<Matrix> {
        capability::subtract(self, other)
    }
}

impl<'a, M: MatrixLike> Mul<&'a M> for &Matrix {
    type Output = Result<Matrix>;

    fn mul(self, other: &'a M) -> Result<Matrix> {
        capability::multiply(self, other)
    }
}

impl Mul<f64> for &Matrix {
    type Output = Matrix;

    fn mul(self, scalar: f64) -> Matrix {
        self.scale(scalar)
    }
}

impl Mul<f64> for Matrix {
    type Output = Matrix;

    fn mul(self, scalar: f64) -> Matrix {
        self.scale(scalar)
    }
}

/// Writes `rows` lines of `[a, b, ...]`, forwarding the formatter's flags
/// (precision, width, sign) to every element.
pub(crate) fn write_rows<E: fmt::Display>(
    f: &mut fmt::Formatter<'_>,
    rows: usize,
    columns: usize,
    element: impl Fn(usize, usize) -> E,
) -> fmt::Result {
    for y in 0..rows {
        if y > 0 {
            f.write_str("\n")?;
        }
        f.write_str("[")?;
        for x in 0..columns {
            if x > 0 {
                f.write_str(", ")?;
            }
            fmt::Display::fmt(&element(x, y), f)?;
        }
        f.write_str("]")?;
    }
    Ok(())
}

impl fmt::Display for Matrix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_rows(f, self.row_size, self.column_size, |x, y| self.element(x, y))
    }
}
